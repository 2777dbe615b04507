//! SubmitLoginHandler - Accepts the officer login form.
//!
//! No credential is checked against anything. A form with both fields
//! filled in is accepted and the user is sent to the home page.

use crate::domain::login::{Credentials, LoginError};
use crate::domain::navigation::Route;

/// Raw login form input.
#[derive(Clone)]
pub struct SubmitLoginCommand {
    pub badge_id: String,
    pub password: String,
    pub remember: bool,
}

impl std::fmt::Debug for SubmitLoginCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubmitLoginCommand")
            .field("badge_id", &self.badge_id)
            .field("password", &"[REDACTED]")
            .field("remember", &self.remember)
            .finish()
    }
}

/// Outcome of an accepted login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// Badge id with surrounding whitespace removed.
    pub badge_id: String,
    pub remember: bool,
    pub redirect: Route,
}

/// Handler for the login form's submit button.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubmitLoginHandler;

impl SubmitLoginHandler {
    pub fn new() -> Self {
        Self
    }

    /// # Errors
    ///
    /// - `Validation(EmptyField)` naming `badge_id` or `password` when blank
    pub fn handle(&self, cmd: SubmitLoginCommand) -> Result<LoginOutcome, LoginError> {
        let credentials =
            Credentials::new(cmd.badge_id, cmd.password, cmd.remember).map_err(|err| {
                tracing::warn!(error = %err, "Login form rejected");
                err
            })?;

        tracing::info!(
            badge_id = credentials.badge_id(),
            remember = credentials.remember(),
            "Officer signed in"
        );

        Ok(LoginOutcome {
            badge_id: credentials.badge_id().to_string(),
            remember: credentials.remember(),
            redirect: Route::Home,
        })
    }
}
