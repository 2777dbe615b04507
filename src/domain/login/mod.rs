//! Login module - Officer credentials captured by the login form.
//!
//! Nothing is authenticated. The only rule is that both text fields
//! are filled in before the form is accepted.

use std::fmt;
use thiserror::Error;

use crate::domain::foundation::ValidationError;

/// Errors raised when the login form is submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Credentials as typed into the login form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    badge_id: String,
    password: String,
    remember: bool,
}

impl Credentials {
    /// Validates and captures the form fields.
    ///
    /// # Errors
    ///
    /// - `EmptyField("badge_id")` if the badge id is blank
    /// - `EmptyField("password")` if the password is blank
    pub fn new(
        badge_id: impl Into<String>,
        password: impl Into<String>,
        remember: bool,
    ) -> Result<Self, LoginError> {
        let badge_id = badge_id.into();
        let password = password.into();

        if badge_id.trim().is_empty() {
            return Err(ValidationError::empty_field("badge_id").into());
        }
        if password.trim().is_empty() {
            return Err(ValidationError::empty_field("password").into());
        }

        Ok(Self {
            badge_id: badge_id.trim().to_string(),
            password,
            remember,
        })
    }

    pub fn badge_id(&self) -> &str {
        &self.badge_id
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn remember(&self) -> bool {
        self.remember
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("badge_id", &self.badge_id)
            .field("password", &"[REDACTED]")
            .field("remember", &self.remember)
            .finish()
    }
}
