//! Login form handlers.

mod submit_login;

pub use submit_login::{LoginOutcome, SubmitLoginCommand, SubmitLoginHandler};
