//! Onboarding error types.

use thiserror::Error;

use super::OnboardingStep;
use crate::domain::foundation::{DomainError, ErrorCode};

/// Errors raised while building or walking a step sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    #[error("Step sequence must contain at least one step")]
    EmptySequence,

    #[error("Step '{0}' appears more than once in the sequence")]
    DuplicateStep(String),

    #[error("Step '{0}' is not part of this sequence")]
    UnknownStep(String),
}

/// Errors raised by the onboarding flow itself.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OnboardingError {
    #[error("Cannot mint from step '{current}', onboarding is not finished")]
    NotReadyToMint { current: OnboardingStep },

    #[error(transparent)]
    Sequence(#[from] SequenceError),
}

impl From<SequenceError> for DomainError {
    fn from(err: SequenceError) -> Self {
        let code = match err {
            SequenceError::UnknownStep(_) => ErrorCode::UnknownStep,
            SequenceError::EmptySequence | SequenceError::DuplicateStep(_) => {
                ErrorCode::InvalidFormat
            }
        };
        DomainError::new(code, err.to_string())
    }
}

impl From<OnboardingError> for DomainError {
    fn from(err: OnboardingError) -> Self {
        match err {
            OnboardingError::NotReadyToMint { current } => {
                DomainError::new(ErrorCode::NotReadyToMint, err.to_string())
                    .with_detail("current_step", current.slug())
            }
            OnboardingError::Sequence(inner) => inner.into(),
        }
    }
}
