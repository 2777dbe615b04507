//! OnboardingProgress - Where a user currently stands in the wizard.
//!
//! Only the position of the current step is stored. The completion
//! percentage is always computed from that position, so the two can
//! never disagree.

use serde::Serialize;
use std::fmt;

use super::{OnboardingStep, SequenceError, StepSequence};
use crate::domain::foundation::Percentage;

/// Progress through a fixed step sequence.
///
/// # Invariants
///
/// - the current step is always a member of the sequence
/// - `percent_complete()` is derived from the current step's index
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingProgress<S = OnboardingStep> {
    sequence: StepSequence<S>,
    current: usize,
}

impl OnboardingProgress<OnboardingStep> {
    /// Starts the six-step onboarding wizard at `welcome`.
    pub fn start() -> Self {
        Self::new(StepSequence::onboarding())
    }
}

impl<S> OnboardingProgress<S>
where
    S: Clone + PartialEq + fmt::Display,
{
    /// Starts at the first step of `sequence`.
    pub fn new(sequence: StepSequence<S>) -> Self {
        Self {
            sequence,
            current: 0,
        }
    }

    /// Resumes at `step`.
    ///
    /// # Errors
    ///
    /// - `UnknownStep` if `step` is not part of `sequence`
    pub fn resume_at(sequence: StepSequence<S>, step: &S) -> Result<Self, SequenceError> {
        let current = sequence.index_of(step)?;
        Ok(Self { sequence, current })
    }

    pub fn sequence(&self) -> &StepSequence<S> {
        &self.sequence
    }

    /// Returns the current step.
    pub fn current_step(&self) -> &S {
        self.sequence.step_at(self.current)
    }

    /// Returns the 0-based index of the current step.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Completion derived from the current index.
    pub fn percent_complete(&self) -> Percentage {
        self.sequence.percent_at_index(self.current)
    }

    /// True once the final step has been reached.
    pub fn is_complete(&self) -> bool {
        self.current == self.sequence.last_index()
    }

    /// Moves to the next step. A no-op on the final step.
    pub fn advance(&mut self) -> &S {
        self.current = self.sequence.next_index(self.current);
        self.current_step()
    }

    /// Moves to the previous step. A no-op on the first step.
    pub fn back(&mut self) -> &S {
        self.current = self.sequence.previous_index(self.current);
        self.current_step()
    }

    /// Serializable view of the current position.
    pub fn snapshot(&self) -> ProgressSnapshot<S> {
        ProgressSnapshot {
            current_step: self.current_step().clone(),
            step_number: self.current + 1,
            total_steps: self.sequence.len(),
            percent_complete: self.percent_complete(),
        }
    }
}

impl Default for OnboardingProgress<OnboardingStep> {
    fn default() -> Self {
        Self::start()
    }
}

/// Point-in-time view of onboarding progress.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressSnapshot<S> {
    pub current_step: S,
    pub step_number: usize,
    pub total_steps: usize,
    pub percent_complete: Percentage,
}
