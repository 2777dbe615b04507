//! StepSequence - Ordered, fixed list of wizard steps.
//!
//! All ordering logic for the onboarding wizard goes through this type:
//! navigation, position lookups and the completion percentage derived
//! from a step's position.
//!
//! # Usage
//!
//! ```ignore
//! let seq = StepSequence::onboarding();
//!
//! let next = seq.advance(&OnboardingStep::Upload)?;    // Review
//! let same = seq.advance(&OnboardingStep::Mint)?;      // Mint (terminal)
//! let pct = seq.percent_at(&OnboardingStep::Review)?;  // 80%
//! ```

use std::fmt;

use super::{OnboardingStep, SequenceError};
use crate::domain::foundation::Percentage;

/// A non-empty sequence of distinct steps, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepSequence<S = OnboardingStep> {
    steps: Vec<S>,
}

impl StepSequence<OnboardingStep> {
    /// The six-step onboarding wizard.
    pub fn onboarding() -> Self {
        Self {
            steps: OnboardingStep::ORDER.to_vec(),
        }
    }
}

impl<S> StepSequence<S>
where
    S: Clone + PartialEq + fmt::Display,
{
    /// Builds a sequence from an ordered list of steps.
    ///
    /// # Errors
    ///
    /// - `EmptySequence` if `steps` is empty
    /// - `DuplicateStep` if any step appears twice
    pub fn new(steps: Vec<S>) -> Result<Self, SequenceError> {
        if steps.is_empty() {
            return Err(SequenceError::EmptySequence);
        }
        for (i, step) in steps.iter().enumerate() {
            if steps[..i].contains(step) {
                return Err(SequenceError::DuplicateStep(step.to_string()));
            }
        }
        Ok(Self { steps })
    }

    /// Returns the steps in order.
    pub fn steps(&self) -> &[S] {
        &self.steps
    }

    /// Returns the number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always false; a sequence holds at least one step.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Returns the first step.
    pub fn first(&self) -> &S {
        &self.steps[0]
    }

    /// Returns the last step.
    pub fn last(&self) -> &S {
        &self.steps[self.last_index()]
    }

    pub fn is_first(&self, step: &S) -> bool {
        step == self.first()
    }

    pub fn is_last(&self, step: &S) -> bool {
        step == self.last()
    }

    /// Returns the 0-based position of `step`.
    ///
    /// # Errors
    ///
    /// - `UnknownStep` if `step` is not in the sequence
    pub fn index_of(&self, step: &S) -> Result<usize, SequenceError> {
        self.steps
            .iter()
            .position(|s| s == step)
            .ok_or_else(|| SequenceError::UnknownStep(step.to_string()))
    }

    /// Returns the step after `current`, or `current` itself when it is last.
    ///
    /// # Errors
    ///
    /// - `UnknownStep` if `current` is not in the sequence
    pub fn advance(&self, current: &S) -> Result<S, SequenceError> {
        let idx = self.index_of(current)?;
        Ok(self.step_at(self.next_index(idx)).clone())
    }

    /// Returns the step before `current`, or `current` itself when it is first.
    ///
    /// # Errors
    ///
    /// - `UnknownStep` if `current` is not in the sequence
    pub fn back(&self, current: &S) -> Result<S, SequenceError> {
        let idx = self.index_of(current)?;
        Ok(self.step_at(self.previous_index(idx)).clone())
    }

    /// Completion percentage for a wizard sitting on `step`.
    ///
    /// # Errors
    ///
    /// - `UnknownStep` if `step` is not in the sequence
    pub fn percent_at(&self, step: &S) -> Result<Percentage, SequenceError> {
        let idx = self.index_of(step)?;
        Ok(self.percent_at_index(idx))
    }

    pub(crate) fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    pub(crate) fn step_at(&self, idx: usize) -> &S {
        &self.steps[idx.min(self.last_index())]
    }

    pub(crate) fn next_index(&self, idx: usize) -> usize {
        (idx + 1).min(self.last_index())
    }

    pub(crate) fn previous_index(&self, idx: usize) -> usize {
        idx.saturating_sub(1)
    }

    pub(crate) fn percent_at_index(&self, idx: usize) -> Percentage {
        Percentage::of_position(idx, self.last_index())
    }
}

impl Default for StepSequence<OnboardingStep> {
    fn default() -> Self {
        Self::onboarding()
    }
}
