//! Onboarding module - The twin creation wizard.
//!
//! The wizard walks a fixed, ordered list of steps
//! (welcome → connect-wallet → personality → upload → review → mint).
//! Progress is a position in that list; the percentage shown in the
//! progress bar is computed from it.

mod errors;
mod progress;
mod sequence;
mod step;

pub use errors::{OnboardingError, SequenceError};
pub use progress::{OnboardingProgress, ProgressSnapshot};
pub use sequence::StepSequence;
pub use step::OnboardingStep;
