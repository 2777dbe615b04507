//! Delay adapters.

mod recording;
mod tokio_delay;

pub use recording::RecordingDelay;
pub use tokio_delay::TokioDelay;
