//! Delay backed by the tokio timer.

use async_trait::async_trait;
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::Delay;

/// Waits in real time.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        if !duration.is_zero() {
            sleep(duration).await;
        }
    }
}
