//! Delay Port - Simulated latency.
//!
//! The chat reply and the mint transaction both wait before completing.
//! Routing the wait through a port lets tests observe the requested
//! duration without sleeping.

use async_trait::async_trait;
use std::time::Duration;

/// Port for waiting a fixed amount of time.
///
/// A wait always completes; there is no cancellation or timeout.
#[async_trait]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}
