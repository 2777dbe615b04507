//! Simulation configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Longest simulated wait accepted, in milliseconds.
pub const MAX_DELAY_MS: u64 = 60_000;

/// Timing and randomness of the simulated flows
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SimulationConfig {
    /// "Thinking" time before the twin replies
    #[serde(default = "default_reply_delay_ms")]
    pub reply_delay_ms: u64,

    /// Wait before a mint redirects to the dashboard
    #[serde(default = "default_mint_delay_ms")]
    pub mint_delay_ms: u64,

    /// Fixed seed for reply selection; random when unset
    #[serde(default)]
    pub rng_seed: Option<u64>,
}

impl SimulationConfig {
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms)
    }

    pub fn mint_delay(&self) -> Duration {
        Duration::from_millis(self.mint_delay_ms)
    }

    /// Validate simulation configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_delay("reply_delay_ms", self.reply_delay_ms)?;
        check_delay("mint_delay_ms", self.mint_delay_ms)?;
        Ok(())
    }
}

fn check_delay(name: &'static str, actual_ms: u64) -> Result<(), ValidationError> {
    if actual_ms > MAX_DELAY_MS {
        return Err(ValidationError::DelayTooLong {
            name,
            actual_ms,
            max_ms: MAX_DELAY_MS,
        });
    }
    Ok(())
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            reply_delay_ms: default_reply_delay_ms(),
            mint_delay_ms: default_mint_delay_ms(),
            rng_seed: None,
        }
    }
}

fn default_reply_delay_ms() -> u64 {
    1500
}

fn default_mint_delay_ms() -> u64 {
    1500
}
