//! MintTwinHandler - Final step of the onboarding wizard.
//!
//! Minting is simulated: the handler waits the configured delay and hands
//! back a receipt pointing at the dashboard. Nothing touches a wallet.

use std::sync::Arc;
use std::time::Duration;

use crate::adapters::TokioDelay;
use crate::config::SimulationConfig;
use crate::domain::foundation::Timestamp;
use crate::domain::navigation::Route;
use crate::domain::onboarding::{OnboardingError, OnboardingProgress, OnboardingStep};
use crate::ports::Delay;

/// Receipt returned once the simulated mint finishes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MintReceipt {
    /// Where the wizard sends the user next.
    pub redirect: Route,
    pub minted_at: Timestamp,
}

/// Handler for the "Mint Twin" button.
pub struct MintTwinHandler {
    delay: Arc<dyn Delay>,
    mint_delay: Duration,
}

impl MintTwinHandler {
    pub fn new(delay: Arc<dyn Delay>, mint_delay: Duration) -> Self {
        Self { delay, mint_delay }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(Arc::new(TokioDelay), config.mint_delay())
    }

    /// Runs the simulated mint.
    ///
    /// # Errors
    ///
    /// - `NotReadyToMint` unless the wizard is on its final step
    pub async fn handle(
        &self,
        progress: &OnboardingProgress<OnboardingStep>,
    ) -> Result<MintReceipt, OnboardingError> {
        if !progress.is_complete() {
            let current = *progress.current_step();
            tracing::warn!(current_step = %current, "Mint requested before final step");
            return Err(OnboardingError::NotReadyToMint { current });
        }

        tracing::debug!(delay_ms = self.mint_delay.as_millis() as u64, "Minting twin");
        self.delay.wait(self.mint_delay).await;

        let receipt = MintReceipt {
            redirect: Route::Dashboard,
            minted_at: Timestamp::now(),
        };
        tracing::info!(redirect = %receipt.redirect, "Twin minted");
        Ok(receipt)
    }
}
