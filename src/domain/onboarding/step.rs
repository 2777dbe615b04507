//! OnboardingStep enum representing the six wizard stages.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// The six stages a user walks through to create a twin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OnboardingStep {
    Welcome,
    ConnectWallet,
    Personality,
    Upload,
    Review,
    Mint,
}

impl OnboardingStep {
    /// Canonical wizard order.
    pub const ORDER: [OnboardingStep; 6] = [
        OnboardingStep::Welcome,
        OnboardingStep::ConnectWallet,
        OnboardingStep::Personality,
        OnboardingStep::Upload,
        OnboardingStep::Review,
        OnboardingStep::Mint,
    ];

    /// Returns the identifier used in URLs and serialized state.
    pub fn slug(&self) -> &'static str {
        match self {
            OnboardingStep::Welcome => "welcome",
            OnboardingStep::ConnectWallet => "connect-wallet",
            OnboardingStep::Personality => "personality",
            OnboardingStep::Upload => "upload",
            OnboardingStep::Review => "review",
            OnboardingStep::Mint => "mint",
        }
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for OnboardingStep {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ORDER
            .iter()
            .copied()
            .find(|step| step.slug() == s)
            .ok_or_else(|| ValidationError::invalid_format("step", format!("unknown step '{}'", s)))
    }
}
