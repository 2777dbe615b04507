//! Integration tests for the onboarding wizard.
//!
//! Walks the wizard the way the page does: Continue buttons move forward,
//! Back buttons move back, and the final button mints the twin and
//! redirects to the dashboard.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;

use cryptex_twin::adapters::RecordingDelay;
use cryptex_twin::application::MintTwinHandler;
use cryptex_twin::domain::foundation::{DomainError, ErrorCode};
use cryptex_twin::domain::navigation::Route;
use cryptex_twin::domain::onboarding::{
    OnboardingError, OnboardingProgress, OnboardingStep, SequenceError, StepSequence,
};

// =============================================================================
// Test Infrastructure
// =============================================================================

fn mint_handler(delay: &RecordingDelay) -> MintTwinHandler {
    MintTwinHandler::new(Arc::new(delay.clone()), Duration::from_millis(1500))
}

fn percents_along_the_way(progress: &mut OnboardingProgress) -> Vec<u8> {
    let mut seen = vec![progress.percent_complete().value()];
    while !progress.is_complete() {
        progress.advance();
        seen.push(progress.percent_complete().value());
    }
    seen
}

// =============================================================================
// Walking the wizard
// =============================================================================

#[tokio::test]
async fn full_walkthrough_ends_on_dashboard() {
    let delay = RecordingDelay::new();
    let handler = mint_handler(&delay);
    let mut progress = OnboardingProgress::start();

    assert_eq!(percents_along_the_way(&mut progress), vec![0, 20, 40, 60, 80, 100]);
    assert_eq!(progress.current_step(), &OnboardingStep::Mint);

    let receipt = handler.handle(&progress).await.unwrap();

    assert_eq!(receipt.redirect, Route::Dashboard);
    assert_eq!(delay.waits(), vec![Duration::from_millis(1500)]);
}

#[test]
fn back_buttons_undo_continue_buttons() {
    let mut progress = OnboardingProgress::start();
    progress.advance();
    progress.advance();
    progress.advance();
    assert_eq!(progress.current_step(), &OnboardingStep::Upload);
    assert_eq!(progress.percent_complete().value(), 60);

    progress.back();
    assert_eq!(progress.current_step(), &OnboardingStep::Personality);
    assert_eq!(progress.percent_complete().value(), 40);

    progress.back();
    progress.back();
    progress.back();
    assert_eq!(progress.current_step(), &OnboardingStep::Welcome);
    assert_eq!(progress.percent_complete().value(), 0);
}

#[test]
fn advancing_from_upload_reaches_review() {
    let sequence = StepSequence::onboarding();
    assert_eq!(
        sequence.advance(&OnboardingStep::Upload),
        Ok(OnboardingStep::Review)
    );

    let progress = OnboardingProgress::resume_at(sequence, &OnboardingStep::Review).unwrap();
    assert_eq!(progress.percent_complete().value(), 80);
}

#[test]
fn snapshot_serializes_for_the_progress_bar() {
    let mut progress = OnboardingProgress::start();
    progress.advance();

    let value = serde_json::to_value(progress.snapshot()).unwrap();

    assert_eq!(
        value,
        json!({
            "current_step": "connect-wallet",
            "step_number": 2,
            "total_steps": 6,
            "percent_complete": 20
        })
    );
}

// =============================================================================
// Failure paths
// =============================================================================

#[tokio::test]
async fn minting_early_maps_to_not_ready_error_code() {
    let delay = RecordingDelay::new();
    let progress = OnboardingProgress::resume_at(
        StepSequence::onboarding(),
        &OnboardingStep::Review,
    )
    .unwrap();

    let err = mint_handler(&delay).handle(&progress).await.unwrap_err();
    let domain: DomainError = err.into();

    assert_eq!(domain.code, ErrorCode::NotReadyToMint);
    assert!(delay.waits().is_empty());
}

#[test]
fn custom_sequences_reject_foreign_steps() {
    let sequence = StepSequence::new(vec!["intro", "outro"]).unwrap();
    let err = OnboardingProgress::resume_at(sequence, &"middle").unwrap_err();

    assert_eq!(err, SequenceError::UnknownStep("middle".to_string()));
    assert_eq!(
        OnboardingError::from(err.clone()).to_string(),
        err.to_string()
    );
}
