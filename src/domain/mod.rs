//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `onboarding` - Wizard steps, step sequence and derived progress
//! - `chat` - Messages and the append-only transcript
//! - `login` - Login form credentials
//! - `marketplace` - Fixed catalogue of twin listings
//! - `dashboard` - Fixed training and memory snapshot
//! - `navigation` - Page routes

pub mod chat;
pub mod dashboard;
pub mod foundation;
pub mod login;
pub mod marketplace;
pub mod navigation;
pub mod onboarding;
