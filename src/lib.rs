//! Cryptex Twin - Digital twin companion platform
//!
//! This crate carries the behaviour behind the Cryptex Twin pages: the
//! onboarding wizard and its progress, the simulated twin chat, the mint
//! and login flows, the marketplace catalogue and the dashboard snapshot.
//! Every reply, delay and listing is simulated; nothing is persisted.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
