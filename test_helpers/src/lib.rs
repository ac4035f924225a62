//! Test helpers shared across crates.
//!
//! This crate provides invocation recorders for asserting how often (and
//! with what) a callback ran, and serde round-trip shortcuts.

pub mod json;
pub mod recorder;
