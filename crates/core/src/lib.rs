//! Domain types, error taxonomy, and the assessment scoring engine.
//!
//! This crate is pure: no database access, no HTTP. The scoring engine in
//! [`scoring`] is a deterministic function from answers to a classification;
//! persistence of the outcome is the caller's concern.

pub mod error;
pub mod scoring;
pub mod types;
