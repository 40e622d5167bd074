//! Conformance testing harness for bytestr.
//!
//! This crate provides:
//! - Fixtures: JSON case sets describing inputs and expected outputs
//! - Execution: dispatch a fixture case to the byte-string operations
//! - Verification: run fixture sets under strict or hardened mode
//! - Reports: markdown and JSON summaries of a verification run
//! - Structured logging: JSONL records for every case, plus validation

#![forbid(unsafe_code)]

pub mod diff;
pub mod error;
pub mod exec;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
