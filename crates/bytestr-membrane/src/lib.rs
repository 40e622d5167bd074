//! # bytestr-membrane
//!
//! Contract checking between callers and the byte-string primitives.
//!
//! A byte string is only well formed when it carries a NUL terminator inside
//! its buffer, and a copy destination is only valid when it can hold the
//! content plus that terminator. The membrane decides what happens when a
//! caller breaks one of those rules:
//!
//! - **strict** (default): the violation is reported back to the caller.
//! - **hardened**: a deterministic healing action is applied and recorded.
//! - **off**: no checking; used by benchmarks as a baseline.

#![forbid(unsafe_code)]

pub mod config;
pub mod heal;

pub use config::{SafetyLevel, safety_level};
pub use heal::{HealingAction, HealingPolicy, global_healing_policy, take_thread_last_action};
