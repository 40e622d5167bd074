//! Runtime mode configuration.
//!
//! The runtime mode is set via the `BYTESTR_MODE` environment variable:
//! - `strict` (default): contract violations (missing terminator, undersized
//!   destination) are returned to the caller as errors. Nothing is rewritten.
//! - `hardened`: the membrane heals the violation deterministically (treat the
//!   buffer end as the terminator, truncate an over-long copy) and records it.
//! - `off`: no validation. Only reachable through the API, for benchmarks.

use std::sync::atomic::{AtomicU8, Ordering};

/// Environment variable consulted by [`safety_level`].
pub const MODE_ENV_VAR: &str = "BYTESTR_MODE";

/// Runtime operating mode for the membrane.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SafetyLevel {
    /// Contract violations are reported, never repaired.
    #[default]
    Strict,
    /// Contract violations are healed and recorded.
    Hardened,
    /// No validation. Pure passthrough for benchmarking baseline.
    Off,
}

impl SafetyLevel {
    /// Parse from string (case-insensitive). Unknown values map to `Strict`.
    #[must_use]
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" | "default" => Self::Strict,
            "hardened" | "repair" | "heal" => Self::Hardened,
            "off" | "none" | "disabled" => Self::Off,
            _ => Self::Strict,
        }
    }

    /// Returns true if the membrane should apply healing actions.
    #[must_use]
    pub const fn heals_enabled(self) -> bool {
        matches!(self, Self::Hardened)
    }

    /// Returns true if validation is active.
    #[must_use]
    pub const fn validation_enabled(self) -> bool {
        !matches!(self, Self::Off)
    }

    /// Canonical lowercase name, as used in logs and fixtures.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Hardened => "hardened",
            Self::Off => "off",
        }
    }
}

impl std::fmt::Display for SafetyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Atomic cache: 0=unresolved, 1=Strict, 2=Hardened, 3=Off.
static CACHED_LEVEL: AtomicU8 = AtomicU8::new(0);

const LEVEL_UNRESOLVED: u8 = 0;
const LEVEL_STRICT: u8 = 1;
const LEVEL_HARDENED: u8 = 2;
const LEVEL_OFF: u8 = 3;

fn parse_runtime_mode_env(raw: &str) -> SafetyLevel {
    match SafetyLevel::from_str_loose(raw) {
        // Environment contract is strict|hardened only.
        SafetyLevel::Off => SafetyLevel::Strict,
        level => level,
    }
}

fn level_to_u8(level: SafetyLevel) -> u8 {
    match level {
        SafetyLevel::Strict => LEVEL_STRICT,
        SafetyLevel::Hardened => LEVEL_HARDENED,
        SafetyLevel::Off => LEVEL_OFF,
    }
}

fn u8_to_level(v: u8) -> SafetyLevel {
    match v {
        LEVEL_HARDENED => SafetyLevel::Hardened,
        LEVEL_OFF => SafetyLevel::Off,
        _ => SafetyLevel::Strict,
    }
}

/// Get the configured safety level (reads the env var on first call, caches
/// thereafter).
///
/// Two threads racing on the first call may both read the environment; they
/// read the same value, so the last store wins harmlessly.
#[must_use]
pub fn safety_level() -> SafetyLevel {
    let cached = CACHED_LEVEL.load(Ordering::Acquire);
    if cached != LEVEL_UNRESOLVED {
        return u8_to_level(cached);
    }

    let level = std::env::var(MODE_ENV_VAR)
        .map(|v| parse_runtime_mode_env(&v))
        .unwrap_or_default();
    CACHED_LEVEL.store(level_to_u8(level), Ordering::Release);
    level
}
