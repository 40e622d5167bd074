//! Error type for the checked entry points.

use thiserror::Error;

/// Contract violations and resource failures reported by [`crate::checked`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StrError {
    #[error("byte string of {len} bytes has no NUL terminator")]
    Unterminated { len: usize },
    #[error("destination holds {available} bytes but {needed} are needed (content + NUL)")]
    DestinationTooSmall { needed: usize, available: usize },
    #[error("failed to allocate {requested} bytes")]
    AllocationFailed { requested: usize },
}

impl StrError {
    /// Stable snake_case code, used in fixtures and logs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Unterminated { .. } => "unterminated",
            Self::DestinationTooSmall { .. } => "destination_too_small",
            Self::AllocationFailed { .. } => "allocation_failed",
        }
    }
}
