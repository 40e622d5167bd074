//! Self-healing policy engine.
//!
//! When a caller hands the byte-string layer a buffer that breaks its
//! contract, hardened mode applies a deterministic healing action instead of
//! failing. Every action is counted, and the most recent ones are kept for
//! diagnostics.

use std::cell::Cell;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;

/// Number of recent actions retained by [`HealingPolicy::recent`].
pub const RECENT_CAPACITY: usize = 64;

thread_local! {
    static THREAD_LAST_ACTION: Cell<Option<HealingAction>> = const { Cell::new(None) };
}

/// Take the last healing action recorded on the calling thread, clearing it.
///
/// Unlike [`HealingPolicy::recent`], this is not affected by other threads
/// recording at the same time.
#[must_use]
pub fn take_thread_last_action() -> Option<HealingAction> {
    THREAD_LAST_ACTION.with(Cell::take)
}

/// Actions the membrane can take to heal an unsafe operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealingAction {
    /// No terminator was found; the buffer end was used as the terminator.
    TruncateAtBufferEnd { scanned: usize },
    /// Destination too small; output truncated and NUL-terminated.
    TruncateWithNull { requested: usize, truncated: usize },
    /// Return a safe default value instead of performing the operation.
    ReturnSafeDefault,
    /// No healing needed.
    None,
}

impl HealingAction {
    /// Returns true if this action represents an actual healing (not None).
    #[must_use]
    pub const fn is_heal(&self) -> bool {
        !matches!(self, Self::None)
    }

    /// Stable label for logs.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::TruncateAtBufferEnd { .. } => "truncate_at_buffer_end",
            Self::TruncateWithNull { .. } => "truncate_with_null",
            Self::ReturnSafeDefault => "return_safe_default",
            Self::None => "none",
        }
    }
}

/// Policy engine that decides which healing action to apply.
pub struct HealingPolicy {
    /// Total heals applied.
    pub total_heals: AtomicU64,
    /// Unterminated buffers accepted up to their end.
    pub buffer_end_truncations: AtomicU64,
    /// Null truncations applied.
    pub null_truncations: AtomicU64,
    /// Safe defaults returned.
    pub safe_defaults: AtomicU64,
    recent: Mutex<VecDeque<HealingAction>>,
}

impl HealingPolicy {
    /// Create a new policy with zeroed counters.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total_heals: AtomicU64::new(0),
            buffer_end_truncations: AtomicU64::new(0),
            null_truncations: AtomicU64::new(0),
            safe_defaults: AtomicU64::new(0),
            recent: parking_lot::const_mutex(VecDeque::new()),
        }
    }

    /// Record a healing action.
    pub fn record(&self, action: &HealingAction) {
        if !action.is_heal() {
            return;
        }
        self.total_heals.fetch_add(1, Ordering::Relaxed);

        match action {
            HealingAction::TruncateAtBufferEnd { .. } => {
                self.buffer_end_truncations.fetch_add(1, Ordering::Relaxed);
            }
            HealingAction::TruncateWithNull { .. } => {
                self.null_truncations.fetch_add(1, Ordering::Relaxed);
            }
            HealingAction::ReturnSafeDefault => {
                self.safe_defaults.fetch_add(1, Ordering::Relaxed);
            }
            HealingAction::None => {}
        }

        THREAD_LAST_ACTION.with(|last| last.set(Some(*action)));

        let mut recent = self.recent.lock();
        if recent.len() == RECENT_CAPACITY {
            recent.pop_front();
        }
        recent.push_back(*action);
    }

    /// Snapshot of the most recent healing actions, oldest first.
    #[must_use]
    pub fn recent(&self) -> Vec<HealingAction> {
        self.recent.lock().iter().copied().collect()
    }

    /// Decide healing for a buffer of `len` bytes that holds no terminator.
    #[must_use]
    pub fn heal_unterminated(&self, len: usize) -> HealingAction {
        HealingAction::TruncateAtBufferEnd { scanned: len }
    }

    /// Decide healing for a string copy into a destination of `dst_len` units.
    #[must_use]
    pub fn heal_string_bounds(&self, src_len: usize, dst_len: usize) -> HealingAction {
        if dst_len == 0 {
            return HealingAction::ReturnSafeDefault;
        }
        if src_len >= dst_len {
            HealingAction::TruncateWithNull {
                requested: src_len,
                truncated: dst_len - 1, // leave room for null
            }
        } else {
            HealingAction::None
        }
    }
}

impl Default for HealingPolicy {
    fn default() -> Self {
        Self::new()
    }
}

/// Global healing policy instance.
static GLOBAL_POLICY: HealingPolicy = HealingPolicy::new();

/// Access the global healing policy.
#[must_use]
pub fn global_healing_policy() -> &'static HealingPolicy {
    &GLOBAL_POLICY
}
