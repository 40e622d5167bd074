//! Byte-string operations.
//!
//! Re-implements a handful of `<string.h>` primitives as safe Rust over
//! NUL-terminated byte slices.

pub mod case;
pub mod reverse;
pub mod str;

pub use self::case::{is_alpha, is_numeric, to_lower, to_upper};
pub use self::reverse::{reverse_copy, reverse_in_place};
pub use self::str::{concat, copy, find, length, starts_with};
