//! Reversal: in place and as a freshly allocated copy.

use super::str::length;
use crate::owned::{ByteString, try_alloc};

/// Reverses the content of `s` in place.
///
/// Swaps bytes pairwise from both ends toward the centre. The terminator
/// and everything after it stay where they are.
pub fn reverse_in_place(s: &mut [u8]) {
    let len = length(s);
    if len < 2 {
        return;
    }
    let mut i = 0;
    let mut j = len - 1;
    while i < j {
        s.swap(i, j);
        i += 1;
        j -= 1;
    }
}

/// Returns a newly allocated copy of `s` with its content reversed.
///
/// Returns `None` if the allocation fails.
pub fn reverse_copy(s: &[u8]) -> Option<ByteString> {
    let len = length(s);
    let mut buf = try_alloc(len)?;
    buf.extend(s[..len].iter().rev());
    buf.push(0);
    Some(ByteString::from_vec_with_nul(buf))
}
