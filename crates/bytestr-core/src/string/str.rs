//! String operations: length, copy, find, starts_with, concat.
//!
//! These are safe Rust implementations operating on byte slices that represent
//! NUL-terminated strings. A NUL byte (`0x00`) marks the logical end of the
//! string; a slice without one ends at its last byte.

use crate::owned::{ByteString, try_alloc};

/// Returns the length of a NUL-terminated byte string (not counting the NUL).
///
/// Equivalent to C `strlen`. Scans `s` for the first `0x00` byte and returns
/// its index. If no NUL is found, returns the full slice length.
pub fn length(s: &[u8]) -> usize {
    s.iter().position(|&b| b == 0).unwrap_or(s.len())
}

/// Copies a NUL-terminated string from `src` into `dst`.
///
/// Equivalent to C `strcpy`. Copies the content of `src` followed by a NUL
/// terminator. Returns the number of bytes written (content + NUL).
///
/// # Panics
///
/// Panics if `dst` is too small to hold the source string plus NUL. Use
/// [`crate::checked::copy`] to get an error or a truncated copy instead.
pub fn copy(src: &[u8], dst: &mut [u8]) -> usize {
    let src_len = length(src);
    assert!(
        dst.len() > src_len,
        "copy: destination buffer too small ({} bytes for {} byte string + NUL)",
        dst.len(),
        src_len
    );
    dst[..src_len].copy_from_slice(&src[..src_len]);
    dst[src_len] = 0;
    src_len + 1
}

/// Locates the first occurrence of `c` in the NUL-terminated string `s`.
///
/// Returns the lowest index of a byte equal to `c`, or `None` if `c` does not
/// occur before the terminator. The terminator is not content, so searching
/// for `0` always yields `None`.
pub fn find(s: &[u8], c: u8) -> Option<usize> {
    if c == 0 {
        return None;
    }
    let len = length(s);
    s[..len].iter().position(|&b| b == c)
}

/// Returns `true` if every byte of `prefix` matches the leading bytes of `s`.
///
/// A prefix longer than `s` never matches; `s` is not read past its own
/// terminator. The empty prefix matches every string.
pub fn starts_with(s: &[u8], prefix: &[u8]) -> bool {
    let s_len = length(s);
    let p_len = length(prefix);
    if p_len > s_len {
        return false;
    }
    s[..p_len] == prefix[..p_len]
}

/// Concatenates two NUL-terminated strings into a newly allocated one.
///
/// The result holds the content of `a`, then the content of `b`, then one
/// terminator, in a buffer of exactly `length(a) + length(b) + 1` bytes.
/// Returns `None` if the allocation fails.
pub fn concat(a: &[u8], b: &[u8]) -> Option<ByteString> {
    let a_len = length(a);
    let b_len = length(b);
    let mut buf = try_alloc(a_len.checked_add(b_len)?)?;
    buf.extend_from_slice(&a[..a_len]);
    buf.extend_from_slice(&b[..b_len]);
    buf.push(0);
    Some(ByteString::from_vec_with_nul(buf))
}
