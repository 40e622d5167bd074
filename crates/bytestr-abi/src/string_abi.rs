//! ABI layer for the byte-string functions.
//!
//! Each function is an `extern "C"` entry point that:
//! 1. Answers null arguments with a safe default
//! 2. Borrows its arguments as NUL-terminated slices
//! 3. Delegates to `bytestr-core`

use std::ffi::{c_char, c_int};
use std::ptr;

use bytestr_core as core_str;

use crate::util::{c_str_with_nul, c_str_with_nul_mut, record_null_default};

/// Allocate a zeroed buffer of `content_len + 1` bytes with the C allocator.
///
/// Returns `None` on overflow or allocation failure.
unsafe fn alloc_c_string<'a>(content_len: usize) -> Option<&'a mut [u8]> {
    let total = content_len.checked_add(1)?;
    // SAFETY: calloc either fails (null) or returns `total` zeroed bytes.
    let p = unsafe { libc::calloc(total, 1) }.cast::<u8>();
    if p.is_null() {
        return None;
    }
    // SAFETY: non-null, zero-initialized, exclusively owned allocation.
    Some(unsafe { std::slice::from_raw_parts_mut(p, total) })
}

fn as_c_bool(v: bool) -> c_int {
    c_int::from(v)
}

// ---------------------------------------------------------------------------
// length / copy
// ---------------------------------------------------------------------------

/// Length of a NUL-terminated string. Null yields 0.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytestr_length(s: *const c_char) -> usize {
    if s.is_null() {
        record_null_default();
        return 0;
    }
    // SAFETY: non-null; caller guarantees termination.
    core_str::length(unsafe { c_str_with_nul(s) })
}

/// Copy `src` (terminator included) into `dst`. Returns `dst`.
///
/// `dst` must be writable for `bytestr_length(src) + 1` bytes. Null
/// arguments leave `dst` untouched.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytestr_copy(src: *const c_char, dst: *mut c_char) -> *mut c_char {
    if src.is_null() || dst.is_null() {
        record_null_default();
        return dst;
    }
    // SAFETY: non-null; caller guarantees termination.
    let src = unsafe { c_str_with_nul(src) };
    // SAFETY: caller guarantees `dst` is writable for `src.len()` bytes.
    let out = unsafe { std::slice::from_raw_parts_mut(dst.cast::<u8>(), src.len()) };
    core_str::copy(src, out);
    dst
}

// ---------------------------------------------------------------------------
// reverse
// ---------------------------------------------------------------------------

/// Reverse a string in place. Null is a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytestr_reverse_in_place(s: *mut c_char) {
    if s.is_null() {
        record_null_default();
        return;
    }
    // SAFETY: non-null, writable, terminated per contract.
    core_str::reverse_in_place(unsafe { c_str_with_nul_mut(s) });
}

/// Newly allocated reversed copy, or null on allocation failure.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytestr_reverse_copy(s: *const c_char) -> *mut c_char {
    if s.is_null() {
        record_null_default();
        return ptr::null_mut();
    }
    // SAFETY: non-null; caller guarantees termination.
    let src = unsafe { c_str_with_nul(s) };
    let content_len = src.len() - 1;
    // SAFETY: fresh allocation, released by the caller via bytestr_free.
    let Some(out) = (unsafe { alloc_c_string(content_len) }) else {
        return ptr::null_mut();
    };
    core_str::copy(src, out);
    core_str::reverse_in_place(out);
    out.as_mut_ptr().cast::<c_char>()
}

// ---------------------------------------------------------------------------
// find
// ---------------------------------------------------------------------------

/// Index of the first `c` in `s`, or -1 when absent (or `s` is null).
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytestr_find(s: *const c_char, c: c_char) -> isize {
    if s.is_null() {
        record_null_default();
        return -1;
    }
    // SAFETY: non-null; caller guarantees termination.
    match core_str::find(unsafe { c_str_with_nul(s) }, c as u8) {
        Some(i) => i as isize,
        None => -1,
    }
}

// ---------------------------------------------------------------------------
// case conversion / classification
// ---------------------------------------------------------------------------

/// Uppercase ASCII letters in place. Null is a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytestr_to_upper(s: *mut c_char) {
    if s.is_null() {
        record_null_default();
        return;
    }
    // SAFETY: non-null, writable, terminated per contract.
    core_str::to_upper(unsafe { c_str_with_nul_mut(s) });
}

/// Lowercase ASCII letters in place. Null is a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytestr_to_lower(s: *mut c_char) {
    if s.is_null() {
        record_null_default();
        return;
    }
    // SAFETY: non-null, writable, terminated per contract.
    core_str::to_lower(unsafe { c_str_with_nul_mut(s) });
}

/// 1 if every byte is an ASCII digit (the empty string included), else 0.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytestr_is_numeric(s: *const c_char) -> c_int {
    if s.is_null() {
        record_null_default();
        return 0;
    }
    // SAFETY: non-null; caller guarantees termination.
    as_c_bool(core_str::is_numeric(unsafe { c_str_with_nul(s) }))
}

/// 1 if every byte is an ASCII letter (the empty string included), else 0.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytestr_is_alpha(s: *const c_char) -> c_int {
    if s.is_null() {
        record_null_default();
        return 0;
    }
    // SAFETY: non-null; caller guarantees termination.
    as_c_bool(core_str::is_alpha(unsafe { c_str_with_nul(s) }))
}

// ---------------------------------------------------------------------------
// concat / starts_with
// ---------------------------------------------------------------------------

/// Newly allocated `a` followed by `b`, or null on allocation failure or a
/// null argument.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytestr_concat(a: *const c_char, b: *const c_char) -> *mut c_char {
    if a.is_null() || b.is_null() {
        record_null_default();
        return ptr::null_mut();
    }
    // SAFETY: non-null; caller guarantees termination.
    let (a, b) = unsafe { (c_str_with_nul(a), c_str_with_nul(b)) };
    let a_len = a.len() - 1;
    let Some(content_len) = a_len.checked_add(b.len() - 1) else {
        return ptr::null_mut();
    };
    // SAFETY: fresh allocation, released by the caller via bytestr_free.
    let Some(out) = (unsafe { alloc_c_string(content_len) }) else {
        return ptr::null_mut();
    };
    core_str::copy(a, out);
    core_str::copy(b, &mut out[a_len..]);
    out.as_mut_ptr().cast::<c_char>()
}

/// 1 if `s` begins with `prefix`, else 0. A longer prefix never matches.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytestr_starts_with(s: *const c_char, prefix: *const c_char) -> c_int {
    if s.is_null() || prefix.is_null() {
        record_null_default();
        return 0;
    }
    // SAFETY: non-null; caller guarantees termination.
    let (s, prefix) = unsafe { (c_str_with_nul(s), c_str_with_nul(prefix)) };
    as_c_bool(core_str::starts_with(s, prefix))
}

// ---------------------------------------------------------------------------
// release
// ---------------------------------------------------------------------------

/// Release a string returned by `bytestr_reverse_copy` or `bytestr_concat`.
/// Null is a no-op.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn bytestr_free(s: *mut c_char) {
    if s.is_null() {
        return;
    }
    // SAFETY: caller passes a pointer obtained from this crate's allocators.
    unsafe { libc::free(s.cast()) };
}
