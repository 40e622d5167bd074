//! Shared internal utilities for ABI adapters.

use std::ffi::c_char;

use bytestr_membrane::{HealingAction, global_healing_policy, safety_level};

/// Scan a C string for its terminator and return the content length.
///
/// # Safety
///
/// `ptr` must be non-null and valid to read up to and including its NUL.
pub unsafe fn scan_c_string(ptr: *const c_char) -> usize {
    let mut i = 0usize;
    // SAFETY: caller guarantees a terminator inside the readable region.
    while unsafe { *ptr.add(i) } != 0 {
        i += 1;
    }
    i
}

/// Borrow a C string as a byte slice that includes its terminator.
///
/// # Safety
///
/// Same as [`scan_c_string`]; the buffer must outlive `'a` and not be
/// written through another pointer meanwhile.
pub unsafe fn c_str_with_nul<'a>(ptr: *const c_char) -> &'a [u8] {
    // SAFETY: caller contract.
    let len = unsafe { scan_c_string(ptr) };
    // SAFETY: `len + 1` bytes were just read successfully.
    unsafe { std::slice::from_raw_parts(ptr.cast::<u8>(), len + 1) }
}

/// Mutable counterpart of [`c_str_with_nul`].
///
/// # Safety
///
/// Same as [`c_str_with_nul`], and the buffer must be writable.
pub unsafe fn c_str_with_nul_mut<'a>(ptr: *mut c_char) -> &'a mut [u8] {
    // SAFETY: caller contract.
    let len = unsafe { scan_c_string(ptr) };
    // SAFETY: `len + 1` bytes were just read; caller guarantees writability.
    unsafe { std::slice::from_raw_parts_mut(ptr.cast::<u8>(), len + 1) }
}

/// Note that a null argument was answered with a safe default.
pub fn record_null_default() {
    if safety_level().heals_enabled() {
        global_healing_policy().record(&HealingAction::ReturnSafeDefault);
    }
}
