//! Mode-aware entry points.
//!
//! The plain functions in [`crate::string`] never fail: a slice without a
//! terminator ends at its last byte, and [`crate::copy`] panics on an
//! undersized destination. The functions here route those contract
//! violations through the membrane instead:
//!
//! - strict: the violation comes back as a [`StrError`].
//! - hardened: the violation is healed, recorded in the global healing
//!   policy, and the operation proceeds.
//! - off: the operation proceeds without checks or records.
//!
//! Every `*_with` function takes the level explicitly; the short forms use
//! the process-wide level from [`bytestr_membrane::safety_level`].

use bytestr_membrane::{HealingAction, SafetyLevel, global_healing_policy, safety_level};

use crate::error::StrError;
use crate::owned::ByteString;
use crate::string;

/// Scans `s` for its terminator. Returns `(content_len, terminated)`.
fn scan(s: &[u8]) -> (usize, bool) {
    match s.iter().position(|&b| b == 0) {
        Some(len) => (len, true),
        None => (s.len(), false),
    }
}

/// Applies the membrane decision for a possibly unterminated input and
/// returns its content length.
fn admit(level: SafetyLevel, s: &[u8]) -> Result<usize, StrError> {
    let (len, terminated) = scan(s);
    if terminated || !level.validation_enabled() {
        return Ok(len);
    }
    if level.heals_enabled() {
        let policy = global_healing_policy();
        let action = policy.heal_unterminated(s.len());
        policy.record(&action);
        return Ok(len);
    }
    Err(StrError::Unterminated { len: s.len() })
}

fn allocation_failed(content_len: usize) -> StrError {
    StrError::AllocationFailed {
        requested: content_len.saturating_add(1),
    }
}

/// Length of `s` under the given safety level.
pub fn length_with(level: SafetyLevel, s: &[u8]) -> Result<usize, StrError> {
    admit(level, s)
}

/// Copies `src` into `dst` under the given safety level.
///
/// Returns the number of bytes written, terminator included. In hardened and
/// off modes an undersized destination receives as much content as fits
/// followed by a terminator; a zero-length destination is always an error
/// because it cannot even hold the terminator.
pub fn copy_with(level: SafetyLevel, src: &[u8], dst: &mut [u8]) -> Result<usize, StrError> {
    let src_len = admit(level, src)?;
    let needed = src_len + 1;
    if dst.len() >= needed {
        dst[..src_len].copy_from_slice(&src[..src_len]);
        dst[src_len] = 0;
        return Ok(needed);
    }

    let too_small = StrError::DestinationTooSmall {
        needed,
        available: dst.len(),
    };
    if matches!(level, SafetyLevel::Strict) || dst.is_empty() {
        if level.heals_enabled() {
            global_healing_policy().record(&HealingAction::ReturnSafeDefault);
        }
        return Err(too_small);
    }

    let policy = global_healing_policy();
    let action = policy.heal_string_bounds(src_len, dst.len());
    let kept = match action {
        HealingAction::TruncateWithNull { truncated, .. } => truncated,
        _ => dst.len() - 1,
    };
    if level.heals_enabled() {
        policy.record(&action);
    }
    dst[..kept].copy_from_slice(&src[..kept]);
    dst[kept] = 0;
    Ok(kept + 1)
}

/// Reversed copy of `s` under the given safety level.
pub fn reverse_copy_with(level: SafetyLevel, s: &[u8]) -> Result<ByteString, StrError> {
    let len = admit(level, s)?;
    string::reverse_copy(s).ok_or_else(|| allocation_failed(len))
}

/// Concatenation of `a` and `b` under the given safety level.
pub fn concat_with(level: SafetyLevel, a: &[u8], b: &[u8]) -> Result<ByteString, StrError> {
    let a_len = admit(level, a)?;
    let b_len = admit(level, b)?;
    string::concat(a, b).ok_or_else(|| allocation_failed(a_len.saturating_add(b_len)))
}

/// Prefix check under the given safety level.
pub fn starts_with_with(level: SafetyLevel, s: &[u8], prefix: &[u8]) -> Result<bool, StrError> {
    admit(level, s)?;
    admit(level, prefix)?;
    Ok(string::starts_with(s, prefix))
}

/// [`length_with`] at the process-wide safety level.
pub fn length(s: &[u8]) -> Result<usize, StrError> {
    length_with(safety_level(), s)
}

/// [`copy_with`] at the process-wide safety level.
pub fn copy(src: &[u8], dst: &mut [u8]) -> Result<usize, StrError> {
    copy_with(safety_level(), src, dst)
}

/// [`reverse_copy_with`] at the process-wide safety level.
pub fn reverse_copy(s: &[u8]) -> Result<ByteString, StrError> {
    reverse_copy_with(safety_level(), s)
}

/// [`concat_with`] at the process-wide safety level.
pub fn concat(a: &[u8], b: &[u8]) -> Result<ByteString, StrError> {
    concat_with(safety_level(), a, b)
}

/// [`starts_with_with`] at the process-wide safety level.
pub fn starts_with(s: &[u8], prefix: &[u8]) -> Result<bool, StrError> {
    starts_with_with(safety_level(), s, prefix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::Ordering;

    #[test]
    fn strict_rejects_unterminated() {
        assert_eq!(
            length_with(SafetyLevel::Strict, b"abc"),
            Err(StrError::Unterminated { len: 3 })
        );
        assert_eq!(length_with(SafetyLevel::Strict, b"abc\0"), Ok(3));
    }

    #[test]
    fn hardened_heals_unterminated_and_records() {
        let policy = global_healing_policy();
        let before = policy.buffer_end_truncations.load(Ordering::Relaxed);
        assert_eq!(length_with(SafetyLevel::Hardened, b"abcd"), Ok(4));
        let after = policy.buffer_end_truncations.load(Ordering::Relaxed);
        assert!(after > before);
    }

    #[test]
    fn off_accepts_unterminated_silently() {
        assert_eq!(length_with(SafetyLevel::Off, b"ab"), Ok(2));
    }

    #[test]
    fn strict_copy_reports_small_destination() {
        let mut dst = [0xFFu8; 3];
        assert_eq!(
            copy_with(SafetyLevel::Strict, b"Hasan\0", &mut dst),
            Err(StrError::DestinationTooSmall {
                needed: 6,
                available: 3
            })
        );
        assert_eq!(dst, [0xFF; 3]);
    }

    #[test]
    fn strict_copy_fits() {
        let mut dst = [0u8; 8];
        assert_eq!(copy_with(SafetyLevel::Strict, b"Hasan\0", &mut dst), Ok(6));
        assert_eq!(&dst[..6], b"Hasan\0");
    }

    #[test]
    fn hardened_copy_truncates_with_terminator() {
        let mut dst = [0xFFu8; 4];
        assert_eq!(copy_with(SafetyLevel::Hardened, b"Hasan\0", &mut dst), Ok(4));
        assert_eq!(&dst, b"Has\0");
    }

    #[test]
    fn empty_destination_is_always_an_error() {
        let mut dst: [u8; 0] = [];
        for level in [SafetyLevel::Strict, SafetyLevel::Hardened, SafetyLevel::Off] {
            assert_eq!(
                copy_with(level, b"a\0", &mut dst),
                Err(StrError::DestinationTooSmall {
                    needed: 2,
                    available: 0
                })
            );
        }
    }

    #[test]
    fn allocating_ops_in_strict_mode() {
        assert_eq!(
            reverse_copy_with(SafetyLevel::Strict, b"Hasan\0")
                .unwrap()
                .as_bytes(),
            b"nasaH"
        );
        assert_eq!(
            concat_with(SafetyLevel::Strict, b"Has\0", b"an\0")
                .unwrap()
                .as_bytes(),
            b"Hasan"
        );
        assert_eq!(
            concat_with(SafetyLevel::Strict, b"Has\0", b"an"),
            Err(StrError::Unterminated { len: 2 })
        );
    }

    #[test]
    fn hardened_allocating_ops_accept_buffer_end() {
        assert_eq!(
            concat_with(SafetyLevel::Hardened, b"Has", b"an")
                .unwrap()
                .as_bytes(),
            b"Hasan"
        );
        assert_eq!(
            reverse_copy_with(SafetyLevel::Hardened, b"ab")
                .unwrap()
                .as_bytes(),
            b"ba"
        );
    }

    #[test]
    fn starts_with_modes() {
        assert_eq!(
            starts_with_with(SafetyLevel::Strict, b"Hasan\0", b"Has\0"),
            Ok(true)
        );
        assert_eq!(
            starts_with_with(SafetyLevel::Strict, b"Has\0", b"Hasan\0"),
            Ok(false)
        );
        assert_eq!(
            starts_with_with(SafetyLevel::Strict, b"Has", b"H\0"),
            Err(StrError::Unterminated { len: 3 })
        );
        assert_eq!(
            starts_with_with(SafetyLevel::Hardened, b"Has", b"Hasan"),
            Ok(false)
        );
    }

    #[test]
    fn short_forms_use_the_process_wide_level() {
        let level = safety_level();
        let inputs: [&[u8]; 4] = [b"Hasan\0", b"Has", b"\0", b""];
        for s in inputs {
            assert_eq!(length(s), length_with(level, s));
            assert_eq!(reverse_copy(s), reverse_copy_with(level, s));
            assert_eq!(concat(s, b"an\0"), concat_with(level, s, b"an\0"));
            assert_eq!(concat(b"Has\0", s), concat_with(level, b"Has\0", s));
            assert_eq!(starts_with(s, b"Ha\0"), starts_with_with(level, s, b"Ha\0"));
            assert_eq!(starts_with(b"Hasan\0", s), starts_with_with(level, b"Hasan\0", s));

            for dst_len in [0, 3, 8] {
                let mut short = vec![0xAAu8; dst_len];
                let mut long = vec![0xAAu8; dst_len];
                assert_eq!(copy(s, &mut short), copy_with(level, s, &mut long));
                assert_eq!(short, long);
            }
        }
    }

    #[test]
    fn errors_render_readably() {
        let err = StrError::DestinationTooSmall {
            needed: 6,
            available: 3,
        };
        assert_eq!(
            err.to_string(),
            "destination holds 3 bytes but 6 are needed (content + NUL)"
        );
        assert_eq!(
            StrError::Unterminated { len: 4 }.to_string(),
            "byte string of 4 bytes has no NUL terminator"
        );
    }
}
