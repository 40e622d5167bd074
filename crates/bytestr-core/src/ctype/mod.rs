//! Character classification and conversion.
//!
//! Per-byte `<ctype.h>` helpers, C locale only. Bytes outside the ASCII
//! letter and digit ranges are never letters or digits.

/// Returns `true` if `c` is an alphabetic character (`[A-Za-z]`).
#[inline]
pub fn is_alpha(c: u8) -> bool {
    is_upper(c) || is_lower(c)
}

/// Returns `true` if `c` is a decimal digit (`[0-9]`).
#[inline]
pub fn is_digit(c: u8) -> bool {
    (b'0'..=b'9').contains(&c)
}

/// Returns `true` if `c` is an uppercase letter (`[A-Z]`).
#[inline]
pub fn is_upper(c: u8) -> bool {
    (b'A'..=b'Z').contains(&c)
}

/// Returns `true` if `c` is a lowercase letter (`[a-z]`).
#[inline]
pub fn is_lower(c: u8) -> bool {
    (b'a'..=b'z').contains(&c)
}

/// Converts `c` to uppercase if it is a lowercase letter.
#[inline]
pub fn to_upper(c: u8) -> u8 {
    if is_lower(c) { c - 32 } else { c }
}

/// Converts `c` to lowercase if it is an uppercase letter.
#[inline]
pub fn to_lower(c: u8) -> u8 {
    if is_upper(c) { c + 32 } else { c }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_alpha() {
        assert!(is_alpha(b'A'));
        assert!(is_alpha(b'Z'));
        assert!(is_alpha(b'a'));
        assert!(is_alpha(b'z'));
        assert!(!is_alpha(b'0'));
        assert!(!is_alpha(b'@'));
        assert!(!is_alpha(b'['));
        assert!(!is_alpha(b'`'));
        assert!(!is_alpha(b'{'));
        assert!(!is_alpha(0));
    }

    #[test]
    fn test_is_digit() {
        for c in b'0'..=b'9' {
            assert!(is_digit(c));
        }
        assert!(!is_digit(b'a'));
        assert!(!is_digit(b'/'));
        assert!(!is_digit(b':'));
    }

    #[test]
    fn test_is_upper_lower() {
        for c in b'A'..=b'Z' {
            assert!(is_upper(c));
            assert!(!is_lower(c));
        }
        for c in b'a'..=b'z' {
            assert!(is_lower(c));
            assert!(!is_upper(c));
        }
    }

    #[test]
    fn test_to_upper_lower() {
        assert_eq!(to_upper(b'a'), b'A');
        assert_eq!(to_upper(b'z'), b'Z');
        assert_eq!(to_upper(b'A'), b'A');
        assert_eq!(to_upper(b'0'), b'0');
        assert_eq!(to_lower(b'A'), b'a');
        assert_eq!(to_lower(b'Z'), b'z');
        assert_eq!(to_lower(b'a'), b'a');
        assert_eq!(to_lower(b'5'), b'5');
    }

    #[test]
    fn exhaustive_invariants() {
        for c in 0u8..=255 {
            assert_eq!(is_alpha(c), c.is_ascii_alphabetic(), "alpha mismatch for {c}");
            assert_eq!(is_digit(c), c.is_ascii_digit(), "digit mismatch for {c}");
            assert_eq!(to_upper(c), c.to_ascii_uppercase(), "upper mismatch for {c}");
            assert_eq!(to_lower(c), c.to_ascii_lowercase(), "lower mismatch for {c}");
            if !is_alpha(c) {
                assert_eq!(to_upper(c), c, "non-letter changed by to_upper: {c}");
                assert_eq!(to_lower(c), c, "non-letter changed by to_lower: {c}");
            }
            assert_eq!(
                to_upper(to_lower(c)),
                to_upper(c),
                "round-trip failed for {c}"
            );
        }
    }
}
