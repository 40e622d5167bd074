//! Case conversion and whole-string classification.
//!
//! ASCII only: bytes outside `[A-Za-z]` are never changed and are never
//! letters; bytes outside `[0-9]` are never digits.

use super::str::length;
use crate::ctype;

/// Converts every lowercase ASCII letter in `s` to uppercase, in place.
pub fn to_upper(s: &mut [u8]) {
    let len = length(s);
    for b in &mut s[..len] {
        *b = ctype::to_upper(*b);
    }
}

/// Converts every uppercase ASCII letter in `s` to lowercase, in place.
pub fn to_lower(s: &mut [u8]) {
    let len = length(s);
    for b in &mut s[..len] {
        *b = ctype::to_lower(*b);
    }
}

/// Returns `true` if every byte of the content is an ASCII digit.
///
/// The empty string is numeric: no byte rejects it.
pub fn is_numeric(s: &[u8]) -> bool {
    let len = length(s);
    s[..len].iter().all(|&b| ctype::is_digit(b))
}

/// Returns `true` if every byte of the content is an ASCII letter.
///
/// The empty string is alphabetic: no byte rejects it.
pub fn is_alpha(s: &[u8]) -> bool {
    let len = length(s);
    s[..len].iter().all(|&b| ctype::is_alpha(b))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_upper_mixed() {
        let mut buf = *b"Hasan 42-x!\0";
        to_upper(&mut buf);
        assert_eq!(&buf, b"HASAN 42-X!\0");
    }

    #[test]
    fn to_lower_mixed() {
        let mut buf = *b"HaSaN 42-X!\0";
        to_lower(&mut buf);
        assert_eq!(&buf, b"hasan 42-x!\0");
    }

    #[test]
    fn case_conversion_stops_at_terminator() {
        let mut buf = *b"ab\0cd";
        to_upper(&mut buf);
        assert_eq!(&buf, b"AB\0cd");
    }

    #[test]
    fn case_conversion_leaves_high_bytes() {
        let mut buf = [0xE9, b'a', 0xC9, 0];
        to_upper(&mut buf);
        assert_eq!(buf, [0xE9, b'A', 0xC9, 0]);
        to_lower(&mut buf);
        assert_eq!(buf, [0xE9, b'a', 0xC9, 0]);
    }

    #[test]
    fn numeric_classification() {
        assert!(is_numeric(b"123\0"));
        assert!(is_numeric(b"0\0"));
        assert!(!is_numeric(b"12a\0"));
        assert!(!is_numeric(b"-12\0"));
        assert!(!is_numeric(b" 12\0"));
        assert!(is_numeric(b"12\0ab"));
    }

    #[test]
    fn alpha_classification() {
        assert!(is_alpha(b"abc\0"));
        assert!(is_alpha(b"HasAN\0"));
        assert!(!is_alpha(b"ab1\0"));
        assert!(!is_alpha(b"ab c\0"));
        assert!(is_alpha(b"ab\01"));
    }

    #[test]
    fn empty_string_is_vacuously_numeric_and_alpha() {
        assert!(is_numeric(b"\0"));
        assert!(is_alpha(b"\0"));
        assert!(is_numeric(b""));
        assert!(is_alpha(b""));
    }
}
