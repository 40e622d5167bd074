//! Shared inputs for the bytestr benchmarks.

/// Sizes (content bytes) every string benchmark sweeps.
pub const SIZES: &[usize] = &[16, 64, 256, 1024, 4096];

/// `len` bytes of lowercase ASCII letters followed by a terminator.
#[must_use]
pub fn letters(len: usize) -> Vec<u8> {
    let mut s: Vec<u8> = (0..len).map(|i| b'a' + (i % 26) as u8).collect();
    s.push(0);
    s
}
