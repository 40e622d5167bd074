//! Owned, NUL-terminated byte strings.

use std::fmt;

use crate::string::length;

/// Reserves a buffer for `content_len` bytes plus the terminator.
///
/// Returns `None` when the size overflows or the allocator refuses.
pub(crate) fn try_alloc(content_len: usize) -> Option<Vec<u8>> {
    let total = content_len.checked_add(1)?;
    let mut buf = Vec::new();
    buf.try_reserve_exact(total).ok()?;
    Some(buf)
}

/// A heap byte string that always ends in exactly one NUL terminator.
///
/// Freshly built strings hold no interior NUL; writing one through
/// [`ByteString::as_mut_bytes`] shortens the logical content seen by the
/// borrowed operations without shrinking the buffer.
///
/// Produced by the allocating operations ([`crate::reverse_copy`],
/// [`crate::concat`]). The owner releases it by dropping it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ByteString {
    buf: Vec<u8>,
}

impl ByteString {
    /// Copies the content of `s` (up to its terminator) into a new string.
    ///
    /// Returns `None` if the allocation fails.
    pub fn from_content(s: &[u8]) -> Option<Self> {
        let len = length(s);
        let mut buf = try_alloc(len)?;
        buf.extend_from_slice(&s[..len]);
        buf.push(0);
        Some(Self { buf })
    }

    /// Wraps a buffer already laid out as content followed by one NUL.
    pub(crate) fn from_vec_with_nul(buf: Vec<u8>) -> Self {
        debug_assert_eq!(buf.last(), Some(&0));
        debug_assert_eq!(length(&buf), buf.len() - 1);
        Self { buf }
    }

    /// The content, without the terminator.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.buf.len() - 1]
    }

    /// The content followed by the terminator.
    #[must_use]
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf
    }

    /// Mutable view of the content, for the in-place operations.
    ///
    /// The terminator is outside the view and cannot be overwritten.
    pub fn as_mut_bytes(&mut self) -> &mut [u8] {
        let len = self.len();
        &mut self.buf[..len]
    }

    /// Number of content bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buf.len() - 1
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gives up the buffer, terminator included.
    #[must_use]
    pub fn into_vec_with_nul(self) -> Vec<u8> {
        self.buf
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes_with_nul()
    }
}

impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteString({:?})", String::from_utf8_lossy(self.as_bytes()))
    }
}
