// All extern "C" exports accept raw pointers from C callers; the contract is
// the same for each one and is stated once below.
#![allow(clippy::missing_safety_doc)]
//! # bytestr-abi
//!
//! `extern "C"` boundary over raw NUL-terminated `char*` buffers.
//!
//! ```text
//! C caller -> ABI entry (this crate) -> bytestr-core -> return
//! ```
//!
//! Contract for every entry point: each non-null string argument points to a
//! readable buffer that holds a NUL terminator; each destination is writable
//! for the bytes the call writes. Null pointers never crash: they produce a
//! safe default (0, -1, null, or no-op) which hardened mode records in the
//! global healing policy.
//!
//! Allocating calls (`bytestr_reverse_copy`, `bytestr_concat`) return a
//! C-allocator buffer of exactly `content + 1` bytes, or null when the
//! allocation fails. The caller releases it with [`string_abi::bytestr_free`].

pub mod string_abi;
mod util;
