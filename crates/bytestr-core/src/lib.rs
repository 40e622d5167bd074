//! # bytestr-core
//!
//! Byte-string primitives: length, copy, reverse,
//! find, case conversion, classification, concatenation and prefix check.
//!
//! A byte string is a `&[u8]` whose logical content ends at the first `0`
//! byte. When a slice carries no `0` byte, its end acts as the terminator, so
//! no operation here ever reads past the buffer it was given. Allocating
//! operations return an owned [`ByteString`] wrapped in `Option`; `None`
//! means the allocation failed. No `unsafe` code is permitted in this crate.

#![deny(unsafe_code)]

pub mod checked;
pub mod ctype;
pub mod error;
pub mod owned;
pub mod string;

pub use error::StrError;
pub use owned::ByteString;
pub use string::{
    concat, copy, find, is_alpha, is_numeric, length, reverse_copy, reverse_in_place,
    starts_with, to_lower, to_upper,
};
