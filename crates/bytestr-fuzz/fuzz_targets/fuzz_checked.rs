#![no_main]
use libfuzzer_sys::fuzz_target;

use bytestr_core::{StrError, checked};
use bytestr_membrane::SafetyLevel;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    // First byte: destination size for copy. Rest: the source buffer,
    // which may or may not carry a terminator.
    let dst_len = usize::from(data[0] % 64);
    let src = &data[1..];
    let terminated = src.contains(&0);

    match checked::length_with(SafetyLevel::Strict, src) {
        Ok(len) => assert!(terminated && src[len] == 0),
        Err(StrError::Unterminated { len }) => assert!(!terminated && len == src.len()),
        Err(other) => panic!("unexpected error {other:?}"),
    }
    let healed = checked::length_with(SafetyLevel::Hardened, src).expect("hardened heals");
    assert_eq!(healed, bytestr_core::length(src));

    let mut dst = vec![0xAAu8; dst_len];
    match checked::copy_with(SafetyLevel::Hardened, src, &mut dst) {
        Ok(written) => {
            assert!(written >= 1 && written <= dst_len);
            assert_eq!(dst[written - 1], 0);
            assert_eq!(&dst[..written - 1], &src[..written - 1]);
        }
        Err(StrError::DestinationTooSmall { available, .. }) => assert_eq!(available, 0),
        Err(other) => panic!("unexpected error {other:?}"),
    }
});
