#![no_main]
use libfuzzer_sys::fuzz_target;

use bytestr_core::{
    concat, copy, find, is_alpha, is_numeric, length, reverse_copy, reverse_in_place,
    starts_with, to_lower, to_upper,
};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    // First byte picks the needle, the rest splits into two strings at the
    // midpoint. Inputs are used both with and without a terminator.
    let needle = data[0];
    let body = &data[1..];
    let (a, b) = body.split_at(body.len() / 2);
    let a_len = length(a);
    let b_len = length(b);
    assert!(a_len <= a.len());

    let rev = reverse_copy(a).expect("fuzz inputs are small");
    assert_eq!(rev.len(), a_len);
    let mut twice = a[..a_len].to_vec();
    twice.push(0);
    reverse_in_place(&mut twice);
    reverse_in_place(&mut twice);
    assert_eq!(&twice[..a_len], &a[..a_len]);

    let joined = concat(a, b).expect("fuzz inputs are small");
    assert_eq!(joined.len(), a_len + b_len);
    assert!(starts_with(joined.as_bytes_with_nul(), a));
    assert_eq!(starts_with(a, b), a[..a_len].starts_with(&b[..b_len]));

    let mut dst = vec![0xAAu8; a_len + 1];
    assert_eq!(copy(a, &mut dst), a_len + 1);
    assert_eq!(length(&dst), a_len);

    match find(a, needle) {
        Some(i) => {
            assert_eq!(a[i], needle);
            assert!(!a[..i].contains(&needle));
        }
        None => assert!(needle == 0 || !a[..a_len].contains(&needle)),
    }

    let mut upper = twice.clone();
    to_lower(&mut upper);
    to_upper(&mut upper);
    for (&orig, &up) in a[..a_len].iter().zip(&upper) {
        assert_eq!(up, orig.to_ascii_uppercase());
    }

    assert_eq!(is_numeric(a), a[..a_len].iter().all(u8::is_ascii_digit));
    assert_eq!(is_alpha(a), a[..a_len].iter().all(u8::is_ascii_alphabetic));
});
