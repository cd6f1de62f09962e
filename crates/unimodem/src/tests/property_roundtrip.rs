//! Round-trip laws, checked over arbitrary inputs.

use alloc::{string::String, vec::Vec};

use quickcheck::QuickCheck;

use crate::{
    InvalidUnicode, utf8_to_utf16, utf8_to_utf32, utf16_to_utf8, utf16_to_utf32, utf32_to_utf8,
    utf32_to_utf16,
};

fn test_count() -> u64 {
    if is_ci::cached() { 10_000 } else { 1_000 }
}

/// Valid UTF-8 survives decode/encode through both wider forms, whatever
/// the policy.
#[test]
fn valid_utf8_round_trips() {
    fn prop(text: String) -> bool {
        let bytes = text.as_bytes();
        [
            InvalidUnicode::Substitute,
            InvalidUnicode::PreserveUtf8,
            InvalidUnicode::PreserveUtf16,
        ]
        .into_iter()
        .all(|policy| {
            utf32_to_utf8(&utf8_to_utf32(bytes, policy), policy) == bytes
                && utf16_to_utf8(&utf8_to_utf16(bytes, policy), policy) == bytes
        })
    }
    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(String) -> bool);
}

/// Any byte soup at all survives a `PreserveUtf8` round trip through both
/// wider forms.
#[test]
fn preserve_utf8_round_trips_any_bytes() {
    fn prop(bytes: Vec<u8>) -> bool {
        let p = InvalidUnicode::PreserveUtf8;
        utf32_to_utf8(&utf8_to_utf32(&bytes, p), p) == bytes
            && utf16_to_utf8(&utf8_to_utf16(&bytes, p), p) == bytes
    }
    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Any 16-bit sequence, lone surrogates included, survives a
/// `PreserveUtf16` round trip through 8-bit form.
#[test]
fn preserve_utf16_round_trips_any_units() {
    fn prop(units: Vec<u16>) -> bool {
        let p = InvalidUnicode::PreserveUtf16;
        utf8_to_utf16(&utf16_to_utf8(&units, p), p) == units
    }
    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u16>) -> bool);
}

/// Narrowing after widening is the identity on any 16-bit sequence; pairs
/// re-split to the same units and lone surrogates pass through.
#[test]
fn widen_then_narrow_is_identity() {
    fn prop(units: Vec<u16>) -> bool {
        utf32_to_utf16(&utf16_to_utf32(&units)) == units
    }
    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u16>) -> bool);
}

/// `Substitute` output contains only Unicode scalar values, and exactly one
/// output per invalid input unit.
#[test]
fn substitute_output_is_always_scalar() {
    fn prop(bytes: Vec<u8>) -> bool {
        let cps = utf8_to_utf32(&bytes, InvalidUnicode::Substitute);
        cps.len() <= bytes.len() && cps.iter().all(|&cp| char::from_u32(cp).is_some())
    }
    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// A run of trash bytes substitutes unit-for-unit: no cascading skips.
#[test]
fn trash_run_substitutes_unit_for_unit() {
    fn prop(seed: Vec<u8>) -> bool {
        // 0xF8..=0xFB can appear at no position in well-formed UTF-8.
        let trash: Vec<u8> = seed.iter().map(|b| 0xF8 | (b & 0x03)).collect();
        let cps = utf8_to_utf32(&trash, InvalidUnicode::Substitute);
        cps.len() == trash.len() && cps.iter().all(|&cp| cp == 0xFFFD)
    }
    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}

/// Decoding to 32-bit and narrowing matches decoding straight to 16-bit.
/// Widening the 16-bit result back matches too, except under
/// `PreserveUtf16`, where two reconstituted lone surrogates can sit
/// adjacent and widening would pair them.
#[test]
fn decode_paths_commute() {
    fn prop(bytes: Vec<u8>) -> bool {
        [
            InvalidUnicode::Substitute,
            InvalidUnicode::PreserveUtf8,
            InvalidUnicode::PreserveUtf16,
        ]
        .into_iter()
        .all(|policy| {
            let cps = utf8_to_utf32(&bytes, policy);
            let units = utf8_to_utf16(&bytes, policy);
            utf32_to_utf16(&cps) == units
                && (policy == InvalidUnicode::PreserveUtf16 || utf16_to_utf32(&units) == cps)
        })
    }
    QuickCheck::new()
        .tests(test_count())
        .quickcheck(prop as fn(Vec<u8>) -> bool);
}
