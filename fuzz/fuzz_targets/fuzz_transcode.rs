#![no_main]
use libfuzzer_sys::fuzz_target;
use unimodem::{
    InvalidUnicode, utf8_to_utf16, utf8_to_utf32, utf16_to_utf8, utf16_to_utf32, utf32_to_utf8,
    utf32_to_utf16,
};

fuzz_target!(|data: &[u8]| {
    // Surrogate-escape must round-trip any byte soup exactly, through both
    // wider forms.
    let p8 = InvalidUnicode::PreserveUtf8;
    assert_eq!(utf32_to_utf8(&utf8_to_utf32(data, p8), p8), data);
    assert_eq!(utf16_to_utf8(&utf8_to_utf16(data, p8), p8), data);

    // Substituted output is always scalar and re-encodes to valid UTF-8.
    let cps = utf8_to_utf32(data, InvalidUnicode::Substitute);
    assert!(cps.iter().all(|&cp| char::from_u32(cp).is_some()));
    let bytes = utf32_to_utf8(&cps, InvalidUnicode::Substitute);
    assert!(std::str::from_utf8(&bytes).is_ok());

    // Reinterpret the input as 16-bit units: WTF-8 must round-trip lone
    // surrogates, and narrowing after widening is the identity.
    let units: Vec<u16> = data
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .collect();
    let p16 = InvalidUnicode::PreserveUtf16;
    assert_eq!(utf8_to_utf16(&utf16_to_utf8(&units, p16), p16), units);
    assert_eq!(utf32_to_utf16(&utf16_to_utf32(&units)), units);
});
