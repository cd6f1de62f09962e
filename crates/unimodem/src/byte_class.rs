//! Classification of individual bytes in a UTF-8 stream.
//!
//! These are pure predicates over a single byte: what role can it play, and
//! how long is the sequence it claims to start? A byte classifies as exactly
//! one of ASCII, a 2/3/4-byte lead, a continuation byte, or trash. The
//! lead/second-byte pair check ([`bad_pair`]) catches the shapes a lead byte
//! alone cannot rule out: overlong 3- and 4-byte sequences, sequences that
//! would decode to a surrogate, and sequences above U+10FFFF.

/// Is `b` a single-byte (ASCII) unit?
#[inline]
#[must_use]
pub fn is_ascii(b: u8) -> bool {
    b & 0x80 == 0x00
}

/// Is `b` a continuation byte (`10xxxxxx`)?
#[inline]
#[must_use]
pub fn is_trail(b: u8) -> bool {
    b & 0xC0 == 0x80
}

/// Is `b` a 2-byte lead? 0xC0 and 0xC1 are excluded: they can only start
/// overlong encodings of U+0000..=U+007F.
#[inline]
#[must_use]
pub fn is_lead2(b: u8) -> bool {
    b & 0xE0 == 0xC0 && b & 0xFE != 0xC0
}

/// Is `b` a 3-byte lead?
#[inline]
#[must_use]
pub fn is_lead3(b: u8) -> bool {
    b & 0xF0 == 0xE0
}

/// Is `b` a 4-byte lead? 0xF4 is the upper bound (sequences starting 0xF5
/// and above would exceed U+10FFFF).
#[inline]
#[must_use]
pub fn is_lead4(b: u8) -> bool {
    b & 0xFC == 0xF0 || b == 0xF4
}

/// Is `b` a byte that cannot appear at any position: 0xC0, 0xC1, or
/// 0xF5..=0xFF?
#[inline]
#[must_use]
pub fn is_trash(b: u8) -> bool {
    b & 0xFE == 0xC0 || (b & 0xF0 == 0xF0 && b & 0x0C != 0x00 && b != 0xF4)
}

/// The length in bytes of the sequence starting at `b`, judged from its high
/// bits alone. Returns 0 when `b` is a continuation byte or trash.
#[inline]
#[must_use]
pub fn implicit_length(b: u8) -> usize {
    if is_ascii(b) {
        1
    } else if is_lead2(b) {
        2
    } else if is_lead3(b) {
        3
    } else if is_lead4(b) {
        4
    } else {
        0
    }
}

/// Lead/second-byte combinations that are invalid even though both bytes pass
/// their individual checks. Covers the first two bytes of 3- and 4-byte
/// sequences only; 1- and 2-byte sequences have no such combinations.
///
/// - `0xE0` with second byte < 0xA0: overlong 3-byte encoding.
/// - `0xED` with second byte > 0x9F: encodes a surrogate code point.
/// - `0xF0` with second byte < 0x90: overlong 4-byte encoding.
/// - `0xF4` with second byte > 0x8F: exceeds U+10FFFF.
#[inline]
#[must_use]
pub fn bad_pair(b1: u8, b2: u8) -> bool {
    (b1 == 0xE0 && b2 < 0xA0)
        || (b1 == 0xED && b2 > 0x9F)
        || (b1 == 0xF0 && b2 < 0x90)
        || (b1 == 0xF4 && b2 > 0x8F)
}

/// Full trailing-byte check for a 3-byte sequence.
#[inline]
#[must_use]
pub fn valid_trail3(b1: u8, b2: u8, b3: u8) -> bool {
    !bad_pair(b1, b2) && is_trail(b2) && is_trail(b3)
}

/// Full trailing-byte check for a 4-byte sequence. All three continuation
/// bytes are required; a failure anywhere rejects the whole sequence.
#[inline]
#[must_use]
pub fn valid_trail4(b1: u8, b2: u8, b3: u8, b4: u8) -> bool {
    !bad_pair(b1, b2) && is_trail(b2) && is_trail(b3) && is_trail(b4)
}
