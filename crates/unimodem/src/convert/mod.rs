//! The six converters between UTF-8, UTF-16 and UTF-32.
//!
//! Each direction is a lazy iterator over output units ([`Utf8To32`],
//! [`Utf8To16`], [`Utf16To8`], [`Utf16To32`], [`Utf32To8`], [`Utf32To16`])
//! plus a `Vec`-collecting convenience function. Iterators borrow their
//! input, hold a cursor and at most a few units of carry-over state, and are
//! `Clone`, so a conversion can be restarted or resumed from a snapshot.
//!
//! Invalid input never stops iteration. The shared rule for every direction:
//! emit the policy-defined output for the invalid unit, then advance by
//! exactly one input unit, never by a lead byte's declared width, so a
//! corrupt lead cannot swallow valid data hidden behind it.
//!
//! The UTF-16 ↔ UTF-32 directions take no policy: a lone surrogate is
//! carried through both of them as a plain value, and only the 8-bit
//! boundary enforces the prohibition on encoding surrogates.

mod from_utf8;
mod from_utf16;
mod from_utf32;

use alloc::vec::Vec;

pub use from_utf8::{Utf8To16, Utf8To32};
pub use from_utf16::{Utf16To8, Utf16To32};
pub use from_utf32::{Utf32To8, Utf32To16};

use crate::policy::InvalidUnicode;

/// Decodes UTF-8 bytes into code points.
///
/// Invalid bytes become U+FFFD under [`InvalidUnicode::Substitute`] or
/// escape values in [0xDC80, 0xDCFF] under [`InvalidUnicode::PreserveUtf8`].
/// Under [`InvalidUnicode::PreserveUtf16`], three-byte sequences with lead
/// 0xED are accepted even when they decode to surrogate values.
///
/// ```rust
/// use unimodem::{InvalidUnicode, utf8_to_utf32};
///
/// let cps = utf8_to_utf32("A\u{e9}€".as_bytes(), InvalidUnicode::Substitute);
/// assert_eq!(cps, [0x41, 0xE9, 0x20AC]);
/// ```
#[must_use]
pub fn utf8_to_utf32(bytes: &[u8], policy: InvalidUnicode) -> Vec<u32> {
    Utf8To32::new(bytes, policy).collect()
}

/// Decodes UTF-8 bytes into UTF-16 units; code points beyond the BMP become
/// surrogate pairs. Invalid input is handled as in [`utf8_to_utf32`].
#[must_use]
pub fn utf8_to_utf16(bytes: &[u8], policy: InvalidUnicode) -> Vec<u16> {
    Utf8To16::new(bytes, policy).collect()
}

/// Encodes UTF-16 units into UTF-8 bytes.
///
/// A high surrogate immediately followed by a low surrogate encodes as one
/// four-byte sequence. A lone surrogate encodes as U+FFFD under
/// [`InvalidUnicode::Substitute`]; as the bare escaped byte when it lies in
/// [0xDC80, 0xDCFF] under [`InvalidUnicode::PreserveUtf8`]; or as its
/// literal three-byte pattern under [`InvalidUnicode::PreserveUtf16`].
#[must_use]
pub fn utf16_to_utf8(units: &[u16], policy: InvalidUnicode) -> Vec<u8> {
    Utf16To8::new(units, policy).collect()
}

/// Widens UTF-16 units into code points, combining surrogate pairs.
///
/// No input is invalid here: a lone surrogate passes through as its own
/// value, so no policy is taken.
#[must_use]
pub fn utf16_to_utf32(units: &[u16]) -> Vec<u32> {
    Utf16To32::new(units).collect()
}

/// Encodes 32-bit code points into UTF-8 bytes.
///
/// Surrogate values are handled per policy as in [`utf16_to_utf8`]; values
/// above 0x10FFFF encode as U+FFFD.
#[must_use]
pub fn utf32_to_utf8(codepoints: &[u32], policy: InvalidUnicode) -> Vec<u8> {
    Utf32To8::new(codepoints, policy).collect()
}

/// Narrows code points into UTF-16 units; values at or above 0x10000 become
/// surrogate pairs. No policy is taken: BMP values pass through unchanged,
/// lone surrogates included, and values above 0x10FFFF split into
/// an out-of-range pair exactly as the arithmetic dictates
/// (garbage in, garbage out).
#[must_use]
pub fn utf32_to_utf16(codepoints: &[u32]) -> Vec<u16> {
    Utf32To16::new(codepoints).collect()
}
