//! Bidirectional transcoding among the three Unicode encoding forms
//! (UTF-8, UTF-16 and UTF-32) with selectable handling of invalid input.
//!
//! Every converter is total: malformed input never panics and never returns
//! an error. What happens instead is chosen per call by [`InvalidUnicode`]:
//! substitution with U+FFFD, Python-style `surrogateescape` round-tripping of
//! invalid bytes ([`InvalidUnicode::PreserveUtf8`]), or WTF-8 round-tripping
//! of lone surrogates ([`InvalidUnicode::PreserveUtf16`]).
//!
//! ```rust
//! use unimodem::{InvalidUnicode, utf8_to_utf32};
//!
//! let cps = utf8_to_utf32("A\u{e9}€".as_bytes(), InvalidUnicode::Substitute);
//! assert_eq!(cps, [0x41, 0xE9, 0x20AC]);
//! ```
//!
//! Conversions that cannot encounter invalid input (UTF-16 ↔ UTF-32) take no
//! policy. For buffers that must pass through an external byte-oriented codec
//! with a per-call size ceiling, see the [`chunk`] module.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod codepoint;
mod convert;
mod policy;
mod surrogate;

pub mod byte_class;
pub mod chunk;

#[cfg(test)]
mod tests;

pub use convert::{
    Utf8To16, Utf8To32, Utf16To8, Utf16To32, Utf32To8, Utf32To16, utf8_to_utf16, utf8_to_utf32,
    utf16_to_utf8, utf16_to_utf32, utf32_to_utf8, utf32_to_utf16,
};
pub use policy::InvalidUnicode;
