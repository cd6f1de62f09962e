//! Selection of behavior on invalid input.

/// What a converter does when it meets input that is not valid Unicode.
///
/// The three policies are mutually exclusive and selected per call; there is
/// no global state. Whatever the policy, a converter consumes exactly one
/// input unit per invalid unit and then resumes scanning at the next unit,
/// so garbage never causes valid data after it to be skipped.
///
/// # Examples
///
/// ```rust
/// use unimodem::{InvalidUnicode, utf8_to_utf32, utf32_to_utf8};
///
/// // An invalid byte substitutes to U+FFFD by default…
/// assert_eq!(utf8_to_utf32(b"\xFF", InvalidUnicode::Substitute), [0xFFFD]);
///
/// // …or survives a round trip under `PreserveUtf8`.
/// let escaped = utf8_to_utf32(b"\xFF", InvalidUnicode::PreserveUtf8);
/// assert_eq!(escaped, [0xDCFF]);
/// assert_eq!(utf32_to_utf8(&escaped, InvalidUnicode::PreserveUtf8), b"\xFF");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvalidUnicode {
    /// Replace each invalid input unit with one U+FFFD replacement
    /// character (or its encoded form in the target encoding).
    ///
    /// This is the default.
    #[default]
    Substitute,

    /// Round-trip invalid UTF-8 bytes losslessly through the 16- and 32-bit
    /// forms, in the manner of Python's `surrogateescape` error handler.
    ///
    /// Decoding maps each invalid byte `b` to the escape value `0xDC00 | b`
    /// (a code point in [0xDC80, 0xDCFF]); encoding back to UTF-8 under the
    /// same policy emits the bare byte again rather than a three-byte
    /// encoding of the surrogate.
    PreserveUtf8,

    /// Round-trip lone UTF-16 surrogates losslessly through 8-bit form
    /// using WTF-8.
    ///
    /// Encoding a lone surrogate to 8-bit form emits the literal three-byte
    /// pattern for its value (lead 0xED), which strict UTF-8 forbids;
    /// decoding under the same policy recognizes that pattern and
    /// reconstitutes the original unit instead of rejecting it.
    PreserveUtf16,
}

impl InvalidUnicode {
    /// Whether 3-byte sequences with lead 0xED (the encodings of surrogate
    /// values) are accepted when decoding 8-bit input.
    #[inline]
    #[must_use]
    pub(crate) fn admits_wtf8(self) -> bool {
        matches!(self, InvalidUnicode::PreserveUtf16)
    }
}
