//! Chunked transcoding through an external byte-oriented codec.
//!
//! Some codecs bound how much input a single call may receive. Feeding them
//! an arbitrarily long buffer means splitting it into call-sized chunks, and
//! a chunk boundary must never fall inside a surrogate pair (16-bit input)
//! or a multi-byte UTF-8 sequence (8-bit input): each chunk is converted in
//! isolation, so a split sequence would come out mangled at the seam. The
//! adapters here place every boundary on a whole-character edge and
//! concatenate the per-chunk results, which makes the output identical to
//! what one unbounded call would have produced.
//!
//! The per-call ceiling comes from the codec itself
//! ([`ByteCodec::max_units_per_call`]), so tests can drive the chunk loops
//! with tiny synthetic limits.

use alloc::vec::Vec;

use crate::{byte_class, surrogate};

/// Identifier for a byte encoding understood by an external codec.
///
/// The value is opaque to this crate except for [`Codepage::UTF8`]: byte
/// input is only walked back to a sequence boundary for that codepage, since
/// only there does a continuation byte mark the inside of a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Codepage(u32);

impl Codepage {
    /// The UTF-8 codepage.
    pub const UTF8: Codepage = Codepage(65001);

    /// Wraps a raw codepage number for the codec to interpret.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Codepage(id)
    }

    /// The raw codepage number.
    #[must_use]
    pub const fn id(self) -> u32 {
        self.0
    }

    /// Whether this is [`Codepage::UTF8`].
    #[inline]
    #[must_use]
    pub fn is_utf8(self) -> bool {
        self == Self::UTF8
    }
}

/// An external byte-oriented codec with a bounded per-call input size.
///
/// Implementations convert between 16-bit units and bytes for a given
/// [`Codepage`]. The adapter guarantees that no call receives more than
/// [`max_units_per_call`](ByteCodec::max_units_per_call) input units
/// (bytes count as units in the decode direction).
pub trait ByteCodec {
    /// Error produced when the codec rejects input or a codepage.
    type Error;

    /// The largest input length a single [`encode`](ByteCodec::encode) or
    /// [`decode`](ByteCodec::decode) call accepts.
    fn max_units_per_call(&self) -> usize;

    /// Encodes 16-bit units into bytes for `codepage`.
    fn encode(&mut self, units: &[u16], codepage: Codepage) -> Result<Vec<u8>, Self::Error>;

    /// Decodes bytes into 16-bit units for `codepage`.
    fn decode(&mut self, bytes: &[u8], codepage: Codepage) -> Result<Vec<u16>, Self::Error>;
}

/// Failure of a chunked conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChunkError<E> {
    /// The codec rejected one of the chunks.
    #[error("external codec rejected a chunk")]
    Codec(#[source] E),

    /// The codec reported a per-call limit of zero, which admits no input.
    #[error("external codec reported a zero per-call limit")]
    ZeroLimit,
}

/// Encodes a 16-bit unit buffer of any length through `codec`, never
/// letting a chunk boundary split a surrogate pair.
///
/// When the candidate chunk would end on a high surrogate, that unit is
/// left for the next chunk. Empty input returns an empty buffer without
/// calling the codec.
///
/// # Errors
///
/// Returns [`ChunkError::Codec`] if any per-chunk call fails and
/// [`ChunkError::ZeroLimit`] if the codec's limit is zero.
pub fn encode_paged<C: ByteCodec>(
    codec: &mut C,
    units: &[u16],
    codepage: Codepage,
) -> Result<Vec<u8>, ChunkError<C::Error>> {
    let mut out = Vec::new();
    if units.is_empty() {
        return Ok(out);
    }
    let limit = codec.max_units_per_call();
    if limit == 0 {
        return Err(ChunkError::ZeroLimit);
    }
    let mut working = 0;
    while units.len() - working > limit {
        let mut take = limit;
        if surrogate::is_high(u32::from(units[working + take - 1])) {
            take -= 1;
        }
        if take == 0 {
            // A one-unit ceiling cannot keep a pair together.
            take = 1;
        }
        let chunk = codec
            .encode(&units[working..working + take], codepage)
            .map_err(ChunkError::Codec)?;
        out.extend_from_slice(&chunk);
        working += take;
    }
    let tail = codec
        .encode(&units[working..], codepage)
        .map_err(ChunkError::Codec)?;
    out.extend_from_slice(&tail);
    Ok(out)
}

/// Decodes a byte buffer of any length through `codec`, never letting a
/// chunk boundary split a multi-byte UTF-8 sequence.
///
/// For [`Codepage::UTF8`], a candidate boundary that lands on a
/// continuation byte is walked backward to the nearest non-continuation
/// byte, so the split sequence moves whole into the next chunk. Other
/// codepages use the candidate boundary as-is. Empty input returns an empty
/// buffer without calling the codec.
///
/// # Errors
///
/// Returns [`ChunkError::Codec`] if any per-chunk call fails and
/// [`ChunkError::ZeroLimit`] if the codec's limit is zero.
pub fn decode_paged<C: ByteCodec>(
    codec: &mut C,
    bytes: &[u8],
    codepage: Codepage,
) -> Result<Vec<u16>, ChunkError<C::Error>> {
    let mut out = Vec::new();
    if bytes.is_empty() {
        return Ok(out);
    }
    let limit = codec.max_units_per_call();
    if limit == 0 {
        return Err(ChunkError::ZeroLimit);
    }
    let mut working = 0;
    while bytes.len() - working > limit {
        let mut take = limit;
        if codepage.is_utf8() && byte_class::is_trail(bytes[working + take]) {
            let mut boundary = take;
            while boundary > 0 && byte_class::is_trail(bytes[working + boundary]) {
                boundary -= 1;
            }
            // Only garbage runs continuation bytes past a whole chunk;
            // splitting garbage breaks no well-formed sequence.
            if boundary > 0 {
                take = boundary;
            }
        }
        let chunk = codec
            .decode(&bytes[working..working + take], codepage)
            .map_err(ChunkError::Codec)?;
        out.extend_from_slice(&chunk);
        working += take;
    }
    let tail = codec
        .decode(&bytes[working..], codepage)
        .map_err(ChunkError::Codec)?;
    out.extend_from_slice(&tail);
    Ok(out)
}
