//! Decode-side error taxonomy.
//!
//! Encoding never fails on byte input. Every decode failure is a local,
//! immediately terminal validation result; callers treat any of them as
//! "reject input" and may use the kind for diagnostics. The format cannot
//! tell tampering from corruption: missing bits surface as
//! [`Error::ShortPacket`], bit-level damage that still parses structurally
//! surfaces as [`Error::ChecksumMismatch`].

use thiserror::Error;

/// Every way [`decode`](crate::decode) can reject an input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input string has zero length under a framed profile.
    #[error("empty input")]
    EmptyString,

    /// Framed profile input does not start with [`MAGIC_PREFIX`](crate::MAGIC_PREFIX).
    #[error("invalid magic prefix")]
    InvalidPrefix,

    /// Fewer alphabet-recognized bits available than the header requires.
    #[error("packet too short: {0}")]
    ShortPacket(&'static str),

    /// Declared padding-bit count exceeds the bits available after the
    /// header; no well-formed encoder output ever parses this way.
    #[error("invalid padding")]
    InvalidPadding,

    /// Checksum recomputed over the recovered payload disagrees with the
    /// one carried in the header.
    #[error("checksum mismatch: expected {expected:#07x}, got {actual:#07x}")]
    ChecksumMismatch { expected: u32, actual: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
