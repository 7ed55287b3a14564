//! # Rune-512 Packet Format
//!
//! A packet is one big-endian bitstring, re-sliced into 9-bit groups and
//! rendered as one alphabet symbol per group:
//!
//! ```text
//!          MSB                                    LSB
//!           │                                      │
//!           ▼                                      ▼
//!           P CCCCCCCCCCCCCCCC DDDDDDDD…DDDDDDDD 000
//!           ▲ ▲                ▲                  ▲
//!    PARITY─┘ │                │                  │
//!    checksum─┘  payload bytes─┘  0..8 zero bits──┘
//! ```
//!
//! The checksum is computed over the exact payload bytes before padding, so
//! it is independent of the encoded length. Padding stretches the bitstring
//! to the next 9-bit boundary; its width is recovered on decode from the
//! byte-alignment residue alone.
//!
//! Padding of exactly 0 and exactly 8 bits leave the same residue. The
//! parity bit resolves that one ambiguous case: it is set if and only if the
//! encoder padded by 8 bits.
//!
//! # Profiles
//!
//! The wire format carries no version field. Checksum width and framing are
//! fixed out of band by a [`Profile`] both sides agree on:
//!
//! * [`Profile::Fast`]: CRC-16/XMODEM checksum, bare symbol stream.
//! * [`Profile::Framed`]: truncated SHA-256 checksum behind a mandatory
//!   [`MAGIC_PREFIX`] sentinel, for picking packets out of surrounding text.
//!
//! Decoding stops at the first codepoint outside the alphabet, so trailing
//! garbage (or a second concatenated packet) is tolerated; the consumed
//! codepoint count is reported back to the caller.

#[macro_use]
extern crate log;

pub mod alphabet;
pub mod bitbuf;
pub mod checksum;
mod decode;
mod encode;
mod error;

pub use checksum::{Checksum, Crc16Xmodem, Sha256Tag};
pub use error::{Error, Result};

/// how many bits one alphabet symbol carries
pub(crate) const SYMBOL_BITS: usize = 9;
/// single bit disambiguating 0-bit from 8-bit padding
pub(crate) const PARITY_BITS: usize = 1;

/// Sentinel codepoint prepended by [`Profile::Framed`].
///
/// Deliberately outside the alphabet so the unpacker never mistakes it for
/// packet data.
pub const MAGIC_PREFIX: char = 'ᚱ';

/// Protocol profile, fixed out of band between encoder and decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Profile {
    /// CRC-16/XMODEM checksum, no stream framing. Decoding an empty string
    /// is a no-op success returning an empty payload.
    #[default]
    Fast,
    /// Truncated SHA-256 checksum behind a mandatory [`MAGIC_PREFIX`].
    /// Decoding an empty string fails with [`Error::EmptyString`].
    Framed,
}

impl Profile {
    /// Encode `payload` into a Rune-512 string. Never fails.
    pub fn encode(self, payload: &[u8]) -> String {
        match self {
            Profile::Fast => encode::encode_with::<Crc16Xmodem>(payload, None),
            Profile::Framed => encode::encode_with::<Sha256Tag>(payload, Some(MAGIC_PREFIX)),
        }
    }

    /// Decode `input`, returning the payload and the number of leading
    /// codepoints consumed.
    ///
    /// The consumed count may be less than the input length: decoding stops
    /// at the first codepoint outside the alphabet and anything after it is
    /// left untouched.
    pub fn decode(self, input: &str) -> Result<(Vec<u8>, usize)> {
        match self {
            Profile::Fast => decode::decode_with::<Crc16Xmodem>(input, None),
            Profile::Framed => decode::decode_with::<Sha256Tag>(input, Some(MAGIC_PREFIX)),
        }
    }
}

/// Encode `payload` under the default [`Profile::Fast`].
pub fn encode(payload: &[u8]) -> String {
    Profile::Fast.encode(payload)
}

/// Decode `input` under the default [`Profile::Fast`].
pub fn decode(input: &str) -> Result<(Vec<u8>, usize)> {
    Profile::Fast.decode(input)
}

/// (hex payload, encoded string) pairs pinned against the reference
/// implementation, shared by the encode and decode test modules.
#[cfg(test)]
pub(crate) const TEST_VECTOR: [(&str, &str); 7] = [
    ("", "⠀⠀"),
    ("00", "⠀⠀⠀"),
    ("68656c6c6f20776f726c64", "⠻◈□┫⣆▍◈⠻╯⣤▱┠"),
    ("000102030405060708090a0b0c0d0e0f", "║⡺⠀⠈⠠⡠━⢃⠇⠐⠤⡐⢰▁╃┇─"),
    ("ffffffffffffff", "┲╝◿◿◿◿◿◿─"),
    (
        "54686520717569636b2062726f776e20666f78206a756d7073206f76657220746865206c617a7920646f67",
        "◰▐║╃⡒⠎⡝⢴╣⣖⢁┓┦◮◛┐⡦⣞◠┃⢧⢭╜⠹┠⣞◙┫┢⠎┚⠲┠⣘▅◓▒⠌┛△─",
    ),
    ("deadbeef", "⣄⢯╺╭◮◠"),
];
