//! Payload checksum strategies.
//!
//! One strategy per protocol profile, never mixed per call. Both are pure
//! functions of the payload bytes (no salt, no external state), so
//! encode-then-decode round-trips deterministically.

use crc::{Crc, CRC_16_XMODEM};
use sha2::{Digest, Sha256};

/// Fixed-width integrity checksum over raw payload bytes.
///
/// Detects accidental corruption only; this is not a MAC and resists no
/// adversary who knows the algorithm.
pub trait Checksum {
    /// checksum width in bits
    const BITS: usize;

    fn compute(payload: &[u8]) -> u32;
}

const XMODEM: Crc<u16> = Crc::<u16>::new(&CRC_16_XMODEM);

/// CRC-16/XMODEM, the fast non-cryptographic strategy.
pub struct Crc16Xmodem;

impl Checksum for Crc16Xmodem {
    const BITS: usize = 16;

    #[inline(always)]
    fn compute(payload: &[u8]) -> u32 {
        XMODEM.checksum(payload) as u32
    }
}

/// Low 17 bits of the big-endian SHA-256 digest.
pub struct Sha256Tag;

impl Checksum for Sha256Tag {
    const BITS: usize = 17;

    #[inline(always)]
    fn compute(payload: &[u8]) -> u32 {
        let digest = Sha256::digest(payload);
        let tail = u32::from_be_bytes([digest[28], digest[29], digest[30], digest[31]]);
        tail & 0x1_FFFF
    }
}
