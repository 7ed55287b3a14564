//! Decode path: unpack → header split → padding resolve → checksum verify.
//!
//! A linear pipeline with no backtracking; any failed step is terminal.

use crate::alphabet;
use crate::bitbuf::BitBuf;
use crate::checksum::Checksum;
use crate::error::{Error, Result};
use crate::{PARITY_BITS, SYMBOL_BITS};

/// Reassemble the leading alphabet run of `input` into a bitstring.
///
/// Stops without error at the first codepoint outside the alphabet, so
/// trailing garbage or a second concatenated packet may follow a valid one.
/// Returns the accumulated bits and the number of symbols consumed.
fn unpack(input: &str) -> (BitBuf, usize) {
    let mut buf = BitBuf::new();
    let mut symbols = 0usize;
    for c in input.chars() {
        match alphabet::value(c) {
            Some(v) => {
                trace!("symbol {c:?}: {v:09b}");
                buf.push_bits(v as u64, SYMBOL_BITS);
                symbols += 1;
            }
            None => break,
        }
    }
    (buf, symbols)
}

pub(crate) fn decode_with<C: Checksum>(input: &str, prefix: Option<char>) -> Result<(Vec<u8>, usize)> {
    let mut consumed = 0usize;
    let stream = match prefix {
        Some(magic) => {
            if input.is_empty() {
                return Err(Error::EmptyString);
            }
            let rest = input.strip_prefix(magic).ok_or(Error::InvalidPrefix)?;
            consumed += 1;
            rest
        }
        None => {
            // unframed: nothing to parse is a valid empty payload
            if input.is_empty() {
                return Ok((Vec::new(), 0));
            }
            input
        }
    };

    let (buf, symbols) = unpack(stream);
    let num_bits = buf.bit_len();
    consumed += symbols;

    if num_bits == 0 {
        return Err(Error::ShortPacket("input contains no valid codepoints"));
    }
    let header_bits = PARITY_BITS + C::BITS;
    if num_bits < header_bits {
        return Err(Error::ShortPacket("not enough data for header"));
    }

    let payload_bits_padded = num_bits - header_bits;
    let header = buf.get_bits(0, header_bits) as u32;
    let parity = header >> C::BITS;
    let retrieved = header & ((1u32 << C::BITS) - 1);

    let mut padding = payload_bits_padded % 8;
    if padding == 0 && parity == 1 {
        // the encoder flags an 8-bit pad with the parity bit, since by
        // alignment alone it is indistinguishable from a 0-bit pad
        padding = 8;
    }
    debug!("bits {num_bits}, padding {padding}, parity {parity}");
    if payload_bits_padded < padding {
        return Err(Error::InvalidPadding);
    }

    let payload_bits = payload_bits_padded - padding;
    debug_assert_eq!(payload_bits % 8, 0);
    let len = payload_bits / 8;
    let mut payload = Vec::with_capacity(len);
    for i in 0..len {
        payload.push(buf.get_bits(header_bits + i * 8, 8) as u8);
    }

    let actual = C::compute(&payload);
    if actual != retrieved {
        return Err(Error::ChecksumMismatch {
            expected: retrieved,
            actual,
        });
    }
    Ok((payload, consumed))
}
