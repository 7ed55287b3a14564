//! Encode path: checksum → header → bit packing → symbol string.

use crate::alphabet;
use crate::bitbuf::BitBuf;
use crate::checksum::Checksum;
use crate::{PARITY_BITS, SYMBOL_BITS};

/// UTF-8 bytes per symbol; all alphabet blocks (and the magic prefix) sit in
/// U+0800..U+FFFF
const SYMBOL_UTF8_LEN: usize = 3;

/// Serialize `buf` into 9-bit groups, most significant group first.
///
/// `buf.bit_len()` must be a multiple of 9; caller-enforced.
fn pack(buf: &BitBuf, out: &mut String) {
    debug_assert_eq!(buf.bit_len() % SYMBOL_BITS, 0);
    for group in 0..buf.bit_len() / SYMBOL_BITS {
        let chunk = buf.get_bits(group * SYMBOL_BITS, SYMBOL_BITS) as u16;
        trace!("group {group}: {chunk:09b}");
        out.push(alphabet::symbol(chunk));
    }
}

pub(crate) fn encode_with<C: Checksum>(payload: &[u8], prefix: Option<char>) -> String {
    let checksum = C::compute(payload);
    let header_bits = PARITY_BITS + C::BITS;
    let total_bits = header_bits + payload.len() * 8;
    let padding = (SYMBOL_BITS - total_bits % SYMBOL_BITS) % SYMBOL_BITS;
    // 8-bit padding leaves the same byte-alignment residue as 0-bit padding;
    // the parity bit records which one the decoder should undo
    let parity = (padding == 8) as u32;
    let header = (parity << C::BITS) | checksum;
    debug!("checksum {checksum:#x}, padding {padding}, parity {parity}");

    let mut buf = BitBuf::with_capacity(total_bits + padding);
    buf.push_bits(header as u64, header_bits);
    for &byte in payload {
        buf.push_bits(byte as u64, 8);
    }
    buf.push_bits(0, padding);
    debug_assert_eq!(buf.bit_len(), total_bits + padding);

    let symbols = buf.bit_len() / SYMBOL_BITS;
    let mut out = String::with_capacity(SYMBOL_UTF8_LEN * (symbols + prefix.is_some() as usize));
    if let Some(magic) = prefix {
        out.push(magic);
    }
    pack(&buf, &mut out);
    out
}

#[cfg(test)]
mod tests {
    use crate::{
        encode, Checksum, Crc16Xmodem, Profile, Sha256Tag, MAGIC_PREFIX, PARITY_BITS, SYMBOL_BITS,
        TEST_VECTOR,
    };
    use std::sync::Once;

    static INIT: Once = Once::new();

    /// Setup function that is only run once, even if called multiple times.
    fn setup() {
        INIT.call_once(|| {
            let _ = pretty_env_logger::try_init();
        });
    }

    #[test]
    fn test_encode_vectors() {
        setup();
        for (payload, expected) in TEST_VECTOR {
            let payload = hex::decode(payload).unwrap();
            assert_eq!(encode(&payload), expected);
        }
    }

    #[test]
    fn test_encode_framed_vectors() {
        setup();
        assert_eq!(Profile::Framed.encode(b""), "ᚱ⡜⡕");
        assert_eq!(Profile::Framed.encode(b"hello world"), "ᚱ⣦◩⣐▕╣⣆◤⠝▷╲⣘▐");
    }

    #[test]
    fn test_encode_is_deterministic() {
        setup();
        for payload in [&b""[..], b"\x00", b"hello world", b"\xff\xff\xff"] {
            assert_eq!(encode(payload), encode(payload));
            assert_eq!(Profile::Framed.encode(payload), Profile::Framed.encode(payload));
        }
    }

    #[test]
    fn test_symbol_counts() {
        setup();
        // fast profile: ceil((17 + 8n) / 9) symbols, no prefix
        for n in 0..64usize {
            let payload = vec![0xA5; n];
            let total = PARITY_BITS + Crc16Xmodem::BITS + 8 * n;
            let expected = total.div_ceil(SYMBOL_BITS);
            assert_eq!(encode(&payload).chars().count(), expected);

            let total = PARITY_BITS + Sha256Tag::BITS + 8 * n;
            let expected = 1 + total.div_ceil(SYMBOL_BITS);
            assert_eq!(Profile::Framed.encode(&payload).chars().count(), expected);
        }
    }

    #[test]
    fn test_framed_output_starts_with_magic() {
        setup();
        for payload in [&b""[..], b"x", b"framed payload"] {
            let encoded = Profile::Framed.encode(payload);
            assert!(encoded.starts_with(MAGIC_PREFIX));
        }
    }
}
