//! The 512-symbol alphabet.
//!
//! Four contiguous Unicode blocks, concatenated in value order: Braille
//! Patterns (256), Box Drawing (128), Block Elements (32), Geometric Shapes
//! (96). Every symbol is a single BMP codepoint, so the symbol↔value
//! bijection is plain codepoint arithmetic and needs no table.

/// (first codepoint, symbol count) per block, in value order
const BLOCKS: [(u32, u32); 4] = [
    (0x2800, 256), // Braille Patterns
    (0x2500, 128), // Box Drawing
    (0x2580, 32),  // Block Elements
    (0x25A0, 96),  // Geometric Shapes
];

/// Number of symbols in the alphabet.
pub const SIZE: u16 = 512;

/// Symbol for `value`.
///
/// Total over `0..512`; anything else is a caller bug, not a runtime error
/// path.
#[inline(always)]
pub fn symbol(value: u16) -> char {
    debug_assert!(value < SIZE);
    let mut rest = value as u32;
    for (start, len) in BLOCKS {
        if rest < len {
            // every codepoint in these blocks is a valid scalar
            return char::from_u32(start + rest).unwrap();
        }
        rest -= len;
    }
    unreachable!("alphabet value out of range: {value}")
}

/// Value of `symbol`, or `None` when the codepoint is outside the alphabet.
///
/// Absence is not an error: the unpacker uses it to find the end of a
/// packet.
#[inline(always)]
pub fn value(symbol: char) -> Option<u16> {
    let cp = symbol as u32;
    let mut base = 0u32;
    for (start, len) in BLOCKS {
        if cp >= start && cp < start + len {
            return Some((base + cp - start) as u16);
        }
        base += len;
    }
    None
}
