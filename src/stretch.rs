//! Bit-doubling used to synthesize 2x scale from 1x glyph columns.

/// Stretch an 8-bit column into 16 bits by duplicating every bit into an
/// adjacent pair: output bits `2i` and `2i + 1` both equal input bit `i`.
///
/// The low byte of the result covers the upper page of a doubled cell and
/// the high byte the lower page; callers OR the halves straight into
/// framebuffer bytes, so the doubling must be bit-exact.
pub fn stretch(x: u8) -> u16 {
    let mut x = x as u16;
    x = (x & 0xF0) << 4 | (x & 0x0F);
    x = (x << 2 | x) & 0x3333;
    x = (x << 1 | x) & 0x5555;
    x | x << 1
}
