//! Stateful normalizer for the 2-byte legacy Cyrillic encoding.
//!
//! Input arrives one raw byte at a time. Plain ASCII passes straight
//! through; bytes above 127 are continuation bytes of a 2-byte sequence and
//! get resolved against one byte of lookahead state, with a handful of
//! hardcoded digraph substitutions for characters the font table has no row
//! for (the diaeresis vowels and the long dash).

/// What one consumed byte turned into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Render this raw code (feed it through the font remap) and advance.
    Glyph(u8),
    /// Advance the line, reset the column.
    Newline,
    /// Consume silently: no glyph, no cursor movement.
    Suppress,
}

/// Lookahead decoder; one instance per print stream.
#[derive(Debug, Default)]
pub struct Normalizer {
    last: u8,
}

impl Normalizer {
    pub fn new() -> Self {
        Self { last: 0 }
    }

    /// Consume one raw byte. The lookahead state updates on every byte, so
    /// each digraph substitution fires exactly once per pair.
    pub fn step(&mut self, byte: u8) -> Step {
        let out = if byte == 10 {
            Step::Newline
        } else if byte <= 127 {
            Step::Glyph(byte)
        } else {
            match (self.last, byte) {
                (209, 145) => Step::Glyph(181), // ё rendered as е
                (208, 129) => Step::Glyph(149), // Ё rendered as Е
                (226, 128) => Step::Suppress,   // first half of a long dash
                (128, 147) => Step::Glyph(45),  // long dash rendered as '-'
                _ if byte <= 191 => Step::Glyph(byte),
                // Lead bytes (208/209/226 themselves) and anything else
                // above 191 carry no glyph of their own.
                _ => Step::Suppress,
            }
        };
        self.last = byte;
        out
    }
}
