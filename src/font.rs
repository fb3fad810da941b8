//! Glyph table and the range remap from raw character codes to table rows.
//!
//! The table packs a fragmented legacy code page (ASCII + Cyrillic) into
//! contiguous storage: rows 0..=90 are ASCII `' '..='z'`, rows 95..=158 are
//! Cyrillic reached through two disjoint offset corrections. Each row holds
//! the 5 data columns of a 5x8 glyph, LSB at the top; column 5 of every
//! glyph is a blank spacer synthesized by the renderer, never stored.

/// Result of remapping a raw code into the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlyphLookup {
    /// Row index into [`CHAR_MAP`].
    Found(usize),
    /// Code falls outside all three remap buckets.
    OutOfRange,
}

/// Total remap from a raw character code to a table row.
///
/// `font = code - '0' + 16` (wrapping), then:
/// * `font <= 90` — ASCII block, row is `font` itself
/// * `112..=159` — upper Cyrillic block, shifted down 17
/// * `96..=111` — lower Cyrillic tail, shifted up 47
///
/// Codes outside every bucket report [`GlyphLookup::OutOfRange`] instead of
/// falling through unassigned.
pub fn resolve(code: u8) -> GlyphLookup {
    let font = code.wrapping_sub(b'0').wrapping_add(16);
    match font {
        0..=90 => GlyphLookup::Found(font as usize),
        112..=159 => GlyphLookup::Found(font as usize - 17),
        96..=111 => GlyphLookup::Found(font as usize + 47),
        _ => GlyphLookup::OutOfRange,
    }
}

/// Fetch one glyph column for a raw code. Column 5 is the inter-glyph
/// spacer and always blank; out-of-range codes render as blank columns
/// (space), which keeps the print path total.
pub fn glyph_column(code: u8, col: u8) -> u8 {
    if col >= 5 {
        return 0;
    }
    match resolve(code) {
        GlyphLookup::Found(row) => CHAR_MAP[row][col as usize],
        GlyphLookup::OutOfRange => 0,
    }
}

/// 5-column bitmaps, one row per normalized glyph index.
pub const CHAR_MAP: [[u8; 5]; 159] = [
    [0x00, 0x00, 0x00, 0x00, 0x00], // 0: ' '
    [0x00, 0x00, 0x5F, 0x00, 0x00], // 1: '!'
    [0x00, 0x07, 0x00, 0x07, 0x00], // 2: '"'
    [0x14, 0x7F, 0x14, 0x7F, 0x14], // 3: '#'
    [0x24, 0x2A, 0x7F, 0x2A, 0x12], // 4: '$'
    [0x23, 0x13, 0x08, 0x64, 0x62], // 5: '%'
    [0x36, 0x49, 0x55, 0x22, 0x50], // 6: '&'
    [0x00, 0x05, 0x03, 0x00, 0x00], // 7: '\''
    [0x00, 0x1C, 0x22, 0x41, 0x00], // 8: '('
    [0x00, 0x41, 0x22, 0x1C, 0x00], // 9: ')'
    [0x14, 0x08, 0x3E, 0x08, 0x14], // 10: '*'
    [0x08, 0x08, 0x3E, 0x08, 0x08], // 11: '+'
    [0x00, 0x50, 0x30, 0x00, 0x00], // 12: ','
    [0x08, 0x08, 0x08, 0x08, 0x08], // 13: '-'
    [0x00, 0x60, 0x60, 0x00, 0x00], // 14: '.'
    [0x20, 0x10, 0x08, 0x04, 0x02], // 15: '/'
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 16: '0'
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 17: '1'
    [0x42, 0x61, 0x51, 0x49, 0x46], // 18: '2'
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 19: '3'
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 20: '4'
    [0x27, 0x45, 0x45, 0x45, 0x39], // 21: '5'
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 22: '6'
    [0x01, 0x71, 0x09, 0x05, 0x03], // 23: '7'
    [0x36, 0x49, 0x49, 0x49, 0x36], // 24: '8'
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 25: '9'
    [0x00, 0x36, 0x36, 0x00, 0x00], // 26: ':'
    [0x00, 0x56, 0x36, 0x00, 0x00], // 27: ';'
    [0x08, 0x14, 0x22, 0x41, 0x00], // 28: '<'
    [0x14, 0x14, 0x14, 0x14, 0x14], // 29: '='
    [0x00, 0x41, 0x22, 0x14, 0x08], // 30: '>'
    [0x02, 0x01, 0x51, 0x09, 0x06], // 31: '?'
    [0x32, 0x49, 0x79, 0x41, 0x3E], // 32: '@'
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // 33: 'A'
    [0x7F, 0x49, 0x49, 0x49, 0x36], // 34: 'B'
    [0x3E, 0x41, 0x41, 0x41, 0x22], // 35: 'C'
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // 36: 'D'
    [0x7F, 0x49, 0x49, 0x49, 0x41], // 37: 'E'
    [0x7F, 0x09, 0x09, 0x09, 0x01], // 38: 'F'
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // 39: 'G'
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // 40: 'H'
    [0x00, 0x41, 0x7F, 0x41, 0x00], // 41: 'I'
    [0x20, 0x40, 0x41, 0x3F, 0x01], // 42: 'J'
    [0x7F, 0x08, 0x14, 0x22, 0x41], // 43: 'K'
    [0x7F, 0x40, 0x40, 0x40, 0x40], // 44: 'L'
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // 45: 'M'
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // 46: 'N'
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // 47: 'O'
    [0x7F, 0x09, 0x09, 0x09, 0x06], // 48: 'P'
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // 49: 'Q'
    [0x7F, 0x09, 0x19, 0x29, 0x46], // 50: 'R'
    [0x46, 0x49, 0x49, 0x49, 0x31], // 51: 'S'
    [0x01, 0x01, 0x7F, 0x01, 0x01], // 52: 'T'
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // 53: 'U'
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // 54: 'V'
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // 55: 'W'
    [0x63, 0x14, 0x08, 0x14, 0x63], // 56: 'X'
    [0x07, 0x08, 0x70, 0x08, 0x07], // 57: 'Y'
    [0x61, 0x51, 0x49, 0x45, 0x43], // 58: 'Z'
    [0x00, 0x7F, 0x41, 0x41, 0x00], // 59: '['
    [0x02, 0x04, 0x08, 0x10, 0x20], // 60: '\\'
    [0x00, 0x41, 0x41, 0x7F, 0x00], // 61: ']'
    [0x04, 0x02, 0x01, 0x02, 0x04], // 62: '^'
    [0x40, 0x40, 0x40, 0x40, 0x40], // 63: '_'
    [0x00, 0x01, 0x02, 0x04, 0x00], // 64: '`'
    [0x20, 0x54, 0x54, 0x54, 0x78], // 65: 'a'
    [0x7F, 0x48, 0x44, 0x44, 0x38], // 66: 'b'
    [0x38, 0x44, 0x44, 0x44, 0x20], // 67: 'c'
    [0x38, 0x44, 0x44, 0x48, 0x7F], // 68: 'd'
    [0x38, 0x54, 0x54, 0x54, 0x18], // 69: 'e'
    [0x08, 0x7E, 0x09, 0x01, 0x02], // 70: 'f'
    [0x0C, 0x52, 0x52, 0x52, 0x3E], // 71: 'g'
    [0x7F, 0x08, 0x04, 0x04, 0x78], // 72: 'h'
    [0x00, 0x44, 0x7D, 0x40, 0x00], // 73: 'i'
    [0x20, 0x40, 0x44, 0x3D, 0x00], // 74: 'j'
    [0x7F, 0x10, 0x28, 0x44, 0x00], // 75: 'k'
    [0x00, 0x41, 0x7F, 0x40, 0x00], // 76: 'l'
    [0x7C, 0x04, 0x18, 0x04, 0x78], // 77: 'm'
    [0x7C, 0x08, 0x04, 0x04, 0x78], // 78: 'n'
    [0x38, 0x44, 0x44, 0x44, 0x38], // 79: 'o'
    [0x7C, 0x14, 0x14, 0x14, 0x08], // 80: 'p'
    [0x08, 0x14, 0x14, 0x18, 0x7C], // 81: 'q'
    [0x7C, 0x08, 0x04, 0x04, 0x08], // 82: 'r'
    [0x48, 0x54, 0x54, 0x54, 0x20], // 83: 's'
    [0x04, 0x3F, 0x44, 0x40, 0x20], // 84: 't'
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // 85: 'u'
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // 86: 'v'
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // 87: 'w'
    [0x44, 0x28, 0x10, 0x28, 0x44], // 88: 'x'
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // 89: 'y'
    [0x44, 0x64, 0x54, 0x4C, 0x44], // 90: 'z'
    // 91..=94 keep the ASCII tail aligned; no remap bucket reaches them.
    [0x00, 0x08, 0x36, 0x41, 0x00], // 91: '{'
    [0x00, 0x00, 0x7F, 0x00, 0x00], // 92: '|'
    [0x00, 0x41, 0x36, 0x08, 0x00], // 93: '}'
    [0x08, 0x04, 0x08, 0x10, 0x08], // 94: '~'
    // Upper Cyrillic block (raw codes 144..=191 land at rows 95..=142).
    [0x7E, 0x11, 0x11, 0x11, 0x7E], // 95: 'А'
    [0x7F, 0x49, 0x49, 0x49, 0x31], // 96: 'Б'
    [0x7F, 0x49, 0x49, 0x49, 0x36], // 97: 'В'
    [0x7F, 0x01, 0x01, 0x01, 0x03], // 98: 'Г'
    [0x60, 0x3E, 0x21, 0x3F, 0x60], // 99: 'Д'
    [0x7F, 0x49, 0x49, 0x49, 0x41], // 100: 'Е'
    [0x63, 0x14, 0x7F, 0x14, 0x63], // 101: 'Ж'
    [0x22, 0x41, 0x49, 0x49, 0x36], // 102: 'З'
    [0x7F, 0x10, 0x08, 0x04, 0x7F], // 103: 'И'
    [0x7E, 0x10, 0x09, 0x04, 0x7E], // 104: 'Й'
    [0x7F, 0x08, 0x14, 0x22, 0x41], // 105: 'К'
    [0x40, 0x3E, 0x01, 0x01, 0x7F], // 106: 'Л'
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // 107: 'М'
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // 108: 'Н'
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // 109: 'О'
    [0x7F, 0x01, 0x01, 0x01, 0x7F], // 110: 'П'
    [0x7F, 0x09, 0x09, 0x09, 0x06], // 111: 'Р'
    [0x3E, 0x41, 0x41, 0x41, 0x22], // 112: 'С'
    [0x01, 0x01, 0x7F, 0x01, 0x01], // 113: 'Т'
    [0x27, 0x48, 0x48, 0x48, 0x3F], // 114: 'У'
    [0x0E, 0x11, 0x7F, 0x11, 0x0E], // 115: 'Ф'
    [0x63, 0x14, 0x08, 0x14, 0x63], // 116: 'Х'
    [0x3F, 0x20, 0x20, 0x3F, 0x60], // 117: 'Ц'
    [0x07, 0x08, 0x08, 0x08, 0x7F], // 118: 'Ч'
    [0x7F, 0x40, 0x7E, 0x40, 0x7F], // 119: 'Ш'
    [0x3F, 0x20, 0x3E, 0x20, 0xFF], // 120: 'Щ'
    [0x01, 0x7F, 0x48, 0x48, 0x30], // 121: 'Ъ'
    [0x7F, 0x48, 0x30, 0x00, 0x7F], // 122: 'Ы'
    [0x7F, 0x48, 0x48, 0x48, 0x30], // 123: 'Ь'
    [0x22, 0x41, 0x49, 0x49, 0x3E], // 124: 'Э'
    [0x7F, 0x08, 0x3E, 0x41, 0x3E], // 125: 'Ю'
    [0x46, 0x29, 0x19, 0x09, 0x7F], // 126: 'Я'
    [0x20, 0x54, 0x54, 0x54, 0x78], // 127: 'а'
    [0x3C, 0x4A, 0x4A, 0x49, 0x31], // 128: 'б'
    [0x7C, 0x54, 0x54, 0x54, 0x28], // 129: 'в'
    [0x7C, 0x04, 0x04, 0x04, 0x0C], // 130: 'г'
    [0x60, 0x3C, 0x24, 0x3C, 0x60], // 131: 'д'
    [0x38, 0x54, 0x54, 0x54, 0x18], // 132: 'е'
    [0x44, 0x28, 0x7C, 0x28, 0x44], // 133: 'ж'
    [0x28, 0x44, 0x54, 0x54, 0x28], // 134: 'з'
    [0x7C, 0x20, 0x10, 0x08, 0x7C], // 135: 'и'
    [0x7C, 0x21, 0x12, 0x09, 0x7C], // 136: 'й'
    [0x7C, 0x10, 0x28, 0x44, 0x00], // 137: 'к'
    [0x40, 0x38, 0x04, 0x04, 0x7C], // 138: 'л'
    [0x7C, 0x08, 0x10, 0x08, 0x7C], // 139: 'м'
    [0x7C, 0x10, 0x10, 0x10, 0x7C], // 140: 'н'
    [0x38, 0x44, 0x44, 0x44, 0x38], // 141: 'о'
    [0x7C, 0x04, 0x04, 0x04, 0x7C], // 142: 'п'
    // Lower Cyrillic tail (raw codes 128..=143 land at rows 143..=158).
    [0x7C, 0x14, 0x14, 0x14, 0x08], // 143: 'р'
    [0x38, 0x44, 0x44, 0x44, 0x20], // 144: 'с'
    [0x04, 0x04, 0x7C, 0x04, 0x04], // 145: 'т'
    [0x0C, 0x50, 0x50, 0x50, 0x3C], // 146: 'у'
    [0x18, 0x24, 0x7E, 0x24, 0x18], // 147: 'ф'
    [0x44, 0x28, 0x10, 0x28, 0x44], // 148: 'х'
    [0x3C, 0x20, 0x20, 0x3C, 0x60], // 149: 'ц'
    [0x0C, 0x10, 0x10, 0x10, 0x7C], // 150: 'ч'
    [0x7C, 0x40, 0x7C, 0x40, 0x7C], // 151: 'ш'
    [0x3C, 0x20, 0x3C, 0x20, 0xFC], // 152: 'щ'
    [0x04, 0x7C, 0x50, 0x50, 0x20], // 153: 'ъ'
    [0x7C, 0x50, 0x20, 0x00, 0x7C], // 154: 'ы'
    [0x7C, 0x50, 0x50, 0x50, 0x20], // 155: 'ь'
    [0x28, 0x44, 0x54, 0x54, 0x38], // 156: 'э'
    [0x7C, 0x10, 0x38, 0x44, 0x38], // 157: 'ю'
    [0x48, 0x34, 0x14, 0x14, 0x7C], // 158: 'я'
];
