//! Host-side shadow of the panel's byte-packed pixel memory.
//!
//! Layout mirrors the panel in vertical addressing: column-major,
//! `index = page + column * page_count`, bit `b` of a byte is pixel
//! `(column, page * 8 + b)`. Allocated once at configuration time, never
//! resized. All writes OR new bits in; anything outside the panel bounds is
//! a no-op.

use alloc::vec;
use alloc::vec::Vec;

use crate::display::WIDTH;

pub struct Shadow {
    bytes: Vec<u8>,
    page_count: u8,
}

impl Shadow {
    pub fn new(page_count: u8) -> Self {
        Self {
            bytes: vec![0; WIDTH as usize * page_count as usize],
            page_count,
        }
    }

    pub fn index(&self, x: u16, page: u8) -> usize {
        page as usize + x as usize * self.page_count as usize
    }

    /// OR `bits` into the byte at `(x, page)` and return the merged byte.
    /// Out-of-bounds writes change nothing and hand `bits` back, so callers
    /// can stream the result to the panel unconditionally.
    pub fn set(&mut self, x: u16, page: u8, bits: u8) -> u8 {
        if x >= WIDTH as u16 || page >= self.page_count {
            return bits;
        }
        let index = self.index(x, page);
        self.bytes[index] |= bits;
        self.bytes[index]
    }

    pub fn get(&self, x: u16, page: u8) -> u8 {
        if x >= WIDTH as u16 || page >= self.page_count {
            return 0;
        }
        self.bytes[self.index(x, page)]
    }

    pub fn clear(&mut self) {
        self.bytes.fill(0);
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_major_page_packed_indexing() {
        let s = Shadow::new(8);
        assert_eq!(s.index(0, 0), 0);
        assert_eq!(s.index(0, 7), 7);
        assert_eq!(s.index(1, 0), 8);
        assert_eq!(s.index(127, 7), 1023);
    }

    #[test]
    fn set_merges_and_returns_byte() {
        let mut s = Shadow::new(4);
        assert_eq!(s.set(3, 1, 0x01), 0x01);
        assert_eq!(s.set(3, 1, 0x80), 0x81);
        assert_eq!(s.get(3, 1), 0x81);
    }

    #[test]
    fn out_of_bounds_is_a_no_op() {
        let mut s = Shadow::new(4);
        assert_eq!(s.set(128, 0, 0xFF), 0xFF);
        assert_eq!(s.set(0, 4, 0xFF), 0xFF);
        assert!(s.as_bytes().iter().all(|&b| b == 0));
    }

    #[test]
    fn clear_zeroes_everything() {
        let mut s = Shadow::new(8);
        s.set(10, 2, 0x55);
        s.clear();
        assert!(s.as_bytes().iter().all(|&b| b == 0));
    }
}
