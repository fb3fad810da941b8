//! Driver core: configuration, panel bring-up, cursor/layout state machine
//! and the text/number printing pipeline.
//!
//! Buffering mode is an explicit runtime value, not a build-time flag:
//!
//! * [`DisplayMode::Direct`] — no host buffer; every write goes straight to
//!   the panel and overwrites whatever the addressed bytes held.
//! * [`DisplayMode::HardwareBuffer`] — the panel's own memory is the
//!   buffer; writes read the addressed byte back, OR the new bits in and
//!   write the merge.
//! * [`DisplayMode::SoftwareBuffer`] — a full in-memory shadow; writes
//!   merge into the shadow and are either pushed per byte (`auto_send`) or
//!   deferred until [`Oled::flush`].

use core::fmt;

use crate::buffer::Shadow;
use crate::bus::{Bus, COMMAND_MODE, DATA_MODE};
use crate::decode::{Normalizer, Step};
use crate::error::Error;
use crate::font;
use crate::stretch::stretch;

/// Panel width in pixels.
pub const WIDTH: u8 = 128;
/// Text cells per line at 1x (6-pixel cells).
pub const TEXT_COLUMNS: u8 = 20;

/// Default panel bus address.
pub const DEFAULT_ADDRESS: u8 = 0x3C;

const SET_COLUMN_ADDR: u8 = 0x21;
const SET_PAGE_ADDR: u8 = 0x22;
const SET_CONTRAST: u8 = 0x81;
const SET_COM_PINS: u8 = 0xDA;
const SET_MULTIPLEX: u8 = 0xA8;
const SEGMENT_REMAP_OFF: u8 = 0xA0;
const COM_SCAN_FORWARD: u8 = 0xC0;

/// Opaque bring-up sequence, sent once at construction before the
/// height-dependent pairs.
const INIT_SEQUENCE: [u8; 14] = [
    0xAE, // display off
    0xD5, 0x80, // clock divide ratio
    0x8D, 0x14, // charge pump on
    0x20, 0x01, // vertical addressing
    0xA1, // flip horizontally
    0xC8, // flip vertically
    0x81, 0xCF, // contrast
    0xDB, 0x40, // vcom detect
    0xAF, // display on
];

/// Panel height selector; fixes the page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelHeight {
    H32,
    H64,
}

impl PanelHeight {
    pub fn pixels(self) -> u8 {
        match self {
            PanelHeight::H32 => 32,
            PanelHeight::H64 => 64,
        }
    }

    pub fn page_count(self) -> u8 {
        match self {
            PanelHeight::H32 => 4,
            PanelHeight::H64 => 8,
        }
    }

    fn com_pins(self) -> u8 {
        match self {
            PanelHeight::H32 => 0x02,
            PanelHeight::H64 => 0x12,
        }
    }

    fn multiplex(self) -> u8 {
        match self {
            PanelHeight::H32 => 0x1F,
            PanelHeight::H64 => 0x3F,
        }
    }
}

/// Buffering strategy, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// No host buffer; point writes overwrite the whole page byte.
    Direct,
    /// Read-modify-write against the panel's own memory.
    HardwareBuffer,
    /// In-memory shadow; `auto_send` pushes each merged byte immediately,
    /// otherwise pixel state reaches the panel only on [`Oled::flush`].
    SoftwareBuffer { auto_send: bool },
}

/// Construction-time configuration surface.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    pub height: PanelHeight,
    pub mode: DisplayMode,
    pub address: u8,
    pub clock_hz: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            height: PanelHeight::H64,
            mode: DisplayMode::Direct,
            address: DEFAULT_ADDRESS,
            clock_hz: 400_000,
        }
    }
}

/// Rendering core for one panel on one exclusively owned bus.
pub struct Oled<B> {
    bus: B,
    address: u8,
    mode: DisplayMode,
    page_count: u8,
    height_px: u8,
    shadow: Option<Shadow>,
    decoder: Normalizer,
    col: u8,
    row: u8,
    scale: u8,
    inverse: bool,
    saturated: bool,
}

impl<B: Bus> Oled<B> {
    /// Bring the panel up and home the cursor.
    pub fn new(mut bus: B, config: Config) -> Result<Self, Error> {
        bus.set_clock_rate(config.clock_hz)?;

        let shadow = match config.mode {
            DisplayMode::SoftwareBuffer { .. } => Some(Shadow::new(config.height.page_count())),
            _ => None,
        };

        let mut oled = Self {
            bus,
            address: config.address,
            mode: config.mode,
            page_count: config.height.page_count(),
            height_px: config.height.pixels(),
            shadow,
            decoder: Normalizer::new(),
            col: 0,
            row: 0,
            scale: 1,
            inverse: false,
            saturated: false,
        };

        oled.bus.start_transaction(oled.address)?;
        oled.bus.write_byte(COMMAND_MODE)?;
        for &b in INIT_SEQUENCE.iter() {
            oled.bus.write_byte(b)?;
        }
        oled.bus.write_byte(SET_COM_PINS)?;
        oled.bus.write_byte(config.height.com_pins())?;
        oled.bus.write_byte(SET_MULTIPLEX)?;
        oled.bus.write_byte(config.height.multiplex())?;
        oled.bus.end_transaction()?;

        log::debug!(
            "panel up: {}x{}, mode {:?}",
            WIDTH,
            oled.height_px,
            oled.mode
        );

        oled.set_cursor(0, 0)?;
        Ok(oled)
    }

    /// Tear down, handing the bus back.
    pub fn release(self) -> B {
        self.bus
    }

    // ---- transactions ----

    fn command_transaction(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.bus.start_transaction(self.address)?;
        self.bus.write_byte(COMMAND_MODE)?;
        for &b in bytes {
            self.bus.write_byte(b)?;
        }
        self.bus.end_transaction()?;
        Ok(())
    }

    fn data_transaction(&mut self, bytes: &[u8]) -> Result<(), Error> {
        self.bus.start_transaction(self.address)?;
        self.bus.write_byte(DATA_MODE)?;
        for &b in bytes {
            self.bus.write_byte(b)?;
        }
        self.bus.end_transaction()?;
        Ok(())
    }

    /// Address a write window: columns `x0..=x1`, pages `p0..=p1`.
    fn set_window(&mut self, x0: u8, x1: u8, p0: u8, p1: u8) -> Result<(), Error> {
        self.command_transaction(&[SET_COLUMN_ADDR, x0, x1, SET_PAGE_ADDR, p0, p1])
    }

    /// Re-issue the window for the current text cell without touching the
    /// saturation flag.
    fn window_at_cursor(&mut self) -> Result<(), Error> {
        let x0 = self.col as u16 * 6 * self.scale as u16;
        let x1 = x0 + 6 * self.scale as u16 - 1;
        self.set_window(
            x0.min(0xFF) as u8,
            x1.min(0xFF) as u8,
            self.row,
            self.row + self.scale - 1,
        )
    }

    /// Read-modify-write one panel byte (hardware-readback mode).
    pub(crate) fn rmw_byte(&mut self, x: u16, page: u8, bits: u8) -> Result<(), Error> {
        if x >= WIDTH as u16 || page >= self.page_count {
            return Ok(());
        }
        self.set_window(x as u8, x as u8, page, page)?;
        let existing = self.bus.read_byte(self.address)?;
        self.data_transaction(&[existing | bits])
    }

    // ---- cursor / layout ----

    /// Place the cursor at a text cell and address the matching window.
    pub fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Error> {
        self.col = col;
        self.row = row;
        if row < self.page_count {
            self.saturated = false;
        }
        self.window_at_cursor()
    }

    pub fn home(&mut self) -> Result<(), Error> {
        self.set_cursor(0, 0)
    }

    /// Drop one text line: the row saturates at the bottom of the panel
    /// instead of scrolling.
    fn advance_row(&mut self) {
        let next = self.row.saturating_add(self.scale);
        if next > self.page_count - 1 {
            self.row = self.page_count - 1;
            self.saturated = true;
        } else {
            self.row = next;
        }
    }

    /// Line break: next row, column zero.
    pub fn new_line(&mut self) -> Result<(), Error> {
        self.advance_row();
        self.col = 0;
        self.window_at_cursor()
    }

    /// True once a line advance had to be clamped at the bottom row. A
    /// terminal/overflow signal, not an error: further prints overwrite the
    /// last line.
    pub fn is_end(&self) -> bool {
        self.saturated
    }

    pub fn cursor(&self) -> (u8, u8) {
        (self.col, self.row)
    }

    pub fn scale1x(&mut self) -> Result<(), Error> {
        self.scale = 1;
        self.set_cursor(self.col, self.row)
    }

    pub fn scale2x(&mut self) -> Result<(), Error> {
        self.scale = 2;
        self.set_cursor(self.col, self.row)
    }

    pub fn set_inverse(&mut self, inverse: bool) {
        self.inverse = inverse;
    }

    pub(crate) fn height_px(&self) -> u8 {
        self.height_px
    }

    pub(crate) fn mode(&self) -> DisplayMode {
        self.mode
    }

    pub(crate) fn shadow_mut(&mut self) -> Option<&mut Shadow> {
        self.shadow.as_mut()
    }

    /// Shadow buffer contents, if this mode holds one.
    pub fn buffer(&self) -> Option<&[u8]> {
        self.shadow.as_ref().map(|s| s.as_bytes())
    }

    // ---- glyph rendering ----

    /// Render one resolved glyph code at the current cursor cell. Cursor
    /// advance is the caller's job.
    fn draw_glyph(&mut self, code: u8) -> Result<(), Error> {
        let scale = self.scale;
        let base_x = self.col as u16 * 6 * scale as u16;

        if self.mode == DisplayMode::HardwareBuffer {
            for col_i in 0..6u8 {
                let mut bits = font::glyph_column(code, col_i);
                if self.inverse {
                    bits = !bits;
                }
                let x = base_x + col_i as u16 * scale as u16;
                if scale == 1 {
                    self.rmw_byte(x, self.row, bits)?;
                } else {
                    let wide = stretch(bits);
                    let (lo, hi) = (wide as u8, (wide >> 8) as u8);
                    for dup in 0..2u16 {
                        self.rmw_byte(x + dup, self.row, lo)?;
                        self.rmw_byte(x + dup, self.row + 1, hi)?;
                    }
                }
            }
            return Ok(());
        }

        // Direct and software-shadow paths emit bytes in the window's
        // vertical-addressing order: page-first within each panel column.
        let mut out = [0u8; 24];
        let mut n = 0;
        for col_i in 0..6u8 {
            let mut bits = font::glyph_column(code, col_i);
            if self.inverse {
                bits = !bits;
            }
            let x = base_x + col_i as u16 * scale as u16;
            let (lo, hi) = if scale == 2 {
                let wide = stretch(bits);
                (wide as u8, (wide >> 8) as u8)
            } else {
                (bits, 0)
            };
            for dup in 0..scale as u16 {
                for p in 0..scale {
                    let b = if p == 0 { lo } else { hi };
                    let row = self.row;
                    let b = match self.shadow.as_mut() {
                        Some(s) => s.set(x + dup, row + p, b),
                        None => b,
                    };
                    out[n] = b;
                    n += 1;
                }
            }
        }

        match self.mode {
            DisplayMode::SoftwareBuffer { auto_send: false } => Ok(()),
            _ => self.data_transaction(&out[..n]),
        }
    }

    // ---- printing ----

    /// Feed one raw byte through the encoding normalizer and render the
    /// outcome.
    pub fn print_char(&mut self, byte: u8) -> Result<(), Error> {
        match self.decoder.step(byte) {
            Step::Newline => self.new_line(),
            Step::Suppress => Ok(()),
            Step::Glyph(code) => {
                self.draw_glyph(code)?;
                self.col += self.scale;
                if self.col >= TEXT_COLUMNS {
                    self.col = 0;
                    self.advance_row();
                }
                self.window_at_cursor()
            }
        }
    }

    /// Render one character in the current cell, then drop a line straight
    /// down: the column is kept, not advanced and not reset.
    pub fn print_char_ln(&mut self, byte: u8) -> Result<(), Error> {
        self.draw_glyph(byte)?;
        self.advance_row();
        self.window_at_cursor()
    }

    pub fn print(&mut self, s: &str) -> Result<(), Error> {
        for b in s.bytes() {
            self.print_char(b)?;
        }
        Ok(())
    }

    pub fn println(&mut self, s: &str) -> Result<(), Error> {
        self.print(s)?;
        self.new_line()
    }

    pub fn print_u32(&mut self, mut value: u32) -> Result<(), Error> {
        let mut digits = [0u8; 10];
        let mut count = 0;
        loop {
            digits[count] = (value % 10) as u8;
            value /= 10;
            count += 1;
            if value == 0 {
                break;
            }
        }
        for i in (0..count).rev() {
            self.print_char(b'0' + digits[i])?;
        }
        Ok(())
    }

    pub fn println_u32(&mut self, value: u32) -> Result<(), Error> {
        self.print_u32(value)?;
        self.new_line()
    }

    /// Fixed-radix decimal rendering: sign, integer digits, then
    /// `decimals` fractional digits through the same character path.
    pub fn print_float(&mut self, value: f32, decimals: u8) -> Result<(), Error> {
        let mut value = value;
        if value < 0.0 {
            self.print_char(b'-')?;
            value = -value;
        }
        let integer = value as u32;
        self.print_u32(integer)?;
        self.print_char(b'.')?;
        let mut frac = value - integer as f32;
        for _ in 0..decimals {
            frac *= 10.0;
            let digit = frac as u32;
            self.print_char(b'0' + (digit % 10) as u8)?;
            frac -= digit as f32;
        }
        Ok(())
    }

    pub fn println_float(&mut self, value: f32, decimals: u8) -> Result<(), Error> {
        self.print_float(value, decimals)?;
        self.new_line()
    }

    // ---- whole-panel operations ----

    /// Zero the full addressed region of the panel and any host buffer.
    pub fn clear(&mut self) -> Result<(), Error> {
        self.set_window(0, WIDTH - 1, 0, self.page_count - 1)?;
        self.bus.start_transaction(self.address)?;
        self.bus.write_byte(DATA_MODE)?;
        for _ in 0..WIDTH as usize * self.page_count as usize {
            self.bus.write_byte(0)?;
        }
        self.bus.end_transaction()?;
        if let Some(shadow) = self.shadow.as_mut() {
            shadow.clear();
        }
        log::debug!("panel cleared");
        Ok(())
    }

    /// Push the whole shadow buffer in one transaction. No-op in modes
    /// without a host buffer.
    pub fn flush(&mut self) -> Result<(), Error> {
        if self.shadow.is_none() {
            return Ok(());
        }
        self.set_window(0, WIDTH - 1, 0, self.page_count - 1)?;
        self.bus.start_transaction(self.address)?;
        self.bus.write_byte(DATA_MODE)?;
        let len = WIDTH as usize * self.page_count as usize;
        for i in 0..len {
            // Shadow layout matches the vertical-addressing traversal.
            let b = self.shadow.as_ref().map(|s| s.as_bytes()[i]).unwrap_or(0);
            self.bus.write_byte(b)?;
        }
        self.bus.end_transaction()?;
        log::trace!("flushed {} bytes", len);
        Ok(())
    }

    // ---- one-shot commands ----

    /// Raw single-command escape hatch.
    pub fn send_command(&mut self, command: u8) -> Result<(), Error> {
        self.command_transaction(&[command])
    }

    pub fn set_contrast(&mut self, value: u8) -> Result<(), Error> {
        self.command_transaction(&[SET_CONTRAST, value])
    }

    pub fn flip_h(&mut self) -> Result<(), Error> {
        self.send_command(SEGMENT_REMAP_OFF)
    }

    pub fn flip_v(&mut self) -> Result<(), Error> {
        self.send_command(COM_SCAN_FORWARD)
    }

    pub(crate) fn write_dot_byte(&mut self, x: u8, page: u8, byte: u8) -> Result<(), Error> {
        self.set_window(x, x, page, page)?;
        self.data_transaction(&[byte])
    }

    #[cfg(test)]
    pub(crate) fn bus_ref(&self) -> &B {
        &self.bus
    }
}

impl<B: Bus> fmt::Write for Oled<B> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.print(s).map_err(|_| fmt::Error)
    }
}
