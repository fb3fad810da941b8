//! Rendering and buffering core for page-organized monochrome OLED panels
//! (SSD1306-class, 128x32 or 128x64, driven over a simple synchronous bus).
//!
//! Text lands in 20 six-pixel cells per line, 4 rows on a 32-pixel panel
//! and 8 on a 64-pixel one. Three buffering strategies change what every
//! write means:
//!
//! * **Direct** — no host buffer, auto-send always on; a point overwrites
//!   the whole page byte it lands in, text overwrites its cell.
//! * **Hardware buffer** — the panel's memory is read back, merged and
//!   rewritten; points and text compose.
//! * **Software buffer** — a host-side shadow; every write merges into the
//!   shadow, and either each byte is pushed immediately (`auto_send`) or
//!   the whole frame goes out on [`display::Oled::flush`].
//!
//! ```no_run
//! # fn demo<I: embedded_hal::i2c::I2c>(i2c: I) -> Result<(), monoled::Error> {
//! use monoled::{Config, DisplayMode, I2cBus, Oled, PanelHeight};
//!
//! let mut oled = Oled::new(I2cBus::new(i2c), Config {
//!     height: PanelHeight::H64,
//!     mode: DisplayMode::SoftwareBuffer { auto_send: false },
//!     ..Config::default()
//! })?;
//! oled.println("Привет, мир!")?;
//! oled.line(0, 10, 127, 63)?;
//! oled.flush()?;
//! # Ok(()) }
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod buffer;
pub mod bus;
pub mod decode;
pub mod display;
pub mod error;
pub mod font;
mod graphics;
pub mod stretch;

#[cfg(test)]
pub(crate) mod testutil;

pub use bus::{Bus, I2cBus};
pub use display::{Config, DisplayMode, Oled, PanelHeight, DEFAULT_ADDRESS, TEXT_COLUMNS, WIDTH};
pub use error::{BusError, Error};
