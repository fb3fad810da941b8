//! Graphics primitives on top of the framebuffer modes, plus the
//! `embedded-graphics` `DrawTarget` seam.

use embedded_graphics_core::pixelcolor::BinaryColor;
use embedded_graphics_core::prelude::*;

use crate::bus::Bus;
use crate::display::{DisplayMode, Oled, WIDTH};
use crate::error::Error;

impl<B: Bus> Oled<B> {
    /// Set one pixel. Out-of-bounds coordinates are a silent no-op.
    ///
    /// Merge semantics follow the buffering mode: in `Direct` mode the
    /// write replaces the whole page byte at that column (there is no prior
    /// state to merge with), the other two modes OR the bit in.
    pub fn dot(&mut self, x: i32, y: i32) -> Result<(), Error> {
        if x < 0 || y < 0 || x >= WIDTH as i32 || y >= self.height_px() as i32 {
            return Ok(());
        }
        let x = x as u16;
        let page = (y / 8) as u8;
        let bit = 1u8 << (y % 8);

        match self.mode() {
            DisplayMode::Direct => self.write_dot_byte(x as u8, page, bit),
            DisplayMode::HardwareBuffer => self.rmw_byte(x, page, bit),
            DisplayMode::SoftwareBuffer { auto_send } => {
                let merged = match self.shadow_mut() {
                    Some(s) => s.set(x, page, bit),
                    None => bit,
                };
                if auto_send {
                    self.write_dot_byte(x as u8, page, merged)
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Draw a line segment.
    ///
    /// Axis-aligned segments take fast loops that stop short of the far
    /// endpoint, while the general Bresenham path is endpoint-inclusive;
    /// the asymmetry is inherited behavior, kept and pinned by tests.
    pub fn line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), Error> {
        if x0 == x1 {
            for y in y0..y1 {
                self.dot(x0, y)?;
            }
        } else if y0 == y1 {
            for x in x0..x1 {
                self.dot(x, y0)?;
            }
        } else {
            let dx = (x1 - x0).abs();
            let dy = (y1 - y0).abs();
            let sx = if x0 < x1 { 1 } else { -1 };
            let sy = if y0 < y1 { 1 } else { -1 };
            let mut err = dx - dy;
            let (mut x, mut y) = (x0, y0);
            loop {
                self.dot(x, y)?;
                if x == x1 && y == y1 {
                    break;
                }
                let e2 = err << 1;
                if e2 > -dy {
                    err -= dy;
                    x += sx;
                }
                if e2 < dx {
                    err += dx;
                    y += sy;
                }
            }
        }
        Ok(())
    }
}

/// `embedded-graphics` integration. `On` pixels set bits through [`Oled::dot`];
/// `Off` pixels are left untouched since the panel write model only sets
/// bits (use [`Oled::clear`] to erase).
impl<B: Bus> DrawTarget for Oled<B> {
    type Color = BinaryColor;
    type Error = Error;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            if color.is_on() {
                self.dot(point.x, point.y)?;
            }
        }
        Ok(())
    }
}

impl<B: Bus> OriginDimensions for Oled<B> {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, self.height_px() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::{Config, PanelHeight};
    use crate::testutil::MockBus;
    use embedded_graphics::primitives::{Line, Primitive, PrimitiveStyle};

    fn soft(auto_send: bool) -> Oled<MockBus> {
        Oled::new(
            MockBus::new(),
            Config {
                height: PanelHeight::H64,
                mode: DisplayMode::SoftwareBuffer { auto_send },
                ..Config::default()
            },
        )
        .unwrap()
    }

    fn pixel(oled: &Oled<MockBus>, x: u16, y: u8) -> bool {
        let buf = oled.buffer().unwrap();
        buf[(y as usize / 8) + x as usize * 8] & (1 << (y % 8)) != 0
    }

    #[test]
    fn dot_sets_the_addressed_bit() {
        let mut oled = soft(false);
        oled.dot(5, 11).unwrap();
        // page 1, bit 3, column-major index 1 + 5*8.
        assert_eq!(oled.buffer().unwrap()[1 + 5 * 8], 0x08);
    }

    #[test]
    fn dot_out_of_bounds_changes_nothing() {
        let mut oled = soft(false);
        oled.dot(-1, 0).unwrap();
        oled.dot(0, -1).unwrap();
        oled.dot(128, 0).unwrap();
        oled.dot(0, 64).unwrap();
        assert!(oled.buffer().unwrap().iter().all(|&b| b == 0));
    }

    #[test]
    fn dots_merge_in_shadow_mode() {
        let mut oled = soft(false);
        oled.dot(3, 0).unwrap();
        oled.dot(3, 1).unwrap();
        assert_eq!(oled.buffer().unwrap()[3 * 8], 0x03);
    }

    #[test]
    fn auto_send_pushes_the_merged_byte() {
        let mut oled = soft(true);
        oled.dot(3, 0).unwrap();
        oled.dot(3, 1).unwrap();
        let bus = oled.release();
        let data: alloc::vec::Vec<_> = bus.data_transactions().collect();
        assert_eq!(&data[0][1..], &[0x01]);
        assert_eq!(&data[1][1..], &[0x03]);
    }

    #[test]
    fn direct_mode_dot_is_lossy() {
        let mut oled = Oled::new(
            MockBus::new(),
            Config {
                mode: DisplayMode::Direct,
                ..Config::default()
            },
        )
        .unwrap();
        oled.dot(3, 0).unwrap();
        oled.dot(3, 1).unwrap();
        let bus = oled.release();
        let data: alloc::vec::Vec<_> = bus.data_transactions().collect();
        // Second write carries only its own bit: the first pixel is lost.
        assert_eq!(&data[0][1..], &[0x01]);
        assert_eq!(&data[1][1..], &[0x02]);
    }

    #[test]
    fn hardware_readback_merges_against_panel_state() {
        let mut bus = MockBus::new();
        bus.read_data.push_back(0x01);
        let mut oled = Oled::new(
            bus,
            Config {
                mode: DisplayMode::HardwareBuffer,
                ..Config::default()
            },
        )
        .unwrap();
        oled.dot(0, 1).unwrap();
        let bus = oled.release();
        let data: alloc::vec::Vec<_> = bus.data_transactions().collect();
        assert_eq!(&data[0][1..], &[0x03]);
    }

    #[test]
    fn horizontal_fast_path_excludes_far_endpoint() {
        let mut oled = soft(false);
        oled.line(0, 0, 5, 0).unwrap();
        for x in 0..5 {
            assert!(pixel(&oled, x, 0), "x={x}");
        }
        // Inherited asymmetry: the fast path stops one pixel short while
        // the Bresenham path below is inclusive.
        assert!(!pixel(&oled, 5, 0));
    }

    #[test]
    fn vertical_fast_path_excludes_far_endpoint() {
        let mut oled = soft(false);
        oled.line(2, 1, 2, 4).unwrap();
        for y in 1..4 {
            assert!(pixel(&oled, 2, y));
        }
        assert!(!pixel(&oled, 2, 4));
    }

    #[test]
    fn diagonal_line_includes_both_endpoints() {
        let mut oled = soft(false);
        oled.line(0, 0, 3, 3).unwrap();
        for i in 0..=3 {
            assert!(pixel(&oled, i as u16, i as u8), "i={i}");
        }
    }

    #[test]
    fn diagonal_line_draws_in_either_direction() {
        let mut a = soft(false);
        a.line(3, 5, 0, 1).unwrap();
        let mut b = soft(false);
        b.line(0, 1, 3, 5).unwrap();
        assert_eq!(a.buffer().unwrap(), b.buffer().unwrap());
    }

    #[test]
    fn draw_target_renders_on_pixels() {
        let mut oled = soft(false);
        Line::new(Point::new(0, 0), Point::new(3, 3))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut oled)
            .unwrap();
        assert!(pixel(&oled, 0, 0));
        assert!(pixel(&oled, 3, 3));
        assert_eq!(oled.size(), Size::new(128, 64));
    }
}
