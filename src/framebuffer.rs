//! Page-organised 1-bpp frame buffer.
//!
//! Matches the GDDRAM layout shared by the SSD1306 and SH1106: the 64 rows
//! are split into 8 pages of 8 rows, each page holds one byte per column,
//! and bit 0 of a byte is the topmost row of its page. A page can therefore
//! be streamed to the controller unchanged.

use core::convert::Infallible;

use embedded_graphics::{
    pixelcolor::BinaryColor,
    prelude::{DrawTarget, OriginDimensions, Size},
    Pixel,
};

/// Buffer width in pixels.
pub const WIDTH: usize = 128;
/// Buffer height in pixels.
pub const HEIGHT: usize = 64;
/// Number of 8-row pages.
pub const PAGES: usize = HEIGHT / 8;

/// 128×64 monochrome frame buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct PageBuffer {
    pages: [[u8; WIDTH]; PAGES],
}

impl PageBuffer {
    /// An all-dark buffer.
    pub const fn new() -> Self {
        Self {
            pages: [[0; WIDTH]; PAGES],
        }
    }

    /// Turn every pixel off.
    pub fn clear(&mut self) {
        for page in self.pages.iter_mut() {
            page.fill(0);
        }
    }

    /// Set or clear one pixel.
    ///
    /// Returns `false` (and writes nothing) if `(x, y)` is off the buffer.
    pub fn set_pixel(&mut self, x: i32, y: i32, on: bool) -> bool {
        let Some((page, col, bit)) = Self::locate(x, y) else {
            return false;
        };
        let byte = &mut self.pages[page][col];
        if on {
            *byte |= 1 << bit;
        } else {
            *byte &= !(1 << bit);
        }
        true
    }

    /// Read one pixel, `None` if off the buffer.
    pub fn pixel(&self, x: i32, y: i32) -> Option<bool> {
        Self::locate(x, y).map(|(page, col, bit)| self.pages[page][col] & (1 << bit) != 0)
    }

    /// Raw bytes of one page, ready to send to the controller.
    ///
    /// # Panics
    ///
    /// If `page >= PAGES`.
    pub fn page(&self, page: usize) -> &[u8; WIDTH] {
        &self.pages[page]
    }

    /// Number of lit pixels.
    pub fn lit_pixels(&self) -> usize {
        self.pages
            .iter()
            .flat_map(|page| page.iter())
            .map(|byte| byte.count_ones() as usize)
            .sum()
    }

    fn locate(x: i32, y: i32) -> Option<(usize, usize, u8)> {
        if x < 0 || y < 0 || x as usize >= WIDTH || y as usize >= HEIGHT {
            return None;
        }
        let (x, y) = (x as usize, y as usize);
        Some((y / 8, x, (y % 8) as u8))
    }
}

impl Default for PageBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl OriginDimensions for PageBuffer {
    fn size(&self) -> Size {
        Size::new(WIDTH as u32, HEIGHT as u32)
    }
}

impl DrawTarget for PageBuffer {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            // Off-buffer pixels are dropped.
            self.set_pixel(point.x, point.y, color.is_on());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        let fill = if color.is_on() { 0xFF } else { 0x00 };
        for page in self.pages.iter_mut() {
            page.fill(fill);
        }
        Ok(())
    }
}
