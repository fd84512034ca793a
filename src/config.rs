//! Bus and panel configuration.
//!
//! All tuning constants live here as plain `const` presets: the I2C bus
//! description, the panel geometry, and the visible-window offset that
//! compensates for panels whose glass only shows part of the controller RAM.
//!
//! The 0.42" module found on ESP32-C3 "super mini" boards is the motivating
//! case: the SSD1306 addresses a 128×64 grid but only a 72×40 window
//! starting at column 28, row 24 is actually lit.

use embedded_graphics::{
    prelude::{Point, Size},
    primitives::Rectangle,
};

use crate::error::OledError;

/// Default 7-bit I2C address for SSD1306 and SH1106 modules.
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Bus clock used when [`BusConfig::frequency_hz`] is left unset.
pub const DEFAULT_BUS_FREQUENCY_HZ: u32 = 400_000;

/// Controller RAM width handled by both drivers.
pub const PANEL_WIDTH: u32 = 128;

/// Controller RAM height handled by both drivers.
pub const PANEL_HEIGHT: u32 = 64;

// ── BusConfig ────────────────────────────────────────────────────────────

/// Description of the I2C bus the panel hangs off.
///
/// Pin numbers are informational for the library (the HAL types carry the
/// real pins); the demos log them at start-up so a wiring mistake is
/// visible on the RTT console.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BusConfig {
    /// Peripheral index (`I2C0` → 0).
    pub bus: u8,
    /// GPIO number of the clock line.
    pub scl_pin: u8,
    /// GPIO number of the data line.
    pub sda_pin: u8,
    /// Bus clock in Hz. `None` uses [`DEFAULT_BUS_FREQUENCY_HZ`].
    pub frequency_hz: Option<u32>,
}

impl BusConfig {
    /// Resolve the bus clock, falling back to 400 kHz.
    pub const fn frequency_or_default(&self) -> u32 {
        match self.frequency_hz {
            Some(hz) => hz,
            None => DEFAULT_BUS_FREQUENCY_HZ,
        }
    }
}

impl Default for BusConfig {
    /// Pico 2 wiring used by the demos: I2C0, SCL = GP21, SDA = GP20.
    fn default() -> Self {
        Self {
            bus: 0,
            scl_pin: 21,
            sda_pin: 20,
            frequency_hz: Some(DEFAULT_BUS_FREQUENCY_HZ),
        }
    }
}

// ── ViewportConfig ───────────────────────────────────────────────────────

/// The physically visible window inside the controller's pixel grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportConfig {
    /// Column of the first visible pixel.
    pub offset_x: i32,
    /// Row of the first visible pixel.
    pub offset_y: i32,
    /// Visible width in pixels.
    pub width: u32,
    /// Visible height in pixels.
    pub height: u32,
}

impl ViewportConfig {
    /// The whole 128×64 grid is visible.
    pub const FULL: Self = Self {
        offset_x: 0,
        offset_y: 0,
        width: PANEL_WIDTH,
        height: PANEL_HEIGHT,
    };

    /// 0.42" module: 72×40 visible, starting at (28, 24).
    pub const PANEL_0_42: Self = Self {
        offset_x: 28,
        offset_y: 24,
        width: 72,
        height: 40,
    };

    /// The window in panel coordinates.
    pub fn area(&self) -> Rectangle {
        Rectangle::new(
            Point::new(self.offset_x, self.offset_y),
            Size::new(self.width, self.height),
        )
    }

    /// `true` if the window is non-empty and lies entirely inside a
    /// `panel_width` × `panel_height` grid.
    pub fn fits_within(&self, panel_width: u32, panel_height: u32) -> bool {
        if self.width == 0 || self.height == 0 || self.offset_x < 0 || self.offset_y < 0 {
            return false;
        }
        let right = self.offset_x as u64 + self.width as u64;
        let bottom = self.offset_y as u64 + self.height as u64;
        right <= panel_width as u64 && bottom <= panel_height as u64
    }

    /// The same window after a 180° SEG/COM remap of a
    /// `panel_width` × `panel_height` grid.
    ///
    /// The glass stays where it is while the controller scans RAM from the
    /// opposite corner, so the window moves to the mirrored position.
    pub fn mirrored(&self, panel_width: u32, panel_height: u32) -> Self {
        Self {
            offset_x: (panel_width as i32)
                .saturating_sub(self.offset_x)
                .saturating_sub(self.width as i32),
            offset_y: (panel_height as i32)
                .saturating_sub(self.offset_y)
                .saturating_sub(self.height as i32),
            ..*self
        }
    }
}

impl Default for ViewportConfig {
    fn default() -> Self {
        Self::FULL
    }
}

// ── PanelConfig ──────────────────────────────────────────────────────────

/// Everything the bring-up sequence needs to know about one panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PanelConfig {
    /// 7-bit I2C address (typically `0x3C` or `0x3D`).
    pub address: u8,
    /// Controller RAM width in pixels.
    pub width: u32,
    /// Controller RAM height in pixels.
    pub height: u32,
    /// Visible window that drawing coordinates are relative to.
    pub viewport: ViewportConfig,
    /// Contrast to program after init. `None` keeps the controller default.
    pub contrast: Option<u8>,
    /// Rotate the image 180° (mirror both axes). Drawing then targets
    /// [`ram_viewport`](Self::ram_viewport).
    pub flipped: bool,
}

impl PanelConfig {
    /// 0.42" SSD1306 module with the visible-area offset applied.
    pub const SSD1306_0_42: Self = Self {
        address: DEFAULT_ADDRESS,
        width: PANEL_WIDTH,
        height: PANEL_HEIGHT,
        viewport: ViewportConfig::PANEL_0_42,
        contrast: None,
        flipped: false,
    };

    /// SH1106 128×64 module. Many of these boards are mounted upside down,
    /// hence the flip and full contrast.
    pub const SH1106_128X64: Self = Self {
        address: DEFAULT_ADDRESS,
        width: PANEL_WIDTH,
        height: PANEL_HEIGHT,
        viewport: ViewportConfig::FULL,
        contrast: Some(255),
        flipped: true,
    };

    /// Window to draw into, in controller RAM coordinates.
    ///
    /// Equal to `viewport` unless the panel is flipped, in which case it is
    /// the mirrored window.
    pub fn ram_viewport(&self) -> ViewportConfig {
        if self.flipped {
            self.viewport.mirrored(self.width, self.height)
        } else {
            self.viewport
        }
    }

    /// Check the geometry against what the drivers support.
    ///
    /// # Errors
    ///
    /// * [`OledError::UnsupportedGeometry`] unless the panel is 128×64.
    /// * [`OledError::InvalidViewport`] if the viewport is empty or leaves
    ///   the panel.
    pub fn validate(&self) -> Result<(), OledError> {
        if self.width != PANEL_WIDTH || self.height != PANEL_HEIGHT {
            return Err(OledError::UnsupportedGeometry);
        }
        if !self.viewport.fits_within(self.width, self.height) {
            return Err(OledError::InvalidViewport);
        }
        Ok(())
    }
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self::SSD1306_0_42
    }
}

// ── Tests ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frequency_falls_back_to_400khz() {
        let bus = BusConfig {
            frequency_hz: None,
            ..BusConfig::default()
        };
        assert_eq!(bus.frequency_or_default(), 400_000);

        let slow = BusConfig {
            frequency_hz: Some(100_000),
            ..BusConfig::default()
        };
        assert_eq!(slow.frequency_or_default(), 100_000);
    }

    #[test]
    fn default_bus_matches_demo_wiring() {
        let bus = BusConfig::default();
        assert_eq!(bus.bus, 0);
        assert_eq!(bus.scl_pin, 21);
        assert_eq!(bus.sda_pin, 20);
    }

    #[test]
    fn panel_0_42_window() {
        let vp = ViewportConfig::PANEL_0_42;
        assert_eq!(vp.area(), Rectangle::new(Point::new(28, 24), Size::new(72, 40)));
        assert!(vp.fits_within(128, 64));
    }

    #[test]
    fn full_viewport_fits_exactly() {
        assert!(ViewportConfig::FULL.fits_within(128, 64));
        assert!(!ViewportConfig::FULL.fits_within(127, 64));
    }

    #[test]
    fn viewport_rejects_overhang_and_empty() {
        let overhang = ViewportConfig {
            offset_x: 60,
            ..ViewportConfig::PANEL_0_42
        };
        assert!(!overhang.fits_within(128, 64));

        let negative = ViewportConfig {
            offset_y: -1,
            ..ViewportConfig::PANEL_0_42
        };
        assert!(!negative.fits_within(128, 64));

        let empty = ViewportConfig {
            width: 0,
            ..ViewportConfig::PANEL_0_42
        };
        assert!(!empty.fits_within(128, 64));
    }

    #[test]
    fn mirrored_window_for_flipped_panel() {
        let vp = ViewportConfig::PANEL_0_42.mirrored(128, 64);
        assert_eq!(vp, ViewportConfig { offset_x: 28, offset_y: 0, width: 72, height: 40 });
        assert!(vp.fits_within(128, 64));
        assert_eq!(ViewportConfig::FULL.mirrored(128, 64), ViewportConfig::FULL);

        let corner = ViewportConfig { offset_x: 0, offset_y: 0, width: 10, height: 8 };
        assert_eq!(corner.mirrored(128, 64).area().top_left, Point::new(118, 56));
    }

    #[test]
    fn ram_viewport_follows_flip() {
        assert_eq!(PanelConfig::SSD1306_0_42.ram_viewport(), ViewportConfig::PANEL_0_42);
        let flipped = PanelConfig {
            flipped: true,
            ..PanelConfig::SSD1306_0_42
        };
        assert_eq!(flipped.ram_viewport().area().top_left, Point::new(28, 0));
        assert_eq!(PanelConfig::SH1106_128X64.ram_viewport(), ViewportConfig::FULL);
    }

    #[test]
    fn presets_validate() {
        assert!(PanelConfig::SSD1306_0_42.validate().is_ok());
        assert!(PanelConfig::SH1106_128X64.validate().is_ok());
        assert_eq!(PanelConfig::default(), PanelConfig::SSD1306_0_42);
    }

    #[test]
    fn validate_rejects_other_geometry() {
        let small = PanelConfig {
            height: 32,
            ..PanelConfig::SSD1306_0_42
        };
        assert!(matches!(small.validate(), Err(OledError::UnsupportedGeometry)));
    }

    #[test]
    fn validate_rejects_bad_viewport() {
        let bad = PanelConfig {
            viewport: ViewportConfig {
                offset_x: 100,
                offset_y: 0,
                width: 72,
                height: 40,
            },
            ..PanelConfig::SSD1306_0_42
        };
        assert!(matches!(bad.validate(), Err(OledError::InvalidViewport)));
    }
}
