//! Async bring-up for small I2C OLED panels.
//!
//! Cheap 0.42" OLED modules (as found on ESP32-C3 "super mini" boards)
//! put a 72×40 piece of glass in front of a controller that addresses a
//! 128×64 grid. Drawing at (0, 0) therefore lands off-screen unless the
//! visible-area offset is applied. This crate carries those tuning
//! constants and a small bring-up sequence for two controllers:
//!
//! - [`OledDriver`] — SSD1306, via the [`ssd1306`] crate in async buffered
//!   graphics mode.
//! - [`Sh1106Driver`] — SH1106, implemented here (page addressing with the
//!   2-column RAM offset).
//!
//! Both implement [`Panel`], so [`bring_up`] and [`show`] work with either.
//! Drawing goes through [`Viewport`], which maps "visible" coordinates onto
//! the controller grid and clips everything outside the glass.
//!
//! # Quick Start
//!
//! ```ignore
//! use oled_bringup_rs::{bring_up, OledDriver, PanelConfig, Screen, OFFSET_TEST_LINES};
//!
//! let config = PanelConfig::SSD1306_0_42;
//! let mut oled = OledDriver::new(i2c, config.address);
//! bring_up(&mut oled, &config, &Screen::Text(&OFFSET_TEST_LINES)).await?;
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`] and `defmt::Format`
//!   for [`OledError`].

#![cfg_attr(not(test), no_std)]

pub mod bringup;
pub mod commands;
pub mod config;
pub mod driver;
pub mod error;
pub mod framebuffer;
pub mod layout;
pub mod panel;
pub mod sh1106;
pub mod viewport;

#[cfg(test)]
mod test_support;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use bringup::{bring_up, show};
pub use config::{BusConfig, PanelConfig, ViewportConfig, DEFAULT_ADDRESS, DEFAULT_BUS_FREQUENCY_HZ};
pub use driver::OledDriver;
pub use error::OledError;
pub use framebuffer::PageBuffer;
pub use layout::{FontDemo, Screen, TextLine, HELLO_WORLD_LINES, OFFSET_TEST_LINES};
pub use panel::Panel;
pub use sh1106::Sh1106Driver;
pub use viewport::Viewport;
