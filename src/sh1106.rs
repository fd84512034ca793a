//! SH1106 OLED driver.
//!
//! The SH1106 looks like an SSD1306 from a distance but differs in the
//! details that matter for a driver: it only supports page addressing, it
//! has 132 columns of RAM behind 128 columns of glass, and it powers the
//! panel through a DC-DC converter instead of a charge pump. This module
//! implements that protocol directly on top of `embedded-hal-async` and
//! keeps its own [`PageBuffer`].

use embedded_hal_async::i2c::I2c;

use crate::commands::*;
use crate::error::OledError;
use crate::framebuffer::{PageBuffer, PAGES, WIDTH};

/// Number of bytes in [`init_sequence`].
pub(crate) const INIT_SEQUENCE_LEN: usize = 22;

/// Segment remap + COM scan direction for the requested orientation.
pub(crate) const fn orientation(flipped: bool) -> [u8; 2] {
    if flipped {
        [SEG_REMAP_NORMAL, COM_SCAN_INC]
    } else {
        [SEG_REMAP_REVERSED, COM_SCAN_DEC]
    }
}

/// Power-on command stream for a 128×64 panel.
pub(crate) const fn init_sequence(flipped: bool, contrast: u8) -> [u8; INIT_SEQUENCE_LEN] {
    let [seg, com] = orientation(flipped);
    [
        DISPLAY_OFF,
        SET_CLOCK_DIV,
        0x80,
        SET_MUX_RATIO,
        0x3F, // 64 lines
        SET_DISPLAY_OFFSET,
        0x00,
        SET_START_LINE,
        SET_DC_DC,
        DC_DC_ON,
        seg,
        com,
        SET_COM_PINS,
        0x12, // alternative COM pin configuration
        SET_CONTRAST,
        contrast,
        SET_PRECHARGE,
        0x22,
        SET_VCOM_DETECT,
        0x35,
        SET_NORMAL,
        DISPLAY_ON,
    ]
}

/// Address the start of `page`, shifted by [`COLUMN_OFFSET`].
pub(crate) const fn page_address(page: u8) -> [u8; 3] {
    [
        SET_PAGE_ADDR | (page & 0x07),
        SET_LOW_COLUMN | (COLUMN_OFFSET & 0x0F),
        SET_HIGH_COLUMN | (COLUMN_OFFSET >> 4),
    ]
}

/// Async driver for an SH1106 128×64 OLED display over I2C.
///
/// Follows the same lifecycle as [`OledDriver`](crate::OledDriver):
/// construct without bus traffic, [`init()`](Self::init), draw into
/// [`buffer_mut()`](Self::buffer_mut), then [`flush()`](Self::flush).
///
/// # Example
///
/// ```no_run
/// use embedded_graphics::{
///     mono_font::{ascii::FONT_6X10, MonoTextStyle},
///     pixelcolor::BinaryColor,
///     prelude::*,
///     text::Text,
/// };
/// use oled_bringup_rs::Sh1106Driver;
///
/// # async fn example(i2c: impl embedded_hal_async::i2c::I2c) {
/// let mut oled = Sh1106Driver::new(i2c, 0x3C);
/// oled.init().await.unwrap();
/// oled.set_flipped(true).await.unwrap();
/// if let Some(fb) = oled.buffer_mut() {
///     let style = MonoTextStyle::new(&FONT_6X10, BinaryColor::On);
///     Text::new("Hello", Point::new(40, 24), style).draw(fb).ok();
/// }
/// oled.flush().await.unwrap();
/// # }
/// ```
pub struct Sh1106Driver<I2C> {
    i2c: I2C,
    address: u8,
    buffer: PageBuffer,
    initialized: bool,
}

impl<I2C> Sh1106Driver<I2C>
where
    I2C: I2c,
{
    /// Construct an uninitialised driver. No I2C traffic is generated.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access).
    /// * `address` — 7-bit I2C device address (typically `0x3C`).
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            buffer: PageBuffer::new(),
            initialized: false,
        }
    }

    // -----------------------------------------------------------------------
    // Bus primitives
    // -----------------------------------------------------------------------

    /// Send a command stream, batching up to [`MAX_COMMAND_BATCH`] commands
    /// per transaction behind a single control byte.
    async fn commands(&mut self, commands: &[u8]) -> Result<(), OledError> {
        let mut buf = [0u8; MAX_COMMAND_BATCH + 1];
        buf[0] = CONTROL_COMMAND;
        for chunk in commands.chunks(MAX_COMMAND_BATCH) {
            buf[1..=chunk.len()].copy_from_slice(chunk);
            self.i2c
                .write(self.address, &buf[..=chunk.len()])
                .await
                .map_err(OledError::bus)?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Lifecycle
    // -----------------------------------------------------------------------

    /// Send the power-on sequence (normal orientation, default contrast).
    ///
    /// # Errors
    ///
    /// [`OledError::InitializationFailed`] if the controller does not ACK.
    pub async fn init(&mut self) -> Result<(), OledError> {
        self.commands(&init_sequence(false, DEFAULT_CONTRAST))
            .await
            .map_err(|_| OledError::InitializationFailed)?;
        self.initialized = true;
        Ok(())
    }

    /// Check whether the display has been successfully initialised.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Consume the driver and hand back the I2C peripheral.
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn ensure_initialized(&self) -> Result<(), OledError> {
        if self.initialized {
            Ok(())
        } else {
            Err(OledError::NotInitialized)
        }
    }

    // -----------------------------------------------------------------------
    // Frame buffer
    // -----------------------------------------------------------------------

    /// Clear the in-memory frame buffer. No I2C traffic.
    pub fn clear_buffer(&mut self) {
        self.buffer.clear();
    }

    /// The frame buffer as last drawn.
    pub fn buffer(&self) -> &PageBuffer {
        &self.buffer
    }

    /// Mutable frame buffer for `embedded-graphics` drawing.
    ///
    /// Returns `None` if the driver has not been initialised.
    pub fn buffer_mut(&mut self) -> Option<&mut PageBuffer> {
        if self.initialized {
            Some(&mut self.buffer)
        } else {
            None
        }
    }

    /// Write all eight pages to display RAM.
    ///
    /// Each page is one addressing command stream followed by one
    /// 129-byte data transaction.
    ///
    /// # Errors
    ///
    /// [`OledError::NotInitialized`] before `init()`, or
    /// [`OledError::Bus`] on a bus-level failure.
    pub async fn flush(&mut self) -> Result<(), OledError> {
        self.ensure_initialized()?;

        let mut data = [0u8; WIDTH + 1];
        data[0] = CONTROL_DATA;
        for page in 0..PAGES {
            self.commands(&page_address(page as u8)).await?;
            data[1..].copy_from_slice(self.buffer.page(page));
            self.i2c
                .write(self.address, &data)
                .await
                .map_err(OledError::bus)?;
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Panel settings
    // -----------------------------------------------------------------------

    /// Program the contrast register (0–255).
    pub async fn set_contrast(&mut self, contrast: u8) -> Result<(), OledError> {
        self.ensure_initialized()?;
        self.commands(&[SET_CONTRAST, contrast]).await
    }

    /// Mirror both axes (180° rotation) or restore the normal orientation.
    ///
    /// Takes effect on the next refresh; RAM contents are untouched.
    pub async fn set_flipped(&mut self, flipped: bool) -> Result<(), OledError> {
        self.ensure_initialized()?;
        self.commands(&orientation(flipped)).await
    }

    /// Turn the panel on or off (RAM is retained).
    pub async fn set_display_on(&mut self, on: bool) -> Result<(), OledError> {
        self.ensure_initialized()?;
        self.commands(&[if on { DISPLAY_ON } else { DISPLAY_OFF }])
            .await
    }

    /// Invert every pixel in hardware.
    pub async fn set_inverted(&mut self, inverted: bool) -> Result<(), OledError> {
        self.ensure_initialized()?;
        self.commands(&[if inverted { SET_INVERSE } else { SET_NORMAL }])
            .await
    }
}
