//! SSD1306 driver wrapping the `ssd1306` crate in async buffered graphics mode.
//!
//! [`OledDriver`] manages the SSD1306 display lifecycle: construction without
//! I2C traffic, explicit async initialisation, contrast / orientation
//! tuning, and frame buffer flush.

use display_interface_i2c::I2CInterface;
use embedded_hal_async::i2c::I2c;
use ssd1306::{
    mode::BufferedGraphicsModeAsync, prelude::*, I2CDisplayInterface, Ssd1306Async,
};

use crate::error::OledError;

/// Concrete display type used internally by [`OledDriver`].
pub type Ssd1306Display<I2C> = Ssd1306Async<
    I2CInterface<I2C>,
    DisplaySize128x64,
    BufferedGraphicsModeAsync<DisplaySize128x64>,
>;

/// Pre-charge period programmed alongside a custom contrast (the value the
/// `ssd1306` crate uses for its brighter presets).
const PRECHARGE: u8 = 0x2;

/// Async driver for an SSD1306 128×64 OLED display over I2C.
///
/// # Lifecycle
///
/// 1. [`OledDriver::new()`] — constructs the driver without any I2C traffic.
/// 2. [`OledDriver::init()`] — sends the SSD1306 initialisation sequence.
/// 3. Optionally [`set_flipped()`](Self::set_flipped) and
///    [`set_contrast()`](Self::set_contrast).
/// 4. Draw into the frame buffer via [`OledDriver::display_mut()`].
/// 5. [`OledDriver::flush()`] — transfers the frame buffer to hardware.
///
/// # Example
///
/// ```no_run
/// use oled_bringup_rs::OledDriver;
///
/// # async fn example(i2c: impl embedded_hal_async::i2c::I2c) {
/// let mut oled = OledDriver::new(i2c, 0x3C);
/// oled.init().await.unwrap();
/// oled.clear_buffer();
/// oled.flush().await.unwrap();
/// # }
/// ```
pub struct OledDriver<I2C> {
    display: Ssd1306Display<I2C>,
    /// Set to `true` after a successful `init()` call.
    initialized: bool,
}

impl<I2C> OledDriver<I2C>
where
    I2C: I2c,
{
    /// Construct an uninitialised driver.
    ///
    /// No I2C traffic is generated. You **must** call [`init()`](Self::init)
    /// before any display operations.
    ///
    /// # Arguments
    /// * `i2c` — I2C peripheral (takes ownership for exclusive access).
    /// * `address` — 7-bit I2C device address (typically `0x3C` or `0x3D`).
    pub fn new(i2c: I2C, address: u8) -> Self {
        let interface = I2CDisplayInterface::new_custom_address(i2c, address);
        let display = Ssd1306Async::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();

        Self {
            display,
            initialized: false,
        }
    }

    /// Initialise the SSD1306 hardware.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::InitializationFailed`] if the display does not
    /// respond.
    pub async fn init(&mut self) -> Result<(), OledError> {
        self.display
            .init()
            .await
            .map_err(|_| OledError::InitializationFailed)?;
        self.initialized = true;
        Ok(())
    }

    /// Clear the in-memory frame buffer. No I2C traffic.
    pub fn clear_buffer(&mut self) {
        self.display.clear_buffer();
    }

    /// Program the contrast register (0 = dimmest, 255 = brightest).
    ///
    /// # Errors
    ///
    /// [`OledError::NotInitialized`] before `init()`, or
    /// [`OledError::Display`] on a bus-level failure.
    pub async fn set_contrast(&mut self, contrast: u8) -> Result<(), OledError> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }
        self.display
            .set_brightness(Brightness::custom(PRECHARGE, contrast))
            .await?;
        Ok(())
    }

    /// Rotate the image by 180° (`true`) or restore the normal orientation.
    ///
    /// # Errors
    ///
    /// [`OledError::NotInitialized`] before `init()`, or
    /// [`OledError::Display`] on a bus-level failure.
    pub async fn set_flipped(&mut self, flipped: bool) -> Result<(), OledError> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }
        let rotation = if flipped {
            DisplayRotation::Rotate180
        } else {
            DisplayRotation::Rotate0
        };
        self.display.set_rotation(rotation).await?;
        Ok(())
    }

    /// Transfer the frame buffer to the display via I2C.
    ///
    /// At 400 kHz I2C this takes approximately 20 ms for a full 1024-byte
    /// frame.
    ///
    /// # Errors
    ///
    /// Returns [`OledError::NotInitialized`] if [`init()`](Self::init) has
    /// not been called, or [`OledError::Display`] on a bus-level failure.
    pub async fn flush(&mut self) -> Result<(), OledError> {
        if !self.initialized {
            return Err(OledError::NotInitialized);
        }
        self.display.flush().await?;
        Ok(())
    }

    /// Returns a mutable reference to the underlying `ssd1306` display,
    /// allowing direct use of `embedded-graphics` [`DrawTarget`] APIs.
    ///
    /// Returns `None` if the driver has not been initialised.
    ///
    /// [`DrawTarget`]: embedded_graphics::draw_target::DrawTarget
    pub fn display_mut(&mut self) -> Option<&mut Ssd1306Display<I2C>> {
        if self.initialized {
            Some(&mut self.display)
        } else {
            None
        }
    }

    /// Check whether the display has been successfully initialised.
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Consume the driver and hand back the I2C peripheral.
    pub fn release(self) -> I2C {
        self.display.release().release()
    }
}
