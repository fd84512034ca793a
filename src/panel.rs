//! Controller-neutral panel interface.
//!
//! [`Panel`] is what the bring-up sequence talks to. Both drivers expose
//! the same lifecycle (init, tune, draw, flush), so one sequence serves
//! the SSD1306 and the SH1106 alike.

use embedded_graphics::{pixelcolor::BinaryColor, prelude::DrawTarget};
use embedded_hal_async::i2c::I2c;

use crate::driver::{OledDriver, Ssd1306Display};
use crate::error::OledError;
use crate::framebuffer::PageBuffer;
use crate::sh1106::Sh1106Driver;

/// A buffered monochrome panel.
///
/// All drawing happens in memory through [`target_mut`](Self::target_mut);
/// only [`init`](Self::init), the settings and [`flush`](Self::flush)
/// touch the bus.
#[allow(async_fn_in_trait)]
pub trait Panel {
    /// Frame buffer type that `embedded-graphics` draws into.
    type Target: DrawTarget<Color = BinaryColor>;

    /// Send the controller power-on sequence.
    async fn init(&mut self) -> Result<(), OledError>;

    /// Program the contrast register.
    async fn set_contrast(&mut self, contrast: u8) -> Result<(), OledError>;

    /// Rotate the image by 180°.
    async fn set_flipped(&mut self, flipped: bool) -> Result<(), OledError>;

    /// Clear the in-memory frame buffer.
    fn clear_buffer(&mut self);

    /// Frame buffer access, `None` until initialised.
    fn target_mut(&mut self) -> Option<&mut Self::Target>;

    /// Transfer the frame buffer to the panel.
    async fn flush(&mut self) -> Result<(), OledError>;

    /// `true` once [`init`](Self::init) has succeeded.
    fn is_initialized(&self) -> bool;
}

impl<I2C> Panel for OledDriver<I2C>
where
    I2C: I2c,
{
    type Target = Ssd1306Display<I2C>;

    async fn init(&mut self) -> Result<(), OledError> {
        OledDriver::init(self).await
    }

    async fn set_contrast(&mut self, contrast: u8) -> Result<(), OledError> {
        OledDriver::set_contrast(self, contrast).await
    }

    async fn set_flipped(&mut self, flipped: bool) -> Result<(), OledError> {
        OledDriver::set_flipped(self, flipped).await
    }

    fn clear_buffer(&mut self) {
        OledDriver::clear_buffer(self)
    }

    fn target_mut(&mut self) -> Option<&mut Self::Target> {
        self.display_mut()
    }

    async fn flush(&mut self) -> Result<(), OledError> {
        OledDriver::flush(self).await
    }

    fn is_initialized(&self) -> bool {
        OledDriver::is_initialized(self)
    }
}

impl<I2C> Panel for Sh1106Driver<I2C>
where
    I2C: I2c,
{
    type Target = PageBuffer;

    async fn init(&mut self) -> Result<(), OledError> {
        Sh1106Driver::init(self).await
    }

    async fn set_contrast(&mut self, contrast: u8) -> Result<(), OledError> {
        Sh1106Driver::set_contrast(self, contrast).await
    }

    async fn set_flipped(&mut self, flipped: bool) -> Result<(), OledError> {
        Sh1106Driver::set_flipped(self, flipped).await
    }

    fn clear_buffer(&mut self) {
        Sh1106Driver::clear_buffer(self)
    }

    fn target_mut(&mut self) -> Option<&mut Self::Target> {
        self.buffer_mut()
    }

    async fn flush(&mut self) -> Result<(), OledError> {
        Sh1106Driver::flush(self).await
    }

    fn is_initialized(&self) -> bool {
        Sh1106Driver::is_initialized(self)
    }
}
