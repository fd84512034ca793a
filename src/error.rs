//! Error types for the OLED bring-up crate.

use core::fmt;

use display_interface::DisplayError;
use embedded_hal_async::i2c::ErrorKind;

/// Errors that can occur while configuring, drawing to, or flushing a panel.
///
/// The `ssd1306` crate wraps all underlying I2C bus errors into
/// [`DisplayError`]; the in-crate SH1106 driver talks to the bus directly
/// and reports the bus-level [`ErrorKind`] instead. Both end up here, so the
/// enum stays non-generic.
#[derive(Debug)]
pub enum OledError {
    /// Display interface error (wraps I2C failures inside `ssd1306`).
    Display(DisplayError),
    /// Raw I2C failure from the SH1106 driver.
    Bus(ErrorKind),
    /// Display hardware did not respond to initialisation.
    InitializationFailed,
    /// An operation was attempted before `init()` was called.
    NotInitialized,
    /// The visible window is empty or extends past the panel edges.
    InvalidViewport,
    /// Only 128×64 controllers are supported.
    UnsupportedGeometry,
    /// Drawing into the frame buffer failed.
    Render,
}

impl OledError {
    /// Map any I2C error onto [`OledError::Bus`] via its [`ErrorKind`].
    pub(crate) fn bus<E: embedded_hal_async::i2c::Error>(error: E) -> Self {
        OledError::Bus(error.kind())
    }
}

impl From<DisplayError> for OledError {
    fn from(e: DisplayError) -> Self {
        OledError::Display(e)
    }
}

impl fmt::Display for OledError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            OledError::Display(e) => write!(f, "Display interface error: {:?}", e),
            OledError::Bus(kind) => write!(f, "I2C error: {}", kind),
            OledError::InitializationFailed => write!(f, "Initialization failed"),
            OledError::NotInitialized => write!(f, "Not initialized"),
            OledError::InvalidViewport => write!(f, "Viewport does not fit the panel"),
            OledError::UnsupportedGeometry => write!(f, "Unsupported panel geometry"),
            OledError::Render => write!(f, "Render failed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for OledError {
    fn format(&self, f: defmt::Formatter) {
        match self {
            OledError::Display(_e) => defmt::write!(f, "Display interface error"),
            OledError::Bus(kind) => {
                defmt::write!(f, "I2C error: {}", defmt::Debug2Format(kind))
            }
            OledError::InitializationFailed => defmt::write!(f, "Initialization failed"),
            OledError::NotInitialized => defmt::write!(f, "Not initialized"),
            OledError::InvalidViewport => defmt::write!(f, "Invalid viewport"),
            OledError::UnsupportedGeometry => defmt::write!(f, "Unsupported geometry"),
            OledError::Render => defmt::write!(f, "Render failed"),
        }
    }
}
