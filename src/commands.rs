//! SH1106 command constants.
//!
//! Every I2C write to the SH1106 starts with a control byte that says how
//! the rest of the transaction is interpreted:
//! - [`CONTROL_COMMAND`] — all following bytes are commands.
//! - [`CONTROL_DATA`] — all following bytes are display RAM data.
//!
//! Commands that carry an argument (contrast, multiplex ratio, …) take it
//! as the next byte in the same command stream.

// ---------------------------------------------------------------------------
// Control bytes
// ---------------------------------------------------------------------------

/// Co = 0, D/C# = 0: command stream.
pub const CONTROL_COMMAND: u8 = 0x00;

/// Co = 0, D/C# = 1: data stream.
pub const CONTROL_DATA: u8 = 0x40;

// ---------------------------------------------------------------------------
// Fundamental commands
// ---------------------------------------------------------------------------

pub const DISPLAY_OFF: u8 = 0xAE;
pub const DISPLAY_ON: u8 = 0xAF;
/// Followed by the contrast value (0x00–0xFF).
pub const SET_CONTRAST: u8 = 0x81;
pub const SET_NORMAL: u8 = 0xA6;
pub const SET_INVERSE: u8 = 0xA7;

// ---------------------------------------------------------------------------
// Addressing
// ---------------------------------------------------------------------------

/// OR'd with the low nibble of the column address.
pub const SET_LOW_COLUMN: u8 = 0x00;
/// OR'd with the high nibble of the column address.
pub const SET_HIGH_COLUMN: u8 = 0x10;
/// OR'd with the page number (0–7).
pub const SET_PAGE_ADDR: u8 = 0xB0;
/// OR'd with the RAM row shown on the first COM line.
pub const SET_START_LINE: u8 = 0x40;

// ---------------------------------------------------------------------------
// Hardware configuration
// ---------------------------------------------------------------------------

/// Column 0 → SEG0.
pub const SEG_REMAP_NORMAL: u8 = 0xA0;
/// Column 131 → SEG0 (horizontal mirror).
pub const SEG_REMAP_REVERSED: u8 = 0xA1;
/// Scan COM0 → COM[N-1].
pub const COM_SCAN_INC: u8 = 0xC0;
/// Scan COM[N-1] → COM0 (vertical mirror).
pub const COM_SCAN_DEC: u8 = 0xC8;
/// Followed by the multiplex ratio minus one.
pub const SET_MUX_RATIO: u8 = 0xA8;
/// Followed by the vertical display offset.
pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
/// Followed by the COM pins hardware configuration.
pub const SET_COM_PINS: u8 = 0xDA;

// ---------------------------------------------------------------------------
// Timing and driving
// ---------------------------------------------------------------------------

/// Followed by the divide ratio / oscillator frequency byte.
pub const SET_CLOCK_DIV: u8 = 0xD5;
/// Followed by the discharge / pre-charge periods.
pub const SET_PRECHARGE: u8 = 0xD9;
/// Followed by the VCOM deselect level.
pub const SET_VCOM_DETECT: u8 = 0xDB;
/// Followed by [`DC_DC_ON`].
pub const SET_DC_DC: u8 = 0xAD;
/// Internal DC-DC converter enabled.
pub const DC_DC_ON: u8 = 0x8B;

// ---------------------------------------------------------------------------
// Panel constants
// ---------------------------------------------------------------------------

/// The SH1106 has 132 columns of RAM; 128-pixel glass is centred on it.
pub const COLUMN_OFFSET: u8 = 2;

/// Largest number of command bytes sent in one I2C transaction.
pub const MAX_COMMAND_BATCH: usize = 16;

/// Contrast programmed by the init sequence.
pub const DEFAULT_CONTRAST: u8 = 0x80;
