//! Calibration pattern example
//!
//! Cycles through seven screens every 2.5 s on a 0.42" SSD1306:
//!
//! 1. Nine single-pixel markers (corners, edge midpoints, centre) of the
//!    visible window plus one glyph centred in each quadrant (`A`, `0`,
//!    `1`, `B`). All nine markers must be visible; a missing edge marker
//!    means the offset is one pixel off in that direction.
//! 2. The configured window size and offset as text.
//! 3. The font showcase: 5×7 labels, 6×10 text in a frame, 6×12
//!    numerals, four framed quadrants and two 10×20 glyphs. A frame edge
//!    that is missing or cut off means the window is too large.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes           |
//! |-----------|------------|-----------------|
//! | I2C0 SDA  | GP20       |                 |
//! | I2C0 SCL  | GP21       |                 |
//! | OLED VCC  | 3V3        |                 |
//! | OLED GND  | GND        |                 |

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp as hal;
use embassy_rp::bind_interrupts;
use embassy_rp::block::ImageDef;
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use oled_bringup_rs::{bring_up, show, BusConfig, FontDemo, OledDriver, PanelConfig, Screen};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

// Wire the I2C0 interrupt to Embassy's handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

const SCREEN_PERIOD: Duration = Duration::from_millis(2500);

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("Calibration pattern example starting");

    let bus = BusConfig::default();
    let panel = PanelConfig {
        contrast: Some(255),
        ..PanelConfig::SSD1306_0_42
    };

    let mut i2c_config = i2c::Config::default();
    i2c_config.frequency = bus.frequency_or_default();

    // --- I2C bus (GP20 = SDA, GP21 = SCL) ---
    let i2c = I2c::new_async(
        p.I2C0,
        p.PIN_21, // SCL
        p.PIN_20, // SDA
        Irqs,
        i2c_config,
    );

    let mut oled = OledDriver::new(i2c, panel.address);

    if let Err(e) = bring_up(&mut oled, &panel, &Screen::Calibration).await {
        error!("Bring-up failed: {}", e);
        loop {
            Timer::after(Duration::from_secs(60)).await;
        }
    }

    let screens = [
        Screen::Calibration,
        Screen::Geometry(panel.viewport),
        Screen::Fonts(FontDemo::Titles),
        Screen::Fonts(FontDemo::Framed),
        Screen::Fonts(FontDemo::Numerals),
        Screen::Fonts(FontDemo::Quadrants),
        Screen::Fonts(FontDemo::LargeGlyphs),
    ];

    for screen in screens.iter().cycle() {
        if let Err(e) = show(&mut oled, &panel, screen).await {
            warn!("Screen update failed: {}", e);
        }
        Timer::after(SCREEN_PERIOD).await;
    }
}
