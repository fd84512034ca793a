//! SSD1306 offset example
//!
//! Hardware check for a 0.42" SSD1306 module: brings the panel up with the
//! visible-area offset applied and prints four lines that should exactly
//! fill the 72×40 window. Text cut off on the left or top means the offset
//! is wrong for this particular module.
//!
//! # Wiring
//!
//! | Signal    | Pico 2 Pin | Notes           |
//! |-----------|------------|-----------------|
//! | I2C0 SDA  | GP20       |                 |
//! | I2C0 SCL  | GP21       |                 |
//! | OLED VCC  | 3V3        |                 |
//! | OLED GND  | GND        |                 |
//!
//! # Panel geometry
//!
//! | Property        | Value                      |
//! |-----------------|----------------------------|
//! | Controller grid | 128 × 64                   |
//! | Visible window  | 72 × 40                    |
//! | Window origin   | column 28, row 24          |

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

use oled_bringup_rs::{bring_up, BusConfig, OledDriver, PanelConfig, Screen, OFFSET_TEST_LINES};

/// Tell the Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = hal::block::ImageDef::secure_exe();

// Wire the I2C0 interrupt to Embassy's handler.
bind_interrupts!(struct Irqs {
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("SSD1306 offset example starting");

    let bus = BusConfig::default();
    let panel = PanelConfig::SSD1306_0_42;
    info!(
        "I2C{}: SCL=GP{} SDA=GP{} @ {} Hz",
        bus.bus,
        bus.scl_pin,
        bus.sda_pin,
        bus.frequency_or_default()
    );

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

    match bring_up(&mut oled, &panel, &Screen::Text(&OFFSET_TEST_LINES)).await {
        Ok(()) => info!("Text on screen"),
        Err(e) => error!("Bring-up failed: {}", e),
    }

    // Nothing left to do; the panel keeps showing its RAM.
    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}
