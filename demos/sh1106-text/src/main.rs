//! SH1106 text example
//!
//! Hardware check for boards that turn out to carry an SH1106 instead of an
//! SSD1306 (the image shows up shifted by two columns, or with garbage on
//! the right edge, when driven as an SSD1306). Uses the in-crate SH1106
//! driver over the full 128×64 grid, flipped, at full contrast, and prints
//! "Hello" / "World!".
//!
//! If the text appears upside down on your module, set `flipped: false`.
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

use oled_bringup_rs::{bring_up, BusConfig, PanelConfig, Screen, Sh1106Driver, HELLO_WORLD_LINES};

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
    info!("SH1106 text example starting");

    let bus = BusConfig::default();
    let panel = PanelConfig::SH1106_128X64;

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

    let mut oled = Sh1106Driver::new(i2c, panel.address);

    if let Err(e) = bring_up(&mut oled, &panel, &Screen::Text(&HELLO_WORLD_LINES)).await {
        error!("Bring-up failed: {}", e);
    } else {
        info!("{} pixels lit", oled.buffer().lit_pixels());
    }

    loop {
        Timer::after(Duration::from_secs(60)).await;
    }
}
