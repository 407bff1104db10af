//! Board wiring
//!
//! Raspberry Pi Pico on the DeskPi carrier. Where the carrier follows
//! the micro:bit edge connector, the GPIO number matches the edge pin
//! (P14 is GPIO14 and so on).
//!
//! | Function | GPIO | Edge pin |
//! |---|---|---|
//! | OLED SDA / SCL (I2C0) | 20 / 21 | P20 / P19 |
//! | Left motor fwd / back | 14 / 13 | P14 / P13 |
//! | Right motor fwd / back | 16 / 15 | P16 / P15 |
//! | Left / right button (active low) | 11 / 5 | P11 / P5 |
//! | Ultrasonic trigger / echo | 12 / 9 | P12 / P9 |
//! | IR receiver | 7 | P7 |
//! | WS2812 data | 6 | P6 |
//! | LED enable | 8 | |
//! | Left / right grey (ADC0 / ADC1) | 26 / 27 | P2 / P1 |
//! | Mux output (ADC2) | 28 | |
//! | Mux select S0 / S1 | 2 / 3 | |
//!
//! Mux inputs: 0 volume (P3), 1 left light (P4), 2 right light (P0).

use deskpi_drivers::accessory::{IrReceiver, LedStrip, Ultrasonic};
use deskpi_drivers::motor::MotorPair;
use deskpi_drivers::sensor::SensorBank;
use deskpi_drivers::Ssd1306;
use deskpi_hal_rp2040::{AdcInput, BlockingI2c, GpioInput, GpioOutput};
use embassy_rp::peripherals::I2C0;
use embassy_time::Delay;

use crate::tasks::led_strip::FrameStrip;

pub type Oled = Ssd1306<BlockingI2c<I2C0>>;
pub type Motors = MotorPair<GpioOutput, GpioOutput, GpioOutput, GpioOutput>;
pub type Sensors = SensorBank<AdcInput, GpioInput>;
pub type Ranger = Ultrasonic<GpioOutput, GpioInput, Delay>;
pub type Ir = IrReceiver<GpioInput>;
pub type Leds = LedStrip<FrameStrip, GpioOutput>;

/// Everything the control loop drives
pub struct Robot {
    pub oled: Oled,
    pub motors: Motors,
    pub sensors: Sensors,
    pub ranger: Ranger,
    pub ir: Ir,
    pub leds: Leds,
}
