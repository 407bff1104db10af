//! RP2040 HAL for the DeskPi robot
//!
//! Implements the `deskpi-hal` traits on top of `embassy-rp`:
//!
//! - GPIO outputs and inputs, including software pulse timing
//! - Blocking two-wire bus for the OLED
//! - ADC channels scaled to the 10-bit range the sensors expect, with
//!   a multiplexer in front of ADC2

#![no_std]

pub mod adc;
pub mod gpio;
pub mod i2c;

pub use adc::{AdcChannel, AdcInput, AnalogBank, AnalogSource};
pub use gpio::{GpioInput, GpioOutput};
pub use i2c::BlockingI2c;
