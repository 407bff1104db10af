//! DeskPi Hardware Abstraction Layer
//!
//! This crate defines the hardware primitives the robot drivers are built
//! on. A board crate (the RP2040 firmware, a host simulator, a test mock)
//! implements them; the drivers never touch chip registers directly.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  deskpi-firmware / application          │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  deskpi-drivers (OLED, motors, sensors) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  deskpi-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`i2c::I2cBus`] - Two-wire bus writes
//! - [`adc::AnalogInput`] - 10-bit analog reads
//! - [`pulse::PulseTimer`] - Pulse width measurement
//! - [`strip::RgbStrip`] - Addressable RGB LED strips

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod i2c;
pub mod pulse;
pub mod strip;

// Re-export key traits at crate root for convenience
pub use adc::{AnalogInput, ADC_MAX};
pub use gpio::{InputPin, OutputPin};
pub use i2c::{I2cBus, I2cConfig};
pub use pulse::{PulseLevel, PulseTimer};
pub use strip::RgbStrip;
