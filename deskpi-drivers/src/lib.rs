//! Hardware driver implementations
//!
//! This crate provides the DeskPi robot's drivers, built on the traits in
//! `deskpi-hal` and `deskpi-core`:
//!
//! - OLED: SSD1306 text driver over the two-wire bus
//! - Motors: on/off H-bridge channels for the two wheels
//! - Sensors: light, line (grey) and volume inputs plus the buttons
//! - Accessories: RGB LED strip, ultrasonic ranger, IR receiver
//!
//! Every driver owns its pins and is meant to be held by a single owner
//! (one task, or the main loop). Nothing here locks.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod accessory;
pub mod motor;
pub mod oled;
pub mod sensor;

#[cfg(test)]
pub(crate) mod mock;

pub use oled::{OledError, Ssd1306};
