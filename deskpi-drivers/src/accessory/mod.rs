//! Accessory drivers
//!
//! Peripherals on the robot's expansion header that are not part of the
//! drive train or the sensor bank.

pub mod ir;
pub mod led_strip;
pub mod ultrasonic;

pub use ir::IrReceiver;
pub use led_strip::{rgb, unpack, LedStrip};
pub use ultrasonic::Ultrasonic;
