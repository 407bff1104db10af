//! Motor driver implementations
//!
//! The wheels are on/off H-bridge channels with no speed control:
//!
//! - [`DcMotor`]: one channel, a forward and a backward line
//! - [`MotorPair`]: the left and right wheels addressed by [`Motor`]
//!
//! [`Motor`]: deskpi_core::traits::Motor

pub mod dc;
pub mod pair;

pub use dc::DcMotor;
pub use pair::MotorPair;
