//! Board-agnostic core for the DeskPi robot
//!
//! This crate contains everything that does not depend on a particular
//! board or driver implementation:
//!
//! - Robot configuration types and the `robot.toml` parser
//! - Motor and text display traits the drivers implement

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod config;
pub mod traits;
