//! Sensor implementations

pub mod bank;

pub use bank::{AnalogChannels, SensorBank, SensorReadings};
