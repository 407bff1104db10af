//! Two-wire (I2C) bus abstraction
//!
//! The robot only ever writes to the bus: the OLED controller is a
//! write-only peripheral and nothing else shares the bus.

/// I2C bus master (write side)
///
/// Every call is one complete, blocking bus transaction: START, address,
/// the bytes of `data`, STOP.
pub trait I2cBus {
    /// Error type for bus transactions
    type Error;

    /// Write `data` to the device at the 7-bit `address`
    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error>;
}

impl<T: I2cBus + ?Sized> I2cBus for &mut T {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        T::write(self, address, data)
    }
}

/// I2C configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct I2cConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
}

impl Default for I2cConfig {
    fn default() -> Self {
        Self::FAST
    }
}

impl I2cConfig {
    /// Standard mode (100 kHz)
    pub const STANDARD: Self = Self { frequency: 100_000 };

    /// Fast mode (400 kHz), what the SSD1306 is usually run at
    pub const FAST: Self = Self { frequency: 400_000 };
}
