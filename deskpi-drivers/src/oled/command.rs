//! SSD1306 command channel
//!
//! Every bus transaction to the controller is two bytes: a control byte
//! saying what the next byte is, then the byte itself.

use deskpi_hal::I2cBus;

/// Control byte: the next byte is a command
pub const CONTROL_COMMAND: u8 = 0x00;

/// Control byte: the next byte goes to display RAM
pub const CONTROL_DATA: u8 = 0x40;

/// Framing layer between the driver and the bus
///
/// Stateless apart from the bus handle and the device address. Each call
/// is exactly one blocking transaction; nothing is batched.
pub struct CommandChannel<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2cBus> CommandChannel<I2C> {
    /// Create a channel to the device at the 7-bit `address`
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Device address this channel writes to
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Send one command byte: `[0x00, cmd]`
    pub fn send_command(&mut self, cmd: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[CONTROL_COMMAND, cmd])
    }

    /// Send one display RAM byte: `[0x40, data]`
    pub fn send_data(&mut self, data: u8) -> Result<(), I2C::Error> {
        self.i2c.write(self.address, &[CONTROL_DATA, data])
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{BusWrite, MockBus};

    #[test]
    fn test_command_framing() {
        let (bus, log) = MockBus::new();
        let mut channel = CommandChannel::new(bus, 0x3C);

        channel.send_command(0xAE).unwrap();

        assert_eq!(
            log.writes(),
            [BusWrite {
                address: 0x3C,
                control: CONTROL_COMMAND,
                byte: 0xAE,
            }]
        );
    }

    #[test]
    fn test_data_framing() {
        let (bus, log) = MockBus::new();
        let mut channel = CommandChannel::new(bus, 0x3D);

        channel.send_data(0x7E).unwrap();
        channel.send_data(0x00).unwrap();

        let writes = log.writes();
        assert_eq!(writes.len(), 2);
        assert!(writes.iter().all(|w| w.address == 0x3D));
        assert!(writes.iter().all(|w| w.control == CONTROL_DATA));
        assert_eq!(writes[0].byte, 0x7E);
        assert_eq!(writes[1].byte, 0x00);
    }

    #[test]
    fn test_bus_error_returned() {
        let (bus, log) = MockBus::failing();
        let mut channel = CommandChannel::new(bus, 0x3C);

        assert!(channel.send_command(0xAF).is_err());
        assert!(log.writes().is_empty());
        assert_eq!(log.attempts(), 1);
    }
}
