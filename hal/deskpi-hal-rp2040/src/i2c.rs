//! Blocking two-wire bus adapter

use deskpi_hal::{I2cBus, I2cConfig};
use embassy_rp::i2c::{self, Blocking, I2c, Instance};

/// Blocking I2C master
pub struct BlockingI2c<T: Instance + 'static>(pub I2c<'static, T, Blocking>);

impl<T: Instance + 'static> BlockingI2c<T> {
    /// Build the `embassy-rp` bus configuration
    pub fn config(config: I2cConfig) -> i2c::Config {
        let mut rp = i2c::Config::default();
        rp.frequency = config.frequency;
        rp
    }
}

impl<T: Instance + 'static> I2cBus for BlockingI2c<T> {
    type Error = i2c::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.0.blocking_write(address, data)
    }
}
