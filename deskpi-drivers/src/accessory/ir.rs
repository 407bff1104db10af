//! Infrared receiver
//!
//! No protocol decoding: a "code" is just the width of the first low
//! pulse, scaled down. Useful to tell remotes' buttons apart, nothing
//! more.

use deskpi_core::config::IrConfig;
use deskpi_hal::{PulseLevel, PulseTimer};

/// IR receiver on a pulse-timed input
pub struct IrReceiver<P> {
    pin: P,
    config: IrConfig,
    last_code: u32,
}

impl<P: PulseTimer> IrReceiver<P> {
    pub fn new(pin: P, config: IrConfig) -> Self {
        Self {
            pin,
            config,
            last_code: 0,
        }
    }

    fn measure(&mut self) -> u32 {
        self.pin.pulse_in(PulseLevel::Low, self.config.timeout_us)
    }

    /// Wait for a low pulse; true if one arrived before the timeout
    pub fn is_received(&mut self) -> bool {
        self.measure() > 0
    }

    /// Measure a pulse and return its scaled width as the code
    ///
    /// The code is remembered, including a 0 from a timeout.
    pub fn read_signal(&mut self) -> u32 {
        self.last_code = self.measure() / self.config.scale_us.max(1);
        self.last_code
    }

    /// Code from the last [`read_signal`](Self::read_signal), 0 before any
    pub fn last_code(&self) -> u32 {
        self.last_code
    }
}
