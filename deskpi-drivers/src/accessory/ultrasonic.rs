//! Ultrasonic ranger (HC-SR04 style)
//!
//! A 10 µs trigger pulse starts a measurement; the sensor answers with an
//! echo pulse whose width is the sound's round-trip time.

use deskpi_core::config::UltrasonicConfig;
use deskpi_hal::{OutputPin, PulseLevel, PulseTimer};
use embedded_hal::delay::DelayNs;

/// Trigger settle time before the pulse
const SETTLE_US: u32 = 2;

/// Trigger pulse width
const TRIGGER_US: u32 = 10;

/// Ultrasonic ranger on a trigger output and an echo timer
pub struct Ultrasonic<T, E, D> {
    trigger: T,
    echo: E,
    delay: D,
    config: UltrasonicConfig,
}

impl<T: OutputPin, E: PulseTimer, D: DelayNs> Ultrasonic<T, E, D> {
    pub fn new(trigger: T, echo: E, delay: D, config: UltrasonicConfig) -> Self {
        Self {
            trigger,
            echo,
            delay,
            config,
        }
    }

    /// Fire one measurement and return the echo width in µs
    ///
    /// Returns 0 if no echo arrived within the configured timeout.
    pub fn echo_us(&mut self) -> u32 {
        self.trigger.set_low();
        self.delay.delay_us(SETTLE_US);
        self.trigger.set_high();
        self.delay.delay_us(TRIGGER_US);
        self.trigger.set_low();

        let width = self
            .echo
            .pulse_in(PulseLevel::High, self.config.timeout_us);

        if width == 0 {
            #[cfg(feature = "defmt")]
            defmt::trace!("ultrasonic echo timed out");
        }

        width
    }

    /// Fire one measurement and return the distance in whole centimetres
    ///
    /// A timed-out measurement reads as 0.
    pub fn distance_cm(&mut self) -> u32 {
        let width = self.echo_us();
        width / self.config.us_per_cm.max(1)
    }
}
