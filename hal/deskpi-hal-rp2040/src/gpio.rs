//! GPIO adapters

use deskpi_hal::{InputPin, OutputPin, PulseLevel, PulseTimer};
use embassy_rp::gpio::{Input, Output};
use embassy_time::{Duration, Instant};

/// Push-pull output
pub struct GpioOutput(pub Output<'static>);

impl OutputPin for GpioOutput {
    fn set_high(&mut self) {
        self.0.set_high();
    }

    fn set_low(&mut self) {
        self.0.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.0.is_set_high()
    }
}

/// Digital input, also usable as a pulse timer
pub struct GpioInput(pub Input<'static>);

impl GpioInput {
    /// Spin until the pin matches `level` or `deadline` passes
    fn wait_for(&self, level: PulseLevel, deadline: Instant) -> Option<Instant> {
        loop {
            if level.matches(self.0.is_high()) {
                return Some(Instant::now());
            }
            if Instant::now() > deadline {
                return None;
            }
        }
    }
}

impl InputPin for GpioInput {
    fn is_high(&self) -> bool {
        self.0.is_high()
    }
}

impl PulseTimer for GpioInput {
    /// Busy-waits; the timeout covers the whole measurement, the wait for
    /// the pulse to start included.
    fn pulse_in(&mut self, level: PulseLevel, timeout_us: u32) -> u32 {
        let deadline = Instant::now() + Duration::from_micros(timeout_us as u64);
        let idle = match level {
            PulseLevel::High => PulseLevel::Low,
            PulseLevel::Low => PulseLevel::High,
        };

        // A pulse already in progress is not measured
        if self.wait_for(idle, deadline).is_none() {
            return 0;
        }
        let Some(start) = self.wait_for(level, deadline) else {
            return 0;
        };
        let Some(end) = self.wait_for(idle, deadline) else {
            return 0;
        };

        (end - start).as_micros() as u32
    }
}
