//! Pulse width measurement
//!
//! Both the ultrasonic echo line and the IR demodulator output are read
//! by timing how long the pin stays at one level.

/// Level of the pulse to time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PulseLevel {
    /// Time a high pulse (idle low)
    High,
    /// Time a low pulse (idle high)
    Low,
}

impl PulseLevel {
    /// Whether a pin reading of `high` is inside this pulse
    pub fn matches(self, high: bool) -> bool {
        match self {
            PulseLevel::High => high,
            PulseLevel::Low => !high,
        }
    }
}

/// Input pin that can time a single pulse
///
/// Implementations wait for the pin to enter `level`, then measure how
/// long it stays there. The whole call, waiting included, is bounded by
/// `timeout_us`.
pub trait PulseTimer {
    /// Measure one pulse at `level`, in microseconds
    ///
    /// Returns 0 if no complete pulse was seen before the timeout.
    fn pulse_in(&mut self, level: PulseLevel, timeout_us: u32) -> u32;
}

impl<T: PulseTimer + ?Sized> PulseTimer for &mut T {
    fn pulse_in(&mut self, level: PulseLevel, timeout_us: u32) -> u32 {
        T::pulse_in(self, level, timeout_us)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_matches() {
        assert!(PulseLevel::High.matches(true));
        assert!(!PulseLevel::High.matches(false));
        assert!(PulseLevel::Low.matches(false));
        assert!(!PulseLevel::Low.matches(true));
    }
}
