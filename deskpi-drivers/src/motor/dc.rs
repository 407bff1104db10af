//! H-bridge DC motor channel
//!
//! Direction is set by which of the two bridge inputs is high. The
//! backward line is always released before the forward line is driven
//! (and vice versa), so both are never high at the same time.

use deskpi_core::traits::{Direction, MotorDriver};
use deskpi_hal::OutputPin;

/// DC motor on two bridge inputs
pub struct DcMotor<F, B> {
    pub(super) forward: F,
    pub(super) backward: B,
    direction: Direction,
}

impl<F: OutputPin, B: OutputPin> DcMotor<F, B> {
    /// Take ownership of the bridge inputs and stop the motor
    pub fn new(forward: F, backward: B) -> Self {
        let mut motor = Self {
            forward,
            backward,
            direction: Direction::Stop,
        };
        // Pins may come out of reset in any state
        motor.apply(Direction::Stop);
        motor
    }

    /// Give the pins back, leaving the motor stopped
    pub fn release(mut self) -> (F, B) {
        self.apply(Direction::Stop);
        (self.forward, self.backward)
    }

    fn apply(&mut self, dir: Direction) {
        let (fwd, bwd) = dir.pin_levels();
        // Release first, then drive
        if !fwd {
            self.forward.set_low();
        }
        if !bwd {
            self.backward.set_low();
        }
        if fwd {
            self.forward.set_high();
        }
        if bwd {
            self.backward.set_high();
        }
        self.direction = dir;
    }
}

impl<F: OutputPin, B: OutputPin> MotorDriver for DcMotor<F, B> {
    fn set_direction(&mut self, dir: Direction) {
        self.apply(dir);
    }

    fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{Event, MockPin, Trace};

    fn levels<F: OutputPin, B: OutputPin>(motor: &DcMotor<F, B>) -> (bool, bool) {
        (motor.forward.is_set_high(), motor.backward.is_set_high())
    }

    #[test]
    fn test_new_drives_both_low() {
        let motor = DcMotor::new(MockPin::new(), MockPin::new());

        assert_eq!(levels(&motor), (false, false));
        assert_eq!(motor.direction(), Direction::Stop);
        assert!(!motor.is_running());
    }

    #[test]
    fn test_directions() {
        let mut motor = DcMotor::new(MockPin::new(), MockPin::new());

        motor.set_direction(Direction::Forward);
        assert_eq!(levels(&motor), (true, false));
        assert!(motor.is_running());

        motor.set_direction(Direction::Backward);
        assert_eq!(levels(&motor), (false, true));
        assert_eq!(motor.direction(), Direction::Backward);

        motor.stop();
        assert_eq!(levels(&motor), (false, false));
        assert!(!motor.is_running());
    }

    #[test]
    fn test_reverse_releases_before_driving() {
        let trace = Trace::new();
        let mut motor = DcMotor::new(
            MockPin::traced("fwd", &trace),
            MockPin::traced("bwd", &trace),
        );
        motor.set_direction(Direction::Forward);
        trace.clear();

        motor.set_direction(Direction::Backward);

        assert_eq!(trace.events(), [Event::Low("fwd"), Event::High("bwd")]);
    }

    #[test]
    fn test_release_stops() {
        let mut motor = DcMotor::new(MockPin::new(), MockPin::new());
        motor.set_direction(Direction::Forward);

        let (fwd, bwd) = motor.release();
        assert!(fwd.is_set_low());
        assert!(bwd.is_set_low());
    }
}
