//! Left/right wheel pair

use deskpi_core::traits::{Direction, Motor, MotorDriver};
use deskpi_hal::OutputPin;

use super::DcMotor;

/// Both drive motors of the robot
///
/// Pin types are the forward and backward inputs of the left (`LF`, `LB`)
/// and right (`RF`, `RB`) bridge channels.
pub struct MotorPair<LF, LB, RF, RB> {
    left: DcMotor<LF, LB>,
    right: DcMotor<RF, RB>,
}

impl<LF, LB, RF, RB> MotorPair<LF, LB, RF, RB>
where
    LF: OutputPin,
    LB: OutputPin,
    RF: OutputPin,
    RB: OutputPin,
{
    /// Pair two motors; both start stopped
    pub fn new(left: DcMotor<LF, LB>, right: DcMotor<RF, RB>) -> Self {
        Self { left, right }
    }

    /// Drive one motor
    pub fn set_motor(&mut self, motor: Motor, dir: Direction) {
        #[cfg(feature = "defmt")]
        defmt::trace!("motor {} -> {}", motor, dir);

        match motor {
            Motor::Left => self.left.set_direction(dir),
            Motor::Right => self.right.set_direction(dir),
        }
    }

    /// Direction last applied to `motor`
    pub fn direction(&self, motor: Motor) -> Direction {
        match motor {
            Motor::Left => self.left.direction(),
            Motor::Right => self.right.direction(),
        }
    }

    /// Stop both motors
    pub fn stop_all(&mut self) {
        self.left.stop();
        self.right.stop();
    }

    /// Check if either motor is being driven
    pub fn is_moving(&self) -> bool {
        self.left.is_running() || self.right.is_running()
    }
}
