//! Motor driver traits
//!
//! The robot's motors are plain on/off H-bridge channels: each motor has a
//! forward and a backward line and no speed control.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which drive motor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Motor {
    /// Left wheel
    Left,
    /// Right wheel
    Right,
}

/// Motor drive state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Drive forward
    Forward,
    /// Drive backward
    Backward,
    /// Both lines low, motor coasts
    #[default]
    Stop,
}

impl Direction {
    /// Levels for the (forward, backward) lines of an H-bridge channel
    ///
    /// Never returns `(true, true)`: driving both lines high would brake
    /// the motor hard on some bridges and short others.
    pub const fn pin_levels(self) -> (bool, bool) {
        match self {
            Direction::Forward => (true, false),
            Direction::Backward => (false, true),
            Direction::Stop => (false, false),
        }
    }
}

/// On/off direction-controlled motor
pub trait MotorDriver {
    /// Drive the motor in `dir`
    fn set_direction(&mut self, dir: Direction);

    /// The direction last applied
    fn direction(&self) -> Direction;

    /// Stop the motor
    fn stop(&mut self) {
        self.set_direction(Direction::Stop);
    }

    /// Check if the motor is being driven
    fn is_running(&self) -> bool {
        self.direction() != Direction::Stop
    }
}
