//! Driver traits
//!
//! These traits define the interface between application logic and the
//! driver implementations in `deskpi-drivers`.

pub mod display;
pub mod motor;

pub use display::{TextDisplay, TextDisplayExt, LINE_CHARS};
pub use motor::{Direction, Motor, MotorDriver};
