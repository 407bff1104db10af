//! Embassy async tasks
//!
//! Each task runs independently and communicates via signals.

pub mod led_strip;
pub mod robot;

pub use led_strip::led_strip_task;
pub use robot::robot_task;
