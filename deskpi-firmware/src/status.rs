//! Status screen
//!
//! ```text
//! 0  DeskPi
//! 1
//! 2  Distance:       42 cm
//! 3  Grey L/R:      50/48
//! 4  Light L/R:   312/298
//! 5  Volume:          512
//! 6  IR:                4
//! 7  Drive:      FWD/STOP
//! ```

use core::fmt::Write;

use deskpi_core::traits::{Direction, TextDisplayExt, LINE_CHARS};
use deskpi_drivers::sensor::SensorReadings;
use heapless::String;

/// One refresh worth of robot state
#[derive(Debug, Clone, Copy, Default)]
pub struct Status {
    pub distance_cm: u32,
    pub readings: SensorReadings,
    pub left_grey_percent: u8,
    pub right_grey_percent: u8,
    pub ir_code: u32,
    pub left: Direction,
    pub right: Direction,
}

fn direction_label(dir: Direction) -> &'static str {
    match dir {
        Direction::Forward => "FWD",
        Direction::Backward => "REV",
        Direction::Stop => "STOP",
    }
}

/// Redraw every line
///
/// Every line is written at full width, so nothing stale survives.
pub fn render<D: TextDisplayExt>(
    display: &mut D,
    banner: &str,
    status: &Status,
) -> Result<(), D::Error> {
    let mut value: String<LINE_CHARS> = String::new();

    display.show_line(banner, 0)?;
    display.show_line("", 1)?;

    if status.distance_cm == 0 {
        display.show_field(2, "Distance", "---")?;
    } else {
        let _ = write!(value, "{} cm", status.distance_cm);
        display.show_field(2, "Distance", &value)?;
    }

    value.clear();
    let _ = write!(value, "{}/{}", status.left_grey_percent, status.right_grey_percent);
    display.show_field(3, "Grey L/R", &value)?;

    value.clear();
    let _ = write!(
        value,
        "{}/{}",
        status.readings.left_optical, status.readings.right_optical
    );
    display.show_field(4, "Light L/R", &value)?;

    display.show_number(5, "Volume", status.readings.volume as u32)?;
    display.show_number(6, "IR", status.ir_code)?;

    value.clear();
    let _ = write!(
        value,
        "{}/{}",
        direction_label(status.left),
        direction_label(status.right)
    );
    display.show_field(7, "Drive", &value)
}
