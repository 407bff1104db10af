//! Robot control loop
//!
//! Samples every sensor once per refresh period, applies the button
//! controls and redraws the status screen.
//!
//! - Left button: both wheels forward
//! - Right button: stop
//! - Driving forward stops on its own when something is closer than
//!   [`STOP_DISTANCE_CM`]
//!
//! The LED strip shows obstacle distance (green far, yellow mid, red near)
//! and the volume knob sets its brightness.

use defmt::*;
use deskpi_core::config::{UiConfig, MAX_BANNER_LEN};
use deskpi_core::traits::{Direction, Motor};
use deskpi_drivers::accessory::rgb;
use embassy_time::{Duration, Ticker, Timer};
use heapless::String;
use portable_atomic::Ordering;

use crate::board::Robot;
use crate::channels::LED_BRIGHTNESS;
use crate::status::{self, Status};

/// Forward motion stops below this distance
pub const STOP_DISTANCE_CM: u32 = 10;

/// Below this an obstacle is "mid" range
const MID_DISTANCE_CM: u32 = 30;

const SPLASH_MS: u64 = 1500;

/// Period of the status line in the log
const LOG_PERIOD_MS: u32 = 5000;

/// Obstacle distance class, drives the LED color
#[derive(Debug, Clone, Copy, PartialEq, Eq, defmt::Format)]
enum Proximity {
    /// No echo
    Clear,
    Far,
    Mid,
    Near,
}

impl Proximity {
    fn from_cm(cm: u32) -> Self {
        match cm {
            0 => Proximity::Clear,
            d if d < STOP_DISTANCE_CM => Proximity::Near,
            d if d < MID_DISTANCE_CM => Proximity::Mid,
            _ => Proximity::Far,
        }
    }

    fn color(self) -> u32 {
        match self {
            Proximity::Clear => rgb(0, 0, 32),
            Proximity::Far => rgb(0, 255, 0),
            Proximity::Mid => rgb(255, 160, 0),
            Proximity::Near => rgb(255, 0, 0),
        }
    }
}

/// Robot control task
#[embassy_executor::task]
pub async fn robot_task(mut robot: Robot, ui: UiConfig) {
    info!("Robot task started");

    if ui.splash {
        show_splash(&mut robot, &ui.banner).await;
    }

    let refresh_ms = ui.refresh_ms.max(1);
    let log_every = (LOG_PERIOD_MS / refresh_ms).max(1);
    let mut ticker = Ticker::every(Duration::from_millis(refresh_ms as u64));
    let mut proximity = None;
    let mut last_ir = 0;
    let mut ticks: u32 = 0;

    loop {
        ticker.next().await;
        ticks = ticks.wrapping_add(1);

        let mut status = sample(&mut robot);
        drive(&mut robot, &status);
        status.left = robot.motors.direction(Motor::Left);
        status.right = robot.motors.direction(Motor::Right);

        let current = Proximity::from_cm(status.distance_cm);
        if proximity != Some(current) {
            debug!("Proximity {}", current);
            for i in 0..robot.leds.len() {
                robot.leds.set_color(i, current.color());
            }
            proximity = Some(current);
        }

        // 10-bit volume to 8-bit brightness
        let level = (status.readings.volume >> 2).min(255) as u8;
        LED_BRIGHTNESS.store(level, Ordering::Relaxed);

        if status.ir_code != 0 && status.ir_code != last_ir {
            info!("IR code {}", status.ir_code);
        }
        last_ir = status.ir_code;

        if let Err(e) = status::render(&mut robot.oled, &ui.banner, &status) {
            warn!("OLED update failed: {}", e);
        }

        if ticks % log_every == 0 {
            info!(
                "dist={}cm grey={}/{}% vol={} drive={}/{} oled_dropped={}",
                status.distance_cm,
                status.left_grey_percent,
                status.right_grey_percent,
                status.readings.volume,
                status.left,
                status.right,
                robot.oled.dropped_transactions()
            );
        }
    }
}

/// Banner centred on the middle line, then a blank screen
async fn show_splash(robot: &mut Robot, banner: &str) {
    let mut line: String<MAX_BANNER_LEN> = String::new();
    let pad = MAX_BANNER_LEN.saturating_sub(banner.chars().count()) / 2;
    for _ in 0..pad {
        let _ = line.push(' ');
    }
    let _ = line.push_str(banner);

    if let Err(e) = robot.oled.show_text(&line, 3) {
        warn!("Splash failed: {}", e);
        return;
    }
    Timer::after(Duration::from_millis(SPLASH_MS)).await;

    if let Err(e) = robot.oled.clear() {
        warn!("OLED clear failed: {}", e);
    }
}

/// Read every input once
fn sample(robot: &mut Robot) -> Status {
    let readings = robot.sensors.read_all();
    let left_grey_percent = robot.sensors.left_grey_percent();
    let right_grey_percent = robot.sensors.right_grey_percent();
    let distance_cm = robot.ranger.distance_cm();
    let ir_code = robot.ir.read_signal();

    Status {
        distance_cm,
        readings,
        left_grey_percent,
        right_grey_percent,
        ir_code,
        ..Status::default()
    }
}

/// Apply the button controls and the obstacle stop
fn drive(robot: &mut Robot, status: &Status) {
    if status.readings.right_button {
        if robot.motors.is_moving() {
            info!("Stop (button)");
        }
        robot.motors.stop_all();
        return;
    }

    if status.readings.left_button {
        robot.motors.set_motor(Motor::Left, Direction::Forward);
        robot.motors.set_motor(Motor::Right, Direction::Forward);
    }

    let forward = robot.motors.direction(Motor::Left) == Direction::Forward
        || robot.motors.direction(Motor::Right) == Direction::Forward;
    if forward && Proximity::from_cm(status.distance_cm) == Proximity::Near {
        warn!("Obstacle at {} cm, stopping", status.distance_cm);
        robot.motors.stop_all();
    }
}
