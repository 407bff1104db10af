//! Build script for deskpi-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates robot.toml at compile time

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

/// Largest strip the firmware buffers (keep in step with `MAX_LEDS`)
const MAX_LEDS: i64 = 8;

fn main() {
    setup_linker();
    validate_config();
}

/// Set up linker search paths for memory.x
fn setup_linker() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());

    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Validate robot.toml at compile time
///
/// The firmware parses the same file again at startup with its own
/// no_std parser; catching mistakes here turns a silent fallback to
/// defaults into a build error.
fn validate_config() {
    println!("cargo:rerun-if-changed=robot.toml");

    let text = fs::read_to_string("robot.toml")
        .unwrap_or_else(|e| fail("cannot read robot.toml", &[e.to_string()]));

    let config: toml::Value = toml::from_str(&text)
        .unwrap_or_else(|e| fail("robot.toml is not valid TOML", &[e.to_string()]));

    let mut errors = Vec::new();
    validate_sections(&config, &mut errors);
    validate_oled(&config, &mut errors);
    validate_led(&config, &mut errors);
    validate_timing(&config, &mut errors);
    validate_ui(&config, &mut errors);

    if !errors.is_empty() {
        fail("invalid robot configuration", &errors);
    }
}

/// Abort the build with a boxed report
fn fail(title: &str, details: &[String]) -> ! {
    const WIDTH: usize = 60;

    let rule = "─".repeat(WIDTH + 2);
    let mut report = format!(
        "\n┌{rule}┐\n│ {:<width$} │\n├{rule}┤\n",
        title,
        rule = rule,
        width = WIDTH
    );
    for line in details.iter().flat_map(|d| d.lines()) {
        let line: String = line.chars().take(WIDTH).collect();
        report.push_str(&format!("│ {:<width$} │\n", line, width = WIDTH));
    }
    report.push_str(&format!("└{rule}┘\n"));

    panic!("{}", report);
}

/// Look up `[section] key`
fn get<'a>(config: &'a toml::Value, section: &str, key: &str) -> Option<&'a toml::Value> {
    config.get(section).and_then(|s| s.get(key))
}

/// Check that `[section] key`, if present, is an integer in `min..=max`
fn check_int(
    config: &toml::Value,
    section: &str,
    key: &str,
    min: i64,
    max: i64,
    errors: &mut Vec<String>,
) {
    match get(config, section, key) {
        None => {}
        Some(toml::Value::Integer(n)) if (min..=max).contains(n) => {}
        Some(toml::Value::Integer(_)) => {
            errors.push(format!("[{}] {} must be {}-{}", section, key, min, max));
        }
        Some(_) => errors.push(format!("[{}] {} must be an integer", section, key)),
    }
}

/// Only known sections, each a table
fn validate_sections(config: &toml::Value, errors: &mut Vec<String>) {
    const SECTIONS: [&str; 6] = ["oled", "led", "sensor", "ultrasonic", "ir", "ui"];

    let Some(table) = config.as_table() else {
        return;
    };

    for (name, value) in table {
        if !SECTIONS.contains(&name.as_str()) {
            errors.push(format!("unknown section [{}]", name));
        } else if !value.is_table() {
            errors.push(format!("[{}] must be a table", name));
        }
    }
}

fn validate_oled(config: &toml::Value, errors: &mut Vec<String>) {
    check_int(config, "oled", "address", 0, 0x7F, errors);

    match get(config, "oled", "bus_errors") {
        None => {}
        Some(toml::Value::String(policy))
            if ["best_effort", "ignore", "propagate"].contains(&policy.as_str()) => {}
        Some(_) => errors.push(
            "[oled] bus_errors must be 'best_effort' or 'propagate'".to_string(),
        ),
    }
}

fn validate_led(config: &toml::Value, errors: &mut Vec<String>) {
    check_int(config, "led", "count", 1, MAX_LEDS, errors);
    check_int(config, "led", "brightness", 0, 255, errors);
    check_int(config, "sensor", "adc_max", 1, u16::MAX as i64, errors);
}

/// Timeouts and divisors
fn validate_timing(config: &toml::Value, errors: &mut Vec<String>) {
    let u32_max = u32::MAX as i64;
    check_int(config, "ultrasonic", "timeout_us", 0, u32_max, errors);
    check_int(config, "ultrasonic", "us_per_cm", 1, u32_max, errors);
    check_int(config, "ir", "timeout_us", 0, u32_max, errors);
    check_int(config, "ir", "scale_us", 1, u32_max, errors);
    check_int(config, "ui", "refresh_ms", 1, u32_max, errors);
}

fn validate_ui(config: &toml::Value, errors: &mut Vec<String>) {
    match get(config, "ui", "banner") {
        None => {}
        Some(toml::Value::String(banner)) if banner.chars().count() <= 21 => {
            if banner.len() > 21 {
                errors.push("[ui] banner must be ASCII to fit one line".to_string());
            }
        }
        Some(toml::Value::String(_)) => {
            errors.push("[ui] banner must be at most 21 characters".to_string());
        }
        Some(_) => errors.push("[ui] banner must be a string".to_string()),
    }

    match get(config, "ui", "splash") {
        None | Some(toml::Value::Boolean(_)) => {}
        Some(_) => errors.push("[ui] splash must be true or false".to_string()),
    }
}
