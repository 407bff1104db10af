//! Minimal TOML parser for the robot configuration
//!
//! Handles only the subset `robot.toml` needs; it is NOT a full TOML
//! implementation and allocates nothing.
//!
//! Supported:
//! - `[section]` headers
//! - `key = value` pairs (string, integer, boolean)
//! - Hexadecimal integers (`0x3C`)
//! - Comments (`# ...`), full-line and trailing
//!
//! Unknown keys are ignored so older firmware accepts newer files.
//! Unknown sections are rejected, since they usually mean a typo.

use heapless::String;

use super::types::{BusErrorPolicy, RobotConfig, MAX_BANNER_LEN, MAX_LEDS};

/// Configuration parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Unknown or malformed section header
    InvalidSection,
    /// Line is neither a header, a comment, nor `key = value`
    InvalidLine,
    /// Value has the wrong type or is out of range
    InvalidValue,
    /// String value longer than its field allows
    ValueTooLong,
}

/// Current parsing context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Root,
    Oled,
    Led,
    Sensor,
    Ultrasonic,
    Ir,
    Ui,
}

/// Parse TOML text into a [`RobotConfig`]
///
/// Fields absent from the input keep their defaults.
pub fn parse_config(input: &str) -> Result<RobotConfig, ConfigError> {
    let mut config = RobotConfig::default();
    let mut section = Section::Root;

    for line in input.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if line.starts_with('[') {
            let header = strip_comment(line);
            if !header.ends_with(']') {
                return Err(ConfigError::InvalidSection);
            }
            section = parse_section_header(&header[1..header.len() - 1])?;
            continue;
        }

        let (key, value) = parse_key_value(line).ok_or(ConfigError::InvalidLine)?;
        apply_value(section, key, value, &mut config)?;
    }

    Ok(config)
}

fn parse_section_header(header: &str) -> Result<Section, ConfigError> {
    match header.trim() {
        "oled" => Ok(Section::Oled),
        "led" => Ok(Section::Led),
        "sensor" => Ok(Section::Sensor),
        "ultrasonic" => Ok(Section::Ultrasonic),
        "ir" => Ok(Section::Ir),
        "ui" => Ok(Section::Ui),
        _ => Err(ConfigError::InvalidSection),
    }
}

/// Cut a trailing `# comment`, unless the `#` sits inside a string
fn strip_comment(s: &str) -> &str {
    let mut in_string = false;
    for (i, c) in s.char_indices() {
        match c {
            '"' => in_string = !in_string,
            '#' if !in_string => return s[..i].trim(),
            _ => {}
        }
    }
    s.trim()
}

/// Parse a `key = value` line
fn parse_key_value(line: &str) -> Option<(&str, &str)> {
    let eq_pos = line.find('=')?;
    let key = line[..eq_pos].trim();
    let value = strip_comment(&line[eq_pos + 1..]);

    if key.is_empty() || value.is_empty() {
        return None;
    }

    Some((key, value))
}

/// Parse a quoted string value
fn parse_string(value: &str) -> Result<&str, ConfigError> {
    if value.len() >= 2 && value.starts_with('"') && value.ends_with('"') {
        Ok(&value[1..value.len() - 1])
    } else {
        Err(ConfigError::InvalidValue)
    }
}

/// Parse a decimal or `0x`-prefixed hexadecimal integer
fn parse_int(value: &str) -> Result<u32, ConfigError> {
    let parsed = match value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
    {
        Some(hex) => u32::from_str_radix(hex, 16),
        None => value.parse(),
    };
    parsed.map_err(|_| ConfigError::InvalidValue)
}

fn parse_bool(value: &str) -> Result<bool, ConfigError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(ConfigError::InvalidValue),
    }
}

/// Parse an integer that must be non-zero (used as a divisor)
fn parse_divisor(value: &str) -> Result<u32, ConfigError> {
    match parse_int(value)? {
        0 => Err(ConfigError::InvalidValue),
        n => Ok(n),
    }
}

fn parse_address(value: &str) -> Result<u8, ConfigError> {
    match parse_int(value)? {
        a @ 0..=0x7F => Ok(a as u8),
        _ => Err(ConfigError::InvalidValue),
    }
}

fn parse_u8(value: &str) -> Result<u8, ConfigError> {
    u8::try_from(parse_int(value)?).map_err(|_| ConfigError::InvalidValue)
}

fn parse_led_count(value: &str) -> Result<u8, ConfigError> {
    match parse_u8(value)? {
        n if n == 0 || n as usize > MAX_LEDS => Err(ConfigError::InvalidValue),
        n => Ok(n),
    }
}

fn parse_adc_max(value: &str) -> Result<u16, ConfigError> {
    u16::try_from(parse_divisor(value)?).map_err(|_| ConfigError::InvalidValue)
}

fn parse_bus_errors(value: &str) -> Result<BusErrorPolicy, ConfigError> {
    match parse_string(value)? {
        "best_effort" | "ignore" => Ok(BusErrorPolicy::BestEffort),
        "propagate" => Ok(BusErrorPolicy::Propagate),
        _ => Err(ConfigError::InvalidValue),
    }
}

fn parse_banner(value: &str) -> Result<String<MAX_BANNER_LEN>, ConfigError> {
    let text = parse_string(value)?;
    String::try_from(text).map_err(|_| ConfigError::ValueTooLong)
}

/// Apply a parsed value to the matching config field
fn apply_value(
    section: Section,
    key: &str,
    value: &str,
    config: &mut RobotConfig,
) -> Result<(), ConfigError> {
    match section {
        Section::Oled => match key {
            "address" => config.oled.address = parse_address(value)?,
            "bus_errors" => config.oled.bus_errors = parse_bus_errors(value)?,
            _ => {}
        },
        Section::Led => match key {
            "count" => config.led.count = parse_led_count(value)?,
            "brightness" => config.led.brightness = parse_u8(value)?,
            _ => {}
        },
        Section::Sensor => match key {
            "adc_max" => config.sensor.adc_max = parse_adc_max(value)?,
            _ => {}
        },
        Section::Ultrasonic => match key {
            "timeout_us" => config.ultrasonic.timeout_us = parse_int(value)?,
            "us_per_cm" => config.ultrasonic.us_per_cm = parse_divisor(value)?,
            _ => {}
        },
        Section::Ir => match key {
            "timeout_us" => config.ir.timeout_us = parse_int(value)?,
            "scale_us" => config.ir.scale_us = parse_divisor(value)?,
            _ => {}
        },
        Section::Ui => match key {
            "refresh_ms" => config.ui.refresh_ms = parse_divisor(value)?,
            "banner" => config.ui.banner = parse_banner(value)?,
            "splash" => config.ui.splash = parse_bool(value)?,
            _ => {}
        },
        Section::Root => {} // Nothing lives at the root yet
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{OledConfig, DEFAULT_OLED_ADDRESS};
    use proptest::prelude::*;

    #[test]
    fn test_empty_input_gives_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, RobotConfig::default());
        assert_eq!(config.oled.address, DEFAULT_OLED_ADDRESS);
        assert_eq!(config.ultrasonic.us_per_cm, 58);
        assert_eq!(config.ir.scale_us, 1000);
        assert_eq!(config.ui.banner.as_str(), "DeskPi");
        assert_eq!(config.led.count, 4);
        assert_eq!(config.sensor.adc_max, 1023);
        assert!(config.ui.splash);
    }

    #[test]
    fn test_parse_full_config() {
        let config_str = r#"
# DeskPi configuration
[oled]
address = 0x3D
bus_errors = "propagate"   # surface NACKs

[led]
count = 8
brightness = 64

[sensor]
adc_max = 4095

[ultrasonic]
timeout_us = 30000
us_per_cm = 57

[ir]
timeout_us = 50000
scale_us = 500

[ui]
refresh_ms = 100
banner = "Rover #1"
splash = false
"#;

        let config = parse_config(config_str).unwrap();
        assert_eq!(
            config.oled,
            OledConfig {
                address: 0x3D,
                bus_errors: BusErrorPolicy::Propagate,
            }
        );
        assert_eq!(config.led.count, 8);
        assert_eq!(config.led.brightness, 64);
        assert_eq!(config.sensor.adc_max, 4095);
        assert_eq!(config.ultrasonic.timeout_us, 30_000);
        assert_eq!(config.ultrasonic.us_per_cm, 57);
        assert_eq!(config.ir.timeout_us, 50_000);
        assert_eq!(config.ir.scale_us, 500);
        assert_eq!(config.ui.refresh_ms, 100);
        assert_eq!(config.ui.banner.as_str(), "Rover #1");
        assert!(!config.ui.splash);
    }

    #[test]
    fn test_unknown_key_ignored() {
        let config = parse_config("[oled]\nflip = true\naddress = 60\n").unwrap();
        assert_eq!(config.oled.address, 0x3C);
    }

    #[test]
    fn test_unknown_section_rejected() {
        assert_eq!(
            parse_config("[stepper]\nmicrosteps = 16\n"),
            Err(ConfigError::InvalidSection)
        );
        assert_eq!(parse_config("[oled\n"), Err(ConfigError::InvalidSection));
    }

    #[test]
    fn test_invalid_values() {
        assert_eq!(
            parse_config("[oled]\naddress = 0x80\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[oled]\nbus_errors = \"retry\"\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[ultrasonic]\nus_per_cm = 0\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[ir]\ntimeout_us = soon\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[ui]\nbanner = unquoted\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[ui]\nsplash = yes\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[led]\ncount = 9\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[led]\nbrightness = 256\n"),
            Err(ConfigError::InvalidValue)
        );
        assert_eq!(
            parse_config("[sensor]\nadc_max = 0x10000\n"),
            Err(ConfigError::InvalidValue)
        );
    }

    #[test]
    fn test_banner_too_long() {
        assert_eq!(
            parse_config("[ui]\nbanner = \"0123456789012345678901\"\n"),
            Err(ConfigError::ValueTooLong)
        );
    }

    #[test]
    fn test_malformed_line() {
        assert_eq!(parse_config("[ui]\nbanner\n"), Err(ConfigError::InvalidLine));
    }

    #[test]
    fn test_strip_comment_respects_strings() {
        assert_eq!(strip_comment("\"a # b\" # note"), "\"a # b\"");
        assert_eq!(strip_comment("42 # note"), "42");
    }

    proptest! {
        #[test]
        fn prop_parser_never_panics(input in "\\PC*") {
            let _ = parse_config(&input);
        }

        #[test]
        fn prop_address_roundtrip(address in 0u8..=0x7F) {
            let text = std::format!("[oled]\naddress = {:#04x}\n", address);
            let config = parse_config(&text).unwrap();
            prop_assert_eq!(config.oled.address, address);
        }
    }
}
