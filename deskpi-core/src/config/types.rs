//! Configuration type definitions

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum banner length (one full OLED line of 6-pixel glyphs)
pub const MAX_BANNER_LEN: usize = 21;

/// Default 7-bit bus address of the SSD1306
pub const DEFAULT_OLED_ADDRESS: u8 = 0x3C;

/// Largest LED strip the firmware buffers
pub const MAX_LEDS: usize = 8;

/// What the OLED driver does when a bus transaction fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BusErrorPolicy {
    /// Count and log the failure, keep going, report success
    #[default]
    BestEffort,
    /// Abort the current operation and return the bus error
    Propagate,
}

/// OLED display configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct OledConfig {
    /// 7-bit bus address
    pub address: u8,
    /// Bus failure handling
    pub bus_errors: BusErrorPolicy,
}

impl Default for OledConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_OLED_ADDRESS,
            bus_errors: BusErrorPolicy::BestEffort,
        }
    }
}

/// RGB LED strip configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LedConfig {
    /// Number of pixels on the strip (1..=MAX_LEDS)
    pub count: u8,
    /// Global brightness, 255 = full
    pub brightness: u8,
}

impl Default for LedConfig {
    fn default() -> Self {
        Self {
            count: 4,
            brightness: 255,
        }
    }
}

/// Analog sensor configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SensorConfig {
    /// Full-scale reading; larger readings are clamped to it
    pub adc_max: u16,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self { adc_max: 1023 }
    }
}

/// Ultrasonic ranger configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UltrasonicConfig {
    /// Echo timeout in µs (25 ms is roughly 4 m of range)
    pub timeout_us: u32,
    /// Round-trip echo time per centimetre of distance, in µs
    pub us_per_cm: u32,
}

impl Default for UltrasonicConfig {
    fn default() -> Self {
        Self {
            timeout_us: 25_000,
            us_per_cm: 58,
        }
    }
}

/// IR receiver configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IrConfig {
    /// Pulse timeout in µs
    pub timeout_us: u32,
    /// Divisor applied to the pulse width to form the raw code
    pub scale_us: u32,
}

impl Default for IrConfig {
    fn default() -> Self {
        Self {
            timeout_us: 100_000,
            scale_us: 1000,
        }
    }
}

/// Status screen configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct UiConfig {
    /// Status screen refresh period in ms
    pub refresh_ms: u32,
    /// Text shown on the top line of the display
    pub banner: String<MAX_BANNER_LEN>,
    /// Show the banner alone for a moment after boot
    pub splash: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        let mut banner = String::new();
        let _ = banner.push_str("DeskPi");
        Self {
            refresh_ms: 200,
            banner,
            splash: true,
        }
    }
}

/// Complete robot configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RobotConfig {
    /// OLED display
    pub oled: OledConfig,
    /// LED strip
    pub led: LedConfig,
    /// Analog sensors
    pub sensor: SensorConfig,
    /// Ultrasonic ranger
    pub ultrasonic: UltrasonicConfig,
    /// IR receiver
    pub ir: IrConfig,
    /// Status screen
    pub ui: UiConfig,
}

impl RobotConfig {
    /// Create a configuration with every field at its default
    pub fn new() -> Self {
        Self::default()
    }
}
