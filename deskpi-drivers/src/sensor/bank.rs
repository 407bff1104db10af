//! Robot sensor bank
//!
//! Five analog inputs (volume knob, two light sensors, two line sensors)
//! and the two push buttons. Reads are raw and uncalibrated; the only
//! processing is clamping to the configured full scale and the grey
//! percentage mapping.

use deskpi_core::config::SensorConfig;
use deskpi_hal::{AnalogInput, InputPin};

/// The analog inputs, one per sensor
pub struct AnalogChannels<A> {
    pub volume: A,
    pub left_optical: A,
    pub right_optical: A,
    pub left_grey: A,
    pub right_grey: A,
}

/// One reading of every sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorReadings {
    pub volume: u16,
    pub left_optical: u16,
    pub right_optical: u16,
    pub left_grey: u16,
    pub right_grey: u16,
    pub left_button: bool,
    pub right_button: bool,
}

/// Sensor bank
///
/// Buttons are wired active-low (pressed pulls the pin to ground).
pub struct SensorBank<A, B> {
    analog: AnalogChannels<A>,
    left_button: B,
    right_button: B,
    adc_max: u16,
}

impl<A: AnalogInput, B: InputPin> SensorBank<A, B> {
    pub fn new(
        analog: AnalogChannels<A>,
        left_button: B,
        right_button: B,
        config: SensorConfig,
    ) -> Self {
        Self {
            analog,
            left_button,
            right_button,
            adc_max: config.adc_max.max(1),
        }
    }

    fn clamp(&self, raw: u16) -> u16 {
        raw.min(self.adc_max)
    }

    /// Map a reading to 0-100 %, truncating
    fn percent(&self, value: u16) -> u8 {
        (value as u32 * 100 / self.adc_max as u32) as u8
    }

    /// Volume knob
    pub fn volume(&mut self) -> u16 {
        let raw = self.analog.volume.read();
        self.clamp(raw)
    }

    pub fn left_optical(&mut self) -> u16 {
        let raw = self.analog.left_optical.read();
        self.clamp(raw)
    }

    pub fn right_optical(&mut self) -> u16 {
        let raw = self.analog.right_optical.read();
        self.clamp(raw)
    }

    pub fn left_grey(&mut self) -> u16 {
        let raw = self.analog.left_grey.read();
        self.clamp(raw)
    }

    pub fn right_grey(&mut self) -> u16 {
        let raw = self.analog.right_grey.read();
        self.clamp(raw)
    }

    /// Left line sensor as 0-100 %
    pub fn left_grey_percent(&mut self) -> u8 {
        let value = self.left_grey();
        self.percent(value)
    }

    /// Right line sensor as 0-100 %
    pub fn right_grey_percent(&mut self) -> u8 {
        let value = self.right_grey();
        self.percent(value)
    }

    /// True while the left button is held
    pub fn left_button(&self) -> bool {
        self.left_button.is_low()
    }

    /// True while the right button is held
    pub fn right_button(&self) -> bool {
        self.right_button.is_low()
    }

    /// Read everything once
    pub fn read_all(&mut self) -> SensorReadings {
        SensorReadings {
            volume: self.volume(),
            left_optical: self.left_optical(),
            right_optical: self.right_optical(),
            left_grey: self.left_grey(),
            right_grey: self.right_grey(),
            left_button: self.left_button(),
            right_button: self.right_button(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::{MockAdc, MockInput};
    use proptest::prelude::*;

    fn bank(values: [u16; 5]) -> SensorBank<MockAdc, MockInput> {
        let [volume, left_optical, right_optical, left_grey, right_grey] = values;
        SensorBank::new(
            AnalogChannels {
                volume: MockAdc::new(volume),
                left_optical: MockAdc::new(left_optical),
                right_optical: MockAdc::new(right_optical),
                left_grey: MockAdc::new(left_grey),
                right_grey: MockAdc::new(right_grey),
            },
            MockInput::new(true),
            MockInput::new(true),
            SensorConfig::default(),
        )
    }

    #[test]
    fn test_channels_routed() {
        let mut sensors = bank([1, 2, 3, 4, 5]);

        assert_eq!(sensors.volume(), 1);
        assert_eq!(sensors.left_optical(), 2);
        assert_eq!(sensors.right_optical(), 3);
        assert_eq!(sensors.left_grey(), 4);
        assert_eq!(sensors.right_grey(), 5);
        assert_eq!(sensors.analog.volume.reads, 1);
    }

    #[test]
    fn test_clamped_to_full_scale() {
        let mut sensors = bank([4095, 1023, 1024, 0, 2000]);

        assert_eq!(sensors.volume(), 1023);
        assert_eq!(sensors.left_optical(), 1023);
        assert_eq!(sensors.right_optical(), 1023);
        assert_eq!(sensors.right_grey_percent(), 100);
    }

    #[test]
    fn test_grey_percent() {
        let mut sensors = bank([0, 0, 0, 512, 1023]);

        // 512 * 100 / 1023 = 50.04
        assert_eq!(sensors.left_grey_percent(), 50);
        assert_eq!(sensors.right_grey_percent(), 100);

        sensors.analog.left_grey.value = 0;
        assert_eq!(sensors.left_grey_percent(), 0);
        sensors.analog.left_grey.value = 10;
        assert_eq!(sensors.left_grey_percent(), 0);
    }

    #[test]
    fn test_buttons_active_low() {
        let mut sensors = bank([0; 5]);
        assert!(!sensors.left_button());
        assert!(!sensors.right_button());

        sensors.left_button.high = false;
        assert!(sensors.left_button());
        assert!(!sensors.right_button());

        sensors.right_button.high = false;
        assert!(sensors.right_button());
    }

    #[test]
    fn test_read_all() {
        let mut sensors = bank([100, 200, 300, 400, 500]);
        sensors.right_button.high = false;

        assert_eq!(
            sensors.read_all(),
            SensorReadings {
                volume: 100,
                left_optical: 200,
                right_optical: 300,
                left_grey: 400,
                right_grey: 500,
                left_button: false,
                right_button: true,
            }
        );
    }

    #[test]
    fn test_custom_full_scale() {
        let analog = AnalogChannels {
            volume: MockAdc::new(5000),
            left_optical: MockAdc::new(0),
            right_optical: MockAdc::new(0),
            left_grey: MockAdc::new(2048),
            right_grey: MockAdc::new(0),
        };
        let mut sensors = SensorBank::new(
            analog,
            MockInput::new(true),
            MockInput::new(true),
            SensorConfig { adc_max: 4095 },
        );

        assert_eq!(sensors.volume(), 4095);
        assert_eq!(sensors.left_grey_percent(), 50);
    }

    proptest! {
        #[test]
        fn prop_percent_in_range(raw in any::<u16>()) {
            let mut sensors = bank([0, 0, 0, raw, 0]);
            let percent = sensors.left_grey_percent();
            prop_assert!(percent <= 100);
        }
    }
}
