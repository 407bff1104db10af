//! ADC channel management
//!
//! RP2040 has a single 12-bit ADC with 5 channels:
//! - ADC0: GPIO26
//! - ADC1: GPIO27
//! - ADC2: GPIO28
//! - ADC3: GPIO29
//! - ADC4: Internal temperature sensor
//!
//! Only ADC0-ADC2 are broken out on a Pico, two short of the robot's
//! five analog sensors. Volume and both light sensors therefore go
//! through a 4-channel analog multiplexer (CD4052 style) on ADC2, with
//! two select lines choosing the input.

use core::cell::RefCell;

use deskpi_hal::{adc::scale_to_10bit, AnalogInput};
use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::Output;
use embassy_time::{block_for, Duration};

/// Native ADC resolution
const ADC_BITS: u8 = 12;

/// Multiplexer settling time after the select lines change
const MUX_SETTLE_US: u64 = 10;

/// ADC channel identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcChannel {
    /// ADC0 on GPIO26
    Adc0,
    /// ADC1 on GPIO27
    Adc1,
    /// ADC2 on GPIO28
    Adc2,
}

impl AdcChannel {
    /// GPIO pin for this ADC channel
    pub const fn gpio(self) -> u8 {
        match self {
            AdcChannel::Adc0 => 26,
            AdcChannel::Adc1 => 27,
            AdcChannel::Adc2 => 28,
        }
    }
}

/// Which sensor to sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AnalogSource {
    Volume,
    LeftOptical,
    RightOptical,
    LeftGrey,
    RightGrey,
}

impl AnalogSource {
    /// ADC channel and, for multiplexed sensors, the mux input
    pub const fn route(self) -> (AdcChannel, Option<u8>) {
        match self {
            AnalogSource::LeftGrey => (AdcChannel::Adc0, None),
            AnalogSource::RightGrey => (AdcChannel::Adc1, None),
            AnalogSource::Volume => (AdcChannel::Adc2, Some(0)),
            AnalogSource::LeftOptical => (AdcChannel::Adc2, Some(1)),
            AnalogSource::RightOptical => (AdcChannel::Adc2, Some(2)),
        }
    }
}

/// The ADC, its three pin channels and the multiplexer select lines
pub struct AnalogBank {
    adc: Adc<'static, Blocking>,
    channels: [Channel<'static>; 3],
    /// Select lines, least significant first
    select: [Output<'static>; 2],
    /// Mux input currently selected
    selected: Option<u8>,
}

impl AnalogBank {
    pub fn new(
        adc: Adc<'static, Blocking>,
        channels: [Channel<'static>; 3],
        select: [Output<'static>; 2],
    ) -> Self {
        Self {
            adc,
            channels,
            select,
            selected: None,
        }
    }

    fn select(&mut self, input: u8) {
        if self.selected == Some(input) {
            return;
        }
        for (bit, line) in self.select.iter_mut().enumerate() {
            line.set_level((input & (1 << bit) != 0).into());
        }
        self.selected = Some(input);
        block_for(Duration::from_micros(MUX_SETTLE_US));
    }

    /// Sample one sensor, scaled to 0-1023
    ///
    /// A failed conversion reads as 0.
    pub fn read(&mut self, source: AnalogSource) -> u16 {
        let (channel, input) = source.route();
        if let Some(input) = input {
            self.select(input);
        }

        match self.adc.blocking_read(&mut self.channels[channel as usize]) {
            Ok(raw) => scale_to_10bit(raw, ADC_BITS),
            Err(_) => {
                #[cfg(feature = "defmt")]
                defmt::warn!("ADC read failed on {}", source);
                0
            }
        }
    }
}

/// One sensor's view of a shared [`AnalogBank`]
pub struct AdcInput {
    bank: &'static RefCell<AnalogBank>,
    source: AnalogSource,
}

impl AdcInput {
    pub fn new(bank: &'static RefCell<AnalogBank>, source: AnalogSource) -> Self {
        Self { bank, source }
    }
}

impl AnalogInput for AdcInput {
    fn read(&mut self) -> u16 {
        self.bank.borrow_mut().read(self.source)
    }
}
