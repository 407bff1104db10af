//! Test doubles for the hardware traits
//!
//! Mocks that need to be inspected after a driver has taken ownership of
//! them share their state through an `Rc`. A [`Trace`] can be shared by
//! several mocks to check the ordering of pin, delay and strip activity.

use core::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use deskpi_hal::{AnalogInput, I2cBus, InputPin, OutputPin, PulseLevel, PulseTimer, RgbStrip};
use embedded_hal::delay::DelayNs;
use smart_leds::RGB8;

/// One successful two-byte bus write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusWrite {
    pub address: u8,
    pub control: u8,
    pub byte: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockBusError {
    Nack,
}

/// Which bus attempts fail, counted from the last [`BusLog::reset`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailMode {
    Never,
    Always,
    At(usize),
}

struct BusState {
    writes: Vec<BusWrite>,
    attempts: usize,
    fail: FailMode,
}

/// Shared view of everything a [`MockBus`] saw
#[derive(Clone)]
pub struct BusLog(Rc<RefCell<BusState>>);

impl BusLog {
    pub fn writes(&self) -> Vec<BusWrite> {
        self.0.borrow().writes.clone()
    }

    pub fn attempts(&self) -> usize {
        self.0.borrow().attempts
    }

    /// Bytes of all successful command writes, in order
    pub fn commands(&self) -> Vec<u8> {
        self.bytes_with_control(0x00)
    }

    /// Bytes of all successful data writes, in order
    pub fn data(&self) -> Vec<u8> {
        self.bytes_with_control(0x40)
    }

    pub fn set_fail(&self, fail: FailMode) {
        self.0.borrow_mut().fail = fail;
    }

    /// Forget recorded writes and restart the attempt counter
    pub fn reset(&self) {
        let mut state = self.0.borrow_mut();
        state.writes.clear();
        state.attempts = 0;
    }

    fn bytes_with_control(&self, control: u8) -> Vec<u8> {
        self.0
            .borrow()
            .writes
            .iter()
            .filter(|w| w.control == control)
            .map(|w| w.byte)
            .collect()
    }
}

/// Recording I2C bus
pub struct MockBus {
    log: BusLog,
}

impl MockBus {
    pub fn new() -> (Self, BusLog) {
        let log = BusLog(Rc::new(RefCell::new(BusState {
            writes: Vec::new(),
            attempts: 0,
            fail: FailMode::Never,
        })));
        (Self { log: log.clone() }, log)
    }

    /// A bus on which every write fails
    pub fn failing() -> (Self, BusLog) {
        let (bus, log) = Self::new();
        log.set_fail(FailMode::Always);
        (bus, log)
    }
}

impl I2cBus for MockBus {
    type Error = MockBusError;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        let mut state = self.log.0.borrow_mut();
        let attempt = state.attempts;
        state.attempts += 1;

        let fail = match state.fail {
            FailMode::Never => false,
            FailMode::Always => true,
            FailMode::At(n) => n == attempt,
        };
        if fail {
            return Err(MockBusError::Nack);
        }

        assert_eq!(data.len(), 2, "SSD1306 writes are control + one byte");
        state.writes.push(BusWrite {
            address,
            control: data[0],
            byte: data[1],
        });
        Ok(())
    }
}

/// Something observable that happened on a mock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    High(&'static str),
    Low(&'static str),
    DelayUs(u32),
    Pulse(PulseLevel, u32),
    Show,
}

/// Ordered event log shared between mocks
#[derive(Clone, Default)]
pub struct Trace(Rc<RefCell<Vec<Event>>>);

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.borrow().clone()
    }

    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().push(event);
    }
}

fn record(trace: &Option<Trace>, event: Event) {
    if let Some(trace) = trace {
        trace.push(event);
    }
}

/// Output pin that remembers its level
pub struct MockPin {
    name: &'static str,
    high: bool,
    trace: Option<Trace>,
}

impl MockPin {
    /// An untraced pin, starting high so tests can see it driven low
    pub fn new() -> Self {
        Self {
            name: "pin",
            high: true,
            trace: None,
        }
    }

    pub fn traced(name: &'static str, trace: &Trace) -> Self {
        Self {
            name,
            high: true,
            trace: Some(trace.clone()),
        }
    }
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
        record(&self.trace, Event::High(self.name));
    }

    fn set_low(&mut self) {
        self.high = false;
        record(&self.trace, Event::Low(self.name));
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// Input pin with a settable level
pub struct MockInput {
    pub high: bool,
}

impl MockInput {
    pub fn new(high: bool) -> Self {
        Self { high }
    }
}

impl InputPin for MockInput {
    fn is_high(&self) -> bool {
        self.high
    }
}

/// Analog channel returning a fixed reading
pub struct MockAdc {
    pub value: u16,
    pub reads: usize,
}

impl MockAdc {
    pub fn new(value: u16) -> Self {
        Self { value, reads: 0 }
    }
}

impl AnalogInput for MockAdc {
    fn read(&mut self) -> u16 {
        self.reads += 1;
        self.value
    }
}

/// Pulse timer returning a fixed width
pub struct MockPulse {
    pub width: u32,
    pub calls: Vec<(PulseLevel, u32)>,
    trace: Option<Trace>,
}

impl MockPulse {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            calls: Vec::new(),
            trace: None,
        }
    }

    pub fn traced(width: u32, trace: &Trace) -> Self {
        Self {
            trace: Some(trace.clone()),
            ..Self::new(width)
        }
    }
}

impl PulseTimer for MockPulse {
    fn pulse_in(&mut self, level: PulseLevel, timeout_us: u32) -> u32 {
        self.calls.push((level, timeout_us));
        record(&self.trace, Event::Pulse(level, timeout_us));
        if self.width > timeout_us {
            0
        } else {
            self.width
        }
    }
}

/// Delay that returns immediately and logs what was asked
pub struct MockDelay {
    trace: Option<Trace>,
}

impl MockDelay {
    pub fn new() -> Self {
        Self { trace: None }
    }

    pub fn traced(trace: &Trace) -> Self {
        Self {
            trace: Some(trace.clone()),
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        record(&self.trace, Event::DelayUs(ns / 1_000));
    }

    fn delay_us(&mut self, us: u32) {
        record(&self.trace, Event::DelayUs(us));
    }
}

/// In-memory LED strip
pub struct MockStrip {
    pub pixels: Vec<RGB8>,
    /// Pixel contents at each `show`
    pub shown: Vec<Vec<RGB8>>,
    trace: Option<Trace>,
}

impl MockStrip {
    pub fn new(len: usize) -> Self {
        Self {
            pixels: std::vec![RGB8::default(); len],
            shown: Vec::new(),
            trace: None,
        }
    }

    pub fn traced(len: usize, trace: &Trace) -> Self {
        Self {
            trace: Some(trace.clone()),
            ..Self::new(len)
        }
    }
}

impl RgbStrip for MockStrip {
    fn len(&self) -> usize {
        self.pixels.len()
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        if let Some(p) = self.pixels.get_mut(index) {
            *p = color;
        }
    }

    fn show(&mut self) {
        self.shown.push(self.pixels.clone());
        record(&self.trace, Event::Show);
    }
}
