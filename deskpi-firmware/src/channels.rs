//! Inter-task communication
//!
//! Uses embassy-sync primitives; the control loop is the only producer.

use deskpi_core::config::MAX_LEDS;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::AtomicU8;
use smart_leds::RGB8;

/// Latest LED strip contents, before brightness scaling
pub static LED_FRAME: Signal<CriticalSectionRawMutex, [RGB8; MAX_LEDS]> = Signal::new();

/// LED brightness, 0-255 (set from the volume knob)
pub static LED_BRIGHTNESS: AtomicU8 = AtomicU8::new(255);
