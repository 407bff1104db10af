//! LED strip output task
//!
//! The control loop writes pixels through [`FrameStrip`], which only
//! publishes the frame. This task owns the PIO state machine, applies the
//! brightness and pushes the frame out.

use defmt::*;
use deskpi_core::config::MAX_LEDS;
use deskpi_hal::RgbStrip;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;
use embassy_time::{with_timeout, Duration};
use portable_atomic::Ordering;
use smart_leds::{brightness, RGB8};

use crate::channels::{LED_BRIGHTNESS, LED_FRAME};

/// How often brightness changes are picked up without a new frame
const REFRESH: Duration = Duration::from_millis(100);

/// WS2812 driver on PIO0, state machine 0
pub type Ws2812 = PioWs2812<'static, PIO0, 0, MAX_LEDS>;

/// Pixel buffer whose `show` hands the frame to [`led_strip_task`]
pub struct FrameStrip {
    pixels: [RGB8; MAX_LEDS],
    len: usize,
}

impl FrameStrip {
    pub fn new(len: usize) -> Self {
        Self {
            pixels: [RGB8::default(); MAX_LEDS],
            len: len.min(MAX_LEDS),
        }
    }
}

impl RgbStrip for FrameStrip {
    fn len(&self) -> usize {
        self.len
    }

    fn set_pixel(&mut self, index: usize, color: RGB8) {
        if index < self.len {
            self.pixels[index] = color;
        }
    }

    fn show(&mut self) {
        LED_FRAME.signal(self.pixels);
    }
}

/// Combine the configured ceiling with the live level
fn effective_brightness(max: u8, level: u8) -> u8 {
    (max as u16 * level as u16 / 255) as u8
}

/// LED strip task
///
/// Rewrites the strip when a new frame arrives or the brightness moves.
#[embassy_executor::task]
pub async fn led_strip_task(mut ws2812: Ws2812, max_brightness: u8) {
    info!("LED strip task started");

    let mut frame = [RGB8::default(); MAX_LEDS];
    let mut written: Option<([RGB8; MAX_LEDS], u8)> = None;

    loop {
        if let Ok(next) = with_timeout(REFRESH, LED_FRAME.wait()).await {
            frame = next;
        }

        let level = effective_brightness(max_brightness, LED_BRIGHTNESS.load(Ordering::Relaxed));
        if written == Some((frame, level)) {
            continue;
        }

        let mut out = [RGB8::default(); MAX_LEDS];
        for (dst, src) in out.iter_mut().zip(brightness(frame.iter().copied(), level)) {
            *dst = src;
        }
        ws2812.write(&out).await;

        trace!("LED frame written at brightness {}", level);
        written = Some((frame, level));
    }
}
