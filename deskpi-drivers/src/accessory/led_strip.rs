//! Addressable RGB LED strip
//!
//! Wraps an [`RgbStrip`] with the robot's access pattern: every pixel
//! update is flushed immediately, bracketed by the LED enable line. The
//! enable line is shared with the board's LED matrix and is held low
//! while the strip is being written.

use deskpi_hal::{OutputPin, RgbStrip};
use smart_leds::RGB8;

/// Pack a color as `0xRRGGBB`
pub const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

/// Split a `0xRRGGBB` color; bits above 23 are ignored
pub const fn unpack(color: u32) -> RGB8 {
    RGB8 {
        r: (color >> 16) as u8,
        g: (color >> 8) as u8,
        b: color as u8,
    }
}

/// LED strip driver
pub struct LedStrip<S, E> {
    strip: S,
    enable: E,
    initialized: bool,
}

impl<S: RgbStrip, E: OutputPin> LedStrip<S, E> {
    /// Wrap a strip. Nothing is written until first use.
    pub fn new(strip: S, enable: E) -> Self {
        Self {
            strip,
            enable,
            initialized: false,
        }
    }

    /// Number of pixels
    pub fn len(&self) -> usize {
        self.strip.len()
    }

    /// Check if the strip has no pixels
    pub fn is_empty(&self) -> bool {
        self.strip.is_empty()
    }

    /// Check whether the strip has been blanked after power-up
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Blank the strip once after power-up
    pub fn init(&mut self) {
        if self.initialized {
            return;
        }
        self.strip.clear();
        self.strip.show();
        self.initialized = true;
    }

    /// Set pixel `index` to a `0xRRGGBB` color and show it
    pub fn set_color(&mut self, index: usize, color: u32) {
        self.set_pixel(index, unpack(color));
    }

    /// Set pixel `index` from separate channels and show it
    pub fn set_rgb(&mut self, index: usize, r: u8, g: u8, b: u8) {
        self.set_pixel(index, RGB8 { r, g, b });
    }

    /// Set one pixel and show it
    ///
    /// Brings the strip up first if needed. An index past the end of the
    /// strip is ignored.
    pub fn set_pixel(&mut self, index: usize, color: RGB8) {
        self.init();

        if index >= self.strip.len() {
            #[cfg(feature = "defmt")]
            defmt::trace!("LED index {} out of range", index);
            return;
        }

        self.enable.set_low();
        self.strip.set_pixel(index, color);
        self.strip.show();
        self.enable.set_high();
    }

    /// Turn every pixel off. Does nothing before the strip is brought up.
    pub fn clear(&mut self) {
        if !self.initialized {
            return;
        }
        self.strip.clear();
        self.strip.show();
    }
}
