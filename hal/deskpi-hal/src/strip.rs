//! Addressable RGB LED strip abstraction
//!
//! Pixels are staged with [`RgbStrip::set_pixel`] and only become visible
//! on [`RgbStrip::show`], matching how WS2812-style strips latch a whole
//! frame at once.

use smart_leds::RGB8;

/// Addressable RGB strip with a fixed number of pixels
pub trait RgbStrip {
    /// Number of pixels on the strip
    fn len(&self) -> usize;

    /// Whether the strip has no pixels
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stage a colour for one pixel
    ///
    /// Out-of-range indices are ignored.
    fn set_pixel(&mut self, index: usize, color: RGB8);

    /// Stage black for every pixel
    fn clear(&mut self) {
        for i in 0..self.len() {
            self.set_pixel(i, RGB8::default());
        }
    }

    /// Push the staged frame out to the LEDs
    fn show(&mut self);
}
