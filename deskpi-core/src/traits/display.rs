//! Text display trait
//!
//! The robot's display is a line-oriented text surface: eight lines,
//! each written from the left edge. Writing a line never erases what a
//! longer previous string left behind, so [`TextDisplayExt`] offers
//! padded writes for screens that redraw in place.

use core::fmt::Write;

use heapless::String;

/// Characters that fit on one line (128 columns / 6-column glyphs)
pub const LINE_CHARS: usize = 21;

/// Line-oriented text display
pub trait TextDisplay {
    /// Error type for display operations
    type Error;

    /// Bring the display up; a no-op once it is up
    fn init(&mut self) -> Result<(), Self::Error>;

    /// Blank the whole display
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Write `text` on `line`, starting at the left edge
    ///
    /// Brings the display up first if needed.
    fn show_text(&mut self, text: &str, line: u8) -> Result<(), Self::Error>;

    /// Check if the display has been brought up
    fn is_initialized(&self) -> bool;
}

/// Helpers for drawing status screens
pub trait TextDisplayExt: TextDisplay {
    /// Write `text` padded with spaces to a full line
    ///
    /// Text longer than a line is cut at [`LINE_CHARS`] characters.
    fn show_line(&mut self, text: &str, line: u8) -> Result<(), Self::Error> {
        let mut buf: String<LINE_CHARS> = String::new();
        for ch in text.chars() {
            if buf.push(ch).is_err() {
                break;
            }
        }
        while buf.push(' ').is_ok() {}
        self.show_text(&buf, line)
    }

    /// Draw a label-value pair: `"Label:     Value"`
    ///
    /// The label is left-aligned, the value right-aligned; the line is
    /// always fully overwritten. Each byte of a non-ASCII character is
    /// drawn as a space.
    fn show_field(&mut self, line: u8, label: &str, value: &str) -> Result<(), Self::Error> {
        let mut buf = [b' '; LINE_CHARS];

        let label_bytes = label.as_bytes();
        let label_len = label_bytes.len().min(10);
        buf[..label_len].copy_from_slice(&label_bytes[..label_len]);
        buf[label_len] = b':';

        let value_bytes = value.as_bytes();
        let value_len = value_bytes.len().min(LINE_CHARS - label_len - 1);
        let value_start = LINE_CHARS - value_len;
        buf[value_start..].copy_from_slice(&value_bytes[..value_len]);

        // Byte cuts may split a character; the font has no glyphs past ASCII
        for b in buf.iter_mut() {
            if !b.is_ascii() {
                *b = b' ';
            }
        }
        let text = core::str::from_utf8(&buf).unwrap_or("");
        self.show_text(text, line)
    }

    /// Draw a label with a numeric value
    fn show_number(&mut self, line: u8, label: &str, value: u32) -> Result<(), Self::Error> {
        let mut digits: String<10> = String::new();
        let _ = write!(digits, "{}", value);
        self.show_field(line, label, &digits)
    }
}

// Blanket implementation for all TextDisplay types
impl<T: TextDisplay> TextDisplayExt for T {}
