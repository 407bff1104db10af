//! SSD1306 OLED text driver
//!
//! Drives a 128x64 SSD1306 panel over the two-wire bus as eight lines of
//! text. The driver keeps no frame buffer: text is streamed straight into
//! the controller's page memory one column byte at a time.
//!
//! - [`command::CommandChannel`] frames single command/data bytes
//! - [`font`] holds the 5x7 glyph table
//! - [`ssd1306::Ssd1306`] owns the bring-up state and renders text

pub mod command;
pub mod font;
pub mod ssd1306;

pub use command::CommandChannel;
pub use ssd1306::{DisplayState, Ssd1306, INIT_SEQUENCE};

/// Display width in columns
pub const WIDTH: usize = 128;

/// Display height in pixels
pub const HEIGHT: usize = 64;

/// Number of 8-pixel pages
pub const PAGES: usize = HEIGHT / 8;

/// SSD1306 commands
pub mod cmd {
    pub const DISPLAY_OFF: u8 = 0xAE;
    pub const DISPLAY_ON: u8 = 0xAF;
    pub const SET_MUX_RATIO: u8 = 0xA8;
    pub const SET_DISPLAY_OFFSET: u8 = 0xD3;
    pub const SET_START_LINE: u8 = 0x40;
    pub const SET_SEG_REMAP: u8 = 0xA1;
    pub const SET_COM_SCAN_DEC: u8 = 0xC8;
    pub const SET_COM_PINS: u8 = 0xDA;
    pub const SET_CONTRAST: u8 = 0x81;
    pub const RESUME_FROM_RAM: u8 = 0xA4;
    pub const SET_NORMAL: u8 = 0xA6;
    pub const SET_INVERSE: u8 = 0xA7;
    pub const SET_CLOCK_DIV: u8 = 0xD5;
    pub const SET_CHARGE_PUMP: u8 = 0x8D;
    pub const SET_PAGE_ADDR: u8 = 0xB0;
    pub const SET_LOW_COLUMN: u8 = 0x00;
    pub const SET_HIGH_COLUMN: u8 = 0x10;
}

/// Errors from OLED operations
///
/// Only produced under [`BusErrorPolicy::Propagate`]; in best-effort mode
/// bus failures are counted instead.
///
/// [`BusErrorPolicy::Propagate`]: deskpi_core::config::BusErrorPolicy::Propagate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OledError<E> {
    /// A bus transaction failed
    Bus(E),
}
