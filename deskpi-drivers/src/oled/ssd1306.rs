//! SSD1306 display controller
//!
//! [`Ssd1306`] owns the bring-up state of the panel and renders text into
//! its page memory. Lines map 1:1 to the controller's 8-pixel pages.
//!
//! # Lifecycle
//!
//! 1. [`Ssd1306::new()`] - no bus traffic.
//! 2. [`Ssd1306::init()`] - power-on sequence plus a full clear. Optional:
//!    [`Ssd1306::show_text()`] brings the panel up on first use.
//! 3. [`Ssd1306::show_text()`] / [`Ssd1306::clear()`] as needed.
//!
//! ```ignore
//! let mut oled = Ssd1306::new(i2c, OledConfig::default());
//! oled.show_text("Hello", 0)?;
//! ```
//!
//! # Bus failures
//!
//! Under [`BusErrorPolicy::BestEffort`] a failed transaction is counted
//! and skipped and the operation carries on, so the panel may end up
//! partially written. Under [`BusErrorPolicy::Propagate`] the first
//! failure aborts the operation; a failed bring-up leaves the driver
//! uninitialized and the next `show_text` starts it over.

use deskpi_core::config::{BusErrorPolicy, OledConfig};
use deskpi_core::traits::TextDisplay;
use deskpi_hal::I2cBus;

use super::command::CommandChannel;
use super::font::{self, GLYPH_SPACING, GLYPH_WIDTH};
use super::{cmd, OledError, PAGES, WIDTH};

/// Power-on command sequence, sent in this exact order
pub const INIT_SEQUENCE: [u8; 19] = [
    cmd::DISPLAY_OFF,
    cmd::SET_MUX_RATIO,
    0x3F, // 64 lines
    cmd::SET_DISPLAY_OFFSET,
    0x00, // No offset
    cmd::SET_START_LINE,   // Start line 0
    cmd::SET_SEG_REMAP,    // Flip horizontally
    cmd::SET_COM_SCAN_DEC, // Flip vertically
    cmd::SET_COM_PINS,
    0x12, // Alternative COM config
    cmd::SET_CONTRAST,
    0x7F, // Mid contrast
    cmd::RESUME_FROM_RAM,
    cmd::SET_NORMAL,
    cmd::SET_CLOCK_DIV,
    0x80, // Default clock
    cmd::SET_CHARGE_PUMP,
    0x14, // Enable charge pump
    cmd::DISPLAY_ON,
];

/// Bring-up state of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayState {
    /// Power-on sequence not yet sent
    #[default]
    Uninitialized,
    /// Panel configured and cleared
    Initialized,
}

/// SSD1306 128x64 text driver
pub struct Ssd1306<I2C> {
    channel: CommandChannel<I2C>,
    state: DisplayState,
    policy: BusErrorPolicy,
    /// Transactions dropped under the best-effort policy
    dropped: u32,
}

impl<I2C: I2cBus> Ssd1306<I2C> {
    /// Create an uninitialized driver. No bus traffic is generated.
    pub fn new(i2c: I2C, config: OledConfig) -> Self {
        Self {
            channel: CommandChannel::new(i2c, config.address),
            state: DisplayState::Uninitialized,
            policy: config.bus_errors,
            dropped: 0,
        }
    }

    /// Current bring-up state
    pub fn state(&self) -> DisplayState {
        self.state
    }

    /// Check whether the panel has been brought up
    pub fn is_initialized(&self) -> bool {
        self.state == DisplayState::Initialized
    }

    /// Number of failed transactions skipped under the best-effort policy
    pub fn dropped_transactions(&self) -> u32 {
        self.dropped
    }

    /// Bring the panel up
    ///
    /// Sends [`INIT_SEQUENCE`] and clears all of display RAM. Does nothing
    /// if the panel is already up.
    pub fn init(&mut self) -> Result<(), OledError<I2C::Error>> {
        if self.is_initialized() {
            return Ok(());
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("SSD1306 init at {=u8:#x}", self.channel.address());

        for &c in INIT_SEQUENCE.iter() {
            self.command(c)?;
        }
        self.clear()?;

        self.state = DisplayState::Initialized;

        #[cfg(feature = "defmt")]
        defmt::info!("SSD1306 initialized ({} dropped)", self.dropped);

        Ok(())
    }

    /// Zero every column of every page
    ///
    /// Always the full 8x128 grid: 8 page selects and 1024 data writes.
    /// Does not bring the panel up.
    pub fn clear(&mut self) -> Result<(), OledError<I2C::Error>> {
        for page in 0..PAGES as u8 {
            self.set_page(page)?;
            for _ in 0..WIDTH {
                self.data(0x00)?;
            }
        }
        Ok(())
    }

    /// Point the write cursor at column 0 of `page`
    ///
    /// `page` is not range checked: values past 7 produce whatever
    /// addressing the controller makes of `0xB0 + page`.
    pub fn set_page(&mut self, page: u8) -> Result<(), OledError<I2C::Error>> {
        self.command(cmd::SET_PAGE_ADDR.wrapping_add(page))?;
        self.command(cmd::SET_LOW_COLUMN)?;
        self.command(cmd::SET_HIGH_COLUMN)
    }

    /// Render `text` on `line`, starting at column 0
    ///
    /// Brings the panel up first if needed. Each character becomes five
    /// glyph columns and one blank column; characters outside printable
    /// ASCII are drawn as spaces. Characters are UTF-16 code units, so
    /// anything outside the Basic Multilingual Plane draws two spaces.
    /// Nothing limits the length, and columns past the end of the text
    /// keep whatever was there before.
    pub fn show_text(&mut self, text: &str, line: u8) -> Result<(), OledError<I2C::Error>> {
        if !self.is_initialized() {
            self.init()?;
        }

        self.set_page(line)?;
        for unit in text.encode_utf16() {
            self.draw_glyph(font::glyph(u32::from(unit)))?;
        }
        Ok(())
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.channel.release()
    }

    fn draw_glyph(&mut self, glyph: &[u8; GLYPH_WIDTH]) -> Result<(), OledError<I2C::Error>> {
        for &column in glyph {
            self.data(column)?;
        }
        self.data(GLYPH_SPACING)
    }

    fn command(&mut self, byte: u8) -> Result<(), OledError<I2C::Error>> {
        let result = self.channel.send_command(byte);
        self.check(result)
    }

    fn data(&mut self, byte: u8) -> Result<(), OledError<I2C::Error>> {
        let result = self.channel.send_data(byte);
        self.check(result)
    }

    /// Apply the bus error policy to one transaction result
    fn check(&mut self, result: Result<(), I2C::Error>) -> Result<(), OledError<I2C::Error>> {
        match (result, self.policy) {
            (Ok(()), _) => Ok(()),
            (Err(_), BusErrorPolicy::BestEffort) => {
                self.dropped = self.dropped.saturating_add(1);
                #[cfg(feature = "defmt")]
                defmt::warn!("SSD1306 bus write failed, continuing");
                Ok(())
            }
            (Err(e), BusErrorPolicy::Propagate) => Err(OledError::Bus(e)),
        }
    }
}

impl<I2C: I2cBus> TextDisplay for Ssd1306<I2C> {
    type Error = OledError<I2C::Error>;

    fn init(&mut self) -> Result<(), Self::Error> {
        Ssd1306::init(self)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        Ssd1306::clear(self)
    }

    fn show_text(&mut self, text: &str, line: u8) -> Result<(), Self::Error> {
        Ssd1306::show_text(self, text, line)
    }

    fn is_initialized(&self) -> bool {
        Ssd1306::is_initialized(self)
    }
}
