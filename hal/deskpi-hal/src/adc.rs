//! Analog input abstraction
//!
//! The sensor contract is a 10-bit reading (0-1023) regardless of the
//! converter behind it. Boards with wider converters scale down with
//! [`scale_to_10bit`] before handing the value out.

/// Largest value an [`AnalogInput`] may return
pub const ADC_MAX: u16 = 1023;

/// One analog input channel
pub trait AnalogInput {
    /// Sample the channel, returning a value in `0..=ADC_MAX`
    fn read(&mut self) -> u16;
}

impl<T: AnalogInput + ?Sized> AnalogInput for &mut T {
    fn read(&mut self) -> u16 {
        T::read(self)
    }
}

/// Scale a reading from a converter with `bits` of resolution to 10 bits
///
/// Converters narrower than 10 bits are scaled up; readings wider than
/// the declared resolution saturate at [`ADC_MAX`].
pub fn scale_to_10bit(raw: u16, bits: u8) -> u16 {
    let scaled = if bits >= 10 {
        raw >> (bits - 10)
    } else {
        raw << (10 - bits)
    };
    scaled.min(ADC_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_12bit() {
        assert_eq!(scale_to_10bit(0, 12), 0);
        assert_eq!(scale_to_10bit(4095, 12), 1023);
        assert_eq!(scale_to_10bit(2048, 12), 512);
    }

    #[test]
    fn test_scale_native_and_narrow() {
        assert_eq!(scale_to_10bit(700, 10), 700);
        assert_eq!(scale_to_10bit(255, 8), 1020);
    }

    #[test]
    fn test_scale_saturates() {
        assert_eq!(scale_to_10bit(5000, 10), ADC_MAX);
    }
}
