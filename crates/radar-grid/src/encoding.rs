//! Digit and nibble encoding for the radar rings

use radar_core::{RadarError, RadarResult, SECTORS};

/// Decimal digits of a value, most significant first
///
/// Time components are always below 100, so the result has one or two
/// digits. Larger values still decompose correctly.
pub fn decimal_digits(value: u8) -> Vec<u8> {
    if value < 10 {
        return vec![value];
    }

    let mut digits = Vec::with_capacity(3);
    let mut rest = value;
    while rest > 0 {
        digits.push(rest % 10);
        rest /= 10;
    }
    digits.reverse();
    digits
}

/// Pad a one-digit sequence with a leading zero tens digit
///
/// Sequences longer than two keep their last two digits.
pub fn pad_digits(digits: &[u8]) -> [u8; 2] {
    match digits {
        [] => [0, 0],
        [ones] => [0, *ones],
        [.., tens, ones] => [*tens, *ones],
    }
}

/// A 4-bit value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Nibble(u8);

impl Nibble {
    /// Encode a decimal digit
    pub fn from_digit(digit: u8) -> RadarResult<Self> {
        if digit <= 9 {
            Ok(Nibble(digit))
        } else {
            Err(RadarError::InvalidArgument(format!(
                "digit {} is not a decimal digit",
                digit
            )))
        }
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Bits most significant first (5 => [0, 1, 0, 1])
    pub fn bits(self) -> [u8; 4] {
        [
            (self.0 >> 3) & 1,
            (self.0 >> 2) & 1,
            (self.0 >> 1) & 1,
            self.0 & 1,
        ]
    }

    /// Mirror the four bits (0101 => 1010, 0001 => 1000)
    pub fn reversed(self) -> Nibble {
        let mut out = 0u8;
        for bit in 0..4 {
            if self.0 & (1 << bit) != 0 {
                out |= 1 << (3 - bit);
            }
        }
        Nibble(out)
    }

    /// Positions of the set bits, counted from the least significant bit
    pub fn set_positions(self) -> impl Iterator<Item = u8> {
        let value = self.0;
        (0..4u8).filter(move |pos| value & (1 << pos) != 0)
    }
}

/// Sectors lit by a digit: the set positions of its reversed nibble
pub fn digit_sectors(digit: u8) -> RadarResult<Vec<u8>> {
    Ok(Nibble::from_digit(digit)?.reversed().set_positions().collect())
}

/// Rotate a sector half a turn backwards
///
/// Only sectors 0..=3 exist; anything else is a caller bug.
pub fn backward_rotate(sector: u8) -> RadarResult<u8> {
    if sector < SECTORS {
        Ok((sector + SECTORS - 2) % SECTORS)
    } else {
        Err(RadarError::InvalidArgument(format!(
            "sector {} outside 0..={}",
            sector,
            SECTORS - 1
        )))
    }
}
