//! Radix detection and digit accumulation
//!
//! Everything here is a `const fn` so the same code runs inside `const { }`
//! blocks and at runtime.

use crate::error::DigitError;
use std::fmt;

/// Numeric base of an integer literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    /// `0b101`
    Binary,
    /// `0101` or `0o101`
    Octal,
    /// `101`
    Decimal,
    /// `0xfeF1`
    Hexadecimal,
}

impl Radix {
    /// Returns the base as a number
    #[must_use]
    pub const fn value(self) -> u64 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    /// Detects the radix of a digit sequence.
    ///
    /// Returns the radix together with the byte offset at which the operand
    /// digits start. A single character is always decimal. A leading `0`
    /// without a letter prefix selects octal and stays part of the operand.
    #[must_use]
    pub const fn detect(text: &[u8]) -> (Self, usize) {
        if text.len() <= 1 {
            return (Self::Decimal, 0);
        }

        match (text[0], text[1]) {
            (b'0', b'b' | b'B') => (Self::Binary, 2),
            (b'0', b'x' | b'X') => (Self::Hexadecimal, 2),
            (b'0', b'o' | b'O') => (Self::Octal, 2),
            (b'0', _) => (Self::Octal, 0),
            _ => (Self::Decimal, 0),
        }
    }

    /// Renders `value` in this radix using the prefix the parser recognises
    #[must_use]
    pub fn render(self, value: u64) -> String {
        match self {
            Self::Binary => format!("0b{value:b}"),
            Self::Octal => format!("0{value:o}"),
            Self::Decimal => value.to_string(),
            Self::Hexadecimal => format!("0x{value:x}"),
        }
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "base {}", self.value())
    }
}

/// Arithmetic used while folding digits into the accumulator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accumulation {
    /// Silent modulo 2^64 wraparound
    #[default]
    Wrapping,
    /// Fail with [`DigitError::Overflow`] once the value leaves 64 bits
    Checked,
}

/// A decoded digit sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// Radix selected by the prefix
    pub radix: Radix,
    /// Accumulated 64-bit value
    pub value: u64,
}

/// Maps a digit character to its value.
///
/// Accepts `0-9`, `a-f` and `A-F`.
#[must_use]
pub const fn digit_value(byte: u8) -> Option<u64> {
    match byte {
        b'0'..=b'9' => Some((byte - b'0') as u64),
        b'a'..=b'f' => Some((byte - b'a' + 10) as u64),
        b'A'..=b'F' => Some((byte - b'A' + 10) as u64),
        _ => None,
    }
}

/// Decodes the UTF-8 character starting at `index`.
///
/// Malformed sequences decode to U+FFFD.
const fn char_at(bytes: &[u8], index: usize) -> char {
    let lead = bytes[index];
    let (len, mut code) = match lead {
        0x00..=0x7F => return lead as char,
        0xC0..=0xDF => (2, (lead & 0x1F) as u32),
        0xE0..=0xEF => (3, (lead & 0x0F) as u32),
        0xF0..=0xF7 => (4, (lead & 0x07) as u32),
        _ => return char::REPLACEMENT_CHARACTER,
    };
    if index + len > bytes.len() {
        return char::REPLACEMENT_CHARACTER;
    }

    let mut next = 1;
    while next < len {
        let byte = bytes[index + next];
        if byte & 0xC0 != 0x80 {
            return char::REPLACEMENT_CHARACTER;
        }
        code = (code << 6) | (byte & 0x3F) as u32;
        next += 1;
    }

    match char::from_u32(code) {
        Some(digit) => digit,
        None => char::REPLACEMENT_CHARACTER,
    }
}

/// Folds `digits` into a value, most significant digit first.
///
/// `_` separators are skipped. Offsets in [`DigitError::InvalidDigit`] are
/// relative to `digits`.
///
/// # Errors
///
/// Returns [`DigitError::Empty`] if no digit is present,
/// [`DigitError::InvalidDigit`] for a character that is not a digit of
/// `radix`, and [`DigitError::Overflow`] when `mode` is
/// [`Accumulation::Checked`] and the value does not fit in 64 bits.
pub const fn accumulate(digits: &[u8], radix: Radix, mode: Accumulation) -> Result<u64, DigitError> {
    let base = radix.value();
    let mut value: u64 = 0;
    let mut seen = false;
    let mut index = 0;

    while index < digits.len() {
        let byte = digits[index];
        index += 1;

        if byte == b'_' {
            continue;
        }

        let digit = match digit_value(byte) {
            Some(digit) if digit < base => digit,
            _ => {
                return Err(DigitError::InvalidDigit {
                    digit: char_at(digits, index - 1),
                    radix,
                    offset: index - 1,
                });
            }
        };
        seen = true;

        value = match mode {
            Accumulation::Wrapping => value.wrapping_mul(base).wrapping_add(digit),
            Accumulation::Checked => match value.checked_mul(base) {
                Some(shifted) => match shifted.checked_add(digit) {
                    Some(next) => next,
                    None => return Err(DigitError::Overflow),
                },
                None => return Err(DigitError::Overflow),
            },
        };
    }

    if !seen {
        return Err(DigitError::Empty);
    }
    Ok(value)
}

/// Decodes a digit sequence with wrapping accumulation
///
/// # Errors
///
/// See [`accumulate`].
pub const fn decode(text: &str) -> Result<Decoded, DigitError> {
    decode_with(text, Accumulation::Wrapping)
}

/// Detects the radix of `text` and accumulates its operand digits.
///
/// Offsets in [`DigitError::InvalidDigit`] are relative to `text`.
///
/// # Errors
///
/// See [`accumulate`].
pub const fn decode_with(text: &str, mode: Accumulation) -> Result<Decoded, DigitError> {
    let bytes = text.as_bytes();
    let (radix, start) = Radix::detect(bytes);
    let (_, operand) = bytes.split_at(start);

    match accumulate(operand, radix, mode) {
        Ok(value) => Ok(Decoded { radix, value }),
        Err(DigitError::InvalidDigit { digit, radix, offset }) => Err(DigitError::InvalidDigit {
            digit,
            radix,
            offset: offset + start,
        }),
        Err(err) => Err(err),
    }
}
