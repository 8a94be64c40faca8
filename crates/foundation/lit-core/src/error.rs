//! Literal errors

use crate::kind::IntKind;
use crate::radix::Radix;
use crate::range::OutOfRange;
use std::ops::Range;
use thiserror::Error;

/// Errors produced while decoding a digit sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DigitError {
    /// No digits after the radix prefix
    #[error("integer literal has no digits")]
    Empty,

    /// A character that is not a digit of the detected radix
    #[error("invalid digit `{digit}` in a {radix} literal")]
    InvalidDigit {
        /// The offending character
        digit: char,
        /// Radix the literal was read in
        radix: Radix,
        /// Byte offset of the character
        offset: usize,
    },

    /// The value does not fit in 64 bits (checked accumulation only)
    #[error("integer literal does not fit in 64 bits")]
    Overflow,
}

impl DigitError {
    /// Static message used when the error aborts constant evaluation
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::Empty => "integer literal has no digits",
            Self::InvalidDigit { .. } => "invalid digit in integer literal",
            Self::Overflow => "integer literal does not fit in 64 bits",
        }
    }
}

/// Errors produced while parsing a suffixed literal
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LiteralError {
    /// The digit sequence could not be decoded
    #[error("{error}")]
    Digits {
        /// Underlying digit error
        error: DigitError,
        /// Byte range of the digit sequence in the literal text
        digits: Range<usize>,
    },

    /// The decoded value does not fit the suffix type
    #[error("{error}")]
    OutOfRange {
        /// Underlying range error
        error: OutOfRange,
        /// Byte range of the digit sequence in the literal text
        digits: Range<usize>,
    },

    /// No integer suffix at the end of the literal
    #[error("`{text}` has no integer suffix (expected one of _u8, _u16, _u32, _u64, _i8, _i16, _i32, _i64, _z)")]
    MissingSuffix {
        /// The literal text
        text: String,
    },

    /// An `_suffix` tail that names no supported type
    #[error("unknown integer suffix `{suffix}`")]
    UnknownSuffix {
        /// The unrecognised suffix
        suffix: String,
        /// Byte range of the suffix in the literal text
        span: Range<usize>,
    },

    /// A `-` in front of an unsigned literal
    #[error("cannot negate a {kind} literal")]
    NegativeUnsigned {
        /// The unsigned target type
        kind: IntKind,
    },
}

impl LiteralError {
    /// Returns the byte range of the literal text the error refers to
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        match self {
            Self::Digits {
                error: DigitError::InvalidDigit { digit, offset, .. },
                digits,
            } => {
                let start = digits.start + offset;
                start..start + digit.len_utf8()
            }
            Self::Digits { digits, .. } | Self::OutOfRange { digits, .. } => digits.clone(),
            Self::MissingSuffix { text } => 0..text.len(),
            Self::UnknownSuffix { span, .. } => span.clone(),
            Self::NegativeUnsigned { .. } => 0..1,
        }
    }

    /// Returns a hint for fixing the literal, if one applies
    #[must_use]
    pub fn help(&self) -> Option<String> {
        match self {
            Self::OutOfRange { error, .. } if error.kind.is_signed() => Some(format!(
                "the magnitude is checked before negation; write `{}::MIN` for the minimum value",
                error.kind
            )),
            Self::OutOfRange { error, .. } => Some(format!("use a wider suffix than `_{}`", error.kind.suffix())),
            Self::Digits {
                error: DigitError::Overflow,
                ..
            } => Some("no supported suffix can hold this value".to_owned()),
            Self::NegativeUnsigned { kind } => Some(format!("use a signed suffix instead of `_{}`", kind.suffix())),
            Self::Digits { .. } | Self::MissingSuffix { .. } | Self::UnknownSuffix { .. } => None,
        }
    }
}
