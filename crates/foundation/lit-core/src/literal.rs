//! Suffixed literal parsing
//!
//! Runtime counterpart of the `int!` path: the same decoding and range
//! rules, with structured errors instead of a failed constant evaluation.

use crate::error::{DigitError, LiteralError};
use crate::kind::{IntKind, LiteralTarget, PointerWidth, TypedValue};
use crate::radix::{self, Accumulation, Radix};
use crate::range;

/// Options for [`Literal::parse_with`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Width used for `_z` literals
    pub pointer_width: PointerWidth,
    /// Reject literals whose value does not fit in 64 bits instead of
    /// letting the accumulator wrap
    pub strict: bool,
}

impl ParseOptions {
    fn accumulation(self) -> Accumulation {
        if self.strict {
            Accumulation::Checked
        } else {
            Accumulation::Wrapping
        }
    }
}

/// A parsed and range-checked suffixed literal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Literal {
    /// The literal as written, sign included
    pub text: String,
    /// Radix selected by the prefix
    pub radix: Radix,
    /// Target kind selected by the suffix
    pub kind: IntKind,
    /// The range-checked value of the digits, before negation
    pub magnitude: u64,
    /// Whether the literal carried a leading `-`
    pub negative: bool,
    /// Whether the 64-bit accumulator wrapped while decoding
    pub wrapped: bool,
    /// The final value in its target representation
    pub value: TypedValue,
}

impl Literal {
    /// Parses a literal such as `0xFF_u8` or `-50_i8` with default options
    ///
    /// # Errors
    ///
    /// See [`Literal::parse_with`].
    pub fn parse(text: &str) -> Result<Self, LiteralError> {
        Self::parse_with(text, &ParseOptions::default())
    }

    /// Parses a literal.
    ///
    /// The range check applies to the digits alone, so `-128_i8` is rejected
    /// like `128_i8`.
    ///
    /// # Errors
    ///
    /// Returns a [`LiteralError`] when the suffix is missing or unknown, the
    /// digits do not decode, the value does not fit the suffix type, or an
    /// unsigned literal is negated.
    pub fn parse_with(text: &str, options: &ParseOptions) -> Result<Self, LiteralError> {
        let (negative, unsigned) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let sign_len = usize::from(negative);

        let (digits, kind) = split_suffix(unsigned).map_err(|err| match err {
            LiteralError::UnknownSuffix { suffix, span } => LiteralError::UnknownSuffix {
                suffix,
                span: span.start + sign_len..span.end + sign_len,
            },
            LiteralError::MissingSuffix { .. } => LiteralError::MissingSuffix { text: text.to_owned() },
            other => other,
        })?;
        let digit_span = sign_len..sign_len + digits.len();

        if negative && !kind.is_signed() {
            return Err(LiteralError::NegativeUnsigned { kind });
        }

        let decoded = radix::decode_with(digits, options.accumulation()).map_err(|error| LiteralError::Digits {
            error,
            digits: digit_span.clone(),
        })?;
        let wrapped = !options.strict
            && matches!(
                radix::decode_with(digits, Accumulation::Checked),
                Err(DigitError::Overflow)
            );

        let magnitude = range::check_range(decoded.value, kind, options.pointer_width)
            .map_err(|error| LiteralError::OutOfRange { error, digits: digit_span })?;

        let unsigned_value = TypedValue::from_bits(kind, magnitude);
        let value = if negative {
            unsigned_value.wrapping_neg()
        } else {
            unsigned_value
        };

        Ok(Self {
            text: text.to_owned(),
            radix: decoded.radix,
            kind,
            magnitude,
            negative,
            wrapped,
            value,
        })
    }

    /// Renders the literal in its own radix with an explicit suffix
    #[must_use]
    pub fn canonical(&self) -> String {
        let sign = if self.negative { "-" } else { "" };
        format!("{sign}{}_{}", self.radix.render(self.magnitude), self.kind.suffix())
    }
}

/// Splits a literal into its digits and suffix kind.
///
/// The suffix may follow an underscore (`100_u32`) or the digits directly
/// (`100u32`). No sign is accepted here.
///
/// # Errors
///
/// Returns [`LiteralError::UnknownSuffix`] for an `_suffix` tail that is not
/// a digit run, and [`LiteralError::MissingSuffix`] otherwise.
pub fn split_suffix(text: &str) -> Result<(&str, IntKind), LiteralError> {
    for kind in IntKind::ALL {
        if let Some(rest) = text.strip_suffix(kind.suffix()) {
            let digits = rest.strip_suffix('_').unwrap_or(rest);
            return Ok((digits, kind));
        }
    }

    if let Some(index) = text.rfind('_') {
        let tail = &text[index + 1..];
        if !tail.is_empty() && !tail.bytes().all(|byte| byte.is_ascii_hexdigit() || byte == b'_') {
            return Err(LiteralError::UnknownSuffix {
                suffix: tail.to_owned(),
                span: index + 1..text.len(),
            });
        }
    }

    Err(LiteralError::MissingSuffix { text: text.to_owned() })
}

/// Decodes an unsuffixed digit sequence straight into `T`.
///
/// # Errors
///
/// Returns [`LiteralError::Digits`] when the digits do not decode and
/// [`LiteralError::OutOfRange`] when the value does not fit `T`.
pub fn parse<T: LiteralTarget>(digits: &str) -> Result<T, LiteralError> {
    let span = 0..digits.len();
    let decoded = radix::decode(digits).map_err(|error| LiteralError::Digits {
        error,
        digits: span.clone(),
    })?;
    let value = range::check_range(decoded.value, T::KIND, PointerWidth::TARGET)
        .map_err(|error| LiteralError::OutOfRange { error, digits: span })?;
    Ok(T::from_literal(value))
}
