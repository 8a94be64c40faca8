//! Rich diagnostics for rejected literals
//!
//! Note: the struct fields are read by miette's `#[derive(Diagnostic)]`.

#![allow(unused_assignments)]

use lit_core::{DigitError, LiteralError};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A rejected literal, labelled at the part that caused the rejection
#[derive(Error, Debug, Diagnostic)]
#[error("{message}")]
#[diagnostic(code(intlit::invalid_literal))]
pub struct LiteralDiagnostic {
    message: String,
    #[source_code]
    src: NamedSource<String>,
    #[label("{label}")]
    span: SourceSpan,
    label: String,
    #[help]
    help: Option<String>,
}

impl LiteralDiagnostic {
    /// Builds the diagnostic for `err` raised while parsing `text`
    pub fn new(text: &str, err: &LiteralError) -> Self {
        let range = err.span();
        Self {
            message: err.to_string(),
            src: NamedSource::new("<literal>", text.to_owned()),
            span: (range.start, range.end - range.start).into(),
            label: label_for(err),
            help: err.help(),
        }
    }
}

fn label_for(err: &LiteralError) -> String {
    match err {
        LiteralError::Digits {
            error: DigitError::InvalidDigit { radix, .. },
            ..
        } => format!("not a {radix} digit"),
        LiteralError::Digits {
            error: DigitError::Empty,
            ..
        } => "no digits".to_owned(),
        LiteralError::Digits {
            error: DigitError::Overflow,
            ..
        } => "wider than 64 bits".to_owned(),
        LiteralError::OutOfRange { error, .. } => format!("does not fit {}", error.kind),
        LiteralError::MissingSuffix { .. } => "missing suffix".to_owned(),
        LiteralError::UnknownSuffix { .. } => "unknown suffix".to_owned(),
        LiteralError::NegativeUnsigned { kind } => format!("{kind} is unsigned"),
    }
}
