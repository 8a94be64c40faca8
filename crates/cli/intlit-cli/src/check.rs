//! Check command implementation

use crate::config::{OutputFormat, Settings};
use crate::diagnostic::LiteralDiagnostic;
use anyhow::Result;
use colored::Colorize;
use lit_core::{Literal, LiteralError, ParseOptions};
use serde::Serialize;
use tracing::{debug, warn};

/// Result of checking one literal
#[derive(Debug, Clone)]
pub struct Outcome {
    /// The literal as given on the command line
    pub text: String,
    /// Parsed literal or the reason it was rejected
    pub result: Result<Literal, LiteralError>,
}

impl Outcome {
    /// Parses `text` with `options`
    pub fn evaluate(text: &str, options: &ParseOptions) -> Self {
        let result = Literal::parse_with(text, options);
        match &result {
            Ok(literal) => {
                debug!(literal = text, radix = literal.radix.value(), value = %literal.value, "decoded");
                if literal.wrapped {
                    warn!(
                        literal = text,
                        "value wrapped past 64 bits before the range check; use --strict to reject it"
                    );
                }
            }
            Err(err) => debug!(literal = text, error = %err, "rejected"),
        }

        Self {
            text: text.to_owned(),
            result,
        }
    }

    /// Builds the serialisable report
    pub fn report(&self) -> LiteralReport {
        match &self.result {
            Ok(literal) => LiteralReport {
                text: self.text.clone(),
                ok: true,
                type_name: Some(literal.kind.type_name()),
                value: Some(literal.value.as_i128()),
                radix: Some(literal.radix.value()),
                canonical: Some(literal.canonical()),
                wrapped: literal.wrapped,
                error: None,
            },
            Err(err) => LiteralReport {
                text: self.text.clone(),
                ok: false,
                type_name: None,
                value: None,
                radix: None,
                canonical: None,
                wrapped: false,
                error: Some(err.to_string()),
            },
        }
    }
}

/// JSON shape of one checked literal
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiteralReport {
    /// The literal as given
    pub text: String,
    /// Whether the literal is valid
    pub ok: bool,
    /// Rust type selected by the suffix
    #[serde(rename = "type")]
    pub type_name: Option<&'static str>,
    /// Final value, sign applied
    pub value: Option<i128>,
    /// Radix of the digits
    pub radix: Option<u64>,
    /// Literal rendered in its own radix
    pub canonical: Option<String>,
    /// Whether the accumulator wrapped past 64 bits
    pub wrapped: bool,
    /// Rejection reason
    pub error: Option<String>,
}

/// Renders one line per literal, without colour
pub fn render_text(outcomes: &[Outcome]) -> String {
    let width = outcomes.iter().map(|outcome| outcome.text.len()).max().unwrap_or(0);
    let mut out = String::new();

    for outcome in outcomes {
        let line = match &outcome.result {
            Ok(literal) => format!(
                "{:<width$}  ->  {}  ({}, canonical {})",
                outcome.text,
                literal.value,
                literal.radix,
                literal.canonical()
            ),
            Err(err) => format!("{:<width$}  !!  {}", outcome.text, err),
        };
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// Checks every literal and prints the results
pub fn check(literals: &[String], settings: &Settings) -> Result<()> {
    let outcomes: Vec<Outcome> = literals
        .iter()
        .map(|text| Outcome::evaluate(text, &settings.options))
        .collect();
    let failures = outcomes.iter().filter(|outcome| outcome.result.is_err()).count();

    match settings.format {
        OutputFormat::Json => {
            let reports: Vec<LiteralReport> = outcomes.iter().map(Outcome::report).collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
        OutputFormat::Text => {
            print!("{}", render_text(&outcomes));

            for outcome in &outcomes {
                if let Err(err) = &outcome.result {
                    let report = miette::Report::new(LiteralDiagnostic::new(&outcome.text, err));
                    eprintln!("\n{report:?}");
                }
            }

            if failures == 0 {
                println!("\n{} {} literals in range", "Success:".green().bold(), outcomes.len());
            }
        }
    }

    if failures > 0 {
        if settings.format == OutputFormat::Text {
            eprintln!("{} {} of {} literals rejected", "Failed:".red().bold(), failures, outcomes.len());
        }
        anyhow::bail!("Check failed with {} invalid literals", failures);
    }

    Ok(())
}
