//! Limits command implementation

use crate::config::{OutputFormat, Settings};
use anyhow::Result;
use colored::Colorize;
use lit_core::{IntKind, PointerWidth};
use serde::Serialize;

/// One row of the suffix table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LimitRow {
    /// Suffix with its underscore
    pub suffix: String,
    /// Rust type
    #[serde(rename = "type")]
    pub type_name: &'static str,
    /// Width in bits
    pub bits: u32,
    /// Largest value the suffix accepts
    pub max: u64,
    /// How to spell the values a literal cannot reach
    pub note: Option<String>,
}

/// Builds the suffix table for a pointer width
pub fn rows(width: PointerWidth) -> Vec<LimitRow> {
    IntKind::ALL
        .into_iter()
        .map(|kind| LimitRow {
            suffix: format!("_{}", kind.suffix()),
            type_name: kind.type_name(),
            bits: kind.bits_for(width),
            max: kind.max_value_for(width),
            note: kind.is_signed().then(|| format!("minimum only as {kind}::MIN")),
        })
        .collect()
}

/// Renders the suffix table as aligned text
pub fn render_table(rows: &[LimitRow]) -> String {
    let mut out = format!("{:<7}{:<7}{:>5}  {:<22}{}\n", "suffix", "type", "bits", "max", "note");
    for row in rows {
        let line = format!(
            "{:<7}{:<7}{:>5}  {:<22}{}",
            row.suffix,
            row.type_name,
            row.bits,
            row.max,
            row.note.as_deref().unwrap_or("")
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// Prints the suffix table
pub fn limits(settings: &Settings) -> Result<()> {
    let rows = rows(settings.options.pointer_width);

    match settings.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rows)?),
        OutputFormat::Text => {
            println!(
                "{} for {}-bit targets\n",
                "Literal limits".green().bold(),
                settings.options.pointer_width.bits()
            );
            print!("{}", render_table(&rows));
        }
    }

    Ok(())
}
