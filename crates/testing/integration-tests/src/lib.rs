//! Integration test utilities for intlit

/// Returns the type name of a value, for asserting macro result types
#[must_use]
pub fn type_of<T>(_value: &T) -> &'static str {
    std::any::type_name::<T>()
}

/// Strips the radix prefix the native parser does not accept.
///
/// Returns the base and the remaining digits with `_` removed, mirroring how
/// the literal decoder reads `0b`, `0o`, `0x` and leading-zero octal.
#[must_use]
pub fn native_radix(text: &str) -> (u32, String) {
    let digits = |rest: &str| rest.replace('_', "");
    let lower = text.to_ascii_lowercase();

    if text.len() <= 1 {
        (10, digits(text))
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (2, digits(rest))
    } else if let Some(rest) = lower.strip_prefix("0x") {
        (16, digits(rest))
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (8, digits(rest))
    } else if lower.starts_with('0') {
        (8, digits(&lower))
    } else {
        (10, digits(text))
    }
}
