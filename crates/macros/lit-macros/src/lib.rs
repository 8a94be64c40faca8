//! Suffixed integer literal macro
//!
//! Expands `lit!(0xFF_u8)` to `255u8` after decoding the digits and checking
//! them against the suffix type. Failures become `compile_error!` at the
//! literal's span.

use lit_core::{IntKind, Literal, ParseOptions, PointerWidth};
use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, quote_spanned};
use syn::parse::{Parse, ParseStream};
use syn::{parse_macro_input, LitInt, Token};

/// Checks a suffixed integer literal at compile time
///
/// Accepts decimal, octal (`0101`, `0o101`), binary (`0b101`) and
/// hexadecimal (`0xfeF1`) digits followed by one of the suffixes `_u8`,
/// `_u16`, `_u32`, `_u64`, `_i8`, `_i16`, `_i32`, `_i64` or `_z` (`usize`).
/// A leading `-` is allowed for signed suffixes and negates the checked
/// value.
///
/// Digits accumulate modulo 2^64 before the range check, so
/// `lit!(18446744073709551617_u8)` expands to `1u8`.
///
/// # Example
///
/// ```ignore
/// let ux = lit!(100_u32);  // u32
/// let uz = lit!(0xFF_u8);  // 255u8
/// let iz = lit!(-50_i8);   // i8
/// let sz = lit!(100_z);    // usize
/// let no = lit!(256_u8);   // error: u8 literal out of range
/// ```
#[proc_macro]
pub fn lit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as SuffixedLiteral);

    expand(&input).unwrap_or_else(syn::Error::into_compile_error).into()
}

/// Macro input: an optional minus followed by one literal token
struct SuffixedLiteral {
    minus: Option<Token![-]>,
    literal: proc_macro2::Literal,
}

impl Parse for SuffixedLiteral {
    fn parse(input: ParseStream<'_>) -> syn::Result<Self> {
        Ok(Self {
            minus: input.parse()?,
            literal: input.parse()?,
        })
    }
}

fn expand(input: &SuffixedLiteral) -> syn::Result<TokenStream2> {
    let span = input.literal.span();
    let text = match input.minus {
        Some(_) => format!("-{}", input.literal),
        None => input.literal.to_string(),
    };

    // `usize` is checked at its widest here; narrower targets get cfg guards.
    let options = ParseOptions {
        pointer_width: PointerWidth::W64,
        strict: false,
    };
    let literal = Literal::parse_with(&text, &options).map_err(|err| syn::Error::new(span, err))?;

    let magnitude = LitInt::new(&format!("{}{}", literal.magnitude, literal.kind.type_name()), span);
    let value = if literal.negative {
        quote!(-#magnitude)
    } else {
        quote!(#magnitude)
    };

    let guards = width_guards(&literal, span);
    if guards.is_empty() {
        Ok(value)
    } else {
        Ok(quote!({
            #(#guards)*
            #value
        }))
    }
}

/// `compile_error!` guards for the pointer widths a `_z` literal overflows
fn width_guards(literal: &Literal, span: proc_macro2::Span) -> Vec<TokenStream2> {
    if literal.kind != IntKind::Usize {
        return Vec::new();
    }

    [PointerWidth::W16, PointerWidth::W32]
        .into_iter()
        .filter(|width| literal.magnitude > IntKind::Usize.max_value_for(*width))
        .map(|width| {
            let bits = width.bits().to_string();
            let message = format!(
                "usize literal out of range: {} exceeds usize::MAX ({}) on {}-bit targets",
                literal.magnitude,
                IntKind::Usize.max_value_for(width),
                bits
            );
            quote_spanned! {span=>
                #[cfg(target_pointer_width = #bits)]
                compile_error!(#message);
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand_str(source: &str) -> syn::Result<String> {
        let input: SuffixedLiteral = syn::parse_str(source)?;
        expand(&input).map(|tokens| tokens.to_string())
    }

    #[test]
    fn test_expands_to_suffixed_literal() {
        assert_eq!(expand_str("100_u32").unwrap(), "100u32");
        assert_eq!(expand_str("0xFF_u8").unwrap(), "255u8");
        assert_eq!(expand_str("0101_u64").unwrap(), "65u64");
        assert_eq!(expand_str("0b101_i16").unwrap(), "5i16");
        assert_eq!(expand_str("100_i64").unwrap(), "100i64");
        assert_eq!(expand_str("100_z").unwrap(), "100usize");
    }

    #[test]
    fn test_accumulator_wraps_before_range_check() {
        assert_eq!(expand_str("18446744073709551617_u8").unwrap(), "1u8");
        assert_eq!(expand_str("0x1_0000_0000_0000_0000_u64").unwrap(), "0u64");
    }

    #[test]
    fn test_negative_signed_literal() {
        assert_eq!(expand_str("-50_i8").unwrap(), "- 50i8");
    }

    #[test]
    fn test_errors_name_the_type() {
        let err = expand_str("256_u8").unwrap_err();
        assert_eq!(err.to_string(), "u8 literal out of range: 256 exceeds u8::MAX (255)");

        let err = expand_str("-128_i8").unwrap_err();
        assert_eq!(err.to_string(), "i8 literal out of range: 128 exceeds i8::MAX (127)");

        let err = expand_str("-1_u8").unwrap_err();
        assert_eq!(err.to_string(), "cannot negate a u8 literal");
    }

    #[test]
    fn test_usize_guards_for_narrow_targets() {
        let fits_everywhere = expand_str("65535_z").unwrap();
        assert!(!fits_everywhere.contains("compile_error"));

        let wide = expand_str("0x1_0000_0000_z").unwrap();
        assert!(wide.contains("target_pointer_width = \"16\""));
        assert!(wide.contains("target_pointer_width = \"32\""));
        assert!(wide.contains("4294967296usize"));

        let medium = expand_str("65536_z").unwrap();
        assert!(medium.contains("target_pointer_width = \"16\""));
        assert!(!medium.contains("target_pointer_width = \"32\""));
    }
}
