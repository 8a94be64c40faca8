//! Compile-time checked fixed-width integer literals
//!
//! A literal is tagged with the integer type it must fit: `u8`, `u16`,
//! `u32`, `u64`, `i8`, `i16`, `i32`, `i64` or `usize` (suffix `_z`). The
//! digits are decoded in binary (`0b`), octal (leading `0` or `0o`), decimal
//! or hexadecimal (`0x`), and the value is range-checked against the type.
//! Through [`int!`] the check happens in a `const { }` block, so an
//! oversized literal fails the build instead of truncating.
//!
//! The digits never include the sign. `int!(i8, -128)` is rejected because
//! `128` does not fit `i8`; use `i8::MIN` for that value.
//!
//! ```
//! use lit_core::int;
//!
//! let mask = int!(u8, 0xFF);
//! let offset = int!(i8, -50);
//! assert_eq!(mask, 255_u8);
//! assert_eq!(offset, -50_i8);
//! ```
//!
//! ```compile_fail
//! let too_big = lit_core::int!(u8, 256);
//! ```
//!
//! ```compile_fail
//! let minimum = lit_core::int!(i8, -128);
//! ```

pub mod error;
pub mod kind;
pub mod literal;
pub mod radix;
pub mod range;

pub use error::{DigitError, LiteralError};
pub use kind::{IntKind, LiteralTarget, PointerWidth, Signedness, TypedValue};
pub use literal::{parse, split_suffix, Literal, ParseOptions};
pub use radix::{Accumulation, Decoded, Radix};
pub use range::{check_range, validate, OutOfRange};

/// Decodes `text` and checks it against `kind` on the compilation target.
///
/// This is the function behind [`int!`]. The accumulator wraps at 64 bits.
///
/// # Panics
///
/// Panics when the digits do not decode or the value does not fit `kind`.
#[must_use]
pub const fn literal_value(text: &str, kind: IntKind) -> u64 {
    match radix::decode(text) {
        Ok(decoded) => range::validate(decoded.value, kind),
        Err(err) => panic!("{}", err.message()),
    }
}

/// Checks an integer literal against a type at compile time.
///
/// `int!(T, LIT)` evaluates to a `T`. The literal is decoded and
/// range-checked inside a `const { }` block, so a value that does not fit
/// `T` is a compile error naming the type. `int!(T, -LIT)` negates the
/// checked magnitude.
///
/// ```
/// use lit_core::int;
///
/// const PORT: u16 = int!(u16, 0x1F90);
/// assert_eq!(PORT, 8080);
/// assert_eq!(int!(u64, 0101), 65);
/// assert_eq!(int!(usize, 0b101), 5);
/// ```
#[macro_export]
macro_rules! int {
    ($ty:ident, - $lit:literal) => {
        -$crate::int!($ty, $lit)
    };
    ($ty:ident, $lit:literal) => {
        const {
            $crate::literal_value(
                ::core::stringify!($lit),
                <$ty as $crate::LiteralTarget>::KIND,
            ) as $ty
        }
    };
}
