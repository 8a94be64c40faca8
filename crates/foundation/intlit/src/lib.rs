//! Fixed-width integer literal suffixes checked at compile time
//!
//! Two surfaces share one decoder:
//!
//! - [`lit!`] takes a suffixed literal, `lit!(0xFF_u8)`, and expands to a
//!   typed Rust literal or a `compile_error!` naming the type.
//! - [`int!`] takes the type and the digits, `int!(u8, 0xFF)`, and checks
//!   them in a `const { }` block.
//!
//! | suffix | type |
//! |---|---|
//! | `_u8` `_u16` `_u32` `_u64` | unsigned |
//! | `_i8` `_i16` `_i32` `_i64` | signed |
//! | `_z` | `usize` |
//!
//! ```
//! use intlit::{int, lit};
//!
//! let ux = lit!(100_u32);
//! let uz = lit!(0xFF_u8);
//! let iz = lit!(-50_i8);
//! let sz = lit!(100_z);
//! assert_eq!((ux, uz, iz, sz), (100_u32, 255_u8, -50_i8, 100_usize));
//! assert_eq!(int!(u16, 0b1010), 10);
//! ```
//!
//! The sign is not part of the checked digits, so the minimum value of a
//! signed type cannot be written with a suffix:
//!
//! ```compile_fail
//! let minimum = intlit::lit!(-128_i8);
//! ```
//!
//! Use `i8::MIN` and friends for those values.

pub use lit_core::*;
pub use lit_macros::lit;
