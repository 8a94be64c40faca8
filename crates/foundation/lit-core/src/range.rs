//! Range validation against a target descriptor

use crate::kind::{IntKind, PointerWidth};
use thiserror::Error;

/// A decoded value that does not fit its target kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{kind} literal out of range: {value} exceeds {kind}::MAX ({max})")]
pub struct OutOfRange {
    /// Target kind of the literal
    pub kind: IntKind,
    /// The decoded value
    pub value: u64,
    /// Largest value the kind accepts
    pub max: u64,
}

/// Checks `value` against the positive range of `kind`.
///
/// # Errors
///
/// Returns [`OutOfRange`] when `value` exceeds [`IntKind::max_value_for`].
pub const fn check_range(value: u64, kind: IntKind, width: PointerWidth) -> Result<u64, OutOfRange> {
    let max = kind.max_value_for(width);
    if value <= max {
        Ok(value)
    } else {
        Err(OutOfRange { kind, value, max })
    }
}

/// Checks `value` against `kind` on the compilation target.
///
/// # Panics
///
/// Panics with [`IntKind::out_of_range_message`] when the value does not
/// fit. Inside a `const { }` block the panic is a compile error.
#[must_use]
pub const fn validate(value: u64, kind: IntKind) -> u64 {
    match check_range(value, kind, PointerWidth::TARGET) {
        Ok(value) => value,
        Err(err) => panic!("{}", err.kind.out_of_range_message()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use expect_test::expect;

    #[test]
    fn test_unsigned_boundaries() {
        let boundaries = [
            (IntKind::U8, 255),
            (IntKind::U16, 65_535),
            (IntKind::U32, 4_294_967_295),
        ];

        for (kind, max) in boundaries {
            assert_eq!(check_range(max, kind, PointerWidth::W64), Ok(max));
            assert_eq!(
                check_range(max + 1, kind, PointerWidth::W64),
                Err(OutOfRange { kind, value: max + 1, max })
            );
        }
        assert_eq!(check_range(u64::MAX, IntKind::U64, PointerWidth::W64), Ok(u64::MAX));
    }

    #[test]
    fn test_signed_boundaries_exclude_minimum() {
        assert_eq!(check_range(127, IntKind::I8, PointerWidth::W64), Ok(127));
        assert!(check_range(128, IntKind::I8, PointerWidth::W64).is_err());
        assert!(check_range(32_768, IntKind::I16, PointerWidth::W64).is_err());
        assert!(check_range(2_147_483_648, IntKind::I32, PointerWidth::W64).is_err());
        assert!(check_range(1 << 63, IntKind::I64, PointerWidth::W64).is_err());
    }

    #[test]
    fn test_usize_boundary_per_width() {
        assert!(check_range(65_536, IntKind::Usize, PointerWidth::W16).is_err());
        assert_eq!(check_range(65_536, IntKind::Usize, PointerWidth::W32), Ok(65_536));
        assert!(check_range(1 << 32, IntKind::Usize, PointerWidth::W32).is_err());
        assert_eq!(check_range(1 << 32, IntKind::Usize, PointerWidth::W64), Ok(1 << 32));
    }

    #[test]
    fn test_out_of_range_message() {
        let err = check_range(256, IntKind::U8, PointerWidth::W64).unwrap_err();
        expect!["u8 literal out of range: 256 exceeds u8::MAX (255)"].assert_eq(&err.to_string());
    }

    #[test]
    fn test_validate_in_const_context() {
        const VALUE: u64 = validate(255, IntKind::U8);
        assert_eq!(VALUE, 255);
    }

    #[test]
    #[should_panic(expected = "i8 literal out of range")]
    fn test_validate_panics_on_signed_minimum() {
        let magnitude = std::hint::black_box(128);
        let _value = validate(magnitude, IntKind::I8);
    }
}
