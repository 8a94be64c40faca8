//! Target type descriptors

use std::fmt;

/// Whether a target type carries a sign
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Signedness {
    /// `u8` through `u64` and `usize`
    Unsigned,
    /// `i8` through `i64`
    Signed,
}

/// Pointer width assumed for `usize`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerWidth {
    /// 16-bit targets
    W16,
    /// 32-bit targets
    W32,
    /// 64-bit targets
    W64,
}

impl PointerWidth {
    /// Pointer width of the target this crate was compiled for
    pub const TARGET: Self = match usize::BITS {
        16 => Self::W16,
        32 => Self::W32,
        _ => Self::W64,
    };

    /// Returns the width in bits
    #[must_use]
    pub const fn bits(self) -> u32 {
        match self {
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Looks up a width by its bit count
    #[must_use]
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            16 => Some(Self::W16),
            32 => Some(Self::W32),
            64 => Some(Self::W64),
            _ => None,
        }
    }
}

impl Default for PointerWidth {
    fn default() -> Self {
        Self::TARGET
    }
}

/// Target type of a suffixed literal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IntKind {
    /// `_u8`
    U8,
    /// `_u16`
    U16,
    /// `_u32`
    U32,
    /// `_u64`
    U64,
    /// `_i8`
    I8,
    /// `_i16`
    I16,
    /// `_i32`
    I32,
    /// `_i64`
    I64,
    /// `_z`, the platform-size unsigned type
    Usize,
}

impl IntKind {
    /// Every kind, in suffix table order
    pub const ALL: [Self; 9] = [
        Self::U8,
        Self::U16,
        Self::U32,
        Self::U64,
        Self::I8,
        Self::I16,
        Self::I32,
        Self::I64,
        Self::Usize,
    ];

    /// Returns the signedness half of the descriptor
    #[must_use]
    pub const fn signedness(self) -> Signedness {
        match self {
            Self::I8 | Self::I16 | Self::I32 | Self::I64 => Signedness::Signed,
            Self::U8 | Self::U16 | Self::U32 | Self::U64 | Self::Usize => Signedness::Unsigned,
        }
    }

    /// Returns true for the signed kinds
    #[must_use]
    pub const fn is_signed(self) -> bool {
        matches!(self.signedness(), Signedness::Signed)
    }

    /// Returns the width in bits on the compilation target
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits_for(PointerWidth::TARGET)
    }

    /// Returns the width in bits, taking `usize` from `width`
    #[must_use]
    pub const fn bits_for(self, width: PointerWidth) -> u32 {
        match self {
            Self::U8 | Self::I8 => 8,
            Self::U16 | Self::I16 => 16,
            Self::U32 | Self::I32 => 32,
            Self::U64 | Self::I64 => 64,
            Self::Usize => width.bits(),
        }
    }

    /// Largest value a literal of this kind may spell, on the compilation target
    #[must_use]
    pub const fn max_value(self) -> u64 {
        self.max_value_for(PointerWidth::TARGET)
    }

    /// Largest value a literal of this kind may spell.
    ///
    /// For signed kinds this is the positive maximum `2^(bits-1) - 1`: the
    /// digits never carry the sign, so the minimum value is out of reach.
    #[must_use]
    pub const fn max_value_for(self, width: PointerWidth) -> u64 {
        let bits = self.bits_for(width);
        match self.signedness() {
            Signedness::Unsigned => u64::MAX >> (64 - bits),
            Signedness::Signed => u64::MAX >> (65 - bits),
        }
    }

    /// Returns the suffix without its leading underscore
    #[must_use]
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Usize => "z",
        }
    }

    /// Returns the Rust type name
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Usize => "usize",
        }
    }

    /// Looks up a kind by suffix, without the underscore
    #[must_use]
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.suffix() == suffix)
    }

    /// Message reported when a literal of this kind fails its range check
    /// during constant evaluation
    #[must_use]
    pub const fn out_of_range_message(self) -> &'static str {
        match self {
            Self::U8 => "u8 literal out of range",
            Self::U16 => "u16 literal out of range",
            Self::U32 => "u32 literal out of range",
            Self::U64 => "u64 literal out of range",
            Self::I8 => "i8 literal out of range; write i8::MIN for the minimum value",
            Self::I16 => "i16 literal out of range; write i16::MIN for the minimum value",
            Self::I32 => "i32 literal out of range; write i32::MIN for the minimum value",
            Self::I64 => "i64 literal out of range; write i64::MIN for the minimum value",
            Self::Usize => "usize literal out of range",
        }
    }
}

impl fmt::Display for IntKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A range-checked literal value in its target representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypedValue {
    /// `u8` value
    U8(u8),
    /// `u16` value
    U16(u16),
    /// `u32` value
    U32(u32),
    /// `u64` value
    U64(u64),
    /// `i8` value
    I8(i8),
    /// `i16` value
    I16(i16),
    /// `i32` value
    I32(i32),
    /// `i64` value
    I64(i64),
    /// `usize` value, in the width of the running process
    Usize(usize),
}

impl TypedValue {
    /// Truncates `value` into the representation of `kind`
    #[must_use]
    pub fn from_bits(kind: IntKind, value: u64) -> Self {
        match kind {
            IntKind::U8 => Self::U8(value as u8),
            IntKind::U16 => Self::U16(value as u16),
            IntKind::U32 => Self::U32(value as u32),
            IntKind::U64 => Self::U64(value),
            IntKind::I8 => Self::I8(value as i8),
            IntKind::I16 => Self::I16(value as i16),
            IntKind::I32 => Self::I32(value as i32),
            IntKind::I64 => Self::I64(value as i64),
            IntKind::Usize => Self::Usize(value as usize),
        }
    }

    /// Returns the kind of the stored value
    #[must_use]
    pub const fn kind(self) -> IntKind {
        match self {
            Self::U8(_) => IntKind::U8,
            Self::U16(_) => IntKind::U16,
            Self::U32(_) => IntKind::U32,
            Self::U64(_) => IntKind::U64,
            Self::I8(_) => IntKind::I8,
            Self::I16(_) => IntKind::I16,
            Self::I32(_) => IntKind::I32,
            Self::I64(_) => IntKind::I64,
            Self::Usize(_) => IntKind::Usize,
        }
    }

    /// Widens the value without loss
    #[must_use]
    pub const fn as_i128(self) -> i128 {
        match self {
            Self::U8(value) => value as i128,
            Self::U16(value) => value as i128,
            Self::U32(value) => value as i128,
            Self::U64(value) => value as i128,
            Self::I8(value) => value as i128,
            Self::I16(value) => value as i128,
            Self::I32(value) => value as i128,
            Self::I64(value) => value as i128,
            Self::Usize(value) => value as i128,
        }
    }

    /// Two's complement negation; unsigned values are returned unchanged
    #[must_use]
    pub const fn wrapping_neg(self) -> Self {
        match self {
            Self::I8(value) => Self::I8(value.wrapping_neg()),
            Self::I16(value) => Self::I16(value.wrapping_neg()),
            Self::I32(value) => Self::I32(value.wrapping_neg()),
            Self::I64(value) => Self::I64(value.wrapping_neg()),
            unsigned => unsigned,
        }
    }
}

impl fmt::Display for TypedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::U8(value) => write!(f, "{value}")?,
            Self::U16(value) => write!(f, "{value}")?,
            Self::U32(value) => write!(f, "{value}")?,
            Self::U64(value) => write!(f, "{value}")?,
            Self::I8(value) => write!(f, "{value}")?,
            Self::I16(value) => write!(f, "{value}")?,
            Self::I32(value) => write!(f, "{value}")?,
            Self::I64(value) => write!(f, "{value}")?,
            Self::Usize(value) => write!(f, "{value}")?,
        }
        f.write_str(self.kind().type_name())
    }
}

mod sealed {
    pub trait Sealed {}
}

/// Integer types a literal can be checked against
///
/// Sealed: implemented for the nine suffix types only.
pub trait LiteralTarget: sealed::Sealed + Copy {
    /// Descriptor for this type
    const KIND: IntKind;

    /// Truncates a range-checked value into `Self`
    fn from_literal(value: u64) -> Self;
}

macro_rules! literal_targets {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl sealed::Sealed for $ty {}

            impl LiteralTarget for $ty {
                const KIND: IntKind = IntKind::$kind;

                fn from_literal(value: u64) -> Self {
                    value as Self
                }
            }
        )*
    };
}

literal_targets! {
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    usize => Usize,
}
