//! Matrix element type constraints
//!
//! This module defines the trait that constrains what types can be
//! stored as cells of a walked matrix, and the tag naming each of them.

/// Element types a matrix may hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum DataType {
    I8 = 0,
    I16 = 1,
    #[default]
    I32 = 2,
    I64 = 3,
    Isize = 4,
    U8 = 5,
    U16 = 6,
    U32 = 7,
    U64 = 8,
    Usize = 9,
}

impl DataType {
    /// Every supported tag, signed types first
    pub const ALL: [DataType; 10] = [
        DataType::I8,
        DataType::I16,
        DataType::I32,
        DataType::I64,
        DataType::Isize,
        DataType::U8,
        DataType::U16,
        DataType::U32,
        DataType::U64,
        DataType::Usize,
    ];

    /// Lowercase Rust name of the type
    pub const fn name(&self) -> &'static str {
        match self {
            DataType::I8 => "i8",
            DataType::I16 => "i16",
            DataType::I32 => "i32",
            DataType::I64 => "i64",
            DataType::Isize => "isize",
            DataType::U8 => "u8",
            DataType::U16 => "u16",
            DataType::U32 => "u32",
            DataType::U64 => "u64",
            DataType::Usize => "usize",
        }
    }

    /// True for the signed integer types
    pub const fn is_signed(&self) -> bool {
        matches!(
            self,
            DataType::I8 | DataType::I16 | DataType::I32 | DataType::I64 | DataType::Isize
        )
    }
}

impl core::fmt::Display for DataType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

impl core::str::FromStr for DataType {
    type Err = crate::SpiralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::validation::parse_data_type(s)
    }
}

/// Trait for types that can be stored as matrix cells
///
/// Cells are rendered with their `Display` implementation, which for the
/// integer types is canonical signed base-10 (`-2147483648`, `2147483647`).
/// All matrix element types must be:
/// - Copy: Can be copied without allocation
/// - PartialEq: Can be compared for equality
/// - Display: Can be rendered into walk output
pub trait MatrixElement: Copy + PartialEq + core::fmt::Display {
    /// Get the tag for this element type
    fn data_type() -> DataType;
}

macro_rules! impl_matrix_element {
    ($($ty:ty => $tag:ident),* $(,)?) => {
        $(
            impl MatrixElement for $ty {
                fn data_type() -> DataType {
                    DataType::$tag
                }
            }
        )*
    };
}

impl_matrix_element! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    isize => Isize,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    usize => Usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_type_tags() {
        assert_eq!(i32::data_type(), DataType::I32);
        assert_eq!(u64::data_type(), DataType::U64);
        assert!(DataType::I64.is_signed());
        assert!(!DataType::Usize.is_signed());
    }

    #[test]
    fn test_data_type_names_parse_back() {
        for data_type in DataType::ALL {
            assert_eq!(data_type.name().parse::<DataType>(), Ok(data_type));
        }
    }
}
