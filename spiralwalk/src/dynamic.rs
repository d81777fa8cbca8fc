//! Matrices whose element type is chosen at runtime
//!
//! The CLI learns the element type from a flag, so it loads documents into a
//! [`DynamicMatrix`] and dispatches walks through it.

use std::{io::Read, path::Path};

use crate::input::{open, parse_matrix, InputError, JsonMatrix};
use crate::{BoundingShape, DataType, SpiralWalker, Walk};

/// Matrix that can hold any supported element type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DynamicMatrix {
    I8(JsonMatrix<i8>),
    I16(JsonMatrix<i16>),
    I32(JsonMatrix<i32>),
    I64(JsonMatrix<i64>),
    Isize(JsonMatrix<isize>),
    U8(JsonMatrix<u8>),
    U16(JsonMatrix<u16>),
    U32(JsonMatrix<u32>),
    U64(JsonMatrix<u64>),
    Usize(JsonMatrix<usize>),
}

/// Apply `$body` to the inner matrix of every variant
macro_rules! dispatch {
    ($matrix:expr, $inner:ident => $body:expr) => {
        match $matrix {
            DynamicMatrix::I8($inner) => $body,
            DynamicMatrix::I16($inner) => $body,
            DynamicMatrix::I32($inner) => $body,
            DynamicMatrix::I64($inner) => $body,
            DynamicMatrix::Isize($inner) => $body,
            DynamicMatrix::U8($inner) => $body,
            DynamicMatrix::U16($inner) => $body,
            DynamicMatrix::U32($inner) => $body,
            DynamicMatrix::U64($inner) => $body,
            DynamicMatrix::Usize($inner) => $body,
        }
    };
}

impl DynamicMatrix {
    /// Parse a JSON document as a matrix of `data_type` cells
    pub fn parse(data_type: DataType, json: &str) -> Result<Self, InputError> {
        let matrix = match data_type {
            DataType::I8 => DynamicMatrix::I8(parse_matrix(json)?),
            DataType::I16 => DynamicMatrix::I16(parse_matrix(json)?),
            DataType::I32 => DynamicMatrix::I32(parse_matrix(json)?),
            DataType::I64 => DynamicMatrix::I64(parse_matrix(json)?),
            DataType::Isize => DynamicMatrix::Isize(parse_matrix(json)?),
            DataType::U8 => DynamicMatrix::U8(parse_matrix(json)?),
            DataType::U16 => DynamicMatrix::U16(parse_matrix(json)?),
            DataType::U32 => DynamicMatrix::U32(parse_matrix(json)?),
            DataType::U64 => DynamicMatrix::U64(parse_matrix(json)?),
            DataType::Usize => DynamicMatrix::Usize(parse_matrix(json)?),
        };
        Ok(matrix)
    }

    /// Read a whole JSON document from a reader
    pub fn from_reader<R: Read>(data_type: DataType, mut reader: R) -> Result<Self, InputError> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::parse(data_type, &json)
    }

    /// Read a JSON document from a file
    pub fn from_file<P: AsRef<Path>>(data_type: DataType, path: P) -> Result<Self, InputError> {
        let path = path.as_ref();
        let mut json = String::new();
        open(path)?
            .read_to_string(&mut json)
            .map_err(|source| InputError::File {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::debug!(path = %path.display(), %data_type, bytes = json.len(), "read matrix document");
        Self::parse(data_type, &json)
    }

    /// Element type of the held matrix
    pub fn data_type(&self) -> DataType {
        match self {
            DynamicMatrix::I8(_) => DataType::I8,
            DynamicMatrix::I16(_) => DataType::I16,
            DynamicMatrix::I32(_) => DataType::I32,
            DynamicMatrix::I64(_) => DataType::I64,
            DynamicMatrix::Isize(_) => DataType::Isize,
            DynamicMatrix::U8(_) => DataType::U8,
            DynamicMatrix::U16(_) => DataType::U16,
            DynamicMatrix::U32(_) => DataType::U32,
            DynamicMatrix::U64(_) => DataType::U64,
            DynamicMatrix::Usize(_) => DataType::Usize,
        }
    }

    /// True if the document was `null`
    pub fn is_absent(&self) -> bool {
        dispatch!(self, matrix => matrix.is_none())
    }

    /// Bounding shape of the held matrix
    pub fn shape(&self) -> BoundingShape {
        dispatch!(self, matrix => BoundingShape::of(matrix))
    }

    /// Walk the held matrix
    pub fn walk(&self, walker: &SpiralWalker) -> Walk {
        dispatch!(self, matrix => walker.walk(matrix))
    }
}
