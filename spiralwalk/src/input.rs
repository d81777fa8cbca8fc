//! JSON matrix documents
//!
//! A matrix document is either `null` (an absent matrix) or an array whose
//! entries are `null` (an absent row) or arrays of integers:
//!
//! ```json
//! [[2, 3, 4, 8], null, [1, 0, 6, 10]]
//! ```

use serde::de::DeserializeOwned;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
};

use crate::MatrixElement;

/// A matrix as read from JSON: possibly absent, with possibly absent rows
pub type JsonMatrix<T> = Option<Vec<Option<Vec<T>>>>;

/// Errors raised while loading matrices or settings
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// Reading from a stream failed
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    /// A named file could not be opened or read
    #[error("failed to read {}: {source}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The document is not valid JSON for the requested shape
    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parse a matrix document from a reader
///
/// Values that do not fit `T` are reported as [`InputError::Json`].
pub fn read_matrix<T, R>(reader: R) -> Result<JsonMatrix<T>, InputError>
where
    T: MatrixElement + DeserializeOwned,
    R: Read,
{
    let matrix = serde_json::from_reader(reader)?;
    Ok(matrix)
}

/// Parse a matrix document from a string
pub fn parse_matrix<T>(json: &str) -> Result<JsonMatrix<T>, InputError>
where
    T: MatrixElement + DeserializeOwned,
{
    let matrix = serde_json::from_str(json)?;
    Ok(matrix)
}

/// Parse a matrix document from a file
pub fn read_matrix_file<T, P>(path: P) -> Result<JsonMatrix<T>, InputError>
where
    T: MatrixElement + DeserializeOwned,
    P: AsRef<Path>,
{
    let file = open(path.as_ref())?;
    read_matrix(BufReader::new(file))
}

/// Open a file, attaching its path to any error
pub(crate) fn open(path: &Path) -> Result<File, InputError> {
    File::open(path).map_err(|source| InputError::File {
        path: path.to_path_buf(),
        source,
    })
}
