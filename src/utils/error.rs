/// Error taxonomy for the converter
///
/// Every failure the analyzer or converter can hit falls into one of three
/// conditions: the input file is missing, some other read or write problem
/// occurred, or the hex payload could not be decoded. All of them are caught
/// at the entry point and reported; none abort the process.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised by the analyzer and converter operations
#[derive(Error, Debug)]
pub enum ConvertError {
    /// The input capture file does not exist
    #[error("file '{}' not found", .path.display())]
    InputNotFound { path: PathBuf },

    /// Any other read or write failure, including non-UTF-8 input
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The filtered payload could not be decoded as hex pairs
    #[error("error converting hex to binary: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

/// Crate-local result alias
pub type Result<T> = std::result::Result<T, ConvertError>;
