//! Error types for GRP archive operations

use std::path::PathBuf;
use thiserror::Error;

/// GRP operation result type
pub type GrpResult<T> = Result<T, GrpError>;

/// Everything that can go wrong while reading a GRP archive
#[derive(Debug, Error)]
pub enum GrpError {
    /// The archive itself could not be opened
    #[error("Cannot read file '{}'", path.display())]
    Open {
        /// Path that was passed to the opener
        path: PathBuf,
        /// Underlying OS error
        #[source]
        source: std::io::Error,
    },

    /// Bad signature or a malformed header table
    #[error("Invalid GRP file: {0}")]
    Format(String),

    /// Requested member is not in the directory
    #[error("File '{0}' not found in GRP")]
    NotFound(String),

    /// Seek, read or write failure on the archive or the output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Allocation for the directory or a payload buffer failed
    #[error("Failed allocation: {0}")]
    Resource(String),
}

impl GrpError {
    /// Process exit code the CLI reports for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            GrpError::Io(_) => 1,
            GrpError::Open { .. } => 3,
            GrpError::Format(_) => 4,
            GrpError::Resource(_) => 5,
            GrpError::NotFound(_) => 6,
        }
    }
}
