//! Error taxonomy for caesar-cipher.
//!
//! Every component returns `Result<_, CipherError>`; only the binary's
//! `main` turns an error into process termination.

use thiserror::Error;

/// Literal header printed before every error message.
pub const ERROR_PREFIX: &str = "caesar-cipher: error: ";

/// Process exit code for argument and usage errors.
pub const EXIT_USAGE: u8 = 1;

/// Process exit code for runtime (I/O, allocation) errors.
pub const EXIT_RUNTIME: u8 = 2;

/// Error conditions the tool can report.
///
/// The display text of each variant is the exact single-line cause the CLI
/// prints after [`ERROR_PREFIX`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Fewer arguments than a complete transform request requires
    #[error("missing arguments")]
    MissingArguments,

    /// More arguments than a transform request accepts
    #[error("too many arguments")]
    TooManyArguments,

    /// A flag or mode token that is not part of the CLI surface
    #[error("unrecognized arguments {0}")]
    UnrecognizedArgument(String),

    /// Key token did not parse as an integer
    #[error("invalid key")]
    InvalidKey,

    /// Empty or overlong input/output filename
    #[error("filename {0} invalid")]
    InvalidFilename(String),

    /// Input file could not be opened or read
    #[error("the file {0} does not exist")]
    FileNotFound(String),

    /// Output file could not be created or written
    #[error("impossible to write in file {0}")]
    WriteFailure(String),

    /// Buffer allocation for the file contents failed
    #[error("memory allocation failure")]
    OutOfMemory,
}

impl CipherError {
    /// Map the error class to a process exit code.
    ///
    /// Usage errors and runtime errors get distinct codes. The original
    /// tool used one generic failure code; callers relying on it only need
    /// "non-zero", which both classes satisfy.
    pub fn exit_code(&self) -> u8 {
        match self {
            CipherError::MissingArguments
            | CipherError::TooManyArguments
            | CipherError::UnrecognizedArgument(_)
            | CipherError::InvalidKey
            | CipherError::InvalidFilename(_) => EXIT_USAGE,
            CipherError::FileNotFound(_)
            | CipherError::WriteFailure(_)
            | CipherError::OutOfMemory => EXIT_RUNTIME,
        }
    }
}
