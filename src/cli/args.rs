//! Argument parser for caesar-cipher.
//!
//! Hand-rolled parsing over the raw argument list. The grammar is closed:
//! either a single informational flag, or exactly four arguments forming a
//! transform request. Anything else is an arity error.

use std::env;

use crate::cipher::Operation;
use crate::error::CipherError;

/// Default maximum accepted filename length, in bytes.
///
/// Matches common platform filename conventions (NAME_MAX). The bound is a
/// validation rule, not an architectural constraint; override it through
/// [`ParserLimits`].
pub const DEFAULT_MAX_FILENAME_LEN: usize = 255;

/// Tunable validation limits for the parser.
#[derive(Debug, Clone)]
pub struct ParserLimits {
    /// Longest filename accepted for the input and output paths
    pub max_filename_len: usize,
}

impl Default for ParserLimits {
    fn default() -> Self {
        ParserLimits {
            max_filename_len: DEFAULT_MAX_FILENAME_LEN,
        }
    }
}

/// A validated transform request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherRequest {
    /// Whether to add or subtract the key
    pub operation: Operation,
    /// Shift amount; reduced modulo 256 by the transform
    pub key: i64,
    /// File to read
    pub input_path: String,
    /// File to write
    pub output_path: String,
}

/// What a command line resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Print usage text and exit successfully
    Help,
    /// Print the version line and exit successfully
    Version,
    /// Load, shift, and save a file
    Transform(CipherRequest),
}

impl Invocation {
    /// Parse the process arguments from `std::env::args()`.
    pub fn parse() -> Result<Self, CipherError> {
        let args: Vec<String> = env::args().skip(1).collect();
        Self::parse_from(&args)
    }

    /// Parse from a slice with default limits (for testing).
    pub fn parse_from(args: &[String]) -> Result<Self, CipherError> {
        Self::parse_with_limits(args, &ParserLimits::default())
    }

    /// Parse from a slice with explicit limits.
    pub fn parse_with_limits(
        args: &[String],
        limits: &ParserLimits,
    ) -> Result<Self, CipherError> {
        match args.len() {
            // A transform needs mode, key and both paths; 1 is the
            // informational-flag form handled below.
            0 | 2 | 3 => Err(CipherError::MissingArguments),

            1 => match args[0].as_str() {
                "--version" | "-v" => Ok(Invocation::Version),
                "--help" | "-h" => Ok(Invocation::Help),
                other => Err(CipherError::UnrecognizedArgument(other.to_string())),
            },

            4 => {
                let operation = match args[0].as_str() {
                    "--encrypt" | "-e" => Operation::Encrypt,
                    "--decrypt" | "-d" => Operation::Decrypt,
                    other => {
                        return Err(CipherError::UnrecognizedArgument(other.to_string()))
                    }
                };
                let key: i64 = args[1].parse().map_err(|_| CipherError::InvalidKey)?;
                let input_path = validated_filename(&args[2], limits)?;
                let output_path = validated_filename(&args[3], limits)?;

                Ok(Invocation::Transform(CipherRequest {
                    operation,
                    key,
                    input_path,
                    output_path,
                }))
            }

            _ => Err(CipherError::TooManyArguments),
        }
    }
}

fn validated_filename(name: &str, limits: &ParserLimits) -> Result<String, CipherError> {
    if name.is_empty() || name.len() > limits.max_filename_len {
        return Err(CipherError::InvalidFilename(name.to_string()));
    }
    Ok(name.to_string())
}
