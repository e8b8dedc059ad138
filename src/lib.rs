//! caesar-cipher library
//!
//! Applies a classical Caesar cipher — an additive byte shift with
//! modulo-256 wraparound — to whole files.
//!
//! The library side carries everything except process concerns:
//! - Argument parsing into a validated [`CipherRequest`]
//! - Whole-file loading into an owned byte buffer
//! - The in-place byte-shift transform
//! - Whole-file writing
//!
//! Every component returns `Result<_, CipherError>`; the binary's `main`
//! is the only place that prints diagnostics and chooses an exit code, so
//! each piece is testable without spawning a process.
//!
//! # Example
//!
//! ```no_run
//! use caesar_cipher::{run_request, CipherRequest, Operation};
//!
//! let request = CipherRequest {
//!     operation: Operation::Encrypt,
//!     key: 3,
//!     input_path: "notes.txt".to_string(),
//!     output_path: "notes.enc".to_string(),
//! };
//! run_request(&request).expect("transform failed");
//! ```

pub mod cipher;
pub mod cli;
pub mod error;
pub mod fileio;
pub mod version;

// Re-exports for public API
pub use cipher::Operation;
pub use cli::args::{CipherRequest, Invocation, ParserLimits};
pub use error::CipherError;

/// Run a transform request: load the input, shift every byte, save the
/// output.
///
/// The buffer is owned by this call for its whole lifetime; the transform
/// never changes its length. The first failing step wins and nothing is
/// retried — a writer failure may leave a partial output file behind.
pub fn run_request(request: &CipherRequest) -> Result<(), CipherError> {
    let mut data = fileio::load(&request.input_path)?;
    cipher::transform(&mut data, request.key, request.operation);
    fileio::save(&request.output_path, &data)
}
