//! Whole-file loader and writer.
//!
//! The tool targets small configuration and text files, so both directions
//! move the complete contents through one in-memory buffer. Handles are
//! scoped and close on every path, including errors.

use std::fs::File;
use std::io::{Read, Write};

use crate::error::CipherError;

/// Read the entire file at `path` into a freshly allocated buffer.
///
/// One metadata query sizes the buffer, one read pass copies the bytes.
/// The allocation goes through `try_reserve_exact` so an allocation failure
/// surfaces as [`CipherError::OutOfMemory`] instead of aborting the process.
pub fn load(path: &str) -> Result<Vec<u8>, CipherError> {
    let mut file =
        File::open(path).map_err(|_| CipherError::FileNotFound(path.to_string()))?;
    let len = file
        .metadata()
        .map(|m| m.len() as usize)
        .map_err(|_| CipherError::FileNotFound(path.to_string()))?;

    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(len)
        .map_err(|_| CipherError::OutOfMemory)?;
    file.read_to_end(&mut buffer)
        .map_err(|_| CipherError::FileNotFound(path.to_string()))?;

    Ok(buffer)
}

/// Write `data` verbatim to `path`, creating or truncating the file.
///
/// Single best-effort attempt: a failure mid-write may leave a partial
/// output file behind.
pub fn save(path: &str, data: &[u8]) -> Result<(), CipherError> {
    let mut file =
        File::create(path).map_err(|_| CipherError::WriteFailure(path.to_string()))?;
    file.write_all(data)
        .map_err(|_| CipherError::WriteFailure(path.to_string()))?;
    Ok(())
}
