//! caesar-cipher CLI entry point
//!
//! Byte-shift Caesar cipher for files: encrypt or decrypt a whole file
//! with an integer key.

use caesar_cipher::cli::args::Invocation;
use caesar_cipher::error::ERROR_PREFIX;
use caesar_cipher::version::get_build_info;
use caesar_cipher::{run_request, CipherError, Operation};

use std::process::ExitCode;

fn main() -> ExitCode {
    // Parse command line arguments
    let invocation = match Invocation::parse() {
        Ok(invocation) => invocation,
        Err(e) => return fail(&e),
    };

    match invocation {
        Invocation::Help => {
            print_help();
            ExitCode::SUCCESS
        }
        Invocation::Version => {
            print_version();
            ExitCode::SUCCESS
        }
        Invocation::Transform(request) => match run_request(&request) {
            Ok(()) => {
                match request.operation {
                    Operation::Encrypt => println!("file successfully encrypted"),
                    Operation::Decrypt => println!("file successfully decrypted"),
                }
                ExitCode::SUCCESS
            }
            Err(e) => fail(&e),
        },
    }
}

/// Print the uniform error line and map the error class to an exit code.
///
/// Diagnostics go to stdout, not stderr.
fn fail(error: &CipherError) -> ExitCode {
    println!("{}{}", ERROR_PREFIX, error);
    ExitCode::from(error.exit_code())
}

fn print_version() {
    println!("{}", get_build_info());
}

fn print_help() {
    println!(
        r#"caesar-cipher - byte-shift Caesar cipher for files

USAGE:
    caesar-cipher [-e | -d] <key> <input_file> <output_file>

FLAGS:
    -d, --decrypt     decrypt input_file with the given key
    -e, --encrypt     encrypt input_file with the given key
    -h, --help        display this help and exit
    -v, --version     display version and exit"#
    );
}
