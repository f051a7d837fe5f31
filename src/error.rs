//! Error types for the `urlcode` pipeline.
//!
//! Everything that can go wrong at runtime is an [`Error`]; the process
//! boundary in `main` prints it and turns it into an exit code. Argument
//! errors never reach these types, `clap` reports them itself with exit
//! code 2.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A single input unit failed to decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// A `%` with fewer than two characters after it.
    #[error("incomplete percent escape at byte {offset}")]
    TruncatedEscape { offset: usize },

    /// A `%` followed by something other than two hex digits.
    #[error("invalid hex digit in percent escape at byte {offset}")]
    InvalidEscape { offset: usize },

    /// The percent-decoded bytes do not form valid text in the
    /// selected character encoding.
    #[error("decoded bytes are not valid {charset} text")]
    InvalidText { charset: &'static str },
}

/// Top-level runtime error. Every variant maps to exit code 1.
#[derive(Debug, Error)]
pub enum Error {
    /// Nothing left to process after normalization.
    #[error("input is empty: pass --data, --input-file, or pipe text on stdin")]
    EmptyInput,

    /// `--encoding` named a label the WHATWG registry does not know.
    #[error("unknown character encoding '{name}'")]
    UnknownEncoding { name: String },

    /// `--encoding` named a decode-only label (`utf-16le`, `utf-16be`,
    /// `replacement`).
    #[error("character encoding '{name}' is not supported: it has no byte encoder")]
    UnsupportedEncoding { name: String },

    /// One unit of the batch failed to decode; `index` is 1-based.
    #[error("input {index}: {source}")]
    Decode { index: usize, source: DecodeError },

    /// The input file could not be read.
    #[error("cannot read {}: {source}", .path.display())]
    ReadInput { path: PathBuf, source: io::Error },

    /// Piped standard input could not be read.
    #[error("cannot read stdin: {source}")]
    ReadStdin { source: io::Error },

    /// The output file could not be written.
    #[error("cannot write {}: {source}", .path.display())]
    WriteOutput { path: PathBuf, source: io::Error },

    /// Standard output went away mid-write.
    #[error("cannot write stdout: {source}")]
    WriteStdout { source: io::Error },
}

impl Error {
    /// Exit code for this failure. Success is 0 and usage errors exit 2
    /// through `clap`; every runtime failure lands here as 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
