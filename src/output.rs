//! Result serialization: one line per input unit, to stdout or a file.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::error::Error;

/// Write the finished batch. With a path the results are joined with
/// newlines and written in one shot, replacing any existing file and
/// leaving no trailing newline. Without one each result goes to stdout
/// on its own line.
pub fn write(results: &[String], path: Option<&Path>) -> Result<(), Error> {
    match path {
        Some(path) => fs::write(path, results.join("\n")).map_err(|source| Error::WriteOutput {
            path: path.to_path_buf(),
            source,
        }),
        None => write_stdout(results),
    }
}

fn write_stdout(results: &[String]) -> Result<(), Error> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in results {
        writeln!(out, "{line}").map_err(|source| Error::WriteStdout { source })?;
    }
    out.flush().map_err(|source| Error::WriteStdout { source })
}
