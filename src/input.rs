//! Input source selection and normalization.
//!
//! Every run draws from exactly one source. An explicit `--input-file`
//! wins over piped stdin, and piped stdin wins over inline `--data`
//! values; the terminal check happens once at the process boundary and
//! is passed in, so selection stays a pure decision.

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::error::Error;

/// Where the input units of a run come from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Stdin,
    Data(Vec<String>),
}

impl Source {
    /// Pick the source for this invocation. `stdin_is_tty` reflects
    /// whether stdin is attached to a terminal; a terminal means there is
    /// no piped stream to read.
    pub fn select(data: Vec<String>, input_file: Option<PathBuf>, stdin_is_tty: bool) -> Self {
        if let Some(path) = input_file {
            Source::File(path)
        } else if !stdin_is_tty {
            Source::Stdin
        } else {
            Source::Data(data)
        }
    }

    /// Read the source to completion and normalize it into processing
    /// units: one unit per line (or per `--data` value), trimmed of
    /// surrounding whitespace, empties dropped, original order kept.
    /// A run with nothing left to process fails here, before any
    /// transform starts.
    pub fn read_units(self) -> Result<Vec<String>, Error> {
        let units = match self {
            Source::File(path) => {
                let content = fs::read_to_string(&path)
                    .map_err(|source| Error::ReadInput { path, source })?;
                split_units(content.lines())
            }
            Source::Stdin => {
                let mut content = String::new();
                io::stdin()
                    .read_to_string(&mut content)
                    .map_err(|source| Error::ReadStdin { source })?;
                split_units(content.lines())
            }
            Source::Data(values) => split_units(values.iter().map(String::as_str)),
        };
        if units.is_empty() {
            return Err(Error::EmptyInput);
        }
        Ok(units)
    }
}

fn split_units<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    raw.map(str::trim)
        .filter(|unit| !unit.is_empty())
        .map(str::to_string)
        .collect()
}
