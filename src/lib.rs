//! Percent-encoding and decoding for command-line text.
//!
//! The pipeline is linear: select and normalize the input into ordered
//! text units, run each unit through the codec, then serialize the
//! results. All fallible steps return [`Error`]; printing and process
//! exit stay in the binary.

pub mod batch;
pub mod charset;
pub mod cli;
pub mod codec;
pub mod error;
pub mod input;
pub mod output;

pub use charset::Charset;
pub use cli::Cli;
pub use codec::Mode;
pub use error::{DecodeError, Error};

use input::Source;

/// Execute one full run with already-parsed arguments. `stdin_is_tty`
/// is determined by the caller so the pipeline itself never touches the
/// terminal.
pub fn run(cli: Cli, stdin_is_tty: bool) -> Result<(), Error> {
    let mode = cli.mode();
    let charset = Charset::resolve(&cli.encoding)?;
    let units = Source::select(cli.data, cli.input_file, stdin_is_tty).read_units()?;
    let results = batch::process(&units, mode, charset)?;
    output::write(&results, cli.output_file.as_deref())
}
