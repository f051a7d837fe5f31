//! Command-line surface.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

use crate::charset;
use crate::codec::Mode;

/// Encode or decode percent-encoded (URL-encoded) text.
#[derive(Parser, Debug)]
#[command(name = "urlcode", version, about)]
#[command(group(ArgGroup::new("transform").required(true).args(["url_encode", "url_decode"])))]
#[command(after_help = "\
Examples:
  urlcode --url-encode -d 'hello world'
  urlcode --url-decode -d hello%20world
  printf 'a b\\nc&d\\n' | urlcode --url-encode
  urlcode --url-encode -i input.txt -o output.txt -v
")]
pub struct Cli {
    /// Text to process; repeat the flag for several units
    #[arg(short, long, value_name = "TEXT")]
    pub data: Vec<String>,

    /// Read input lines from this file instead
    #[arg(short, long, value_name = "PATH")]
    pub input_file: Option<PathBuf>,

    /// Write results to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output_file: Option<PathBuf>,

    /// Character encoding for the text<->bytes conversion
    #[arg(short, long, value_name = "NAME", default_value = charset::DEFAULT_LABEL)]
    pub encoding: String,

    /// Percent-encode the input
    #[arg(long)]
    pub url_encode: bool,

    /// Decode percent-encoded input
    #[arg(long)]
    pub url_decode: bool,

    /// Report progress for every processed unit on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// The requested transform direction. The argument group guarantees
    /// exactly one of the two flags is set.
    pub fn mode(&self) -> Mode {
        if self.url_encode {
            Mode::Encode
        } else {
            Mode::Decode
        }
    }
}
