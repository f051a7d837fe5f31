use std::process;

use clap::Parser;
use log::LevelFilter;
use urlcode::Cli;

fn main() {
    let cli = Cli::parse();

    // Progress and diagnostics go through the log facade to stderr.
    // --verbose widens the filter to per-unit progress; RUST_LOG still
    // overrides either way.
    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            LevelFilter::Info
        } else {
            LevelFilter::Warn
        })
        .format_timestamp(None)
        .parse_default_env()
        .init();

    let stdin_is_tty = atty::is(atty::Stream::Stdin);

    if let Err(err) = urlcode::run(cli, stdin_is_tty) {
        log::error!("{err}");
        process::exit(err.exit_code());
    }
}
