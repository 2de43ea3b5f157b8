use anyhow::Error;
use log::debug;
use simplelog::{Config, LevelFilter, WriteLogger};
use std::io::stderr;
use std::process::exit;

use empty_project::output::write_blank_line;

/// Emit the blank line and finish. Command-line arguments and environment
/// variables are accepted and ignored; no flags are recognized.
fn run() -> Result<(), Error> {
    debug!("writing blank line to stdout");

    let stdout = std::io::stdout();

    write_blank_line(&mut stdout.lock())?;

    Ok(())
}

fn main() -> Result<(), Error> {
    // Log records go to stderr so stdout stays exactly one newline.
    WriteLogger::init(LevelFilter::Info, Config::default(), stderr())?;

    run()?;

    exit(0)
}
