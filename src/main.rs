//! `linegroups` reads text from stdin and prints its non-empty lines, or its groups of non-empty
//! lines separated by blank lines.

use std::io::Write;

use clap::Parser;
use linegroups::cli;
use linegroups::SplitOpts;
use linegroups::TracingOpts;
use miette::IntoDiagnostic;
use miette::WrapErr;

fn main() -> miette::Result<()> {
    miette::set_panic_hook();
    let opts = cli::Opts::parse();
    TracingOpts::from_cli(&opts).install()?;
    ::tracing::debug!(?opts, "Parsed command-line arguments");

    let input = std::io::read_to_string(std::io::stdin())
        .into_diagnostic()
        .wrap_err("Failed to read stdin")?;
    ::tracing::debug!(bytes = input.len(), "Read input");

    let output = SplitOpts::from_cli(&opts).split(&input)?;

    std::io::stdout()
        .lock()
        .write_all(output.as_bytes())
        .into_diagnostic()
        .wrap_err("Failed to write output")?;

    Ok(())
}
