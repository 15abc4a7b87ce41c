//! Command-line argument parser and argument access.

use clap::Parser;

use crate::output::OutputFormat;
use crate::separator::Separator;

/// Split text from stdin into non-empty lines or blank-line-separated groups of lines.
#[derive(Debug, Clone, Parser)]
#[command(version, author, about)]
#[command(max_term_width = 100)]
pub struct Opts {
    /// What to split the input into.
    #[arg(value_enum, default_value_t = Mode::Lines)]
    pub mode: Mode,

    /// A regular expression to split on instead of the default.
    ///
    /// In `lines` mode this replaces the line separator, `\r?\n`. In `groups` mode this replaces
    /// the group separator, `\r?\n\r?\n`; groups are still split into lines on `\r?\n`.
    #[arg(long, value_name = "PATTERN", allow_hyphen_values = true)]
    pub separator: Option<Separator>,

    /// Like `--separator`, but splits on the given text exactly as written.
    #[arg(
        long,
        value_name = "TEXT",
        allow_hyphen_values = true,
        conflicts_with = "separator"
    )]
    pub literal_separator: Option<String>,

    /// How to print the split output.
    #[arg(long, value_enum, default_value_t = OutputFormat::Plain)]
    pub format: OutputFormat,

    /// Options to modify logging behavior.
    #[command(flatten)]
    pub logging: LoggingOpts,
}

/// What to split the input into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Non-empty lines.
    Lines,
    /// Groups of non-empty lines, separated by blank lines.
    Groups,
}

/// Options to modify logging behavior.
#[derive(Debug, Clone, clap::Args)]
#[clap(next_help_heading = "Logging options")]
pub struct LoggingOpts {
    #[allow(rustdoc::bare_urls)]
    /// Tracing filter.
    ///
    /// Can be any of "error", "warn", "info", "debug", or
    /// "trace". Supports more granular filtering, as well.
    /// See: https://docs.rs/tracing-subscriber/latest/tracing_subscriber/filter/struct.EnvFilter.html
    ///
    /// Logs are written to stderr. A nice value is "linegroups=trace".
    #[arg(long, default_value = "linegroups=info")]
    pub tracing_filter: String,
}

impl Opts {
    /// The separator given on the command line, if any.
    pub fn separator(&self) -> Option<Separator> {
        match (&self.separator, &self.literal_separator) {
            (Some(separator), _) => Some(separator.clone()),
            (None, Some(text)) => Some(Separator::literal(text)),
            (None, None) => None,
        }
    }
}
