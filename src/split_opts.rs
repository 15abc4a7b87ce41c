use crate::cli::Mode;
use crate::cli::Opts;
use crate::lines::grouped_lines_by;
use crate::lines::non_empty_lines_by;
use crate::output::render_groups;
use crate::output::render_lines;
use crate::output::OutputFormat;
use crate::separator::Separator;

/// Options for splitting and rendering a chunk of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitOpts {
    /// Whether to split into lines or groups.
    pub mode: Mode,
    /// The separator to split on. For [`Mode::Groups`], this separates groups rather than lines.
    pub separator: Separator,
    /// How to render the output.
    pub format: OutputFormat,
}

impl SplitOpts {
    /// Construct options from parsed command-line interface arguments as [`Opts`], filling in the
    /// default separator for the mode if none was given.
    pub fn from_cli(opts: &Opts) -> Self {
        let separator = opts.separator().unwrap_or_else(|| match opts.mode {
            Mode::Lines => Separator::newline(),
            Mode::Groups => Separator::blank_line(),
        });

        Self {
            mode: opts.mode,
            separator,
            format: opts.format,
        }
    }

    /// Split the `input` and render the result.
    #[tracing::instrument(level = "debug", skip_all, fields(mode = ?self.mode, separator = %self.separator))]
    pub fn split(&self, input: &str) -> miette::Result<String> {
        match self.mode {
            Mode::Lines => {
                let lines = non_empty_lines_by(input, &self.separator);
                tracing::debug!(lines = lines.len(), "Split input into lines");
                render_lines(&lines, self.format)
            }
            Mode::Groups => {
                let groups = grouped_lines_by(input, &self.separator);
                tracing::debug!(groups = groups.len(), "Split input into groups");
                render_groups(&groups, self.format)
            }
        }
    }
}
