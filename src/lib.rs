//! `linegroups` splits text into non-empty lines, or into groups of non-empty lines separated by
//! blank lines.
//!
//! ```
//! use linegroups::grouped_lines;
//! use linegroups::non_empty_lines;
//!
//! assert_eq!(non_empty_lines("a\nb\n\n\nc\n"), vec!["a", "b", "c"]);
//! assert_eq!(
//!     grouped_lines("a\nb\nc\n\nx\ny\nz\n"),
//!     vec![vec!["a", "b", "c"], vec!["x", "y", "z"]],
//! );
//! ```
//!
//! Both splitters take a custom [`Separator`] through their `_by` variants, which may be a
//! literal string or a regular expression.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod clap;
pub mod cli;
mod lines;
mod lines_ext;
mod output;
mod separator;
mod split_opts;
mod tracing;

pub use lines::grouped_lines;
pub use lines::grouped_lines_by;
pub use lines::non_empty_lines;
pub use lines::non_empty_lines_by;
pub use lines::LineGroups;
pub use lines::Lines;
pub use lines_ext::LinesExt;
pub use output::join_groups;
pub use output::join_lines;
pub use output::render_groups;
pub use output::render_lines;
pub use output::OutputFormat;
pub use separator::Separator;
pub use separator::SeparatorError;
pub use split_opts::SplitOpts;
pub use tracing::TracingOpts;
