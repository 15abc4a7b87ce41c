//! The [`Separator`] type, a literal string or regular expression to split text on.

use std::fmt::Display;
use std::ops::Range;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

/// An optional carriage return followed by a line feed.
static NEWLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n").expect("Newline pattern failed to compile"));

/// Two newlines back to back; that is, a blank line.
static BLANK_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\r?\n\r?\n").expect("Blank line pattern failed to compile"));

/// An error constructing a [`Separator`].
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum SeparatorError {
    /// The separator pattern isn't a valid regular expression.
    #[error("Invalid separator pattern `{pattern}`")]
    #[diagnostic(
        code(linegroups::invalid_pattern),
        help("Separator patterns use Rust `regex` syntax; escape metacharacters with `\\` or split on a literal string instead")
    )]
    InvalidPattern {
        /// The pattern as given.
        pattern: String,
        /// The underlying compilation error.
        #[source]
        source: regex::Error,
    },
}

/// Text to split a string on, either a literal string or a regular expression.
///
/// Both kinds split the same way: the input is cut at every non-overlapping occurrence of the
/// separator, left to right. See [`Separator::split`].
#[derive(Debug, Clone)]
pub enum Separator {
    /// Split on every occurrence of this exact string.
    Literal(String),
    /// Split on every match of this regular expression.
    Pattern(Regex),
}

impl Separator {
    /// The default line separator: a line feed, optionally preceded by a carriage return.
    pub fn newline() -> Self {
        Self::Pattern(NEWLINE.clone())
    }

    /// The default group separator: two [`Separator::newline`]s in a row.
    pub fn blank_line() -> Self {
        Self::Pattern(BLANK_LINE.clone())
    }

    /// Split on a literal string.
    pub fn literal(text: impl Into<String>) -> Self {
        Self::Literal(text.into())
    }

    /// Split on a regular expression.
    ///
    /// Returns `Err` if the pattern fails to compile.
    pub fn pattern(pattern: &str) -> Result<Self, SeparatorError> {
        Regex::new(pattern)
            .map(Self::Pattern)
            .map_err(|source| SeparatorError::InvalidPattern {
                pattern: pattern.to_owned(),
                source,
            })
    }

    /// The literal text or pattern source of this separator.
    pub fn as_str(&self) -> &str {
        match self {
            Separator::Literal(text) => text,
            Separator::Pattern(regex) => regex.as_str(),
        }
    }

    /// Split the `input` into segments at every occurrence of this separator.
    ///
    /// Segments are returned in input order and are not filtered; consecutive separators
    /// produce empty segments between them. An input with no occurrences is a single segment,
    /// so `""` splits to `[""]` unless the separator matches the empty string.
    ///
    /// Empty matches at the start or end of the input, or immediately after the previous match,
    /// are not split points. An empty separator therefore splits a string into its characters.
    pub fn split<'s>(&self, input: &'s str) -> Vec<&'s str> {
        let segments = match self {
            Separator::Literal(text) => split_at_matches(
                input,
                input
                    .match_indices(text.as_str())
                    .map(|(start, found)| start..start + found.len()),
            ),
            Separator::Pattern(regex) => {
                split_at_matches(input, regex.find_iter(input).map(|found| found.range()))
            }
        };
        tracing::trace!(separator = %self, segments = segments.len(), "Split input");
        segments
    }
}

/// Cut `input` at the given match ranges, which must be sorted and non-overlapping.
fn split_at_matches<'s>(
    input: &'s str,
    matches: impl Iterator<Item = Range<usize>>,
) -> Vec<&'s str> {
    let mut matches = matches.peekable();

    if input.is_empty() {
        return if matches.peek().is_some() {
            Vec::new()
        } else {
            vec![input]
        };
    }

    let mut segments = Vec::new();
    let mut start = 0;
    for found in matches {
        if found.is_empty() && (found.start == start || found.start == input.len()) {
            continue;
        }
        segments.push(&input[start..found.start]);
        start = found.end;
    }
    segments.push(&input[start..]);
    segments
}

impl Default for Separator {
    fn default() -> Self {
        Self::newline()
    }
}

impl Display for Separator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl PartialEq for Separator {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Separator::Literal(left), Separator::Literal(right)) => left == right,
            (Separator::Pattern(left), Separator::Pattern(right)) => {
                left.as_str() == right.as_str()
            }
            _ => false,
        }
    }
}

impl Eq for Separator {}

impl From<Regex> for Separator {
    fn from(regex: Regex) -> Self {
        Self::Pattern(regex)
    }
}

impl From<&str> for Separator {
    fn from(text: &str) -> Self {
        Self::literal(text)
    }
}

impl From<String> for Separator {
    fn from(text: String) -> Self {
        Self::literal(text)
    }
}

/// Parses a pattern; use [`Separator::literal`] for literal strings.
impl FromStr for Separator {
    type Err = SeparatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::pattern(s)
    }
}
