//! Splitting text into non-empty [`Lines`] and blank-line-separated [`LineGroups`].

use crate::separator::Separator;

/// A group of lines of text, represented as a list.
pub type Lines = Vec<String>;

/// A list of [`Lines`] groups.
pub type LineGroups = Vec<Lines>;

/// Split the `input` into lines, dropping empty ones.
///
/// Lines end with a line feed, optionally preceded by a carriage return. Whitespace is kept, so
/// a line of spaces is not empty.
///
/// ```
/// # use linegroups::non_empty_lines;
/// assert_eq!(non_empty_lines("a\nb\n\n\nc\n"), vec!["a", "b", "c"]);
/// ```
pub fn non_empty_lines(input: &str) -> Lines {
    non_empty_lines_by(input, &Separator::newline())
}

/// Split the `input` at every occurrence of `separator`, dropping empty pieces.
pub fn non_empty_lines_by(input: &str, separator: &Separator) -> Lines {
    let lines: Lines = separator
        .split(input)
        .into_iter()
        .filter(|line| !line.is_empty())
        .map(ToOwned::to_owned)
        .collect();
    tracing::trace!(lines = lines.len(), "Collected non-empty lines");
    lines
}

/// Split the `input` into groups of lines separated by blank lines.
///
/// ```
/// # use linegroups::grouped_lines;
/// assert_eq!(
///     grouped_lines("a\nb\nc\n\nx\ny\nz\n"),
///     vec![vec!["a", "b", "c"], vec!["x", "y", "z"]],
/// );
/// ```
pub fn grouped_lines(input: &str) -> LineGroups {
    grouped_lines_by(input, &Separator::blank_line())
}

/// Split the `input` into groups at every occurrence of `group_separator`, then split each group
/// into [`non_empty_lines`].
///
/// Every segment between separators becomes a group, even if it has no non-empty lines. The
/// number of groups is always the number of segments from [`Separator::split`].
pub fn grouped_lines_by(input: &str, group_separator: &Separator) -> LineGroups {
    let newline = Separator::newline();
    let groups: LineGroups = group_separator
        .split(input)
        .into_iter()
        .map(|segment| non_empty_lines_by(segment, &newline))
        .collect();
    tracing::trace!(groups = groups.len(), "Collected line groups");
    groups
}
