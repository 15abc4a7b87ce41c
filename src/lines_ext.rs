//! The [`LinesExt`] trait, for splitting any string-like value into lines.

use crate::lines::grouped_lines;
use crate::lines::non_empty_lines;
use crate::lines::LineGroups;
use crate::lines::Lines;

/// Extension for splitting strings into lines and groups of lines.
pub trait LinesExt {
    /// Split into non-empty lines. See [`non_empty_lines`].
    fn non_empty_lines(&self) -> Lines;

    /// Split into groups of non-empty lines separated by blank lines. See [`grouped_lines`].
    fn grouped_lines(&self) -> LineGroups;
}

impl<S> LinesExt for S
where
    S: AsRef<str>,
{
    fn non_empty_lines(&self) -> Lines {
        non_empty_lines(self.as_ref())
    }

    fn grouped_lines(&self) -> LineGroups {
        grouped_lines(self.as_ref())
    }
}
