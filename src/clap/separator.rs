//! Adapter for parsing [`Separator`] patterns with a [`clap::builder::Arg::value_parser`].

use clap::builder::StringValueParser;
use clap::builder::TypedValueParser;
use clap::builder::ValueParserFactory;
use miette::Report;

use super::value_validation_error;
use crate::separator::Separator;

/// [`clap`] parser for [`Separator`] values, which are compiled as regular expressions.
#[derive(Default, Clone)]
pub struct SeparatorValueParser {
    inner: StringValueParser,
}

impl TypedValueParser for SeparatorValueParser {
    type Value = Separator;

    fn parse_ref(
        &self,
        cmd: &clap::Command,
        arg: Option<&clap::Arg>,
        value: &std::ffi::OsStr,
    ) -> Result<Self::Value, clap::Error> {
        self.inner.parse_ref(cmd, arg, value).and_then(|pattern| {
            Separator::pattern(&pattern).map_err(|err| {
                let diagnostic = Report::new(err);
                value_validation_error(arg, &pattern, format!("{diagnostic:?}"))
            })
        })
    }
}

impl ValueParserFactory for Separator {
    type Parser = SeparatorValueParser;

    fn value_parser() -> Self::Parser {
        Self::Parser::default()
    }
}
