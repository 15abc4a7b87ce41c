//! Adapters for parsing [`clap`] arguments to various types.

use std::fmt::Display;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stderr;

mod separator;

/// Construct a [`clap::Error`] formatted like clap's own value-validation errors, which are only
/// constructible through a private API.
///
/// See: <https://github.com/clap-rs/clap/issues/5065>
pub fn value_validation_error(
    arg: Option<&clap::Arg>,
    bad_value: &str,
    message: impl Display,
) -> clap::Error {
    let arg = arg
        .map(ToString::to_string)
        .unwrap_or_else(|| "...".to_owned());
    clap::Error::raw(
        clap::error::ErrorKind::ValueValidation,
        format!(
            "invalid value '{bad_value}' for '{arg}': {message}\n\n\
            For more information, try '{help}'.\n",
            bad_value = bad_value.if_supports_color(Stderr, |text| text.yellow()),
            arg = arg.if_supports_color(Stderr, |text| text.bold()),
            help = "--help".if_supports_color(Stderr, |text| text.bold()),
        ),
    )
}
