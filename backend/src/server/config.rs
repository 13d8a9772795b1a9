//! Environment-sourced server configuration.

use std::env;

use tracing::warn;

/// Port used when `PORT` is unset or unparsable.
pub const DEFAULT_PORT: u16 = 5000;

/// Runtime settings read from the process environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// TCP port the HTTP server binds to.
    pub port: u16,
    /// Debug mode flag; widens the default log filter to `debug`.
    pub debug: bool,
}

impl ServerConfig {
    /// Read `PORT` and `DEBUG` from the environment.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            port: parse_port(env::var("PORT").ok().as_deref()),
            debug: Self::debug_from_env(),
        }
    }

    /// Read only the `DEBUG` flag; used before tracing is initialised.
    #[must_use]
    pub fn debug_from_env() -> bool {
        parse_flag(env::var("DEBUG").ok().as_deref())
    }
}

fn parse_port(raw: Option<&str>) -> u16 {
    match raw {
        None => DEFAULT_PORT,
        Some(value) => value.parse().unwrap_or_else(|_| {
            warn!(value, "invalid PORT value, falling back to default");
            DEFAULT_PORT
        }),
    }
}

fn parse_flag(raw: Option<&str>) -> bool {
    raw.is_some_and(|value| value.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
mod tests {
    //! Parsing coverage for environment values.

    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(None, DEFAULT_PORT)]
    #[case(Some("8080"), 8080)]
    #[case(Some("not-a-port"), DEFAULT_PORT)]
    #[case(Some(""), DEFAULT_PORT)]
    #[case(Some("70000"), DEFAULT_PORT)]
    fn port_values_parse_with_fallback(#[case] raw: Option<&str>, #[case] expected: u16) {
        assert_eq!(parse_port(raw), expected);
    }

    #[rstest]
    #[case(None, false)]
    #[case(Some("true"), true)]
    #[case(Some("TRUE"), true)]
    #[case(Some("false"), false)]
    #[case(Some("1"), false)]
    fn debug_flag_matches_true_case_insensitively(#[case] raw: Option<&str>, #[case] expected: bool) {
        assert_eq!(parse_flag(raw), expected);
    }
}
