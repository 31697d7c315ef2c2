//! Command configuration parsed from environment variables.
//!
//! Settings are read from variables prefixed with `GHERKIN_LINE_` and may be
//! overridden by command line flags.

use std::env;
use std::str::FromStr;

use gherkin_line::{BuiltinKeywords, KeywordTable};

use crate::error::CliError;

/// Environment variable selecting the log level.
pub const LOG_LEVEL_VAR: &str = "GHERKIN_LINE_LOG_LEVEL";
/// Environment variable fixing the keyword language.
pub const LANGUAGE_VAR: &str = "GHERKIN_LINE_LANGUAGE";

/// How much of the parse the binary reports on stderr.
///
/// The default, [`LogLevel::Warnings`], surfaces the recoverable problems the
/// parser tolerates (ragged table rows, unterminated docstrings, tags left
/// without a statement) while keeping stderr quiet on clean files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Everything, including events from dependencies.
    Everything,
    /// Language selection and each file or expression processed.
    Parsing,
    /// One summary line per command.
    Summary,
    /// Recoverable parse problems.
    #[default]
    Warnings,
    /// Only the reason a command failed.
    Failures,
}

/// Accepted spellings, canonical name first for each level.
const LEVEL_NAMES: [(&str, LogLevel); 6] = [
    ("trace", LogLevel::Everything),
    ("debug", LogLevel::Parsing),
    ("info", LogLevel::Summary),
    ("warn", LogLevel::Warnings),
    ("warning", LogLevel::Warnings),
    ("error", LogLevel::Failures),
];

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        LEVEL_NAMES
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(wanted))
            .map(|&(_, level)| level)
            .ok_or_else(|| {
                CliError::InvalidConfig(format!(
                    "unknown log level '{s}', expected one of: {}",
                    Self::names().collect::<Vec<_>>().join(", ")
                ))
            })
    }
}

impl LogLevel {
    /// Canonical level names, most verbose first.
    pub fn names() -> impl Iterator<Item = &'static str> {
        LEVEL_NAMES
            .iter()
            .filter(|(name, level)| level.directive() == *name)
            .map(|&(name, _)| name)
    }

    /// The `tracing` filter directive enabling this level.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Everything => "trace",
            Self::Parsing => "debug",
            Self::Summary => "info",
            Self::Warnings => "warn",
            Self::Failures => "error",
        }
    }
}

/// Configuration shared by all subcommands.
///
/// # Environment Variables
///
/// - `GHERKIN_LINE_LOG_LEVEL`: log level (trace, debug, info, warn, error)
/// - `GHERKIN_LINE_LANGUAGE`: keyword language, overriding `# language:`
///   directives in the parsed files
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliConfig {
    /// Log level.
    pub log_level: LogLevel,
    /// Keyword language fixed for every parsed file.
    pub language: Option<String>,
}

impl CliConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable holds an invalid value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(value) => value.parse()?,
            None => LogLevel::default(),
        };
        let language = lookup(LANGUAGE_VAR)
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty());
        Self {
            log_level,
            language,
        }
        .validated()
    }

    /// Apply command line overrides on top of environment values.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` for an unknown language.
    pub fn apply_overrides(
        mut self,
        log_level: Option<LogLevel>,
        language: Option<&str>,
    ) -> Result<Self, CliError> {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if let Some(language) = language {
            self.language = Some(language.to_string());
        }
        self.validated()
    }

    fn validated(self) -> Result<Self, CliError> {
        match self.language.as_deref() {
            Some(language) if BuiltinKeywords.lookup(language).is_none() => {
                Err(CliError::InvalidConfig(format!(
                    "unknown language '{language}', see `gherkin-line languages`"
                )))
            }
            _ => Ok(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use rstest::rstest;

    use super::*;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[rstest]
    #[case("trace", LogLevel::Everything)]
    #[case("Debug", LogLevel::Parsing)]
    #[case("INFO", LogLevel::Summary)]
    #[case("warning", LogLevel::Warnings)]
    #[case(" warn ", LogLevel::Warnings)]
    #[case("error", LogLevel::Failures)]
    fn log_level_parses_valid_values(#[case] raw: &str, #[case] expected: LogLevel) {
        assert_eq!(raw.parse::<LogLevel>().ok(), Some(expected));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let Err(err) = "loud".parse::<LogLevel>() else {
            panic!("unknown level should fail");
        };
        assert!(err.to_string().contains("unknown log level"));
        assert!(
            err.to_string()
                .ends_with("expected one of: trace, debug, info, warn, error"),
            "{err}"
        );
    }

    #[test]
    fn every_canonical_name_parses_back() {
        for name in LogLevel::names() {
            let level = name.parse::<LogLevel>().ok();
            assert_eq!(level.map(LogLevel::directive), Some(name));
        }
    }

    #[test]
    fn defaults_apply_without_variables() {
        let config = CliConfig::from_lookup(lookup_from(&[])).ok();
        assert_eq!(config, Some(CliConfig::default()));
        assert_eq!(LogLevel::default().directive(), "warn");
    }

    #[test]
    fn reads_both_variables() {
        let config = CliConfig::from_lookup(lookup_from(&[
            (LOG_LEVEL_VAR, "debug"),
            (LANGUAGE_VAR, " de "),
        ]));
        let Ok(config) = config else {
            panic!("valid variables should load");
        };
        assert_eq!(config.log_level, LogLevel::Parsing);
        assert_eq!(config.language.as_deref(), Some("de"));
    }

    #[test]
    fn rejects_unknown_languages() {
        let config = CliConfig::from_lookup(lookup_from(&[(LANGUAGE_VAR, "tlh")]));
        assert!(matches!(config, Err(CliError::InvalidConfig(message)) if message.contains("tlh")));
    }

    #[test]
    fn overrides_take_precedence() {
        let config = CliConfig::from_lookup(lookup_from(&[(LANGUAGE_VAR, "de")]))
            .and_then(|config| config.apply_overrides(Some(LogLevel::Failures), Some("fr")));
        let Ok(config) = config else {
            panic!("overrides should apply");
        };
        assert_eq!(config.log_level, LogLevel::Failures);
        assert_eq!(config.language.as_deref(), Some("fr"));
    }
}
