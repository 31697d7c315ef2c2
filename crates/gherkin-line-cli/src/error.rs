//! Error types for the command line front end.

use thiserror::Error;

/// Errors raised while configuring or running a command.
#[derive(Debug, Error)]
pub enum CliError {
    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A feature file could not be parsed.
    #[error(transparent)]
    Parse(#[from] gherkin_line::ParseError),

    /// A `--tags` clause could not be compiled.
    #[error("invalid tag expression: {0}")]
    TagExpression(#[from] gherkin_line_tags::TagExprError),
}
