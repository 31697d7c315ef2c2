//! Error type raised while compiling tag expressions.

use thiserror::Error;

/// Errors surfaced by [`TagExpression::compile`](crate::TagExpression::compile).
///
/// # Examples
/// ```
/// use gherkin_line_tags::{TagExprError, TagExpression};
///
/// let err = TagExpression::compile(["@wip:2", "@wip:3"]).unwrap_err();
/// assert!(matches!(err, TagExprError::ConflictingLimit { .. }));
/// assert_eq!(err.to_string(), "inconsistent tag limits for wip: 2 and 3");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TagExprError {
    /// The same tag was given two different execution limits.
    #[error("inconsistent tag limits for {tag}: {existing} and {requested}")]
    ConflictingLimit {
        /// Tag name without sigil or negation.
        tag: String,
        /// Limit recorded by an earlier term.
        existing: u32,
        /// Limit requested by the offending term.
        requested: u32,
    },
    /// The text after `:` is not a non-negative integer.
    #[error("invalid limit `{value}` in tag term `{term}`")]
    InvalidLimit {
        /// The term as written.
        term: String,
        /// The unparsable limit text.
        value: String,
    },
    /// A clause contains a term with no tag name, such as `@a,,@b`.
    #[error("empty tag term in clause `{clause}`")]
    EmptyTerm {
        /// The clause as written, trimmed.
        clause: String,
    },
}
