//! Error types produced while parsing feature text.
//!
//! Every failure is a [`ParseError`]: a [`ParseErrorKind`] carrying only the
//! fields relevant to that failure, plus a shared [`Position`] describing
//! where it happened.

use std::fmt;

use thiserror::Error;

use crate::parser::ParseState;

/// Location of a parse failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Position {
    /// 1-based line number, or `0` when the failure is not tied to a line.
    pub line: usize,
    /// Trimmed text of the offending line.
    pub text: Option<String>,
    /// Source identifier, usually the feature file path.
    pub source: Option<String>,
}

/// Specific reason a parse failed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ParseErrorKind {
    /// No state handler could consume the line.
    #[error("Parser failure in state={state}")]
    UnexpectedLine {
        /// State the parser was in when the line arrived.
        state: ParseState,
        /// Context-aware explanation from the keyword diagnosis, if any.
        reason: Option<String>,
    },
    /// An Examples block was declared outside a scenario outline.
    #[error("Examples must only appear inside scenario outline")]
    ExamplesOutsideOutline,
    /// Tags were pending when a Background started.
    #[error("Background supports no tags: {}", format_tags(tags))]
    BackgroundTagged {
        /// Names of the pending tags, without `@`.
        tags: Vec<String>,
    },
    /// A second Background was declared after one with steps.
    #[error("Second Background (can have only one)")]
    DuplicateBackground,
    /// A word on a tag line did not start with `@`.
    #[error("Bad tag `{word}`: tags must start with '@'")]
    BadTag {
        /// Offending word.
        word: String,
    },
    /// An `And`/`But` step appeared before any concrete step.
    #[error("No previous step")]
    NoPreviousStep,
    /// A docstring fence appeared before any step of the statement.
    #[error("Multi-line text before any step")]
    MultilineTextBeforeStep,
    /// A table row appeared before any step of the statement.
    #[error("Table start without step")]
    TableWithoutStep,
    /// A table row's width differs from the heading row.
    #[error("Malformed table: expected {expected} cells, found {actual}")]
    MalformedTable {
        /// Number of heading cells.
        expected: usize,
        /// Number of cells in the offending row.
        actual: usize,
    },
    /// Removing a docstring's indentation column would drop text.
    #[error("BAD-INDENT in multiline text: would strip leading '{prefix}'")]
    BadIndent {
        /// Text that would have been removed.
        prefix: String,
    },
    /// The requested language has no keyword table.
    #[error("Unknown language `{language}`")]
    UnknownLanguage {
        /// Requested language code.
        language: String,
    },
    /// The single-step entry point received a different number of steps.
    #[error("Expected exactly one step, found {found}")]
    StepCount {
        /// Number of steps parsed.
        found: usize,
    },
    /// The feature file could not be read.
    #[error("Unable to read feature file")]
    Io(#[source] std::io::Error),
}

fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|tag| format!("@{tag}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Positioned parse failure.
///
/// # Examples
/// ```
/// use gherkin_line::parse_feature;
///
/// let err = parse_feature("Scenario: orphan\n", None, None).unwrap_err();
/// assert_eq!(err.line(), 1);
/// assert_eq!(err.reason(), Some("Scenario may not occur before Feature."));
/// assert!(err.to_string().starts_with("Failed to parse <string>: "));
/// ```
#[derive(Debug)]
pub struct ParseError {
    kind: ParseErrorKind,
    position: Position,
}

impl ParseError {
    /// Build an error from its kind and position.
    #[must_use]
    pub fn new(kind: ParseErrorKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// Failure kind.
    #[must_use]
    pub fn kind(&self) -> &ParseErrorKind {
        &self.kind
    }

    /// Failure position.
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// 1-based line number; `0` when not tied to a line.
    #[must_use]
    pub fn line(&self) -> usize {
        self.position.line
    }

    /// Trimmed text of the offending line.
    #[must_use]
    pub fn line_text(&self) -> Option<&str> {
        self.position.text.as_deref()
    }

    /// Source identifier supplied to the parse.
    #[must_use]
    pub fn source_name(&self) -> Option<&str> {
        self.position.source.as_deref()
    }

    /// Explanation produced by the keyword diagnosis, if any.
    #[must_use]
    pub fn reason(&self) -> Option<&str> {
        match &self.kind {
            ParseErrorKind::UnexpectedLine { reason, .. } => reason.as_deref(),
            _ => None,
        }
    }

    /// Message annotated with line number, line text and reason.
    ///
    /// This is the [`Display`](fmt::Display) output without the
    /// `Failed to parse ...:` prefix.
    #[must_use]
    pub fn annotated_message(&self) -> String {
        let mut message = self.kind.to_string();
        if self.position.line > 0 {
            message.push_str(&format!(" at line {}", self.position.line));
        }
        if let Some(text) = self.line_text().filter(|text| !text.is_empty()) {
            message.push_str(&format!(": \"{text}\""));
        }
        if let Some(reason) = self.reason() {
            message.push_str(&format!("\nREASON: {reason}"));
        }
        message
    }

    pub(crate) fn with_source(mut self, source: Option<&str>) -> Self {
        self.position.source = source.map(str::to_string);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.source_name() {
            Some(source) => write!(f, "Failed to parse \"{source}\": ")?,
            None => f.write_str("Failed to parse <string>: ")?,
        }
        f.write_str(&self.annotated_message())
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.kind {
            ParseErrorKind::Io(err) => Some(err),
            _ => None,
        }
    }
}
