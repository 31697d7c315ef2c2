//! Line-oriented Gherkin parser.
//!
//! The parser walks feature text one line at a time through an explicit
//! state machine ([`ParseState`]), builds an owned document tree
//! ([`Feature`]) and reports malformed input as a positioned [`ParseError`]
//! explaining what went wrong. Keyword text comes from an injected
//! [`KeywordTable`]; [`BuiltinKeywords`] covers a few common languages and a
//! `# language:` directive at the top of a file selects one.
//!
//! ```
//! use gherkin_line::{StepType, parse_feature};
//!
//! let text = "\
//! Feature: F
//!   Scenario: S
//!     Given a precondition
//!     When an action occurs
//!     Then an outcome is observed
//! ";
//! let feature = parse_feature(text, None, None).unwrap().unwrap();
//! let steps = feature.scenarios[0].steps();
//! let types: Vec<_> = steps.iter().map(|step| step.step_type).collect();
//! assert_eq!(types, [StepType::Given, StepType::When, StepType::Then]);
//! ```
//!
//! Tag expressions for selecting scenarios live in the companion
//! `gherkin-line-tags` crate.

mod classify;
mod error;
mod keywords;
mod languages;
mod model;
mod parser;
pub mod render;
mod table;

use std::path::Path;

pub use error::{ParseError, ParseErrorKind, Position};
pub use keywords::{
    BuiltinKeywords, DEFAULT_LANGUAGE, KeywordCategory, KeywordTable, LanguageKeywords,
    UnknownCategory,
};
pub use model::{
    Background, Examples, Feature, PLAIN_TEXT, Rule, Scenario, ScenarioItem, ScenarioOutline, Step,
    StepType, Table, TableRow, Tag, Text,
};
pub use parser::{ParseState, Parser, parse_tags};

fn parser_for(language: Option<&str>) -> Parser {
    language.map_or_else(Parser::new, |language| Parser::new().with_language(language))
}

/// Parse feature text with the bundled keyword tables.
///
/// `language` fixes the keyword language; `source` names the text in
/// diagnostics.
///
/// # Errors
///
/// See [`Parser::parse_feature`].
pub fn parse_feature(
    text: &str,
    language: Option<&str>,
    source: Option<&str>,
) -> Result<Option<Feature>, ParseError> {
    parser_for(language).parse_feature(text, source)
}

/// Read and parse a feature file.
///
/// # Errors
///
/// See [`Parser::parse_file`].
pub fn parse_file(
    path: impl AsRef<Path>,
    language: Option<&str>,
) -> Result<Option<Feature>, ParseError> {
    parser_for(language).parse_file(path)
}

/// Parse a rule body without its header.
///
/// # Errors
///
/// See [`Parser::parse_rule`].
pub fn parse_rule(
    text: &str,
    language: Option<&str>,
    source: Option<&str>,
) -> Result<Rule, ParseError> {
    parser_for(language).parse_rule(text, source)
}

/// Parse bare steps.
///
/// # Errors
///
/// See [`Parser::parse_steps`].
pub fn parse_steps(
    text: &str,
    language: Option<&str>,
    source: Option<&str>,
) -> Result<Vec<Step>, ParseError> {
    parser_for(language).parse_steps(text, source)
}

/// Parse exactly one step.
///
/// # Errors
///
/// See [`Parser::parse_step`].
pub fn parse_step(
    text: &str,
    language: Option<&str>,
    source: Option<&str>,
) -> Result<Step, ParseError> {
    parser_for(language).parse_step(text, source)
}
