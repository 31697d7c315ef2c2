//! Parse states and the open-node slots of a parse session.

use std::fmt;

use crate::model::{Background, Scenario, ScenarioItem, ScenarioOutline, Step};

/// State of the line-oriented parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseState {
    /// Before the Feature header; collects tags and the language directive.
    Init,
    /// After the Feature header; collects its description.
    Feature,
    /// After a tag line; expects more tags or a taggable statement.
    TaggableStatement,
    /// After a Background header; collects its description.
    Background,
    /// After a Rule header; collects its description.
    Rule,
    /// After a Scenario or Outline header; collects its description.
    Scenario,
    /// Inside the steps of a statement.
    Steps,
    /// Inside a docstring.
    MultilineText,
    /// Inside a table.
    Table,
}

impl ParseState {
    /// Name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Init => "init",
            Self::Feature => "feature",
            Self::TaggableStatement => "taggable_statement",
            Self::Background => "background",
            Self::Rule => "rule",
            Self::Scenario => "scenario",
            Self::Steps => "steps",
            Self::MultilineText => "multiline_text",
            Self::Table => "table",
        }
    }
}

impl fmt::Display for ParseState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Grammar accepted by a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Variant {
    /// A complete feature file.
    Feature,
    /// A rule body without a header.
    Rule,
    /// Bare steps.
    Steps,
}

/// Statement currently receiving description lines and steps.
#[derive(Debug)]
pub(crate) enum Statement {
    Background(Background),
    Scenario(Scenario),
    Outline(ScenarioOutline),
}

impl Statement {
    pub(crate) fn steps(&self) -> &[Step] {
        match self {
            Self::Background(background) => &background.steps,
            Self::Scenario(scenario) => &scenario.steps,
            Self::Outline(outline) => &outline.steps,
        }
    }

    pub(crate) fn steps_mut(&mut self) -> &mut Vec<Step> {
        match self {
            Self::Background(background) => &mut background.steps,
            Self::Scenario(scenario) => &mut scenario.steps,
            Self::Outline(outline) => &mut outline.steps,
        }
    }

    pub(crate) fn description_mut(&mut self) -> &mut Vec<String> {
        match self {
            Self::Background(background) => &mut background.description,
            Self::Scenario(scenario) => &mut scenario.description,
            Self::Outline(outline) => &mut outline.description,
        }
    }

    pub(crate) fn is_scenario(&self) -> bool {
        matches!(self, Self::Scenario(_) | Self::Outline(_))
    }
}

/// Where a closed statement goes.
pub(crate) enum Closed {
    Background(Background),
    Scenario(ScenarioItem),
}

impl From<Statement> for Closed {
    fn from(statement: Statement) -> Self {
        match statement {
            Statement::Background(background) => Self::Background(background),
            Statement::Scenario(scenario) => Self::Scenario(ScenarioItem::Scenario(scenario)),
            Statement::Outline(outline) => Self::Scenario(ScenarioItem::Outline(outline)),
        }
    }
}

/// Docstring being collected.
#[derive(Debug)]
pub(crate) struct Multiline {
    /// Line of the opening fence.
    pub(crate) start: usize,
    /// Fence that closes the block.
    pub(crate) terminator: &'static str,
    /// Character column of the opening fence.
    pub(crate) leading: usize,
    pub(crate) content_type: String,
    pub(crate) lines: Vec<String>,
}
