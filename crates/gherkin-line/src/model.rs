//! Document tree produced by the parser.
//!
//! The tree is plain owned data: a [`Feature`] owns its [`Background`], its
//! feature-level scenarios and its [`Rule`]s, each of which owns its own
//! background and scenarios. Feature-level scenarios always precede rules in
//! the source because every statement after a `Rule:` header belongs to that
//! rule, so keeping them in two vectors preserves source order.
//!
//! With the `serde` feature enabled every node implements
//! `serde::Serialize`.

use std::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Step type after resolving conjunctions.
///
/// `And` and `But` only appear as keyword categories; parsed steps always
/// carry the concrete type they inherited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(rename_all = "lowercase"))]
pub enum StepType {
    /// Setup preconditions for a scenario.
    Given,
    /// Perform an action.
    When,
    /// Assert the expected outcome.
    Then,
    /// Continue the previous step type.
    And,
    /// Contrast with the previous step type.
    But,
}

impl StepType {
    /// Lower-case name of the type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Given => "given",
            Self::When => "when",
            Self::Then => "then",
            Self::And => "and",
            Self::But => "but",
        }
    }

    /// Whether the type continues the previous step.
    #[must_use]
    pub const fn is_conjunction(self) -> bool {
        matches!(self, Self::And | Self::But)
    }

    /// Resolve conjunctions to the type of the previous step.
    ///
    /// `And`/`But` return the value stored in `prev`, or `None` when no
    /// concrete step preceded them. Concrete types update `prev` and are
    /// returned unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use gherkin_line::StepType;
    ///
    /// let mut prev = None;
    /// assert_eq!(StepType::But.resolve(&mut prev), None);
    /// assert_eq!(StepType::Given.resolve(&mut prev), Some(StepType::Given));
    /// assert_eq!(StepType::And.resolve(&mut prev), Some(StepType::Given));
    /// ```
    #[must_use]
    pub fn resolve(self, prev: &mut Option<Self>) -> Option<Self> {
        if self.is_conjunction() {
            *prev
        } else {
            *prev = Some(self);
            Some(self)
        }
    }
}

impl fmt::Display for StepType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tag attached to a taggable statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Tag {
    /// Tag name without `@` and without the limit suffix.
    pub name: String,
    /// Line the tag was declared on.
    pub line: usize,
    /// Limit from a `:<int>` suffix.
    pub limit: Option<u32>,
}

impl Tag {
    /// Build a tag from a word with the `@` already removed.
    ///
    /// A trailing `:<int>` becomes the limit; any other suffix stays part of
    /// the name.
    ///
    /// # Examples
    /// ```
    /// use gherkin_line::Tag;
    ///
    /// let tag = Tag::from_word("wip:2", 4);
    /// assert_eq!((tag.name.as_str(), tag.limit), ("wip", Some(2)));
    /// assert_eq!(Tag::from_word("team:core", 4).name, "team:core");
    /// ```
    #[must_use]
    pub fn from_word(word: &str, line: usize) -> Self {
        let split = word
            .rsplit_once(':')
            .and_then(|(name, limit)| limit.parse::<u32>().ok().map(|limit| (name, limit)))
            .filter(|(name, _)| !name.is_empty());
        match split {
            Some((name, limit)) => Self {
                name: name.to_string(),
                line,
                limit: Some(limit),
            },
            None => Self {
                name: word.to_string(),
                line,
                limit: None,
            },
        }
    }
}

/// Renders the tag as written, e.g. `@wip:2`.
impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "@{}", self.name)?;
        if let Some(limit) = self.limit {
            write!(f, ":{limit}")?;
        }
        Ok(())
    }
}

/// One data row of a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct TableRow {
    /// Decoded cell values.
    pub cells: Vec<String>,
    /// Source line of the row.
    pub line: usize,
}

/// Pipe-delimited table attached to a step or an Examples block.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Table {
    /// Cells of the first row.
    pub headings: Vec<String>,
    /// Remaining rows; each has as many cells as `headings`.
    pub rows: Vec<TableRow>,
    /// Source line of the heading row.
    pub line: usize,
}

impl Table {
    /// Create a table from its heading row.
    #[must_use]
    pub fn new(headings: Vec<String>, line: usize) -> Self {
        Self {
            headings,
            rows: Vec::new(),
            line,
        }
    }

    /// Heading row followed by the data rows, as plain cell vectors.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        std::iter::once(self.headings.clone())
            .chain(self.rows.iter().map(|row| row.cells.clone()))
            .collect()
    }
}

/// Docstring attached to a step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Text {
    /// Content lines joined with `\n`.
    pub value: String,
    /// Content type given after the opening fence, `text/plain` by default.
    pub content_type: String,
    /// Line of the opening fence.
    pub line: usize,
}

/// Default docstring content type.
pub const PLAIN_TEXT: &str = "text/plain";

/// A single step.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Step {
    /// Keyword as written, without trailing whitespace.
    pub keyword: String,
    /// Resolved step type.
    pub step_type: StepType,
    /// Text after the keyword.
    pub text: String,
    /// Data table argument.
    pub table: Option<Table>,
    /// Docstring argument.
    pub docstring: Option<Text>,
    /// Source line.
    pub line: usize,
}

impl Step {
    /// Whether a data table or docstring is attached.
    #[must_use]
    pub const fn has_argument(&self) -> bool {
        self.table.is_some() || self.docstring.is_some()
    }

    /// Drops the colon that introduces the first argument.
    pub(crate) fn strip_trailing_colon(&mut self) {
        if self.text.ends_with(':') {
            self.text.pop();
        }
    }
}

/// Steps shared by every scenario of a container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Background {
    /// Keyword as written.
    pub keyword: String,
    /// Title after the colon.
    pub title: String,
    /// Free-form lines between the header and the first step.
    pub description: Vec<String>,
    /// Steps.
    pub steps: Vec<Step>,
    /// Source line.
    pub line: usize,
}

/// A concrete scenario.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Scenario {
    /// Keyword as written.
    pub keyword: String,
    /// Title after the colon.
    pub title: String,
    /// Free-form lines between the header and the first step.
    pub description: Vec<String>,
    /// Tags declared above the header.
    pub tags: Vec<Tag>,
    /// Steps.
    pub steps: Vec<Step>,
    /// Source line.
    pub line: usize,
}

/// Data block supplying substitutions for a [`ScenarioOutline`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Examples {
    /// Keyword as written.
    pub keyword: String,
    /// Title after the colon.
    pub title: String,
    /// Tags declared above the header.
    pub tags: Vec<Tag>,
    /// Substitution table.
    pub table: Option<Table>,
    /// Source line.
    pub line: usize,
}

/// A templated scenario expanded against its [`Examples`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ScenarioOutline {
    /// Keyword as written.
    pub keyword: String,
    /// Title after the colon.
    pub title: String,
    /// Free-form lines between the header and the first step.
    pub description: Vec<String>,
    /// Tags declared above the header.
    pub tags: Vec<Tag>,
    /// Template steps.
    pub steps: Vec<Step>,
    /// Examples blocks in source order.
    pub examples: Vec<Examples>,
    /// Source line.
    pub line: usize,
}

/// A scenario or scenario outline inside a feature or rule.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize),
    serde(tag = "kind", rename_all = "snake_case")
)]
pub enum ScenarioItem {
    /// Concrete scenario.
    Scenario(Scenario),
    /// Scenario outline.
    Outline(ScenarioOutline),
}

impl ScenarioItem {
    /// Keyword as written.
    #[must_use]
    pub fn keyword(&self) -> &str {
        match self {
            Self::Scenario(scenario) => &scenario.keyword,
            Self::Outline(outline) => &outline.keyword,
        }
    }

    /// Title after the colon.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Scenario(scenario) => &scenario.title,
            Self::Outline(outline) => &outline.title,
        }
    }

    /// Description lines.
    #[must_use]
    pub fn description(&self) -> &[String] {
        match self {
            Self::Scenario(scenario) => &scenario.description,
            Self::Outline(outline) => &outline.description,
        }
    }

    /// Tags declared on the statement itself.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        match self {
            Self::Scenario(scenario) => &scenario.tags,
            Self::Outline(outline) => &outline.tags,
        }
    }

    /// Steps in source order.
    #[must_use]
    pub fn steps(&self) -> &[Step] {
        match self {
            Self::Scenario(scenario) => &scenario.steps,
            Self::Outline(outline) => &outline.steps,
        }
    }

    /// Source line of the header.
    #[must_use]
    pub fn line(&self) -> usize {
        match self {
            Self::Scenario(scenario) => scenario.line,
            Self::Outline(outline) => outline.line,
        }
    }
}

/// Business rule grouping a background and scenarios.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Rule {
    /// Keyword as written; empty for a rule parsed without a header.
    pub keyword: String,
    /// Title after the colon.
    pub title: String,
    /// Free-form lines after the header.
    pub description: Vec<String>,
    /// Tags declared above the header.
    pub tags: Vec<Tag>,
    /// Background of this rule.
    pub background: Option<Background>,
    /// Scenarios and outlines in source order.
    pub scenarios: Vec<ScenarioItem>,
    /// Source line; `0` for a rule parsed without a header.
    pub line: usize,
}

/// Root of a parsed feature file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Feature {
    /// Source identifier supplied to the parse.
    pub source: Option<String>,
    /// Language whose keywords were used.
    pub language: String,
    /// Keyword as written.
    pub keyword: String,
    /// Title after the colon.
    pub title: String,
    /// Free-form lines after the header.
    pub description: Vec<String>,
    /// Tags declared above the header.
    pub tags: Vec<Tag>,
    /// Feature-level background.
    pub background: Option<Background>,
    /// Feature-level scenarios, all preceding the first rule.
    pub scenarios: Vec<ScenarioItem>,
    /// Rules in source order.
    pub rules: Vec<Rule>,
    /// Source line of the header.
    pub line: usize,
}

impl Feature {
    /// Iterate every scenario with the rule that contains it.
    ///
    /// Feature-level scenarios come first with `None`, then each rule's
    /// scenarios in source order.
    pub fn all_scenarios(&self) -> impl Iterator<Item = (Option<&Rule>, &ScenarioItem)> + '_ {
        self.scenarios
            .iter()
            .map(|scenario| (None, scenario))
            .chain(self.rules.iter().flat_map(|rule| {
                rule.scenarios.iter().map(move |scenario| (Some(rule), scenario))
            }))
    }
}
