//! Keyword tables mapping grammar categories to language-specific aliases.
//!
//! The parser never hard-codes keyword text. It asks a [`KeywordTable`] for
//! the [`LanguageKeywords`] of the active language and matches lines against
//! the aliases of each [`KeywordCategory`] in table order. [`BuiltinKeywords`]
//! ships a handful of common languages; callers can inject their own table
//! through [`Parser::with_keywords`](crate::Parser::with_keywords).

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::languages::{BUILTIN, LanguageData};
use crate::model::StepType;

/// Default language used when neither the caller nor the text selects one.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Grammar category a keyword alias belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// `Feature:` header.
    Feature,
    /// `Rule:` header.
    Rule,
    /// `Background:` header.
    Background,
    /// `Scenario:` header.
    Scenario,
    /// `Scenario Outline:` header.
    ScenarioOutline,
    /// `Examples:` header.
    Examples,
    /// `Given` steps.
    Given,
    /// `When` steps.
    When,
    /// `Then` steps.
    Then,
    /// `And` steps.
    And,
    /// `But` steps.
    But,
}

impl KeywordCategory {
    /// Step categories in matching priority order.
    pub const STEPS: [Self; 5] = [Self::Given, Self::When, Self::Then, Self::And, Self::But];

    /// All categories.
    pub const ALL: [Self; 11] = [
        Self::Feature,
        Self::Rule,
        Self::Background,
        Self::Scenario,
        Self::ScenarioOutline,
        Self::Examples,
        Self::Given,
        Self::When,
        Self::Then,
        Self::And,
        Self::But,
    ];

    /// Category name as used in keyword tables.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Rule => "rule",
            Self::Background => "background",
            Self::Scenario => "scenario",
            Self::ScenarioOutline => "scenario_outline",
            Self::Examples => "examples",
            Self::Given => "given",
            Self::When => "when",
            Self::Then => "then",
            Self::And => "and",
            Self::But => "but",
        }
    }

    /// Step type for step categories; `None` for structural headers.
    #[must_use]
    pub const fn step_type(self) -> Option<StepType> {
        match self {
            Self::Given => Some(StepType::Given),
            Self::When => Some(StepType::When),
            Self::Then => Some(StepType::Then),
            Self::And => Some(StepType::And),
            Self::But => Some(StepType::But),
            Self::Feature
            | Self::Rule
            | Self::Background
            | Self::Scenario
            | Self::ScenarioOutline
            | Self::Examples => None,
        }
    }
}

impl fmt::Display for KeywordCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a category name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown keyword category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for KeywordCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| UnknownCategory(trimmed.to_string()))
    }
}

/// Aliases for every grammar category of one language.
///
/// Step aliases usually carry a trailing space (`"Given "`); languages that
/// do not separate words with spaces omit it. Order matters: the first
/// matching alias wins, so longer aliases sharing a prefix come first.
///
/// # Examples
/// ```
/// use gherkin_line::{KeywordCategory, LanguageKeywords};
///
/// let keywords = LanguageKeywords::new("Pirate")
///     .with_aliases(KeywordCategory::Feature, ["Ahoy matey!"])
///     .with_aliases(KeywordCategory::Given, ["* ", "Gangway! "]);
/// assert_eq!(keywords.aliases(KeywordCategory::Given), ["* ", "Gangway! "]);
/// assert!(keywords.aliases(KeywordCategory::Rule).is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageKeywords {
    name: String,
    feature: Vec<String>,
    rule: Vec<String>,
    background: Vec<String>,
    scenario: Vec<String>,
    scenario_outline: Vec<String>,
    examples: Vec<String>,
    given: Vec<String>,
    when: Vec<String>,
    then: Vec<String>,
    and: Vec<String>,
    but: Vec<String>,
}

impl LanguageKeywords {
    /// Create an empty table with a human-readable language name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Replace the aliases of `category`.
    #[must_use]
    pub fn with_aliases<I, S>(mut self, category: KeywordCategory, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        *self.slot_mut(category) = aliases.into_iter().map(Into::into).collect();
        self
    }

    /// Human-readable language name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Aliases of `category` in matching order.
    #[must_use]
    pub fn aliases(&self, category: KeywordCategory) -> &[String] {
        match category {
            KeywordCategory::Feature => &self.feature,
            KeywordCategory::Rule => &self.rule,
            KeywordCategory::Background => &self.background,
            KeywordCategory::Scenario => &self.scenario,
            KeywordCategory::ScenarioOutline => &self.scenario_outline,
            KeywordCategory::Examples => &self.examples,
            KeywordCategory::Given => &self.given,
            KeywordCategory::When => &self.when,
            KeywordCategory::Then => &self.then,
            KeywordCategory::And => &self.and,
            KeywordCategory::But => &self.but,
        }
    }

    fn slot_mut(&mut self, category: KeywordCategory) -> &mut Vec<String> {
        match category {
            KeywordCategory::Feature => &mut self.feature,
            KeywordCategory::Rule => &mut self.rule,
            KeywordCategory::Background => &mut self.background,
            KeywordCategory::Scenario => &mut self.scenario,
            KeywordCategory::ScenarioOutline => &mut self.scenario_outline,
            KeywordCategory::Examples => &mut self.examples,
            KeywordCategory::Given => &mut self.given,
            KeywordCategory::When => &mut self.when,
            KeywordCategory::Then => &mut self.then,
            KeywordCategory::And => &mut self.and,
            KeywordCategory::But => &mut self.but,
        }
    }

    fn from_data(data: &LanguageData) -> Self {
        data.categories.iter().fold(
            Self::new(data.name),
            |keywords, (category, aliases)| keywords.with_aliases(*category, aliases.iter().copied()),
        )
    }
}

/// Lookup service supplying keyword tables by language code.
///
/// Implementations must be shareable across threads so a configured
/// [`Parser`](crate::Parser) can be shared.
pub trait KeywordTable: Send + Sync {
    /// Keyword table for `language`, or `None` when unsupported.
    fn lookup(&self, language: &str) -> Option<&LanguageKeywords>;

    /// Language used when no language is requested explicitly or in the text.
    fn default_language(&self) -> &str {
        DEFAULT_LANGUAGE
    }
}

static BUILTIN_TABLES: LazyLock<Vec<(&'static str, LanguageKeywords)>> = LazyLock::new(|| {
    BUILTIN
        .iter()
        .map(|data| (data.code, LanguageKeywords::from_data(data)))
        .collect()
});

/// Keyword tables bundled with the crate.
///
/// Covers `en` (the default), `de`, `fr`, `es`, `nl` and `ja`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuiltinKeywords;

impl BuiltinKeywords {
    /// Codes and names of the bundled languages.
    ///
    /// # Examples
    /// ```
    /// use gherkin_line::BuiltinKeywords;
    ///
    /// assert!(BuiltinKeywords::languages().any(|(code, _)| code == "en"));
    /// ```
    pub fn languages() -> impl Iterator<Item = (&'static str, &'static str)> {
        BUILTIN.iter().map(|data| (data.code, data.name))
    }
}

impl KeywordTable for BuiltinKeywords {
    fn lookup(&self, language: &str) -> Option<&LanguageKeywords> {
        BUILTIN_TABLES
            .iter()
            .find(|(code, _)| *code == language)
            .map(|(_, keywords)| keywords)
    }
}
