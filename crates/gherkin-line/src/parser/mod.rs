//! Line-oriented state machine turning feature text into a [`Feature`].
//!
//! A [`Parser`] only holds configuration: the keyword table and an optional
//! fixed language. Each parse call builds a fresh `Session` that owns the
//! cursor (state, line counter, pending tags) and the open nodes. The open
//! statement lives in an owning slot and is moved into its container (the
//! open rule, else the feature) when the next statement starts or the input
//! ends.

mod oracle;
mod state;


use std::fmt;
use std::mem;
use std::path::Path;
use std::sync::Arc;

use log::{debug, warn};

use crate::classify;
use crate::error::{ParseError, ParseErrorKind, Position};
use crate::keywords::{BuiltinKeywords, KeywordCategory, KeywordTable, LanguageKeywords};
use crate::model::{
    Background, Examples, Feature, PLAIN_TEXT, Rule, Scenario, ScenarioItem, ScenarioOutline, Step,
    StepType, Table, TableRow, Tag, Text,
};
use crate::table::split_cells;

pub use state::ParseState;
use state::{Closed, Multiline, Statement, Variant};

/// Parser configuration shared by any number of parses.
///
/// # Examples
/// ```
/// use gherkin_line::Parser;
///
/// let parser = Parser::new().with_language("de");
/// let feature = parser
///     .parse_feature("Funktionalität: Anmeldung\n  Szenario: Erfolg\n    Angenommen ein Konto\n", None)
///     .unwrap()
///     .unwrap();
/// assert_eq!(feature.language, "de");
/// assert_eq!(feature.scenarios.len(), 1);
/// ```
#[derive(Clone)]
pub struct Parser {
    language: Option<String>,
    keywords: Arc<dyn KeywordTable>,
}

impl fmt::Debug for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Parser")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Parser using the bundled keyword tables and no fixed language.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: None,
            keywords: Arc::new(BuiltinKeywords),
        }
    }

    /// Fix the language. An explicit language always wins over a
    /// `# language:` directive in the text.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Replace the keyword table.
    #[must_use]
    pub fn with_keywords<K>(mut self, keywords: K) -> Self
    where
        K: KeywordTable + 'static,
    {
        self.keywords = Arc::new(keywords);
        self
    }

    /// Explicitly configured language.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.language.as_deref()
    }

    /// Parse a complete feature file.
    ///
    /// Returns `Ok(None)` when the text holds no feature, e.g. only comments
    /// or blank lines.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] positioned at the first line that could not
    /// be consumed, or [`ParseErrorKind::UnknownLanguage`] when the requested
    /// language has no keyword table.
    pub fn parse_feature(
        &self,
        text: &str,
        source: Option<&str>,
    ) -> Result<Option<Feature>, ParseError> {
        let mut session = Session::new(self, Variant::Feature, source)?;
        session.run(text)?;
        Ok(session.finish_feature())
    }

    /// Read and parse a feature file, using its path as source identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ParseErrorKind::Io`] when the file cannot be read as UTF-8
    /// and any error of [`parse_feature`](Self::parse_feature).
    pub fn parse_file(&self, path: impl AsRef<Path>) -> Result<Option<Feature>, ParseError> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let text = std::fs::read_to_string(path).map_err(|err| {
            ParseError::new(
                ParseErrorKind::Io(err),
                Position {
                    source: Some(source.clone()),
                    ..Position::default()
                },
            )
        })?;
        debug!("parsing feature file {source}");
        self.parse_feature(&text, Some(source.as_str()))
    }

    /// Parse a rule body (background and scenarios) without a `Rule:` header.
    ///
    /// The returned rule has an empty keyword and title and line `0`.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for malformed input.
    pub fn parse_rule(&self, text: &str, source: Option<&str>) -> Result<Rule, ParseError> {
        let mut session = Session::new(self, Variant::Rule, source)?;
        session.run(text)?;
        Ok(session.finish_rule())
    }

    /// Parse bare steps without an enclosing statement header.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] for malformed input.
    pub fn parse_steps(&self, text: &str, source: Option<&str>) -> Result<Vec<Step>, ParseError> {
        let mut session = Session::new(self, Variant::Steps, source)?;
        session.run(text)?;
        Ok(session.finish_steps())
    }

    /// Parse exactly one step, including its table or docstring.
    ///
    /// # Errors
    ///
    /// Returns [`ParseErrorKind::StepCount`] when the text holds zero or
    /// several steps, and any error of [`parse_steps`](Self::parse_steps).
    pub fn parse_step(&self, text: &str, source: Option<&str>) -> Result<Step, ParseError> {
        let steps = self.parse_steps(text, source)?;
        let found = steps.len();
        match <[Step; 1]>::try_from(steps) {
            Ok([step]) => Ok(step),
            Err(_) => Err(ParseError::new(
                ParseErrorKind::StepCount { found },
                Position::default(),
            )
            .with_source(source)),
        }
    }
}

/// Parse tag lines into tags.
///
/// Blank text yields no tags. Every non-blank line must consist of `@tag`
/// words, optionally followed by a `#` comment.
///
/// # Errors
///
/// Returns [`ParseErrorKind::BadTag`] for a word without `@`.
pub fn parse_tags(text: &str) -> Result<Vec<Tag>, ParseError> {
    let mut tags = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let number = index + 1;
        let parsed = classify::parse_tags(line, number).map_err(|kind| {
            ParseError::new(
                kind,
                Position {
                    line: number,
                    text: Some(line.trim().to_string()),
                    source: None,
                },
            )
        })?;
        tags.extend(parsed);
    }
    Ok(tags)
}

/// Statement container: the feature itself or one of its rules.
trait Container {
    fn background(&self) -> Option<&Background>;
    fn set_background(&mut self, background: Background);
    fn scenarios(&self) -> &[ScenarioItem];
    fn push_scenario(&mut self, scenario: ScenarioItem);
}

impl Container for Feature {
    fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    fn set_background(&mut self, background: Background) {
        self.background = Some(background);
    }

    fn scenarios(&self) -> &[ScenarioItem] {
        &self.scenarios
    }

    fn push_scenario(&mut self, scenario: ScenarioItem) {
        self.scenarios.push(scenario);
    }
}

impl Container for Rule {
    fn background(&self) -> Option<&Background> {
        self.background.as_ref()
    }

    fn set_background(&mut self, background: Background) {
        self.background = Some(background);
    }

    fn scenarios(&self) -> &[ScenarioItem] {
        &self.scenarios
    }

    fn push_scenario(&mut self, scenario: ScenarioItem) {
        self.scenarios.push(scenario);
    }
}

/// Mutable cursor and open nodes of one parse.
struct Session<'a> {
    variant: Variant,
    lookup: &'a dyn KeywordTable,
    explicit_language: bool,
    default_language: &'a str,
    default_keywords: &'a LanguageKeywords,
    active: Option<(String, &'a LanguageKeywords)>,
    source: Option<&'a str>,
    state: ParseState,
    line: usize,
    last_step_type: Option<StepType>,
    feature: Option<Feature>,
    rule: Option<Rule>,
    statement: Option<Statement>,
    tags: Vec<Tag>,
    examples_open: bool,
    table: Option<Table>,
    multiline: Option<Multiline>,
}

impl<'a> Session<'a> {
    fn new(parser: &'a Parser, variant: Variant, source: Option<&'a str>) -> Result<Self, ParseError> {
        let lookup = parser.keywords.as_ref();
        let unknown = |language: &str| {
            ParseError::new(
                ParseErrorKind::UnknownLanguage {
                    language: language.to_string(),
                },
                Position::default(),
            )
            .with_source(source)
        };
        let default_language = lookup.default_language();
        let default_keywords = lookup
            .lookup(default_language)
            .ok_or_else(|| unknown(default_language))?;
        let active = match parser.language.as_deref() {
            Some(language) => {
                let keywords = lookup.lookup(language).ok_or_else(|| unknown(language))?;
                Some((language.to_string(), keywords))
            }
            None => None,
        };
        let mut session = Self {
            variant,
            lookup,
            explicit_language: active.is_some(),
            default_language,
            default_keywords,
            active,
            source,
            state: ParseState::Init,
            line: 0,
            last_step_type: None,
            feature: None,
            rule: None,
            statement: None,
            tags: Vec::new(),
            examples_open: false,
            table: None,
            multiline: None,
        };
        match variant {
            Variant::Feature => {}
            Variant::Rule => {
                session.rule = Some(Rule::default());
                session.state = ParseState::Rule;
            }
            Variant::Steps => {
                session.statement = Some(Statement::Scenario(Scenario::default()));
                session.state = ParseState::Steps;
            }
        }
        Ok(session)
    }

    fn run(&mut self, text: &str) -> Result<(), ParseError> {
        for raw in text.split('\n') {
            self.line += 1;
            self.feed(raw)?;
        }
        if self.table.is_some() {
            self.close_table();
        }
        Ok(())
    }

    fn feed(&mut self, raw: &str) -> Result<(), ParseError> {
        let trimmed = raw.trim();
        if self.state != ParseState::MultilineText {
            if trimmed.is_empty() {
                return Ok(());
            }
            if trimmed.starts_with('#') {
                return self.comment(trimmed);
            }
        }
        let consumed = match self.state {
            ParseState::Init => self.on_init(trimmed)?,
            ParseState::Feature | ParseState::Rule => self.on_container(trimmed)?,
            ParseState::TaggableStatement => self.detect_taggable_statement(trimmed)?,
            ParseState::Background | ParseState::Scenario => self.on_statement(trimmed)?,
            ParseState::Steps => self.on_steps(raw)?,
            ParseState::MultilineText => self.on_multiline_text(raw)?,
            ParseState::Table => self.on_table(raw)?,
        };
        if consumed {
            Ok(())
        } else {
            Err(self.unexpected(trimmed))
        }
    }

    /// Comments are skipped, except that a `# language:` directive selects
    /// the keyword table while nothing but comments has been read.
    fn comment(&mut self, line: &str) -> Result<(), ParseError> {
        if self.state != ParseState::Init || !self.tags.is_empty() || self.variant != Variant::Feature
        {
            return Ok(());
        }
        let body = line.trim_start_matches('#').trim();
        let Some(language) = body
            .get(..9)
            .filter(|prefix| prefix.eq_ignore_ascii_case("language:"))
            .and_then(|_| body.get(9..))
            .map(str::trim)
        else {
            return Ok(());
        };
        if self.explicit_language {
            debug!("ignoring language directive `{language}`: language fixed by caller");
            return Ok(());
        }
        let Some(keywords) = self.lookup.lookup(language) else {
            return Err(self.error(
                ParseErrorKind::UnknownLanguage {
                    language: language.to_string(),
                },
                line,
            ));
        };
        debug!("language directive selects `{language}`");
        self.active = Some((language.to_string(), keywords));
        Ok(())
    }

    fn on_init(&mut self, line: &str) -> Result<bool, ParseError> {
        if line.starts_with('@') {
            let tags = self.parse_tags(line)?;
            self.tags.extend(tags);
            return Ok(true);
        }
        if let Some((keyword, title)) = self.match_keyword(KeywordCategory::Feature, line) {
            self.start_feature(keyword, title);
            self.state = ParseState::Feature;
            return Ok(true);
        }
        Ok(false)
    }

    fn on_container(&mut self, line: &str) -> Result<bool, ParseError> {
        if self.detect_taggable_statement(line)? {
            return Ok(true);
        }
        if let Some((keyword, title)) = self.match_keyword(KeywordCategory::Background, line) {
            self.start_background(keyword, title, line)?;
            self.state = ParseState::Background;
            return Ok(true);
        }
        let description = match (self.rule.as_mut(), self.feature.as_mut()) {
            (Some(rule), _) => &mut rule.description,
            (None, Some(feature)) => &mut feature.description,
            (None, None) => return Ok(false),
        };
        description.push(line.to_string());
        Ok(true)
    }

    /// Tag lines and the headers of taggable statements (Rule, Scenario,
    /// Scenario Outline, Examples).
    fn detect_taggable_statement(&mut self, line: &str) -> Result<bool, ParseError> {
        if line.starts_with('@') {
            let tags = self.parse_tags(line)?;
            self.tags.extend(tags);
            self.state = ParseState::TaggableStatement;
            return Ok(true);
        }
        if let Some((keyword, title)) = self.match_keyword(KeywordCategory::Rule, line) {
            if self.feature.is_none() {
                return Err(self.unexpected(line));
            }
            self.start_rule(keyword, title);
            self.state = ParseState::Rule;
            return Ok(true);
        }
        if let Some((keyword, title)) = self.match_keyword(KeywordCategory::Scenario, line) {
            if !self.has_container() {
                return Err(self.unexpected(line));
            }
            let scenario = Scenario {
                keyword: keyword.to_string(),
                title: title.to_string(),
                tags: mem::take(&mut self.tags),
                line: self.line,
                ..Scenario::default()
            };
            self.start_statement(Statement::Scenario(scenario));
            self.state = ParseState::Scenario;
            return Ok(true);
        }
        if let Some((keyword, title)) = self.match_keyword(KeywordCategory::ScenarioOutline, line) {
            if !self.has_container() {
                return Err(self.unexpected(line));
            }
            let outline = ScenarioOutline {
                keyword: keyword.to_string(),
                title: title.to_string(),
                tags: mem::take(&mut self.tags),
                line: self.line,
                ..ScenarioOutline::default()
            };
            self.start_statement(Statement::Outline(outline));
            self.state = ParseState::Scenario;
            return Ok(true);
        }
        if let Some((keyword, title)) = self.match_keyword(KeywordCategory::Examples, line) {
            self.start_examples(keyword, title, line)?;
            self.state = ParseState::Table;
            return Ok(true);
        }
        Ok(false)
    }

    /// Description phase of a Background, Scenario or Outline.
    fn on_statement(&mut self, line: &str) -> Result<bool, ParseError> {
        if let Some(step) = self.parse_step(line)? {
            self.push_step(step);
            self.state = ParseState::Steps;
            return Ok(true);
        }
        if self.detect_taggable_statement(line)? {
            return Ok(true);
        }
        match self.statement.as_mut() {
            Some(statement) => {
                statement.description_mut().push(line.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn on_steps(&mut self, raw: &str) -> Result<bool, ParseError> {
        let stripped = raw.trim_start();
        if let Some((fence, content_type)) = classify::match_fence(stripped) {
            if !self.has_steps() {
                return Err(self.error(ParseErrorKind::MultilineTextBeforeStep, raw));
            }
            let leading = raw.chars().count().saturating_sub(stripped.chars().count());
            let content_type = if content_type.is_empty() {
                PLAIN_TEXT
            } else {
                content_type
            };
            self.multiline = Some(Multiline {
                start: self.line,
                terminator: fence,
                leading,
                content_type: content_type.to_string(),
                lines: Vec::new(),
            });
            self.state = ParseState::MultilineText;
            return Ok(true);
        }

        let line = raw.trim();
        if let Some(step) = self.parse_step(line)? {
            self.push_step(step);
            return Ok(true);
        }
        if self.detect_taggable_statement(line)? {
            return Ok(true);
        }
        if matches!(self.statement, Some(Statement::Background(_)))
            && self.has_steps()
            && self.match_keyword(KeywordCategory::Background, line).is_some()
        {
            return Err(self.error(ParseErrorKind::DuplicateBackground, line));
        }
        if line.starts_with('|') {
            if !self.has_steps() {
                return Err(self.error(ParseErrorKind::TableWithoutStep, line));
            }
            self.state = ParseState::Table;
            return self.on_table(line);
        }
        Ok(false)
    }

    fn on_multiline_text(&mut self, raw: &str) -> Result<bool, ParseError> {
        let Some((terminator, leading)) = self
            .multiline
            .as_ref()
            .map(|block| (block.terminator, block.leading))
        else {
            return Ok(false);
        };
        if raw.trim().starts_with(terminator) {
            self.close_multiline();
            self.state = ParseState::Steps;
            return Ok(true);
        }
        let (prefix, content) = split_at_column(raw, leading);
        if !prefix.trim().is_empty() {
            return Err(self.error(
                ParseErrorKind::BadIndent {
                    prefix: prefix.to_string(),
                },
                raw,
            ));
        }
        if let Some(block) = self.multiline.as_mut() {
            block.lines.push(content.trim_end().to_string());
        }
        Ok(true)
    }

    fn on_table(&mut self, raw: &str) -> Result<bool, ParseError> {
        let line = raw.trim();
        if !line.starts_with('|') {
            self.close_table();
            self.state = ParseState::Steps;
            return self.on_steps(raw);
        }
        if !line.ends_with('|') {
            warn!(
                "Malformed table row at {}: line {}",
                self.source.unwrap_or("<string>"),
                self.line
            );
        }
        let cells = split_cells(line);
        let Some(table) = self.table.as_mut() else {
            self.table = Some(Table::new(cells, self.line));
            return Ok(true);
        };
        if cells.len() != table.headings.len() {
            let expected = table.headings.len();
            return Err(self.error(
                ParseErrorKind::MalformedTable {
                    expected,
                    actual: cells.len(),
                },
                line,
            ));
        }
        table.rows.push(TableRow {
            cells,
            line: self.line,
        });
        Ok(true)
    }

    fn start_feature(&mut self, keyword: &str, title: &str) {
        let language = self.language_code().to_string();
        self.feature = Some(Feature {
            source: self.source.map(str::to_string),
            language,
            keyword: keyword.to_string(),
            title: title.to_string(),
            tags: mem::take(&mut self.tags),
            line: self.line,
            ..Feature::default()
        });
    }

    fn start_rule(&mut self, keyword: &str, title: &str) {
        self.close_statement();
        self.close_rule();
        self.last_step_type = None;
        self.rule = Some(Rule {
            keyword: keyword.to_string(),
            title: title.to_string(),
            tags: mem::take(&mut self.tags),
            line: self.line,
            ..Rule::default()
        });
    }

    fn start_background(&mut self, keyword: &str, title: &str, line: &str) -> Result<(), ParseError> {
        if !self.tags.is_empty() {
            let tags = self.tags.iter().map(|tag| tag.name.clone()).collect();
            return Err(self.error(ParseErrorKind::BackgroundTagged { tags }, line));
        }
        let populated = self
            .container()
            .and_then(|container| container.background())
            .is_some_and(|background| !background.steps.is_empty());
        if populated {
            return Err(self.error(ParseErrorKind::DuplicateBackground, line));
        }
        let background = Background {
            keyword: keyword.to_string(),
            title: title.to_string(),
            line: self.line,
            ..Background::default()
        };
        self.start_statement(Statement::Background(background));
        Ok(())
    }

    fn start_statement(&mut self, statement: Statement) {
        self.close_statement();
        self.last_step_type = None;
        self.statement = Some(statement);
    }

    fn start_examples(&mut self, keyword: &str, title: &str, line: &str) -> Result<(), ParseError> {
        if !matches!(self.statement, Some(Statement::Outline(_))) {
            return Err(self.error(ParseErrorKind::ExamplesOutsideOutline, line));
        }
        let examples = Examples {
            keyword: keyword.to_string(),
            title: title.to_string(),
            tags: mem::take(&mut self.tags),
            table: None,
            line: self.line,
        };
        if let Some(Statement::Outline(outline)) = self.statement.as_mut() {
            outline.examples.push(examples);
        }
        self.examples_open = true;
        Ok(())
    }

    fn close_statement(&mut self) {
        let Some(closed) = self.statement.take().map(Closed::from) else {
            return;
        };
        let Some(container) = self.container_mut() else {
            return;
        };
        match closed {
            Closed::Background(background) => container.set_background(background),
            Closed::Scenario(scenario) => container.push_scenario(scenario),
        }
    }

    fn close_rule(&mut self) {
        let Some(rule) = self.rule.take() else {
            return;
        };
        if let Some(feature) = self.feature.as_mut() {
            feature.rules.push(rule);
        }
    }

    /// Attach the collected table to the open Examples block, or else to the
    /// last step.
    fn close_table(&mut self) {
        let table = self.table.take();
        if mem::take(&mut self.examples_open) {
            if let Some(Statement::Outline(outline)) = self.statement.as_mut() {
                if let Some(examples) = outline.examples.last_mut() {
                    examples.table = table;
                }
            }
            return;
        }
        let Some(table) = table else {
            return;
        };
        if let Some(step) = self.last_step_mut() {
            if !step.has_argument() {
                step.strip_trailing_colon();
            }
            step.table = Some(table);
        }
    }

    fn close_multiline(&mut self) {
        let Some(block) = self.multiline.take() else {
            return;
        };
        let text = Text {
            value: block.lines.join("\n"),
            content_type: block.content_type,
            line: block.start,
        };
        if let Some(step) = self.last_step_mut() {
            if !step.has_argument() {
                step.strip_trailing_colon();
            }
            step.docstring = Some(text);
        }
    }

    fn finish_pending(&mut self) {
        if let Some(block) = self.multiline.take() {
            warn!(
                "Unterminated multiline text at {}: line {}",
                self.source.unwrap_or("<string>"),
                block.start
            );
        }
        if let Some(tag) = self.tags.first() {
            warn!(
                "Tags without a statement at {}: line {}",
                self.source.unwrap_or("<string>"),
                tag.line
            );
        }
    }

    fn finish_feature(mut self) -> Option<Feature> {
        self.finish_pending();
        self.close_statement();
        self.close_rule();
        self.feature
    }

    fn finish_rule(mut self) -> Rule {
        self.finish_pending();
        self.close_statement();
        self.rule.unwrap_or_default()
    }

    fn finish_steps(mut self) -> Vec<Step> {
        self.finish_pending();
        self.statement
            .map(|mut statement| mem::take(statement.steps_mut()))
            .unwrap_or_default()
    }

    fn parse_step(&mut self, line: &str) -> Result<Option<Step>, ParseError> {
        let keywords = self.keywords();
        let Some(found) = classify::match_step(keywords, line) else {
            return Ok(None);
        };
        let Some(step_type) = found.resolve(&mut self.last_step_type) else {
            return Err(self.error(ParseErrorKind::NoPreviousStep, line));
        };
        Ok(Some(Step {
            keyword: found.keyword().to_string(),
            step_type,
            text: found.text.to_string(),
            table: None,
            docstring: None,
            line: self.line,
        }))
    }

    fn parse_tags(&self, line: &str) -> Result<Vec<Tag>, ParseError> {
        classify::parse_tags(line, self.line).map_err(|kind| self.error(kind, line))
    }

    fn push_step(&mut self, step: Step) {
        if let Some(statement) = self.statement.as_mut() {
            statement.steps_mut().push(step);
        }
    }

    fn has_steps(&self) -> bool {
        self.statement
            .as_ref()
            .is_some_and(|statement| !statement.steps().is_empty())
    }

    fn last_step_mut(&mut self) -> Option<&mut Step> {
        self.statement
            .as_mut()
            .and_then(|statement| statement.steps_mut().last_mut())
    }

    /// Match a structural keyword, installing the default language when
    /// none is active yet.
    fn match_keyword<'l>(
        &mut self,
        category: KeywordCategory,
        line: &'l str,
    ) -> Option<(&'a str, &'l str)> {
        classify::match_keyword(self.keywords(), category, line)
    }

    fn keywords(&mut self) -> &'a LanguageKeywords {
        if let Some((_, keywords)) = &self.active {
            return *keywords;
        }
        debug!("no language selected; using `{}`", self.default_language);
        self.active = Some((self.default_language.to_string(), self.default_keywords));
        self.default_keywords
    }

    /// Keywords for diagnosis, without installing a language.
    fn peek_keywords(&self) -> &'a LanguageKeywords {
        self.active
            .as_ref()
            .map_or(self.default_keywords, |(_, keywords)| *keywords)
    }

    fn language_code(&self) -> &str {
        self.active
            .as_ref()
            .map_or(self.default_language, |(code, _)| code.as_str())
    }

    fn container(&self) -> Option<&dyn Container> {
        match (&self.rule, &self.feature) {
            (Some(rule), _) => Some(rule),
            (None, Some(feature)) => Some(feature),
            (None, None) => None,
        }
    }

    fn container_mut(&mut self) -> Option<&mut dyn Container> {
        match (&mut self.rule, &mut self.feature) {
            (Some(rule), _) => Some(rule),
            (None, Some(feature)) => Some(feature),
            (None, None) => None,
        }
    }

    fn has_container(&self) -> bool {
        self.rule.is_some() || self.feature.is_some()
    }

    /// Whether the current container already holds a scenario, counting the
    /// open statement.
    fn container_has_scenarios(&self) -> bool {
        self.statement.as_ref().is_some_and(Statement::is_scenario)
            || self
                .container()
                .is_some_and(|container| !container.scenarios().is_empty())
    }

    fn unexpected(&self, line: &str) -> ParseError {
        let reason = oracle::diagnose(self, line);
        self.error(
            ParseErrorKind::UnexpectedLine {
                state: self.state,
                reason: reason.map(str::to_string),
            },
            line,
        )
    }

    fn error(&self, kind: ParseErrorKind, line: &str) -> ParseError {
        ParseError::new(
            kind,
            Position {
                line: self.line,
                text: Some(line.trim().to_string()),
                source: self.source.map(str::to_string),
            },
        )
    }
}

/// Split `raw` after `column` characters.
fn split_at_column(raw: &str, column: usize) -> (&str, &str) {
    raw.char_indices()
        .nth(column)
        .map_or((raw, ""), |(index, _)| raw.split_at(index))
}
