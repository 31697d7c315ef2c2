//! Canonical Gherkin rendering of a parsed [`Feature`].
//!
//! The output uses two-space indentation and the keywords recorded in the
//! tree, preceded by a `# language:` directive for non-default languages, so
//! parsing it yields the same tree apart from line numbers. Docstring lines
//! that themselves start with the fence cannot be represented.

use crate::keywords::DEFAULT_LANGUAGE;
use crate::model::{
    Background, Examples, Feature, PLAIN_TEXT, Rule, ScenarioItem, Step, Table, Tag, Text,
};
use crate::table::escape_cell;

/// Render `feature` as Gherkin text.
///
/// # Examples
/// ```
/// use gherkin_line::{parse_feature, render::to_gherkin};
///
/// let text = "Feature: F\n  Scenario: S\n    Given a precondition\n";
/// let feature = parse_feature(text, None, None).unwrap().unwrap();
/// assert_eq!(to_gherkin(&feature), text);
/// ```
#[must_use]
pub fn to_gherkin(feature: &Feature) -> String {
    let mut out = Writer::default();
    if feature.language != DEFAULT_LANGUAGE {
        out.line(0, &format!("# language: {}", feature.language));
    }
    out.tags(0, &feature.tags);
    out.header(0, &feature.keyword, &feature.title);
    out.description(1, &feature.description);
    if let Some(background) = &feature.background {
        out.background(1, background);
    }
    for scenario in &feature.scenarios {
        out.scenario(1, scenario);
    }
    for rule in &feature.rules {
        out.rule(1, rule);
    }
    out.finish()
}

#[derive(Default)]
struct Writer {
    buf: String,
}

impl Writer {
    fn finish(self) -> String {
        self.buf
    }

    fn line(&mut self, depth: usize, text: &str) {
        if !text.is_empty() {
            for _ in 0..depth {
                self.buf.push_str("  ");
            }
            self.buf.push_str(text);
        }
        self.buf.push('\n');
    }

    fn header(&mut self, depth: usize, keyword: &str, title: &str) {
        if title.is_empty() {
            self.line(depth, &format!("{keyword}:"));
        } else {
            self.line(depth, &format!("{keyword}: {title}"));
        }
    }

    fn tags(&mut self, depth: usize, tags: &[Tag]) {
        if tags.is_empty() {
            return;
        }
        let rendered: Vec<String> = tags.iter().map(ToString::to_string).collect();
        self.line(depth, &rendered.join(" "));
    }

    fn description(&mut self, depth: usize, lines: &[String]) {
        for text in lines {
            self.line(depth, text);
        }
    }

    fn rule(&mut self, depth: usize, rule: &Rule) {
        self.tags(depth, &rule.tags);
        self.header(depth, &rule.keyword, &rule.title);
        self.description(depth + 1, &rule.description);
        if let Some(background) = &rule.background {
            self.background(depth + 1, background);
        }
        for scenario in &rule.scenarios {
            self.scenario(depth + 1, scenario);
        }
    }

    fn background(&mut self, depth: usize, background: &Background) {
        self.header(depth, &background.keyword, &background.title);
        self.description(depth + 1, &background.description);
        self.steps(depth + 1, &background.steps);
    }

    fn scenario(&mut self, depth: usize, scenario: &ScenarioItem) {
        self.tags(depth, scenario.tags());
        self.header(depth, scenario.keyword(), scenario.title());
        self.description(depth + 1, scenario.description());
        self.steps(depth + 1, scenario.steps());
        if let ScenarioItem::Outline(outline) = scenario {
            for examples in &outline.examples {
                self.examples(depth + 1, examples);
            }
        }
    }

    fn examples(&mut self, depth: usize, examples: &Examples) {
        self.tags(depth, &examples.tags);
        self.header(depth, &examples.keyword, &examples.title);
        if let Some(table) = &examples.table {
            self.table(depth + 1, table);
        }
    }

    fn steps(&mut self, depth: usize, steps: &[Step]) {
        for step in steps {
            let separator = if step.keyword.ends_with('\'') || is_spaceless(&step.keyword) {
                ""
            } else {
                " "
            };
            // The parser drops one colon before the first argument.
            let colon = if step.has_argument() { ":" } else { "" };
            self.line(
                depth,
                &format!("{}{separator}{}{colon}", step.keyword, step.text),
            );
            if let Some(table) = &step.table {
                self.table(depth + 1, table);
            }
            if let Some(docstring) = &step.docstring {
                self.docstring(depth + 1, docstring);
            }
        }
    }

    fn table(&mut self, depth: usize, table: &Table) {
        for row in table.to_rows() {
            let mut text = String::from("|");
            for cell in &row {
                text.push(' ');
                text.push_str(&escape_cell(cell));
                text.push_str(" |");
            }
            self.line(depth, &text);
        }
    }

    fn docstring(&mut self, depth: usize, docstring: &Text) {
        let fence = if docstring.value.contains(r#"""""#) {
            "'''"
        } else {
            r#"""""#
        };
        if docstring.content_type == PLAIN_TEXT {
            self.line(depth, fence);
        } else {
            self.line(depth, &format!("{fence}{}", docstring.content_type));
        }
        for text in docstring.value.split('\n') {
            self.line(depth, text);
        }
        self.line(depth, fence);
    }
}

/// Keywords written in scripts that do not separate words with spaces.
fn is_spaceless(keyword: &str) -> bool {
    keyword.chars().any(|ch| {
        matches!(ch,
            '\u{3040}'..='\u{30ff}' | '\u{3400}'..='\u{4dbf}' | '\u{4e00}'..='\u{9fff}')
    })
}
