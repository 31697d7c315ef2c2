//! Pure line classification helpers used by the parser.
//!
//! Nothing here touches parser state: callers pass the active keyword table
//! and the (usually trimmed) line and decide what to do with the result.

use crate::error::ParseErrorKind;
use crate::keywords::{KeywordCategory, LanguageKeywords};
use crate::model::{StepType, Tag};

/// Docstring fences in detection order.
pub(crate) const FENCES: [&str; 2] = [r#"""""#, "'''"];

/// Find the first alias of `category` such that `line` starts with
/// `alias:`, returning the alias and the trimmed title after the colon.
pub(crate) fn match_keyword<'k, 'l>(
    keywords: &'k LanguageKeywords,
    category: KeywordCategory,
    line: &'l str,
) -> Option<(&'k str, &'l str)> {
    keywords.aliases(category).iter().find_map(|alias| {
        line.strip_prefix(alias.as_str())
            .and_then(|rest| rest.strip_prefix(':'))
            .map(|title| (alias.as_str(), title.trim()))
    })
}

/// A line recognised as a step, before its type is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct StepMatch<'k, 'l> {
    pub(crate) alias: &'k str,
    pub(crate) category: KeywordCategory,
    pub(crate) text: &'l str,
}

impl StepMatch<'_, '_> {
    /// Resolve the step type against the last concrete type of the
    /// statement, updating it when this step introduces a new one.
    ///
    /// The generic `*` alias inherits the previous type when one exists.
    /// Returns `None` for a conjunction with nothing to inherit.
    pub(crate) fn resolve(&self, last: &mut Option<StepType>) -> Option<StepType> {
        if self.alias.starts_with('*') {
            if let Some(previous) = *last {
                return Some(previous);
            }
        }
        self.category.step_type()?.resolve(last)
    }

    /// Keyword as stored on the step.
    pub(crate) fn keyword(&self) -> &str {
        self.alias.trim_end()
    }
}

/// Match `line` against the step aliases in priority order.
pub(crate) fn match_step<'k, 'l>(
    keywords: &'k LanguageKeywords,
    line: &'l str,
) -> Option<StepMatch<'k, 'l>> {
    KeywordCategory::STEPS.into_iter().find_map(|category| {
        keywords.aliases(category).iter().find_map(|alias| {
            strip_prefix_any_case(line, alias).map(|rest| StepMatch {
                alias: alias.as_str(),
                category,
                text: rest.trim(),
            })
        })
    })
}

/// Strip `prefix` from `line`, falling back to a case-insensitive
/// comparison character by character.
fn strip_prefix_any_case<'l>(line: &'l str, prefix: &str) -> Option<&'l str> {
    if let Some(rest) = line.strip_prefix(prefix) {
        return Some(rest);
    }
    let mut chars = line.chars();
    for expected in prefix.chars() {
        let actual = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(chars.as_str())
}

/// Split a tag line into tags.
///
/// Words starting with `@` become tags, a word starting with `#` ends the
/// line, and any other word is rejected.
pub(crate) fn parse_tags(line: &str, line_number: usize) -> Result<Vec<Tag>, ParseErrorKind> {
    let mut tags = Vec::new();
    for word in line.split_whitespace() {
        if let Some(name) = word.strip_prefix('@') {
            tags.push(Tag::from_word(name, line_number));
        } else if word.starts_with('#') {
            break;
        } else {
            return Err(ParseErrorKind::BadTag {
                word: word.to_string(),
            });
        }
    }
    Ok(tags)
}

/// Fence opening a docstring on `stripped`, with the content type after it.
pub(crate) fn match_fence(stripped: &str) -> Option<(&'static str, &str)> {
    FENCES
        .into_iter()
        .find_map(|fence| stripped.strip_prefix(fence).map(|rest| (fence, rest.trim())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keywords::{BuiltinKeywords, KeywordTable};
    use rstest::{fixture, rstest};

    #[fixture]
    fn english() -> &'static LanguageKeywords {
        match BuiltinKeywords.lookup("en") {
            Some(keywords) => keywords,
            None => panic!("english keywords are bundled"),
        }
    }

    #[rstest]
    #[case(KeywordCategory::Feature, "Feature: Login", Some(("Feature", "Login")))]
    #[case(KeywordCategory::Feature, "Ability:Fly  ", Some(("Ability", "Fly")))]
    #[case(KeywordCategory::Scenario, "Scenario Outline: x", None)]
    #[case(KeywordCategory::ScenarioOutline, "Scenario Outline: x", Some(("Scenario Outline", "x")))]
    #[case(KeywordCategory::Feature, "Feature Login", None)]
    #[case(KeywordCategory::Feature, "feature: lower", None)]
    fn matches_keyword_with_colon(
        english: &'static LanguageKeywords,
        #[case] category: KeywordCategory,
        #[case] line: &str,
        #[case] expected: Option<(&str, &str)>,
    ) {
        assert_eq!(match_keyword(english, category, line), expected);
    }

    #[rstest]
    #[case("Given a user", KeywordCategory::Given, "Given ", "a user")]
    #[case("given a user", KeywordCategory::Given, "Given ", "a user")]
    #[case("WHEN it runs  ", KeywordCategory::When, "When ", "it runs")]
    #[case("* anything", KeywordCategory::Given, "* ", "anything")]
    #[case("But not this", KeywordCategory::But, "But ", "not this")]
    fn matches_steps_in_priority_order(
        english: &'static LanguageKeywords,
        #[case] line: &str,
        #[case] category: KeywordCategory,
        #[case] alias: &str,
        #[case] text: &str,
    ) {
        let Some(found) = match_step(english, line) else {
            panic!("{line:?} should be a step");
        };
        assert_eq!((found.category, found.alias, found.text), (category, alias, text));
    }

    #[rstest]
    #[case("Givenness is not a step")]
    #[case("Scenario: nope")]
    #[case("| a |")]
    fn ignores_non_steps(english: &'static LanguageKeywords, #[case] line: &str) {
        assert!(match_step(english, line).is_none());
    }

    #[test]
    fn japanese_aliases_need_no_separator() {
        let Some(japanese) = BuiltinKeywords.lookup("ja") else {
            panic!("japanese keywords are bundled");
        };
        let Some(found) = match_step(japanese, "前提ユーザがいる") else {
            panic!("japanese step should match");
        };
        assert_eq!(found.keyword(), "前提");
        assert_eq!(found.text, "ユーザがいる");
    }

    #[rstest]
    fn generic_alias_inherits_previous_type(english: &'static LanguageKeywords) {
        let mut last = Some(StepType::When);
        let Some(found) = match_step(english, "* another action") else {
            panic!("generic step should match");
        };
        assert_eq!(found.resolve(&mut last), Some(StepType::When));
        assert_eq!(found.keyword(), "*");
    }

    #[rstest]
    fn generic_alias_without_history_becomes_given(english: &'static LanguageKeywords) {
        let mut last = None;
        let Some(found) = match_step(english, "* first") else {
            panic!("generic step should match");
        };
        assert_eq!(found.resolve(&mut last), Some(StepType::Given));
        assert_eq!(last, Some(StepType::Given));
    }

    #[rstest]
    fn conjunction_without_history_is_unresolved(english: &'static LanguageKeywords) {
        let mut last = None;
        let Some(found) = match_step(english, "And more") else {
            panic!("conjunction should match");
        };
        assert_eq!(found.resolve(&mut last), None);
    }

    #[test]
    fn parses_tags_until_comment() {
        let Ok(tags) = parse_tags("@fast @wip:2 # trailing @ignored", 3) else {
            panic!("tags should parse");
        };
        let names: Vec<_> = tags.iter().map(|tag| (tag.name.as_str(), tag.limit, tag.line)).collect();
        assert_eq!(names, vec![("fast", None, 3), ("wip", Some(2), 3)]);
    }

    #[test]
    fn rejects_words_without_sigil() {
        let Err(err) = parse_tags("@fast slow", 1) else {
            panic!("bare word should be rejected");
        };
        assert!(matches!(err, ParseErrorKind::BadTag { ref word } if word == "slow"));
    }

    #[rstest]
    #[case(r#""""json"#, Some((r#"""""#, "json")))]
    #[case("''' ", Some(("'''", "")))]
    #[case(r#""" not a fence"#, None)]
    fn detects_fences(#[case] stripped: &str, #[case] expected: Option<(&str, &str)>) {
        assert_eq!(match_fence(stripped), expected);
    }
}
