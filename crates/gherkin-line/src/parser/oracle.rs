//! Explains why a line could not be consumed.
//!
//! The rejected line is re-tested against the structural keywords and the
//! first match selects a message that depends on what the session has seen
//! so far. Diagnosis only reads the session.

use super::Session;
use super::state::Variant;
use crate::classify::match_keyword;
use crate::keywords::KeywordCategory;

pub(super) fn diagnose(session: &Session<'_>, line: &str) -> Option<&'static str> {
    let keywords = session.peek_keywords();
    let is = |category| match_keyword(keywords, category, line).is_some();

    if is(KeywordCategory::Feature) {
        return Some(if session.feature.is_some() {
            "Multiple features in one file are not supported."
        } else {
            "Feature should not be used here."
        });
    }
    if is(KeywordCategory::Rule) {
        return Some("Rule should not be used here.");
    }
    if is(KeywordCategory::Background) {
        return Some(if session.container_has_scenarios() {
            "Background may not occur after Scenario/ScenarioOutline."
        } else if session.tags.is_empty() {
            "Background should not be used here."
        } else {
            "Background does not support tags."
        });
    }
    if is(KeywordCategory::Scenario) {
        return Some(if session.has_container() {
            "Scenario should not be used here."
        } else {
            "Scenario may not occur before Feature."
        });
    }
    if is(KeywordCategory::ScenarioOutline) {
        return Some(if session.has_container() {
            "ScenarioOutline should not be used here."
        } else {
            "ScenarioOutline may not occur before Feature."
        });
    }
    if session.variant == Variant::Feature && session.feature.is_none() {
        return Some("No feature found.");
    }
    None
}
