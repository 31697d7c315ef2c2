//! Scenario selection by tag expression.
//!
//! A scenario inherits the tags of its feature and of its enclosing rule.
//! Outlines are also matched per Examples block, whose tags apply to the
//! rows they generate; the outline is selected when any block matches.

use gherkin_line::{Feature, Rule, ScenarioItem, Tag};
use gherkin_line_tags::{TagExpression, merge_tag_sets};
use serde::Serialize;

/// A scenario chosen by [`select_scenarios`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectedScenario<'f> {
    /// Source identifier of the feature.
    pub source: Option<&'f str>,
    /// Title of the enclosing rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<&'f str>,
    /// Scenario title.
    pub title: &'f str,
    /// Line of the scenario header.
    pub line: usize,
    /// Effective tags, feature tags first.
    pub tags: Vec<String>,
}

fn names(tags: &[Tag]) -> impl Iterator<Item = &str> {
    tags.iter().map(|tag| tag.name.as_str())
}

/// Feature, rule and scenario tags in declaration order, without duplicates.
#[must_use]
pub fn effective_tags(feature: &Feature, rule: Option<&Rule>, scenario: &ScenarioItem) -> Vec<String> {
    let inherited = match rule {
        Some(rule) => merge_tag_sets(names(&feature.tags), names(&rule.tags)),
        None => merge_tag_sets(names(&feature.tags), std::iter::empty::<&str>()),
    };
    merge_tag_sets(inherited, names(scenario.tags()))
}

fn is_selected(expression: &TagExpression, scenario: &ScenarioItem, tags: &[String]) -> bool {
    let matches = |tags: &[String]| expression.matches(tags.iter().map(String::as_str));
    match scenario {
        ScenarioItem::Outline(outline) if !outline.examples.is_empty() => {
            outline.examples.iter().any(|examples| {
                let variant = merge_tag_sets(tags, names(&examples.tags));
                matches(&variant)
            })
        }
        _ => matches(tags),
    }
}

/// Scenarios of `feature` whose effective tags satisfy `expression`, in
/// source order.
#[must_use]
pub fn select_scenarios<'f>(
    feature: &'f Feature,
    expression: &TagExpression,
) -> Vec<SelectedScenario<'f>> {
    feature
        .all_scenarios()
        .filter_map(|(rule, scenario)| {
            let tags = effective_tags(feature, rule, scenario);
            is_selected(expression, scenario, &tags).then(|| SelectedScenario {
                source: feature.source.as_deref(),
                rule: rule.map(|rule| rule.title.as_str()),
                title: scenario.title(),
                line: scenario.line(),
                tags,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rstest::{fixture, rstest};

    use super::*;

    #[fixture]
    fn feature() -> Feature {
        let text = concat!(
            "@web\n",
            "Feature: Shop\n",
            "  @fast @web\n",
            "  Scenario: search\n",
            "    Given a query\n",
            "  Scenario Outline: buy <item>\n",
            "    Given <item>\n",
            "    @smoke\n",
            "    Examples: cheap\n",
            "      | item |\n",
            "      | tea  |\n",
            "    Examples: dear\n",
            "      | item  |\n",
            "      | gold  |\n",
            "  @admin\n",
            "  Rule: stock\n",
            "    Scenario: restock\n",
            "      Given an empty shelf\n",
        );
        match gherkin_line::parse_feature(text, None, Some("shop.feature")) {
            Ok(Some(feature)) => feature,
            Ok(None) => panic!("no feature"),
            Err(err) => panic!("{err}"),
        }
    }

    fn compile(clauses: &[&str]) -> TagExpression {
        match TagExpression::compile(clauses) {
            Ok(expression) => expression,
            Err(err) => panic!("{err}"),
        }
    }

    #[rstest]
    fn effective_tags_merge_without_duplicates(feature: Feature) {
        let tags: Vec<_> = feature
            .all_scenarios()
            .map(|(rule, scenario)| effective_tags(&feature, rule, scenario))
            .collect();
        assert_eq!(
            tags,
            [
                vec!["web".to_string(), "fast".to_string()],
                vec!["web".to_string()],
                vec!["web".to_string(), "admin".to_string()],
            ]
        );
    }

    #[rstest]
    #[case::all(&[], &["search", "buy <item>", "restock"])]
    #[case::scenario_tag(&["@fast"], &["search"])]
    #[case::examples_tag(&["@smoke"], &["buy <item>"])]
    #[case::negated_examples_tag(&["~@smoke", "~@fast", "~@admin"], &["buy <item>"])]
    #[case::rule_tag(&["@admin"], &["restock"])]
    fn selects_by_expression(
        feature: Feature,
        #[case] clauses: &[&str],
        #[case] expected: &[&str],
    ) {
        let expression = compile(clauses);
        let titles: Vec<_> = select_scenarios(&feature, &expression)
            .into_iter()
            .map(|selected| selected.title)
            .collect();
        assert_eq!(titles, expected);
    }

    #[rstest]
    fn selections_carry_location(feature: Feature) {
        let expression = compile(&["@admin"]);
        let selected = select_scenarios(&feature, &expression);
        assert_eq!(
            selected,
            [SelectedScenario {
                source: Some("shop.feature"),
                rule: Some("stock"),
                title: "restock",
                line: 17,
                tags: vec!["web".to_string(), "admin".to_string()],
            }]
        );
    }
}
