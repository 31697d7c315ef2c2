//! Selecting parsed scenarios with tag expressions.

use gherkin_line::{Feature, Tag, parse_feature};
use gherkin_line_tags::{TagExpression, merge_tag_sets};
use rstest::{fixture, rstest};

fn names(tags: &[Tag]) -> impl Iterator<Item = &str> {
    tags.iter().map(|tag| tag.name.as_str())
}

#[fixture]
fn feature() -> Feature {
    let text = concat!(
        "@shop\n",
        "Feature: Catalogue\n",
        "  @smoke @wip:2\n",
        "  Scenario: browse\n",
        "    Given a catalogue\n",
        "  @slow\n",
        "  Scenario: import\n",
        "    Given a supplier feed\n",
        "  @admin\n",
        "  Rule: pricing\n",
        "    @smoke\n",
        "    Scenario: discount\n",
        "      Given a sale\n",
    );
    match parse_feature(text, None, None) {
        Ok(Some(feature)) => feature,
        Ok(None) => panic!("no feature parsed"),
        Err(err) => panic!("{err}"),
    }
}

/// Titles of scenarios whose inherited tags satisfy `expression`.
fn select<'f>(feature: &'f Feature, expression: &TagExpression) -> Vec<&'f str> {
    feature
        .all_scenarios()
        .filter(|(rule, scenario)| {
            let inherited = merge_tag_sets(
                names(&feature.tags),
                rule.map(|rule| names(&rule.tags).collect::<Vec<_>>())
                    .unwrap_or_default(),
            );
            let effective = merge_tag_sets(inherited, names(scenario.tags()));
            expression.matches(effective.iter().map(String::as_str))
        })
        .map(|(_, scenario)| scenario.title())
        .collect()
}

#[rstest]
#[case::everything(&[], &["browse", "import", "discount"])]
#[case::smoke(&["@smoke"], &["browse", "discount"])]
#[case::feature_tag_is_inherited(&["@shop"], &["browse", "import", "discount"])]
#[case::rule_tag_is_inherited(&["@admin"], &["discount"])]
#[case::either(&["@slow,@admin"], &["import", "discount"])]
#[case::negated(&["~@slow", "-@admin"], &["browse"])]
fn selects_scenarios(feature: Feature, #[case] clauses: &[&str], #[case] expected: &[&str]) {
    let expression = match TagExpression::compile(clauses) {
        Ok(expression) => expression,
        Err(err) => panic!("{err}"),
    };
    assert_eq!(select(&feature, &expression), expected);
}

#[rstest]
fn parsed_limits_compile_into_the_expression(feature: Feature) {
    let Some(browse) = feature.scenarios.first() else {
        panic!("browse scenario missing");
    };
    let written: Vec<String> = browse.tags().iter().map(ToString::to_string).collect();
    assert_eq!(written, ["@smoke", "@wip:2"]);
    let expression = match TagExpression::compile(&written) {
        Ok(expression) => expression,
        Err(err) => panic!("{err}"),
    };
    assert_eq!(expression.limit("wip"), Some(2));
    assert_eq!(expression.limit("@wip"), Some(2));
    assert_eq!(expression.limit("smoke"), None);
    assert_eq!(select(&feature, &expression), ["browse"]);
}
