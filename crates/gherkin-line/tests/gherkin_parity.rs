//! Cross-checks the document tree against the `gherkin` crate.
//!
//! Both parsers read the same well-formed feature text; titles, tags, step
//! types, step text and table cells must agree.

use gherkin::GherkinEnv;
use gherkin_line::{Feature, ScenarioItem, Step, StepType};
use rstest::rstest;

#[derive(Debug, PartialEq, Eq)]
struct StepShape {
    ty: &'static str,
    text: String,
    table: Option<Vec<Vec<String>>>,
    has_docstring: bool,
}

#[derive(Debug, PartialEq, Eq)]
struct ScenarioShape {
    title: String,
    tags: Vec<String>,
    steps: Vec<StepShape>,
    examples: usize,
}

#[derive(Debug, PartialEq, Eq)]
struct FeatureShape {
    title: String,
    tags: Vec<String>,
    background: Option<Vec<StepShape>>,
    scenarios: Vec<ScenarioShape>,
    rules: Vec<(String, Option<Vec<StepShape>>, Vec<ScenarioShape>)>,
}

fn line_step(step: &Step) -> StepShape {
    StepShape {
        ty: match step.step_type {
            StepType::Given => "given",
            StepType::When => "when",
            StepType::Then => "then",
            StepType::And | StepType::But => "conjunction",
        },
        text: step.text.clone(),
        table: step.table.as_ref().map(gherkin_line::Table::to_rows),
        has_docstring: step.docstring.is_some(),
    }
}

fn line_scenario(scenario: &ScenarioItem) -> ScenarioShape {
    ScenarioShape {
        title: scenario.title().to_string(),
        tags: scenario.tags().iter().map(|tag| tag.name.clone()).collect(),
        steps: scenario.steps().iter().map(line_step).collect(),
        examples: match scenario {
            ScenarioItem::Scenario(_) => 0,
            ScenarioItem::Outline(outline) => outline.examples.len(),
        },
    }
}

fn line_shape(feature: &Feature) -> FeatureShape {
    FeatureShape {
        title: feature.title.clone(),
        tags: feature.tags.iter().map(|tag| tag.name.clone()).collect(),
        background: feature
            .background
            .as_ref()
            .map(|background| background.steps.iter().map(line_step).collect()),
        scenarios: feature.scenarios.iter().map(line_scenario).collect(),
        rules: feature
            .rules
            .iter()
            .map(|rule| {
                (
                    rule.title.clone(),
                    rule.background
                        .as_ref()
                        .map(|background| background.steps.iter().map(line_step).collect()),
                    rule.scenarios.iter().map(line_scenario).collect(),
                )
            })
            .collect(),
    }
}

fn reference_step(step: &gherkin::Step) -> StepShape {
    StepShape {
        ty: match step.ty {
            gherkin::StepType::Given => "given",
            gherkin::StepType::When => "when",
            gherkin::StepType::Then => "then",
        },
        text: step.value.clone(),
        table: step.table.as_ref().map(|table| table.rows.clone()),
        has_docstring: step.docstring.is_some(),
    }
}

fn reference_scenario(scenario: &gherkin::Scenario) -> ScenarioShape {
    ScenarioShape {
        title: scenario.name.clone(),
        tags: scenario.tags.clone(),
        steps: scenario.steps.iter().map(reference_step).collect(),
        examples: scenario.examples.len(),
    }
}

fn reference_shape(feature: &gherkin::Feature) -> FeatureShape {
    FeatureShape {
        title: feature.name.clone(),
        tags: feature.tags.clone(),
        background: feature
            .background
            .as_ref()
            .map(|background| background.steps.iter().map(reference_step).collect()),
        scenarios: feature.scenarios.iter().map(reference_scenario).collect(),
        rules: feature
            .rules
            .iter()
            .map(|rule| {
                (
                    rule.name.clone(),
                    rule.background
                        .as_ref()
                        .map(|background| background.steps.iter().map(reference_step).collect()),
                    rule.scenarios.iter().map(reference_scenario).collect(),
                )
            })
            .collect(),
    }
}

#[rstest]
#[case::plain(concat!(
    "Feature: Basket\n",
    "  Scenario: add an item\n",
    "    Given an empty basket\n",
    "    And a catalogue\n",
    "    When I add a book\n",
    "    Then the basket holds 1 item\n",
    "    But the total is unchanged\n",
))]
#[case::tags_and_background(concat!(
    "@shop @slow\n",
    "Feature: Checkout\n",
    "  A description line\n",
    "\n",
    "  Background:\n",
    "    Given a logged in customer\n",
    "\n",
    "  @happy\n",
    "  Scenario: pay by card\n",
    "    When the card is accepted\n",
    "    Then an order exists\n",
))]
#[case::arguments(concat!(
    "Feature: Arguments\n",
    "  Scenario: tables and docstrings\n",
    "    Given users\n",
    "      | name  | role  |\n",
    "      | alice | admin |\n",
    "      | bob   | guest |\n",
    "    When a message arrives\n",
    "      \"\"\"\n",
    "      hello\n",
    "      \"\"\"\n",
    "    Then it is shown\n",
))]
#[case::outline(concat!(
    "Feature: Outlines\n",
    "  Scenario Outline: eat <n>\n",
    "    Given <start> cucumbers\n",
    "    When I eat <n>\n",
    "    Then <left> remain\n",
    "\n",
    "    Examples:\n",
    "      | start | n | left |\n",
    "      | 12    | 5 | 7    |\n",
    "    @big\n",
    "    Examples:\n",
    "      | start | n  | left |\n",
    "      | 20    | 15 | 5    |\n",
))]
#[case::rules(concat!(
    "Feature: Rules\n",
    "  Scenario: outside\n",
    "    Given a\n",
    "\n",
    "  Rule: first rule\n",
    "    Background:\n",
    "      Given shared state\n",
    "    Example: inside\n",
    "      When b\n",
    "      Then c\n",
    "\n",
    "  @tagged\n",
    "  Rule: second rule\n",
    "    Scenario: also inside\n",
    "      Given d\n",
))]
fn agrees_with_the_gherkin_crate(#[case] text: &str) {
    let reference = match gherkin::Feature::parse(text, GherkinEnv::default()) {
        Ok(feature) => feature,
        Err(err) => panic!("reference parser rejected fixture: {err}"),
    };
    let ours = match gherkin_line::parse_feature(text, None, None) {
        Ok(Some(feature)) => feature,
        Ok(None) => panic!("no feature parsed"),
        Err(err) => panic!("{err}"),
    };
    assert_eq!(line_shape(&ours), reference_shape(&reference));
}
