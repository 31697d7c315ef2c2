//! Smoke tests for the `gherkin-line` binary.

use std::fs;
use std::str;

use assert_cmd::Command;
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[fixture]
fn features() -> TempDir {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join("cart.feature"),
        concat!(
            "@shop\n",
            "Feature: Cart\n",
            "  @smoke\n",
            "  Scenario: add\n",
            "    Given an empty cart\n",
            "    When I add an apple\n",
            "    Then the cart holds 1 item\n",
        ),
    )
    .expect("write cart");
    fs::write(
        dir.path().join("konto.feature"),
        concat!(
            "# language: de\n",
            "Funktionalität: Konto\n",
            "  Szenario: Anmeldung\n",
            "    Angenommen ein Konto\n",
        ),
    )
    .expect("write konto");
    fs::write(
        dir.path().join("broken.feature"),
        "Scenario: orphan\n  Given nothing\n",
    )
    .expect("write broken");
    dir
}

fn binary() -> Command {
    let mut cmd = Command::cargo_bin("gherkin-line").expect("binary exists");
    cmd.env_remove("GHERKIN_LINE_LOG_LEVEL")
        .env_remove("GHERKIN_LINE_LANGUAGE");
    cmd
}

#[rstest]
fn parse_prints_the_tree_as_json(features: TempDir) {
    let output = binary()
        .arg("parse")
        .arg(features.path().join("cart.feature"))
        .output()
        .expect("runs");
    assert!(output.status.success());
    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(tree["title"], "Cart");
    assert_eq!(tree["language"], "en");
    assert_eq!(tree["tags"][0]["name"], "shop");
    assert_eq!(tree["scenarios"][0]["kind"], "scenario");
    assert_eq!(tree["scenarios"][0]["steps"][2]["step_type"], "then");
}

#[rstest]
fn parse_honours_language_directives(features: TempDir) {
    let output = binary()
        .arg("parse")
        .arg(features.path().join("konto.feature"))
        .output()
        .expect("runs");
    assert!(output.status.success());
    let tree: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
    assert_eq!(tree["language"], "de");
    assert_eq!(tree["scenarios"][0]["steps"][0]["step_type"], "given");
}

#[rstest]
fn check_fails_with_diagnostics(features: TempDir) {
    let output = binary()
        .arg("check")
        .arg(features.path().join("cart.feature"))
        .arg(features.path().join("broken.feature"))
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(1));
    let stdout = str::from_utf8(&output.stdout).expect("utf8");
    assert!(stdout.contains("(1 scenarios)"), "{stdout}");
    assert!(
        stdout.contains("REASON: Scenario may not occur before Feature."),
        "{stdout}"
    );
}

#[rstest]
fn select_filters_by_tags(features: TempDir) {
    let cart = features.path().join("cart.feature");
    let output = binary()
        .args(["select", "--tags", "@smoke,@slow", "--tags", "~@wip"])
        .arg(&cart)
        .output()
        .expect("runs");
    assert!(output.status.success());
    let stdout = str::from_utf8(&output.stdout).expect("utf8");
    assert_eq!(
        stdout,
        format!("{}:4 :: add [tags: shop, smoke]\n", cart.display())
    );
}

#[rstest]
fn explicit_language_conflicts_are_reported(features: TempDir) {
    let output = binary()
        .env("GHERKIN_LINE_LANGUAGE", "en")
        .arg("check")
        .arg(features.path().join("konto.feature"))
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(1));
    let stdout = str::from_utf8(&output.stdout).expect("utf8");
    assert!(stdout.contains("No feature found."), "{stdout}");
}

#[test]
fn invalid_configuration_exits_with_two() {
    let output = binary()
        .env("GHERKIN_LINE_LOG_LEVEL", "loud")
        .arg("languages")
        .output()
        .expect("runs");
    assert_eq!(output.status.code(), Some(2));
    let stderr = str::from_utf8(&output.stderr).expect("utf8");
    assert!(stderr.contains("unknown log level"), "{stderr}");
}
