//! Helpers for rendering command output.

use std::collections::BTreeMap;
use std::io::Write;

use eyre::{Context, Result};
use gherkin_line::{Feature, ParseError};

use crate::select::SelectedScenario;

pub(crate) fn write_json<T>(writer: &mut dyn Write, value: &T) -> Result<()>
where
    T: serde::Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut *writer, value).wrap_err("failed to serialise output")?;
    writeln!(writer).wrap_err("failed to terminate JSON output")
}

/// One line per checked file: a scenario count or the parse diagnostic.
pub(crate) fn write_check_result(
    writer: &mut dyn Write,
    path: &str,
    result: &Result<Option<Feature>, ParseError>,
) -> Result<()> {
    let written = match result {
        Ok(Some(feature)) => writeln!(
            writer,
            "ok {path} ({} scenarios)",
            feature.all_scenarios().count()
        ),
        Ok(None) => writeln!(writer, "empty {path}"),
        Err(err) => writeln!(writer, "error {err}"),
    };
    written.wrap_err_with(|| format!("failed to write check result for {path}"))
}

pub(crate) fn write_selection(writer: &mut dyn Write, scenario: &SelectedScenario<'_>) -> Result<()> {
    let mut line = format!(
        "{}:{} :: ",
        scenario.source.unwrap_or("<string>"),
        scenario.line
    );
    if let Some(rule) = scenario.rule {
        line.push_str(rule);
        line.push_str(" :: ");
    }
    line.push_str(scenario.title);
    if !scenario.tags.is_empty() {
        line.push_str(" [tags: ");
        line.push_str(&scenario.tags.join(", "));
        line.push(']');
    }
    writeln!(writer, "{line}")
        .wrap_err_with(|| format!("failed to write selected scenario {}", scenario.title))
}

pub(crate) fn write_limits(writer: &mut dyn Write, limits: &BTreeMap<String, u32>) -> Result<()> {
    for (tag, limit) in limits {
        writeln!(writer, "limit @{tag}={limit}")
            .wrap_err_with(|| format!("failed to write limit for @{tag}"))?;
    }
    Ok(())
}

pub(crate) fn write_language(writer: &mut dyn Write, code: &str, name: &str) -> Result<()> {
    writeln!(writer, "{code}\t{name}").wrap_err_with(|| format!("failed to write language {code}"))
}
