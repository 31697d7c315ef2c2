//! Command definitions and dispatch for the `gherkin-line` binary.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use eyre::Result;
use gherkin_line::{BuiltinKeywords, Feature, parse_file};
use gherkin_line_tags::TagExpression;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::{CliConfig, LogLevel};
use crate::error::CliError;
use crate::output::{write_check_result, write_json, write_language, write_limits, write_selection};
use crate::select::{SelectedScenario, select_scenarios};

/// Parse Gherkin feature files and select scenarios by tag.
#[derive(Parser, Debug)]
#[command(name = "gherkin-line", version, about)]
pub struct Cli {
    /// Log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,
    /// Keyword language used for every file, ignoring `# language:` lines.
    #[arg(long, global = true)]
    pub language: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

/// Supported commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the document tree of a feature file as JSON.
    Parse {
        /// Feature file to parse.
        file: PathBuf,
    },
    /// Parse feature files and report diagnostics.
    Check {
        /// Feature files to check.
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// List scenarios whose tags match a tag expression.
    Select(SelectArgs),
    /// List the built-in keyword languages.
    Languages,
}

#[derive(Args, Debug)]
struct SelectArgs {
    /// One OR-clause, e.g. `@fast,@smoke` or `~@wip`; repeated clauses are
    /// combined with AND.
    #[arg(long = "tags", allow_hyphen_values = true)]
    tags: Vec<String>,
    /// Emit JSON instead of human-readable text.
    #[arg(long)]
    json: bool,
    /// Feature files to select from.
    #[arg(required = true)]
    files: Vec<PathBuf>,
}

/// Result of a command that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Everything succeeded.
    Success,
    /// At least one file failed to parse; the diagnostics were written.
    Failed,
}

#[derive(Serialize)]
struct SelectionReport<'a> {
    scenarios: &'a [SelectedScenario<'a>],
    limits: &'a BTreeMap<String, u32>,
}

impl Cli {
    /// Apply the command line flags on top of `config`.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` for an unknown `--language`.
    pub fn configure(&self, config: CliConfig) -> Result<CliConfig, CliError> {
        config.apply_overrides(self.log_level, self.language.as_deref())
    }
}

/// Execute the parsed command, writing its output to `out`.
///
/// # Errors
///
/// Returns an error when a file cannot be parsed (except for `check`, which
/// reports failures through [`Outcome::Failed`]), when a tag expression is
/// invalid or when writing fails.
pub fn run(cli: &Cli, config: &CliConfig, out: &mut dyn Write) -> Result<Outcome> {
    let language = config.language.as_deref();
    match &cli.command {
        Commands::Parse { file } => {
            let feature = load(file, language)?;
            write_json(out, &feature)?;
            Ok(Outcome::Success)
        }
        Commands::Check { files } => check(files, language, out),
        Commands::Select(args) => select(args, language, out),
        Commands::Languages => {
            for (code, name) in BuiltinKeywords::languages() {
                write_language(out, code, name)?;
            }
            Ok(Outcome::Success)
        }
    }
}

fn load(path: &Path, language: Option<&str>) -> Result<Option<Feature>> {
    debug!(path = %path.display(), "parsing feature file");
    Ok(parse_file(path, language).map_err(CliError::from)?)
}

fn check(files: &[PathBuf], language: Option<&str>, out: &mut dyn Write) -> Result<Outcome> {
    let mut failures = 0_usize;
    for path in files {
        let result = parse_file(path, language);
        if result.is_err() {
            failures += 1;
        }
        write_check_result(out, &path.display().to_string(), &result)?;
    }
    info!(files = files.len(), failures, "check finished");
    Ok(if failures == 0 {
        Outcome::Success
    } else {
        Outcome::Failed
    })
}

fn select(args: &SelectArgs, language: Option<&str>, out: &mut dyn Write) -> Result<Outcome> {
    let expression = TagExpression::compile(&args.tags).map_err(CliError::from)?;
    debug!(expression = %expression, "compiled tag expression");
    let features = args
        .files
        .iter()
        .map(|path| load(path, language))
        .collect::<Result<Vec<_>>>()?;
    let selected: Vec<SelectedScenario<'_>> = features
        .iter()
        .flatten()
        .flat_map(|feature| select_scenarios(feature, &expression))
        .collect();
    info!(selected = selected.len(), "selection finished");
    if args.json {
        let report = SelectionReport {
            scenarios: &selected,
            limits: expression.limits(),
        };
        write_json(out, &report)?;
    } else {
        for scenario in &selected {
            write_selection(out, scenario)?;
        }
        write_limits(out, expression.limits())?;
    }
    Ok(Outcome::Success)
}
