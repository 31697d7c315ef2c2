//! Command line front end for `gherkin-line`.
//!
//! The `gherkin-line` binary parses feature files, reports diagnostics and
//! selects scenarios with `gherkin-line-tags` expressions.
//!
//! # Configuration
//!
//! - `GHERKIN_LINE_LOG_LEVEL`: log verbosity (trace, debug, info, warn,
//!   error)
//! - `GHERKIN_LINE_LANGUAGE`: keyword language for every parsed file
//!
//! `--log-level` and `--language` override the environment.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
mod output;
pub mod select;
