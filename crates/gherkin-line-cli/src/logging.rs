//! Structured logging on stderr.
//!
//! Command output goes to stdout, so the subscriber writes to stderr. The
//! parser libraries log through the `log` facade; installing the subscriber
//! with `try_init` also routes those records into tracing.

use tracing_subscriber::EnvFilter;

use crate::config::CliConfig;

fn filter_from_config(config: &CliConfig) -> EnvFilter {
    EnvFilter::new(config.log_level.directive())
}

/// Initialise the logging subsystem based on configuration.
///
/// Log level precedence (highest to lowest):
///
/// 1. CLI `--log-level`
/// 2. `GHERKIN_LINE_LOG_LEVEL`
/// 3. The default level (`warn`)
///
/// A second call is a no-op; the first subscriber wins.
pub fn init_logging(config: &CliConfig) {
    let result = tracing_subscriber::fmt()
        .with_env_filter(filter_from_config(config))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
    if result.is_err() {
        tracing::debug!("logging already initialised");
    }
}
