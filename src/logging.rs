//! File logging setup
//!
//! Logs go to `changelog-resolver.log` in the data directory so that stdout
//! stays reserved for changelog output.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::log_path;

/// Environment variable overriding the CLI log level
pub const LOG_ENV_VAR: &str = "CHANGELOG_RESOLVER_LOG";

/// Install the global subscriber writing to the default log file.
///
/// The returned guard flushes pending records when dropped and must be held
/// until the program exits.
pub fn init_logging(level: &str, json: bool) -> std::io::Result<WorkerGuard> {
    init_logging_at(&log_path(), level, json)
}

fn init_logging_at(path: &Path, level: &str, json: bool) -> std::io::Result<WorkerGuard> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(dir)?;

    let file_name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_else(|| "changelog-resolver.log".into());
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        dir, file_name,
    ));

    let filter = build_filter(std::env::var(LOG_ENV_VAR).ok(), level);

    if json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_writer(writer))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_ansi(false).with_target(true).with_writer(writer))
            .init();
    }

    Ok(guard)
}

fn build_filter(env_directives: Option<String>, level: &str) -> EnvFilter {
    env_directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .or_else(|| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new("info"))
}
