//! Logging initialization using the `tracing` ecosystem.
//!
//! Console output goes to stderr so stdout stays clean for lookup results.
//! File output (daily rotation via `tracing-appender`) is optional. `RUST_LOG`
//! overrides the configured level.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// Call once at program start. Keep the returned guard alive until exit when
/// `log_dir` is set, otherwise buffered file output is lost.
///
/// # Parameters
///
/// - `log_level`: default filter if `RUST_LOG` is not set (e.g. `"info"`)
/// - `log_dir`: optional directory for daily-rotating log files
/// - `module_name`: log file prefix (e.g. `"tally"`)
pub fn init_logging(log_level: &str, log_dir: Option<&str>, module_name: &str) -> anyhow::Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(log_level))?;

    let console_layer = fmt::layer().with_writer(std::io::stderr).with_target(true).with_ansi(true);

    match log_dir {
        Some(dir) => {
            let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(dir, module_name));
            let file_layer = fmt::layer().with_writer(writer).with_ansi(false).with_target(true);

            tracing_subscriber::registry()
                .with(env_filter)
                .with(console_layer)
                .with(file_layer)
                .try_init()?;
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry().with(env_filter).with(console_layer).try_init()?;
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The global subscriber can be set once per process, so one test covers
    // both the first install and the rejected second one.
    #[test]
    fn init_once_with_file_output() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().to_str().unwrap();

        let guard = init_logging("info", Some(log_dir), "tally-test").unwrap();
        assert!(guard.is_some());
        tracing::info!("logging initialised");
        drop(guard);

        let has_log_file = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .any(|e| e.file_name().to_string_lossy().starts_with("tally-test"));
        assert!(has_log_file);

        assert!(init_logging("info", None, "tally-test").is_err());
    }
}
