use std::path::{Path, PathBuf};
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Used in headless mode, where stderr is free.
    Stderr,
    /// Used while the terminal UI owns the screen.
    File(PathBuf),
}

pub fn default_filter(debug: bool) -> String {
    let level = if debug { "debug" } else { "info" };
    format!("apple_a_day={level}")
}

/// Non-rotating appender for `path`. Fails instead of panicking when the
/// directory or file cannot be created.
pub fn file_appender(path: &Path) -> Result<RollingFileAppender, InitError> {
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(crate::config::DEFAULT_LOG_FILE);

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
}

/// Initialize the logging system
///
/// `RUST_LOG` wins over `debug` when set.
pub fn init(debug: bool, target: &LogTarget) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter(debug)));

    let registry = tracing_subscriber::registry().with(env_filter);

    let result = match target {
        LogTarget::Stderr => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .compact(),
            )
            .try_init(),
        LogTarget::File(path) => {
            let writer = match file_appender(path) {
                Ok(appender) => BoxMakeWriter::new(appender),
                Err(error) => {
                    eprintln!(
                        "Could not open log file {}: {error}. Logging is disabled.",
                        path.display()
                    );
                    BoxMakeWriter::new(std::io::sink)
                }
            };

            registry
                .with(
                    fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .json(),
                )
                .try_init()
        }
    };

    if let Err(error) = result {
        eprintln!("Logging was already initialized: {error}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_follows_debug_flag() {
        assert_eq!(default_filter(false), "apple_a_day=info");
        assert_eq!(default_filter(true), "apple_a_day=debug");
    }

    #[test]
    fn file_target_creates_its_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logs").join("apple.log");
        init(false, &LogTarget::File(path));
        assert!(dir.path().join("logs").exists());
    }

    #[test]
    fn unwritable_log_path_is_an_error_not_a_panic() {
        let path = Path::new("/proc/apple-a-day/logs/apple.log");
        assert!(file_appender(path).is_err());
        init(false, &LogTarget::File(path.to_path_buf()));
    }

    #[test]
    fn log_file_is_created_when_opened() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("apple.log");
        let appender = file_appender(&path);
        assert!(appender.is_ok());
        assert!(path.exists());
    }
}
