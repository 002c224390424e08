use crate::config::AppConfig;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

/// Where log lines go and in which format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogSinks {
    pub stdout: LogFormat,
    /// Rolling file, only when `log_dir` is configured
    pub file: Option<LogFormat>,
}

pub fn log_sinks(config: &AppConfig) -> LogSinks {
    let format = if config.use_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    LogSinks {
        stdout: format,
        file: config.log_dir.as_ref().map(|_| format),
    }
}

/// Install the global subscriber.
///
/// Stdout always gets a fmt layer. When `log_dir` is configured a
/// non-blocking rolling file layer is added too; the returned guard must be
/// held for the lifetime of the process so buffered lines are flushed.
pub fn init_logging(config: &AppConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    let sinks = log_sinks(config);

    let (file_writer, guard) = match config.log_dir.as_deref() {
        Some(log_dir) => {
            let file_appender = match config.rotation.as_str() {
                "hourly" => tracing_appender::rolling::hourly(log_dir, &config.log_file),
                "daily" => tracing_appender::rolling::daily(log_dir, &config.log_file),
                _ => tracing_appender::rolling::never(log_dir, &config.log_file),
            };
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            (Some(non_blocking), Some(guard))
        }
        None => (None, None),
    };

    let stdout_json =
        (sinks.stdout == LogFormat::Json).then(|| fmt::layer().json().with_target(true));
    let stdout_text = (sinks.stdout == LogFormat::Text)
        .then(|| fmt::layer().with_target(false).with_ansi(true));

    let file_json = file_writer
        .clone()
        .filter(|_| sinks.file == Some(LogFormat::Json))
        .map(|writer| {
            fmt::layer()
                .json()
                .with_target(true) // Keep target in JSON for structured queries
                .with_writer(writer)
                .with_ansi(false)
        });
    let file_text = file_writer
        .filter(|_| sinks.file == Some(LogFormat::Text))
        .map(|writer| {
            fmt::layer()
                .with_target(false)
                .with_writer(writer)
                .with_ansi(false)
        });

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_json)
        .with(stdout_text)
        .with(file_json)
        .with(file_text)
        .init();

    guard
}
