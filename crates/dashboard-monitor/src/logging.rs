//! Logging setup.

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Where log lines go.
#[derive(Debug, Clone, Copy)]
pub enum LogOutput<'a> {
    /// Standard error, keeping stdout free for command output
    Stderr,
    /// Append to a file; required while the terminal UI owns the screen
    File(&'a Path),
    /// Install nothing
    Disabled,
}

/// Setup logging with the given level.
///
/// `RUST_LOG` takes precedence over `level`. Keep the returned guard alive
/// for the life of the program when logging to a file, or buffered lines are
/// lost on exit.
pub fn setup_logging(level: &str, json: bool, output: LogOutput<'_>) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level));

    match output {
        LogOutput::Disabled => None,
        LogOutput::Stderr => {
            if json {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().json().with_writer(std::io::stderr))
                    .init();
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().pretty().with_writer(std::io::stderr))
                    .init();
            }
            None
        }
        LogOutput::File(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new("."));
            let file_name = path
                .file_name()
                .map(|n| n.to_os_string())
                .unwrap_or_else(|| "dashboard.log".into());

            let appender = tracing_appender::rolling::never(dir, file_name);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            if json {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().json().with_writer(writer))
                    .init();
            } else {
                tracing_subscriber::registry()
                    .with(filter)
                    .with(fmt::layer().with_ansi(false).with_writer(writer))
                    .init();
            }
            Some(guard)
        }
    }
}
