use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Keeps the non-blocking file writer flushing; hold it for the lifetime
/// of the process.
pub struct FileLogGuard {
    _guard: WorkerGuard,
}

/// Installs the tracing subscriber: stdout always, plus a daily-rolling
/// `neuroquiz.log` under `log_dir` when one is configured. An unwritable
/// log directory downgrades to stdout-only rather than failing startup.
pub fn init_tracing(level: &str, log_dir: Option<&Path>) -> Option<FileLogGuard> {
    let env_filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));
    let stdout_layer = fmt::layer().with_target(true);
    let registry = tracing_subscriber::registry()
        .with(env_filter)
        .with(stdout_layer);

    match log_dir {
        Some(dir) => match std::fs::create_dir_all(dir) {
            Ok(()) => {
                let appender = RollingFileAppender::new(Rotation::DAILY, dir, "neuroquiz.log");
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let file_layer = fmt::layer()
                    .with_writer(writer)
                    .with_ansi(false)
                    .with_target(true);
                registry.with(file_layer).init();
                Some(FileLogGuard { _guard: guard })
            }
            Err(err) => {
                registry.init();
                tracing::warn!(dir = %dir.display(), error = %err, "file logging disabled");
                None
            }
        },
        None => {
            registry.init();
            None
        }
    }
}
