use std::{
    fs,
    path::{Path, PathBuf},
    time::{Duration, SystemTime},
};
use tokio::task;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Keeps the non-blocking file writer alive for the process lifetime.
#[allow(dead_code)]
pub struct LogGuard(WorkerGuard);

pub fn init_logging(log_dir: impl AsRef<Path>, prefix: &str, level: &str) -> LogGuard {
    let log_dir = log_dir.as_ref().to_path_buf();
    let level = validate_level(level);

    let builder = EnvFilter::builder().with_default_directive(level.parse().unwrap());
    let console_filter = builder
        .clone()
        .parse_lossy(&std::env::var("RUST_LOG").unwrap_or_default());
    let file_filter = builder.parse_lossy(&std::env::var("RUST_LOG").unwrap_or_default());

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .filename_suffix("log")
        .build(&log_dir)
        .expect("Failed to create file appender");
    let (non_blocking, guard) = NonBlocking::new(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_filter(file_filter);
    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_filter(console_filter);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stdout_layer)
        .init();

    start_log_cleanup_task(log_dir, prefix.to_string());

    LogGuard(guard)
}

fn validate_level(level: &str) -> &str {
    match level {
        "trace" | "debug" | "info" | "warn" | "error" => level,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'info'", level);
            "info"
        },
    }
}

fn start_log_cleanup_task(log_dir: PathBuf, prefix: String) {
    const MAX_AGE: Duration = Duration::from_secs(60 * 60 * 24 * 5);
    const CLEANUP_INTERVAL: Duration = Duration::from_secs(60 * 60 * 6);

    task::spawn(async move {
        loop {
            if let Err(e) = cleanup_old_logs(&log_dir, &prefix, MAX_AGE) {
                tracing::warn!("Failed to delete old log file: {}", e);
            }
            tokio::time::sleep(CLEANUP_INTERVAL).await;
        }
    });
}

fn cleanup_old_logs(log_dir: &Path, prefix: &str, max_age: Duration) -> std::io::Result<()> {
    let now = SystemTime::now();

    for entry in fs::read_dir(log_dir)? {
        let entry = entry?;
        let path = entry.path();

        if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
            if file_name.starts_with(prefix) && file_name.ends_with(".log") {
                let metadata = fs::metadata(&path)?;
                if let Ok(modified) = metadata.modified() {
                    if now.duration_since(modified).unwrap_or_default() > max_age {
                        fs::remove_file(&path)?;
                        tracing::info!("Old log file deleted: {}", file_name);
                    }
                }
            }
        }
    }
    Ok(())
}
