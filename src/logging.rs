use crate::config::Config;
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;

/// Initialize file-based logging. Stdout belongs to the terminal UI, so
/// everything goes to a file under the platform data dir (or wherever
/// `log_file` points). Returns the appender guard; dropping it stops the
/// writer thread, so the caller keeps it alive for the whole run.
///
/// Returns `None` when no log path can be resolved or a subscriber is
/// already installed; the app runs fine without logs.
pub fn init(config: &Config) -> Option<WorkerGuard> {
    let path = config.log_file.clone().or_else(default_path)?;
    let dir = path.parent()?.to_path_buf();
    let file = path.file_name()?.to_owned();
    std::fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::never(dir, file);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(guard)
}

fn default_path() -> Option<PathBuf> {
    ProjectDirs::from("org", "cartui", "cartui")
        .map(|proj| proj.data_dir().join("cartui.log"))
}
