//! Logging via `tracing`, written to a file because the terminal belongs to the TUI.
//!
//! Field values are never logged; events carry field names and lengths only.

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{Level, Subscriber};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

/// Directory under the platform data directory that holds the log file.
const APP_DIR: &str = "contactform";
/// Log file name.
const LOG_FILE: &str = "contactform.log";

/// Configuration for logging behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Level used when `RUST_LOG` is not set.
    pub level: Level,
    /// Destination file. `None` disables logging.
    pub log_file: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            log_file: default_log_path(),
        }
    }
}

/// Returns `<data dir>/contactform/contactform.log`, or `None` if the
/// platform has no data directory.
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join(APP_DIR).join(LOG_FILE))
}

/// Installs the global subscriber described by `config`.
///
/// Creates the log file's parent directory if needed. Does nothing when
/// `config.log_file` is `None`. Must be called at most once.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn init_logging(config: &LogConfig) -> io::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = open_log_file(path)?;
    subscriber(build_env_filter(config.level), Mutex::new(file)).init();
    Ok(())
}

/// Opens `path` for appending, creating it and its parent directory.
pub fn open_log_file(path: &Path) -> io::Result<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Builds a plain-text subscriber writing to `writer`.
pub fn subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    let layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false);
    tracing_subscriber::registry().with(filter).with(layer)
}

/// Build an `EnvFilter` from the given level, letting `RUST_LOG` override it.
fn build_env_filter(level: Level) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,contactform={level}",
            level = level.as_str().to_lowercase()
        ))
    })
}

#[cfg(test)]
mod tests {
    use std::io::Read;

    use super::*;

    #[test]
    fn default_log_path_ends_with_app_file() {
        if let Some(path) = default_log_path() {
            assert!(path.ends_with("contactform/contactform.log"));
        }
    }

    #[test]
    fn default_config_is_info() {
        assert_eq!(LogConfig::default().level, Level::INFO);
    }

    #[test]
    fn open_log_file_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("app.log");
        open_log_file(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn open_log_file_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        fs::write(&path, "first\n").unwrap();
        let file = open_log_file(&path).unwrap();
        let sub = subscriber(EnvFilter::new("info"), Mutex::new(file));
        tracing::subscriber::with_default(sub, || tracing::info!("second"));

        let mut contents = String::new();
        fs::File::open(&path)
            .unwrap()
            .read_to_string(&mut contents)
            .unwrap();
        assert!(contents.starts_with("first\n"));
        assert!(contents.contains("second"));
    }

    #[test]
    fn filter_drops_lower_levels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");
        let file = open_log_file(&path).unwrap();
        let sub = subscriber(EnvFilter::new("info"), Mutex::new(file));
        tracing::subscriber::with_default(sub, || {
            tracing::debug!("hidden");
            tracing::info!("shown");
        });

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("shown"));
        assert!(!contents.contains("hidden"));
    }
}
