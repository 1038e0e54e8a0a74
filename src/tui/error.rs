use std::path::PathBuf;

/// Errors that can occur in the TUI layer.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An I/O error occurred (terminal, event reading, etc.).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The log file could not be created or opened.
    #[error("could not open log file {path}: {source}")]
    LogFile {
        /// The log file that failed to open.
        path: PathBuf,
        /// The underlying I/O failure.
        source: std::io::Error,
    },
}
