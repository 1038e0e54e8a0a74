//! Command-line arguments.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::Level;

use contactform::logging::{LogConfig, default_log_path};

#[derive(Debug, Parser)]
#[command(name = "contactform", version, about = "Terminal contact form")]
pub struct Cli {
    /// Write logs to this file (default: <data dir>/contactform/contactform.log).
    #[arg(long = "log-file", value_name = "PATH", conflicts_with = "no_log")]
    pub log_file: Option<PathBuf>,

    /// Disable logging entirely.
    #[arg(long = "no-log")]
    pub no_log: bool,

    /// Log level (overridden by RUST_LOG when set).
    #[arg(long = "log-level", value_enum, default_value = "info")]
    pub log_level: LogLevelArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Level::ERROR,
            LogLevelArg::Warn => Level::WARN,
            LogLevelArg::Info => Level::INFO,
            LogLevelArg::Debug => Level::DEBUG,
            LogLevelArg::Trace => Level::TRACE,
        }
    }
}

impl Cli {
    /// Builds the logging configuration from the parsed flags.
    pub fn log_config(&self) -> LogConfig {
        let log_file = if self.no_log {
            None
        } else {
            self.log_file.clone().or_else(default_log_path)
        };
        LogConfig {
            level: self.log_level.into(),
            log_file,
        }
    }
}
