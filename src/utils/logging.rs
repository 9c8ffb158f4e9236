use std::io;

use clap::ValueEnum;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::settings::{LogFormat, LoggingConfig};

/// Verbosity picked on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match *self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// `EnvFilter` directive: the level applies to this crate and its binary,
    /// dependencies (reqwest, hyper) stay at `warn`.
    pub fn directive(&self) -> String {
        format!("warn,sethealth={0},sethealth_token={0}", self.as_str())
    }
}

/// Builds the logging config, a command-line level wins over the default.
pub fn resolve(arg_log_level: Option<LogLevel>, format: LogFormat) -> LoggingConfig {
    let level = arg_log_level
        .map(|level| level.directive())
        .unwrap_or_else(|| LoggingConfig::default().level);
    LoggingConfig::new(level, format)
}

/// Initialize tracing with the desired config.
///
/// Events go to stderr so stdout stays free for command output. Calling it
/// again once a subscriber is installed is a no-op.
pub fn init_logging(cfg: &LoggingConfig) {
    let env_filter = EnvFilter::try_new(&cfg.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(env_filter);

    match cfg.format {
        LogFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_timer(UtcTime::rfc_3339())
                .flatten_event(true)
                .with_ansi(false)
                .with_writer(io::stderr);

            let _ = registry.with(layer).try_init();
        }
        LogFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_timer(UtcTime::rfc_3339())
                .with_ansi(true)
                .with_writer(io::stderr);

            let _ = registry.with(layer).try_init();
        }
    };
}
