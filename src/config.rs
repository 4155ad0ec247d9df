//! Explicit logging configuration.
//!
//! Nothing in this crate sets up logging on its own. An entry point that wants
//! diagnostics builds a [LogConfig] and calls [LogConfig::init] once.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, Layer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LogConfig {
    /// 0: warnings, 1: info, 2: debug, 3 and above: trace
    pub verbosity: u8,
}

impl LogConfig {
    pub fn new(verbosity: u8) -> Self {
        LogConfig { verbosity }
    }

    pub fn level_filter(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }

    /// Installs a global subscriber writing to stderr.
    ///
    /// # Errors
    ///
    /// Fails if a global subscriber has already been set.
    pub fn init(&self) -> Result<(), TryInitError> {
        let filter = self.level_filter();
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).try_init()?;
        tracing::debug!("Logging initialized with level {filter}");
        Ok(())
    }
}
