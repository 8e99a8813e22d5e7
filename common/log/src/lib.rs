//! Logging tools and their initialization.

#![deny(
    rustdoc::broken_intra_doc_links,
    missing_debug_implementations,
    nonstandard_style,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![warn(
    deprecated_in_future,
    missing_docs,
    unreachable_pub,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

use std::str::FromStr;

use derive_more::{Display, Error};
use tracing::level_filters::LevelFilter;
pub use tracing::{self, Level};
pub use tracing_log::log;
use tracing_log::LogTracer;
use tracing_subscriber::{fmt, layer::SubscriberExt, Layer, Registry};

/// Format of the emitted log lines.
#[derive(Clone, Copy, Debug, Default, Display, Eq, PartialEq)]
pub enum LogFormat {
    /// Human-readable single-line records.
    #[default]
    #[display(fmt = "COMPACT")]
    Compact,

    /// One JSON object per record.
    #[display(fmt = "JSON")]
    Json,
}

/// Error of parsing an unknown [`LogFormat`].
#[derive(Clone, Debug, Display, Error)]
#[display(fmt = "Unknown log format `{_0}`, expected JSON | COMPACT")]
pub struct UnknownLogFormat(#[error(not(source))] String);

impl FromStr for LogFormat {
    type Err = UnknownLogFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "COMPACT" => Ok(Self::Compact),
            "JSON" => Ok(Self::Json),
            _ => Err(UnknownLogFormat(s.to_owned())),
        }
    }
}

/// Allow to configure the tracing.
#[derive(Clone, Debug)]
pub struct TelemetryConfig {
    /// Logging level
    pub level: LevelFilter,
    /// Format of the log lines.
    pub format: LogFormat,
}

impl TelemetryConfig {
    /// Create [`TelemetryConfig`] with the given verbosity `level`
    /// ([`Info`] by default, if [`None`]).
    ///
    /// [`Info`]: tracing::Level::INFO
    #[must_use]
    pub fn new(level: Option<Level>) -> Self {
        Self {
            level: LevelFilter::from_level(level.unwrap_or(Level::INFO)),
            format: LogFormat::default(),
        }
    }

    /// Set the [`LogFormat`] of the emitted log lines.
    #[must_use]
    pub fn format(mut self, format: LogFormat) -> Self {
        self.format = format;
        self
    }

    /// Initialize the logging.
    ///
    /// # Panics
    ///
    /// If failed to initialize logger.
    pub fn init(self) {
        if let Err(e) = LogTracer::init() {
            panic!("Failed to initialize logger: {e}");
        };

        let layer = match self.format {
            LogFormat::Compact => fmt::layer().compact().boxed(),
            LogFormat::Json => fmt::layer().json().boxed(),
        };
        let subscriber = Registry::default().with(self.level).with(layer);

        tracing::subscriber::set_global_default(subscriber)
            .expect("setting tracing subscriber failed");
    }
}
