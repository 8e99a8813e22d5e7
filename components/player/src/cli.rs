//! CLI (command line interface).

use clap::Parser;
use std::{fmt, path::PathBuf, str::FromStr as _};
use zlm_log::{tracing, LogFormat};

/// CLI (command line interface) of the player.
#[derive(Clone, Debug, Parser)]
#[command(about = "ZLMediaKit streams player")]
pub struct Opts {
    /// Debug mode of the player.
    #[arg(short, long, help = "Enables debug mode")]
    pub debug: bool,

    /// Path to the YAML file to read the settings from.
    #[arg(
        short,
        long,
        env = "ZLM_PLAYER_CONFIG",
        default_value = "config/config.yaml",
        help = "Path to the settings file",
        long_help = "Path to the YAML file with `server.base_url` and \
                     `server.timeout` settings. Every setting may be \
                     overridden with `ZLM_SERVER__*` environment variables."
    )]
    pub config: PathBuf,

    /// Verbosity level of the player logs.
    #[arg(
        short,
        long,
        value_parser(tracing::Level::from_str),
        help = "Logs verbosity level: INFO | DEBUG | TRACE"
    )]
    pub verbose: Option<tracing::Level>,

    /// Logs format for displaying.
    #[arg(
        short,
        long,
        env = "ZLM_PLAYER_LOG_FORMAT",
        value_parser(LogFormat::from_str),
        help = "Logs format: JSON | COMPACT"
    )]
    pub log_format: Option<LogFormat>,
}

impl Opts {
    /// Parses CLI [`Opts`] from command line arguments.
    ///
    /// Prints the error message and quits the program in case of failure.
    #[inline]
    #[must_use]
    pub fn from_args() -> Self {
        <Self as Parser>::parse()
    }
}

/// Error type indicating non-zero process exit code.
pub struct Failure;

impl fmt::Debug for Failure {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "")
    }
}

impl From<()> for Failure {
    #[inline]
    fn from(_: ()) -> Self {
        Self
    }
}
