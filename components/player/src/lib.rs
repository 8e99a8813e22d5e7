//! Console player of streams served by a [ZLMediaKit] media server.
//!
//! [ZLMediaKit]: https://github.com/ZLMediaKit/ZLMediaKit

#![deny(
    rustdoc::broken_intra_doc_links,
    missing_debug_implementations,
    nonstandard_style,
    rust_2018_idioms,
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

pub mod cli;
pub mod player;
pub mod report;
pub mod settings;

use zlm_log::{log, tracing, TelemetryConfig};

pub use self::settings::Settings;

/// Runs application.
///
/// # Errors
///
/// If running has failed and could not be performed. The appropriate error
/// is logged.
pub fn run() -> Result<(), cli::Failure> {
    let mut cfg = cli::Opts::from_args();
    cfg.verbose = cfg.verbose.or({
        if cfg.debug {
            Some(tracing::Level::DEBUG)
        } else {
            None
        }
    });
    TelemetryConfig::new(cfg.verbose)
        .format(cfg.log_format.unwrap_or_default())
        .init();

    let settings = Settings::load(&cfg.config).map_err(|e| {
        log::error!("Failed to load settings: {e}");
    })?;
    log::info!("Settings loaded from {}", cfg.config.display());

    player::run(settings)
}
