//! Logger initialisation for the binary and for tests.

use env_logger::{Builder, Env};
use log::debug;

/// Installs the global logger.
///
/// `verbose` lowers this crate's default level to debug, which adds
/// landings and camera settle events. Per-obstacle traces need
/// `RUST_LOG=parallax=trace`. `RUST_LOG` overrides both defaults.
///
/// Calling this again, as several tests in one process do, keeps the
/// logger that is already installed.
pub fn init(verbose: bool) {
    let filter = if verbose { "info,parallax=debug" } else { "info" };
    let installed = Builder::from_env(Env::default().default_filter_or(filter))
        .format_timestamp_millis()
        .format_target(verbose)
        .try_init();
    if installed.is_err() {
        debug!("logger already installed");
    }
}
