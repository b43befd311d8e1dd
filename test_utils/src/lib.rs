//! Utility helpers for tests.
/// Fixture builders for maps, worlds and scripted runs.
pub mod fixtures;

use std::sync::Arc;

use rspec::report::Report;
use rspec::{block::Suite, ConfigurationBuilder, Logger, Runner};

/// Runs an rspec suite serially with a stdout logger.
///
/// # Panics
/// Panics if the rspec configuration cannot be built or if any example
/// fails, so the surrounding `#[test]` reports the failure.
pub fn run_serial<T>(suite: &Suite<T>)
where
    T: Clone + Send + Sync + std::fmt::Debug,
{
    let logger = Arc::new(Logger::new(std::io::stdout()));
    let config = ConfigurationBuilder::default()
        .parallel(false)
        .exit_on_failure(false)
        .build()
        .unwrap_or_else(|e| panic!("rspec configuration failed: {e}"));
    let report = Runner::new(config, vec![logger]).run(suite);
    assert!(report.is_success(), "rspec suite reported failures");
}
