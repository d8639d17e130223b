//! Logger setup for the binary and for tests.
//!
//! The core only uses the `log` facade. These helpers install `env_logger`
//! behind it; `RUST_LOG` always takes precedence over the chosen default.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Default filter for the given verbosity.
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the global logger.
///
/// Shows info and above, or debug and above when `verbose` is set. Repeated
/// calls are ignored.
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_level(verbose).to_string());
    if let Err(err) = Builder::from_env(env).try_init() {
        log::trace!("keeping existing logger: {err}");
    }
}

/// Installs a logger whose output is captured by the test harness.
pub fn init_for_tests() {
    let env = Env::default().default_filter_or(LevelFilter::Trace.to_string());
    if let Err(err) = Builder::from_env(env).is_test(true).try_init() {
        log::trace!("keeping existing logger: {err}");
    }
}
