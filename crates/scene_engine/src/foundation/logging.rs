//! Logging setup

pub use log::{debug, error, info, trace, warn};

/// Initialize the global logger from the environment.
///
/// Honors `RUST_LOG`; defaults to `info` when unset.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
