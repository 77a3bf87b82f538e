//! Logging utilities

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system from the `RUST_LOG` environment variable.
///
/// Safe to call more than once; subsequent calls are ignored, which keeps
/// test binaries that initialize logging in several places from panicking.
pub fn init() {
    let _ = env_logger::Builder::from_default_env().try_init();
}
