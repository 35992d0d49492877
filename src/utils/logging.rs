//! Logging setup
//!
//! The library logs through the `log` facade only; binaries pick the
//! backend. This module provides the standard `env_logger` setup.

/// Initialize logging from the `RUST_LOG` environment variable, defaulting
/// to `info`. Call once, at process start.
pub fn init_from_env() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
