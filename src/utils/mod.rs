//! Utility modules
//!
//! Shared helpers that sit outside the algorithms themselves.

pub mod logging;

pub use logging::init_from_env;
