//! Setting up log output.
//!
//! The crate reports its decisions through [tracing] events. Nothing is
//! printed unless a subscriber has been installed. This module provides a
//! small helper for doing that.

use tracing_subscriber::EnvFilter;

/// Setup logging of events reported by domain-labels.
///
/// Use the RUST_LOG environment variable to override the defaults.
///
/// E.g. To enable trace level logging:
///   RUST_LOG=TRACE
///
/// Or to log only the decisions made by the suffix comparison:
///   RUST_LOG=domain_labels::base::name::cmp=TRACE
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_thread_ids(true)
        .without_time()
        .try_init()
        .ok();
}
