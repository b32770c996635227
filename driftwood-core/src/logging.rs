//! Tracing setup for hosts and test binaries.
//!
//! The engine only emits `tracing` events; installing a subscriber is the
//! host's job. These helpers cover the common cases: a console subscriber
//! honoring `RUST_LOG`, and an idempotent variant for test binaries where
//! several tests may race to initialize.

use tracing_subscriber::EnvFilter;

/// Installs a console subscriber with `RUST_LOG` override support.
///
/// `default_directive` applies when `RUST_LOG` is unset, e.g. `"info"` or
/// `"driftwood_core=debug"`.
///
/// # Errors
///
/// Fails when a global subscriber is already installed.
pub fn init(default_directive: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()?;

    tracing::debug!("tracing initialized");
    Ok(())
}

/// Installs the subscriber for a test binary, ignoring repeat calls.
pub fn init_for_tests() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_for_tests_is_idempotent() {
        init_for_tests();
        init_for_tests();
    }
}
