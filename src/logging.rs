//! Tracing setup for binaries and tests that embed the context manager.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default filter when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "proofscope=info";

/// Install a global `fmt` subscriber filtered by `RUST_LOG`.
///
/// Returns false if a global subscriber was already set.
pub fn init_tracing() -> bool {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}
