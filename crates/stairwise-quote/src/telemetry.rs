//! Tracing subscriber setup for hosts embedding the pricer.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset: chain construction and lane
/// totals from the stairwise crates, `info` for everything else.
pub const DEFAULT_FILTER: &str = "info,stairwise_core=debug,stairwise_quote=debug";

/// Installs a global fmt subscriber filtered by `RUST_LOG`.
///
/// Returns `false` if a global subscriber was already installed, in which
/// case the existing one is left in place.
pub fn init_tracing() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .is_ok()
}
