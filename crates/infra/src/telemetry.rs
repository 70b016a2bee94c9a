//! Tracing subscriber setup.

use staffhub_domain::{Result, StaffHubError};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `default_directives` (typically
/// the configured `log_level`) is used.
///
/// # Errors
/// Returns `StaffHubError::Config` for an unparsable filter directive and
/// `StaffHubError::Internal` when a subscriber is already installed.
pub fn init(default_directives: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_directives))
        .map_err(|e| StaffHubError::Config(format!("invalid log filter: {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| StaffHubError::Internal(format!("failed to install subscriber: {e}")))
}
