// # Record Updater Trait
//
// Defines the interface for the provider's update call, the only mutation
// the remote system offers. There is no create and no delete; the
// reconciler fakes both by what it writes.
//
// ## Implementations
//
// - Hurricane Electric form POST: `hurricane-updater-he` crate

use async_trait::async_trait;
use std::net::Ipv4Addr;

use crate::error::Result;

/// Trait for provider update implementations
///
/// # Thread Safety
///
/// Implementations must be thread-safe and usable across async tasks.
///
/// # Constraints
///
/// - Exactly one call per invocation; no retry, no backoff (a failed push
///   surfaces to the caller, which does not retry either)
/// - Success must mean the provider unambiguously accepted the update;
///   anything less is an error
/// - The password must never be logged
#[async_trait]
pub trait RecordUpdater: Send + Sync {
    /// Overwrite the A record for `fqdn` with `ip`.
    ///
    /// # Returns
    ///
    /// - `Ok(())`: the provider accepted the update
    /// - `Err(Error::UpdateFailed)`: the provider rejected it
    /// - `Err(Error::Transport)`: the call never completed
    async fn push(&self, fqdn: &str, password: &str, ip: Ipv4Addr) -> Result<()>;
}
