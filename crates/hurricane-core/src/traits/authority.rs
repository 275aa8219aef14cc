// # Record Authority Trait
//
// Defines the interface for observing the current state of an A record
// from the zone's own nameservers.
//
// ## Implementations
//
// - Hickory-based authoritative lookup: `hurricane-authority-hickory` crate

use async_trait::async_trait;

use crate::error::Result;
use crate::record::ObservedState;

/// Trait for authoritative record observation
///
/// Implementations must ask the zone's authoritative nameservers directly,
/// never a caching resolver: a just-written update has to be observable on
/// the next call, and every precondition check depends on that.
///
/// # Thread Safety
///
/// Implementations must be thread-safe and usable across async tasks.
///
/// # Constraints
///
/// - One observation per invocation; no state cached between calls
/// - No retry beyond the resolver's own transient-failure budget
/// - No background tasks
#[async_trait]
pub trait RecordAuthority: Send + Sync {
    /// Observe the current A record for `name.zone`.
    ///
    /// # Returns
    ///
    /// - `Ok(ObservedState::Single(ip))`: exactly one answer
    /// - `Ok(ObservedState::Absent)`: NXDOMAIN or an empty answer
    /// - `Err(Error::Ambiguous)`: more than one answer; the caller must not
    ///   guess which address is authoritative
    /// - `Err(Error::Lookup)`: any other resolution failure, cause carried
    ///   verbatim
    async fn observe(&self, zone: &str, name: &str) -> Result<ObservedState>;
}
