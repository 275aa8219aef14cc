// # hurricane-core
//
// Core library for reconciling a single DNS "A" record against Hurricane
// Electric's dynamic-DNS endpoint.
//
// ## Architecture Overview
//
// The provider only exposes an *update* call, so full lifecycle semantics
// are emulated on top of it:
//
// - **RecordAuthority**: trait for observing ground truth from a zone's
//   authoritative nameservers (never a caching resolver)
// - **RecordUpdater**: trait for overwriting a record via the provider's
//   update endpoint
// - **RecordReconciler**: the lifecycle state machine that composes the two,
//   encoding "does not exist" as a well-known placeholder address
// - **ProviderDefaults**: provider-wide endpoint/password/zone fallbacks
//
// ## Design Principles
//
// 1. **No cached state**: every operation re-derives truth from an
//    authoritative lookup; staleness would break the precondition checks
// 2. **Single-shot components**: authority and updater make one observation
//    or one call per invocation and never retry on their own
// 3. **Closed error taxonomy**: lifecycle outcomes are tagged variants, not
//    strings to be matched

pub mod config;
pub mod error;
pub mod reconciler;
pub mod record;
pub mod traits;

// Re-export core types for convenience
pub use config::ProviderDefaults;
pub use error::{Error, Result};
pub use reconciler::RecordReconciler;
pub use record::{ObservedState, PLACEHOLDER_IP, RecordRequest, RecordSpec, RecordView};
pub use traits::{RecordAuthority, RecordUpdater};
