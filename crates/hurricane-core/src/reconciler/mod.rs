//! Record lifecycle state machine
//!
//! Hurricane's dynamic-DNS endpoint can only overwrite an A record that
//! already exists, so create/read/update/delete are emulated on top of it:
//! a record holding [`PLACEHOLDER_IP`] is treated as logically absent,
//! "create" claims a placeholder record, and "delete" writes the
//! placeholder back. Records are provisioned as placeholders out-of-band
//! before this system ever runs, and are never truly removed from the zone.
//!
//! ## Operation Flow
//!
//! 1. Observe the record from the zone's authoritative nameservers
//! 2. Check the operation's precondition against the observed state
//! 3. Push the new address through the updater
//! 4. Re-read to refresh the reported view (create/update only)
//!
//! Ambiguity and lookup failure abort an operation before any mutation.
//! Nothing is cached between operations; concurrent reconciliations of the
//! same FQDN must be serialized by the caller.

use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::{ObservedState, PLACEHOLDER_IP, RecordSpec, RecordView};
use crate::traits::{RecordAuthority, RecordUpdater};

/// The lifecycle state machine over an update-only provider
pub struct RecordReconciler {
    /// Ground-truth observation
    authority: Box<dyn RecordAuthority>,

    /// The provider's single mutation
    updater: Box<dyn RecordUpdater>,
}

impl RecordReconciler {
    /// Create a reconciler from an authority and an updater
    pub fn new(authority: Box<dyn RecordAuthority>, updater: Box<dyn RecordUpdater>) -> Self {
        Self { authority, updater }
    }

    /// Create the record: claim a placeholder.
    ///
    /// The record must already exist remotely and hold the placeholder
    /// address; a real address, or no record at all, is `NoPlaceholder`.
    /// On success the record is overwritten with the desired address and
    /// re-read, and the view carries the assigned identity `name.zone`.
    pub async fn create(&self, spec: &RecordSpec) -> Result<RecordView> {
        let fqdn = spec.fqdn();

        match self.authority.observe(&spec.zone, &spec.name).await? {
            state if state.is_placeholder() => {}
            ObservedState::Single(ip) => {
                debug!("create {fqdn}: found {ip} instead of the placeholder");
                return Err(Error::no_placeholder(&fqdn));
            }
            ObservedState::Absent => {
                debug!("create {fqdn}: no record at all");
                return Err(Error::no_placeholder(&fqdn));
            }
        }

        self.updater.push(&fqdn, &spec.password, spec.ip).await?;
        info!("created {fqdn} -> {}", spec.ip);

        self.read(spec).await
    }

    /// Read the record: remote truth always wins.
    ///
    /// A placeholder record reads back as logically absent (`ip` unset),
    /// without raising an error. A true NXDOMAIN means the record was
    /// never provisioned and is `NoPlaceholder`.
    pub async fn read(&self, spec: &RecordSpec) -> Result<RecordView> {
        let fqdn = spec.fqdn();

        match self.authority.observe(&spec.zone, &spec.name).await? {
            ObservedState::Absent => Err(Error::no_placeholder(&fqdn)),
            ObservedState::Single(ip) if ip == PLACEHOLDER_IP => {
                debug!("read {fqdn}: placeholder, reporting as absent");
                Ok(RecordView { id: fqdn, ip: None })
            }
            ObservedState::Single(ip) => Ok(RecordView { id: fqdn, ip: Some(ip) }),
        }
    }

    /// Update the record in place.
    ///
    /// The record must exist with a real address. The placeholder state is
    /// conceptual absence, reported as `FakedNxdomain`.
    pub async fn update(&self, spec: &RecordSpec) -> Result<RecordView> {
        let fqdn = spec.fqdn();

        match self.authority.observe(&spec.zone, &spec.name).await? {
            state if state.is_placeholder() => {
                debug!("update {fqdn}: record is the placeholder");
                return Err(Error::faked_nxdomain(&fqdn));
            }
            ObservedState::Absent => return Err(Error::no_placeholder(&fqdn)),
            ObservedState::Single(_) => {}
        }

        self.updater.push(&fqdn, &spec.password, spec.ip).await?;
        info!("updated {fqdn} -> {}", spec.ip);

        self.read(spec).await
    }

    /// Delete the record: write the placeholder back.
    ///
    /// Idempotent; a record already holding the placeholder is left alone
    /// and no update call is issued. No post-read is needed since the
    /// target state is known.
    pub async fn delete(&self, spec: &RecordSpec) -> Result<()> {
        let fqdn = spec.fqdn();

        match self.authority.observe(&spec.zone, &spec.name).await? {
            state if state.is_placeholder() => {
                debug!("delete {fqdn}: already placeholder");
                Ok(())
            }
            ObservedState::Absent => Err(Error::no_placeholder(&fqdn)),
            ObservedState::Single(_) => {
                self.updater.push(&fqdn, &spec.password, PLACEHOLDER_IP).await?;
                info!("deleted {fqdn} (rewrote placeholder)");
                Ok(())
            }
        }
    }
}
