//! Record model for the faked-lifecycle A record

use std::fmt;
use std::net::Ipv4Addr;

/// Pre-provisioned and "deleted" A records have the placeholder IP.
/// It is formed from 127 0xfa 0xca 0xde.
pub const PLACEHOLDER_IP: Ipv4Addr = Ipv4Addr::new(127, 0xfa, 0xca, 0xde);

/// Outcome of an authoritative lookup that completed without error.
///
/// Ambiguity (more than one answer) and resolution failure are not states;
/// they surface as [`Error::Ambiguous`](crate::Error::Ambiguous) and
/// [`Error::Lookup`](crate::Error::Lookup) from the authority itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObservedState {
    /// Exactly one A record answered
    Single(Ipv4Addr),
    /// The name does not exist (NXDOMAIN or empty answer)
    Absent,
}

impl ObservedState {
    /// True when the single observed address is the placeholder
    pub fn is_placeholder(&self) -> bool {
        matches!(self, ObservedState::Single(ip) if *ip == PLACEHOLDER_IP)
    }
}

/// A record operation as requested by the caller, before provider-level
/// defaults are applied. `zone` and `password` may be left unset to fall
/// back to [`ProviderDefaults`](crate::ProviderDefaults).
#[derive(Clone)]
pub struct RecordRequest {
    /// Zone the record lives in, if set on the request
    pub zone: Option<String>,
    /// Host label within the zone
    pub name: String,
    /// Desired address
    pub ip: Ipv4Addr,
    /// Per-record password, if set on the request
    pub password: Option<String>,
}

impl fmt::Debug for RecordRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordRequest")
            .field("zone", &self.zone)
            .field("name", &self.name)
            .field("ip", &self.ip)
            .field("password", &self.password.as_ref().map(|_| "<REDACTED>"))
            .finish()
    }
}

/// A fully resolved record target: zone and password have already been
/// merged with provider-level defaults.
#[derive(Clone)]
pub struct RecordSpec {
    /// Zone the record lives in
    pub zone: String,
    /// Host label within the zone
    pub name: String,
    /// Desired address
    pub ip: Ipv4Addr,
    /// Password for the update endpoint
    pub password: String,
}

impl RecordSpec {
    /// The fully-qualified domain name, the identity key for all operations
    pub fn fqdn(&self) -> String {
        format!("{}.{}", self.name, self.zone)
    }
}

// The password never appears in Debug output.
impl fmt::Debug for RecordSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordSpec")
            .field("zone", &self.zone)
            .field("name", &self.name)
            .field("ip", &self.ip)
            .field("password", &"<REDACTED>")
            .finish()
    }
}

/// What an operation reports back to the caller.
///
/// `ip == None` means the record holds the placeholder address and is
/// logically absent; that is not an error on read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordView {
    /// Identity assigned to the resource: `name.zone`
    pub id: String,
    /// Observed address, unset when the record is logically absent
    pub ip: Option<Ipv4Addr>,
}
