//! Error types for the record reconciler
//!
//! The lifecycle conditions are a closed set of tagged variants. The
//! lookup and transport layers get explicit fallthrough variants instead;
//! their causes are carried verbatim for the caller to report.

use thiserror::Error;

/// Result type alias for reconciler operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the reconciler
#[derive(Error, Debug)]
pub enum Error {
    /// More than one A record answers for the FQDN; never auto-resolved
    #[error("Ambiguous: multiple A records for {fqdn}")]
    Ambiguous {
        /// The queried name
        fqdn: String,
    },

    /// The record is not in the placeholder state (or does not exist at all)
    #[error("Existing A record for {fqdn} must be placeholder")]
    NoPlaceholder {
        /// The queried name
        fqdn: String,
    },

    /// The record holds the placeholder address, i.e. it is logically absent
    #[error("Faked NXDOMAIN for {fqdn} (really placeholder)")]
    FakedNxdomain {
        /// The queried name
        fqdn: String,
    },

    /// The provider's update call returned a non-200 status
    #[error("Hurricane update call failed with status {status}")]
    UpdateFailed {
        /// HTTP status returned by the endpoint
        status: u16,
    },

    /// DNS resolution failure (delegation or authoritative query)
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// HTTP transport failure, distinct from a rejected update
    #[error("Transport error: {0}")]
    Transport(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an ambiguity error for the given name
    pub fn ambiguous(fqdn: impl Into<String>) -> Self {
        Self::Ambiguous { fqdn: fqdn.into() }
    }

    /// Create a missing-placeholder error for the given name
    pub fn no_placeholder(fqdn: impl Into<String>) -> Self {
        Self::NoPlaceholder { fqdn: fqdn.into() }
    }

    /// Create a faked-NXDOMAIN error for the given name
    pub fn faked_nxdomain(fqdn: impl Into<String>) -> Self {
        Self::FakedNxdomain { fqdn: fqdn.into() }
    }

    /// Create a lookup error
    pub fn lookup(msg: impl Into<String>) -> Self {
        Self::Lookup(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Self::Transport(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
