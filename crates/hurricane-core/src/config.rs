//! Provider-level configuration and defaults
//!
//! Endpoint, password and zone are process-wide fallbacks threaded into
//! every reconciler call; a per-record request may override password and
//! zone. All three may be environment-sourced.

use std::env;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::record::{RecordRequest, RecordSpec};

/// Hurricane Electric dynamic DNS URL for POST requests
pub const DEFAULT_ENDPOINT: &str = "https://dyn.dns.he.net/nic/update";

/// Provider-wide defaults for record operations
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderDefaults {
    /// Update endpoint URL
    pub endpoint: String,

    /// Default password, used when a record request doesn't carry its own
    pub password: Option<String>,

    /// Default zone, used when a record request doesn't carry its own
    pub zone: Option<String>,
}

impl ProviderDefaults {
    /// Create defaults pointing at the public Hurricane endpoint
    pub fn new() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            password: None,
            zone: None,
        }
    }

    /// Load defaults from environment variables
    ///
    /// - `HURRICANE_DNS_ENDPOINT`: update URL (falls back to the public endpoint)
    /// - `HURRICANE_DNS_PASSWORD`: default password for update requests
    /// - `HURRICANE_DNS_ZONE`: default zone
    pub fn from_env() -> Self {
        Self {
            endpoint: env::var("HURRICANE_DNS_ENDPOINT")
                .unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            password: env::var("HURRICANE_DNS_PASSWORD").ok(),
            zone: env::var("HURRICANE_DNS_ZONE").ok(),
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(Error::config("Update endpoint cannot be empty"));
        }
        if !self.endpoint.starts_with("https://") && !self.endpoint.starts_with("http://") {
            return Err(Error::config(format!(
                "Update endpoint must be an HTTP or HTTPS URL, got: {}",
                self.endpoint
            )));
        }
        Ok(())
    }

    /// Resolve a record request against these defaults.
    ///
    /// Zone and password unset on the request always fall back to the
    /// provider-wide values; missing on both sides is a configuration
    /// error. `name` is required on the request.
    pub fn resolve(&self, request: RecordRequest) -> Result<RecordSpec> {
        if request.name.is_empty() {
            return Err(Error::config("Record name is required"));
        }

        let zone = request
            .zone
            .filter(|z| !z.is_empty())
            .or_else(|| self.zone.clone())
            .ok_or_else(|| Error::config("No zone on the request and no default zone"))?;

        let password = request
            .password
            .filter(|p| !p.is_empty())
            .or_else(|| self.password.clone())
            .ok_or_else(|| Error::config("No password on the request and no default password"))?;

        Ok(RecordSpec {
            zone,
            name: request.name,
            ip: request.ip,
            password,
        })
    }
}

impl Default for ProviderDefaults {
    fn default() -> Self {
        Self::new()
    }
}

// The default password never appears in Debug output.
impl fmt::Debug for ProviderDefaults {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderDefaults")
            .field("endpoint", &self.endpoint)
            .field("password", &self.password.as_ref().map(|_| "<REDACTED>"))
            .field("zone", &self.zone)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn request(zone: Option<&str>, password: Option<&str>) -> RecordRequest {
        RecordRequest {
            zone: zone.map(String::from),
            name: "dyn".to_string(),
            ip: Ipv4Addr::new(203, 0, 113, 9),
            password: password.map(String::from),
        }
    }

    #[test]
    fn request_values_win_over_defaults() {
        let defaults = ProviderDefaults {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            password: Some("default-pw".to_string()),
            zone: Some("default.example".to_string()),
        };

        let spec = defaults
            .resolve(request(Some("example.com"), Some("record-pw")))
            .unwrap();
        assert_eq!(spec.zone, "example.com");
        assert_eq!(spec.password, "record-pw");
        assert_eq!(spec.fqdn(), "dyn.example.com");
    }

    #[test]
    fn unset_fields_fall_back_to_defaults() {
        let defaults = ProviderDefaults {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            password: Some("default-pw".to_string()),
            zone: Some("example.com".to_string()),
        };

        let spec = defaults.resolve(request(None, None)).unwrap();
        assert_eq!(spec.zone, "example.com");
        assert_eq!(spec.password, "default-pw");
    }

    #[test]
    fn empty_request_fields_also_fall_back() {
        let defaults = ProviderDefaults {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            password: Some("default-pw".to_string()),
            zone: Some("example.com".to_string()),
        };

        let spec = defaults.resolve(request(Some(""), Some(""))).unwrap();
        assert_eq!(spec.zone, "example.com");
        assert_eq!(spec.password, "default-pw");
    }

    #[test]
    fn missing_zone_everywhere_is_a_config_error() {
        let defaults = ProviderDefaults {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            password: Some("default-pw".to_string()),
            zone: None,
        };

        let err = defaults.resolve(request(None, None)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn missing_password_everywhere_is_a_config_error() {
        let defaults = ProviderDefaults {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            password: None,
            zone: Some("example.com".to_string()),
        };

        let err = defaults.resolve(request(None, None)).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn validate_rejects_bad_endpoints() {
        let mut defaults = ProviderDefaults::new();
        assert!(defaults.validate().is_ok());

        defaults.endpoint = String::new();
        assert!(defaults.validate().is_err());

        defaults.endpoint = "ftp://dyn.dns.he.net/nic/update".to_string();
        assert!(defaults.validate().is_err());
    }

    #[test]
    fn default_password_not_exposed_in_debug() {
        let defaults = ProviderDefaults {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            password: Some("secret_pw_12345".to_string()),
            zone: None,
        };
        let debug_str = format!("{:?}", defaults);
        assert!(!debug_str.contains("secret_pw_12345"));
    }
}
