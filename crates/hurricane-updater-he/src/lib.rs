// # Hurricane Electric Update Endpoint
//
// This crate provides the single mutation the provider offers: an
// authenticated form POST that overwrites an existing A record.
//
// ## Protocol
//
// ```text
// % curl "https://dyn.dns.he.net/nic/update" \
//       -d "hostname=dyn.example.com" -d "password=password" -d "myip=192.0.2.1"
// ```
//
// A 200 status is the only success signal. The response body is not
// interpreted; anything a 200 body might say is not more authoritative
// than the post-update read the reconciler does anyway.
//
// ## Constraints
//
// - One POST per push; no retry, no backoff (owned by the caller)
// - Non-200 is `UpdateFailed`; a call that never completes is `Transport`
// - The password goes only into the form body, never into logs

use std::net::Ipv4Addr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, info};

use hurricane_core::error::{Error, Result};
use hurricane_core::traits::RecordUpdater;

/// Default HTTP timeout for update calls (30 seconds)
const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Hurricane Electric dynamic-DNS updater
#[derive(Debug)]
pub struct HurricaneUpdater {
    /// Update endpoint URL
    endpoint: String,

    /// HTTP client for update calls
    client: reqwest::Client,
}

impl HurricaneUpdater {
    /// Create a new updater for the given endpoint
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let endpoint = endpoint.into();
        if endpoint.is_empty() {
            return Err(Error::config("Update endpoint cannot be empty"));
        }

        let client = reqwest::Client::builder()
            .timeout(DEFAULT_HTTP_TIMEOUT)
            .build()
            .map_err(|e| Error::transport(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { endpoint, client })
    }
}

#[async_trait]
impl RecordUpdater for HurricaneUpdater {
    async fn push(&self, fqdn: &str, password: &str, ip: Ipv4Addr) -> Result<()> {
        debug!("posting update for {fqdn} -> {ip}");

        let myip = ip.to_string();
        let params = [
            ("hostname", fqdn),
            ("password", password),
            ("myip", myip.as_str()),
        ];

        let response = self
            .client
            .post(&self.endpoint)
            .form(&params)
            .send()
            .await
            .map_err(|e| Error::transport(format!("update POST failed: {e}")))?;

        if response.status() != StatusCode::OK {
            return Err(Error::UpdateFailed {
                status: response.status().as_u16(),
            });
        }

        info!("update accepted for {fqdn} -> {ip}");
        Ok(())
    }
}
