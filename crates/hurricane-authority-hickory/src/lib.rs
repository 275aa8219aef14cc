// # Hickory Authoritative Lookup
//
// This crate provides the ground-truth observation side of the Hurricane
// reconciler: the current A record for a name, as the zone's own
// nameservers see it.
//
// Queries must go to the authoritative servers directly, never through the
// system default resolver. A caching resolver can serve a stale answer for
// the record's full TTL, and the reconciler's precondition checks depend
// on a just-written update being observable on the next lookup.
//
// ## Query Flow
//
// 1. NS delegation lookup for the zone on a system-configured resolver
// 2. Resolve each nameserver hostname to its addresses
// 3. Query A records for `name.zone` against exactly those addresses,
//    with a 5-attempt retry budget for transient failures
// 4. Classify the answer: one address, none, or ambiguous

use std::net::{IpAddr, Ipv4Addr};

use async_trait::async_trait;
use hickory_resolver::{
    TokioResolver,
    config::{NameServerConfigGroup, ResolverConfig, ResolverOpts},
    name_server::TokioConnectionProvider,
};
use tracing::{debug, warn};

use hurricane_core::error::{Error, Result};
use hurricane_core::record::ObservedState;
use hurricane_core::traits::RecordAuthority;

/// Retry budget for queries against the authoritative servers
const AUTHORITATIVE_RETRY_ATTEMPTS: usize = 5;

/// Authority that asks the zone's own nameservers
///
/// Holds no resolver state; every observation rebuilds its resolvers so
/// nothing is cached between calls.
#[derive(Debug, Default)]
pub struct HickoryAuthority;

impl HickoryAuthority {
    /// Create a new authority
    pub fn new() -> Self {
        Self
    }

    /// Look up a zone's authoritative nameserver hostnames.
    ///
    /// Uses the system-configured resolver; delegation data is safe to
    /// take from a cache. No retries at this layer.
    async fn lookup_ns(&self, zone: &str) -> Result<Vec<String>> {
        let resolver = system_resolver();

        let response = resolver
            .ns_lookup(zone)
            .await
            .map_err(|e| Error::lookup(format!("NS lookup for {zone} failed: {e}")))?;

        let hosts: Vec<String> = response.iter().map(|ns| ns.to_string()).collect();
        if hosts.is_empty() {
            return Err(Error::lookup(format!("no NS records for {zone}")));
        }
        Ok(hosts)
    }

    /// Resolve nameserver hostnames to addresses for direct queries.
    ///
    /// A nameserver that fails to resolve is skipped; any authoritative
    /// server may answer, so one usable address is enough.
    async fn nameserver_addrs(&self, hosts: &[String]) -> Result<Vec<IpAddr>> {
        let resolver = system_resolver();

        let mut addrs = Vec::new();
        for host in hosts {
            match resolver.lookup_ip(host.as_str()).await {
                Ok(lookup) => addrs.extend(lookup.iter()),
                Err(e) => debug!("skipping nameserver {host}: {e}"),
            }
        }

        if addrs.is_empty() {
            return Err(Error::lookup("no nameserver hostname resolved to an address"));
        }
        Ok(addrs)
    }
}

#[async_trait]
impl RecordAuthority for HickoryAuthority {
    async fn observe(&self, zone: &str, name: &str) -> Result<ObservedState> {
        let fqdn = format!("{name}.{zone}");

        let hosts = self.lookup_ns(zone).await?;
        let addrs = self.nameserver_addrs(&hosts).await?;
        debug!(
            "querying {} authoritative server(s) of {zone} for {fqdn}",
            addrs.len()
        );

        let resolver = authoritative_resolver(&addrs);
        match resolver.ipv4_lookup(fqdn.as_str()).await {
            Ok(lookup) => {
                let answers: Vec<Ipv4Addr> = lookup.iter().map(|a| a.0).collect();
                classify(&fqdn, &answers)
            }
            Err(e) if e.is_nx_domain() || e.is_no_records_found() => Ok(ObservedState::Absent),
            Err(e) => Err(Error::lookup(format!("A lookup for {fqdn} failed: {e}"))),
        }
    }
}

/// Classify an answer set into an observed state.
///
/// More than one address is ambiguous: the reconciler manages exactly one
/// A record per name and must not guess which answer is authoritative.
fn classify(fqdn: &str, answers: &[Ipv4Addr]) -> Result<ObservedState> {
    match answers {
        [] => Ok(ObservedState::Absent),
        [ip] => Ok(ObservedState::Single(*ip)),
        _ => Err(Error::ambiguous(fqdn)),
    }
}

/// Build a resolver bound to exactly the given nameserver addresses
fn authoritative_resolver(addrs: &[IpAddr]) -> TokioResolver {
    let config = ResolverConfig::from_parts(
        None,
        vec![],
        NameServerConfigGroup::from_ips_clear(addrs, 53, true),
    );

    let mut opts = ResolverOpts::default();
    opts.attempts = AUTHORITATIVE_RETRY_ATTEMPTS;

    TokioResolver::builder_with_config(config, TokioConnectionProvider::default())
        .with_options(opts)
        .build()
}

/// Build a resolver using the host system DNS configuration, falling back
/// to Hickory's default upstream set when that cannot be loaded
fn system_resolver() -> TokioResolver {
    match TokioResolver::builder_tokio() {
        Ok(builder) => builder.build(),
        Err(e) => {
            warn!("failed to load system DNS configuration, using defaults: {e}");
            TokioResolver::builder_with_config(
                ResolverConfig::default(),
                TokioConnectionProvider::default(),
            )
            .build()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hurricane_core::record::PLACEHOLDER_IP;

    #[test]
    fn classify_empty_answer_is_absent() {
        let state = classify("dyn.example.com", &[]).unwrap();
        assert_eq!(state, ObservedState::Absent);
    }

    #[test]
    fn classify_single_answer() {
        let ip = Ipv4Addr::new(203, 0, 113, 9);
        let state = classify("dyn.example.com", &[ip]).unwrap();
        assert_eq!(state, ObservedState::Single(ip));
    }

    #[test]
    fn classify_placeholder_answer() {
        let state = classify("dyn.example.com", &[PLACEHOLDER_IP]).unwrap();
        assert!(state.is_placeholder());
    }

    #[test]
    fn classify_multiple_answers_is_ambiguous() {
        let answers = [Ipv4Addr::new(203, 0, 113, 9), Ipv4Addr::new(198, 51, 100, 7)];
        let err = classify("dyn.example.com", &answers).unwrap_err();
        assert!(matches!(err, Error::Ambiguous { .. }));
    }

    #[test]
    fn authoritative_resolver_binds_given_servers() {
        // Construction should not panic, even for a single server
        let addrs = [IpAddr::from([192, 0, 2, 53])];
        let _resolver = authoritative_resolver(&addrs);
    }
}
