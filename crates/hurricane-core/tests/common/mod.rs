//! Test doubles and common utilities for lifecycle contract tests
//!
//! These doubles replay scripted authoritative observations and record
//! every update push, so tests can assert on what mutations an operation
//! did (or did not) attempt.

use std::collections::VecDeque;
use std::net::Ipv4Addr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use hurricane_core::error::{Error, Result};
use hurricane_core::record::{ObservedState, RecordSpec};
use hurricane_core::traits::{RecordAuthority, RecordUpdater};

/// An authority that replays a scripted sequence of observations
pub struct ScriptedAuthority {
    /// Queued observation outcomes, consumed front to back
    script: Arc<Mutex<VecDeque<Result<ObservedState>>>>,
    /// Call counter for observe()
    observe_call_count: Arc<AtomicUsize>,
}

impl ScriptedAuthority {
    /// Create an authority that will answer with `script`, in order
    pub fn new(script: Vec<Result<ObservedState>>) -> Self {
        Self {
            script: Arc::new(Mutex::new(script.into())),
            observe_call_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Get the number of times observe() was called
    pub fn observe_call_count(&self) -> usize {
        self.observe_call_count.load(Ordering::SeqCst)
    }

    /// Create a new ScriptedAuthority that shares script and counters
    /// with an existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            script: Arc::clone(&other.script),
            observe_call_count: Arc::clone(&other.observe_call_count),
        }
    }
}

#[async_trait]
impl RecordAuthority for ScriptedAuthority {
    async fn observe(&self, _zone: &str, _name: &str) -> Result<ObservedState> {
        self.observe_call_count.fetch_add(1, Ordering::SeqCst);
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .expect("observation script exhausted")
    }
}

/// An updater that records every push and never talks to the network
pub struct RecordingUpdater {
    /// Recorded (fqdn, ip) pairs from push calls
    pushes: Arc<Mutex<Vec<(String, Ipv4Addr)>>>,
    /// Call counter for push()
    push_call_count: Arc<AtomicUsize>,
    /// When set, every push fails with this HTTP status
    fail_with_status: Option<u16>,
}

impl RecordingUpdater {
    pub fn new() -> Self {
        Self {
            pushes: Arc::new(Mutex::new(Vec::new())),
            push_call_count: Arc::new(AtomicUsize::new(0)),
            fail_with_status: None,
        }
    }

    /// Create an updater whose pushes all fail with the given status
    pub fn failing_with(status: u16) -> Self {
        Self {
            fail_with_status: Some(status),
            ..Self::new()
        }
    }

    /// Get the number of times push() was called
    pub fn push_call_count(&self) -> usize {
        self.push_call_count.load(Ordering::SeqCst)
    }

    /// Get the recorded (fqdn, ip) pushes
    pub fn pushes(&self) -> Vec<(String, Ipv4Addr)> {
        self.pushes.lock().unwrap().clone()
    }

    /// Create a new RecordingUpdater that shares counters with an
    /// existing one
    pub fn sharing_counters_with(other: &Self) -> Self {
        Self {
            pushes: Arc::clone(&other.pushes),
            push_call_count: Arc::clone(&other.push_call_count),
            fail_with_status: other.fail_with_status,
        }
    }
}

#[async_trait]
impl RecordUpdater for RecordingUpdater {
    async fn push(&self, fqdn: &str, _password: &str, ip: Ipv4Addr) -> Result<()> {
        self.push_call_count.fetch_add(1, Ordering::SeqCst);

        if let Some(status) = self.fail_with_status {
            return Err(Error::UpdateFailed { status });
        }

        self.pushes.lock().unwrap().push((fqdn.to_string(), ip));
        Ok(())
    }
}

/// Helper to build a resolved record spec for `<name>.example.com`
pub fn spec(name: &str, ip: Ipv4Addr) -> RecordSpec {
    RecordSpec {
        zone: "example.com".to_string(),
        name: name.to_string(),
        ip,
        password: "hunter2".to_string(),
    }
}
