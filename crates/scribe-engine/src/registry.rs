//! Processing registry: which trigger regions are reconciling right now.
//!
//! Keys are snapshot-relative line ranges, so they go stale the moment the
//! document is edited outside the splice path. Consumers must re-scan the
//! current document and intersect (see `Reconciler::active_regions`) rather
//! than trusting a stored key.
//!
//! The registry can represent several active regions even though the
//! single-flight policy only ever admits one; the policy lives in the
//! driver's flight slot, not here. That headroom is a deliberate extension
//! point for future per-region concurrency.

use std::collections::HashSet;

use metrics::gauge;
use parking_lot::Mutex;
use scribe_core::RegionKey;

/// Set of trigger regions with a reconciliation in flight.
#[derive(Debug, Default)]
pub struct ProcessingRegistry {
    active: Mutex<HashSet<RegionKey>>,
}

impl ProcessingRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a region as active. Returns false if it already was.
    pub fn add(&self, key: RegionKey) -> bool {
        let mut active = self.active.lock();
        let inserted = active.insert(key);
        Self::update_gauge(active.len());
        inserted
    }

    /// Remove a region. Returns false if it was not registered.
    pub fn remove(&self, key: RegionKey) -> bool {
        let mut active = self.active.lock();
        let removed = active.remove(&key);
        Self::update_gauge(active.len());
        removed
    }

    /// Whether a region currently has a reconciliation in flight.
    pub fn is_active(&self, key: RegionKey) -> bool {
        self.active.lock().contains(&key)
    }

    /// All active region keys, ordered by line range.
    pub fn active_keys(&self) -> Vec<RegionKey> {
        let mut keys: Vec<RegionKey> = self.active.lock().iter().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Number of active regions.
    pub fn len(&self) -> usize {
        self.active.lock().len()
    }

    /// Whether no region is active.
    pub fn is_empty(&self) -> bool {
        self.active.lock().is_empty()
    }

    #[allow(clippy::cast_precision_loss)]
    fn update_gauge(count: usize) {
        gauge!("scribe_regions_active").set(count as f64);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
