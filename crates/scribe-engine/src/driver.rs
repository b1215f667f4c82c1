//! The reconciliation driver.
//!
//! Owns the single-flight slot and the processing registry, resolves
//! triggers against the live document, and runs one streaming generation
//! end to end: request construction, chunk absorption, coalesced splice
//! pushes, and guaranteed cleanup.
//!
//! Concurrency model: one flight at a time. Region bookkeeping is a set
//! so hosts can decorate every active region even if the flight policy
//! is later relaxed; the one-at-a-time rule lives in the flight slot, not
//! in the registry.

use std::sync::Arc;

use futures::StreamExt;
use parking_lot::Mutex;
use scribe_core::{scan, text::preview, RegionKey, Trigger};
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::errors::{EngineError, EngineResult};
use crate::host::{ContextProvider, DocumentHost};
use crate::prompt::build_request;
use crate::registry::ProcessingRegistry;
use crate::session::Session;
use scribe_llm::Provider;

/// State of the single-flight slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flight {
    /// No generation in progress.
    Idle,
    /// A generation is streaming for `region`.
    Active {
        /// Identifier for the running session, for log correlation.
        session_id: Uuid,
        /// Region the session was resolved against.
        region: RegionKey,
    },
}

/// Drives trigger resolution and streaming reconciliation against a host.
pub struct Reconciler {
    provider: Arc<dyn Provider>,
    host: Arc<dyn DocumentHost>,
    context: Arc<dyn ContextProvider>,
    registry: ProcessingRegistry,
    flight: Mutex<Flight>,
}

/// Releases the flight slot and the region key on every exit path,
/// including stream errors and panics inside the driver loop.
struct FlightGuard<'a> {
    registry: &'a ProcessingRegistry,
    flight: &'a Mutex<Flight>,
    region: RegionKey,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        let _ = self.registry.remove(self.region);
        *self.flight.lock() = Flight::Idle;
    }
}

impl Reconciler {
    /// Build a reconciler over a provider, a document host, and a context
    /// source.
    #[must_use]
    pub fn new(
        provider: Arc<dyn Provider>,
        host: Arc<dyn DocumentHost>,
        context: Arc<dyn ContextProvider>,
    ) -> Self {
        Self {
            provider,
            host,
            context,
            registry: ProcessingRegistry::new(),
            flight: Mutex::new(Flight::Idle),
        }
    }

    /// Re-scan the live document and return the trigger whose block opens
    /// at `start_line`, together with the exact text it was resolved
    /// against.
    ///
    /// Triggers are never cached across edits: any stored trigger may
    /// carry stale line numbers, so callers resolve immediately before
    /// [`Self::start`] and splice against the returned snapshot.
    #[must_use]
    pub fn resolve_trigger(&self, start_line: usize) -> Option<(Trigger, String)> {
        let text = self.host.current_text();
        let trigger = scan(&text)
            .into_iter()
            .find(|t| t.start_line == start_line)?;
        Some((trigger, text))
    }

    /// Regions from the live document that are currently being processed.
    ///
    /// Scans fresh and intersects with the registry, so keys left behind
    /// by edits that moved or removed a block are never reported.
    #[must_use]
    pub fn active_regions(&self) -> Vec<RegionKey> {
        scan(&self.host.current_text())
            .iter()
            .map(Trigger::region)
            .filter(|r| self.registry.is_active(*r))
            .collect()
    }

    /// Whether a generation is currently in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        *self.flight.lock() != Flight::Idle
    }

    /// The processing registry, for hosts that render region state.
    #[must_use]
    pub fn registry(&self) -> &ProcessingRegistry {
        &self.registry
    }

    /// Run one generation for `trigger`, resolved against `snapshot`, to
    /// completion.
    ///
    /// Rejects with [`EngineError::Busy`] while another flight is active
    /// and with [`EngineError::RegionActive`] if the region is already
    /// registered. On failure the registry and flight slot are cleared
    /// but any partial content already pushed to the host is kept; the
    /// user retries by triggering again.
    #[instrument(skip_all, fields(kind = ?trigger.kind, start = trigger.start_line, end = trigger.end_line))]
    pub async fn start(&self, trigger: Trigger, snapshot: String) -> EngineResult<()> {
        let region = trigger.region();
        let session_id = {
            let mut flight = self.flight.lock();
            if *flight != Flight::Idle {
                return Err(EngineError::Busy);
            }
            if !self.registry.add(region) {
                return Err(EngineError::RegionActive(region));
            }
            let session_id = Uuid::now_v7();
            *flight = Flight::Active { session_id, region };
            session_id
        };
        let _guard = FlightGuard {
            registry: &self.registry,
            flight: &self.flight,
            region,
        };

        info!(%session_id, topic = %preview(&trigger.topic, 80), "starting generation");
        let request = build_request(&trigger, &self.context.gather(), &snapshot);
        let mut session = Session::new(trigger, snapshot);

        let mut stream = match self.provider.stream(&request).await {
            Ok(stream) => stream,
            Err(error) => {
                warn!(%session_id, %error, "provider rejected request");
                return Err(error.into());
            }
        };

        while let Some(chunk) = stream.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(error) => {
                    warn!(
                        %session_id,
                        %error,
                        chunks = session.chunk_count(),
                        "stream failed mid-flight, keeping partial content"
                    );
                    // With nothing accumulated there is no partial state to
                    // keep; pushing would blank the fenced block and lose
                    // the user's topic.
                    if session.chunk_count() > 0 {
                        self.host.replace_all(session.render());
                    }
                    return Err(error.into());
                }
            };
            debug!(%session_id, chunk = %preview(&chunk, 60), "chunk");
            if session.absorb(&chunk) {
                self.host.replace_all(session.render());
            }
        }

        // The last coalescing window is usually partial; push it.
        self.host.replace_all(session.render());
        info!(%session_id, chunks = session.chunk_count(), "generation complete");
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
