//! # scribe-settings
//!
//! Layered configuration for the Scribe engine.
//!
//! Settings come from three layers, lowest priority first:
//! 1. **Compiled defaults** — [`ScribeSettings::default()`]
//! 2. **User file** — `~/.scribe/settings.json`, deep-merged over defaults
//! 3. **Environment** — `SCRIBE_API_KEY`/`GEMINI_API_KEY`, `SCRIBE_MODEL`,
//!    `SCRIBE_BASE_URL`
//!
//! The global singleton is reloadable: after the application shell rewrites
//! the settings file, [`reload_settings_from_path`] swaps the cached value so
//! subsequent [`get_settings`] calls see fresh data. Callers get an `Arc`
//! snapshot, so a reconciliation that started before a reload keeps one
//! consistent view for its whole lifetime.

#![deny(unsafe_code)]

pub mod errors;
pub mod loader;
pub mod types;

pub use errors::{Result, SettingsError};
pub use loader::{deep_merge, load_settings, load_settings_from_path, settings_path};
pub use types::*;

use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;

/// Global settings cache.
///
/// `RwLock<Option<Arc<..>>>` rather than `OnceLock` so the value can be
/// swapped on reload. Reads take a shared lock and clone the `Arc`.
static SETTINGS: RwLock<Option<Arc<ScribeSettings>>> = RwLock::new(None);

/// Get the global settings snapshot.
///
/// Loads from disk on first call; on failure logs a warning and falls back
/// to compiled defaults so the engine stays usable (generation itself will
/// still refuse to run without a key).
pub fn get_settings() -> Arc<ScribeSettings> {
    {
        let guard = SETTINGS.read();
        if let Some(ref cached) = *guard {
            return Arc::clone(cached);
        }
    }

    let mut guard = SETTINGS.write();
    // Another thread may have initialized while we waited for the lock.
    if let Some(ref cached) = *guard {
        return Arc::clone(cached);
    }

    let settings = Arc::new(match load_settings() {
        Ok(loaded) => loaded,
        Err(error) => {
            tracing::warn!(%error, "failed to load settings, using defaults");
            ScribeSettings::default()
        }
    });
    *guard = Some(Arc::clone(&settings));
    settings
}

/// Seed the global settings with a specific value.
///
/// Replaces any cached value. Used at startup when the settings are already
/// in hand, and by tests.
pub fn init_settings(settings: ScribeSettings) {
    let mut guard = SETTINGS.write();
    *guard = Some(Arc::new(settings));
}

/// Reload settings from a file and swap the global cache.
///
/// The shell calls this after persisting settings edits (API key, model
/// choice) so in-flight code picks up the new values on its next
/// [`get_settings`] call.
pub fn reload_settings_from_path(path: &Path) {
    let reloaded = Arc::new(match load_settings_from_path(path) {
        Ok(loaded) => loaded,
        Err(error) => {
            tracing::warn!(%error, ?path, "failed to reload settings, using defaults");
            ScribeSettings::default()
        }
    });
    let mut guard = SETTINGS.write();
    *guard = Some(reloaded);
    tracing::info!(?path, "settings reloaded");
}

/// Clear the cached settings (test-only).
#[cfg(test)]
pub(crate) fn reset_settings() {
    let mut guard = SETTINGS.write();
    *guard = None;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
