//! Engine error types and their user-facing messages.

use scribe_core::RegionKey;
use scribe_llm::ProviderError;

/// Result alias for engine operations.
pub type EngineResult<T> = std::result::Result<T, EngineError>;

/// Errors surfaced by the reconciliation driver.
///
/// Every variant is caught at the driver boundary: callers show
/// [`EngineError::user_message`] and nothing propagates further. No variant
/// is fatal — the document and the engine stay usable after any of them.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A reconciliation is already in flight (single-flight policy).
    #[error("a reconciliation is already in flight")]
    Busy,

    /// The trigger's region is already registered as active.
    #[error("region lines {}..={} already has a reconciliation in flight", .0.start_line, .0.end_line)]
    RegionActive(RegionKey),

    /// The generation backend failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),
}

impl EngineError {
    /// The single user-visible message for this failure.
    ///
    /// The taxonomy collapses to three user-facing cases: configure
    /// credentials, check credentials, or a generic retryable failure.
    /// Busy rejections get their own line since they are not failures of
    /// the active session.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::Busy | Self::RegionActive(_) => {
                "An AI request is already running. Wait for it to finish before starting another."
            }
            Self::Provider(ProviderError::CredentialMissing) => {
                "No API key is configured. Add one in settings to use AI blocks."
            }
            Self::Provider(ProviderError::CredentialInvalid { .. }) => {
                "The generation service rejected your API key. Check it in settings."
            }
            Self::Provider(_) => {
                "The AI request failed. Any partial output was kept in the document; you can retry."
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credentials_message_mentions_settings() {
        let error = EngineError::from(ProviderError::CredentialMissing);
        assert!(error.user_message().contains("No API key"));
    }

    #[test]
    fn invalid_credentials_message_distinct_from_missing() {
        let invalid = EngineError::from(ProviderError::CredentialInvalid {
            message: "denied".into(),
        });
        let missing = EngineError::from(ProviderError::CredentialMissing);
        assert_ne!(invalid.user_message(), missing.user_message());
    }

    #[test]
    fn generic_failure_mentions_partial_output_kept() {
        let error = EngineError::from(ProviderError::Upstream {
            status: 500,
            message: "boom".into(),
        });
        assert!(error.user_message().contains("partial output"));
    }

    #[test]
    fn busy_message_not_an_error_against_the_active_session() {
        assert!(EngineError::Busy.user_message().contains("already running"));
    }
}
