//! Provider trait and the error taxonomy shared by all backends.

use std::pin::Pin;

use async_trait::async_trait;
use futures::Stream;

/// Result alias for provider operations.
pub type ProviderResult<T> = std::result::Result<T, ProviderError>;

/// A lazy, finite, non-restartable sequence of decoded text chunks.
///
/// Chunk boundaries carry no meaning — a chunk may end mid-word. The
/// producer owns all byte-level decoding; consumers only ever see valid
/// UTF-8.
pub type ChunkStream = Pin<Box<dyn Stream<Item = ProviderResult<String>> + Send>>;

/// One generation request: a role instruction plus the user payload.
#[derive(Clone, Debug)]
pub struct GenerationRequest {
    /// System/role instruction chosen by the trigger kind.
    pub system_instruction: String,
    /// Context sources plus the delimited current document.
    pub user_prompt: String,
}

/// Backend failure taxonomy.
///
/// Every failure a stream can produce collapses into one of these; the
/// driver converts them to a single user-visible message and none is fatal
/// to the process.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// No credential is configured — no request is attempted.
    #[error("no API key configured")]
    CredentialMissing,

    /// The backend rejected the configured credential.
    #[error("API key rejected: {message}")]
    CredentialInvalid {
        /// Backend-supplied detail.
        message: String,
    },

    /// Connection-level failure (DNS, TLS, reset, timeout).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with an error, or the stream was malformed.
    #[error("backend error (status {status}): {message}")]
    Upstream {
        /// HTTP status, or 200 when the failure was inside the stream body.
        status: u16,
        /// Backend-supplied or parser-supplied detail.
        message: String,
    },
}

impl ProviderError {
    /// Whether retrying the same request may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::CredentialMissing | Self::CredentialInvalid { .. } => false,
            Self::Transport(_) => true,
            Self::Upstream { status, .. } => *status == 429 || *status >= 500,
        }
    }
}

/// A streaming generation backend.
///
/// One call, one stream: the request is issued once and the returned stream
/// yields text chunks until natural completion or a terminal error.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Model the provider is configured for.
    fn model(&self) -> &str;

    /// Open a streaming generation call.
    async fn stream(&self, request: &GenerationRequest) -> ProviderResult<ChunkStream>;
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
