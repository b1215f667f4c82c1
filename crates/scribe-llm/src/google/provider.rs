//! Gemini provider implementing the [`Provider`] trait.
//!
//! One streaming call per request: `streamGenerateContent` with `alt=sse`,
//! authenticated with an `x-goog-api-key` header. The response is SSE whose
//! `data:` payloads are `GenerateContentResponse` JSON chunks.

use async_trait::async_trait;
use eventsource_stream::{EventStreamError, Eventsource};
use futures::StreamExt;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use tracing::{debug, error, instrument};

use crate::provider::{
    ChunkStream, GenerationRequest, Provider, ProviderError, ProviderResult,
};

use super::stream_handler::extract_text;
use super::types::{
    ContentBody, ErrorBody, GenerateContentRequest, GoogleConfig, TextPart, TurnContent,
    DEFAULT_BASE_URL,
};

/// Gemini streaming provider.
pub struct GoogleProvider {
    config: GoogleConfig,
    client: reqwest::Client,
}

impl GoogleProvider {
    /// Create a provider with its own HTTP client.
    #[must_use]
    pub fn new(config: GoogleConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a provider sharing an existing HTTP client.
    #[must_use]
    pub fn with_client(config: GoogleConfig, client: reqwest::Client) -> Self {
        Self { config, client }
    }

    /// The configured key, or `CredentialMissing`. An empty string counts
    /// as missing — it means "never configured", not "configured wrong".
    fn api_key(&self) -> ProviderResult<&str> {
        self.config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(ProviderError::CredentialMissing)
    }

    fn endpoint(&self) -> String {
        let base = self.config.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        format!(
            "{base}/v1beta/models/{model}:streamGenerateContent?alt=sse",
            model = self.config.model
        )
    }

    fn build_headers(&self, api_key: &str) -> ProviderResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        let _ = headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let _ = headers.insert(
            "x-goog-api-key",
            HeaderValue::from_str(api_key).map_err(|_| ProviderError::CredentialInvalid {
                message: "API key contains characters not valid in a header".to_string(),
            })?,
        );
        Ok(headers)
    }

    fn build_body(&self, request: &GenerationRequest) -> GenerateContentRequest {
        GenerateContentRequest {
            system_instruction: ContentBody {
                parts: vec![TextPart {
                    text: request.system_instruction.clone(),
                }],
            },
            contents: vec![TurnContent {
                role: "user",
                parts: vec![TextPart {
                    text: request.user_prompt.clone(),
                }],
            }],
            generation_config: self.config.generation.clone(),
        }
    }

    /// Map a non-2xx response to the error taxonomy.
    ///
    /// 401/403 are credential rejections outright; Gemini also reports a bad
    /// key as 400 `INVALID_ARGUMENT` with an "API key not valid" message.
    fn map_api_error(status: u16, body: &str) -> ProviderError {
        let parsed = serde_json::from_str::<ErrorBody>(body).ok();
        let message = parsed
            .map(|b| b.error.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP {status}"));

        let key_rejected = matches!(status, 401 | 403)
            || (status == 400 && message.to_ascii_lowercase().contains("api key"));
        if key_rejected {
            ProviderError::CredentialInvalid { message }
        } else {
            ProviderError::Upstream { status, message }
        }
    }

    #[instrument(skip_all, fields(model = %self.config.model))]
    async fn stream_internal(&self, request: &GenerationRequest) -> ProviderResult<ChunkStream> {
        let api_key = self.api_key()?;
        let headers = self.build_headers(api_key)?;
        let body = self.build_body(request);

        debug!(
            system_bytes = request.system_instruction.len(),
            prompt_bytes = request.user_prompt.len(),
            "sending generation request"
        );

        let response = self
            .client
            .post(self.endpoint())
            .headers(headers)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            let mapped = Self::map_api_error(status.as_u16(), &body_text);
            error!(status = status.as_u16(), %mapped, "generation request rejected");
            return Err(mapped);
        }

        let mut events = Box::pin(response.bytes_stream().eventsource());
        let stream = async_stream::try_stream! {
            while let Some(event) = events.next().await {
                let event = event.map_err(Self::map_stream_error)?;
                if let Some(text) = extract_text(&event.data)? {
                    yield text;
                }
            }
        };
        Ok(Box::pin(stream))
    }

    /// Map an SSE framing failure to the error taxonomy.
    ///
    /// Transport failures keep their reqwest error; anything else (invalid
    /// UTF-8, unparseable framing) is a malformed stream from an otherwise
    /// successful response.
    fn map_stream_error(error: EventStreamError<reqwest::Error>) -> ProviderError {
        match error {
            EventStreamError::Transport(error) => ProviderError::Transport(error),
            other => ProviderError::Upstream {
                status: 200,
                message: format!("malformed event stream: {other}"),
            },
        }
    }
}

#[async_trait]
impl Provider for GoogleProvider {
    fn model(&self) -> &str {
        &self.config.model
    }

    #[instrument(skip_all, fields(provider = "google", model = %self.config.model))]
    async fn stream(&self, request: &GenerationRequest) -> ProviderResult<ChunkStream> {
        self.stream_internal(request).await
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
