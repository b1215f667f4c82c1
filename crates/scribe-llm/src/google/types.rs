//! Gemini provider configuration and wire types.
//!
//! Wire types cover only the slice of `streamGenerateContent` we use: text
//! parts in, text parts out. Unknown response fields are ignored by serde.

use serde::{Deserialize, Serialize};

/// Default base URL for the Gemini API.
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default model.
pub const DEFAULT_MODEL: &str = "gemini-2.5-pro";

// ─────────────────────────────────────────────────────────────────────────────
// Configuration
// ─────────────────────────────────────────────────────────────────────────────

/// Gemini provider configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoogleConfig {
    /// Model ID.
    pub model: String,
    /// API key. `None` fails with `CredentialMissing` before any request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Base URL override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    /// Sampling parameters sent with every request.
    #[serde(default)]
    pub generation: GenerationConfig,
}

impl Default for GoogleConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            base_url: None,
            generation: GenerationConfig::default(),
        }
    }
}

/// Sampling parameters, serialized into the request's `generationConfig`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    /// Sampling temperature.
    pub temperature: f64,
    /// Nucleus sampling mass.
    pub top_p: f64,
    /// Top-k cutoff.
    pub top_k: u32,
    /// Output token ceiling.
    pub max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 65_536,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Request wire types
// ─────────────────────────────────────────────────────────────────────────────

/// `streamGenerateContent` request body.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// Role/system instruction.
    pub system_instruction: ContentBody,
    /// Conversation contents — a single user turn for us.
    pub contents: Vec<TurnContent>,
    /// Sampling parameters.
    pub generation_config: GenerationConfig,
}

/// A content body without a role (used for the system instruction).
#[derive(Debug, Serialize)]
pub struct ContentBody {
    /// Text parts.
    pub parts: Vec<TextPart>,
}

/// A content body with a role (used for conversation turns).
#[derive(Debug, Serialize)]
pub struct TurnContent {
    /// `"user"` for our single turn.
    pub role: &'static str,
    /// Text parts.
    pub parts: Vec<TextPart>,
}

/// One text part.
#[derive(Debug, Serialize)]
pub struct TextPart {
    /// The text.
    pub text: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Response wire types
// ─────────────────────────────────────────────────────────────────────────────

/// One streamed `GenerateContentResponse` chunk.
#[derive(Debug, Deserialize)]
pub struct ResponseChunk {
    /// Candidate completions; we only read the first.
    #[serde(default)]
    pub candidates: Vec<ResponseCandidate>,
}

/// One candidate in a response chunk.
#[derive(Debug, Deserialize)]
pub struct ResponseCandidate {
    /// Partial content for this candidate.
    #[serde(default)]
    pub content: Option<ResponseContent>,
}

/// Content of a response candidate.
#[derive(Debug, Deserialize)]
pub struct ResponseContent {
    /// Text parts; non-text parts deserialize with `text: None` and are
    /// skipped.
    #[serde(default)]
    pub parts: Vec<ResponsePart>,
}

/// One part of response content.
#[derive(Debug, Deserialize)]
pub struct ResponsePart {
    /// Text payload, if this part is text.
    #[serde(default)]
    pub text: Option<String>,
}

/// Error body shape for non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    /// The error detail.
    pub error: ErrorDetail,
}

/// Detail of an API error.
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    /// Human-readable message.
    #[serde(default)]
    pub message: String,
    /// Machine status, e.g. `INVALID_ARGUMENT`.
    #[serde(default)]
    pub status: String,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case() {
        let request = GenerateContentRequest {
            system_instruction: ContentBody {
                parts: vec![TextPart {
                    text: "be brief".into(),
                }],
            },
            contents: vec![TurnContent {
                role: "user",
                parts: vec![TextPart {
                    text: "hello".into(),
                }],
            }],
            generation_config: GenerationConfig::default(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "be brief");
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["generationConfig"]["topK"], 40);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 65_536);
    }

    #[test]
    fn response_chunk_parses_text_parts() {
        let chunk: ResponseChunk = serde_json::from_str(
            r#"{"candidates":[{"content":{"parts":[{"text":"Bears "}],"role":"model"}}]}"#,
        )
        .unwrap();
        assert_eq!(
            chunk.candidates[0].content.as_ref().unwrap().parts[0]
                .text
                .as_deref(),
            Some("Bears ")
        );
    }

    #[test]
    fn response_chunk_tolerates_missing_fields() {
        let chunk: ResponseChunk = serde_json::from_str(r#"{"usageMetadata":{}}"#).unwrap();
        assert!(chunk.candidates.is_empty());
    }

    #[test]
    fn error_body_parses() {
        let body: ErrorBody = serde_json::from_str(
            r#"{"error":{"code":400,"message":"API key not valid","status":"INVALID_ARGUMENT"}}"#,
        )
        .unwrap();
        assert_eq!(body.error.message, "API key not valid");
        assert_eq!(body.error.status, "INVALID_ARGUMENT");
    }
}
