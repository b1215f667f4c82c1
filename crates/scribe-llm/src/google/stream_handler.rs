//! SSE event payloads → text chunks.

use crate::provider::{ProviderError, ProviderResult};

use super::types::ResponseChunk;

/// Extract the text of one SSE event payload.
///
/// Returns `Ok(None)` for chunks that carry no text (keep-alives, safety
/// metadata, usage-only chunks). Multiple text parts in one chunk
/// concatenate in order. A payload that is not valid response JSON is a
/// malformed stream, reported as an upstream error.
pub fn extract_text(payload: &str) -> ProviderResult<Option<String>> {
    let chunk: ResponseChunk =
        serde_json::from_str(payload).map_err(|error| ProviderError::Upstream {
            status: 200,
            message: format!("malformed stream payload: {error}"),
        })?;

    let Some(candidate) = chunk.candidates.into_iter().next() else {
        return Ok(None);
    };
    let Some(content) = candidate.content else {
        return Ok(None);
    };

    let text: String = content
        .parts
        .into_iter()
        .filter_map(|part| part.text)
        .collect();
    if text.is_empty() {
        return Ok(None);
    }
    Ok(Some(text))
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_text_part() {
        let payload = r#"{"candidates":[{"content":{"parts":[{"text":"Bears "}]}}]}"#;
        assert_eq!(extract_text(payload).unwrap().as_deref(), Some("Bears "));
    }

    #[test]
    fn multiple_parts_concatenate() {
        let payload =
            r#"{"candidates":[{"content":{"parts":[{"text":"a"},{"text":"b"}]}}]}"#;
        assert_eq!(extract_text(payload).unwrap().as_deref(), Some("ab"));
    }

    #[test]
    fn no_candidates_is_none() {
        assert_eq!(extract_text(r#"{"usageMetadata":{"totalTokenCount":5}}"#).unwrap(), None);
    }

    #[test]
    fn candidate_without_content_is_none() {
        let payload = r#"{"candidates":[{"finishReason":"STOP","index":0}]}"#;
        assert_eq!(extract_text(payload).unwrap(), None);
    }

    #[test]
    fn non_text_parts_skipped() {
        let payload = r#"{"candidates":[{"content":{"parts":[{"inlineData":{}},{"text":"x"}]}}]}"#;
        assert_eq!(extract_text(payload).unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn empty_text_is_none() {
        let payload = r#"{"candidates":[{"content":{"parts":[{"text":""}]}}]}"#;
        assert_eq!(extract_text(payload).unwrap(), None);
    }

    #[test]
    fn malformed_json_is_upstream_error() {
        let err = extract_text("not json").unwrap_err();
        assert!(matches!(err, ProviderError::Upstream { status: 200, .. }));
    }
}
