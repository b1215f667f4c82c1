//! Settings-to-provider wiring.

use scribe_llm::{GenerationConfig, GoogleConfig, GoogleProvider};
use scribe_settings::ScribeSettings;

/// Build the Gemini provider described by the loaded settings.
///
/// A missing API key is not an error here; the provider reports
/// `CredentialMissing` when a generation is actually attempted.
#[must_use]
pub fn provider_from_settings(settings: &ScribeSettings) -> GoogleProvider {
    GoogleProvider::new(GoogleConfig {
        model: settings.api.model.clone(),
        api_key: settings.api.api_key.clone(),
        base_url: Some(settings.api.base_url.clone()),
        generation: GenerationConfig {
            temperature: settings.generation.temperature,
            top_p: settings.generation.top_p,
            top_k: settings.generation.top_k,
            max_output_tokens: settings.generation.max_output_tokens,
        },
    })
}
