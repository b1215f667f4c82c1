//! Settings type definitions.
//!
//! All types use `#[serde(rename_all = "camelCase")]` and `#[serde(default)]`
//! so a partial JSON file deep-merges cleanly over compiled defaults.

use serde::{Deserialize, Serialize};

/// Root settings for the Scribe engine.
///
/// Loaded from `~/.scribe/settings.json` with defaults for missing fields;
/// a few values can then be overridden from the environment.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScribeSettings {
    /// Settings schema version.
    pub version: String,
    /// Generation backend settings.
    pub api: ApiSettings,
    /// Sampling parameters sent with every generation request.
    pub generation: GenerationSettings,
    /// Logging configuration.
    pub logging: LoggingSettings,
}

impl Default for ScribeSettings {
    fn default() -> Self {
        Self {
            version: "0.1.0".to_string(),
            api: ApiSettings::default(),
            generation: GenerationSettings::default(),
            logging: LoggingSettings::default(),
        }
    }
}

impl ScribeSettings {
    /// Clamp out-of-range sampling values instead of rejecting them.
    ///
    /// Called during loading. Users get corrected behavior plus a warning
    /// rather than a load failure.
    pub fn validate(&mut self) {
        fn clamp(value: &mut f64, low: f64, high: f64, name: &str) {
            if *value < low || *value > high {
                let clamped = value.clamp(low, high);
                tracing::warn!("{name} out of range ({value}), clamped to {clamped}");
                *value = clamped;
            }
        }

        clamp(&mut self.generation.temperature, 0.0, 2.0, "temperature");
        clamp(&mut self.generation.top_p, 0.0, 1.0, "top_p");
    }
}

/// Generation backend (Gemini) connection settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiSettings {
    /// API key. `None` means generation is unavailable until configured.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    /// Model ID.
    pub model: String,
    /// Base URL of the generation endpoint.
    pub base_url: String,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: "gemini-2.5-pro".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
        }
    }
}

/// Sampling parameters for generation requests.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GenerationSettings {
    /// Sampling temperature.
    pub temperature: f64,
    /// Nucleus sampling mass.
    pub top_p: f64,
    /// Top-k cutoff.
    pub top_k: u32,
    /// Output token ceiling.
    pub max_output_tokens: u32,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            temperature: 0.7,
            top_p: 0.95,
            top_k: 40,
            max_output_tokens: 65_536,
        }
    }
}

/// Logging configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LoggingSettings {
    /// Default filter directive when `SCRIBE_LOG` is unset.
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
