//! Settings loading: defaults → user file (deep merge) → env overrides.

use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::errors::{Result, SettingsError};
use crate::types::ScribeSettings;

/// File name under the settings directory.
const SETTINGS_FILE: &str = "settings.json";

/// Directory under the home directory.
const SETTINGS_DIR: &str = ".scribe";

/// Path of the user settings file: `~/.scribe/settings.json`.
pub fn settings_path() -> Result<PathBuf> {
    let home = std::env::var_os("HOME").ok_or(SettingsError::NoHomeDir)?;
    Ok(PathBuf::from(home).join(SETTINGS_DIR).join(SETTINGS_FILE))
}

/// Deep-merge `overlay` onto `base`.
///
/// Objects merge key by key, recursively; any other value in `overlay`
/// (including `null`) replaces the `base` value wholesale.
#[must_use]
pub fn deep_merge(base: Value, overlay: Value) -> Value {
    match (base, overlay) {
        (Value::Object(mut base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                let merged = match base_map.remove(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => overlay_value,
                };
                let _ = base_map.insert(key, merged);
            }
            Value::Object(base_map)
        }
        (_, overlay) => overlay,
    }
}

/// Load settings from the default path with env overrides applied.
pub fn load_settings() -> Result<ScribeSettings> {
    load_settings_from_path(&settings_path()?)
}

/// Load settings from a specific file, deep-merged over defaults, with env
/// overrides applied and values validated.
///
/// A missing file is not an error — defaults plus env overrides are used.
pub fn load_settings_from_path(path: &Path) -> Result<ScribeSettings> {
    let defaults = serde_json::to_value(ScribeSettings::default())
        .map_err(SettingsError::Invalid)?;

    let merged = if path.is_file() {
        let raw = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let file_value: Value =
            serde_json::from_str(&raw).map_err(|source| SettingsError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        deep_merge(defaults, file_value)
    } else {
        tracing::debug!(?path, "no settings file, using defaults");
        defaults
    };

    let mut settings: ScribeSettings =
        serde_json::from_value(merged).map_err(SettingsError::Invalid)?;
    apply_env_overrides(&mut settings, |name| std::env::var(name).ok());
    settings.validate();
    Ok(settings)
}

/// Apply environment overrides (highest priority layer).
///
/// `SCRIBE_API_KEY` wins over `GEMINI_API_KEY`; both win over the file.
/// The lookup is injected so tests don't race on process-global env state.
pub(crate) fn apply_env_overrides<F>(settings: &mut ScribeSettings, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(key) = lookup("SCRIBE_API_KEY").or_else(|| lookup("GEMINI_API_KEY")) {
        if !key.is_empty() {
            settings.api.api_key = Some(key);
        }
    }
    if let Some(model) = lookup("SCRIBE_MODEL") {
        if !model.is_empty() {
            settings.api.model = model;
        }
    }
    if let Some(base_url) = lookup("SCRIBE_BASE_URL") {
        if !base_url.is_empty() {
            settings.api.base_url = base_url;
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    // ── deep_merge ───────────────────────────────────────────────────────

    #[test]
    fn merge_disjoint_keys() {
        let merged = deep_merge(json!({"a": 1}), json!({"b": 2}));
        assert_eq!(merged, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn merge_overlay_wins_on_scalar() {
        let merged = deep_merge(json!({"a": 1}), json!({"a": 2}));
        assert_eq!(merged, json!({"a": 2}));
    }

    #[test]
    fn merge_recurses_into_objects() {
        let base = json!({"api": {"model": "m1", "baseUrl": "u"}});
        let overlay = json!({"api": {"model": "m2"}});
        let merged = deep_merge(base, overlay);
        assert_eq!(merged, json!({"api": {"model": "m2", "baseUrl": "u"}}));
    }

    #[test]
    fn merge_array_replaced_wholesale() {
        let merged = deep_merge(json!({"a": [1, 2]}), json!({"a": [3]}));
        assert_eq!(merged, json!({"a": [3]}));
    }

    // ── load_settings_from_path ──────────────────────────────────────────

    #[test]
    fn missing_file_yields_defaults() {
        let settings =
            load_settings_from_path(Path::new("/nonexistent/settings.json")).unwrap();
        assert_eq!(settings.api.model, "gemini-2.5-pro");
    }

    #[test]
    fn file_values_merge_over_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"api": {"apiKey": "k-123"}}"#).unwrap();

        let settings = load_settings_from_path(&path).unwrap();
        assert_eq!(settings.api.api_key.as_deref(), Some("k-123"));
        assert_eq!(settings.api.model, "gemini-2.5-pro");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{not json").unwrap();

        let err = load_settings_from_path(&path).unwrap_err();
        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn loaded_values_are_validated() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"generation": {"temperature": 99.0}}"#).unwrap();

        let settings = load_settings_from_path(&path).unwrap();
        assert!((settings.generation.temperature - 2.0).abs() < f64::EPSILON);
    }

    // ── env overrides ────────────────────────────────────────────────────

    #[test]
    fn scribe_key_beats_gemini_key() {
        let mut settings = ScribeSettings::default();
        apply_env_overrides(&mut settings, |name| match name {
            "SCRIBE_API_KEY" => Some("scribe-key".into()),
            "GEMINI_API_KEY" => Some("gemini-key".into()),
            _ => None,
        });
        assert_eq!(settings.api.api_key.as_deref(), Some("scribe-key"));
    }

    #[test]
    fn gemini_key_used_as_fallback() {
        let mut settings = ScribeSettings::default();
        apply_env_overrides(&mut settings, |name| match name {
            "GEMINI_API_KEY" => Some("gemini-key".into()),
            _ => None,
        });
        assert_eq!(settings.api.api_key.as_deref(), Some("gemini-key"));
    }

    #[test]
    fn empty_env_value_ignored() {
        let mut settings = ScribeSettings::default();
        settings.api.api_key = Some("from-file".into());
        apply_env_overrides(&mut settings, |name| match name {
            "SCRIBE_API_KEY" => Some(String::new()),
            _ => None,
        });
        assert_eq!(settings.api.api_key.as_deref(), Some("from-file"));
    }

    #[test]
    fn model_and_base_url_overridable() {
        let mut settings = ScribeSettings::default();
        apply_env_overrides(&mut settings, |name| match name {
            "SCRIBE_MODEL" => Some("gemini-2.5-flash".into()),
            "SCRIBE_BASE_URL" => Some("http://localhost:9999".into()),
            _ => None,
        });
        assert_eq!(settings.api.model, "gemini-2.5-flash");
        assert_eq!(settings.api.base_url, "http://localhost:9999");
    }
}
