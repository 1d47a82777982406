//! Configuration structures for the invc tooling.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the invc tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InvcConfig {
    /// Defaults applied to fresh invoice drafts.
    pub draft: DraftConfig,

    /// Rendering configuration.
    pub render: RenderConfig,

    /// Preset store configuration.
    pub store: StoreConfig,
}

impl Default for InvcConfig {
    fn default() -> Self {
        Self {
            draft: DraftConfig::default(),
            render: RenderConfig::default(),
            store: StoreConfig::default(),
        }
    }
}

/// Defaults applied to fresh invoice drafts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DraftConfig {
    /// ISO 4217 currency code for new drafts.
    pub currency: String,

    /// Payment terms line for new drafts. `None` keeps the built-in default.
    pub terms: Option<String>,
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            currency: "USD".to_string(),
            terms: None,
        }
    }
}

/// Rendering configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Theme id used when no `--theme` flag is given. Unknown ids resolve
    /// to the default theme.
    pub theme: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: "modern-brutalist".to_string(),
        }
    }
}

/// Preset store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store file path. `None` falls back to the per-user data directory.
    pub path: Option<PathBuf>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { path: None }
    }
}

impl InvcConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = InvcConfig::default();
        assert_eq!(config.draft.currency, "USD");
        assert_eq!(config.draft.terms, None);
        assert_eq!(config.render.theme, "modern-brutalist");
        assert_eq!(config.store.path, None);
    }

    #[test]
    fn test_partial_document_fills_missing_sections() {
        let config: InvcConfig =
            serde_json::from_str(r#"{"draft": {"currency": "EUR"}}"#).unwrap();
        assert_eq!(config.draft.currency, "EUR");
        assert_eq!(config.render.theme, "modern-brutalist");
        assert_eq!(config.store.path, None);
    }

    #[test]
    fn test_file_round_trip() {
        let dir = std::env::temp_dir().join("invc-config-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.json");

        let mut config = InvcConfig::default();
        config.render.theme = "midnight-pro".to_string();
        config.store.path = Some(PathBuf::from("/tmp/presets.json"));
        config.save(&path).unwrap();

        let loaded = InvcConfig::from_file(&path).unwrap();
        assert_eq!(loaded.render.theme, "midnight-pro");
        assert_eq!(loaded.store.path, Some(PathBuf::from("/tmp/presets.json")));
        std::fs::remove_file(&path).ok();
    }
}
