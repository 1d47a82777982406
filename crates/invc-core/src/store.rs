//! Shareable preset store keyed by short codes.
//!
//! Presets are invoice patches with the computed totals stripped, keyed by a
//! user-chosen code. The whole store serializes to one versioned JSON blob,
//! which is also the on-disk format the CLI maintains.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{InvcError, StoreError};
use crate::models::invoice::InvoicePatch;

const BLOB_VERSION: u32 = 1;

const CODE_RULE: &str = "must be 3-8 alphanumeric characters";

/// In-memory preset collection, sorted by code.
#[derive(Debug, Clone, Default)]
pub struct PresetStore {
    codes: BTreeMap<String, InvoicePatch>,
}

/// Wire format of a serialized store.
#[derive(Serialize, Deserialize)]
struct StoreBlob {
    codes: BTreeMap<String, InvoicePatch>,
    #[serde(rename = "_version", default = "blob_version")]
    version: u32,
}

fn blob_version() -> u32 {
    BLOB_VERSION
}

impl PresetStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and normalize a user-entered code: trimmed, uppercased,
    /// 3 to 8 ASCII alphanumeric characters.
    pub fn normalize_code(code: &str) -> Result<String, StoreError> {
        let normalized = code.trim().to_uppercase();
        let valid = (3..=8).contains(&normalized.len())
            && normalized.chars().all(|c| c.is_ascii_alphanumeric());
        if !valid {
            return Err(StoreError::InvalidCode {
                code: code.to_string(),
                reason: CODE_RULE.to_string(),
            });
        }
        Ok(normalized)
    }

    /// Save a preset under a code, overwriting any previous entry.
    ///
    /// Computed totals are stripped before storing; they are re-derived when
    /// the preset is applied. Returns the normalized code.
    pub fn save(&mut self, code: &str, patch: &InvoicePatch) -> Result<String, StoreError> {
        let code = Self::normalize_code(code)?;
        let mut stored = patch.clone();
        stored.strip_computed();
        self.codes.insert(code.clone(), stored);
        Ok(code)
    }

    /// Load the preset saved under a code.
    pub fn load(&self, code: &str) -> Result<InvoicePatch, StoreError> {
        let code = Self::normalize_code(code)?;
        self.codes
            .get(&code)
            .cloned()
            .ok_or_else(|| StoreError::CodeNotFound {
                code,
                available: self.list(),
            })
    }

    /// Remove a preset. Returns whether one was present.
    pub fn delete(&mut self, code: &str) -> bool {
        match Self::normalize_code(code) {
            Ok(code) => self.codes.remove(&code).is_some(),
            Err(_) => false,
        }
    }

    /// All saved codes, sorted.
    pub fn list(&self) -> Vec<String> {
        self.codes.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Serialize the whole store as a shareable JSON blob.
    pub fn export_blob(&self) -> Result<String, StoreError> {
        let blob = StoreBlob {
            codes: self.codes.clone(),
            version: BLOB_VERSION,
        };
        serde_json::to_string_pretty(&blob).map_err(|e| StoreError::Blob(e.to_string()))
    }

    /// Merge a serialized blob into the store.
    ///
    /// Same-code entries are overwritten and other existing entries survive.
    /// Entries whose code fails validation are skipped. Returns how many
    /// previously unknown codes were added.
    pub fn import_blob(&mut self, text: &str) -> Result<usize, StoreError> {
        let blob: StoreBlob =
            serde_json::from_str(text).map_err(|e| StoreError::Blob(e.to_string()))?;

        let mut added = 0;
        for (code, patch) in blob.codes {
            let Ok(code) = Self::normalize_code(&code) else {
                warn!(code = %code, "skipping preset with invalid code");
                continue;
            };
            if self.codes.insert(code, patch).is_none() {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Read a store file, treating a missing file as an empty store.
    pub fn from_file(path: &Path) -> Result<Self, InvcError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let mut store = Self::new();
        store.import_blob(&content)?;
        Ok(store)
    }

    /// Write the store file, creating parent directories as needed.
    pub fn save_to_file(&self, path: &Path) -> Result<(), InvcError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.export_blob()?)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::invoice::Invoice;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn sample_patch(name: &str) -> InvoicePatch {
        InvoicePatch {
            company_name: Some(name.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_code_validation() {
        assert_eq!(PresetStore::normalize_code("MYCO1").unwrap(), "MYCO1");
        assert_eq!(PresetStore::normalize_code(" myco1 ").unwrap(), "MYCO1");
        assert!(matches!(
            PresetStore::normalize_code("AB"),
            Err(StoreError::InvalidCode { .. })
        ));
        assert!(matches!(
            PresetStore::normalize_code("MY CO"),
            Err(StoreError::InvalidCode { .. })
        ));
        assert!(matches!(
            PresetStore::normalize_code("WAYTOOLONG"),
            Err(StoreError::InvalidCode { .. })
        ));
    }

    #[test]
    fn test_save_normalizes_and_strips_computed() {
        let mut store = PresetStore::new();
        let mut invoice = Invoice::default();
        invoice.items[0].rate = Decimal::from(100);
        invoice.recalculate();

        let code = store.save("acme", &invoice.to_patch()).unwrap();
        assert_eq!(code, "ACME");

        let loaded = store.load("ACME").unwrap();
        assert!(loaded.subtotal.is_none());
        assert!(loaded.total.is_none());
        assert_eq!(loaded.company_logo, None);
        assert_eq!(loaded.items.as_ref().map(|items| items.len()), Some(1));
    }

    #[test]
    fn test_save_overwrites_same_code() {
        let mut store = PresetStore::new();
        store.save("ACME", &sample_patch("First")).unwrap();
        store.save("acme", &sample_patch("Second")).unwrap();

        assert_eq!(store.len(), 1);
        let loaded = store.load("ACME").unwrap();
        assert_eq!(loaded.company_name.as_deref(), Some("Second"));
    }

    #[test]
    fn test_load_unknown_code_lists_available() {
        let mut store = PresetStore::new();
        store.save("ZED1", &sample_patch("Zed")).unwrap();
        store.save("ACME", &sample_patch("Acme")).unwrap();

        let err = store.load("NOPE").unwrap_err();
        match err {
            StoreError::CodeNotFound { code, available } => {
                assert_eq!(code, "NOPE");
                assert_eq!(available, vec!["ACME", "ZED1"]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_delete() {
        let mut store = PresetStore::new();
        store.save("ACME", &sample_patch("Acme")).unwrap();

        assert!(store.delete("acme"));
        assert!(!store.delete("ACME"));
        assert!(!store.delete("x"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_blob_merge_counts_new_codes_only() {
        let mut source = PresetStore::new();
        source.save("ACME", &sample_patch("Acme")).unwrap();
        source.save("ZED1", &sample_patch("Zed revised")).unwrap();
        let blob = source.export_blob().unwrap();

        let mut target = PresetStore::new();
        target.save("ZED1", &sample_patch("Zed old")).unwrap();
        target.save("KEEP1", &sample_patch("Keeper")).unwrap();

        let added = target.import_blob(&blob).unwrap();
        assert_eq!(added, 1);
        assert_eq!(target.list(), vec!["ACME", "KEEP1", "ZED1"]);
        // Same-code entries are overwritten by the imported blob.
        let zed = target.load("ZED1").unwrap();
        assert_eq!(zed.company_name.as_deref(), Some("Zed revised"));
    }

    #[test]
    fn test_import_skips_invalid_codes() {
        let mut store = PresetStore::new();
        let blob = r#"{"codes": {"ok123": {"companyName": "Ok"}, "x": {"companyName": "Short"}}}"#;
        let added = store.import_blob(blob).unwrap();
        assert_eq!(added, 1);
        assert_eq!(store.list(), vec!["OK123"]);
    }

    #[test]
    fn test_import_malformed_blob_leaves_store_untouched() {
        let mut store = PresetStore::new();
        store.save("ACME", &sample_patch("Acme")).unwrap();

        let err = store.import_blob("{ not json").unwrap_err();
        assert!(matches!(err, StoreError::Blob(_)));
        assert_eq!(store.list(), vec!["ACME"]);
    }

    #[test]
    fn test_blob_carries_version_marker() {
        let store = PresetStore::new();
        let blob = store.export_blob().unwrap();
        assert!(blob.contains("\"_version\": 1"));
    }
}
