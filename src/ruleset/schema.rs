//! Ruleset Schema Types
//!
//! Types for the allow-list tables driving field validation: the on-disk
//! TOML shape plus the runtime `Ruleset` optimized for membership checks.

use serde::Deserialize;
use std::collections::BTreeSet;

/// Root ruleset file structure (matches TOML)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RulesetFile {
    pub ruleset: RulesetMeta,
    pub allowed: AllowedValues,
}

/// Ruleset metadata
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct RulesetMeta {
    pub name: String,
    pub description: Option<String>,
}

/// Allow-list tables as written in the TOML file
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct AllowedValues {
    pub versions: Vec<String>,
    pub purposes: Vec<String>,
    pub code_pages: Vec<String>,
    pub document_types: Vec<String>,
}

/// Runtime ruleset (optimized for membership checks)
///
/// Immutable once constructed; sorted sets keep the "allowed" part of
/// finding messages stable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ruleset {
    pub name: String,
    versions: BTreeSet<String>,
    purposes: BTreeSet<String>,
    code_pages: BTreeSet<String>,
    document_types: BTreeSet<String>,
}

impl From<RulesetFile> for Ruleset {
    fn from(file: RulesetFile) -> Self {
        Self {
            name: file.ruleset.name,
            versions: file.allowed.versions.into_iter().collect(),
            purposes: file.allowed.purposes.into_iter().collect(),
            code_pages: file.allowed.code_pages.into_iter().collect(),
            document_types: file.allowed.document_types.into_iter().collect(),
        }
    }
}

impl Ruleset {
    pub fn allows_version(&self, value: &str) -> bool {
        self.versions.contains(value)
    }

    pub fn allows_purpose(&self, value: &str) -> bool {
        self.purposes.contains(value)
    }

    pub fn allows_code_page(&self, value: &str) -> bool {
        self.code_pages.contains(value)
    }

    pub fn allows_document_type(&self, value: &str) -> bool {
        self.document_types.contains(value)
    }

    /// Allowed versions, sorted, for finding messages
    pub fn allowed_versions(&self) -> String {
        join(&self.versions)
    }

    /// Allowed communication-purpose codes, sorted, for finding messages
    pub fn allowed_purposes(&self) -> String {
        join(&self.purposes)
    }

    /// Allowed code pages, sorted, for finding messages
    pub fn allowed_code_pages(&self) -> String {
        join(&self.code_pages)
    }

    /// Allowed document-type codes, sorted, for finding messages
    pub fn allowed_document_types(&self) -> String {
        join(&self.document_types)
    }

    /// Minimal hardcoded ruleset used when the embedded resource cannot be
    /// parsed
    pub fn minimal_fallback() -> Self {
        let owned = |values: &[&str]| -> BTreeSet<String> {
            values.iter().map(|v| v.to_string()).collect()
        };

        Self {
            name: "minimal-fallback".to_string(),
            versions: owned(&["1.05"]),
            purposes: owned(&["0", "1", "2", "3"]),
            code_pages: owned(&["852", "1250"]),
            document_types: owned(&["FZ", "FS", "PZ", "WZ"]),
        }
    }
}

fn join(values: &BTreeSet<String>) -> String {
    values
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
