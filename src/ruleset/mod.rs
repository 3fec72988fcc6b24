//! Ruleset Management
//!
//! The allow-list tables driving field validation: format versions,
//! communication-purpose codes, code pages, and document-type codes.
//! Built-in defaults are embedded as TOML; a custom ruleset file can
//! replace them without touching the validation algorithm.

pub mod schema;

pub use schema::{AllowedValues, Ruleset, RulesetFile, RulesetMeta};

use std::path::Path;
use std::sync::OnceLock;

use anyhow::{Context, Result};

/// Load a ruleset from a TOML file
pub fn load_ruleset(path: &Path) -> Result<Ruleset> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read ruleset file {}", path.display()))?;
    let file: RulesetFile = toml::from_str(&content)
        .with_context(|| format!("cannot parse ruleset file {}", path.display()))?;
    Ok(Ruleset::from(file))
}

/// The built-in ruleset, parsed once from the embedded TOML resource
pub fn builtin_ruleset() -> &'static Ruleset {
    static BUILTIN: OnceLock<Ruleset> = OnceLock::new();
    BUILTIN.get_or_init(|| {
        let embedded = include_str!("../../resources/rulesets/default.epp-ruleset.toml");
        match toml::from_str::<RulesetFile>(embedded) {
            Ok(file) => Ruleset::from(file),
            Err(e) => {
                log::warn!(
                    "Failed to parse embedded ruleset: {}. Using minimal fallback.",
                    e
                );
                Ruleset::minimal_fallback()
            }
        }
    })
}
