//! Validation Engine
//!
//! Core structural validation separated from parsing and CLI concerns:
//! finding accumulation, the file-level structural scan, and the top-level
//! entry points.

use std::fmt;
use std::path::Path;

use crate::parser::{self, SectionKind, SectionMarker};
use crate::ruleset::Ruleset;
use crate::validation::sections;

/// A single validation finding: one violated structural rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Result of validating a document
///
/// Findings are kept in detection order: structural checks first, then
/// [INFO] checks, then [NAGLOWEK] checks. Nothing is deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self { errors: Vec::new() }
    }

    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(ValidationError::new(message));
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate a file on disk
///
/// A missing or unreadable file is reported as a finding like any other
/// violation; the caller always receives an ordered list of findings,
/// empty when the document is structurally valid.
pub fn validate_path(path: &Path, ruleset: &Ruleset) -> ValidationResult {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            let mut result = ValidationResult::new();
            result.add_error(format!("file not found: {}", path.display()));
            return result;
        }
        Err(e) => {
            let mut result = ValidationResult::new();
            result.add_error(format!("cannot read {}: {}", path.display(), e));
            return result;
        }
    };

    let text = parser::decode_lossy(&bytes);
    let lines = parser::split_lines(&text);
    validate_lines(&lines, ruleset)
}

/// Validate an in-memory sequence of normalized lines
pub fn validate_lines(lines: &[String], ruleset: &Ruleset) -> ValidationResult {
    let mut result = ValidationResult::new();

    if let Some(markers) = scan_structure(lines, &mut result) {
        log::debug!("located {} section markers", markers.len());
        sections::validate_info(lines, &markers, ruleset, &mut result);
        sections::validate_headers(lines, &markers, ruleset, &mut result);
    }

    result
}

/// Single linear pass over the lines: locate section markers and check
/// file-level ordering rules
///
/// Returns `None` for a document with no non-blank line; there is nothing
/// for the field validators to check in that case. Findings never stop the
/// scan; the document is always walked to the end.
fn scan_structure(
    lines: &[String],
    result: &mut ValidationResult,
) -> Option<Vec<SectionMarker>> {
    // The format requires a terminating line separator, which after
    // normalization shows up as a final empty line.
    if lines.last().is_none_or(|l| !l.is_empty()) {
        result.add_error("file must end with an empty line");
    }

    let Some(first_nonblank) = lines.iter().position(|l| !l.trim().is_empty()) else {
        result.add_error("empty file");
        return None;
    };

    if lines[first_nonblank].trim() != SectionKind::Info.literal() {
        result.add_error(format!(
            "first section must be {}",
            SectionKind::Info.literal()
        ));
    }

    let markers: Vec<SectionMarker> = lines
        .iter()
        .enumerate()
        .filter_map(|(line, l)| {
            SectionKind::from_line(l.trim()).map(|kind| SectionMarker { line, kind })
        })
        .collect();

    // [ZAWARTOSC] needs an admitting [NAGLOWEK], and each header admits at
    // most one following content block. [INFO] is a standalone section and
    // closes any open header.
    let mut header_open = false;
    for marker in &markers {
        match marker.kind {
            SectionKind::Info => header_open = false,
            SectionKind::Header => header_open = true,
            SectionKind::Content => {
                if !header_open {
                    result.add_error(format!(
                        "[ZAWARTOSC] at line {} without a preceding [NAGLOWEK]",
                        marker.line + 1
                    ));
                }
                header_open = false;
            }
        }
    }

    Some(markers)
}
