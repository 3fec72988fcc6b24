//! Section Field Validators
//!
//! Field-level checks for the [INFO] and [NAGLOWEK] records. Both walk the
//! marker list produced by the structural scan and append findings to the
//! shared result.
//!
//! The two validators deliberately differ in coverage: [INFO] is validated
//! only at its first occurrence, while every [NAGLOWEK] occurrence is
//! checked independently.

use std::sync::OnceLock;

use regex::Regex;

use crate::parser::{SectionKind, SectionMarker, first_record_after, split_fields};
use crate::ruleset::Ruleset;
use crate::validation::engine::ValidationResult;

/// Packed date-time stamps in the form yyyymmddhhnnss
fn datetime_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\b(\d{14})\b").expect("valid date-time token pattern"))
}

/// Validate the first [INFO] section's record
///
/// Later [INFO] markers are tolerated by the scan but not validated here.
/// The absence of any [INFO] marker is reported on its own, independently
/// of the structural first-section check.
pub fn validate_info(
    lines: &[String],
    markers: &[SectionMarker],
    ruleset: &Ruleset,
    result: &mut ValidationResult,
) {
    let Some(marker) = markers.iter().find(|m| m.kind == SectionKind::Info) else {
        result.add_error("[INFO] section not found");
        return;
    };

    let Some(record) = first_record_after(lines, marker.line) else {
        result.add_error("[INFO] contains no records");
        return;
    };

    let fields = split_fields(record);

    // Field layout per the format documentation: version, communication
    // purpose, code page. With fewer than 3 fields there is nothing
    // meaningful to check positionally.
    if fields.len() < 3 {
        result.add_error("[INFO] must contain at least 3 fields: version, purpose, code page");
    } else {
        let version = fields[0].as_str();
        let purpose = fields[1].as_str();
        let code_page = fields[2].as_str();

        if !ruleset.allows_version(version) {
            result.add_error(format!(
                "[INFO] invalid version '{}', allowed: {}",
                version,
                ruleset.allowed_versions()
            ));
        }
        if !ruleset.allows_purpose(purpose) {
            result.add_error(format!(
                "[INFO] invalid communication purpose '{}', allowed: {}",
                purpose,
                ruleset.allowed_purposes()
            ));
        }
        if !ruleset.allows_code_page(code_page) {
            result.add_error(format!(
                "[INFO] invalid code page '{}', allowed: {}",
                code_page,
                ruleset.allowed_code_pages()
            ));
        }
    }

    // Date-time stamps may appear anywhere in the record, not just in the
    // documented positions; every token must carry a zero time-of-day.
    let joined = fields.join(",");
    for token in datetime_token_regex().find_iter(&joined) {
        let token = token.as_str();
        if !token.ends_with("000000") {
            result.add_error(format!(
                "[INFO] date-time '{}' must have a zero time component (...000000)",
                token
            ));
        }
    }
}

/// Validate every [NAGLOWEK] section's first record
///
/// A finding at one header never suppresses checks on the next.
pub fn validate_headers(
    lines: &[String],
    markers: &[SectionMarker],
    ruleset: &Ruleset,
    result: &mut ValidationResult,
) {
    for marker in markers.iter().filter(|m| m.kind == SectionKind::Header) {
        let line_no = marker.line + 1;

        let Some(record) = first_record_after(lines, marker.line) else {
            result.add_error(format!(
                "[NAGLOWEK] at line {} is empty (no records)",
                line_no
            ));
            continue;
        };

        let fields = split_fields(record);
        let doc_type = fields.first().map(String::as_str).unwrap_or("");
        if doc_type.is_empty() {
            result.add_error(format!(
                "[NAGLOWEK] at line {} has an empty first field",
                line_no
            ));
            continue;
        }

        if !ruleset.allows_document_type(doc_type) {
            result.add_error(format!(
                "[NAGLOWEK] at line {}: unknown document type '{}', expected one of: {}",
                line_no,
                doc_type,
                ruleset.allowed_document_types()
            ));
        }
    }
}
