//! Tests for ruleset loading and its effect on validation.

use std::io::Write;

use epp_validator::parser::split_lines;
use epp_validator::ruleset::{builtin_ruleset, load_ruleset};
use epp_validator::validation::validate_lines;

const CUSTOM_RULESET: &str = r#"
[ruleset]
name = "house-rules"
description = "Only purchase invoices allowed"

[allowed]
versions = ["1.05"]
purposes = ["0", "1"]
code_pages = ["1250"]
document_types = ["FZ", "XX"]
"#;

fn write_ruleset(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(content.as_bytes()).expect("write ruleset");
    file
}

#[test]
fn test_load_custom_ruleset() {
    let file = write_ruleset(CUSTOM_RULESET);
    let ruleset = load_ruleset(file.path()).expect("load ruleset");

    assert_eq!(ruleset.name, "house-rules");
    assert!(ruleset.allows_document_type("XX"));
    assert!(!ruleset.allows_document_type("WZ"));
    assert!(!ruleset.allows_code_page("852"));
}

#[test]
fn test_custom_ruleset_changes_header_findings() {
    let lines = split_lines("[INFO]\n1.05,1,1250\n[NAGLOWEK]\nXX,1\n");

    // 'XX' is rejected by the built-in ruleset but allowed by the custom one.
    let builtin_result = validate_lines(&lines, builtin_ruleset());
    assert_eq!(builtin_result.errors.len(), 1);
    assert!(builtin_result.errors[0].message.contains("'XX'"));

    let file = write_ruleset(CUSTOM_RULESET);
    let custom = load_ruleset(file.path()).expect("load ruleset");
    let custom_result = validate_lines(&lines, &custom);
    assert!(custom_result.is_valid());
}

#[test]
fn test_load_missing_ruleset_fails() {
    let error = load_ruleset(std::path::Path::new("/nonexistent/ruleset.toml"))
        .expect_err("loading should fail");
    assert!(error.to_string().contains("/nonexistent/ruleset.toml"));
}

#[test]
fn test_load_malformed_ruleset_fails() {
    let file = write_ruleset("[ruleset]\nname = \"broken\"\n");
    let error = load_ruleset(file.path()).expect_err("parsing should fail");
    assert!(error.to_string().contains("cannot parse ruleset file"));
}
