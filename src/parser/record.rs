//! Record and Field Extraction
//!
//! A record is the first non-blank line after a section marker, split on
//! commas with surrounding whitespace trimmed. There is no quoting or
//! escaping: the format never embeds the separator inside a field.

/// Find the first data record following a section marker line
///
/// Skips blank lines. Returns `None` when the document ends or the next
/// non-blank line opens another section; absence is not an error here,
/// callers decide what it means.
pub fn first_record_after(lines: &[String], marker_line: usize) -> Option<&str> {
    let mut i = marker_line + 1;
    while i < lines.len() && lines[i].trim().is_empty() {
        i += 1;
    }
    if i >= lines.len() || lines[i].starts_with('[') {
        return None;
    }
    Some(&lines[i])
}

/// Split a record line into trimmed fields
pub fn split_fields(line: &str) -> Vec<String> {
    line.split(',').map(|field| field.trim().to_string()).collect()
}
