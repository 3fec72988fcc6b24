//! Line Normalizer
//!
//! Turns raw file bytes into a uniform sequence of logical lines.
//! Tolerates anything: undecodable bytes are replaced, mixed terminators
//! are normalized, and no input is ever a fatal error at this stage.

/// Decode raw bytes as UTF-8, replacing undecodable sequences
///
/// Structural validation does not depend on the declared code page, so a
/// lossy decode is enough; replaced bytes only ever appear inside field
/// content.
pub fn decode_lossy(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// Split text into logical lines, treating `\r\n` and lone `\r` as `\n`
///
/// Terminators are stripped. A trailing terminator yields a final empty
/// line, which the structural checks rely on.
pub fn split_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .split('\n')
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_unix_terminators() {
        let lines = split_lines("[INFO]\n1.05,1,1250\n");
        assert_eq!(lines, vec!["[INFO]", "1.05,1,1250", ""]);
    }

    #[test]
    fn test_split_windows_terminators() {
        let lines = split_lines("[INFO]\r\n1.05,1,1250\r\n");
        assert_eq!(lines, vec!["[INFO]", "1.05,1,1250", ""]);
    }

    #[test]
    fn test_split_bare_carriage_returns() {
        let lines = split_lines("a\rb\rc");
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_split_without_trailing_terminator() {
        let lines = split_lines("[INFO]");
        assert_eq!(lines, vec!["[INFO]"]);
    }

    #[test]
    fn test_split_empty_input() {
        assert_eq!(split_lines(""), vec![""]);
    }

    #[test]
    fn test_decode_replaces_invalid_bytes() {
        let decoded = decode_lossy(b"[INFO]\n1.05,1,1250,\xff\n");
        assert!(decoded.starts_with("[INFO]\n"));
        assert!(decoded.contains('\u{FFFD}'));
    }
}
