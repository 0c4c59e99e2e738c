//! Splits pasted catalog text into raw labels.

/// Returns one trimmed label per non-blank line, in input order.
///
/// Duplicates and original spelling are preserved; `\n`, `\r\n`, and bare
/// `\r` all end a line.
pub fn parse_labels(raw: &str) -> Vec<String> {
    raw.split(['\n', '\r'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
