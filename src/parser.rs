//! Splitter for the wait-time feed.
//!
//! The feed is comma-separated with optional double-quoted values. A quote
//! toggles quoting wherever it appears, so whitespace before an opening quote
//! does not break the field, and quotes inside a value are kept as written.

use tracing::debug;

/// One data line of the feed, split into unquoted, trimmed fields.
pub type Row = Vec<String>;

/// Splits raw feed text into rows, discarding the header line.
///
/// Commas inside a double-quoted span do not split. Each field has its
/// surrounding whitespace removed, then one pair of enclosing quotes. Blank
/// lines are skipped. Unbalanced quotes are not an error; the rest of the
/// line lands in one field.
pub fn split_rows(text: &str) -> Vec<Row> {
    let rows: Vec<Row> = text
        .lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(split_line)
        .collect();

    debug!(rows = rows.len(), "Split feed text");
    rows
}

/// Splits one line on commas outside quoted spans.
pub fn split_line(line: &str) -> Row {
    let mut fields = Vec::new();
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(clean_field(&line[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }
    fields.push(clean_field(&line[start..]));

    fields
}

fn clean_field(raw: &str) -> String {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(trimmed)
        .to_string()
}
