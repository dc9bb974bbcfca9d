use crate::table::{Cell, Delimiter, Table};

/// Serialize a table into delimiter-separated text.
///
/// Cells are joined with `delimiter`, rows with a single line feed; no
/// trailing newline is appended. Total over any table: this never fails and
/// identical inputs yield byte-identical output.
#[must_use]
pub fn serialize(table: &Table, delimiter: Delimiter) -> String {
    let mut out = String::new();
    for (i, row) in table.rows().iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for (j, cell) in row.iter().enumerate() {
            if j > 0 {
                out.push(delimiter.as_char());
            }
            push_escaped(&mut out, cell, delimiter);
        }
    }
    out
}

/// A cell is wrapped in double quotes when its text contains a quote, the
/// active delimiter, or a line break; internal quotes are doubled.
fn push_escaped(out: &mut String, cell: &Cell, delimiter: Delimiter) {
    let text = cell.to_text();
    if needs_quoting(&text, delimiter) {
        out.push('"');
        for ch in text.chars() {
            if ch == '"' {
                out.push('"');
            }
            out.push(ch);
        }
        out.push('"');
    } else {
        out.push_str(&text);
    }
}

fn needs_quoting(text: &str, delimiter: Delimiter) -> bool {
    text.chars().any(|c| c == '"' || c == '\n' || c == '\r' || c == delimiter.as_char())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quoting_triggers_follow_the_active_delimiter() {
        assert!(needs_quoting("a;b", Delimiter::Semicolon));
        assert!(!needs_quoting("a;b", Delimiter::Comma));
        assert!(needs_quoting("a,b", Delimiter::Comma));
        assert!(!needs_quoting("a,b", Delimiter::Semicolon));
        assert!(needs_quoting("say \"hi\"", Delimiter::Semicolon));
        assert!(needs_quoting("line\nbreak", Delimiter::Comma));
        assert!(needs_quoting("cr\rhere", Delimiter::Comma));
        assert!(!needs_quoting("plain", Delimiter::Semicolon));
    }
}
