//! Table row splitting.

/// Split a trimmed table row into decoded cells.
///
/// The leading pipe and, when present, the trailing pipe are removed. Cells
/// are separated by pipes not preceded by a backslash; `\|` decodes to `|`
/// and every cell is trimmed.
pub(crate) fn split_cells(row: &str) -> Vec<String> {
    let inner = row.strip_prefix('|').unwrap_or(row);
    let inner = inner.strip_suffix('|').unwrap_or(inner);
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut escaped = false;
    for ch in inner.chars() {
        if ch == '|' && !escaped {
            cells.push(finish_cell(&current));
            current.clear();
        } else {
            current.push(ch);
        }
        escaped = ch == '\\';
    }
    cells.push(finish_cell(&current));
    cells
}

fn finish_cell(raw: &str) -> String {
    raw.replace("\\|", "|").trim().to_string()
}

/// Encode a cell value for rendering, escaping pipes.
pub(crate) fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}
