//! Markdown pre-processing applied before parsing.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Blank,
    Row,
    Separator,
    Text,
}

fn classify(line: &str) -> LineKind {
    let stripped = line.trim();
    if stripped.is_empty() {
        return LineKind::Blank;
    }
    if stripped.matches('|').count() < 2 {
        return LineKind::Text;
    }
    let inner: String = stripped.chars().filter(|&c| c != '|').collect();
    if !inner.is_empty() && inner.chars().all(|c| c.is_whitespace() || c == '-' || c == ':') {
        LineKind::Separator
    } else {
        LineKind::Row
    }
}

/// Remove blank lines between table rows so the table parses as one block.
///
/// A blank run is only dropped when the lines on both sides of it are
/// table-like. Everything else is passed through untouched.
pub fn normalize_tables(content: &str) -> String {
    let mut result: Vec<&str> = Vec::new();
    let mut in_table = false;

    for line in content.split('\n') {
        match classify(line) {
            LineKind::Row | LineKind::Separator => {
                if in_table {
                    while result.last().is_some_and(|prev| prev.trim().is_empty()) {
                        result.pop();
                    }
                }
                in_table = true;
            }
            LineKind::Text => in_table = false,
            LineKind::Blank => {}
        }
        result.push(line);
    }

    result.join("\n")
}
