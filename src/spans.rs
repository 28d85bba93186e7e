//! Colored runs inside table data cells.

use crate::block::{Cell, Inline};
use crate::document::Rgb;
use crate::style::parse_hex_color;

const NAMED_COLORS: &[(&str, Rgb)] = &[
    ("red", [255, 0, 0]),
    ("green", [0, 128, 0]),
    ("blue", [0, 0, 255]),
    ("orange", [255, 165, 0]),
    ("yellow", [255, 255, 0]),
    ("purple", [128, 0, 128]),
    ("black", [0, 0, 0]),
    ("white", [255, 255, 255]),
    ("gray", [128, 128, 128]),
    ("grey", [128, 128, 128]),
];

#[derive(Debug, Clone, PartialEq)]
pub struct InlineRun {
    pub text: String,
    pub color: Option<Rgb>,
}

/// Resolve a CSS color value: a palette name or `#RRGGBB`.
pub fn resolve_color(value: &str) -> Option<Rgb> {
    let value = value.trim();
    let lower = value.to_ascii_lowercase();
    if let Some((_, rgb)) = NAMED_COLORS.iter().find(|(name, _)| *name == lower) {
        return Some(*rgb);
    }
    value.strip_prefix('#').and_then(parse_hex_color)
}

/// Extract the color from an inline `style` attribute, e.g. `"color:red;"`.
pub fn style_color(style: &str) -> Option<Rgb> {
    let declaration = style.split(';').find(|d| d.contains("color:"))?;
    let (_, value) = declaration.split_once(':')?;
    resolve_color(value)
}

/// Split a data cell into runs, each with an optional color.
pub fn resolve_cell_runs(cell: &Cell) -> Vec<InlineRun> {
    if !cell.has_spans() {
        return vec![InlineRun {
            text: cell.text().trim().to_string(),
            color: None,
        }];
    }

    let mut runs = Vec::new();
    walk(&cell.content, false, &mut runs);
    runs
}

fn walk(nodes: &[Inline], parent_is_span: bool, runs: &mut Vec<InlineRun>) {
    for node in nodes {
        match node {
            Inline::Text(text) => {
                // Text directly inside a span is emitted with the span itself
                if !parent_is_span && !text.trim().is_empty() {
                    runs.push(InlineRun {
                        text: text.clone(),
                        color: None,
                    });
                }
            }
            Inline::Span { style, children } => {
                runs.push(InlineRun {
                    text: node.text(),
                    color: style.as_deref().and_then(style_color),
                });
                walk(children, true, runs);
            }
            Inline::Element { children } => walk(children, false, runs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    fn span(style: &str, children: Vec<Inline>) -> Inline {
        Inline::Span {
            style: Some(style.to_string()),
            children,
        }
    }

    fn cell(content: Vec<Inline>) -> Cell {
        Cell {
            header: false,
            content,
        }
    }

    #[test]
    fn named_and_hex_colors() {
        assert_eq!(style_color("color: red"), Some([255, 0, 0]));
        assert_eq!(style_color("color: #00ff00"), Some([0, 255, 0]));
        assert_eq!(style_color("color: teal"), None);
        assert_eq!(style_color("color:GREY;"), Some([128, 128, 128]));
        assert_eq!(style_color("font-weight: bold; color:blue;"), Some([0, 0, 255]));
        assert_eq!(style_color("color: #fff"), None);
        assert_eq!(style_color("font-weight: bold"), None);
    }

    #[test]
    fn plain_cell_is_one_trimmed_run() {
        let runs = resolve_cell_runs(&cell(vec![
            text("  hello "),
            Inline::Element {
                children: vec![text("world  ")],
            },
        ]));
        assert_eq!(
            runs,
            vec![InlineRun {
                text: "hello world".into(),
                color: None
            }]
        );
    }

    #[test]
    fn spans_split_runs_without_duplication() {
        let runs = resolve_cell_runs(&cell(vec![
            text("Status: "),
            span("color:red", vec![text("down")]),
            text(" since "),
            span("color: #0000FF", vec![text("noon")]),
        ]));
        assert_eq!(
            runs,
            vec![
                InlineRun {
                    text: "Status: ".into(),
                    color: None
                },
                InlineRun {
                    text: "down".into(),
                    color: Some([255, 0, 0])
                },
                InlineRun {
                    text: " since ".into(),
                    color: None
                },
                InlineRun {
                    text: "noon".into(),
                    color: Some([0, 0, 255])
                },
            ]
        );
    }

    #[test]
    fn unrecognized_span_color_keeps_text() {
        let runs = resolve_cell_runs(&cell(vec![span("color: teal", vec![text("x")])]));
        assert_eq!(
            runs,
            vec![InlineRun {
                text: "x".into(),
                color: None
            }]
        );
    }

    #[test]
    fn span_inside_strong_is_found() {
        let runs = resolve_cell_runs(&cell(vec![Inline::Element {
            children: vec![span("color:green", vec![text("ok")])],
        }]));
        assert_eq!(
            runs,
            vec![InlineRun {
                text: "ok".into(),
                color: Some([0, 128, 0])
            }]
        );
    }

    #[test]
    fn blank_text_between_spans_is_dropped() {
        let runs = resolve_cell_runs(&cell(vec![
            span("color:red", vec![text("a")]),
            text("   "),
            span("color:blue", vec![text("b")]),
        ]));
        assert_eq!(runs.len(), 2);
    }
}
