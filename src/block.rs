/// Inline content of a table cell
#[derive(Debug, Clone, PartialEq)]
pub enum Inline {
    Text(String),
    /// A `<span>`, with its raw `style` attribute if present
    Span {
        style: Option<String>,
        children: Vec<Inline>,
    },
    /// Any other inline wrapper (`strong`, `em`, `code`, `a`, ...)
    Element { children: Vec<Inline> },
}

impl Inline {
    /// Concatenated text of this node and all descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        self.push_text(&mut out);
        out
    }

    fn push_text(&self, out: &mut String) {
        match self {
            Inline::Text(text) => out.push_str(text),
            Inline::Span { children, .. } | Inline::Element { children } => {
                for child in children {
                    child.push_text(out);
                }
            }
        }
    }

    pub fn contains_span(&self) -> bool {
        match self {
            Inline::Text(_) => false,
            Inline::Span { .. } => true,
            Inline::Element { children } => children.iter().any(Inline::contains_span),
        }
    }
}

/// A table cell (`th` or `td`)
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub header: bool,
    pub content: Vec<Inline>,
}

impl Cell {
    pub fn text(&self) -> String {
        self.content.iter().map(Inline::text).collect()
    }

    pub fn has_spans(&self) -> bool {
        self.content.iter().any(Inline::contains_span)
    }
}

/// A table row
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    pub cells: Vec<Cell>,
}

/// Top-level blocks of the intermediate HTML tree
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: u8, text: String },
    Paragraph { text: String },
    CodeBlock { content: String },
    /// List items are flattened to their text; nested lists are not kept
    List { ordered: bool, items: Vec<String> },
    Table { rows: Vec<Row> },
}
