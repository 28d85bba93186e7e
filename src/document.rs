//! In-memory WordprocessingML document model.
//!
//! Lengths are stored in the units the XML uses: font sizes in half-points,
//! spacing, margins and widths in twentieths of a point (twips), border
//! widths in eighths of a point.

use crate::config::VerticalAlignment;

pub type Rgb = [u8; 3];

/// Named paragraph styles defined in `styles.xml`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParagraphStyle {
    Heading(u8),
    ListBullet,
    ListNumber,
}

impl ParagraphStyle {
    pub fn style_id(self) -> String {
        match self {
            ParagraphStyle::Heading(level) => format!("Heading{}", level.clamp(1, 9)),
            ParagraphStyle::ListBullet => "ListBullet".to_string(),
            ParagraphStyle::ListNumber => "ListNumber".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunProperties {
    pub font_name: Option<String>,
    pub size_half_points: Option<u32>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub color: Option<Rgb>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Run {
    pub text: String,
    pub props: RunProperties,
}

impl Run {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            props: RunProperties::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ParagraphProperties {
    pub space_before: Option<u32>,
    pub space_after: Option<u32>,
    /// Multiple of single line spacing
    pub line_spacing: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Paragraph {
    pub style: Option<ParagraphStyle>,
    pub props: ParagraphProperties,
    pub runs: Vec<Run>,
}

impl Paragraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// A paragraph holding a single unstyled run, unless `text` is empty.
    pub fn with_text(text: &str) -> Self {
        let mut paragraph = Self::new();
        if !text.is_empty() {
            paragraph.runs.push(Run::new(text));
        }
        paragraph
    }

    pub fn styled(style: ParagraphStyle, text: &str) -> Self {
        Self {
            style: Some(style),
            ..Self::with_text(text)
        }
    }

    pub fn add_run(&mut self, text: impl Into<String>) -> &mut Run {
        self.runs.push(Run::new(text));
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// The first run, created empty if the paragraph has none.
    pub fn first_run(&mut self) -> &mut Run {
        if self.runs.is_empty() {
            self.runs.push(Run::default());
        }
        &mut self.runs[0]
    }

    pub fn clear(&mut self) {
        self.runs.clear();
    }

    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BorderLine {
    /// Solid line of the given width (eighths of a point) and color
    Single { size: u32, color: Rgb },
    /// Explicitly no border, overriding anything inherited
    Nil,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CellBorders {
    pub top: Option<BorderLine>,
    pub left: Option<BorderLine>,
    pub bottom: Option<BorderLine>,
    pub right: Option<BorderLine>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableBorders {
    pub top: BorderLine,
    pub left: BorderLine,
    pub bottom: BorderLine,
    pub right: BorderLine,
    pub inside_h: BorderLine,
    pub inside_v: BorderLine,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableCell {
    /// Always holds at least one paragraph
    pub paragraphs: Vec<Paragraph>,
    pub shading: Option<Rgb>,
    /// Uniform margin on all four sides, in twips
    pub margin: Option<u32>,
    pub borders: Option<CellBorders>,
    pub vertical_alignment: Option<VerticalAlignment>,
}

impl Default for TableCell {
    fn default() -> Self {
        Self {
            paragraphs: vec![Paragraph::new()],
            shading: None,
            margin: None,
            borders: None,
            vertical_alignment: None,
        }
    }
}

impl TableCell {
    pub fn paragraph_mut(&mut self) -> &mut Paragraph {
        if self.paragraphs.is_empty() {
            self.paragraphs.push(Paragraph::new());
        }
        &mut self.paragraphs[0]
    }

    pub fn text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: usize,
    pub rows: Vec<TableRow>,
    pub borders: Option<TableBorders>,
}

impl Table {
    /// A `rows` x `columns` grid of empty cells.
    pub fn new(rows: usize, columns: usize) -> Self {
        Self {
            columns,
            rows: (0..rows)
                .map(|_| TableRow {
                    cells: (0..columns).map(|_| TableCell::default()).collect(),
                })
                .collect(),
            borders: None,
        }
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row)?.cells.get(col)
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut TableCell> {
        self.rows.get_mut(row)?.cells.get_mut(col)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Paragraph(Paragraph),
    Table(Table),
}

/// Append-only sequence of body elements.
///
/// Elements are handed over complete; once appended they can only be read.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    elements: Vec<Element>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_paragraph(&mut self, paragraph: Paragraph) {
        self.elements.push(Element::Paragraph(paragraph));
    }

    pub fn add_table(&mut self, table: Table) {
        self.elements.push(Element::Table(table));
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether any paragraph uses a list style, so `numbering.xml` is needed.
    pub fn uses_numbering(&self) -> bool {
        self.elements.iter().any(|e| match e {
            Element::Paragraph(p) => matches!(
                p.style,
                Some(ParagraphStyle::ListBullet | ParagraphStyle::ListNumber)
            ),
            Element::Table(_) => false,
        })
    }
}
