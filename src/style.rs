//! Style directives applied to document primitives.

use crate::config::{BorderSides, ResolvedStyle, VerticalAlignment};
use crate::document::{
    BorderLine, CellBorders, Paragraph, Rgb, Run, Table, TableBorders, TableCell,
};

/// 1pt, in eighths of a point
const BORDER_SIZE: u32 = 8;
const BORDER_COLOR: Rgb = [0, 0, 0];

fn solid_border() -> BorderLine {
    BorderLine::Single {
        size: BORDER_SIZE,
        color: BORDER_COLOR,
    }
}

pub fn pt_to_twips(pt: u32) -> u32 {
    pt.saturating_mul(20)
}

/// Millimetres to twips, truncating like Word's EMU conversion.
pub fn mm_to_twips(mm: f64) -> u32 {
    let emu = (mm * 36_000.0) as u64;
    u32::try_from(emu / 635).unwrap_or(u32::MAX)
}

/// Parse a `RRGGBB` hex string. Anything else yields None.
pub fn parse_hex_color(value: &str) -> Option<Rgb> {
    if value.len() != 6 || !value.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let r = u8::from_str_radix(&value[0..2], 16).ok()?;
    let g = u8::from_str_radix(&value[2..4], 16).ok()?;
    let b = u8::from_str_radix(&value[4..6], 16).ok()?;
    Some([r, g, b])
}

/// Font name, size, bold and italic.
pub fn apply_font(run: &mut Run, style: &ResolvedStyle) {
    run.props.font_name = Some(style.font_name.clone());
    run.props.size_half_points = Some(style.font_size.saturating_mul(2));
    run.props.bold = Some(style.bold);
    run.props.italic = Some(style.italic);
}

/// Set the run color from a hex string. Malformed values are ignored.
pub fn apply_color(run: &mut Run, color: Option<&str>) {
    if let Some(rgb) = color.and_then(parse_hex_color) {
        run.props.color = Some(rgb);
    }
}

/// Before/after spacing in points and a line spacing multiple.
pub fn apply_paragraph_spacing(
    paragraph: &mut Paragraph,
    space_before: u32,
    space_after: u32,
    line_spacing: Option<f64>,
) {
    paragraph.props.space_before = Some(pt_to_twips(space_before));
    paragraph.props.space_after = Some(pt_to_twips(space_after));
    if line_spacing.is_some() {
        paragraph.props.line_spacing = line_spacing;
    }
}

/// Font, color and spacing of a full style record.
pub fn apply_style(paragraph: &mut Paragraph, style: &ResolvedStyle) {
    let run = paragraph.first_run();
    apply_font(run, style);
    apply_color(run, style.color.as_deref());
    apply_paragraph_spacing(
        paragraph,
        style.space_before,
        style.space_after,
        style.line_spacing,
    );
}

/// Uniform 1pt black border around and inside the table.
pub fn set_table_border(table: &mut Table) {
    table.borders = Some(TableBorders {
        top: solid_border(),
        left: solid_border(),
        bottom: solid_border(),
        right: solid_border(),
        inside_h: solid_border(),
        inside_v: solid_border(),
    });
}

/// Draw or explicitly suppress each side of a cell border.
pub fn set_cell_border(cell: &mut TableCell, sides: BorderSides) {
    let line = |on: bool| Some(if on { solid_border() } else { BorderLine::Nil });
    cell.borders = Some(CellBorders {
        top: line(sides.top),
        left: line(sides.left),
        bottom: line(sides.bottom),
        right: line(sides.right),
    });
}

pub fn set_cell_margins(cell: &mut TableCell, mm: f64) {
    cell.margin = Some(mm_to_twips(mm));
}

/// Solid background fill. Malformed colors are ignored.
pub fn set_cell_background(cell: &mut TableCell, color: &str) {
    if let Some(rgb) = parse_hex_color(color) {
        cell.shading = Some(rgb);
    }
}

pub fn set_vertical_alignment(cell: &mut TableCell, alignment: Option<VerticalAlignment>) {
    if alignment.is_some() {
        cell.vertical_alignment = alignment;
    }
}
