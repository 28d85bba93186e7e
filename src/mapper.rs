use crate::block::{Block, Cell, Row};
use crate::config::{BorderSides, ResolvedStyle, StyleConfig};
use crate::document::{Document, Paragraph, ParagraphStyle, Table, TableCell};
use crate::spans::resolve_cell_runs;
use crate::style::{
    apply_color, apply_font, apply_paragraph_spacing, apply_style, set_cell_background,
    set_cell_border, set_cell_margins, set_table_border, set_vertical_alignment,
};

/// Map top-level blocks onto a new document.
pub fn blocks_to_document(blocks: &[Block], config: &StyleConfig) -> Document {
    let mut doc = Document::new();
    for block in blocks {
        emit_block(block, config, &mut doc);
    }
    doc
}

fn emit_block(block: &Block, config: &StyleConfig, doc: &mut Document) {
    match block {
        Block::Paragraph { text } => {
            let mut paragraph = Paragraph::with_text(text);
            apply_style(&mut paragraph, &config.paragraph_style());
            doc.add_paragraph(paragraph);
        }
        Block::Heading { level, text } => match config.heading_style(*level) {
            Some(style) => {
                let mut paragraph = Paragraph::with_text(text);
                apply_style(&mut paragraph, &style);
                doc.add_paragraph(paragraph);
            }
            None => doc.add_paragraph(Paragraph::styled(ParagraphStyle::Heading(*level), text)),
        },
        Block::CodeBlock { content } => emit_code_block(content, config, doc),
        Block::List { ordered, items } => {
            let style = if *ordered {
                ParagraphStyle::ListNumber
            } else {
                ParagraphStyle::ListBullet
            };
            for item in items {
                doc.add_paragraph(Paragraph::styled(style, item));
            }
        }
        Block::Table { rows } => emit_table(rows, config, doc),
    }
}

fn emit_code_block(content: &str, config: &StyleConfig, doc: &mut Document) {
    let style = config.codeblock_style();
    let mut table = Table::new(1, 1);

    if let Some(cell) = table.cell_mut(0, 0) {
        let paragraph = cell.paragraph_mut();
        let run = paragraph.add_run(content);
        apply_font(run, &style);
        apply_color(run, style.color.as_deref());
        apply_paragraph_spacing(paragraph, 0, 0, style.line_spacing);

        if let Some(margin) = style.cell_margin {
            set_cell_margins(cell, margin);
        }
        if let Some(background) = &style.background_color {
            set_cell_background(cell, background);
        }
    }
    set_table_border(&mut table);

    doc.add_table(table);
    doc.add_paragraph(Paragraph::new());
}

fn emit_table(rows: &[Row], config: &StyleConfig, doc: &mut Document) {
    let rows: Vec<&Row> = rows.iter().filter(|r| !r.cells.is_empty()).collect();
    let columns = rows.iter().map(|r| r.cells.len()).max().unwrap_or(0);
    if columns == 0 {
        log::debug!("skipping table without cells");
        return;
    }

    let header_style = config.table_header_style();
    let data_style = config.table_data_style();
    let mut table = Table::new(rows.len(), columns);

    for (row_idx, row) in rows.iter().enumerate() {
        for (col_idx, source) in row.cells.iter().enumerate() {
            let Some(cell) = table.cell_mut(row_idx, col_idx) else {
                continue;
            };
            if row_idx == 0 || source.header {
                fill_header_cell(cell, &source.text(), &header_style);
            } else {
                fill_data_cell(cell, source, row_idx, &data_style);
            }
        }
    }

    doc.add_table(table);
    doc.add_paragraph(Paragraph::new());
}

fn fill_header_cell(cell: &mut TableCell, text: &str, style: &ResolvedStyle) {
    let text = text.trim();
    let text = if style.uppercase {
        text.to_uppercase()
    } else {
        text.to_string()
    };

    let paragraph = cell.paragraph_mut();
    paragraph.clear();
    paragraph.props.space_after = Some(0);
    let run = paragraph.add_run(text);
    apply_font(run, style);
    apply_color(run, style.color.as_deref());

    set_vertical_alignment(cell, style.vertical_alignment);
    set_cell_border(cell, style.borders);
}

fn fill_data_cell(
    cell: &mut TableCell,
    source: &Cell,
    row_idx: usize,
    style: &ResolvedStyle,
) {
    let paragraph = cell.paragraph_mut();
    paragraph.clear();
    paragraph.props.space_after = Some(0);
    for inline in resolve_cell_runs(source) {
        let run = paragraph.add_run(inline.text);
        apply_font(run, style);
        match inline.color {
            Some(rgb) => run.props.color = Some(rgb),
            None => apply_color(run, style.color.as_deref()),
        }
    }

    // Only the first data row draws a top rule; later rows share the one above
    let sides = BorderSides {
        top: style.borders.top && row_idx == 1,
        ..style.borders
    };
    set_cell_border(cell, sides);
}
