use std::io::{Cursor, Seek, Write};
use std::path::Path;

use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::config::VerticalAlignment;
use crate::document::{
    BorderLine, CellBorders, Document, Element, Paragraph, Rgb, Run, Table, TableBorders,
    TableCell,
};
use crate::error::Error;

/// Usable width of a Letter page with 1in margins, in twips
const TEXT_WIDTH: usize = 9360;

fn xml_escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            // Not allowed anywhere in XML 1.0
            '\u{0}'..='\u{8}'
            | '\u{B}'
            | '\u{C}'
            | '\u{E}'..='\u{1F}'
            | '\u{FFFE}'
            | '\u{FFFF}' => {}
            _ => out.push(ch),
        }
    }
    out
}

fn hex(rgb: Rgb) -> String {
    format!("{:02X}{:02X}{:02X}", rgb[0], rgb[1], rgb[2])
}

fn on_off(tag: &str, value: Option<bool>, out: &mut String) {
    match value {
        Some(true) => out.push_str(&format!("<w:{tag}/>")),
        Some(false) => out.push_str(&format!("<w:{tag} w:val=\"0\"/>")),
        None => {}
    }
}

fn run_xml(run: &Run) -> String {
    let props = &run.props;
    let mut rpr = String::new();
    if let Some(font) = &props.font_name {
        let font = xml_escape_text(font);
        rpr.push_str(&format!(
            "<w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\" w:cs=\"{font}\" w:eastAsia=\"{font}\"/>"
        ));
    }
    on_off("b", props.bold, &mut rpr);
    on_off("i", props.italic, &mut rpr);
    if let Some(color) = props.color {
        rpr.push_str(&format!("<w:color w:val=\"{}\"/>", hex(color)));
    }
    if let Some(size) = props.size_half_points {
        rpr.push_str(&format!("<w:sz w:val=\"{size}\"/><w:szCs w:val=\"{size}\"/>"));
    }

    let mut out = String::from("<w:r>");
    if !rpr.is_empty() {
        out.push_str("<w:rPr>");
        out.push_str(&rpr);
        out.push_str("</w:rPr>");
    }

    // Line feeds and tabs become their own run content elements
    let mut buf = String::new();
    let flush = |buf: &mut String, out: &mut String| {
        if !buf.is_empty() {
            out.push_str("<w:t xml:space=\"preserve\">");
            out.push_str(&xml_escape_text(buf));
            out.push_str("</w:t>");
            buf.clear();
        }
    };
    for ch in run.text.chars() {
        match ch {
            '\n' => {
                flush(&mut buf, &mut out);
                out.push_str("<w:br/>");
            }
            '\t' => {
                flush(&mut buf, &mut out);
                out.push_str("<w:tab/>");
            }
            '\r' => {}
            _ => buf.push(ch),
        }
    }
    flush(&mut buf, &mut out);

    out.push_str("</w:r>");
    out
}

fn paragraph_xml(p: &Paragraph) -> String {
    let mut ppr = String::new();
    if let Some(style) = p.style {
        ppr.push_str(&format!("<w:pStyle w:val=\"{}\"/>", style.style_id()));
    }
    let spacing = p.props;
    if spacing.space_before.is_some() || spacing.space_after.is_some() || spacing.line_spacing.is_some()
    {
        ppr.push_str("<w:spacing");
        if let Some(before) = spacing.space_before {
            ppr.push_str(&format!(" w:before=\"{before}\""));
        }
        if let Some(after) = spacing.space_after {
            ppr.push_str(&format!(" w:after=\"{after}\""));
        }
        if let Some(line) = spacing.line_spacing {
            let line = (line * 240.0).round() as u32;
            ppr.push_str(&format!(" w:line=\"{line}\" w:lineRule=\"auto\""));
        }
        ppr.push_str("/>");
    }

    let mut out = String::from("<w:p>");
    if !ppr.is_empty() {
        out.push_str("<w:pPr>");
        out.push_str(&ppr);
        out.push_str("</w:pPr>");
    }
    for run in &p.runs {
        out.push_str(&run_xml(run));
    }
    out.push_str("</w:p>");
    out
}

fn border_xml(name: &str, line: &BorderLine) -> String {
    match line {
        BorderLine::Single { size, color } => format!(
            "<w:{name} w:val=\"single\" w:sz=\"{size}\" w:space=\"0\" w:color=\"{}\"/>",
            hex(*color)
        ),
        BorderLine::Nil => format!("<w:{name} w:val=\"nil\" w:space=\"0\"/>"),
    }
}

fn table_borders_xml(b: &TableBorders) -> String {
    let mut out = String::from("<w:tblBorders>");
    out.push_str(&border_xml("top", &b.top));
    out.push_str(&border_xml("left", &b.left));
    out.push_str(&border_xml("bottom", &b.bottom));
    out.push_str(&border_xml("right", &b.right));
    out.push_str(&border_xml("insideH", &b.inside_h));
    out.push_str(&border_xml("insideV", &b.inside_v));
    out.push_str("</w:tblBorders>");
    out
}

fn cell_borders_xml(b: &CellBorders) -> String {
    let mut out = String::from("<w:tcBorders>");
    let sides = [
        ("top", &b.top),
        ("left", &b.left),
        ("bottom", &b.bottom),
        ("right", &b.right),
    ];
    for (name, line) in sides {
        if let Some(line) = line {
            out.push_str(&border_xml(name, line));
        }
    }
    out.push_str("</w:tcBorders>");
    out
}

fn cell_xml(cell: &TableCell, width: usize) -> String {
    let mut out = String::from("<w:tc><w:tcPr>");
    out.push_str(&format!("<w:tcW w:w=\"{width}\" w:type=\"dxa\"/>"));
    if let Some(borders) = &cell.borders {
        out.push_str(&cell_borders_xml(borders));
    }
    if let Some(fill) = cell.shading {
        out.push_str(&format!(
            "<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{}\"/>",
            hex(fill)
        ));
    }
    if let Some(margin) = cell.margin {
        out.push_str("<w:tcMar>");
        for side in ["top", "left", "bottom", "right"] {
            out.push_str(&format!("<w:{side} w:w=\"{margin}\" w:type=\"dxa\"/>"));
        }
        out.push_str("</w:tcMar>");
    }
    if let Some(alignment) = cell.vertical_alignment {
        let val = match alignment {
            VerticalAlignment::Top => "top",
            VerticalAlignment::Center => "center",
            VerticalAlignment::Bottom => "bottom",
        };
        out.push_str(&format!("<w:vAlign w:val=\"{val}\"/>"));
    }
    out.push_str("</w:tcPr>");

    // A cell must end with a paragraph
    if cell.paragraphs.is_empty() {
        out.push_str("<w:p/>");
    }
    for p in &cell.paragraphs {
        out.push_str(&paragraph_xml(p));
    }
    out.push_str("</w:tc>");
    out
}

fn table_xml(t: &Table) -> String {
    let columns = t.columns.max(1);
    let width = TEXT_WIDTH / columns;

    let mut out = String::from("<w:tbl><w:tblPr>");
    out.push_str("<w:tblStyle w:val=\"TableNormal\"/>");
    out.push_str("<w:tblW w:w=\"0\" w:type=\"auto\"/>");
    if let Some(borders) = &t.borders {
        out.push_str(&table_borders_xml(borders));
    }
    out.push_str("<w:tblLook w:val=\"04A0\" w:firstRow=\"1\" w:lastRow=\"0\" w:firstColumn=\"1\" w:lastColumn=\"0\" w:noHBand=\"0\" w:noVBand=\"1\"/>");
    out.push_str("</w:tblPr><w:tblGrid>");
    for _ in 0..columns {
        out.push_str(&format!("<w:gridCol w:w=\"{width}\"/>"));
    }
    out.push_str("</w:tblGrid>");

    for row in &t.rows {
        out.push_str("<w:tr>");
        for cell in &row.cells {
            out.push_str(&cell_xml(cell, width));
        }
        out.push_str("</w:tr>");
    }
    out.push_str("</w:tbl>");
    out
}

/// Serialize the body of `word/document.xml`.
pub fn document_xml(doc: &Document) -> String {
    let mut body = String::new();
    for element in doc.elements() {
        match element {
            Element::Paragraph(p) => body.push_str(&paragraph_xml(p)),
            Element::Table(t) => body.push_str(&table_xml(t)),
        }
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships"
 xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:body>
    {body}
    <w:sectPr>
      <w:pgSz w:w="12240" w:h="15840"/>
      <w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="708" w:footer="708" w:gutter="0"/>
      <w:cols w:space="708"/>
      <w:docGrid w:linePitch="360"/>
    </w:sectPr>
  </w:body>
</w:document>"#
    )
}

fn content_types_xml(has_numbering: bool) -> String {
    let mut out = String::new();
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    out.push('\n');
    out.push_str(r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#);
    out.push('\n');
    out.push_str(
        r#"  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#,
    );
    out.push('\n');
    out.push_str(r#"  <Default Extension="xml" ContentType="application/xml"/>"#);
    out.push('\n');
    out.push_str(r#"  <Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/>"#);
    out.push('\n');
    out.push_str(r#"  <Override PartName="/word/styles.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"/>"#);
    out.push('\n');
    if has_numbering {
        out.push_str(r#"  <Override PartName="/word/numbering.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml"/>"#);
        out.push('\n');
    }
    out.push_str("</Types>");
    out
}

fn rels_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/>
</Relationships>"#
}

fn document_rels_xml(has_numbering: bool) -> String {
    let mut out = String::new();
    out.push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
    out.push('\n');
    out.push_str(r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">"#);
    out.push('\n');
    out.push_str(r#"  <Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>"#);
    out.push('\n');
    if has_numbering {
        out.push_str(r#"  <Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/>"#);
        out.push('\n');
    }
    out.push_str("</Relationships>");
    out
}

fn heading_style_xml(level: u8) -> String {
    let size = match level {
        1 => 32,
        2 => 26,
        3 => 24,
        _ => 22,
    };
    let italic = if level >= 4 { "<w:i/>" } else { "" };
    format!(
        r#"  <w:style w:type="paragraph" w:styleId="Heading{level}">
    <w:name w:val="heading {level}"/>
    <w:basedOn w:val="Normal"/>
    <w:next w:val="Normal"/>
    <w:uiPriority w:val="9"/>
    <w:qFormat/>
    <w:pPr>
      <w:keepNext/>
      <w:keepLines/>
      <w:spacing w:before="{before}" w:after="0"/>
      <w:outlineLvl w:val="{outline}"/>
    </w:pPr>
    <w:rPr>
      <w:b/>{italic}
      <w:color w:val="2F5496"/>
      <w:sz w:val="{size}"/>
      <w:szCs w:val="{size}"/>
    </w:rPr>
  </w:style>
"#,
        before = if level == 1 { 480 } else { 200 },
        outline = level - 1,
    )
}

fn styles_xml() -> String {
    let mut out = String::from(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:styles xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:docDefaults>
    <w:rPrDefault>
      <w:rPr>
        <w:rFonts w:ascii="Calibri" w:hAnsi="Calibri" w:cs="Calibri" w:eastAsia="Calibri"/>
        <w:sz w:val="22"/>
        <w:szCs w:val="22"/>
      </w:rPr>
    </w:rPrDefault>
    <w:pPrDefault>
      <w:pPr>
        <w:spacing w:after="200" w:line="276" w:lineRule="auto"/>
      </w:pPr>
    </w:pPrDefault>
  </w:docDefaults>
  <w:style w:type="paragraph" w:default="1" w:styleId="Normal">
    <w:name w:val="Normal"/>
    <w:qFormat/>
    <w:rPr>
      <w:rFonts w:ascii="Calibri" w:hAnsi="Calibri"/>
    </w:rPr>
  </w:style>
"#,
    );
    for level in 1..=6 {
        out.push_str(&heading_style_xml(level));
    }
    out.push_str(
        r#"  <w:style w:type="paragraph" w:styleId="ListBullet">
    <w:name w:val="List Bullet"/>
    <w:basedOn w:val="Normal"/>
    <w:uiPriority w:val="99"/>
    <w:pPr>
      <w:numPr><w:numId w:val="1"/></w:numPr>
      <w:contextualSpacing/>
    </w:pPr>
  </w:style>
  <w:style w:type="paragraph" w:styleId="ListNumber">
    <w:name w:val="List Number"/>
    <w:basedOn w:val="Normal"/>
    <w:uiPriority w:val="99"/>
    <w:pPr>
      <w:numPr><w:numId w:val="2"/></w:numPr>
      <w:contextualSpacing/>
    </w:pPr>
  </w:style>
  <w:style w:type="table" w:default="1" w:styleId="TableNormal">
    <w:name w:val="Normal Table"/>
    <w:uiPriority w:val="99"/>
    <w:semiHidden/>
    <w:tblPr>
      <w:tblInd w:w="0" w:type="dxa"/>
      <w:tblCellMar>
        <w:top w:w="0" w:type="dxa"/>
        <w:left w:w="108" w:type="dxa"/>
        <w:bottom w:w="0" w:type="dxa"/>
        <w:right w:w="108" w:type="dxa"/>
      </w:tblCellMar>
    </w:tblPr>
  </w:style>
</w:styles>"#,
    );
    out
}

fn numbering_xml() -> &'static str {
    r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:numbering xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main">
  <w:abstractNum w:abstractNumId="1">
    <w:multiLevelType w:val="singleLevel"/>
    <w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="bullet"/><w:lvlText w:val="•"/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="360" w:hanging="360"/></w:pPr></w:lvl>
  </w:abstractNum>
  <w:abstractNum w:abstractNumId="2">
    <w:multiLevelType w:val="singleLevel"/>
    <w:lvl w:ilvl="0"><w:start w:val="1"/><w:numFmt w:val="decimal"/><w:lvlText w:val="%1."/><w:lvlJc w:val="left"/><w:pPr><w:ind w:left="360" w:hanging="360"/></w:pPr></w:lvl>
  </w:abstractNum>
  <w:num w:numId="1"><w:abstractNumId w:val="1"/></w:num>
  <w:num w:numId="2"><w:abstractNumId w:val="2"/></w:num>
</w:numbering>"#
}

/// Write the `.docx` package for `doc` into `writer`.
pub fn write_docx<W: Write + Seek>(doc: &Document, writer: W) -> Result<W, Error> {
    let has_numbering = doc.uses_numbering();
    let mut zip = ZipWriter::new(writer);
    let opts = SimpleFileOptions::default();

    zip.start_file("[Content_Types].xml", opts)?;
    zip.write_all(content_types_xml(has_numbering).as_bytes())?;

    zip.start_file("_rels/.rels", opts)?;
    zip.write_all(rels_xml().as_bytes())?;

    zip.start_file("word/document.xml", opts)?;
    zip.write_all(document_xml(doc).as_bytes())?;

    zip.start_file("word/styles.xml", opts)?;
    zip.write_all(styles_xml().as_bytes())?;

    if has_numbering {
        zip.start_file("word/numbering.xml", opts)?;
        zip.write_all(numbering_xml().as_bytes())?;
    }

    zip.start_file("word/_rels/document.xml.rels", opts)?;
    zip.write_all(document_rels_xml(has_numbering).as_bytes())?;

    Ok(zip.finish()?)
}

/// Serialize `doc` to `.docx` bytes.
pub fn to_bytes(doc: &Document) -> Result<Vec<u8>, Error> {
    let cursor = write_docx(doc, Cursor::new(Vec::new()))?;
    Ok(cursor.into_inner())
}

/// Save `doc` to `path`. A permission failure is reported as the file being in use.
pub fn save(doc: &Document, path: &Path) -> Result<(), Error> {
    let bytes = to_bytes(doc)?;
    std::fs::write(path, bytes).map_err(|e| match e.kind() {
        std::io::ErrorKind::PermissionDenied => Error::FileInUse(path.to_path_buf()),
        _ => Error::Io(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BorderSides;
    use crate::document::ParagraphStyle;
    use crate::style::{set_cell_border, set_cell_margins, set_table_border};

    const W_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";

    #[test]
    fn escapes_text() {
        let mut p = Paragraph::new();
        p.add_run("a < b & c");
        assert!(paragraph_xml(&p).contains("a &lt; b &amp; c"));
    }

    #[test]
    fn control_characters_are_dropped() {
        let mut p = Paragraph::new();
        p.add_run("form\u{0C}feed and esc\u{1B}ape\u{0}");
        let mut doc = Document::new();
        doc.add_paragraph(p);
        let xml = document_xml(&doc);
        let parsed = roxmltree::Document::parse(&xml).unwrap();
        let text: String = parsed
            .descendants()
            .filter(|n| n.has_tag_name((W_NS, "t")))
            .filter_map(|n| n.text())
            .collect();
        assert_eq!(text, "formfeed and escape");
    }

    #[test]
    fn newlines_become_breaks() {
        let xml = run_xml(&Run::new("line1\nline2"));
        assert_eq!(
            xml,
            "<w:r><w:t xml:space=\"preserve\">line1</w:t><w:br/><w:t xml:space=\"preserve\">line2</w:t></w:r>"
        );
    }

    #[test]
    fn run_properties_in_schema_order() {
        let mut run = Run::new("x");
        run.props.font_name = Some("Calibri".into());
        run.props.bold = Some(true);
        run.props.italic = Some(false);
        run.props.color = Some([0x2e, 0x75, 0xb6]);
        run.props.size_half_points = Some(32);
        let xml = run_xml(&run);
        let fonts = xml.find("<w:rFonts").unwrap();
        let bold = xml.find("<w:b/>").unwrap();
        let italic = xml.find("<w:i w:val=\"0\"/>").unwrap();
        let color = xml.find("<w:color w:val=\"2E75B6\"/>").unwrap();
        let size = xml.find("<w:sz w:val=\"32\"/>").unwrap();
        assert!(fonts < bold && bold < italic && italic < color && color < size);
    }

    #[test]
    fn spacing_and_style() {
        let mut p = Paragraph::styled(ParagraphStyle::ListBullet, "item");
        p.props.space_before = Some(0);
        p.props.space_after = Some(160);
        p.props.line_spacing = Some(1.15);
        let xml = paragraph_xml(&p);
        assert!(xml.contains("<w:pStyle w:val=\"ListBullet\"/>"));
        assert!(xml.contains(
            "<w:spacing w:before=\"0\" w:after=\"160\" w:line=\"276\" w:lineRule=\"auto\"/>"
        ));
    }

    #[test]
    fn cell_properties() {
        let mut table = Table::new(1, 2);
        set_table_border(&mut table);
        if let Some(cell) = table.cell_mut(0, 0) {
            set_cell_border(cell, BorderSides::BOTTOM_ONLY);
            set_cell_margins(cell, 3.0);
            cell.shading = Some([0xf2, 0xf2, 0xf2]);
            cell.vertical_alignment = Some(VerticalAlignment::Bottom);
        }
        let xml = table_xml(&table);
        assert!(xml.contains("<w:insideV w:val=\"single\" w:sz=\"8\" w:space=\"0\" w:color=\"000000\"/>"));
        assert!(xml.contains("<w:top w:val=\"nil\" w:space=\"0\"/>"));
        assert!(xml.contains("<w:bottom w:val=\"single\" w:sz=\"8\""));
        assert!(xml.contains("<w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"F2F2F2\"/>"));
        assert!(xml.contains("<w:left w:w=\"170\" w:type=\"dxa\"/>"));
        assert!(xml.contains("<w:vAlign w:val=\"bottom\"/>"));
        assert_eq!(xml.matches("<w:gridCol w:w=\"4680\"/>").count(), 2);
        assert_eq!(xml.matches("<w:tc>").count(), 2);
    }

    #[test]
    fn document_xml_is_well_formed() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("Hello & goodbye"));
        let mut table = Table::new(2, 2);
        set_table_border(&mut table);
        doc.add_table(table);
        doc.add_paragraph(Paragraph::new());

        let xml = document_xml(&doc);
        let parsed = roxmltree::Document::parse(&xml).unwrap();
        let body = parsed
            .root_element()
            .children()
            .find(|n| n.has_tag_name((W_NS, "body")))
            .unwrap();
        let kinds: Vec<&str> = body
            .children()
            .filter(|n| n.is_element())
            .map(|n| n.tag_name().name())
            .collect();
        assert_eq!(kinds, vec!["p", "tbl", "p", "sectPr"]);
    }

    #[test]
    fn styles_are_well_formed() {
        let styles = styles_xml();
        let parsed = roxmltree::Document::parse(&styles).unwrap();
        let ids: Vec<&str> = parsed
            .descendants()
            .filter(|n| n.has_tag_name((W_NS, "style")))
            .filter_map(|n| n.attribute((W_NS, "styleId")))
            .collect();
        for id in ["Normal", "Heading1", "Heading6", "ListBullet", "ListNumber", "TableNormal"] {
            assert!(ids.contains(&id), "missing style {id}");
        }
        roxmltree::Document::parse(numbering_xml()).unwrap();
    }

    #[test]
    fn package_contains_parts() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::styled(ParagraphStyle::ListNumber, "one"));
        let bytes = to_bytes(&doc).unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<&str> = archive.file_names().collect();
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/styles.xml",
            "word/numbering.xml",
            "word/_rels/document.xml.rels",
        ] {
            assert!(names.contains(&part), "missing {part}");
        }
    }

    #[test]
    fn numbering_part_only_when_needed() {
        let mut doc = Document::new();
        doc.add_paragraph(Paragraph::with_text("plain"));
        let bytes = to_bytes(&doc).unwrap();
        let archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert!(!archive.file_names().any(|n| n == "word/numbering.xml"));
    }
}
