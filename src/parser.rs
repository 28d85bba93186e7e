use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use pulldown_cmark::{Options, Parser, html};

use crate::block::{Block, Cell, Inline, Row};

/// Render markdown to HTML with table support enabled.
///
/// Fenced code blocks are part of CommonMark and need no extension flag.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

/// Parse markdown text into a list of top-level blocks
pub fn parse(markdown: &str) -> Vec<Block> {
    let html = markdown_to_html(markdown);
    parse_html(&html)
}

/// Parse an HTML fragment into top-level blocks.
///
/// Only direct children of `<body>` are considered. Unknown elements are skipped.
pub fn parse_html(fragment: &str) -> Vec<Block> {
    let wrapped = format!(
        "<!doctype html><html><head><meta charset=\"utf-8\"></head><body>{}</body></html>",
        fragment
    );
    let dom = parse_document(RcDom::default(), Default::default()).one(wrapped.as_str());

    let Some(body) = find_element(&dom.document, "body") else {
        return Vec::new();
    };

    let mut blocks = Vec::new();
    for child in body.children.borrow().iter() {
        let Some(tag) = tag_lower(child) else { continue };
        match block_from_element(child, &tag) {
            Some(block) => blocks.push(block),
            None => log::debug!("skipping unsupported top-level <{}>", tag),
        }
    }
    blocks
}

fn block_from_element(node: &Handle, tag: &str) -> Option<Block> {
    match tag {
        "p" => Some(Block::Paragraph {
            text: text_content(node),
        }),
        "h1" | "h2" | "h3" | "h4" | "h5" | "h6" => {
            let level = tag[1..].parse().ok()?;
            Some(Block::Heading {
                level,
                text: text_content(node),
            })
        }
        "pre" => {
            let content = text_content(node)
                .trim_end_matches(['\n', '\r'])
                .to_string();
            Some(Block::CodeBlock { content })
        }
        "ul" | "ol" => {
            let items = children_named(node, &["li"])
                .iter()
                .map(|li| text_content(li).trim().to_string())
                .collect();
            Some(Block::List {
                ordered: tag == "ol",
                items,
            })
        }
        "table" => Some(Block::Table {
            rows: table_rows(node),
        }),
        _ => None,
    }
}

fn table_rows(table: &Handle) -> Vec<Row> {
    let mut trs = Vec::new();
    collect_descendants(table, "tr", &mut trs);

    trs.iter()
        .map(|tr| {
            let cells = children_named(tr, &["th", "td"])
                .iter()
                .map(|cell| Cell {
                    header: tag_lower(cell).as_deref() == Some("th"),
                    content: inline_children(cell),
                })
                .collect();
            Row { cells }
        })
        .collect()
}

fn inline_children(node: &Handle) -> Vec<Inline> {
    let mut out = Vec::new();
    for child in node.children.borrow().iter() {
        match &child.data {
            NodeData::Text { contents } => out.push(Inline::Text(contents.borrow().to_string())),
            NodeData::Element { .. } => {
                let children = inline_children(child);
                if tag_lower(child).as_deref() == Some("span") {
                    out.push(Inline::Span {
                        style: attr_get(child, "style"),
                        children,
                    });
                } else {
                    out.push(Inline::Element { children });
                }
            }
            _ => {}
        }
    }
    out
}

fn tag_lower(node: &Handle) -> Option<String> {
    match &node.data {
        NodeData::Element { name, .. } => Some(name.local.to_string().to_ascii_lowercase()),
        _ => None,
    }
}

fn attr_get(node: &Handle, name: &str) -> Option<String> {
    match &node.data {
        NodeData::Element { attrs, .. } => attrs
            .borrow()
            .iter()
            .find(|a| a.name.local.to_string().eq_ignore_ascii_case(name))
            .map(|a| a.value.to_string()),
        _ => None,
    }
}

fn text_content(node: &Handle) -> String {
    fn walk(node: &Handle, out: &mut String) {
        if let NodeData::Text { contents } = &node.data {
            out.push_str(&contents.borrow());
        }
        for child in node.children.borrow().iter() {
            walk(child, out);
        }
    }
    let mut out = String::new();
    walk(node, &mut out);
    out
}

fn children_named(node: &Handle, names: &[&str]) -> Vec<Handle> {
    node.children
        .borrow()
        .iter()
        .filter(|c| tag_lower(c).is_some_and(|t| names.contains(&t.as_str())))
        .cloned()
        .collect()
}

fn collect_descendants(node: &Handle, name: &str, out: &mut Vec<Handle>) {
    for child in node.children.borrow().iter() {
        if tag_lower(child).as_deref() == Some(name) {
            out.push(child.clone());
        }
        collect_descendants(child, name, out);
    }
}

fn find_element(node: &Handle, name: &str) -> Option<Handle> {
    if tag_lower(node).as_deref() == Some(name) {
        return Some(node.clone());
    }
    node.children
        .borrow()
        .iter()
        .find_map(|child| find_element(child, name))
}
