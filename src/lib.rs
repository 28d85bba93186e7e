pub mod block;
pub mod config;
pub mod document;
mod docx;
mod error;
mod mapper;
mod normalize;
mod parser;
mod spans;
mod style;

pub use block::{Block, Cell, Inline, Row};
pub use config::StyleConfig;
pub use document::Document;
pub use error::Error;
pub use normalize::normalize_tables;
pub use parser::markdown_to_html;
pub use spans::{InlineRun, resolve_cell_runs};

use std::fs;
use std::path::Path;

/// Parse markdown text into a vector of top-level blocks.
///
/// Tables split by blank lines are repaired first.
pub fn parse(markdown: &str) -> Vec<Block> {
    parser::parse(&normalize_tables(markdown))
}

/// Convert markdown to an in-memory document.
pub fn markdown_to_document(markdown: &str, config: &StyleConfig) -> Document {
    let blocks = parse(markdown);
    mapper::blocks_to_document(&blocks, config)
}

/// Convert markdown to `.docx` bytes.
pub fn markdown_to_docx(markdown: &str, config: &StyleConfig) -> Result<Vec<u8>, Error> {
    docx::to_bytes(&markdown_to_document(markdown, config))
}

/// Convert a markdown file and save the result to `output`.
pub fn convert_file(input: &Path, output: &Path, config: &StyleConfig) -> Result<(), Error> {
    if !input.is_file() {
        return Err(Error::InputNotFound(input.to_path_buf()));
    }
    let markdown = fs::read_to_string(input)?;
    let doc = markdown_to_document(&markdown, config);
    docx::save(&doc, output)?;
    log::info!("wrote {} elements to {}", doc.len(), output.display());
    Ok(())
}
