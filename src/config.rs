use serde::Deserialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Name of the optional override file looked up beside the executable.
pub const CONFIG_FILE_NAME: &str = "config.json";

static DEFAULT_CONFIG: &str = include_str!("default_config.json");

/// Largest font size Word accepts, in points.
const MAX_FONT_SIZE: u32 = 1638;
/// Largest paragraph spacing Word accepts, in points.
const MAX_SPACING: u32 = 1584;

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    pub headings: HeadingStyles,
    pub codeblock: StyleRecord,
    pub paragraph: StyleRecord,
    pub table: TableStyles,
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct HeadingStyles {
    pub h1: Option<StyleRecord>,
    pub h2: Option<StyleRecord>,
    pub h3: Option<StyleRecord>,
    pub h4: Option<StyleRecord>,
    pub h5: Option<StyleRecord>,
    pub h6: Option<StyleRecord>,
}

impl HeadingStyles {
    /// Get the configured style for a heading level.
    /// Returns None if the level should use the built-in heading style.
    pub fn for_level(&self, level: u8) -> Option<&StyleRecord> {
        match level {
            1 => self.h1.as_ref(),
            2 => self.h2.as_ref(),
            3 => self.h3.as_ref(),
            4 => self.h4.as_ref(),
            5 => self.h5.as_ref(),
            6 => self.h6.as_ref(),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct TableStyles {
    pub header: StyleRecord,
    pub data: StyleRecord,
}

/// Style attributes as written in the config file. Every field is optional.
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct StyleRecord {
    pub font_name: Option<String>,
    pub font_size: Option<u32>,
    pub bold: Option<bool>,
    pub italic: Option<bool>,
    pub color: Option<String>,
    pub space_before: Option<u32>,
    pub space_after: Option<u32>,
    pub line_spacing: Option<f64>,
    pub uppercase: Option<bool>,
    pub vertical_alignment: Option<String>,
    pub background_color: Option<String>,
    pub cell_margin: Option<f64>,
    pub borders: Option<BorderRecord>,
}

#[derive(Debug, Clone, Copy, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BorderRecord {
    pub top: Option<bool>,
    pub left: Option<bool>,
    pub bottom: Option<bool>,
    pub right: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    Center,
    Bottom,
}

impl VerticalAlignment {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "top" => Some(Self::Top),
            "center" => Some(Self::Center),
            "bottom" => Some(Self::Bottom),
            _ => None,
        }
    }
}

/// Which border sides of a cell are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSides {
    pub top: bool,
    pub left: bool,
    pub bottom: bool,
    pub right: bool,
}

impl BorderSides {
    pub const ALL: Self = Self {
        top: true,
        left: true,
        bottom: true,
        right: true,
    };

    pub const BOTTOM_ONLY: Self = Self {
        top: false,
        left: false,
        bottom: true,
        right: false,
    };
}

/// The element kinds a style record can be resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    Paragraph,
    Heading,
    CodeBlock,
    TableHeader,
    TableData,
}

impl ElementKind {
    /// Hard-coded defaults used for every attribute the config leaves out.
    pub fn defaults(self) -> ResolvedStyle {
        let base = ResolvedStyle {
            font_name: "Calibri".to_string(),
            font_size: 11,
            bold: false,
            italic: false,
            color: None,
            space_before: 0,
            space_after: 0,
            line_spacing: None,
            uppercase: false,
            vertical_alignment: None,
            background_color: None,
            cell_margin: None,
            borders: BorderSides::ALL,
        };
        match self {
            ElementKind::Paragraph => ResolvedStyle {
                space_after: 8,
                line_spacing: Some(1.15),
                ..base
            },
            ElementKind::Heading => ResolvedStyle {
                font_size: 12,
                bold: true,
                ..base
            },
            ElementKind::CodeBlock => ResolvedStyle {
                font_name: "Courier New".to_string(),
                font_size: 10,
                line_spacing: Some(1.0),
                background_color: Some("F2F2F2".to_string()),
                cell_margin: Some(3.0),
                ..base
            },
            ElementKind::TableHeader => ResolvedStyle {
                font_size: 10,
                bold: true,
                uppercase: true,
                vertical_alignment: Some(VerticalAlignment::Bottom),
                borders: BorderSides::BOTTOM_ONLY,
                ..base
            },
            ElementKind::TableData => base,
        }
    }
}

/// A style record with every attribute filled in.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedStyle {
    pub font_name: String,
    pub font_size: u32,
    pub bold: bool,
    pub italic: bool,
    /// `None` inherits the document default
    pub color: Option<String>,
    pub space_before: u32,
    pub space_after: u32,
    pub line_spacing: Option<f64>,
    pub uppercase: bool,
    pub vertical_alignment: Option<VerticalAlignment>,
    pub background_color: Option<String>,
    /// Millimetres
    pub cell_margin: Option<f64>,
    pub borders: BorderSides,
}

impl StyleRecord {
    /// Fill every missing or out-of-range attribute from the defaults of `kind`.
    pub fn resolve(&self, kind: ElementKind) -> ResolvedStyle {
        let d = kind.defaults();
        let borders = match self.borders {
            Some(b) => BorderSides {
                top: b.top.unwrap_or(d.borders.top),
                left: b.left.unwrap_or(d.borders.left),
                bottom: b.bottom.unwrap_or(d.borders.bottom),
                right: b.right.unwrap_or(d.borders.right),
            },
            None => d.borders,
        };
        ResolvedStyle {
            font_name: self.font_name.clone().unwrap_or(d.font_name),
            font_size: self
                .font_size
                .filter(|&s| s > 0)
                .unwrap_or(d.font_size)
                .min(MAX_FONT_SIZE),
            bold: self.bold.unwrap_or(d.bold),
            italic: self.italic.unwrap_or(d.italic),
            color: self.color.clone().or(d.color),
            space_before: self.space_before.unwrap_or(d.space_before).min(MAX_SPACING),
            space_after: self.space_after.unwrap_or(d.space_after).min(MAX_SPACING),
            line_spacing: self
                .line_spacing
                .filter(|&s| s > 0.0)
                .or(d.line_spacing),
            uppercase: self.uppercase.unwrap_or(d.uppercase),
            vertical_alignment: match &self.vertical_alignment {
                Some(value) => VerticalAlignment::parse(value),
                None => d.vertical_alignment,
            },
            background_color: self.background_color.clone().or(d.background_color),
            cell_margin: self.cell_margin.filter(|&m| m > 0.0).or(d.cell_margin),
            borders,
        }
    }
}

impl StyleConfig {
    /// The configuration shipped with the binary.
    pub fn builtin() -> Self {
        match serde_json::from_str(DEFAULT_CONFIG) {
            Ok(config) => config,
            Err(e) => {
                log::error!("Built-in style config does not match the schema: {}", e);
                Self::default()
            }
        }
    }

    /// Load `config.json` from beside the executable, falling back to the
    /// built-in configuration.
    pub fn resolve() -> Self {
        match default_config_path() {
            Some(path) => Self::load(&path),
            None => Self::builtin(),
        }
    }

    /// Load config from a JSON file.
    ///
    /// A missing file silently yields the built-in config. An unreadable or
    /// malformed file logs a warning and yields the built-in config.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Self::builtin(),
            Err(e) => {
                log::warn!("Could not read {} ({}), using defaults", path.display(), e);
                return Self::builtin();
            }
        };
        match serde_json::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Could not load {} ({}), using defaults", path.display(), e);
                Self::builtin()
            }
        }
    }

    pub fn paragraph_style(&self) -> ResolvedStyle {
        self.paragraph.resolve(ElementKind::Paragraph)
    }

    /// Returns None if no record is configured for this level.
    pub fn heading_style(&self, level: u8) -> Option<ResolvedStyle> {
        self.headings
            .for_level(level)
            .map(|record| record.resolve(ElementKind::Heading))
    }

    pub fn codeblock_style(&self) -> ResolvedStyle {
        self.codeblock.resolve(ElementKind::CodeBlock)
    }

    pub fn table_header_style(&self) -> ResolvedStyle {
        self.table.header.resolve(ElementKind::TableHeader)
    }

    pub fn table_data_style(&self) -> ResolvedStyle {
        self.table.data.resolve(ElementKind::TableData)
    }
}

fn default_config_path() -> Option<PathBuf> {
    let exe = std::env::current_exe().ok()?;
    Some(exe.parent()?.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_config_parses() {
        let config = StyleConfig::builtin();
        assert_ne!(config, StyleConfig::default());
        let h1 = config.heading_style(1).unwrap();
        assert_eq!(h1.font_size, 16);
        assert_eq!(h1.color.as_deref(), Some("2E75B6"));
        assert_eq!(h1.space_before, 12);
        assert_eq!(h1.space_after, 6);
        assert!(config.heading_style(5).is_none());
        assert_eq!(config.codeblock_style().font_name, "Courier New");
    }

    #[test]
    fn partial_record_falls_back_per_attribute() {
        let config: StyleConfig =
            serde_json::from_str(r#"{ "paragraph": { "font_size": 14 } }"#).unwrap();
        let p = config.paragraph_style();
        assert_eq!(p.font_size, 14);
        assert_eq!(p.font_name, "Calibri");
        assert!(!p.bold);
        assert!(!p.italic);
        assert_eq!(p.color, None);
        assert_eq!(p.space_before, 0);
        assert_eq!(p.space_after, 8);
        assert_eq!(p.line_spacing, Some(1.15));
    }

    #[test]
    fn empty_config_yields_defaults_everywhere() {
        let config: StyleConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.paragraph_style(), ElementKind::Paragraph.defaults());
        assert_eq!(config.codeblock_style(), ElementKind::CodeBlock.defaults());
        assert_eq!(config.table_header_style(), ElementKind::TableHeader.defaults());
        assert_eq!(config.table_data_style(), ElementKind::TableData.defaults());
        assert!(config.heading_style(1).is_none());
    }

    #[test]
    fn empty_heading_record_uses_heading_defaults() {
        let config: StyleConfig = serde_json::from_str(r#"{ "headings": { "h2": {} } }"#).unwrap();
        let h2 = config.heading_style(2).unwrap();
        assert_eq!(h2.font_name, "Calibri");
        assert_eq!(h2.font_size, 12);
        assert!(h2.bold);
        assert_eq!(h2.space_after, 0);
        assert!(config.heading_style(1).is_none());
    }

    #[test]
    fn header_defaults() {
        let header = StyleConfig::default().table_header_style();
        assert!(header.uppercase);
        assert!(header.bold);
        assert_eq!(header.font_size, 10);
        assert_eq!(header.vertical_alignment, Some(VerticalAlignment::Bottom));
        assert_eq!(header.borders, BorderSides::BOTTOM_ONLY);
    }

    #[test]
    fn vertical_alignment_is_case_insensitive() {
        let config: StyleConfig = serde_json::from_str(
            r#"{ "table": { "header": { "vertical_alignment": "Center" } } }"#,
        )
        .unwrap();
        assert_eq!(
            config.table_header_style().vertical_alignment,
            Some(VerticalAlignment::Center)
        );
    }

    #[test]
    fn unknown_vertical_alignment_leaves_it_unset() {
        let config: StyleConfig = serde_json::from_str(
            r#"{ "table": { "header": { "vertical_alignment": "middle" } } }"#,
        )
        .unwrap();
        assert_eq!(config.table_header_style().vertical_alignment, None);
    }

    #[test]
    fn nonpositive_values_fall_back() {
        let config: StyleConfig = serde_json::from_str(
            r#"{ "codeblock": { "font_size": 0, "line_spacing": 0.0, "cell_margin": -1 } }"#,
        )
        .unwrap();
        let code = config.codeblock_style();
        assert_eq!(code.font_size, 10);
        assert_eq!(code.line_spacing, Some(1.0));
        assert_eq!(code.cell_margin, Some(3.0));
    }

    #[test]
    fn embedded_config_matches_schema() {
        let parsed: Result<StyleConfig, _> = serde_json::from_str(DEFAULT_CONFIG);
        assert!(parsed.is_ok(), "{:?}", parsed.err());
    }

    #[test]
    fn huge_values_are_clamped() {
        let config: StyleConfig = serde_json::from_str(
            r#"{ "paragraph": { "font_size": 3000000000, "space_before": 300000000, "space_after": 4294967295 } }"#,
        )
        .unwrap();
        let paragraph = config.paragraph_style();
        assert_eq!(paragraph.font_size, MAX_FONT_SIZE);
        assert_eq!(paragraph.space_before, MAX_SPACING);
        assert_eq!(paragraph.space_after, MAX_SPACING);

        let mut p = crate::document::Paragraph::with_text("big");
        crate::style::apply_style(&mut p, &paragraph);
        assert_eq!(p.first_run().props.size_half_points, Some(MAX_FONT_SIZE * 2));
        assert_eq!(p.props.space_before, Some(MAX_SPACING * 20));
    }

    #[test]
    fn partial_borders_fall_back_per_side() {
        let config: StyleConfig =
            serde_json::from_str(r#"{ "table": { "data": { "borders": { "left": false } } } }"#)
                .unwrap();
        let data = config.table_data_style();
        assert_eq!(
            data.borders,
            BorderSides {
                top: true,
                left: false,
                bottom: true,
                right: true
            }
        );
    }

    #[test]
    fn load_missing_file_uses_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let config = StyleConfig::load(&dir.path().join("nope.json"));
        assert_eq!(config, StyleConfig::builtin());
    }

    #[test]
    fn load_malformed_file_uses_builtin() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();
        assert_eq!(StyleConfig::load(&path), StyleConfig::builtin());
    }

    #[test]
    fn load_override_replaces_builtin_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{ "paragraph": { "font_name": "Arial" } }"#).unwrap();
        let config = StyleConfig::load(&path);
        assert_eq!(config.paragraph_style().font_name, "Arial");
        assert!(config.heading_style(1).is_none());
    }
}
