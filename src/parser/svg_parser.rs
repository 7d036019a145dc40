//! SVG decoder using roxmltree.

use std::fs;
use std::io::Read;
use std::path::Path;

use roxmltree::{Node, ParsingOptions};

use crate::detect::detect_format_from_bytes;
use crate::error::{Error, Result};
use crate::model::{GradientStop, LinearGradient, SvgDocument, SvgPath, SvgRect, SvgText};

use super::options::{ErrorMode, ParseOptions};

/// The SVG namespace URI.
pub const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// SVG document decoder.
///
/// Only `rect`, `text`, `path` and `linearGradient` children of the root
/// element are decoded; gradients inside a top-level `defs` are picked up as
/// well. Everything else is ignored.
pub struct SvgParser {
    source: String,
    options: ParseOptions,
}

impl SvgParser {
    /// Open an SVG file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open an SVG file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| Error::SourceOpen {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Decode SVG from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Decode SVG from bytes with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        detect_format_from_bytes(data)?;
        let source = String::from_utf8(data.to_vec())
            .map_err(|e| Error::Decode(format!("input is not valid UTF-8: {}", e)))?;
        Ok(Self { source, options })
    }

    /// Decode SVG from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Decode SVG from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Decode SVG markup held in a string.
    pub fn from_string(source: impl Into<String>, options: ParseOptions) -> Result<Self> {
        let source = source.into();
        detect_format_from_bytes(source.as_bytes())?;
        Ok(Self { source, options })
    }

    /// Decode the document into SVG records.
    pub fn parse(&self) -> Result<SvgDocument> {
        let xml = roxmltree::Document::parse_with_options(
            &self.source,
            ParsingOptions {
                allow_dtd: true,
                ..ParsingOptions::default()
            },
        )?;

        let root = xml.root_element();
        if !is_svg_element(root, "svg") {
            return Err(Error::Decode(format!(
                "expected root element <svg> but found <{}>",
                root.tag_name().name()
            )));
        }

        let mut svg = SvgDocument {
            width: root.attribute("width").map(str::to_string),
            height: root.attribute("height").map(str::to_string),
            ..SvgDocument::default()
        };

        for child in root.children().filter(Node::is_element) {
            if is_svg_element(child, "rect") {
                svg.rects.push(self.rect(child)?);
            } else if is_svg_element(child, "text") {
                svg.texts.push(self.text(child)?);
            } else if is_svg_element(child, "path") {
                svg.paths.push(SvgPath {
                    d: child.attribute("d").unwrap_or_default().to_string(),
                });
            } else if is_svg_element(child, "linearGradient") {
                svg.gradients.push(self.gradient(child)?);
            } else if is_svg_element(child, "defs") {
                for def in child
                    .children()
                    .filter(|n| is_svg_element(*n, "linearGradient"))
                {
                    svg.gradients.push(self.gradient(def)?);
                }
            }
        }

        log::debug!(
            "Decoded SVG: {} rects, {} texts, {} paths, {} gradients",
            svg.rects.len(),
            svg.texts.len(),
            svg.paths.len(),
            svg.gradients.len()
        );

        Ok(svg)
    }

    fn rect(&self, node: Node) -> Result<SvgRect> {
        Ok(SvgRect {
            x: self.number(node, "x")?,
            y: self.number(node, "y")?,
            width: self.number(node, "width")?,
            height: self.number(node, "height")?,
            stroke: node.attribute("stroke").map(str::to_string),
        })
    }

    fn text(&self, node: Node) -> Result<SvgText> {
        let content: String = node
            .children()
            .filter(Node::is_text)
            .filter_map(|n| n.text())
            .collect();

        Ok(SvgText {
            x: self.number(node, "x")?,
            y: self.number(node, "y")?,
            content,
        })
    }

    fn gradient(&self, node: Node) -> Result<LinearGradient> {
        let stops = node
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == "stop")
            .map(|stop| GradientStop {
                offset: stop.attribute("offset").unwrap_or_default().to_string(),
                color: stop.attribute("stop-color").unwrap_or_default().to_string(),
            })
            .collect();

        Ok(LinearGradient {
            id: node.attribute("id").unwrap_or_default().to_string(),
            x1: self.number(node, "x1")?,
            y1: self.number(node, "y1")?,
            x2: self.number(node, "x2")?,
            y2: self.number(node, "y2")?,
            stops,
        })
    }

    /// Numeric attribute; absent or empty is zero. `NaN` and infinities,
    /// including overflowing literals, are invalid.
    fn number(&self, node: Node, name: &str) -> Result<f64> {
        let raw = match node.attribute(name) {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => return Ok(0.0),
        };

        match raw.trim().parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(value),
            _ => match self.options.error_mode {
                ErrorMode::Strict => Err(Error::Decode(format!(
                    "invalid number {:?} for attribute '{}' on <{}>",
                    raw,
                    name,
                    node.tag_name().name()
                ))),
                ErrorMode::Lenient => {
                    log::warn!(
                        "Ignoring invalid number {:?} for attribute '{}' on <{}>",
                        raw,
                        name,
                        node.tag_name().name()
                    );
                    Ok(0.0)
                }
            },
        }
    }
}

fn is_svg_element(node: Node, name: &str) -> bool {
    node.is_element()
        && node.tag_name().name() == name
        && matches!(node.tag_name().namespace(), None | Some(SVG_NAMESPACE))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(svg: &str) -> Result<SvgDocument> {
        SvgParser::from_bytes(svg.as_bytes())?.parse()
    }

    #[test]
    fn test_parse_elements() {
        let svg = parse(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="400" height="150">
                <rect x="1" y="2" width="3" height="4" stroke="red"/>
                <text x="10" y="20">Hello</text>
                <path d="M0 0 L10 10"/>
                <circle cx="5" cy="5" r="2"/>
            </svg>"##,
        )
        .unwrap();

        assert_eq!(svg.width.as_deref(), Some("400"));
        assert_eq!(svg.height.as_deref(), Some("150"));
        assert_eq!(svg.rects.len(), 1);
        assert_eq!(svg.rects[0].height, 4.0);
        assert_eq!(svg.rects[0].stroke.as_deref(), Some("red"));
        assert_eq!(svg.texts[0].content, "Hello");
        assert_eq!(svg.texts[0].x, 10.0);
        assert_eq!(svg.paths[0].d, "M0 0 L10 10");
        assert_eq!(svg.element_count(), 3);
    }

    #[test]
    fn test_parse_without_namespace() {
        let svg = parse(r#"<svg><rect width="5"/></svg>"#).unwrap();
        assert_eq!(svg.width, None);
        assert_eq!(svg.rects[0].x, 0.0);
        assert_eq!(svg.rects[0].width, 5.0);
    }

    #[test]
    fn test_parse_gradients() {
        let svg = parse(
            r##"<svg xmlns="http://www.w3.org/2000/svg">
                <defs>
                    <linearGradient id="inner" x2="1">
                        <stop offset="0%" stop-color="#fff"/>
                    </linearGradient>
                </defs>
                <linearGradient id="outer">
                    <stop offset="0" stop-color="red"/>
                    <stop offset="1" stop-color="blue"/>
                </linearGradient>
            </svg>"##,
        )
        .unwrap();

        assert_eq!(svg.gradients.len(), 2);
        assert_eq!(svg.gradients[0].id, "inner");
        assert_eq!(svg.gradients[0].x2, 1.0);
        assert_eq!(svg.gradients[1].stops.len(), 2);
        assert_eq!(svg.gradients[1].first_color(), Some("red"));
    }

    #[test]
    fn test_nested_elements_ignored() {
        let svg = parse(r#"<svg><g><rect width="5"/></g></svg>"#).unwrap();
        assert!(svg.is_empty());
    }

    #[test]
    fn test_text_own_character_data() {
        let svg = parse(r#"<svg><text>Hi(<tspan>ignored</tspan>there)</text></svg>"#).unwrap();
        assert_eq!(svg.texts[0].content, "Hi(there)");
    }

    #[test]
    fn test_wrong_root() {
        let err = SvgParser::from_string("<html><svg/></html>", ParseOptions::default())
            .unwrap()
            .parse()
            .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_foreign_namespace_root() {
        let err = SvgParser::from_string(
            r#"<svg xmlns="urn:example:other"/>"#,
            ParseOptions::default(),
        )
        .unwrap()
        .parse()
        .unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_malformed_xml() {
        assert!(matches!(parse("<svg><rect></svg>"), Err(Error::Decode(_))));
    }

    #[test]
    fn test_not_svg() {
        assert!(matches!(
            SvgParser::from_bytes(b"hello"),
            Err(Error::UnknownFormat)
        ));
    }

    #[test]
    fn test_invalid_utf8() {
        let result = SvgParser::from_bytes(b"<svg>\xFF</svg>");
        assert!(matches!(result, Err(Error::Decode(_))));
    }

    #[test]
    fn test_invalid_number_strict() {
        let err = parse(r#"<svg><rect x="10px"/></svg>"#).unwrap_err();
        assert!(err.to_string().contains("10px"));
    }

    #[test]
    fn test_invalid_number_lenient() {
        let parser = SvgParser::from_string(
            r#"<svg><rect x="10px" y="3" width=""/></svg>"#,
            ParseOptions::new().lenient(),
        )
        .unwrap();
        let svg = parser.parse().unwrap();
        assert_eq!(svg.rects[0].x, 0.0);
        assert_eq!(svg.rects[0].y, 3.0);
        assert_eq!(svg.rects[0].width, 0.0);
    }

    #[test]
    fn test_non_finite_number_strict() {
        for value in ["NaN", "inf", "-infinity", "1e999"] {
            let svg = format!(r#"<svg><rect x="{}" width="10" height="10"/></svg>"#, value);
            let err = parse(&svg).unwrap_err();
            assert!(matches!(err, Error::Decode(_)), "{} accepted", value);
            assert!(err.to_string().contains(value));
        }
    }

    #[test]
    fn test_non_finite_number_lenient() {
        let parser = SvgParser::from_string(
            r#"<svg><rect x="NaN" y="1e999" width="10" height="10"/></svg>"#,
            ParseOptions::new().lenient(),
        )
        .unwrap();
        let svg = parser.parse().unwrap();
        assert_eq!(svg.rects[0].x, 0.0);
        assert_eq!(svg.rects[0].y, 0.0);
        assert_eq!(svg.rects[0].width, 10.0);
    }

    #[test]
    fn test_from_string_rejects_non_svg() {
        let result = SvgParser::from_string("hello", ParseOptions::default());
        assert!(matches!(result, Err(Error::UnknownFormat)));
    }

    #[test]
    fn test_long_comment_before_root() {
        let svg = format!(
            "<!-- {} -->\n<svg><rect width=\"10\" height=\"10\"/></svg>",
            "x".repeat(5000)
        );
        let svg = parse(&svg).unwrap();
        assert_eq!(svg.rects.len(), 1);
    }

    #[test]
    fn test_doctype_allowed() {
        let svg = parse(
            "<?xml version=\"1.0\"?>\n<!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 1.1//EN\" \"http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd\">\n<svg><rect/></svg>",
        )
        .unwrap();
        assert_eq!(svg.rects.len(), 1);
    }

    #[test]
    fn test_open_missing_file() {
        let err = SvgParser::open("/nonexistent/input.svg").err().unwrap();
        assert!(matches!(err, Error::SourceOpen { .. }));
    }
}
