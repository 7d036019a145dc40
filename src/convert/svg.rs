//! SVG to PDF converter implementation.

use std::io::Read;
use std::path::Path;

use crate::error::Result;
use crate::geometry::resolve_svg_size;
use crate::model::{PdfDocument, SvgDocument};
use crate::parser::SvgParser;

use super::{ConvertOptions, ConvertResult};

/// SVG to PDF converter.
///
/// Builds a single-page document: gradients first, then rectangles, then
/// text, each group in source order. Paths are accepted and skipped.
#[derive(Debug, Clone, Default)]
pub struct SvgConverter {
    options: ConvertOptions,
}

impl SvgConverter {
    /// Create a new converter.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    /// The options this converter was created with.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Build a PDF document from decoded SVG records.
    pub fn convert(&self, svg: &SvgDocument) -> Result<PdfDocument> {
        let mut doc = PdfDocument::new(&self.options);

        let (width, height) = resolve_svg_size(svg.width.as_deref(), svg.height.as_deref());
        doc.set_svg_size(width, height)?;
        doc.add_page()?;

        for gradient in &svg.gradients {
            doc.add_gradient(gradient)?;
        }
        for rect in &svg.rects {
            doc.add_rect(rect)?;
        }
        for text in &svg.texts {
            doc.add_text(text)?;
        }
        for path in &svg.paths {
            doc.add_path(path)?;
        }

        log::debug!(
            "Converted {} elements onto {} page(s) using font {} at {}pt",
            svg.element_count(),
            doc.page_count(),
            self.options.font_name,
            self.options.font_size
        );

        Ok(doc)
    }

    fn convert_parser(&self, parser: SvgParser) -> Result<ConvertResult> {
        let svg = parser.parse()?;
        let document = self.convert(&svg)?;
        Ok(ConvertResult { svg, document })
    }

    /// Convert an SVG file.
    pub fn convert_file<P: AsRef<Path>>(&self, path: P) -> Result<ConvertResult> {
        let parser = SvgParser::open_with_options(path, self.options.parse.clone())?;
        self.convert_parser(parser)
    }

    /// Convert SVG bytes.
    pub fn convert_bytes(&self, data: &[u8]) -> Result<ConvertResult> {
        let parser = SvgParser::from_bytes_with_options(data, self.options.parse.clone())?;
        self.convert_parser(parser)
    }

    /// Convert SVG markup.
    pub fn convert_str(&self, svg: &str) -> Result<ConvertResult> {
        self.convert_bytes(svg.as_bytes())
    }

    /// Convert SVG read from `reader`.
    pub fn convert_reader<R: Read>(&self, reader: R) -> Result<ConvertResult> {
        let parser = SvgParser::from_reader_with_options(reader, self.options.parse.clone())?;
        self.convert_parser(parser)
    }
}
