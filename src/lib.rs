//! # svgpdf
//!
//! Convert a constrained subset of SVG into minimal, uncompressed PDF files.
//!
//! Supported input is `rect`, `text`, `path` and `linearGradient` elements
//! directly under the root `svg` element. Rectangles become stroked outlines,
//! text is set in the built-in Helvetica font, gradients are approximated by
//! a flat placeholder, and paths are accepted but not drawn.
//!
//! ## Quick Start
//!
//! ```no_run
//! use svgpdf::convert_file;
//!
//! fn main() -> svgpdf::Result<()> {
//!     let doc = convert_file("drawing.svg")?;
//!     println!("Pages: {}", doc.page_count());
//!     doc.save("drawing.pdf")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - **Decode**: [`parser::SvgParser`] turns markup into [`SvgDocument`] records
//! - **Transform**: [`geometry`] scales and flips SVG points into page space
//! - **Build**: [`content`] emits operators into the pages of a [`PdfDocument`],
//!   while [`layout`] keeps grid bookkeeping
//! - **Serialize**: [`render`] numbers objects and writes the file with an
//!   exact cross-reference table

pub mod content;
pub mod convert;
pub mod detect;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use convert::{ConvertOptions, ConvertResult, SvgConverter};
pub use detect::{detect_format_from_bytes, detect_format_from_path, is_svg, SvgFormat};
pub use error::{Error, Result, Stage};
pub use geometry::{Point, ScaleFactors, Transform};
pub use layout::{GridCell, LayoutCursor};
pub use model::{
    DocumentState, GradientStop, LinearGradient, Page, PdfDocument, SvgDocument, SvgPath,
    SvgRect, SvgText,
};
pub use parser::{ErrorMode, ParseOptions, SvgParser};
pub use render::{ConversionReport, JsonFormat};

use std::io::Read;
use std::path::Path;

/// Convert an SVG file into a PDF document.
///
/// # Arguments
///
/// * `path` - Path to the SVG file
///
/// # Example
///
/// ```no_run
/// use svgpdf::convert_file;
///
/// let doc = convert_file("drawing.svg").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<PdfDocument> {
    convert_file_with_options(path, &ConvertOptions::default())
}

/// Convert an SVG file with custom options.
///
/// # Example
///
/// ```no_run
/// use svgpdf::{convert_file_with_options, ConvertOptions};
///
/// let options = ConvertOptions::new().with_grid(3, 10).with_font_size(10.0);
/// let doc = convert_file_with_options("drawing.svg", &options).unwrap();
/// ```
pub fn convert_file_with_options<P: AsRef<Path>>(
    path: P,
    options: &ConvertOptions,
) -> Result<PdfDocument> {
    let result = SvgConverter::new(options.clone()).convert_file(path)?;
    Ok(result.document)
}

/// Convert SVG markup.
pub fn convert_str(svg: &str) -> Result<PdfDocument> {
    convert_bytes(svg.as_bytes())
}

/// Convert SVG bytes.
///
/// # Example
///
/// ```no_run
/// use svgpdf::convert_bytes;
///
/// let data = std::fs::read("drawing.svg").unwrap();
/// let doc = convert_bytes(&data).unwrap();
/// ```
pub fn convert_bytes(data: &[u8]) -> Result<PdfDocument> {
    convert_bytes_with_options(data, &ConvertOptions::default())
}

/// Convert SVG bytes with custom options.
pub fn convert_bytes_with_options(data: &[u8], options: &ConvertOptions) -> Result<PdfDocument> {
    let result = SvgConverter::new(options.clone()).convert_bytes(data)?;
    Ok(result.document)
}

/// Convert SVG from a reader.
///
/// # Example
///
/// ```no_run
/// use svgpdf::convert_reader;
/// use std::fs::File;
///
/// let file = File::open("drawing.svg").unwrap();
/// let doc = convert_reader(file).unwrap();
/// ```
pub fn convert_reader<R: Read>(reader: R) -> Result<PdfDocument> {
    convert_reader_with_options(reader, &ConvertOptions::default())
}

/// Convert SVG from a reader with custom options.
pub fn convert_reader_with_options<R: Read>(
    reader: R,
    options: &ConvertOptions,
) -> Result<PdfDocument> {
    let result = SvgConverter::new(options.clone()).convert_reader(reader)?;
    Ok(result.document)
}

/// Convert an SVG file and write the PDF in one step.
///
/// # Example
///
/// ```no_run
/// use svgpdf::{svg_file_to_pdf, ConvertOptions};
///
/// svg_file_to_pdf("drawing.svg", "drawing.pdf", &ConvertOptions::default()).unwrap();
/// ```
pub fn svg_file_to_pdf<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    options: &ConvertOptions,
) -> Result<ConversionReport> {
    let result = SvgConverter::new(options.clone()).convert_file(input)?;
    let report = result.report();
    result.save(output)?;
    Ok(report)
}

/// Convert an SVG file, reading it asynchronously.
#[cfg(feature = "async")]
pub async fn convert_file_async<P: AsRef<Path>>(
    path: P,
    options: &ConvertOptions,
) -> Result<PdfDocument> {
    let path = path.as_ref();
    let data = tokio::fs::read(path)
        .await
        .map_err(|source| Error::SourceOpen {
            path: path.to_path_buf(),
            source,
        })?;
    convert_bytes_with_options(&data, options)
}

/// Builder for converting SVG documents.
///
/// # Example
///
/// ```no_run
/// use svgpdf::SvgPdf;
///
/// SvgPdf::new()
///     .with_grid(3, 12)
///     .with_font("Helvetica", 11.0)
///     .lenient()
///     .convert("drawing.svg")?
///     .save("drawing.pdf")?;
/// # Ok::<(), svgpdf::Error>(())
/// ```
pub struct SvgPdf {
    options: ConvertOptions,
}

impl SvgPdf {
    /// Create a new builder with default options.
    pub fn new() -> Self {
        Self {
            options: ConvertOptions::default(),
        }
    }

    /// Set grid column and row counts.
    pub fn with_grid(mut self, columns: usize, rows: usize) -> Self {
        self.options = self.options.with_grid(columns, rows);
        self
    }

    /// Set font name and size.
    pub fn with_font(mut self, name: impl Into<String>, size: f64) -> Self {
        self.options = self.options.with_font_name(name).with_font_size(size);
        self
    }

    /// Set font size only.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.options = self.options.with_font_size(size);
        self
    }

    /// Enable lenient decoding.
    pub fn lenient(mut self) -> Self {
        self.options = self.options.lenient();
        self
    }

    /// Convert an SVG file.
    pub fn convert<P: AsRef<Path>>(self, path: P) -> Result<ConvertResult> {
        SvgConverter::new(self.options).convert_file(path)
    }

    /// Convert SVG markup.
    pub fn convert_str(self, svg: &str) -> Result<ConvertResult> {
        SvgConverter::new(self.options).convert_str(svg)
    }
}

impl Default for SvgPdf {
    fn default() -> Self {
        Self::new()
    }
}
