//! Conversion pipeline: decoded SVG records in, PDF document out.
//!
//! # Example
//!
//! ```no_run
//! use svgpdf::convert::{ConvertOptions, SvgConverter};
//!
//! fn main() -> svgpdf::Result<()> {
//!     let converter = SvgConverter::new(ConvertOptions::new().with_font_size(14.0));
//!     let result = converter.convert_file("drawing.svg")?;
//!     println!("{} pages", result.document.page_count());
//!     result.save("drawing.pdf")
//! }
//! ```

mod options;
mod svg;

pub use options::{
    ConvertOptions, DEFAULT_COLUMNS, DEFAULT_FONT_NAME, DEFAULT_FONT_SIZE, DEFAULT_ROWS,
};
pub use svg::SvgConverter;

use std::path::Path;

use crate::error::Result;
use crate::model::{PdfDocument, SvgDocument};
use crate::render::ConversionReport;

/// Result of converting one SVG document.
#[derive(Debug, Clone)]
pub struct ConvertResult {
    /// The decoded SVG records
    pub svg: SvgDocument,

    /// The PDF document built from them
    pub document: PdfDocument,
}

impl ConvertResult {
    /// Summary of the conversion.
    pub fn report(&self) -> ConversionReport {
        ConversionReport::new(&self.svg, &self.document)
    }

    /// Finalize and serialize the document.
    pub fn to_bytes(mut self) -> Result<Vec<u8>> {
        self.document.finalize();
        self.document.to_bytes()
    }

    /// Finalize the document and write it to `path`.
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        self.document.save(path)
    }

    /// Async variant of [`save`](Self::save).
    #[cfg(feature = "async")]
    pub async fn save_async<P: AsRef<Path>>(self, path: P) -> Result<()> {
        self.document.save_async(path).await
    }
}
