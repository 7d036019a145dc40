//! Document model types.
//!
//! Two halves live here: the decoded SVG records that come out of the
//! parser, and the PDF document that the converter builds page by page
//! before it is serialized.

mod document;
mod page;
mod svg;

pub use document::{DocumentState, PdfDocument, PAGE_HEIGHT, PAGE_WIDTH};
pub use page::Page;
pub use svg::{GradientStop, LinearGradient, SvgDocument, SvgPath, SvgRect, SvgText};
