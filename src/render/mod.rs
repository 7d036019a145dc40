//! PDF rendering: object numbering, serialization, and conversion reports.

mod objects;
mod report;
mod writer;

pub use objects::{ObjectId, ObjectKind, ObjectTable};
pub use report::{to_json, ConversionReport, JsonFormat};
pub use writer::{write_pdf, BINARY_MARKER, FREE_ENTRY, PDF_HEADER};
