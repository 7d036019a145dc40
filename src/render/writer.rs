//! PDF serializer.
//!
//! Writes the object table line by line into a byte buffer. The buffer
//! length is the running byte offset, so every cross-reference entry is the
//! exact position at which its `N 0 obj` line starts.

use super::objects::{ObjectId, ObjectKind, ObjectTable};
use crate::content::{num, BASE_FONT, FONT_RESOURCE};
use crate::model::PdfDocument;

/// Header version line.
pub const PDF_HEADER: &str = "%PDF-1.4";

/// Binary marker comment telling transports the file is not plain text.
pub const BINARY_MARKER: &[u8] = b"%\xE2\xE3\xCF\xD3";

/// Cross-reference entry of the free-list head.
pub const FREE_ENTRY: &str = "0000000000 65535 f ";

/// Line-oriented byte writer with offset bookkeeping.
struct PdfWriter {
    buf: Vec<u8>,
    offsets: Vec<usize>,
}

impl PdfWriter {
    fn new() -> Self {
        Self {
            buf: Vec::new(),
            offsets: Vec::new(),
        }
    }

    fn position(&self) -> usize {
        self.buf.len()
    }

    fn raw_line(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
        self.buf.push(b'\n');
    }

    fn line(&mut self, line: impl AsRef<str>) {
        self.raw_line(line.as_ref().as_bytes());
    }

    fn begin_object(&mut self, id: ObjectId) {
        debug_assert_eq!(self.offsets.len() + 1, id as usize);
        self.offsets.push(self.position());
        self.line(format!("{} 0 obj", id));
    }

    fn end_object(&mut self) {
        self.line("endobj");
    }

    fn finish(mut self) -> Vec<u8> {
        if self.buf.last() == Some(&b'\n') {
            self.buf.pop();
        }
        self.buf
    }
}

/// Serialize a document to PDF bytes.
///
/// Callers are expected to have finalized `doc`; see
/// [`PdfDocument::to_bytes`].
pub fn write_pdf(doc: &PdfDocument) -> Vec<u8> {
    let pages = doc.pages();
    let table = ObjectTable::for_pages(pages.len());
    let mut w = PdfWriter::new();

    w.line(PDF_HEADER);
    w.raw_line(BINARY_MARKER);

    for (id, kind) in table.iter() {
        w.begin_object(id);
        match kind {
            ObjectKind::Catalog => {
                w.line("<<");
                w.line("/Type /Catalog");
                w.line(format!("/Pages {} 0 R", table.number(ObjectKind::PageTree)));
                w.line(format!("/Outlines {} 0 R", table.number(ObjectKind::Outlines)));
                w.line(">>");
            }
            ObjectKind::PageTree => {
                w.line("<<");
                w.line("/Type /Pages");
                w.line(format!("/Count {}", pages.len()));
                w.line("/Kids [");
                for number in table.page_numbers() {
                    w.line(format!("{} 0 R", number));
                }
                w.line("]");
                w.line(">>");
            }
            ObjectKind::Font => {
                w.line("<<");
                w.line("/Type /Font");
                w.line("/Subtype /Type1");
                w.line(format!("/BaseFont /{}", BASE_FONT));
                w.line(format!("/Name /{}", FONT_RESOURCE));
                w.line(">>");
            }
            ObjectKind::Page(index) => {
                w.line("<<");
                w.line("/Type /Page");
                w.line(format!("/Parent {} 0 R", table.number(ObjectKind::PageTree)));
                w.line(format!(
                    "/MediaBox [0 0 {} {}]",
                    num(doc.page_width()),
                    num(doc.page_height())
                ));
                w.line("/Resources <<");
                w.line("/Font <<");
                w.line(format!(
                    "/{} {} 0 R",
                    FONT_RESOURCE,
                    table.number(ObjectKind::Font)
                ));
                w.line(">>");
                w.line(format!("/ProcSet {} 0 R", table.number(ObjectKind::ProcSet)));
                w.line(">>");
                w.line(format!(
                    "/Contents {} 0 R",
                    table.number(ObjectKind::Contents(index))
                ));
                w.line(">>");
            }
            ObjectKind::Contents(index) => {
                let page = &pages[index];
                w.line("<<");
                w.line(format!("/Length {}", page.content_len()));
                w.line(">>");
                w.line("stream");
                w.line(page.content());
                w.line("endstream");
            }
            ObjectKind::Outlines => {
                w.line("<<");
                w.line("/Type /Outlines");
                w.line("/Count 0");
                w.line(">>");
            }
            ObjectKind::ProcSet => {
                w.line("[/PDF /Text]");
            }
        }
        w.end_object();
    }

    let xref_offset = w.position();
    w.line("xref");
    w.line(format!("0 {}", table.xref_size()));
    w.line(FREE_ENTRY);
    let entries: Vec<String> = w
        .offsets
        .iter()
        .map(|offset| format!("{:010} 00000 n ", offset))
        .collect();
    for entry in entries {
        w.line(entry);
    }

    w.line("trailer");
    w.line("<<");
    w.line(format!("/Size {}", table.xref_size()));
    w.line(format!("/Root {} 0 R", table.number(ObjectKind::Catalog)));
    w.line(">>");
    w.line("startxref");
    w.line(xref_offset.to_string());
    w.line("%%EOF");

    let bytes = w.finish();
    log::debug!(
        "Serialized {} pages into {} objects, {} bytes",
        pages.len(),
        table.len(),
        bytes.len()
    );
    bytes
}
