//! Document-level types.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{LinearGradient, Page, SvgPath, SvgRect, SvgText};
use crate::content;
use crate::convert::ConvertOptions;
use crate::error::{Error, Result};
use crate::geometry::{ScaleFactors, DEFAULT_SVG_HEIGHT, DEFAULT_SVG_WIDTH};
use crate::layout::{GridCell, LayoutCursor};
use crate::render;

/// A4 width in points (210mm at 72 DPI).
pub const PAGE_WIDTH: f64 = 595.0;

/// A4 height in points (297mm at 72 DPI).
pub const PAGE_HEIGHT: f64 = 842.0;

/// Build state of a [`PdfDocument`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentState {
    /// No pages yet
    Empty,
    /// At least one page; content may still be appended
    HasPages,
    /// Sealed for serialization; no further mutation
    Finalized,
}

/// A PDF document under construction.
///
/// Pages own their content streams. Elements are always appended to the last
/// page. Once [`finalize`](Self::finalize) is called the document only
/// supports serialization.
#[derive(Debug, Clone)]
pub struct PdfDocument {
    page_width: f64,
    page_height: f64,
    svg_size: (f64, f64),
    scale: ScaleFactors,
    layout: LayoutCursor,
    font_name: String,
    font_size: f64,
    pages: Vec<Page>,
    placements: Vec<GridCell>,
    finalized: bool,
}

impl PdfDocument {
    /// Create an empty A4 document.
    pub fn new(options: &ConvertOptions) -> Self {
        Self {
            page_width: PAGE_WIDTH,
            page_height: PAGE_HEIGHT,
            svg_size: (DEFAULT_SVG_WIDTH, DEFAULT_SVG_HEIGHT),
            scale: ScaleFactors::fit(PAGE_WIDTH, PAGE_HEIGHT, DEFAULT_SVG_WIDTH, DEFAULT_SVG_HEIGHT),
            layout: LayoutCursor::new(PAGE_WIDTH, options.columns, options.rows),
            font_name: options.font_name.clone(),
            font_size: options.font_size,
            pages: Vec::new(),
            placements: Vec::new(),
            finalized: false,
        }
    }

    /// Current build state.
    pub fn state(&self) -> DocumentState {
        if self.finalized {
            DocumentState::Finalized
        } else if self.pages.is_empty() {
            DocumentState::Empty
        } else {
            DocumentState::HasPages
        }
    }

    /// Page width in points.
    pub fn page_width(&self) -> f64 {
        self.page_width
    }

    /// Page height in points.
    pub fn page_height(&self) -> f64 {
        self.page_height
    }

    /// SVG canvas size the scale factors were computed from.
    pub fn svg_size(&self) -> (f64, f64) {
        self.svg_size
    }

    /// Current scale factors.
    pub fn scale(&self) -> ScaleFactors {
        self.scale
    }

    /// Configured font name (display only).
    pub fn font_name(&self) -> &str {
        &self.font_name
    }

    /// Configured font size in points.
    pub fn font_size(&self) -> f64 {
        self.font_size
    }

    /// Pages in order.
    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    /// Get the number of pages in the document.
    pub fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    /// Grid cells assigned to placed elements, in placement order.
    pub fn placements(&self) -> &[GridCell] {
        &self.placements
    }

    /// The layout cursor.
    pub fn layout(&self) -> &LayoutCursor {
        &self.layout
    }

    /// Recompute scale factors for an SVG canvas of the given size.
    pub fn set_svg_size(&mut self, width: f64, height: f64) -> Result<()> {
        self.ensure_mutable()?;
        self.svg_size = (width, height);
        self.scale = ScaleFactors::fit(self.page_width, self.page_height, width, height);
        log::debug!(
            "SVG canvas {}x{} -> scale ({:.4}, {:.4})",
            width,
            height,
            self.scale.x,
            self.scale.y
        );
        Ok(())
    }

    /// Start a new empty page and return its number.
    pub fn add_page(&mut self) -> Result<u32> {
        self.ensure_mutable()?;
        let number = self.page_count() + 1;
        self.pages.push(Page::new(number));
        Ok(number)
    }

    /// Append a stroked rectangle to the active page.
    pub fn add_rect(&mut self, rect: &SvgRect) -> Result<GridCell> {
        let ops = content::rect_ops(rect, self.scale, self.page_height);
        self.active_page()?.append(ops);
        Ok(self.place())
    }

    /// Append a text object to the active page.
    pub fn add_text(&mut self, text: &SvgText) -> Result<GridCell> {
        let anchor = content::text_anchor(
            text.x,
            text.y,
            self.scale,
            self.page_width,
            self.page_height,
        );
        let ops = content::text_ops(anchor, &text.content, self.font_size);
        self.active_page()?.append(ops);
        Ok(self.place())
    }

    /// Append the flat gradient placeholder to the active page.
    pub fn add_gradient(&mut self, gradient: &LinearGradient) -> Result<()> {
        let ops = content::gradient_ops(gradient);
        self.active_page()?.append(ops);
        Ok(())
    }

    /// Accept a path. Paths are never drawn.
    pub fn add_path(&mut self, path: &SvgPath) -> Result<()> {
        self.active_page()?;
        log::debug!("Skipping path ({} bytes of path data)", path.d.len());
        Ok(())
    }

    /// Seal the document for serialization.
    pub fn finalize(&mut self) {
        self.finalized = true;
    }

    /// Serialize the finalized document to PDF bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        if !self.finalized {
            return Err(Error::NotFinalized);
        }
        Ok(render::write_pdf(self))
    }

    /// Finalize, serialize, and write the document to `path`.
    ///
    /// The bytes go to a temporary sibling file that is then renamed over
    /// `path`, so an existing file is only replaced by a complete document.
    pub fn save<P: AsRef<Path>>(mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.finalize();
        let bytes = self.to_bytes()?;

        let tmp = temp_path(path);
        let write_err = |source| Error::DestinationWrite {
            path: path.to_path_buf(),
            source,
        };
        if let Err(e) = fs::write(&tmp, &bytes).and_then(|()| fs::rename(&tmp, path)) {
            let _ = fs::remove_file(&tmp);
            return Err(write_err(e));
        }

        log::info!("Successfully generated {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    /// Async variant of [`save`](Self::save).
    #[cfg(feature = "async")]
    pub async fn save_async<P: AsRef<Path>>(mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        self.finalize();
        let bytes = self.to_bytes()?;

        let tmp = temp_path(path);
        let write_err = |source| Error::DestinationWrite {
            path: path.to_path_buf(),
            source,
        };
        let written = match tokio::fs::write(&tmp, &bytes).await {
            Ok(()) => tokio::fs::rename(&tmp, path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            let _ = tokio::fs::remove_file(&tmp).await;
            return Err(write_err(e));
        }

        log::info!("Successfully generated {} ({} bytes)", path.display(), bytes.len());
        Ok(())
    }

    fn ensure_mutable(&self) -> Result<()> {
        if self.finalized {
            return Err(Error::Finalized);
        }
        Ok(())
    }

    fn active_page(&mut self) -> Result<&mut Page> {
        self.ensure_mutable()?;
        self.pages.last_mut().ok_or(Error::NoActivePage)
    }

    fn place(&mut self) -> GridCell {
        let cell = self.layout.advance_column();
        if self.layout.is_full() {
            log::warn!(
                "Element placed at row {} exceeds the {}-row grid",
                cell.row,
                self.layout.max_rows
            );
        }
        self.placements.push(cell);
        cell
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc() -> PdfDocument {
        PdfDocument::new(&ConvertOptions::default())
    }

    #[test]
    fn test_document_new() {
        let doc = doc();
        assert_eq!(doc.state(), DocumentState::Empty);
        assert_eq!(doc.page_count(), 0);
        assert_eq!(doc.page_width(), 595.0);
        assert_eq!(doc.page_height(), 842.0);
        assert_eq!(doc.scale().x, 595.0 / 400.0);
        assert_eq!(doc.scale().y, 842.0 / 150.0);
    }

    #[test]
    fn test_state_transitions() {
        let mut doc = doc();
        assert_eq!(doc.add_page().unwrap(), 1);
        assert_eq!(doc.state(), DocumentState::HasPages);
        assert_eq!(doc.add_page().unwrap(), 2);
        doc.finalize();
        assert_eq!(doc.state(), DocumentState::Finalized);
        doc.finalize();
        assert_eq!(doc.state(), DocumentState::Finalized);
    }

    #[test]
    fn test_append_without_page() {
        let mut doc = doc();
        let rect = SvgRect::new(0.0, 0.0, 1.0, 1.0);
        assert!(matches!(doc.add_rect(&rect), Err(Error::NoActivePage)));
        assert!(matches!(
            doc.add_text(&SvgText::new(0.0, 0.0, "x")),
            Err(Error::NoActivePage)
        ));
        assert!(matches!(
            doc.add_gradient(&LinearGradient::default()),
            Err(Error::NoActivePage)
        ));
        assert!(matches!(
            doc.add_path(&SvgPath::default()),
            Err(Error::NoActivePage)
        ));
        assert!(doc.placements().is_empty());
    }

    #[test]
    fn test_mutation_after_finalize() {
        let mut doc = doc();
        doc.add_page().unwrap();
        doc.finalize();
        assert!(matches!(doc.add_page(), Err(Error::Finalized)));
        assert!(matches!(
            doc.add_rect(&SvgRect::new(0.0, 0.0, 1.0, 1.0)),
            Err(Error::Finalized)
        ));
        assert!(matches!(doc.set_svg_size(10.0, 10.0), Err(Error::Finalized)));
    }

    #[test]
    fn test_to_bytes_requires_finalize() {
        let mut doc = doc();
        doc.add_page().unwrap();
        assert!(matches!(doc.to_bytes(), Err(Error::NotFinalized)));
        doc.finalize();
        assert!(doc.to_bytes().unwrap().starts_with(b"%PDF-1.4\n"));
    }

    #[test]
    fn test_content_goes_to_last_page() {
        let mut doc = doc();
        doc.add_page().unwrap();
        doc.add_page().unwrap();
        doc.add_rect(&SvgRect::new(0.0, 0.0, 10.0, 10.0)).unwrap();

        assert!(doc.pages()[0].is_empty());
        assert_eq!(doc.pages()[1].lines.len(), 7);
    }

    #[test]
    fn test_layout_does_not_move_drawing() {
        let mut doc = doc();
        doc.add_page().unwrap();
        let rect = SvgRect::new(5.0, 5.0, 10.0, 10.0);
        doc.add_rect(&rect).unwrap();
        doc.add_rect(&rect).unwrap();

        let lines = &doc.pages()[0].lines;
        assert_eq!(lines[0..7], lines[7..14]);
        assert_eq!(doc.placements().len(), 2);
        assert_ne!(doc.placements()[0], doc.placements()[1]);
    }

    #[test]
    fn test_path_emits_nothing() {
        let mut doc = doc();
        doc.add_page().unwrap();
        doc.add_path(&SvgPath { d: "M0 0 L10 10".into() }).unwrap();
        assert!(doc.pages()[0].is_empty());
        assert!(doc.placements().is_empty());
    }

    #[test]
    fn test_temp_path() {
        assert_eq!(
            temp_path(Path::new("/out/doc.pdf")),
            PathBuf::from("/out/doc.pdf.tmp")
        );
    }
}
