//! Conversion report with element counts and serialization statistics.

use serde::{Deserialize, Serialize};

use super::objects::ObjectTable;
use crate::error::{Error, Result};
use crate::model::{PdfDocument, SvgDocument};

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    #[default]
    Pretty,
    /// Compact JSON without extra whitespace
    Compact,
}

/// Summary of one SVG to PDF conversion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Number of pages in the PDF
    pub page_count: u32,

    /// Rectangles drawn
    pub rect_count: usize,

    /// Text objects drawn
    pub text_count: usize,

    /// Gradients approximated with a placeholder
    pub gradient_count: usize,

    /// Paths accepted but not drawn
    pub skipped_path_count: usize,

    /// SVG canvas width used for scaling
    pub svg_width: f64,

    /// SVG canvas height used for scaling
    pub svg_height: f64,

    /// Horizontal scale factor
    pub scale_x: f64,

    /// Vertical scale factor
    pub scale_y: f64,

    /// Number of PDF objects
    pub object_count: usize,

    /// Cross-reference entries, including the free-list head
    pub xref_entries: usize,

    /// Grid cells assigned to placed elements
    pub grid_cells_used: usize,

    /// Configured display font name
    pub font_name: String,

    /// Configured font size
    pub font_size: f64,
}

impl ConversionReport {
    /// Build a report for `doc`, converted from `svg`.
    pub fn new(svg: &SvgDocument, doc: &PdfDocument) -> Self {
        let table = ObjectTable::for_pages(doc.pages().len());
        let (svg_width, svg_height) = doc.svg_size();
        let scale = doc.scale();

        Self {
            page_count: doc.page_count(),
            rect_count: svg.rects.len(),
            text_count: svg.texts.len(),
            gradient_count: svg.gradients.len(),
            skipped_path_count: svg.paths.len(),
            svg_width,
            svg_height,
            scale_x: scale.x,
            scale_y: scale.y,
            object_count: table.len(),
            xref_entries: table.xref_size(),
            grid_cells_used: doc.placements().len(),
            font_name: doc.font_name().to_string(),
            font_size: doc.font_size(),
        }
    }

    /// Total number of drawn elements.
    pub fn drawn_count(&self) -> usize {
        self.rect_count + self.text_count + self.gradient_count
    }
}

/// Convert a report to JSON.
pub fn to_json(report: &ConversionReport, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(report),
        JsonFormat::Compact => serde_json::to_string(report),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::ConvertOptions;
    use crate::model::{SvgPath, SvgRect, SvgText};

    fn sample() -> ConversionReport {
        let mut svg = SvgDocument::new();
        svg.rects.push(SvgRect::new(0.0, 0.0, 10.0, 10.0));
        svg.texts.push(SvgText::new(1.0, 1.0, "a"));
        svg.paths.push(SvgPath { d: "M0 0".into() });

        let mut doc = PdfDocument::new(&ConvertOptions::default());
        doc.add_page().unwrap();
        doc.add_rect(&svg.rects[0]).unwrap();
        doc.add_text(&svg.texts[0]).unwrap();

        ConversionReport::new(&svg, &doc)
    }

    #[test]
    fn test_report_counts() {
        let report = sample();
        assert_eq!(report.page_count, 1);
        assert_eq!(report.rect_count, 1);
        assert_eq!(report.text_count, 1);
        assert_eq!(report.skipped_path_count, 1);
        assert_eq!(report.drawn_count(), 2);
        assert_eq!(report.object_count, 7);
        assert_eq!(report.xref_entries, 8);
        assert_eq!(report.grid_cells_used, 2);
        assert_eq!(report.svg_width, 400.0);
    }

    #[test]
    fn test_to_json_pretty() {
        let json = to_json(&sample(), JsonFormat::Pretty).unwrap();
        assert!(json.contains("\"xref_entries\": 8"));
        assert!(json.contains('\n'));
    }

    #[test]
    fn test_to_json_compact() {
        let json = to_json(&sample(), JsonFormat::Compact).unwrap();
        assert!(!json.contains('\n'));

        let parsed: ConversionReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }
}
