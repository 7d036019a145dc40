//! Decoded SVG records.

use serde::{Deserialize, Serialize};

/// The supported subset of an SVG document, in source order per element kind.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SvgDocument {
    /// Raw `width` attribute of the root element
    pub width: Option<String>,

    /// Raw `height` attribute of the root element
    pub height: Option<String>,

    /// `rect` elements
    pub rects: Vec<SvgRect>,

    /// `text` elements
    pub texts: Vec<SvgText>,

    /// `path` elements (decoded, never rendered)
    pub paths: Vec<SvgPath>,

    /// `linearGradient` definitions
    pub gradients: Vec<LinearGradient>,
}

impl SvgDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of supported elements.
    pub fn element_count(&self) -> usize {
        self.rects.len() + self.texts.len() + self.paths.len() + self.gradients.len()
    }

    /// Check if the document has no supported elements.
    pub fn is_empty(&self) -> bool {
        self.element_count() == 0
    }
}

/// An SVG rectangle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SvgRect {
    /// Left edge
    pub x: f64,
    /// Top edge
    pub y: f64,
    /// Width in user units
    pub width: f64,
    /// Height in user units
    pub height: f64,
    /// Declared stroke color; not consulted when drawing
    pub stroke: Option<String>,
}

impl SvgRect {
    /// Create a rectangle without a stroke attribute.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            stroke: None,
        }
    }
}

/// An SVG text element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SvgText {
    /// Anchor X
    pub x: f64,
    /// Anchor Y (baseline)
    pub y: f64,
    /// Character data of the element
    pub content: String,
}

impl SvgText {
    /// Create a text element.
    pub fn new(x: f64, y: f64, content: impl Into<String>) -> Self {
        Self {
            x,
            y,
            content: content.into(),
        }
    }
}

/// An SVG path, kept as opaque path data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SvgPath {
    /// The `d` attribute
    pub d: String,
}

/// A linear gradient definition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LinearGradient {
    /// Gradient id
    pub id: String,
    /// Start X
    pub x1: f64,
    /// Start Y
    pub y1: f64,
    /// End X
    pub x2: f64,
    /// End Y
    pub y2: f64,
    /// Color stops in source order
    pub stops: Vec<GradientStop>,
}

impl LinearGradient {
    /// Color of the first stop, if any.
    pub fn first_color(&self) -> Option<&str> {
        self.stops.first().map(|stop| stop.color.as_str())
    }
}

/// A gradient color stop.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    /// Raw `offset` attribute
    pub offset: String,
    /// Raw `stop-color` attribute
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_svg_document_counts() {
        let mut svg = SvgDocument::new();
        assert!(svg.is_empty());

        svg.rects.push(SvgRect::new(0.0, 0.0, 10.0, 10.0));
        svg.texts.push(SvgText::new(1.0, 2.0, "Hi"));
        svg.paths.push(SvgPath { d: "M0 0".into() });
        assert_eq!(svg.element_count(), 3);
        assert!(!svg.is_empty());
    }

    #[test]
    fn test_gradient_first_color() {
        let mut gradient = LinearGradient::default();
        assert_eq!(gradient.first_color(), None);

        gradient.stops.push(GradientStop {
            offset: "0%".into(),
            color: "#ff0000".into(),
        });
        gradient.stops.push(GradientStop {
            offset: "100%".into(),
            color: "#0000ff".into(),
        });
        assert_eq!(gradient.first_color(), Some("#ff0000"));
    }
}
