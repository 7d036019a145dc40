//! Content stream operator emission.
//!
//! Each function turns one decoded SVG primitive into the PDF operator lines
//! that draw it. Lines are later joined with `\n` into the page's stream.

use crate::geometry::{apply_transformation, svg_to_pdf, Point, ScaleFactors};
use crate::model::{LinearGradient, SvgRect};

/// Resource name of the single built-in font.
pub const FONT_RESOURCE: &str = "F1";

/// Base font every text object is shown with.
pub const BASE_FONT: &str = "Helvetica";

/// Placeholder rectangle drawn for a gradient: x, y, width, height.
const GRADIENT_PLACEHOLDER: (f64, f64, f64, f64) = (100.0, 100.0, 200.0, 50.0);

/// Format a number the way every operator operand is written.
pub(crate) fn num(value: f64) -> String {
    format!("{:.2}", value)
}

/// Escape `\`, `(` and `)` for a PDF literal string.
pub fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Stroked outline of a rectangle.
///
/// Always stroked in black; the rectangle's `stroke` attribute is ignored.
pub fn rect_ops(rect: &SvgRect, scale: ScaleFactors, page_height: f64) -> Vec<String> {
    let Point { x, y } = svg_to_pdf(Point::new(rect.x, rect.y), scale, page_height);
    let w = rect.width * scale.x;
    let h = rect.height * scale.y;

    vec![
        format!("{} {} m", num(x), num(y)),
        format!("{} {} l", num(x + w), num(y)),
        format!("{} {} l", num(x + w), num(y - h)),
        format!("{} {} l", num(x), num(y - h)),
        "h".to_string(),
        "0 0 0 RG".to_string(),
        "S".to_string(),
    ]
}

/// Place an SVG text anchor on the page: scale, flip, then rotate.
pub fn text_anchor(x: f64, y: f64, scale: ScaleFactors, page_width: f64, page_height: f64) -> Point {
    let flipped = svg_to_pdf(Point::new(x, y), scale, page_height);
    apply_transformation(flipped, "rotate", page_width)
}

/// Text object showing `text` at an already transformed anchor.
pub fn text_ops(anchor: Point, text: &str, font_size: f64) -> Vec<String> {
    vec![
        "BT".to_string(),
        format!("/{} {} Tf", FONT_RESOURCE, num(font_size)),
        format!("{} {} Td", num(anchor.x), num(anchor.y)),
        format!("({}) Tj", escape_text(text)),
        "ET".to_string(),
    ]
}

/// Flat placeholder for a gradient.
///
/// Offsets and stops are not rendered; a fixed rectangle is stroked in blue
/// to mark that a gradient was present.
pub fn gradient_ops(gradient: &LinearGradient) -> Vec<String> {
    if gradient.stops.is_empty() {
        log::warn!("Gradient '{}' has no stops", gradient.id);
    }
    let (x, y, w, h) = GRADIENT_PLACEHOLDER;
    vec![
        format!("{} {} {} {} re", num(x), num(y), num(w), num(h)),
        "0 0 1 RG".to_string(),
        "S".to_string(),
    ]
}
