//! Mapping from SVG user space to PDF page space.
//!
//! SVG places the origin at the top-left corner with Y growing downwards,
//! PDF places it at the bottom-left with Y growing upwards. Every point is
//! scaled to the page first and then flipped vertically. All functions here
//! are pure.

use serde::{Deserialize, Serialize};

/// Width assumed when the SVG root declares none.
pub const DEFAULT_SVG_WIDTH: f64 = 400.0;

/// Height assumed when the SVG root declares none.
pub const DEFAULT_SVG_HEIGHT: f64 = 150.0;

/// A point in either coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal coordinate
    pub x: f64,
    /// Vertical coordinate
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Per-axis factors from SVG user units to PDF points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScaleFactors {
    /// Horizontal scale
    pub x: f64,
    /// Vertical scale
    pub y: f64,
}

impl ScaleFactors {
    /// Scale factors that stretch an SVG canvas over the whole page.
    pub fn fit(page_width: f64, page_height: f64, svg_width: f64, svg_height: f64) -> Self {
        Self {
            x: page_width / svg_width,
            y: page_height / svg_height,
        }
    }
}

impl Default for ScaleFactors {
    fn default() -> Self {
        Self { x: 1.0, y: 1.0 }
    }
}

/// Resolve the SVG canvas size from the root `width`/`height` attributes.
///
/// Each dimension falls back to its default independently when it is absent,
/// not a number, or not strictly positive.
pub fn resolve_svg_size(width: Option<&str>, height: Option<&str>) -> (f64, f64) {
    (
        parse_dimension(width).unwrap_or(DEFAULT_SVG_WIDTH),
        parse_dimension(height).unwrap_or(DEFAULT_SVG_HEIGHT),
    )
}

fn parse_dimension(value: Option<&str>) -> Option<f64> {
    let parsed = value?.trim().parse::<f64>().ok()?;
    (parsed.is_finite() && parsed > 0.0).then_some(parsed)
}

/// Scale an SVG point onto the page and flip it vertically.
pub fn svg_to_pdf(point: Point, scale: ScaleFactors, page_height: f64) -> Point {
    Point {
        x: point.x * scale.x,
        y: page_height - point.y * scale.y,
    }
}

/// A named transform applied after scaling and flipping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Transform {
    /// Leave the point untouched
    #[default]
    Identity,
    /// Fixed quarter turn: `(x, y) -> (y, page_width - x)`
    Rotate,
}

impl Transform {
    /// Look up a transform by name. Unknown names are the identity.
    pub fn from_name(name: &str) -> Self {
        match name {
            "rotate" => Transform::Rotate,
            _ => Transform::Identity,
        }
    }

    /// Apply the transform to an already scaled and flipped point.
    pub fn apply(self, point: Point, page_width: f64) -> Point {
        match self {
            Transform::Identity => point,
            Transform::Rotate => Point {
                x: point.y,
                y: page_width - point.x,
            },
        }
    }
}

/// Apply the transform called `name` to `point`.
pub fn apply_transformation(point: Point, name: &str, page_width: f64) -> Point {
    Transform::from_name(name).apply(point, page_width)
}
