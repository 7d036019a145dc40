//! SVG decoding module.

mod options;
mod svg_parser;

pub use options::{ErrorMode, ParseOptions};
pub use svg_parser::{SvgParser, SVG_NAMESPACE};
