//! Conversion options.

use crate::parser::{ErrorMode, ParseOptions};

/// Default number of grid columns.
pub const DEFAULT_COLUMNS: usize = 4;

/// Default number of grid rows.
pub const DEFAULT_ROWS: usize = 16;

/// Default display font name.
pub const DEFAULT_FONT_NAME: &str = "Helvetica";

/// Default font size in points.
pub const DEFAULT_FONT_SIZE: f64 = 12.0;

/// Options for converting an SVG document to PDF.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Grid column count
    pub columns: usize,

    /// Grid row count
    pub rows: usize,

    /// Font name (display only; text is always set in the built-in font)
    pub font_name: String,

    /// Font size in points
    pub font_size: f64,

    /// Decoding options
    pub parse: ParseOptions,
}

impl ConvertOptions {
    /// Create new conversion options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set grid dimensions.
    pub fn with_grid(mut self, columns: usize, rows: usize) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    /// Set the font name.
    pub fn with_font_name(mut self, name: impl Into<String>) -> Self {
        self.font_name = name.into();
        self
    }

    /// Set the font size in points.
    pub fn with_font_size(mut self, size: f64) -> Self {
        self.font_size = size;
        self
    }

    /// Set decoding options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse = options;
        self
    }

    /// Enable lenient decoding.
    pub fn lenient(mut self) -> Self {
        self.parse = self.parse.with_error_mode(ErrorMode::Lenient);
        self
    }
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            columns: DEFAULT_COLUMNS,
            rows: DEFAULT_ROWS,
            font_name: DEFAULT_FONT_NAME.to_string(),
            font_size: DEFAULT_FONT_SIZE,
            parse: ParseOptions::default(),
        }
    }
}
