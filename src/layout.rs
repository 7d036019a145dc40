//! Grid bookkeeping for placed elements.
//!
//! The cursor walks a grid of fixed-size cells as elements are placed. It is
//! bookkeeping only: drawing coordinates always come from
//! [`crate::geometry`], never from the cursor.

use serde::{Deserialize, Serialize};

/// Default width of a grid column in points.
pub const DEFAULT_COLUMN_WIDTH: f64 = 150.0;

/// Default height of a grid row in points.
pub const DEFAULT_ROW_HEIGHT: f64 = 50.0;

/// A grid cell, zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridCell {
    /// Row index
    pub row: usize,
    /// Column index
    pub column: usize,
}

/// Layout cursor over a page-wide grid.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCursor {
    /// Current X position in points
    pub x: f64,
    /// Current Y position in points, growing with each row
    pub y: f64,
    /// Column width in points
    pub column_width: f64,
    /// Row height in points
    pub row_height: f64,
    /// Width available before wrapping
    pub page_width: f64,
    /// Configured number of columns
    pub max_columns: usize,
    /// Configured number of rows (0 = unbounded)
    pub max_rows: usize,
}

impl LayoutCursor {
    /// Create a cursor at the origin with default cell size.
    pub fn new(page_width: f64, max_columns: usize, max_rows: usize) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            column_width: DEFAULT_COLUMN_WIDTH,
            row_height: DEFAULT_ROW_HEIGHT,
            page_width,
            max_columns,
            max_rows,
        }
    }

    /// Set the cell size.
    pub fn with_cell_size(mut self, column_width: f64, row_height: f64) -> Self {
        self.column_width = column_width;
        self.row_height = row_height;
        self
    }

    /// Move to the start of the next row.
    pub fn add_row(&mut self) {
        self.y += self.row_height;
        self.x = 0.0;
    }

    /// Move one column to the right, wrapping when the next column would not
    /// fit on the page. Returns the cell the cursor now points at.
    pub fn advance_column(&mut self) -> GridCell {
        self.x += self.column_width;
        if self.x + self.column_width > self.page_width {
            self.add_row();
        }
        self.cell()
    }

    /// The cell under the cursor.
    pub fn cell(&self) -> GridCell {
        GridCell {
            row: (self.y / self.row_height).round() as usize,
            column: (self.x / self.column_width).round() as usize,
        }
    }

    /// Whether the cursor has moved past the configured row count.
    pub fn is_full(&self) -> bool {
        self.max_rows > 0 && self.cell().row >= self.max_rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_column() {
        let mut cursor = LayoutCursor::new(595.0, 4, 16);
        assert_eq!(cursor.advance_column(), GridCell { row: 0, column: 1 });
        assert_eq!(cursor.advance_column(), GridCell { row: 0, column: 2 });
        assert_eq!(cursor.x, 300.0);
    }

    #[test]
    fn test_wraps_to_next_row() {
        let mut cursor = LayoutCursor::new(595.0, 4, 16);
        cursor.advance_column();
        cursor.advance_column();
        // 450 + 150 > 595
        let cell = cursor.advance_column();
        assert_eq!(cell, GridCell { row: 1, column: 0 });
        assert_eq!(cursor.x, 0.0);
        assert_eq!(cursor.y, DEFAULT_ROW_HEIGHT);
    }

    #[test]
    fn test_add_row_resets_x() {
        let mut cursor = LayoutCursor::new(595.0, 4, 16);
        cursor.advance_column();
        cursor.add_row();
        assert_eq!(cursor.cell(), GridCell { row: 1, column: 0 });
    }

    #[test]
    fn test_is_full() {
        let mut cursor = LayoutCursor::new(595.0, 4, 1);
        assert!(!cursor.is_full());
        cursor.add_row();
        assert!(cursor.is_full());

        let mut unbounded = LayoutCursor::new(595.0, 4, 0);
        for _ in 0..100 {
            unbounded.advance_column();
        }
        assert!(!unbounded.is_full());
    }

    #[test]
    fn test_custom_cell_size() {
        let mut cursor = LayoutCursor::new(100.0, 2, 2).with_cell_size(40.0, 10.0);
        assert_eq!(cursor.advance_column(), GridCell { row: 0, column: 1 });
        // 80 + 40 > 100
        assert_eq!(cursor.advance_column(), GridCell { row: 1, column: 0 });
    }
}
