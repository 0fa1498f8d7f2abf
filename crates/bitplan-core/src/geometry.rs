//! Grid constants and pixel geometry for packet diagrams.
//!
//! # Overview
//!
//! - [`Grid`] - The cell dimensions and row width used to map bits to pixels
//! - [`Rect`] - An axis-aligned rectangle in pixel space
//!
//! # Coordinate System
//!
//! The coordinate system matches draw.io:
//!
//! ```text
//!   (0,0) ────────► +X   (bit offset within the row)
//!     │
//!     │
//!     ▼
//!    +Y                  (row index)
//! ```
//!
//! All values are unsigned integers. Pixels are `u64` so that any `u32`
//! bit offset multiplied by any `u32` cell size stays representable.

use std::num::NonZeroU32;

/// Pixel width of a single bit.
pub const CELL_WIDTH: u32 = 20;

/// Pixel height of a single row.
pub const CELL_HEIGHT: u32 = 40;

/// Number of bits in one diagram row.
pub const ROW_WIDTH_BITS: NonZeroU32 = NonZeroU32::new(32).expect("32 is non-zero");

/// Dimensions used to map bit positions onto a two-dimensional grid.
///
/// # Examples
///
/// ```
/// use bitplan_core::geometry::Grid;
///
/// let grid = Grid::default();
/// assert_eq!(grid.cell_width(), 20);
/// assert_eq!(grid.cell_height(), 40);
/// assert_eq!(grid.row_width(), 32);
///
/// let wide = grid.with_cell_width(10);
/// assert_eq!(wide.cell_width(), 10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cell_width: u32,
    cell_height: u32,
    row_width: NonZeroU32,
}

impl Grid {
    /// Creates a new grid with the given cell size and row width.
    pub fn new(cell_width: u32, cell_height: u32, row_width: NonZeroU32) -> Self {
        Self {
            cell_width,
            cell_height,
            row_width,
        }
    }

    /// Returns the pixel width of one bit.
    pub fn cell_width(self) -> u32 {
        self.cell_width
    }

    /// Returns the pixel height of one row.
    pub fn cell_height(self) -> u32 {
        self.cell_height
    }

    /// Returns the number of bits per row.
    pub fn row_width(self) -> u32 {
        self.row_width.get()
    }

    /// Creates a new grid with the specified cell width.
    pub fn with_cell_width(mut self, cell_width: u32) -> Self {
        self.cell_width = cell_width;
        self
    }

    /// Creates a new grid with the specified cell height.
    pub fn with_cell_height(mut self, cell_height: u32) -> Self {
        self.cell_height = cell_height;
        self
    }

    /// Creates a new grid with the specified row width.
    pub fn with_row_width(mut self, row_width: NonZeroU32) -> Self {
        self.row_width = row_width;
        self
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(CELL_WIDTH, CELL_HEIGHT, ROW_WIDTH_BITS)
    }
}

/// An axis-aligned rectangle positioned by its top-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Rect {
    x: u64,
    y: u64,
    width: u64,
    height: u64,
}

impl Rect {
    /// Creates a new rectangle.
    pub fn new(x: u64, y: u64, width: u64, height: u64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the left edge.
    pub fn x(self) -> u64 {
        self.x
    }

    /// Returns the top edge.
    pub fn y(self) -> u64 {
        self.y
    }

    /// Returns the width.
    pub fn width(self) -> u64 {
        self.width
    }

    /// Returns the height.
    pub fn height(self) -> u64 {
        self.height
    }
}
