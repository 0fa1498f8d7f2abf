//! Layout engine mapping bit ranges onto pixel geometry.
//!
//! Bits are placed on a grid of fixed-width rows (32 bits by default). Each
//! [`BitRange`] becomes exactly one [`LayoutBlock`], in input order:
//!
//! ```text
//! x      = (start mod row_width) * cell_width
//! y      = (start div row_width) * cell_height
//! width  = (end - start + 1) * cell_width
//! height = cell_height
//! ```
//!
//! A range whose end lies in a later row than its start is not split; it is
//! drawn from its start row and extends past the right edge of that row.

use log::debug;

use bitplan_core::{
    geometry::{Grid, Rect},
    semantic::BitRange,
};

/// The pixel rectangle computed for one bit range.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LayoutBlock {
    label: String,
    rect: Rect,
}

impl LayoutBlock {
    /// Creates a new layout block.
    pub fn new(label: impl Into<String>, rect: Rect) -> Self {
        Self {
            label: label.into(),
            rect,
        }
    }

    /// Returns the field label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the block geometry.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn x(&self) -> u64 {
        self.rect.x()
    }

    pub fn y(&self) -> u64 {
        self.rect.y()
    }

    pub fn width(&self) -> u64 {
        self.rect.width()
    }

    pub fn height(&self) -> u64 {
        self.rect.height()
    }
}

/// Places bit ranges on a [`Grid`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutEngine {
    grid: Grid,
}

impl LayoutEngine {
    /// Creates a layout engine for the given grid.
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    /// Returns the grid used by this engine.
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Lays out every range, preserving order.
    pub fn layout(&self, ranges: &[BitRange]) -> Vec<LayoutBlock> {
        let blocks: Vec<_> = ranges.iter().map(|range| self.place(range)).collect();
        debug!(blocks_count = blocks.len(); "Layout calculated");
        blocks
    }

    /// Computes the block for a single range.
    pub fn place(&self, range: &BitRange) -> LayoutBlock {
        let row_width = self.grid.row_width();
        let cell_width = u64::from(self.grid.cell_width());
        let cell_height = u64::from(self.grid.cell_height());

        if range.spans_rows(row_width) {
            debug!(
                start = range.start(),
                end = range.end(),
                row_width = row_width;
                "Bit range crosses a row boundary, drawing it on its start row"
            );
        }

        let row = u64::from(range.start() / row_width);
        let start_in_row = u64::from(range.start() % row_width);

        LayoutBlock::new(
            range.label(),
            Rect::new(
                start_in_row * cell_width,
                row * cell_height,
                range.bit_length() * cell_width,
                cell_height,
            ),
        )
    }
}

/// Lays out ranges on the default 32-bit grid with 20x40 pixel cells.
pub fn layout(ranges: &[BitRange]) -> Vec<LayoutBlock> {
    LayoutEngine::default().layout(ranges)
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use proptest::prelude::*;

    use super::*;

    fn range(start: u32, end: u32, label: &str) -> BitRange {
        BitRange::new(start, end, label).unwrap()
    }

    fn geometry(block: &LayoutBlock) -> (u64, u64, u64, u64) {
        (block.x(), block.y(), block.width(), block.height())
    }

    #[test]
    fn test_first_row() {
        let blocks = layout(&[range(0, 15, "A")]);

        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].label(), "A");
        assert_eq!(geometry(&blocks[0]), (0, 0, 320, 40));
    }

    #[test]
    fn test_second_row() {
        let blocks = layout(&[range(32, 47, "B")]);

        assert_eq!(geometry(&blocks[0]), (0, 40, 320, 40));
    }

    #[test]
    fn test_source_and_dest_port() {
        let blocks = layout(&[range(0, 7, "Source Port"), range(8, 15, "Dest Port")]);

        assert_eq!(
            blocks,
            vec![
                LayoutBlock::new("Source Port", Rect::new(0, 0, 160, 40)),
                LayoutBlock::new("Dest Port", Rect::new(160, 0, 160, 40)),
            ]
        );
    }

    #[test]
    fn test_single_bit_mid_row() {
        let blocks = layout(&[range(70, 70, "Flag")]);

        // row 2, bit 6 of that row
        assert_eq!(geometry(&blocks[0]), (120, 80, 20, 40));
    }

    #[test]
    fn test_row_spanning_range_is_not_split() {
        let blocks = layout(&[range(24, 39, "Wrapped")]);

        assert_eq!(blocks.len(), 1);
        assert_eq!(geometry(&blocks[0]), (480, 0, 320, 40));
        assert!(blocks[0].rect().x() + blocks[0].rect().width() > 32 * 20);
    }

    #[test]
    fn test_empty_input() {
        assert!(layout(&[]).is_empty());
    }

    #[test]
    fn test_largest_offsets_do_not_overflow() {
        let blocks = layout(&[range(0, u32::MAX, "All"), range(u32::MAX, u32::MAX, "Last")]);

        assert_eq!(blocks[0].width(), (u64::from(u32::MAX) + 1) * 20);
        assert_eq!(blocks[1].x(), 31 * 20);
        assert_eq!(blocks[1].y(), u64::from(u32::MAX / 32) * 40);
    }

    #[test]
    fn test_custom_grid() {
        let grid = Grid::default()
            .with_cell_width(10)
            .with_cell_height(25)
            .with_row_width(NonZeroU32::new(8).unwrap());
        let engine = LayoutEngine::new(grid);

        let blocks = engine.layout(&[range(0, 3, "Low"), range(12, 15, "High")]);

        assert_eq!(engine.grid(), grid);
        assert_eq!(geometry(&blocks[0]), (0, 0, 40, 25));
        assert_eq!(geometry(&blocks[1]), (40, 25, 40, 25));
    }

    proptest! {
        #[test]
        fn prop_geometry_formula(start in 0u32..100_000, len in 0u32..256) {
            let end = start + len;
            let block = LayoutEngine::default().place(&range(start, end, "x"));

            prop_assert_eq!(block.x(), u64::from(start % 32) * 20);
            prop_assert_eq!(block.y(), u64::from(start / 32) * 40);
            prop_assert_eq!(block.width(), u64::from(len + 1) * 20);
            prop_assert_eq!(block.height(), 40);
        }

        #[test]
        fn prop_layout_is_deterministic_and_ordered(
            bounds in prop::collection::vec((0u32..10_000, 0u32..64), 0..32)
        ) {
            let ranges: Vec<_> = bounds
                .iter()
                .enumerate()
                .map(|(idx, (start, len))| range(*start, start + len, &idx.to_string()))
                .collect();

            let first = layout(&ranges);
            let second = layout(&ranges);

            prop_assert_eq!(&first, &second);
            prop_assert_eq!(first.len(), ranges.len());
            for (idx, block) in first.iter().enumerate() {
                prop_assert_eq!(block.label(), idx.to_string());
            }
        }
    }
}
