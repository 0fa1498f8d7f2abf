//! In-memory model of a draw.io document.

use bitplan_core::{geometry::Rect, identifier::CellId};

use crate::layout::LayoutBlock;

/// Attributes of the `mxfile` element.
pub(super) const FILE_ATTRIBUTES: [(&str, &str); 2] = [("host", "Electron"), ("type", "device")];

/// Attributes of the single `diagram` page.
pub(super) const PAGE_ATTRIBUTES: [(&str, &str); 2] = [("name", "Page-1"), ("id", "diagram_1")];

/// Attributes of the `mxGraphModel` element.
pub(super) const MODEL_ATTRIBUTES: [(&str, &str); 13] = [
    ("dx", "1422"),
    ("dy", "798"),
    ("grid", "1"),
    ("gridSize", "10"),
    ("guides", "1"),
    ("tooltips", "1"),
    ("connect", "1"),
    ("arrows", "1"),
    ("fold", "1"),
    ("page", "1"),
    ("pageScale", "1"),
    ("pageWidth", "850"),
    ("pageHeight", "1100"),
];

/// One `mxCell` of the graph model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    id: CellId,
    parent: Option<CellId>,
    value: Option<String>,
    style: Option<String>,
    geometry: Option<Rect>,
}

impl Cell {
    fn base() -> Self {
        Self {
            id: CellId::Base,
            parent: None,
            value: None,
            style: None,
            geometry: None,
        }
    }

    fn layer() -> Self {
        Self {
            id: CellId::Layer,
            parent: Some(CellId::Base),
            ..Self::base()
        }
    }

    fn vertex(id: CellId, block: &LayoutBlock, style: &str) -> Self {
        Self {
            id,
            parent: Some(CellId::Layer),
            value: Some(block.label().to_string()),
            style: Some(style.to_string()),
            geometry: Some(block.rect()),
        }
    }

    pub fn id(&self) -> CellId {
        self.id
    }

    pub fn parent(&self) -> Option<CellId> {
        self.parent
    }

    /// Text shown inside the cell.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn style(&self) -> Option<&str> {
        self.style.as_deref()
    }

    /// Vertices carry a geometry, the reserved cells do not.
    pub fn geometry(&self) -> Option<Rect> {
        self.geometry
    }

    pub fn is_vertex(&self) -> bool {
        self.geometry.is_some()
    }
}

/// The cells of a single-page draw.io document, in output order.
///
/// The first two cells are always the base cell and the default layer.
/// Vertices follow in the order of the blocks they were built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentTree {
    cells: Vec<Cell>,
}

impl DocumentTree {
    /// Builds the document for `blocks`, giving every vertex `style`.
    pub fn from_blocks(blocks: &[LayoutBlock], style: &str) -> Self {
        let mut cells = Vec::with_capacity(blocks.len() + 2);
        cells.push(Cell::base());
        cells.push(Cell::layer());
        cells.extend(
            blocks
                .iter()
                .enumerate()
                .map(|(idx, block)| Cell::vertex(CellId::for_block(idx), block, style)),
        );

        Self { cells }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the visual cells only.
    pub fn vertices(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| cell.is_vertex())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn blocks(count: usize) -> Vec<LayoutBlock> {
        (0..count)
            .map(|idx| {
                LayoutBlock::new(
                    format!("field {idx}"),
                    Rect::new(idx as u64 * 20, 0, 20, 40),
                )
            })
            .collect()
    }

    #[test]
    fn test_reserved_cells_come_first() {
        let tree = DocumentTree::from_blocks(&blocks(3), "s");
        let cells = tree.cells();

        assert_eq!(cells.len(), 5);
        assert_eq!(cells[0].id(), CellId::Base);
        assert_eq!(cells[0].parent(), None);
        assert!(!cells[0].is_vertex());
        assert_eq!(cells[1].id(), CellId::Layer);
        assert_eq!(cells[1].parent(), Some(CellId::Base));
        assert!(!cells[1].is_vertex());
    }

    #[test]
    fn test_vertices_follow_block_order() {
        let tree = DocumentTree::from_blocks(&blocks(3), "s");

        let vertices: Vec<_> = tree.vertices().collect();
        assert_eq!(vertices.len(), 3);
        for (idx, cell) in vertices.iter().enumerate() {
            assert_eq!(cell.id(), CellId::for_block(idx));
            assert_eq!(cell.parent(), Some(CellId::Layer));
            assert_eq!(cell.value(), Some(format!("field {idx}").as_str()));
            assert_eq!(cell.style(), Some("s"));
            assert_eq!(cell.geometry().map(|rect| rect.x()), Some(idx as u64 * 20));
        }
    }

    #[test]
    fn test_ids_are_unique() {
        let tree = DocumentTree::from_blocks(&blocks(50), "s");

        let ids: HashSet<_> = tree.cells().iter().map(|cell| cell.id().to_string()).collect();
        assert_eq!(ids.len(), 52);
    }

    #[test]
    fn test_empty_document() {
        let tree = DocumentTree::from_blocks(&[], "s");

        assert_eq!(tree.cells().len(), 2);
        assert_eq!(tree.vertices().count(), 0);
    }
}
