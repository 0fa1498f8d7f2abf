//! Identifiers for cells of a generated draw.io document.
//!
//! A draw.io graph model always starts with two reserved cells: the base
//! cell `"0"` and the default layer `"1"` whose parent is the base. Every
//! visual cell is parented to the default layer and numbered after the two
//! reserved identifiers.

use std::fmt;

/// Index of the first visual cell, right after the two reserved cells.
pub const FIRST_VERTEX_INDEX: usize = 2;

/// Identifier of a cell in the graph model.
///
/// # Examples
///
/// ```
/// use bitplan_core::identifier::CellId;
///
/// assert_eq!(CellId::Base.to_string(), "0");
/// assert_eq!(CellId::Layer.to_string(), "1");
/// assert_eq!(CellId::for_block(0).to_string(), "cell_2");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CellId {
    /// The root cell every graph model needs.
    Base,
    /// The default layer, child of [`CellId::Base`].
    Layer,
    /// A visual cell with its sequence number.
    Vertex(usize),
}

impl CellId {
    /// Returns the identifier of the `index`-th layout block (zero based).
    pub fn for_block(index: usize) -> Self {
        Self::Vertex(index + FIRST_VERTEX_INDEX)
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "0"),
            Self::Layer => write!(f, "1"),
            Self::Vertex(n) => write!(f, "cell_{n}"),
        }
    }
}
