//! Radial grid coordinates
//!
//! The face is a set of concentric rings cut into quadrants. A cell is
//! addressed by its ring (counted from the center outward) and its sector.

use std::fmt;

/// Number of angular sectors per ring
pub const SECTORS: u8 = 4;

/// A single cell of the radial grid
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub ring: u8,
    pub sector: u8,
}

impl GridCell {
    #[inline]
    pub const fn new(ring: u8, sector: u8) -> Self {
        GridCell { ring, sector }
    }
}

impl fmt::Debug for GridCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.ring, self.sector)
    }
}

impl From<(u8, u8)> for GridCell {
    fn from((ring, sector): (u8, u8)) -> Self {
        GridCell::new(ring, sector)
    }
}

/// Ordered set of highlighted cells, outermost ring first.
///
/// Duplicates are allowed: two time components may light the same cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct Selection {
    cells: Vec<GridCell>,
}

impl Selection {
    pub fn new(cells: Vec<GridCell>) -> Self {
        Selection { cells }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    #[inline]
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn into_cells(self) -> Vec<GridCell> {
        self.cells
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GridCell> {
        self.cells.iter()
    }

    /// Keep only the cells matching the predicate, preserving order
    pub fn retain<F>(mut self, keep: F) -> Selection
    where
        F: FnMut(&GridCell) -> bool,
    {
        self.cells.retain(keep);
        self
    }

    /// Check the descending ring order
    pub fn is_sorted_by_ring_desc(&self) -> bool {
        self.cells.windows(2).all(|w| w[0].ring >= w[1].ring)
    }

    /// Highest ring present, if any
    pub fn outermost_ring(&self) -> Option<u8> {
        self.cells.first().map(|c| c.ring)
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a GridCell;
    type IntoIter = std::slice::Iter<'a, GridCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl FromIterator<GridCell> for Selection {
    fn from_iter<I: IntoIterator<Item = GridCell>>(iter: I) -> Self {
        Selection {
            cells: iter.into_iter().collect(),
        }
    }
}
