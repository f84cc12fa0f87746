//! Cell filters applied on top of the engine output
//!
//! Ambient mode keeps the face readable at low power by dropping the
//! outer rings. The engine itself never filters.

use radar_core::{DrawMode, GridCell, Selection};

/// First display ring hidden in ambient mode
pub const AMBIENT_RING_LIMIT: u8 = 5;

/// Post-filter over a selection
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CellFilter {
    /// Keep every cell
    #[default]
    KeepAll,
    /// Keep cells whose ring is strictly below the limit
    RingsBelow(u8),
}

impl CellFilter {
    /// Filter used while the display is ambient
    pub fn ambient() -> Self {
        CellFilter::RingsBelow(AMBIENT_RING_LIMIT)
    }

    /// Filter matching a draw mode
    pub fn for_mode(mode: DrawMode) -> Self {
        if mode.is_ambient() {
            Self::ambient()
        } else {
            CellFilter::KeepAll
        }
    }

    /// Does this cell survive the filter?
    #[inline]
    pub fn keeps(self, cell: &GridCell) -> bool {
        match self {
            CellFilter::KeepAll => true,
            CellFilter::RingsBelow(limit) => cell.ring < limit,
        }
    }

    /// Apply to a selection, preserving order
    pub fn apply(self, selection: Selection) -> Selection {
        match self {
            CellFilter::KeepAll => selection,
            _ => selection.retain(|cell| self.keeps(cell)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SelectionEngine;
    use radar_core::TimeComponents;

    #[test]
    fn test_ambient_drops_seconds_rings() {
        let time = TimeComponents::new(10, 5, 59).unwrap();
        let full = SelectionEngine::compute_selection(time, true).unwrap();
        assert!(full.iter().any(|c| c.ring >= 5));

        let ambient = CellFilter::ambient().apply(full.clone());
        assert!(ambient.iter().all(|c| c.ring < 5));
        assert_eq!(
            ambient.cells(),
            SelectionEngine::compute_selection(time, false).unwrap().cells()
        );
    }

    #[test]
    fn test_for_mode() {
        assert_eq!(CellFilter::for_mode(DrawMode::Ambient), CellFilter::RingsBelow(5));
        assert_eq!(CellFilter::for_mode(DrawMode::Interactive), CellFilter::KeepAll);
        assert_eq!(
            CellFilter::for_mode(DrawMode::LowBatteryInteractive),
            CellFilter::KeepAll
        );
    }

    #[test]
    fn test_keep_all_is_identity() {
        let time = TimeComponents::new(7, 48, 33).unwrap();
        let full = SelectionEngine::compute_selection(time, true).unwrap();
        assert_eq!(CellFilter::KeepAll.apply(full.clone()), full);
    }

    #[test]
    fn test_custom_limit() {
        let time = TimeComponents::new(10, 5, 0).unwrap();
        let full = SelectionEngine::compute_selection(time, false).unwrap();
        let inner = CellFilter::RingsBelow(2).apply(full);
        assert_eq!(inner.cells(), &[GridCell::new(1, 1)]);
    }
}
