//! Selection Engine - converts a wall-clock reading into highlighted cells

use radar_core::{GridCell, HourCycle, RadarResult, Selection, TimeComponents};
use radar_time::TimeSource;
use tracing::debug;

use crate::{backward_rotate, decimal_digits, digit_sectors, pad_digits};

/// Ones-digit ring of the seconds component
pub const SECONDS_BASE_RING: u8 = 5;
/// Ones-digit ring of the minutes component
pub const MINUTES_BASE_RING: u8 = 3;
/// Ones-digit ring of the hours component
pub const HOURS_BASE_RING: u8 = 1;

/// Selection engine configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineConfig {
    /// How the hour is counted before encoding
    pub hour_cycle: HourCycle,
    /// Encode seconds on the two outer rings
    pub include_seconds: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            hour_cycle: HourCycle::Twelve,
            include_seconds: false,
        }
    }
}

impl EngineConfig {
    /// 24-hour face with the seconds rings
    pub fn with_seconds() -> Self {
        EngineConfig {
            hour_cycle: HourCycle::TwentyFour,
            include_seconds: true,
        }
    }
}

/// Stateless engine mapping time to grid cells
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionEngine {
    config: EngineConfig,
}

impl SelectionEngine {
    /// Create an engine with default configuration
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Self {
        SelectionEngine { config }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Select cells for a time using the configured seconds flag
    pub fn select(&self, time: TimeComponents) -> RadarResult<Selection> {
        Self::compute_selection(time, self.config.include_seconds)
    }

    /// Read the clock and select cells for the current time
    pub fn select_now(&self, clock: &dyn TimeSource) -> RadarResult<(TimeComponents, Selection)> {
        let time = clock.components(self.config.hour_cycle);
        let selection = self.select(time)?;
        Ok((time, selection))
    }

    /// Core mapping from time components to display cells.
    ///
    /// Output is ordered by ring descending (stable), rings are 1-based and
    /// sectors are rotated half a turn.
    pub fn compute_selection(
        time: TimeComponents,
        include_seconds: bool,
    ) -> RadarResult<Selection> {
        let mut raw = Vec::with_capacity(16);

        if include_seconds {
            encode_component(time.seconds(), SECONDS_BASE_RING, &mut raw)?;
        }
        encode_component(time.minutes(), MINUTES_BASE_RING, &mut raw)?;
        encode_component(time.hours(), HOURS_BASE_RING, &mut raw)?;

        // sort_by is stable: equal rings keep emission order
        raw.sort_by(|a, b| b.ring.cmp(&a.ring));

        let cells = raw
            .into_iter()
            .map(|cell| {
                backward_rotate(cell.sector).map(|sector| GridCell::new(cell.ring + 1, sector))
            })
            .collect::<RadarResult<Vec<_>>>()?;

        debug!(%time, include_seconds, cells = ?cells, "grid selection");
        Ok(Selection::new(cells))
    }
}

/// Emit raw cells for one component: tens digit one ring inside `base_ring`
fn encode_component(value: u8, base_ring: u8, out: &mut Vec<GridCell>) -> RadarResult<()> {
    let digits = pad_digits(&decimal_digits(value));

    for (index, digit) in digits.into_iter().enumerate() {
        let ring = if index == 0 { base_ring - 1 } else { base_ring };
        for sector in digit_sectors(digit)? {
            out.push(GridCell::new(ring, sector));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use radar_time::ManualClock;

    fn cells(pairs: &[(u8, u8)]) -> Vec<GridCell> {
        pairs.iter().copied().map(GridCell::from).collect()
    }

    fn hms(h: u32, m: u32, s: u32) -> TimeComponents {
        TimeComponents::new(h, m, s).unwrap()
    }

    #[test]
    fn test_ten_past_five_example() {
        let selection = SelectionEngine::compute_selection(hms(10, 5, 0), false).unwrap();
        assert_eq!(selection.cells(), cells(&[(4, 3), (4, 1), (1, 1)]).as_slice());
    }

    #[test]
    fn test_midnight_is_empty() {
        let selection = SelectionEngine::compute_selection(TimeComponents::MIDNIGHT, true).unwrap();
        assert!(selection.is_empty());
    }

    #[test]
    fn test_zero_component_contributes_nothing() {
        // Only the hours ones digit (3 = 0011 -> 1100 -> positions 2, 3)
        let selection = SelectionEngine::compute_selection(hms(3, 0, 0), true).unwrap();
        assert_eq!(selection.cells(), cells(&[(2, 0), (2, 1)]).as_slice());
    }

    #[test]
    fn test_ten_lights_single_tens_cell() {
        // minutes = 10: tens digit 1 -> raw (2, 3) -> display (3, 1)
        let selection = SelectionEngine::compute_selection(hms(0, 10, 0), false).unwrap();
        assert_eq!(selection.cells(), cells(&[(3, 1)]).as_slice());
    }

    #[test]
    fn test_seconds_rings() {
        // seconds = 59: tens 5 -> raw ring 4 sectors 1, 3; ones 9 -> ring 5 sectors 0, 3
        let selection = SelectionEngine::compute_selection(hms(0, 0, 59), true).unwrap();
        assert_eq!(
            selection.cells(),
            cells(&[(6, 2), (6, 1), (5, 3), (5, 1)]).as_slice()
        );

        let without = SelectionEngine::compute_selection(hms(0, 0, 59), false).unwrap();
        assert!(without.is_empty());
    }

    #[test]
    fn test_twenty_four_hour_tens_digit() {
        // hours = 23: tens 2 -> raw (0, 2); ones 3 -> raw (1, 2), (1, 3)
        let selection = SelectionEngine::compute_selection(hms(23, 0, 0), false).unwrap();
        assert_eq!(selection.cells(), cells(&[(2, 0), (2, 1), (1, 0)]).as_slice());
    }

    #[test]
    fn test_stable_order_within_ring() {
        // minutes 7 -> ones digit 0111 -> reversed positions 1, 2, 3
        let selection = SelectionEngine::compute_selection(hms(0, 7, 0), false).unwrap();
        assert_eq!(
            selection.cells(),
            cells(&[(4, 3), (4, 0), (4, 1)]).as_slice()
        );
    }

    #[test]
    fn test_select_uses_config() {
        let time = hms(0, 0, 30);
        assert!(SelectionEngine::new().select(time).unwrap().is_empty());

        let with_seconds = SelectionEngine::with_config(EngineConfig::with_seconds());
        assert!(!with_seconds.select(time).unwrap().is_empty());
    }

    #[test]
    fn test_select_now_applies_hour_cycle() {
        let clock = ManualClock::from_hms(22, 5, 0).unwrap();

        let twelve = SelectionEngine::new();
        let (time, selection) = twelve.select_now(&clock).unwrap();
        assert_eq!(time.hours(), 10);
        assert_eq!(selection.cells(), cells(&[(4, 3), (4, 1), (1, 1)]).as_slice());

        let twenty_four = SelectionEngine::with_config(EngineConfig {
            hour_cycle: HourCycle::TwentyFour,
            include_seconds: false,
        });
        let (time, _) = twenty_four.select_now(&clock).unwrap();
        assert_eq!(time.hours(), 22);
    }

    proptest! {
        #[test]
        fn prop_cells_in_range(h in 0u32..24, m in 0u32..60, s in 0u32..60, secs in any::<bool>()) {
            let selection = SelectionEngine::compute_selection(hms(h, m, s), secs).unwrap();
            let max_ring = if secs { 6 } else { 4 };
            for cell in &selection {
                prop_assert!(cell.ring >= 1 && cell.ring <= max_ring);
                prop_assert!(cell.sector <= 3);
            }
        }

        #[test]
        fn prop_sorted_descending(h in 0u32..24, m in 0u32..60, s in 0u32..60) {
            let selection = SelectionEngine::compute_selection(hms(h, m, s), true).unwrap();
            prop_assert!(selection.is_sorted_by_ring_desc());

            let mut resorted = selection.cells().to_vec();
            resorted.sort_by(|a, b| b.ring.cmp(&a.ring));
            prop_assert_eq!(resorted.as_slice(), selection.cells());
        }

        #[test]
        fn prop_deterministic(h in 0u32..24, m in 0u32..60, s in 0u32..60, secs in any::<bool>()) {
            let time = hms(h, m, s);
            prop_assert_eq!(
                SelectionEngine::compute_selection(time, secs).unwrap(),
                SelectionEngine::compute_selection(time, secs).unwrap()
            );
        }

        #[test]
        fn prop_cell_count_is_popcount(h in 0u32..24, m in 0u32..60, s in 0u32..60) {
            let expected: u32 = [h, m, s]
                .iter()
                .map(|v| (v / 10).count_ones() + (v % 10).count_ones())
                .sum();
            let selection = SelectionEngine::compute_selection(hms(h, m, s), true).unwrap();
            prop_assert_eq!(selection.len() as u32, expected);
        }
    }
}
