//! Day Sweep - drives the selection engine through a whole day
//!
//! Checks, for every visited time:
//! - rings stay inside the lit range and sectors inside 0..=3
//! - cells are ordered outermost first
//! - a zero component lights nothing on its rings
//! - the cell count equals the number of set bits of the digits
//! - a second computation gives the same result

use std::time::Duration;

use radar_core::{GridCell, HourCycle, RadarError, Selection, TimeComponents, SECTORS};
use radar_grid::{CellFilter, EngineConfig, SelectionEngine};
use radar_time::{ManualClock, TimeSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Sweep configuration
#[derive(Clone, Copy, Debug)]
pub struct SweepConfig {
    pub engine: EngineConfig,
    /// Filter applied after the engine
    pub filter: CellFilter,
    /// Clock advance between samples
    pub step: Duration,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            engine: EngineConfig::default(),
            filter: CellFilter::KeepAll,
            step: Duration::from_secs(1),
        }
    }
}

impl SweepConfig {
    /// 24-hour face with seconds, every second of the day
    pub fn full_face() -> Self {
        SweepConfig {
            engine: EngineConfig::with_seconds(),
            ..Self::default()
        }
    }

    /// Ambient display of a full face
    pub fn ambient() -> Self {
        SweepConfig {
            filter: CellFilter::ambient(),
            ..Self::full_face()
        }
    }
}

/// A broken invariant at a given time
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Violation {
    RingOutOfRange { time: TimeComponents, cell: GridCell },
    SectorOutOfRange { time: TimeComponents, cell: GridCell },
    NotSorted { time: TimeComponents },
    ZeroComponentLit { time: TimeComponents, ring: u8 },
    CountMismatch { time: TimeComponents, expected: usize, actual: usize },
    NonDeterministic { time: TimeComponents },
    EngineError { time: TimeComponents, error: RadarError },
}

/// Sweep results
#[derive(Clone, Debug, Default)]
pub struct SweepReport {
    /// Times checked
    pub checked: u64,
    /// Cells emitted over all times
    pub cells_emitted: u64,
    /// Largest selection seen
    pub max_cells: usize,
    pub violations: Vec<Violation>,
}

impl SweepReport {
    pub fn is_clean(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Full-day sweep harness
pub struct DaySweep {
    config: SweepConfig,
    engine: SelectionEngine,
}

impl DaySweep {
    pub fn new(config: SweepConfig) -> Self {
        DaySweep {
            config,
            engine: SelectionEngine::with_config(config.engine),
        }
    }

    /// Walk a manual clock from midnight through one day
    pub fn run(&self) -> SweepReport {
        let mut report = SweepReport::default();
        let clock = ManualClock::default();
        let step = self.config.step.as_secs().max(1);

        for _ in 0..SECONDS_PER_DAY / step {
            let time = clock.components(self.config.engine.hour_cycle);
            self.check(time, &mut report);
            clock.advance(Duration::from_secs(step));
        }
        report
    }

    /// Check a batch of explicit times
    pub fn run_times(&self, times: &[TimeComponents]) -> SweepReport {
        let mut report = SweepReport::default();
        for &time in times {
            self.check(time, &mut report);
        }
        report
    }

    /// Check all invariants for one time
    pub fn check(&self, time: TimeComponents, report: &mut SweepReport) {
        report.checked += 1;

        let selection = match self.select(time) {
            Ok(selection) => selection,
            Err(error) => {
                report.violations.push(Violation::EngineError { time, error });
                return;
            }
        };

        report.cells_emitted += selection.len() as u64;
        report.max_cells = report.max_cells.max(selection.len());

        let max_ring = if self.config.engine.include_seconds { 6 } else { 4 };
        for &cell in &selection {
            if cell.ring < 1 || cell.ring > max_ring || !self.config.filter.keeps(&cell) {
                report.violations.push(Violation::RingOutOfRange { time, cell });
            }
            if cell.sector >= SECTORS {
                report.violations.push(Violation::SectorOutOfRange { time, cell });
            }
        }

        if !selection.is_sorted_by_ring_desc() {
            report.violations.push(Violation::NotSorted { time });
        }

        for (value, rings) in self.components(time) {
            if value != 0 {
                continue;
            }
            if let Some(cell) = selection.iter().find(|c| rings.contains(&c.ring)) {
                report.violations.push(Violation::ZeroComponentLit {
                    time,
                    ring: cell.ring,
                });
            }
        }

        let expected = self.expected_count(time);
        if expected != selection.len() {
            report.violations.push(Violation::CountMismatch {
                time,
                expected,
                actual: selection.len(),
            });
        }

        if self.select(time).ok().as_ref() != Some(&selection) {
            report.violations.push(Violation::NonDeterministic { time });
        }
    }

    fn select(&self, time: TimeComponents) -> Result<Selection, RadarError> {
        self.engine
            .select(time)
            .map(|selection| self.config.filter.apply(selection))
    }

    /// Encoded components with the display rings they light
    fn components(&self, time: TimeComponents) -> Vec<(u8, [u8; 2])> {
        let mut out = vec![(time.minutes(), [3, 4]), (time.hours(), [1, 2])];
        if self.config.engine.include_seconds {
            out.push((time.seconds(), [5, 6]));
        }
        out
    }

    fn expected_count(&self, time: TimeComponents) -> usize {
        self.components(time)
            .into_iter()
            .map(|(value, rings)| {
                let tens = (value / 10).count_ones() as usize;
                let ones = (value % 10).count_ones() as usize;
                let kept = |ring: u8| self.config.filter.keeps(&GridCell::new(ring, 0));
                tens * usize::from(kept(rings[0])) + ones * usize::from(kept(rings[1]))
            })
            .sum()
    }
}

/// Seeded random wall-clock times
pub fn random_times(seed: u64, count: usize, cycle: HourCycle) -> Vec<TimeComponents> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .filter_map(|_| {
            TimeComponents::new(
                rng.gen_range(0..u32::from(cycle.hours())),
                rng.gen_range(0..60),
                rng.gen_range(0..60),
            )
            .ok()
        })
        .collect()
}
