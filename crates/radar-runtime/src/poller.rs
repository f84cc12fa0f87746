//! Selection Poller - periodic selection task with latest-value publication

use std::sync::Arc;
use std::time::Duration;

use chrono::NaiveDate;
use radar_core::{DrawMode, RadarError, RadarResult, Selection, TimeComponents};
use radar_grid::{CellFilter, SelectionEngine};
use radar_time::TimeSource;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval, interval_at, Instant, Interval, MissedTickBehavior};
use tracing::{debug, error, info};

use crate::FaceStyle;

/// Poller configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollerConfig {
    /// Period while interactive
    pub interactive_period: Duration,
    /// Period while ambient
    pub ambient_period: Duration,
}

impl Default for PollerConfig {
    fn default() -> Self {
        PollerConfig {
            interactive_period: Duration::from_secs(1),
            ambient_period: Duration::from_secs(15),
        }
    }
}

impl PollerConfig {
    /// Configuration stretching ambient updates to one per minute
    pub fn battery_saver() -> Self {
        PollerConfig {
            interactive_period: Duration::from_secs(1),
            ambient_period: Duration::from_secs(60),
        }
    }

    pub fn period_for(&self, mode: DrawMode) -> Duration {
        if mode.is_ambient() {
            self.ambient_period
        } else {
            self.interactive_period
        }
    }
}

/// One published selection
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FaceFrame {
    /// Time the selection was computed for
    pub time: TimeComponents,
    /// Local date read with the time, None before the first computation
    pub date: Option<NaiveDate>,
    /// Draw mode the filter was chosen for
    pub mode: DrawMode,
    pub selection: Selection,
    /// Publication counter, 0 before the first computation
    pub sequence: u64,
}

/// Read side of the latest-frame slot
#[derive(Clone, Debug)]
pub struct FrameReceiver {
    rx: watch::Receiver<FaceFrame>,
}

impl FrameReceiver {
    /// Newest frame, marking it seen
    pub fn latest(&mut self) -> FaceFrame {
        self.rx.borrow_and_update().clone()
    }

    /// Newest frame without marking it seen
    pub fn peek(&self) -> FaceFrame {
        self.rx.borrow().clone()
    }

    /// Has a frame been published since the last read?
    pub fn has_new(&self) -> bool {
        self.rx.has_changed().unwrap_or(false)
    }

    /// Wait for a frame newer than the last one read.
    /// Frames published in between are skipped.
    pub async fn next(&mut self) -> RadarResult<FaceFrame> {
        self.rx
            .changed()
            .await
            .map_err(|_| RadarError::PollerStopped)?;
        Ok(self.latest())
    }

    /// Wait until a frame matches the predicate
    pub async fn wait_for<F>(&mut self, mut f: F) -> RadarResult<FaceFrame>
    where
        F: FnMut(&FaceFrame) -> bool,
    {
        let frame = self
            .rx
            .wait_for(|frame| f(frame))
            .await
            .map_err(|_| RadarError::PollerStopped)?;
        Ok(frame.clone())
    }
}

/// Handle to a running selection task
pub struct SelectionPoller {
    frames: watch::Receiver<FaceFrame>,
    shutdown_tx: watch::Sender<bool>,
    handle: JoinHandle<()>,
}

impl SelectionPoller {
    /// Spawn the polling task on the current tokio runtime.
    ///
    /// The task computes once immediately, then every period of the current
    /// draw mode, and again right after any draw mode or style change.
    pub fn spawn(
        clock: Arc<dyn TimeSource>,
        config: PollerConfig,
        mode_rx: watch::Receiver<DrawMode>,
        style_rx: watch::Receiver<FaceStyle>,
    ) -> Self {
        let (frames_tx, frames) = watch::channel(FaceFrame::default());
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        let task = PollTask {
            clock,
            config,
            mode_rx,
            style_rx,
            shutdown_rx,
            frames_tx,
            sequence: 0,
        };
        let handle = tokio::spawn(task.run());

        SelectionPoller {
            frames,
            shutdown_tx,
            handle,
        }
    }

    pub fn subscribe(&self) -> FrameReceiver {
        FrameReceiver {
            rx: self.frames.clone(),
        }
    }

    /// Newest published frame
    pub fn latest(&self) -> FaceFrame {
        self.frames.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }

    /// Signal shutdown and wait for the task to exit.
    /// A computation already in progress completes; none starts afterwards.
    pub async fn shutdown(self) -> RadarResult<()> {
        // The task may already be gone; joining reports how it ended
        let _ = self.shutdown_tx.send(true);
        self.handle
            .await
            .map_err(|e| RadarError::TaskFailed(e.to_string()))
    }
}

struct PollTask {
    clock: Arc<dyn TimeSource>,
    config: PollerConfig,
    mode_rx: watch::Receiver<DrawMode>,
    style_rx: watch::Receiver<FaceStyle>,
    shutdown_rx: watch::Receiver<bool>,
    frames_tx: watch::Sender<FaceFrame>,
    sequence: u64,
}

impl PollTask {
    async fn run(mut self) {
        let mut mode = *self.mode_rx.borrow_and_update();
        let mut style = *self.style_rx.borrow_and_update();
        let mut ticker = make_ticker(self.config.period_for(mode), false);
        let mut mode_open = true;
        let mut style_open = true;

        info!(mode = mode.name(), "selection poller started");

        loop {
            tokio::select! {
                biased;

                changed = self.shutdown_rx.changed() => {
                    // A dropped handle counts as shutdown
                    if changed.is_err() || *self.shutdown_rx.borrow() {
                        break;
                    }
                }
                changed = self.mode_rx.changed(), if mode_open => {
                    if changed.is_err() {
                        mode_open = false;
                        continue;
                    }
                    let next = *self.mode_rx.borrow_and_update();
                    if next != mode {
                        debug!(from = mode.name(), to = next.name(), "draw mode changed");
                        mode = next;
                        ticker = make_ticker(self.config.period_for(mode), true);
                    }
                    self.publish(mode, &style);
                }
                changed = self.style_rx.changed(), if style_open => {
                    if changed.is_err() {
                        style_open = false;
                        continue;
                    }
                    style = *self.style_rx.borrow_and_update();
                    self.publish(mode, &style);
                }
                _ = ticker.tick() => {
                    self.publish(mode, &style);
                }
            }
        }

        info!(published = self.sequence, "selection poller stopped");
    }

    fn publish(&mut self, mode: DrawMode, style: &FaceStyle) {
        let engine = SelectionEngine::with_config(style.engine_config());
        // Date and time come from one reading so they agree across midnight
        let now = self.clock.now_local();
        let time = TimeComponents::from_time(&now, style.hour_cycle);

        match engine.select(time) {
            Ok(selection) => {
                let selection = CellFilter::for_mode(mode).apply(selection);
                self.sequence += 1;
                debug!(%time, mode = mode.name(), cells = selection.len(), "publishing frame");
                self.frames_tx.send_replace(FaceFrame {
                    time,
                    date: Some(now.date()),
                    mode,
                    selection,
                    sequence: self.sequence,
                });
            }
            Err(e) => {
                // Keep showing the previous frame
                error!(error = %e, "grid selection failed");
            }
        }
    }
}

/// Interval for a period; `delayed` skips the immediate first tick
fn make_ticker(period: Duration, delayed: bool) -> Interval {
    let mut ticker = if delayed {
        interval_at(Instant::now() + period, period)
    } else {
        interval(period)
    };
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    ticker
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_for_mode() {
        let config = PollerConfig::default();
        assert_eq!(config.period_for(DrawMode::Interactive), Duration::from_secs(1));
        assert_eq!(config.period_for(DrawMode::Mute), Duration::from_secs(1));
        assert_eq!(config.period_for(DrawMode::Ambient), Duration::from_secs(15));
        assert_eq!(
            PollerConfig::battery_saver().period_for(DrawMode::Ambient),
            Duration::from_secs(60)
        );
    }

    #[test]
    fn test_default_frame_is_empty() {
        let frame = FaceFrame::default();
        assert_eq!(frame.sequence, 0);
        assert_eq!(frame.date, None);
        assert!(frame.selection.is_empty());
    }
}
