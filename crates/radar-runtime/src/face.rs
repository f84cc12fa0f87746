//! Watch Face - owns draw mode, style and the selection poller

use std::sync::Arc;

use radar_core::{DrawMode, RadarResult};
use radar_time::TimeSource;
use radar_visual::{FaceGeometry, FrameInput, FramePlan, Rect};
use tokio::sync::watch;
use tracing::info;

use crate::{FaceFrame, FaceStyle, FrameReceiver, PollerConfig, SelectionPoller, StyleSetting};

/// A running radar face
pub struct WatchFace {
    mode_tx: watch::Sender<DrawMode>,
    style_tx: watch::Sender<FaceStyle>,
    poller: SelectionPoller,
}

impl WatchFace {
    /// Start the face in interactive mode. Must be called inside a tokio runtime.
    pub fn start(clock: Arc<dyn TimeSource>, style: FaceStyle, config: PollerConfig) -> Self {
        let (mode_tx, mode_rx) = watch::channel(DrawMode::Interactive);
        let (style_tx, style_rx) = watch::channel(style);
        let poller = SelectionPoller::spawn(clock, config, mode_rx, style_rx);

        WatchFace {
            mode_tx,
            style_tx,
            poller,
        }
    }

    pub fn draw_mode(&self) -> DrawMode {
        *self.mode_tx.borrow()
    }

    /// Switch draw mode, returning whether it changed
    pub fn set_draw_mode(&self, mode: DrawMode) -> bool {
        let changed = self.mode_tx.send_if_modified(|current| {
            if *current == mode {
                return false;
            }
            *current = mode;
            true
        });
        if changed {
            info!(mode = mode.name(), "draw mode set");
        }
        changed
    }

    pub fn style(&self) -> FaceStyle {
        *self.style_tx.borrow()
    }

    /// Apply a style setting, returning whether the style changed
    pub fn apply_style(&self, setting: StyleSetting) -> bool {
        let changed = self.style_tx.send_if_modified(|style| style.apply(setting));
        if changed {
            info!(?setting, "style updated");
        }
        changed
    }

    /// Apply a host key/value style option
    pub fn apply_style_option(&self, key: &str, value: &str) -> RadarResult<bool> {
        let setting = StyleSetting::parse(key, value)?;
        Ok(self.apply_style(setting))
    }

    pub fn frames(&self) -> FrameReceiver {
        self.poller.subscribe()
    }

    pub fn latest(&self) -> FaceFrame {
        self.poller.latest()
    }

    /// Draw list for the newest frame on a surface of the given bounds
    pub fn frame_plan(&self, bounds: Rect) -> FramePlan {
        let frame = self.poller.latest();
        let style = self.style();
        let input = FrameInput {
            selection: &frame.selection,
            mode: frame.mode,
            seconds: frame.time.seconds(),
            date: frame.date,
            hand: style.hand_dimensions(),
        };
        FramePlan::build(&FaceGeometry::new(bounds), &input, &style.palette())
    }

    pub fn is_running(&self) -> bool {
        self.poller.is_running()
    }

    /// Stop polling; no selection is computed after this returns
    pub async fn shutdown(self) -> RadarResult<()> {
        info!("watch face shutting down");
        self.poller.shutdown().await
    }
}
