//! Binary Radar Demo
//!
//! Runs a watch face against the local clock and prints every frame as a
//! ring-by-sector table:
//! - a few interactive frames, one per second
//! - a style change turning the seconds rings on
//! - ambient mode, where the seconds rings are dropped

use std::sync::Arc;
use std::time::Duration;

use radar_core::{DrawMode, GridCell, SECTORS};
use radar_runtime::{
    init_tracing, FaceFrame, FaceStyle, PollerConfig, StyleSetting, TelemetryConfig, WatchFace,
    HOUR_CYCLE_STYLE_SETTING,
};
use radar_time::SystemClock;
use radar_visual::{Rect, NUM_CIRCLES};
use tracing::info;

const INTERACTIVE_FRAMES: usize = 3;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing(&TelemetryConfig::default())?;

    println!("=== Binary Radar Face Demo ===\n");

    let face = WatchFace::start(
        Arc::new(SystemClock),
        FaceStyle::default(),
        PollerConfig::default(),
    );
    let mut frames = face.frames();

    // 1. Hours and minutes only
    println!("1. Interactive, hours and minutes");
    let mut seen = 0;
    for _ in 0..INTERACTIVE_FRAMES {
        let frame = frames.wait_for(|f| f.sequence > seen).await?;
        seen = frame.sequence;
        print_frame(&frame);
    }

    // 2. Seconds on, 24-hour cycle
    println!("\n2. Seconds rings enabled");
    face.apply_style(StyleSetting::IncludeSeconds(true));
    face.apply_style_option(HOUR_CYCLE_STYLE_SETTING, "24")?;
    // One tick may land before the style is picked up
    let frame = frames.wait_for(|f| f.sequence > seen + 1).await?;
    print_frame(&frame);

    // 3. Ambient drops rings 5 and 6
    println!("\n3. Ambient");
    face.set_draw_mode(DrawMode::Ambient);
    let frame = frames.wait_for(|f| f.mode == DrawMode::Ambient).await?;
    print_frame(&frame);

    let plan = face.frame_plan(Rect::square(454));
    println!(
        "   Draw list: {} wedges, {} grid circles, second hand {}",
        plan.wedges.len(),
        plan.grid_circles.len(),
        if plan.second_hand.is_some() { "shown" } else { "hidden" }
    );
    for label in &plan.date_labels {
        println!("   Label at {:.0} deg: {}", label.start_angle, label.text);
    }

    tokio::time::sleep(Duration::from_millis(200)).await;
    face.shutdown().await?;
    info!("demo finished");

    Ok(())
}

fn print_frame(frame: &FaceFrame) {
    println!(
        "   {} [{}] frame #{}, {} cells",
        frame.time,
        frame.mode.name(),
        frame.sequence,
        frame.selection.len()
    );
    for ring in (1..NUM_CIRCLES).rev() {
        let row: String = (0..SECTORS)
            .map(|sector| {
                let lit = frame
                    .selection
                    .iter()
                    .any(|c| *c == GridCell::new(ring, sector));
                if lit {
                    '#'
                } else {
                    '.'
                }
            })
            .collect();
        println!("     ring {} | {}", ring, row);
    }
}
