//! Frame Plan - ordered draw list for one frame of the face

use chrono::NaiveDate;
use radar_core::{DrawMode, GridCell, Selection};

use crate::{
    date_labels, ArcLabel, Color, FaceGeometry, Gradient, HandDimensions, HandGeometry, Line,
    Palette, Point, Wedge,
};

/// Stroke style of the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridStroke {
    /// Blurred accent stroke (interactive)
    Glow { color: Color },
    /// Flat thin stroke (ambient)
    Plain { color: Color },
}

/// One selected wedge with its fill
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WedgeFill {
    pub cell: GridCell,
    pub wedge: Wedge,
    pub gradient: Gradient,
}

/// What one frame shows
#[derive(Debug, Clone, Copy)]
pub struct FrameInput<'a> {
    pub selection: &'a Selection,
    pub mode: DrawMode,
    /// Seconds of the displayed time, for the second hand
    pub seconds: u8,
    /// Date for the rim labels; no labels without one
    pub date: Option<NaiveDate>,
    pub hand: HandDimensions,
}

impl<'a> FrameInput<'a> {
    /// Interactive frame with default hand and no date
    pub fn new(selection: &'a Selection) -> Self {
        FrameInput {
            selection,
            mode: DrawMode::Interactive,
            seconds: 0,
            date: None,
            hand: HandDimensions::default(),
        }
    }
}

/// Everything to paint for one frame, in paint order
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub background: Color,
    pub date_labels: Vec<ArcLabel>,
    /// Selected bands in selection order (outermost ring first).
    /// Bands never overlap, so paint order does not hide cells.
    pub wedges: Vec<WedgeFill>,
    pub grid_circles: Vec<f32>,
    pub axes: [Line; 2],
    pub grid_stroke: GridStroke,
    /// Hidden in ambient mode
    pub second_hand: Option<HandGeometry>,
}

impl FramePlan {
    pub fn build(geometry: &FaceGeometry, input: &FrameInput<'_>, palette: &Palette) -> Self {
        let ambient = input.mode.is_ambient();

        let wedges = input
            .selection
            .iter()
            .map(|&cell| WedgeFill {
                cell,
                wedge: geometry.wedge(cell),
                gradient: if ambient {
                    palette.ambient_gradient()
                } else {
                    palette.gradient_for_ring(cell.ring)
                },
            })
            .collect();

        let grid_stroke = if ambient {
            GridStroke::Plain {
                color: palette.grid_plain,
            }
        } else {
            GridStroke::Glow {
                color: palette.grid_glow,
            }
        };

        let second_hand = (!ambient).then(|| {
            HandGeometry::second_hand(geometry, input.hand, input.seconds, palette.hand_gradient())
        });

        let labels = input
            .date
            .map(|date| date_labels(geometry, date, palette.label_color(ambient)))
            .unwrap_or_default();

        FramePlan {
            background: palette.background(ambient),
            date_labels: labels,
            wedges,
            grid_circles: geometry.grid_circles(),
            axes: geometry.axis_lines(),
            grid_stroke,
            second_hand,
        }
    }

    /// Cell painted last over a point, if any
    pub fn topmost_cell_at(&self, p: Point) -> Option<GridCell> {
        self.wedges
            .iter()
            .rev()
            .find(|w| w.wedge.contains(p))
            .map(|w| w.cell)
    }
}
