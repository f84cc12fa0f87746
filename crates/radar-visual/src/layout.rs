//! Polar layout - maps grid cells to wedges on the face
//!
//! Angles are in degrees, clockwise from 3 o'clock (canvas convention).

use radar_core::GridCell;

/// Default number of concentric circles
pub const NUM_CIRCLES: u8 = 7;
/// Default number of angular cuts
pub const NUM_CUTS: u8 = 4;
/// Sector 0 starts at 6 o'clock
pub const START_ANGLE_OFFSET: f32 = 90.0;

/// Integer screen rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Square of the given side at the origin
    pub const fn square(side: i32) -> Self {
        Rect::new(0, 0, side, side)
    }

    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> i32 {
        (self.left + self.right) / 2
    }

    pub fn center_y(&self) -> i32 {
        (self.top + self.bottom) / 2
    }
}

/// Floating-point rectangle, used for ovals and hand bodies
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Point in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

/// Filled slice of one ring band, between `inner_radius` and `radius`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wedge {
    pub center: Point,
    pub inner_radius: f32,
    pub radius: f32,
    pub start_angle: f32,
    pub sweep: f32,
}

impl Wedge {
    /// Does the wedge cover this point?
    pub fn contains(&self, p: Point) -> bool {
        let dx = p.x - self.center.x;
        let dy = p.y - self.center.y;
        let dist = dx * dx + dy * dy;
        if dist > self.radius * self.radius || dist < self.inner_radius * self.inner_radius {
            return false;
        }
        // Screen y grows downward, so atan2(dy, dx) is already clockwise
        let angle = dy.atan2(dx).to_degrees().rem_euclid(360.0);
        let rel = (angle - self.start_angle).rem_euclid(360.0);
        rel <= self.sweep
    }
}

/// Straight stroke
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: Point,
    pub to: Point,
}

/// Geometry of the radial grid for one surface size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceGeometry {
    bounds: Rect,
    num_circles: u8,
    num_cuts: u8,
    center: Point,
    radius_step: i32,
}

impl FaceGeometry {
    /// Standard seven-circle, four-quadrant grid
    pub fn new(bounds: Rect) -> Self {
        Self::with_grid(bounds, NUM_CIRCLES, NUM_CUTS)
    }

    pub fn with_grid(bounds: Rect, num_circles: u8, num_cuts: u8) -> Self {
        let num_circles = num_circles.max(1);
        let max_radius = bounds.width().min(bounds.height()) / 2;

        FaceGeometry {
            bounds,
            num_circles,
            num_cuts: num_cuts.max(1),
            center: Point {
                x: bounds.center_x() as f32,
                y: bounds.center_y() as f32,
            },
            radius_step: max_radius / i32::from(num_circles),
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn center(&self) -> Point {
        self.center
    }

    pub fn radius_step(&self) -> i32 {
        self.radius_step
    }

    pub fn cut_angle(&self) -> f32 {
        360.0 / f32::from(self.num_cuts)
    }

    /// Radii of the grid circles, innermost first
    pub fn grid_circles(&self) -> Vec<f32> {
        (0..i32::from(self.num_circles))
            .map(|i| (self.radius_step * i) as f32)
            .collect()
    }

    /// Horizontal and vertical axes, inset by one ring
    pub fn axis_lines(&self) -> [Line; 2] {
        let inset = self.radius_step as f32;
        let b = self.bounds;
        [
            Line {
                from: Point {
                    x: b.left as f32 + inset,
                    y: self.center.y,
                },
                to: Point {
                    x: b.right as f32 - inset,
                    y: self.center.y,
                },
            },
            Line {
                from: Point {
                    x: self.center.x,
                    y: b.top as f32 + inset,
                },
                to: Point {
                    x: self.center.x,
                    y: b.bottom as f32 - inset,
                },
            },
        ]
    }

    /// Square bounds inset on every side, for text arcs
    pub fn inset_oval(&self, inset: f32) -> RectF {
        RectF {
            left: self.bounds.left as f32 + inset,
            top: self.bounds.top as f32 + inset,
            right: self.bounds.right as f32 - inset,
            bottom: self.bounds.bottom as f32 - inset,
        }
    }

    /// Band painted for a selected cell: ring `n` spans `(n - 1)` to `n` steps
    pub fn wedge(&self, cell: GridCell) -> Wedge {
        let cut = self.cut_angle();
        let ring = i32::from(cell.ring);
        Wedge {
            center: self.center,
            inner_radius: (self.radius_step * (ring - 1).max(0)) as f32,
            radius: (self.radius_step * ring) as f32,
            start_angle: f32::from(cell.sector) * cut + START_ANGLE_OFFSET,
            sweep: cut,
        }
    }
}
