//! Second hand geometry

use crate::{FaceGeometry, Gradient, Point, RectF};

/// Default hand length, as a fraction of the face width
pub const SECOND_HAND_LENGTH_FRACTION: f32 = 0.38;
/// Hand thickness, as a fraction of the face width
pub const SECOND_HAND_WIDTH_FRACTION: f32 = 0.00934;
/// Gap between the center and the inner end of the hand
pub const HAND_CENTER_GAP_FRACTION: f32 = 0.03738;

/// Degrees swept per second
const DEGREES_PER_SECOND: f32 = 360.0 / 60.0;

/// Hand proportions relative to the face width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandDimensions {
    pub length_fraction: f32,
    pub width_fraction: f32,
    pub gap_fraction: f32,
}

impl Default for HandDimensions {
    fn default() -> Self {
        HandDimensions {
            length_fraction: SECOND_HAND_LENGTH_FRACTION,
            width_fraction: SECOND_HAND_WIDTH_FRACTION,
            gap_fraction: HAND_CENTER_GAP_FRACTION,
        }
    }
}

impl HandDimensions {
    pub fn with_length(self, length_fraction: f32) -> Self {
        HandDimensions {
            length_fraction,
            ..self
        }
    }
}

/// Clockwise rotation of the second hand, 0 at 12 o'clock
#[inline]
pub fn second_hand_rotation(seconds: u8) -> f32 {
    f32::from(seconds % 60) * DEGREES_PER_SECOND
}

/// Second hand ready to paint: `body` points at 12 o'clock and is then
/// rotated by `rotation` degrees around `pivot`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HandGeometry {
    pub body: RectF,
    pub pivot: Point,
    pub rotation: f32,
    pub gradient: Gradient,
}

impl HandGeometry {
    pub fn second_hand(
        geometry: &FaceGeometry,
        dims: HandDimensions,
        seconds: u8,
        gradient: Gradient,
    ) -> Self {
        let width = geometry.bounds().width() as f32;
        let pivot = geometry.center();

        HandGeometry {
            body: RectF {
                left: pivot.x - dims.width_fraction / 2.0 * width,
                top: pivot.y - (dims.gap_fraction + dims.length_fraction) * width,
                right: pivot.x + dims.width_fraction / 2.0 * width,
                bottom: pivot.y - dims.gap_fraction * width,
            },
            pivot,
            rotation: second_hand_rotation(seconds),
            gradient,
        }
    }

    /// Outer end of the hand after rotation
    pub fn tip(&self) -> Point {
        let reach = self.pivot.y - self.body.top;
        let theta = self.rotation.to_radians();
        Point {
            x: self.pivot.x + reach * theta.sin(),
            y: self.pivot.y - reach * theta.cos(),
        }
    }
}
