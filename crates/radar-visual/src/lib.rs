//! Binary Radar Visual Model
//!
//! Everything a canvas needs to paint the radar, as plain data. This is
//! NOT a renderer: no surface, no paint objects.
//!
//! # Face Layout
//!
//! - Seven concentric circles, four quadrants
//! - Ring `n` of a selection fills its quadrant between radii `(n - 1) * step`
//!   and `n * step`
//! - Rings 1-2, 3-4 and 5-6 use their own gradients
//! - Ambient mode swaps every gradient for the style's ambient pair
//! - Weekday and date labels follow arcs near the rim
//! - The second hand sweeps 6 degrees per second, hidden in ambient mode

pub mod hand;
pub mod labels;
pub mod layout;
pub mod palette;
pub mod plan;

pub use hand::*;
pub use labels::*;
pub use layout::*;
pub use palette::*;
pub use plan::*;
