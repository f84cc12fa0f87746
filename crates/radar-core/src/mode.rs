//! Display draw modes
//!
//! The host switches the face between these modes:
//! - Interactive: full color, every ring, one update per second
//! - LowBatteryInteractive: interactive rendering on a low battery
//! - Mute: interactive rendering with notifications muted
//! - Ambient: reduced power, inner rings only, slow updates

/// Draw mode of the watch face
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum DrawMode {
    #[default]
    Interactive,
    LowBatteryInteractive,
    Mute,
    Ambient,
}

impl DrawMode {
    /// Is this the reduced-power mode?
    #[inline]
    pub fn is_ambient(self) -> bool {
        matches!(self, DrawMode::Ambient)
    }

    /// Short name for logs
    pub fn name(self) -> &'static str {
        match self {
            DrawMode::Interactive => "interactive",
            DrawMode::LowBatteryInteractive => "low_battery_interactive",
            DrawMode::Mute => "mute",
            DrawMode::Ambient => "ambient",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_ambient_is_ambient() {
        assert!(DrawMode::Ambient.is_ambient());
        assert!(!DrawMode::Interactive.is_ambient());
        assert!(!DrawMode::LowBatteryInteractive.is_ambient());
        assert!(!DrawMode::Mute.is_ambient());
    }
}
