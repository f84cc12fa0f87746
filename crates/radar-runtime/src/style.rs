//! User style settings
//!
//! Every setting kind is a variant carrying its own typed payload. Hosts
//! that speak in string keys go through [`StyleSetting::parse`] once, at the
//! boundary.

use radar_core::{HourCycle, RadarError, RadarResult};
use radar_grid::EngineConfig;
use radar_visual::{ColorStyleId, HandDimensions, Palette, SECOND_HAND_LENGTH_FRACTION};

pub const COLOR_STYLE_SETTING: &str = "color_style_setting";
pub const WATCH_HAND_LENGTH_STYLE_SETTING: &str = "watch_hand_length_style_setting";
pub const INCLUDE_SECONDS_STYLE_SETTING: &str = "include_seconds_style_setting";
pub const HOUR_CYCLE_STYLE_SETTING: &str = "hour_cycle_style_setting";

/// Hand length bounds, as a fraction of the face width
pub const HAND_LENGTH_MIN: f32 = 0.1;
pub const HAND_LENGTH_MAX: f32 = 1.0;
pub const HAND_LENGTH_DEFAULT: f32 = SECOND_HAND_LENGTH_FRACTION;

/// A single style change
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StyleSetting {
    ColorStyle(ColorStyleId),
    /// Hand length fraction, clamped when applied
    HandLength(f32),
    IncludeSeconds(bool),
    HourCycle(HourCycle),
}

impl StyleSetting {
    /// Parse a host key/value pair
    pub fn parse(key: &str, value: &str) -> RadarResult<Self> {
        match key {
            COLOR_STYLE_SETTING => Ok(StyleSetting::ColorStyle(ColorStyleId::from_id(value)?)),
            WATCH_HAND_LENGTH_STYLE_SETTING => value
                .parse::<f32>()
                .ok()
                .filter(|v| v.is_finite())
                .map(StyleSetting::HandLength)
                .ok_or_else(|| invalid(key, value)),
            INCLUDE_SECONDS_STYLE_SETTING => {
                Ok(StyleSetting::IncludeSeconds(parse_bool(key, value)?))
            }
            HOUR_CYCLE_STYLE_SETTING => match value {
                "12" => Ok(StyleSetting::HourCycle(HourCycle::Twelve)),
                "24" => Ok(StyleSetting::HourCycle(HourCycle::TwentyFour)),
                _ => Err(invalid(key, value)),
            },
            other => Err(RadarError::UnknownStyle(other.to_string())),
        }
    }
}

fn parse_bool(key: &str, value: &str) -> RadarResult<bool> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(invalid(key, value)),
    }
}

fn invalid(key: &str, value: &str) -> RadarError {
    RadarError::InvalidArgument(format!("{} = {:?}", key, value))
}

/// Current user style of the face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceStyle {
    pub color_style: ColorStyleId,
    pub hand_length: f32,
    pub include_seconds: bool,
    pub hour_cycle: HourCycle,
}

impl Default for FaceStyle {
    fn default() -> Self {
        FaceStyle {
            color_style: ColorStyleId::Red,
            hand_length: HAND_LENGTH_DEFAULT,
            include_seconds: false,
            hour_cycle: HourCycle::Twelve,
        }
    }
}

impl FaceStyle {
    /// Apply one setting, returning whether anything changed
    pub fn apply(&mut self, setting: StyleSetting) -> bool {
        let before = *self;
        match setting {
            StyleSetting::ColorStyle(style) => self.color_style = style,
            StyleSetting::HandLength(length) if length.is_finite() => {
                self.hand_length = length.clamp(HAND_LENGTH_MIN, HAND_LENGTH_MAX)
            }
            StyleSetting::HandLength(_) => {}
            StyleSetting::IncludeSeconds(include) => self.include_seconds = include,
            StyleSetting::HourCycle(cycle) => self.hour_cycle = cycle,
        }
        *self != before
    }

    /// Apply several settings in order
    pub fn apply_all<I>(&mut self, settings: I) -> bool
    where
        I: IntoIterator<Item = StyleSetting>,
    {
        settings
            .into_iter()
            .fold(false, |changed, setting| self.apply(setting) | changed)
    }

    /// Engine configuration implied by this style
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            hour_cycle: self.hour_cycle,
            include_seconds: self.include_seconds,
        }
    }

    pub fn palette(&self) -> Palette {
        Palette::for_style(self.color_style)
    }

    /// Second hand proportions with the user's length
    pub fn hand_dimensions(&self) -> HandDimensions {
        HandDimensions::default().with_length(self.hand_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_apply_reports_change() {
        let mut style = FaceStyle::default();

        assert!(style.apply(StyleSetting::ColorStyle(ColorStyleId::Blue)));
        assert!(!style.apply(StyleSetting::ColorStyle(ColorStyleId::Blue)));
        assert_eq!(style.color_style, ColorStyleId::Blue);
    }

    #[test]
    fn test_hand_length_clamped() {
        let mut style = FaceStyle::default();

        style.apply(StyleSetting::HandLength(3.0));
        assert_eq!(style.hand_length, HAND_LENGTH_MAX);

        style.apply(StyleSetting::HandLength(0.0));
        assert_eq!(style.hand_length, HAND_LENGTH_MIN);
    }

    #[test]
    fn test_apply_all() {
        let mut style = FaceStyle::default();
        let changed = style.apply_all([
            StyleSetting::HandLength(0.5),
            StyleSetting::IncludeSeconds(true),
        ]);

        assert!(changed);
        assert!(style.include_seconds);
        assert!(!style.apply_all([StyleSetting::IncludeSeconds(true)]));
    }

    #[test]
    fn test_hand_length_drives_hand_dimensions() {
        let mut style = FaceStyle::default();
        assert_eq!(style.hand_dimensions(), HandDimensions::default());

        style.apply(StyleSetting::HandLength(0.6));
        assert_eq!(style.hand_dimensions().length_fraction, 0.6);
    }

    #[test]
    fn test_engine_config_follows_style() {
        let mut style = FaceStyle::default();
        style.apply(StyleSetting::HourCycle(HourCycle::TwentyFour));
        style.apply(StyleSetting::IncludeSeconds(true));

        assert_eq!(style.engine_config(), EngineConfig::with_seconds());
    }

    #[test]
    fn test_parse_settings() {
        assert_eq!(
            StyleSetting::parse(COLOR_STYLE_SETTING, "green_style").unwrap(),
            StyleSetting::ColorStyle(ColorStyleId::Green)
        );
        assert_eq!(
            StyleSetting::parse(INCLUDE_SECONDS_STYLE_SETTING, "false").unwrap(),
            StyleSetting::IncludeSeconds(false)
        );
        assert_eq!(
            StyleSetting::parse(WATCH_HAND_LENGTH_STYLE_SETTING, "0.5").unwrap(),
            StyleSetting::HandLength(0.5)
        );
        assert_eq!(
            StyleSetting::parse(HOUR_CYCLE_STYLE_SETTING, "24").unwrap(),
            StyleSetting::HourCycle(HourCycle::TwentyFour)
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            StyleSetting::parse("font_setting", "x"),
            Err(RadarError::UnknownStyle(_))
        ));
        assert!(matches!(
            StyleSetting::parse(COLOR_STYLE_SETTING, "neon_style"),
            Err(RadarError::UnknownStyle(_))
        ));
        assert!(matches!(
            StyleSetting::parse(INCLUDE_SECONDS_STYLE_SETTING, "yes"),
            Err(RadarError::InvalidArgument(_))
        ));
        assert!(StyleSetting::parse(WATCH_HAND_LENGTH_STYLE_SETTING, "NaN").is_err());
        assert!(StyleSetting::parse(HOUR_CYCLE_STYLE_SETTING, "10").is_err());
    }

    proptest! {
        #[test]
        fn prop_hand_length_stays_in_bounds(length in any::<f32>()) {
            let mut style = FaceStyle::default();
            style.apply(StyleSetting::HandLength(length));
            prop_assert!(style.hand_length >= HAND_LENGTH_MIN);
            prop_assert!(style.hand_length <= HAND_LENGTH_MAX);
        }
    }
}
