//! Colors and gradients of the radar face

use radar_core::{RadarError, RadarResult};

/// Color in ARGB (0 - 255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const GRAY: Color = Color::rgb(0x88, 0x88, 0x88);
    pub const DARK_GRAY: Color = Color::rgb(0x44, 0x44, 0x44);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { a: 0xff, r, g, b }
    }

    /// Parse `#rrggbb` or `#aarrggbb`
    pub fn from_hex(hex: &str) -> RadarResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| RadarError::InvalidArgument(format!("bad color {:?}", hex)))?;

        match digits.len() {
            6 => Ok(Color::rgb((value >> 16) as u8, (value >> 8) as u8, value as u8)),
            8 => Ok(Color {
                a: (value >> 24) as u8,
                r: (value >> 16) as u8,
                g: (value >> 8) as u8,
                b: value as u8,
            }),
            _ => Err(RadarError::InvalidArgument(format!(
                "bad color length {:?}",
                hex
            ))),
        }
    }

    pub fn with_alpha(self, a: u8) -> Color {
        Color { a, ..self }
    }
}

/// Two-stop horizontal gradient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    pub start: Color,
    pub end: Color,
}

impl Gradient {
    pub const fn new(start: Color, end: Color) -> Self {
        Gradient { start, end }
    }

    pub const fn solid(color: Color) -> Self {
        Gradient::new(color, color)
    }

    pub fn with_alpha(self, a: u8) -> Gradient {
        Gradient::new(self.start.with_alpha(a), self.end.with_alpha(a))
    }
}

const INDIGO: Color = Color::rgb(0x54, 0x65, 0xff);
const CYAN: Color = Color::rgb(0x00, 0xd4, 0xff);
const VIOLET: Color = Color::rgb(0x36, 0x2e, 0x78);
const LAVENDER: Color = Color::rgb(0xa0, 0x9b, 0xe7);

/// Alpha applied to wedges in ambient mode
pub const AMBIENT_ALPHA: u8 = 210;

/// Selectable color schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorStyleId {
    #[default]
    Red,
    Green,
    Blue,
    White,
}

impl ColorStyleId {
    pub const ALL: [ColorStyleId; 4] = [
        ColorStyleId::Red,
        ColorStyleId::Green,
        ColorStyleId::Blue,
        ColorStyleId::White,
    ];

    /// Parse a style identifier (`"red_style"`, ...)
    pub fn from_id(id: &str) -> RadarResult<Self> {
        match id {
            "red_style" => Ok(ColorStyleId::Red),
            "green_style" => Ok(ColorStyleId::Green),
            "blue_style" => Ok(ColorStyleId::Blue),
            "white_style" => Ok(ColorStyleId::White),
            other => Err(RadarError::UnknownStyle(other.to_string())),
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            ColorStyleId::Red => "red_style",
            ColorStyleId::Green => "green_style",
            ColorStyleId::Blue => "blue_style",
            ColorStyleId::White => "white_style",
        }
    }
}

/// Resolved colors for one style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub active_primary: Color,
    pub active_secondary: Color,
    pub active_background: Color,
    pub ambient_primary: Color,
    pub ambient_secondary: Color,
    pub ambient_background: Color,
    /// Glowing grid stroke
    pub grid_glow: Color,
    /// Plain grid stroke
    pub grid_plain: Color,
}

impl Palette {
    pub fn for_style(style: ColorStyleId) -> Self {
        // (active primary, active secondary, ambient primary, ambient secondary)
        let (active_primary, active_secondary, ambient_primary, ambient_secondary) = match style {
            ColorStyleId::Red => (
                Color::rgb(0xff, 0x52, 0x52),
                Color::rgb(0xff, 0xab, 0x91),
                Color::rgb(0xff, 0x8a, 0x80),
                Color::rgb(0x8e, 0x24, 0x24),
            ),
            ColorStyleId::Green => (
                Color::rgb(0x69, 0xf0, 0xae),
                Color::rgb(0xb9, 0xf6, 0xca),
                Color::rgb(0xa5, 0xd6, 0xa7),
                Color::rgb(0x1b, 0x5e, 0x20),
            ),
            ColorStyleId::Blue => (
                Color::rgb(0x44, 0x8a, 0xff),
                Color::rgb(0x82, 0xb1, 0xff),
                Color::rgb(0x90, 0xca, 0xf9),
                Color::rgb(0x0d, 0x47, 0xa1),
            ),
            ColorStyleId::White => (
                Color::WHITE,
                Color::rgb(0xe0, 0xe0, 0xe0),
                Color::WHITE,
                Color::GRAY,
            ),
        };

        Palette {
            active_primary,
            active_secondary,
            active_background: Color::BLACK,
            ambient_primary,
            ambient_secondary,
            ambient_background: Color::BLACK,
            grid_glow: INDIGO,
            grid_plain: Color::DARK_GRAY,
        }
    }

    /// Gradient for a display ring, bucketed by pairs of rings
    pub fn gradient_for_ring(&self, ring: u8) -> Gradient {
        match ring {
            1..=2 => Gradient::new(INDIGO, CYAN),
            3..=4 => Gradient::new(CYAN, INDIGO),
            5..=6 => Gradient::new(VIOLET, LAVENDER),
            _ => Gradient::solid(Color::GRAY),
        }
    }

    /// Gradient used for every wedge in ambient mode
    pub fn ambient_gradient(&self) -> Gradient {
        Gradient::new(self.ambient_secondary, self.ambient_primary).with_alpha(AMBIENT_ALPHA)
    }

    /// Fill of the second hand
    pub fn hand_gradient(&self) -> Gradient {
        Gradient::new(VIOLET, LAVENDER)
    }

    /// Text color of the date labels
    pub fn label_color(&self, ambient: bool) -> Color {
        if ambient {
            self.ambient_primary
        } else {
            self.active_primary
        }
    }

    pub fn background(&self, ambient: bool) -> Color {
        if ambient {
            self.ambient_background
        } else {
            self.active_background
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::for_style(ColorStyleId::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        assert_eq!(Color::from_hex("#5465ff").unwrap(), INDIGO);
        assert_eq!(
            Color::from_hex("#80ffffff").unwrap(),
            Color::WHITE.with_alpha(0x80)
        );
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("#zzzzzz").is_err());
    }

    #[test]
    fn test_ring_buckets() {
        let p = Palette::default();
        assert_eq!(p.gradient_for_ring(1), p.gradient_for_ring(2));
        assert_eq!(p.gradient_for_ring(3), Gradient::new(CYAN, INDIGO));
        assert_eq!(p.gradient_for_ring(6), Gradient::new(VIOLET, LAVENDER));
        assert_eq!(p.gradient_for_ring(0), Gradient::solid(Color::GRAY));
        assert_eq!(p.gradient_for_ring(7), Gradient::solid(Color::GRAY));
    }

    #[test]
    fn test_ambient_gradient_is_translucent() {
        let g = Palette::default().ambient_gradient();
        assert_eq!(g.start.a, AMBIENT_ALPHA);
        assert_eq!(g.end.a, AMBIENT_ALPHA);
    }

    #[test]
    fn test_styles_are_distinct() {
        for (i, a) in ColorStyleId::ALL.iter().enumerate() {
            for b in &ColorStyleId::ALL[i + 1..] {
                let (pa, pb) = (Palette::for_style(*a), Palette::for_style(*b));
                assert_ne!(pa.ambient_gradient(), pb.ambient_gradient(), "{:?} {:?}", a, b);
                assert_ne!(pa.label_color(false), pb.label_color(false), "{:?} {:?}", a, b);
            }
        }
    }

    #[test]
    fn test_style_ids() {
        for style in ColorStyleId::ALL {
            assert_eq!(ColorStyleId::from_id(style.id()).unwrap(), style);
        }
        assert_eq!(
            ColorStyleId::from_id("purple_style"),
            Err(RadarError::UnknownStyle("purple_style".to_string()))
        );
    }
}
