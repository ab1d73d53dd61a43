//! Diagram colours drawn from the Catppuccin palette

use std::fmt;

/// 8-bit sRGB colour
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<catppuccin::Color> for Rgb {
    fn from(color: catppuccin::Color) -> Self {
        Self::new(color.rgb.r, color.rgb.g, color.rgb.b)
    }
}

/// CSS hex notation, `#rrggbb`
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Colours used by both diagram kinds
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Rgb,
    pub text: Rgb,
    /// Constant strangeness / charge guides
    pub guide: Rgb,
    /// Light grid of the 3D box
    pub grid: Rgb,
    /// Hexagon and triangle multiplet outlines
    pub outline: Rgb,
    pub marker_fill: Rgb,
    pub marker_edge: Rgb,
    /// Translucent multiplet layers of the 3D diagrams
    pub layer: Rgb,
    pub layer_opacity: f32,
}

impl Default for Palette {
    fn default() -> Self {
        let colors = catppuccin::PALETTE.latte.colors;
        Self {
            background: Rgb::WHITE,
            text: colors.text.into(),
            guide: colors.overlay1.into(),
            grid: colors.surface1.into(),
            outline: colors.red.into(),
            marker_fill: colors.sky.into(),
            marker_edge: colors.maroon.into(),
            layer: colors.sapphire.into(),
            layer_opacity: 0.35,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_as_css_hex() {
        assert_eq!(Rgb::new(30, 102, 245).to_string(), "#1e66f5");
        assert_eq!(Rgb::BLACK.to_string(), "#000000");
    }

    #[test]
    fn default_palette_is_latte() {
        let palette = Palette::default();
        assert_eq!(palette.outline, Rgb::new(210, 15, 57));
        assert_eq!(palette.text, Rgb::new(76, 79, 105));
    }
}
