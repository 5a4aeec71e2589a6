//! RGBA color

use serde::{Deserialize, Serialize};

/// RGBA color with components in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Build an opaque color from a `0xRRGGBB` value
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Linear interpolation between two colors
    pub fn lerp(from: &Self, to: &Self, t: f32) -> Self {
        Self {
            r: from.r + (to.r - from.r) * t,
            g: from.g + (to.g - from.g) * t,
            b: from.b + (to.b - from.b) * t,
            a: from.a + (to.a - from.a) * t,
        }
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// `#rrggbb`, or `rgba(r,g,b,a)` when not fully opaque
    pub fn to_css(&self) -> String {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a < 1.0 {
            format!(
                "rgba({},{},{},{})",
                channel(self.r),
                channel(self.g),
                channel(self.b),
                self.a
            )
        } else {
            format!(
                "#{:02x}{:02x}{:02x}",
                channel(self.r),
                channel(self.g),
                channel(self.b)
            )
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[f32; 4]> for Color {
    fn from([r, g, b, a]: [f32; 4]) -> Self {
        Self { r, g, b, a }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex(0xFF8000);
        assert_eq!(c.r, 1.0);
        assert!((c.g - 128.0 / 255.0).abs() < f32::EPSILON);
        assert_eq!(c.b, 0.0);
        assert_eq!(c.a, 1.0);
    }

    #[test]
    fn test_lerp_endpoints() {
        let mid = Color::lerp(&Color::BLACK, &Color::WHITE, 0.5);
        assert_eq!(mid, Color::rgb(0.5, 0.5, 0.5));
        assert_eq!(Color::lerp(&Color::BLACK, &Color::WHITE, 0.0), Color::BLACK);
    }

    #[test]
    fn test_to_css() {
        assert_eq!(Color::from_hex(0x007AFF).to_css(), "#007aff");
        assert_eq!(Color::BLACK.with_alpha(0.5).to_css(), "rgba(0,0,0,0.5)");
    }

    #[test]
    fn test_array_conversion() {
        let color = Color::rgba(0.25, 0.5, 0.75, 1.0);
        assert_eq!(color.to_array(), [0.25, 0.5, 0.75, 1.0]);
        assert_eq!(Color::from(color.to_array()), color);
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(Color::rgba(1.0, 0.0, 0.5, 1.0)).unwrap();
        assert_eq!(json["r"], 1.0);
        assert_eq!(json["b"], 0.5);
    }
}
