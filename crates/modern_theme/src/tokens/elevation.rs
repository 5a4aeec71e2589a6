//! Elevation tokens

use super::color::ColorToken;
use modern_core::Shadow;
use serde::{Deserialize, Serialize};

/// Elevation level keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElevationLevel {
    None,
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
}

impl ElevationLevel {
    pub fn all() -> &'static [ElevationLevel] {
        const LEVELS: [ElevationLevel; 7] = [
            ElevationLevel::None,
            ElevationLevel::Xs,
            ElevationLevel::Sm,
            ElevationLevel::Md,
            ElevationLevel::Lg,
            ElevationLevel::Xl,
            ElevationLevel::Xxl,
        ];
        &LEVELS
    }
}

/// Drop shadow parameters for one elevation level
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ElevationToken {
    pub shadow_color: ColorToken,
    pub shadow_radius: f32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub shadow_opacity: f32,
}

impl ElevationToken {
    pub const fn new(shadow_radius: f32, offset_y: f32, shadow_opacity: f32) -> Self {
        Self {
            shadow_color: ColorToken::new(0.0, 0.0, 0.0, shadow_opacity),
            shadow_radius,
            offset_x: 0.0,
            offset_y,
            shadow_opacity,
        }
    }

    /// Renderable shadow; the radius is used as blur
    pub fn to_shadow(&self) -> Shadow {
        Shadow::new(
            self.offset_x,
            self.offset_y,
            self.shadow_radius,
            self.shadow_color.color(),
        )
    }
}

impl From<ElevationToken> for Shadow {
    fn from(token: ElevationToken) -> Self {
        token.to_shadow()
    }
}

impl From<&ElevationToken> for Shadow {
    fn from(token: &ElevationToken) -> Self {
        token.to_shadow()
    }
}

/// Complete elevation scale
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Elevation {
    pub none: ElevationToken,
    pub xs: ElevationToken,
    pub sm: ElevationToken,
    pub md: ElevationToken,
    pub lg: ElevationToken,
    pub xl: ElevationToken,
    pub xxl: ElevationToken,
}

impl Elevation {
    /// Get elevation by level
    pub fn get(&self, level: ElevationLevel) -> &ElevationToken {
        match level {
            ElevationLevel::None => &self.none,
            ElevationLevel::Xs => &self.xs,
            ElevationLevel::Sm => &self.sm,
            ElevationLevel::Md => &self.md,
            ElevationLevel::Lg => &self.lg,
            ElevationLevel::Xl => &self.xl,
            ElevationLevel::Xxl => &self.xxl,
        }
    }

    pub fn modern() -> Self {
        Self {
            none: ElevationToken::new(0.0, 0.0, 0.0),
            xs: ElevationToken::new(2.0, 1.0, 0.1),
            sm: ElevationToken::new(4.0, 2.0, 0.1),
            md: ElevationToken::new(8.0, 4.0, 0.15),
            lg: ElevationToken::new(16.0, 8.0, 0.2),
            xl: ElevationToken::new(24.0, 12.0, 0.25),
            xxl: ElevationToken::new(32.0, 16.0, 0.3),
        }
    }
}

impl Default for Elevation {
    fn default() -> Self {
        Self::modern()
    }
}
