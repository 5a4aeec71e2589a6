//! Shadow descriptor

use crate::Color;
use serde::{Deserialize, Serialize};

/// Shadow configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub spread: f32,
    pub color: Color,
}

impl Shadow {
    pub const fn new(offset_x: f32, offset_y: f32, blur: f32, color: Color) -> Self {
        Self {
            offset_x,
            offset_y,
            blur,
            spread: 0.0,
            color,
        }
    }

    pub const fn none() -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            blur: 0.0,
            spread: 0.0,
            color: Color::TRANSPARENT,
        }
    }

    /// Whether this shadow would draw anything
    pub fn is_visible(&self) -> bool {
        self.color.a > 0.0 && (self.blur > 0.0 || self.offset_x != 0.0 || self.offset_y != 0.0)
    }
}
