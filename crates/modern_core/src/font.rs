//! Font descriptor

use serde::{Deserialize, Serialize};

/// Font weight, lightest to heaviest
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FontWeight {
    UltraLight,
    Thin,
    Light,
    #[default]
    Regular,
    Medium,
    Semibold,
    Bold,
    Heavy,
    Black,
}

impl FontWeight {
    /// CSS-style numeric weight (100..=900)
    pub fn numeric(self) -> u16 {
        match self {
            FontWeight::UltraLight => 100,
            FontWeight::Thin => 200,
            FontWeight::Light => 300,
            FontWeight::Regular => 400,
            FontWeight::Medium => 500,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
            FontWeight::Heavy => 800,
            FontWeight::Black => 900,
        }
    }

    pub fn all() -> &'static [FontWeight] {
        const WEIGHTS: [FontWeight; 9] = [
            FontWeight::UltraLight,
            FontWeight::Thin,
            FontWeight::Light,
            FontWeight::Regular,
            FontWeight::Medium,
            FontWeight::Semibold,
            FontWeight::Bold,
            FontWeight::Heavy,
            FontWeight::Black,
        ];
        &WEIGHTS
    }
}

/// A system font at a concrete point size
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub size: f32,
    pub weight: FontWeight,
}

impl Font {
    pub const fn new(size: f32, weight: FontWeight) -> Self {
        Self { size, weight }
    }
}
