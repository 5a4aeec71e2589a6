//! Translucent material presets

use serde::{Deserialize, Serialize};

/// Backdrop blur thickness
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialThickness {
    UltraThin,
    Regular,
    Thick,
}

/// Material style keys
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialStyle {
    /// Ultra-thin, high vibrancy
    Glass,
    Frosted,
    Subtle,
    Prominent,
}

impl MaterialStyle {
    pub fn thickness(self) -> MaterialThickness {
        match self {
            MaterialStyle::Glass => MaterialThickness::UltraThin,
            MaterialStyle::Frosted => MaterialThickness::Thick,
            MaterialStyle::Subtle => MaterialThickness::Regular,
            MaterialStyle::Prominent => MaterialThickness::Thick,
        }
    }

    pub fn opacity(self) -> f32 {
        match self {
            MaterialStyle::Glass => 0.9,
            MaterialStyle::Frosted => 0.8,
            MaterialStyle::Subtle => 0.5,
            MaterialStyle::Prominent => 0.95,
        }
    }

    pub fn all() -> &'static [MaterialStyle] {
        &[
            MaterialStyle::Glass,
            MaterialStyle::Frosted,
            MaterialStyle::Subtle,
            MaterialStyle::Prominent,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thickness_per_style() {
        assert_eq!(MaterialStyle::Glass.thickness(), MaterialThickness::UltraThin);
        assert_eq!(MaterialStyle::Frosted.thickness(), MaterialThickness::Thick);
        assert_eq!(MaterialStyle::Subtle.thickness(), MaterialThickness::Regular);
        assert_eq!(MaterialStyle::Prominent.thickness(), MaterialThickness::Thick);
    }

    #[test]
    fn test_opacity_per_style() {
        let opacities: Vec<f32> = MaterialStyle::all().iter().map(|s| s.opacity()).collect();
        assert_eq!(opacities, vec![0.9, 0.8, 0.5, 0.95]);
        for style in MaterialStyle::all() {
            assert!(style.opacity() > 0.0 && style.opacity() <= 1.0, "{:?}", style);
        }
    }
}
