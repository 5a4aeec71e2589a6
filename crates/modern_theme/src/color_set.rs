//! Color sets
//!
//! A color set is a self-contained seven-color palette (tint, two backgrounds,
//! four label levels). The gallery is fixed: six hues, each in a light and a
//! dark variant. Color sets are independent of brands and semantic colors.

use crate::error::ThemeError;
use crate::theme::Appearance;
use crate::tokens::ColorToken;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The twelve built-in color sets
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ColorSetName {
    #[default]
    #[serde(rename = "Modern Blue")]
    ModernBlue,
    #[serde(rename = "Modern Blue - Dark")]
    ModernBlueDark,
    #[serde(rename = "Ocean Breeze")]
    OceanBreeze,
    #[serde(rename = "Ocean Breeze - Dark")]
    OceanBreezeDark,
    #[serde(rename = "Forest Green")]
    ForestGreen,
    #[serde(rename = "Forest Green - Dark")]
    ForestGreenDark,
    #[serde(rename = "Sunset Orange")]
    SunsetOrange,
    #[serde(rename = "Sunset Orange - Dark")]
    SunsetOrangeDark,
    #[serde(rename = "Deep Purple")]
    DeepPurple,
    #[serde(rename = "Deep Purple - Dark")]
    DeepPurpleDark,
    #[serde(rename = "Charcoal")]
    Charcoal,
    #[serde(rename = "Charcoal - Dark")]
    CharcoalDark,
}

impl ColorSetName {
    /// User-facing name, also the persisted value
    pub fn display_name(self) -> &'static str {
        self.preset().display_name
    }

    /// Full gallery, in picker order
    pub fn all() -> &'static [ColorSetName] {
        const NAMES: [ColorSetName; 12] = [
            ColorSetName::ModernBlue,
            ColorSetName::ModernBlueDark,
            ColorSetName::OceanBreeze,
            ColorSetName::OceanBreezeDark,
            ColorSetName::ForestGreen,
            ColorSetName::ForestGreenDark,
            ColorSetName::SunsetOrange,
            ColorSetName::SunsetOrangeDark,
            ColorSetName::DeepPurple,
            ColorSetName::DeepPurpleDark,
            ColorSetName::Charcoal,
            ColorSetName::CharcoalDark,
        ];
        &NAMES
    }

    pub fn from_name(name: &str) -> Option<Self> {
        PRESETS
            .iter()
            .find(|preset| preset.display_name == name)
            .map(|preset| preset.name)
    }

    /// Build the color set for this name
    pub fn color_set(self) -> ColorSet {
        self.preset().build()
    }

    fn preset(self) -> &'static Preset {
        &PRESETS[self as usize]
    }
}

impl Display for ColorSetName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for ColorSetName {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| ThemeError::UnknownColorSet(s.to_string()))
    }
}

/// A resolved color set
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ColorSet {
    pub name: ColorSetName,
    pub scheme: Appearance,
    pub tint: ColorToken,
    pub primary_background: ColorToken,
    pub secondary_background: ColorToken,
    pub label: ColorToken,
    pub secondary_label: ColorToken,
    pub tertiary_label: ColorToken,
    pub quaternary_label: ColorToken,
}

/// Every color set in the gallery
pub fn available_color_sets() -> Vec<ColorSet> {
    ColorSetName::all()
        .iter()
        .map(|name| name.color_set())
        .collect()
}

/// Look up a color set by display name, falling back to Modern Blue
pub fn color_set_named(name: &str) -> ColorSet {
    match ColorSetName::from_name(name) {
        Some(found) => found.color_set(),
        None => {
            tracing::debug!("color_set_named - no color set '{}', using Modern Blue", name);
            ColorSetName::ModernBlue.color_set()
        }
    }
}

/// One gallery row: hex colors, with an opacity for the label levels
struct Preset {
    name: ColorSetName,
    display_name: &'static str,
    scheme: Appearance,
    tint: u32,
    primary_background: u32,
    secondary_background: u32,
    label: u32,
    secondary_label: (u32, f32),
    tertiary_label: (u32, f32),
    quaternary_label: (u32, f32),
}

impl Preset {
    fn build(&self) -> ColorSet {
        let label = |(hex, opacity): (u32, f32)| ColorToken::from_hex(hex).with_opacity(opacity);
        ColorSet {
            name: self.name,
            scheme: self.scheme,
            tint: ColorToken::from_hex(self.tint),
            primary_background: ColorToken::from_hex(self.primary_background),
            secondary_background: ColorToken::from_hex(self.secondary_background),
            label: ColorToken::from_hex(self.label),
            secondary_label: label(self.secondary_label),
            tertiary_label: label(self.tertiary_label),
            quaternary_label: label(self.quaternary_label),
        }
    }
}

// Rows are in `ColorSetName` declaration order.
const PRESETS: [Preset; 12] = [
    Preset {
        name: ColorSetName::ModernBlue,
        display_name: "Modern Blue",
        scheme: Appearance::Light,
        tint: 0x007AFF,
        primary_background: 0xFFFFFF,
        secondary_background: 0xF2F2F7,
        label: 0x000000,
        secondary_label: (0x3C3C43, 0.6),
        tertiary_label: (0x3C3C43, 0.3),
        quaternary_label: (0x3C3C43, 0.18),
    },
    Preset {
        name: ColorSetName::ModernBlueDark,
        display_name: "Modern Blue - Dark",
        scheme: Appearance::Dark,
        tint: 0x0A84FF,
        primary_background: 0x000000,
        secondary_background: 0x1C1C1E,
        label: 0xFFFFFF,
        secondary_label: (0xEBEBF5, 0.6),
        tertiary_label: (0xEBEBF5, 0.3),
        quaternary_label: (0xEBEBF5, 0.16),
    },
    Preset {
        name: ColorSetName::OceanBreeze,
        display_name: "Ocean Breeze",
        scheme: Appearance::Light,
        tint: 0x00B4D8,
        primary_background: 0xF8FDFF,
        secondary_background: 0xE6F7FF,
        label: 0x1A1A1A,
        secondary_label: (0x4A4A4A, 1.0),
        tertiary_label: (0x7A7A7A, 1.0),
        quaternary_label: (0xAAAAAA, 1.0),
    },
    Preset {
        name: ColorSetName::OceanBreezeDark,
        display_name: "Ocean Breeze - Dark",
        scheme: Appearance::Dark,
        tint: 0x48CAE4,
        primary_background: 0x0A1418,
        secondary_background: 0x152B33,
        label: 0xE6F7FF,
        secondary_label: (0xB5E5F0, 1.0),
        tertiary_label: (0x84D3E5, 1.0),
        quaternary_label: (0x53C1DA, 1.0),
    },
    Preset {
        name: ColorSetName::ForestGreen,
        display_name: "Forest Green",
        scheme: Appearance::Light,
        tint: 0x228B22,
        primary_background: 0xFAFFFA,
        secondary_background: 0xF0FFF0,
        label: 0x1A2E1A,
        secondary_label: (0x4A6A4A, 1.0),
        tertiary_label: (0x7AA67A, 1.0),
        quaternary_label: (0xAAC2AA, 1.0),
    },
    Preset {
        name: ColorSetName::ForestGreenDark,
        display_name: "Forest Green - Dark",
        scheme: Appearance::Dark,
        tint: 0x32CD32,
        primary_background: 0x0A1A0A,
        secondary_background: 0x1A331A,
        label: 0xF0FFF0,
        secondary_label: (0xC2E5C2, 1.0),
        tertiary_label: (0x94DB94, 1.0),
        quaternary_label: (0x66D166, 1.0),
    },
    Preset {
        name: ColorSetName::SunsetOrange,
        display_name: "Sunset Orange",
        scheme: Appearance::Light,
        tint: 0xFF6B35,
        primary_background: 0xFFFAF8,
        secondary_background: 0xFFF2ED,
        label: 0x2E1A14,
        secondary_label: (0x6A4A3A, 1.0),
        tertiary_label: (0xA67A60, 1.0),
        quaternary_label: (0xC2AA86, 1.0),
    },
    Preset {
        name: ColorSetName::SunsetOrangeDark,
        display_name: "Sunset Orange - Dark",
        scheme: Appearance::Dark,
        tint: 0xFF8C69,
        primary_background: 0x1A0A05,
        secondary_background: 0x33140A,
        label: 0xFFF2ED,
        secondary_label: (0xE5C2B3, 1.0),
        tertiary_label: (0xDB9279, 1.0),
        quaternary_label: (0xD1623F, 1.0),
    },
    Preset {
        name: ColorSetName::DeepPurple,
        display_name: "Deep Purple",
        scheme: Appearance::Light,
        tint: 0x6A4C93,
        primary_background: 0xFAF8FF,
        secondary_background: 0xF0EDFF,
        label: 0x1A142E,
        secondary_label: (0x4A3A6A, 1.0),
        tertiary_label: (0x7A60A6, 1.0),
        quaternary_label: (0xAA86C2, 1.0),
    },
    Preset {
        name: ColorSetName::DeepPurpleDark,
        display_name: "Deep Purple - Dark",
        scheme: Appearance::Dark,
        tint: 0x9A7BC8,
        primary_background: 0x0A051A,
        secondary_background: 0x140A33,
        label: 0xF0EDFF,
        secondary_label: (0xC2B3E5, 1.0),
        tertiary_label: (0x9479DB, 1.0),
        quaternary_label: (0x663FD1, 1.0),
    },
    Preset {
        name: ColorSetName::Charcoal,
        display_name: "Charcoal",
        scheme: Appearance::Light,
        tint: 0x36454F,
        primary_background: 0xF8F9FA,
        secondary_background: 0xEDEFF2,
        label: 0x1C1E21,
        secondary_label: (0x4C5459, 1.0),
        tertiary_label: (0x7C8A91, 1.0),
        quaternary_label: (0xACC0C9, 1.0),
    },
    Preset {
        name: ColorSetName::CharcoalDark,
        display_name: "Charcoal - Dark",
        scheme: Appearance::Dark,
        tint: 0x708090,
        primary_background: 0x0A0B0C,
        secondary_background: 0x1C1E21,
        label: 0xEDEFF2,
        secondary_label: (0xC9D6DE, 1.0),
        tertiary_label: (0xA5BCCA, 1.0),
        quaternary_label: (0x81A2B6, 1.0),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_matches_enum_order() {
        for (index, name) in ColorSetName::all().iter().enumerate() {
            assert_eq!(PRESETS[index].name, *name);
            assert_eq!(name.color_set().name, *name);
        }
    }

    #[test]
    fn test_names_round_trip() {
        for name in ColorSetName::all() {
            assert_eq!(ColorSetName::from_name(name.display_name()), Some(*name));
            assert_eq!(name.to_string().parse::<ColorSetName>().unwrap(), *name);
        }
    }

    #[test]
    fn test_unknown_name_falls_back_to_modern_blue() {
        let set = color_set_named("nonexistent-name");
        assert_eq!(set.name, ColorSetName::ModernBlue);
        assert_eq!(set.scheme, Appearance::Light);
        assert!("Neon".parse::<ColorSetName>().is_err());
    }

    #[test]
    fn test_six_hues_in_light_and_dark() {
        let sets = available_color_sets();
        assert_eq!(sets.len(), 12);
        let dark = sets.iter().filter(|s| s.scheme == Appearance::Dark).count();
        assert_eq!(dark, 6);
        for set in &sets {
            let dark_name = set.name.display_name().ends_with(" - Dark");
            assert_eq!(dark_name, set.scheme == Appearance::Dark, "{}", set.name);
        }
    }

    #[test]
    fn test_modern_blue_label_opacities() {
        let set = ColorSetName::ModernBlue.color_set();
        assert_eq!(set.tint, ColorToken::from_hex(0x007AFF));
        assert_eq!(set.secondary_label.opacity, 0.6);
        assert_eq!(set.quaternary_label.opacity, 0.18);
        assert_eq!(set.label.opacity, 1.0);
    }

    #[test]
    fn test_serde_uses_display_names() {
        let json = serde_json::to_string(&ColorSetName::OceanBreezeDark).unwrap();
        assert_eq!(json, "\"Ocean Breeze - Dark\"");
    }
}
