//! Typography tokens

use modern_core::{Font, FontWeight};
use serde::{Deserialize, Serialize};

/// Horizontal or vertical size class reported by the platform
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeClass {
    Compact,
    Regular,
}

/// Size class hints used to scale fonts on small layouts
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq)]
pub struct SizeClassHints {
    pub vertical: Option<SizeClass>,
    pub horizontal: Option<SizeClass>,
}

impl SizeClassHints {
    pub const fn new(vertical: Option<SizeClass>, horizontal: Option<SizeClass>) -> Self {
        Self {
            vertical,
            horizontal,
        }
    }

    /// Compact vertical wins over compact horizontal
    pub fn scale_factor(&self) -> f32 {
        match (self.vertical, self.horizontal) {
            (Some(SizeClass::Compact), _) => 0.9,
            (_, Some(SizeClass::Compact)) => 0.95,
            _ => 1.0,
        }
    }
}

/// A single entry of the type scale
///
/// Line height and letter spacing are carried for callers; [`FontToken::font`]
/// only applies size and weight.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontToken {
    pub size: f32,
    pub weight: FontWeight,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_height: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter_spacing: Option<f32>,
}

impl FontToken {
    pub const fn new(size: f32, weight: FontWeight) -> Self {
        Self {
            size,
            weight,
            line_height: None,
            letter_spacing: None,
        }
    }

    pub const fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = Some(line_height);
        self
    }

    pub const fn with_letter_spacing(mut self, letter_spacing: f32) -> Self {
        self.letter_spacing = Some(letter_spacing);
        self
    }

    /// Renderable font, scaled for the given size classes
    pub fn font(&self, hints: SizeClassHints) -> Font {
        Font::new(self.size * hints.scale_factor(), self.weight)
    }
}

/// Type scale keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontRole {
    DisplayLarge,
    DisplayMedium,
    DisplaySmall,
    HeadlineLarge,
    HeadlineMedium,
    HeadlineSmall,
    TitleLarge,
    TitleMedium,
    TitleSmall,
    LabelLarge,
    LabelMedium,
    LabelSmall,
    BodyLarge,
    BodyMedium,
    BodySmall,
    CaptionLarge,
    CaptionMedium,
    CaptionSmall,
}

impl FontRole {
    pub fn all() -> &'static [FontRole] {
        const ROLES: [FontRole; 18] = [
            FontRole::DisplayLarge,
            FontRole::DisplayMedium,
            FontRole::DisplaySmall,
            FontRole::HeadlineLarge,
            FontRole::HeadlineMedium,
            FontRole::HeadlineSmall,
            FontRole::TitleLarge,
            FontRole::TitleMedium,
            FontRole::TitleSmall,
            FontRole::LabelLarge,
            FontRole::LabelMedium,
            FontRole::LabelSmall,
            FontRole::BodyLarge,
            FontRole::BodyMedium,
            FontRole::BodySmall,
            FontRole::CaptionLarge,
            FontRole::CaptionMedium,
            FontRole::CaptionSmall,
        ];
        &ROLES
    }
}

/// Complete type scale
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FontTokens {
    pub display_large: FontToken,
    pub display_medium: FontToken,
    pub display_small: FontToken,

    pub headline_large: FontToken,
    pub headline_medium: FontToken,
    pub headline_small: FontToken,

    pub title_large: FontToken,
    pub title_medium: FontToken,
    pub title_small: FontToken,

    pub label_large: FontToken,
    pub label_medium: FontToken,
    pub label_small: FontToken,

    pub body_large: FontToken,
    pub body_medium: FontToken,
    pub body_small: FontToken,

    pub caption_large: FontToken,
    pub caption_medium: FontToken,
    pub caption_small: FontToken,
}

impl FontTokens {
    /// Get a font token by role
    pub fn get(&self, role: FontRole) -> &FontToken {
        match role {
            FontRole::DisplayLarge => &self.display_large,
            FontRole::DisplayMedium => &self.display_medium,
            FontRole::DisplaySmall => &self.display_small,
            FontRole::HeadlineLarge => &self.headline_large,
            FontRole::HeadlineMedium => &self.headline_medium,
            FontRole::HeadlineSmall => &self.headline_small,
            FontRole::TitleLarge => &self.title_large,
            FontRole::TitleMedium => &self.title_medium,
            FontRole::TitleSmall => &self.title_small,
            FontRole::LabelLarge => &self.label_large,
            FontRole::LabelMedium => &self.label_medium,
            FontRole::LabelSmall => &self.label_small,
            FontRole::BodyLarge => &self.body_large,
            FontRole::BodyMedium => &self.body_medium,
            FontRole::BodySmall => &self.body_small,
            FontRole::CaptionLarge => &self.caption_large,
            FontRole::CaptionMedium => &self.caption_medium,
            FontRole::CaptionSmall => &self.caption_small,
        }
    }

    pub fn modern() -> Self {
        use FontWeight::{Medium, Regular};
        let t = |size: f32, weight: FontWeight, line_height: f32| {
            FontToken::new(size, weight).with_line_height(line_height)
        };

        Self {
            display_large: t(57.0, Regular, 64.0),
            display_medium: t(45.0, Regular, 52.0),
            display_small: t(36.0, Regular, 44.0),
            headline_large: t(32.0, Regular, 40.0),
            headline_medium: t(28.0, Regular, 36.0),
            headline_small: t(24.0, Regular, 32.0),
            title_large: t(22.0, Regular, 28.0),
            title_medium: t(16.0, Medium, 24.0),
            title_small: t(14.0, Medium, 20.0),
            label_large: t(14.0, Medium, 20.0),
            label_medium: t(12.0, Medium, 16.0),
            label_small: t(11.0, Medium, 16.0),
            body_large: t(16.0, Regular, 24.0),
            body_medium: t(14.0, Regular, 20.0),
            body_small: t(12.0, Regular, 16.0),
            caption_large: t(12.0, Regular, 16.0),
            caption_medium: t(11.0, Regular, 16.0),
            caption_small: t(10.0, Regular, 14.0),
        }
    }
}

impl Default for FontTokens {
    fn default() -> Self {
        Self::modern()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COMPACT: Option<SizeClass> = Some(SizeClass::Compact);
    const REGULAR: Option<SizeClass> = Some(SizeClass::Regular);

    #[test]
    fn test_scale_factor_precedence() {
        assert_eq!(SizeClassHints::new(COMPACT, COMPACT).scale_factor(), 0.9);
        assert_eq!(SizeClassHints::new(COMPACT, REGULAR).scale_factor(), 0.9);
        assert_eq!(SizeClassHints::new(REGULAR, COMPACT).scale_factor(), 0.95);
        assert_eq!(SizeClassHints::new(None, COMPACT).scale_factor(), 0.95);
        assert_eq!(SizeClassHints::new(REGULAR, REGULAR).scale_factor(), 1.0);
        assert_eq!(SizeClassHints::default().scale_factor(), 1.0);
    }

    #[test]
    fn test_font_scaling() {
        let token = FontToken::new(16.0, FontWeight::Medium);

        let compact = token.font(SizeClassHints::new(COMPACT, None));
        assert!((compact.size - 14.4).abs() < 1e-4);
        assert_eq!(compact.weight, FontWeight::Medium);

        let unscaled = token.font(SizeClassHints::default());
        assert_eq!(unscaled.size, 16.0);
    }

    #[test]
    fn test_spacing_metrics_do_not_affect_font() {
        let token = FontToken::new(11.0, FontWeight::Medium)
            .with_line_height(16.0)
            .with_letter_spacing(0.5);
        assert_eq!(token.line_height, Some(16.0));
        assert_eq!(token.letter_spacing, Some(0.5));
        assert_eq!(token.font(SizeClassHints::default()).size, 11.0);
    }

    #[test]
    fn test_modern_scale_shrinks_within_groups() {
        let scale = FontTokens::modern();
        for group in FontRole::all().chunks(3) {
            let sizes: Vec<f32> = group.iter().map(|&r| scale.get(r).size).collect();
            assert!(sizes[0] >= sizes[1] && sizes[1] >= sizes[2], "{group:?}");
        }
        assert_eq!(scale.get(FontRole::BodyLarge).line_height, Some(24.0));
        assert_eq!(scale.get(FontRole::BodyLarge).letter_spacing, None);
    }
}
