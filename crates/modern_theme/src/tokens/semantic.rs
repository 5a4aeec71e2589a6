//! Semantic color tokens
//!
//! A semantic token names a purpose ("primary text") and points at one global
//! palette entry per theme. Brands differ by how they wire these pointers.

use super::color::{ColorRamp, ColorStep, GlobalColorPath};
use crate::theme::Theme;
use serde::{Deserialize, Serialize};

/// A pair of palette references, one per theme
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct SemanticColorToken {
    pub light: GlobalColorPath,
    pub dark: GlobalColorPath,
}

impl SemanticColorToken {
    pub const fn new(light: GlobalColorPath, dark: GlobalColorPath) -> Self {
        Self { light, dark }
    }

    /// The palette reference used under `theme`
    pub fn for_theme(&self, theme: Theme) -> GlobalColorPath {
        match theme {
            Theme::Light => self.light,
            Theme::Dark => self.dark,
        }
    }

    /// Default reference before a theme is known (the light one)
    pub fn path(&self) -> GlobalColorPath {
        self.light
    }
}

/// Semantic color role keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticRole {
    // Backgrounds
    PrimaryBackground,
    SecondaryBackground,
    TertiaryBackground,

    // Text
    PrimaryText,
    SecondaryText,
    TertiaryText,
    QuaternaryText,

    // Interactive
    Primary,
    Secondary,
    Accent,

    // Status
    Success,
    Warning,
    Error,
    Info,

    // Borders
    PrimaryBorder,
    SecondaryBorder,
}

impl SemanticRole {
    pub fn all() -> &'static [SemanticRole] {
        const ROLES: [SemanticRole; 16] = [
            SemanticRole::PrimaryBackground,
            SemanticRole::SecondaryBackground,
            SemanticRole::TertiaryBackground,
            SemanticRole::PrimaryText,
            SemanticRole::SecondaryText,
            SemanticRole::TertiaryText,
            SemanticRole::QuaternaryText,
            SemanticRole::Primary,
            SemanticRole::Secondary,
            SemanticRole::Accent,
            SemanticRole::Success,
            SemanticRole::Warning,
            SemanticRole::Error,
            SemanticRole::Info,
            SemanticRole::PrimaryBorder,
            SemanticRole::SecondaryBorder,
        ];
        &ROLES
    }
}

/// Complete set of semantic color tokens for one brand
#[derive(Clone, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct SemanticColors {
    // Backgrounds
    pub primary_background: SemanticColorToken,
    pub secondary_background: SemanticColorToken,
    pub tertiary_background: SemanticColorToken,

    // Text
    pub primary_text: SemanticColorToken,
    pub secondary_text: SemanticColorToken,
    pub tertiary_text: SemanticColorToken,
    pub quaternary_text: SemanticColorToken,

    // Interactive
    pub primary: SemanticColorToken,
    pub secondary: SemanticColorToken,
    pub accent: SemanticColorToken,

    // Status
    pub success: SemanticColorToken,
    pub warning: SemanticColorToken,
    pub error: SemanticColorToken,
    pub info: SemanticColorToken,

    // Borders
    pub primary_border: SemanticColorToken,
    pub secondary_border: SemanticColorToken,
}

impl SemanticColors {
    /// Get a semantic token by role
    pub fn get(&self, role: SemanticRole) -> &SemanticColorToken {
        match role {
            SemanticRole::PrimaryBackground => &self.primary_background,
            SemanticRole::SecondaryBackground => &self.secondary_background,
            SemanticRole::TertiaryBackground => &self.tertiary_background,
            SemanticRole::PrimaryText => &self.primary_text,
            SemanticRole::SecondaryText => &self.secondary_text,
            SemanticRole::TertiaryText => &self.tertiary_text,
            SemanticRole::QuaternaryText => &self.quaternary_text,
            SemanticRole::Primary => &self.primary,
            SemanticRole::Secondary => &self.secondary,
            SemanticRole::Accent => &self.accent,
            SemanticRole::Success => &self.success,
            SemanticRole::Warning => &self.warning,
            SemanticRole::Error => &self.error,
            SemanticRole::Info => &self.info,
            SemanticRole::PrimaryBorder => &self.primary_border,
            SemanticRole::SecondaryBorder => &self.secondary_border,
        }
    }

    /// Every palette reference used by these tokens, both themes
    pub fn paths(&self) -> impl Iterator<Item = GlobalColorPath> + '_ {
        SemanticRole::all().iter().flat_map(move |&role| {
            let token = self.get(role);
            [token.light, token.dark]
        })
    }

    /// The default "Modern" wiring
    pub fn modern() -> Self {
        use ColorRamp::*;
        use ColorStep::*;

        let token = |light: GlobalColorPath, dark: GlobalColorPath| {
            SemanticColorToken::new(light, dark)
        };

        Self {
            primary_background: token(Neutral.at(S100), Neutral.at(S900)),
            secondary_background: token(Neutral.at(S200), Neutral.at(S800)),
            tertiary_background: token(Neutral.at(S300), Neutral.at(S700)),
            primary_text: token(Neutral.at(S900), Neutral.at(S100)),
            secondary_text: token(Neutral.at(S700), Neutral.at(S300)),
            tertiary_text: token(Neutral.at(S600), Neutral.at(S400)),
            quaternary_text: token(Neutral.at(S500), Neutral.at(S500)),
            primary: token(Primary.at(S500), Primary.at(S400)),
            secondary: token(Secondary.at(S500), Secondary.at(S400)),
            accent: token(Primary.at(S600), Primary.at(S300)),
            success: token(Success.at(S500), Success.at(S400)),
            warning: token(Warning.at(S500), Warning.at(S400)),
            error: token(Error.at(S500), Error.at(S400)),
            info: token(Primary.at(S500), Primary.at(S400)),
            primary_border: token(Neutral.at(S400), Neutral.at(S600)),
            secondary_border: token(Neutral.at(S300), Neutral.at(S700)),
        }
    }
}

impl Default for SemanticColors {
    fn default() -> Self {
        Self::modern()
    }
}
