//! Themes, platform appearance and the mapping between them

use crate::error::ThemeError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Light/dark signal reported by the platform
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Appearance {
    #[default]
    Light,
    Dark,
}

impl Appearance {
    pub fn is_dark(self) -> bool {
        matches!(self, Appearance::Dark)
    }
}

/// The resolved theme used for semantic color lookups
#[derive(Clone, Copy, Debug, Default, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Stable id for persistence
    pub fn id(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// User-facing name
    pub fn name(self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }

    /// The platform appearance this theme renders as
    pub fn appearance(self) -> Appearance {
        match self {
            Theme::Light => Appearance::Light,
            Theme::Dark => Appearance::Dark,
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn all() -> &'static [Theme] {
        &[Theme::Light, Theme::Dark]
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeError::UnknownTheme(other.to_string())),
        }
    }
}

/// Maps the platform appearance to one of a brand's themes
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct SystemThemeMapping {
    pub light: Theme,
    pub dark: Theme,
}

impl SystemThemeMapping {
    pub const fn new(light: Theme, dark: Theme) -> Self {
        Self { light, dark }
    }

    pub fn theme(&self, appearance: Appearance) -> Theme {
        match appearance {
            Appearance::Light => self.light,
            Appearance::Dark => self.dark,
        }
    }

    /// Whether every appearance maps onto its same-named theme
    pub fn is_identity(&self) -> bool {
        self.light == Theme::Light && self.dark == Theme::Dark
    }
}

impl Default for SystemThemeMapping {
    fn default() -> Self {
        Self::new(Theme::Light, Theme::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_ids_and_names() {
        assert_eq!(Theme::Light.id(), "light");
        assert_eq!(Theme::Dark.name(), "Dark");
        assert_eq!(Theme::Dark.appearance(), Appearance::Dark);
        assert_eq!(Theme::all().len(), 2);
    }

    #[test]
    fn test_toggle_flips_appearance() {
        assert_eq!(Theme::Light.toggle(), Theme::Dark);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
        assert!(Theme::Light.toggle().appearance().is_dark());
        assert!(!Appearance::default().is_dark());
    }

    #[test]
    fn test_theme_parse() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert!(matches!(
            "sepia".parse::<Theme>(),
            Err(ThemeError::UnknownTheme(s)) if s == "sepia"
        ));
    }

    #[test]
    fn test_default_mapping_is_identity() {
        let mapping = SystemThemeMapping::default();
        assert!(mapping.is_identity());
        assert_eq!(mapping.theme(Appearance::Light), Theme::Light);
        assert_eq!(mapping.theme(Appearance::Dark), Theme::Dark);
    }

    #[test]
    fn test_custom_mapping() {
        let always_dark = SystemThemeMapping::new(Theme::Dark, Theme::Dark);
        assert!(!always_dark.is_identity());
        assert_eq!(always_dark.theme(Appearance::Light), Theme::Dark);
    }
}
