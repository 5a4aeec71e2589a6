//! Brands
//!
//! A brand bundles everything themeable about a product identity: which
//! themes it supports, how the platform appearance maps onto them, and its
//! semantic colors, spacing, elevation and type scales.

use crate::error::{Result, ThemeError};
use crate::theme::{SystemThemeMapping, Theme};
use crate::tokens::{Elevation, FontTokens, SemanticColors, Spacing};
use serde::{Deserialize, Serialize};

/// A themeable product identity
///
/// Immutable once built; switching brands swaps the whole value.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Brand {
    name: String,
    themes: Vec<Theme>,
    system_theme_mapping: SystemThemeMapping,
    semantic_colors: SemanticColors,
    spacing: Spacing,
    elevation: Elevation,
    typography: FontTokens,
}

impl Brand {
    pub fn new(
        name: impl Into<String>,
        themes: Vec<Theme>,
        system_theme_mapping: SystemThemeMapping,
        semantic_colors: SemanticColors,
        spacing: Spacing,
        elevation: Elevation,
        typography: FontTokens,
    ) -> Result<Self> {
        let name = name.into();
        if themes.is_empty() {
            return Err(ThemeError::NoThemes { brand: name });
        }
        Ok(Self {
            name,
            themes,
            system_theme_mapping,
            semantic_colors,
            spacing,
            elevation,
            typography,
        })
    }

    /// The default "Modern" brand
    pub fn modern() -> Self {
        Self {
            name: "Modern".to_string(),
            themes: vec![Theme::Light, Theme::Dark],
            system_theme_mapping: SystemThemeMapping::default(),
            semantic_colors: SemanticColors::modern(),
            spacing: Spacing::modern(),
            elevation: Elevation::modern(),
            typography: FontTokens::modern(),
        }
    }

    /// Parse a brand definition
    ///
    /// ```toml
    /// name = "Harbor"
    /// themes = ["dark"]
    ///
    /// [semantic_colors]
    /// primary_text = { light = "neutral900", dark = "neutral100" }
    /// # ... all sixteen roles
    /// ```
    ///
    /// `themes`, `system_theme_mapping`, `spacing`, `elevation` and
    /// `typography` fall back to the Modern values when omitted.
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let def: BrandDefinition = toml::from_str(src)?;
        let brand = Self::new(
            def.name,
            def.themes,
            def.system_theme_mapping,
            def.semantic_colors,
            def.spacing,
            def.elevation,
            def.typography,
        )?;
        tracing::debug!("Brand::from_toml_str - loaded brand '{}'", brand.name);
        Ok(brand)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Supported themes, never empty
    pub fn themes(&self) -> &[Theme] {
        &self.themes
    }

    pub fn supports(&self, theme: Theme) -> bool {
        self.themes.contains(&theme)
    }

    /// The theme used when a preference is not supported
    pub fn default_theme(&self) -> Theme {
        self.themes[0]
    }

    pub fn system_theme_mapping(&self) -> SystemThemeMapping {
        self.system_theme_mapping
    }

    pub fn semantic_colors(&self) -> &SemanticColors {
        &self.semantic_colors
    }

    pub fn spacing(&self) -> &Spacing {
        &self.spacing
    }

    pub fn elevation(&self) -> &Elevation {
        &self.elevation
    }

    pub fn typography(&self) -> &FontTokens {
        &self.typography
    }
}

impl Default for Brand {
    fn default() -> Self {
        Self::modern()
    }
}

#[derive(Deserialize)]
struct BrandDefinition {
    name: String,
    #[serde(default = "all_themes")]
    themes: Vec<Theme>,
    #[serde(default)]
    system_theme_mapping: SystemThemeMapping,
    semantic_colors: SemanticColors,
    #[serde(default)]
    spacing: Spacing,
    #[serde(default)]
    elevation: Elevation,
    #[serde(default)]
    typography: FontTokens,
}

fn all_themes() -> Vec<Theme> {
    Theme::all().to_vec()
}
