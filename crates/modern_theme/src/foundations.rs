//! Design foundations: the brand-independent global palette

use crate::error::Result;
use crate::tokens::GlobalColors;
use serde::{Deserialize, Serialize};

/// Named container for the global palette
///
/// Swappable independently of the brand, which re-skins every semantic color
/// without touching the semantic wiring.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DesignFoundations {
    pub name: String,
    #[serde(rename = "colors")]
    pub global_colors: GlobalColors,
}

impl DesignFoundations {
    pub fn new(name: impl Into<String>, global_colors: GlobalColors) -> Self {
        Self {
            name: name.into(),
            global_colors,
        }
    }

    pub fn modern() -> Self {
        Self::new("Modern", GlobalColors::modern())
    }

    /// Parse a palette definition
    ///
    /// ```toml
    /// name = "Ember"
    ///
    /// [colors]
    /// primary100 = { red = 1.0, green = 0.95, blue = 0.9 }
    /// # ... all 54 ramp steps
    /// ```
    pub fn from_toml_str(src: &str) -> Result<Self> {
        let foundations: DesignFoundations = toml::from_str(src)?;
        tracing::debug!(
            "DesignFoundations::from_toml_str - loaded palette '{}'",
            foundations.name
        );
        Ok(foundations)
    }

    pub fn to_toml_string(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string(self)
    }
}

impl Default for DesignFoundations {
    fn default() -> Self {
        Self::modern()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;

    #[test]
    fn test_toml_round_trip() {
        let src = DesignFoundations::modern().to_toml_string().unwrap();
        assert!(src.contains("[colors"));
        let parsed = DesignFoundations::from_toml_str(&src).unwrap();
        assert_eq!(parsed, DesignFoundations::modern());
    }

    #[test]
    fn test_incomplete_palette_is_a_config_error() {
        let src = r#"
            name = "Tiny"

            [colors]
            primary100 = { red = 1.0, green = 1.0, blue = 1.0 }
        "#;
        let err = DesignFoundations::from_toml_str(src).unwrap_err();
        assert!(matches!(err, ThemeError::Config(_)));
        assert!(err.to_string().contains("missing"), "{err}");
    }
}
