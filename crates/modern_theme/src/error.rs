//! Theme error types

use crate::tokens::GlobalColorPath;
use thiserror::Error;

/// Errors raised while building or configuring the design system
///
/// Resolution never fails; these only surface at construction and when
/// loading definitions from configuration.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// A design system needs at least one brand
    #[error("design system requires at least one brand")]
    NoBrands,

    /// A brand needs at least one supported theme
    #[error("brand '{brand}' does not declare any themes")]
    NoThemes { brand: String },

    /// No registered brand has the requested name
    #[error("unknown brand: {0}")]
    UnknownBrand(String),

    /// A palette definition left out one of the global colors
    #[error("global palette is missing {0}")]
    MissingGlobalColor(GlobalColorPath),

    /// A palette definition named a color outside the ramps
    #[error("unknown global color: {0}")]
    UnknownGlobalColor(String),

    /// A string could not be parsed as `<ramp><step>`
    #[error("invalid global color path: {0}")]
    InvalidGlobalColorPath(String),

    /// Unrecognized theme id
    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    /// Unrecognized color set name
    #[error("unknown color set: {0}")]
    UnknownColorSet(String),

    /// Malformed TOML definition
    #[error("invalid theme configuration: {0}")]
    Config(#[from] toml::de::Error),
}

/// Result type for theme operations
pub type Result<T> = std::result::Result<T, ThemeError>;
