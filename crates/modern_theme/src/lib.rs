//! Modern Theme
//!
//! A design-token engine: brands, a global color palette and user theme
//! preferences, resolved into concrete colors, fonts, spacing and shadows.
//!
//! # Overview
//!
//! Colors go through three layers:
//!
//! - **Global colors**: a fixed palette of six ramps with nine steps each
//!   ([`GlobalColors`], wrapped by [`DesignFoundations`])
//! - **Semantic colors**: roles such as "primary text" that point at one
//!   palette entry per theme ([`SemanticColors`])
//! - **Brands**: a bundle of semantic colors, supported themes and layout
//!   scales ([`Brand`])
//!
//! Resolving a role picks the effective theme (platform appearance or the
//! user's explicit choice), selects that side of the semantic token, and
//! looks the path up in the palette. Every lookup is total.
//!
//! Color sets ([`ColorSet`]) are a separate, flat gallery of twelve palettes
//! that bypass the brand path entirely.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use modern_theme::{Appearance, DesignSystem, SemanticRole};
//!
//! // Initialize at app startup
//! DesignSystem::init_default();
//!
//! let system = DesignSystem::get();
//! let text = system.color(Some(SemanticRole::PrimaryText), Appearance::Dark, false);
//! ```
//!
//! # State
//!
//! [`DesignSystem`] publishes immutable [`DesignSnapshot`]s. Mutations swap in
//! a new snapshot, persist changed preferences through the injected
//! [`PreferenceStore`] and notify subscribers synchronously.

pub mod brand;
pub mod color_set;
pub mod error;
pub mod foundations;
pub mod preferences;
pub mod state;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use brand::Brand;
pub use color_set::{available_color_sets, color_set_named, ColorSet, ColorSetName};
pub use error::{Result, ThemeError};
pub use foundations::DesignFoundations;
pub use preferences::{MemoryPreferences, PreferenceKey, PreferenceStore, Preferences};
pub use state::{set_redraw_callback, DesignSnapshot, DesignSystem, SubscriptionId};
pub use theme::{Appearance, SystemThemeMapping, Theme};
pub use tokens::*;

pub use modern_core::{Color, Font, FontWeight, Shadow};
