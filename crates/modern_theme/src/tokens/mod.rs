//! Design tokens
//!
//! Tokens are the atomic values the design system is built from:
//! - Colors (global palette and semantic roles)
//! - Typography
//! - Spacing
//! - Elevation
//! - Materials
//! - Document colors

mod color;
mod document;
mod elevation;
mod material;
mod semantic;
mod spacing;
mod typography;

pub use color::*;
pub use document::*;
pub use elevation::*;
pub use material::*;
pub use semantic::*;
pub use spacing::*;
pub use typography::*;
