//! Modern Core
//!
//! Renderable descriptors shared between the token engine and whatever UI
//! layer draws with it:
//!
//! - [`Color`]: RGBA color with `f32` components in `[0, 1]`
//! - [`Font`] / [`FontWeight`]: point size plus weight
//! - [`Shadow`]: box shadow parameters
//!
//! Nothing in this crate knows about themes or brands. Backends convert these
//! into native paint and font objects.

pub mod color;
pub mod font;
pub mod shadow;

pub use color::Color;
pub use font::{Font, FontWeight};
pub use shadow::Shadow;
