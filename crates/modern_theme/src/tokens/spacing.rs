//! Spacing tokens

use serde::{Deserialize, Serialize};

/// Spacing token keys for dynamic access
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpacingToken {
    Xs,
    Sm,
    Md,
    Lg,
    Xl,
    Xxl,
    Xxxl,
}

/// Spacing scale in points
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Spacing {
    pub xs: f32,
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub xl: f32,
    pub xxl: f32,
    pub xxxl: f32,
}

impl Spacing {
    /// Get spacing value by token key
    pub fn get(&self, token: SpacingToken) -> f32 {
        match token {
            SpacingToken::Xs => self.xs,
            SpacingToken::Sm => self.sm,
            SpacingToken::Md => self.md,
            SpacingToken::Lg => self.lg,
            SpacingToken::Xl => self.xl,
            SpacingToken::Xxl => self.xxl,
            SpacingToken::Xxxl => self.xxxl,
        }
    }

    pub fn modern() -> Self {
        Self {
            xs: 4.0,
            sm: 8.0,
            md: 16.0,
            lg: 24.0,
            xl: 32.0,
            xxl: 48.0,
            xxxl: 64.0,
        }
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Self::modern()
    }
}
