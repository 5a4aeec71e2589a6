//! Document state and file-type colors
//!
//! Extra semantic tokens used by document browsers. They sit outside a brand's
//! [`SemanticColors`](super::SemanticColors) and are resolved directly through
//! the design system.

use super::color::{ColorRamp, ColorStep};
use super::semantic::SemanticColorToken;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a document
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentState {
    /// Newly created, never saved
    New,
    /// Has unsaved changes
    Modified,
    /// Saved and synced
    Synced,
    Error,
}

impl DocumentState {
    pub fn token(self) -> SemanticColorToken {
        use ColorStep::{S400, S500};
        let ramp = match self {
            DocumentState::New => ColorRamp::Primary,
            DocumentState::Modified => ColorRamp::Warning,
            DocumentState::Synced => ColorRamp::Success,
            DocumentState::Error => ColorRamp::Error,
        };
        SemanticColorToken::new(ramp.at(S500), ramp.at(S400))
    }
}

/// File type category of a document
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Pdf,
    /// Word, Excel, PowerPoint
    Office,
    /// Pages, Numbers, Keynote
    Apple,
    Image,
    Unknown,
}

impl DocumentKind {
    pub fn token(self) -> SemanticColorToken {
        use ColorStep::{S400, S500};
        let ramp = match self {
            DocumentKind::Pdf => ColorRamp::Error,
            DocumentKind::Office => ColorRamp::Primary,
            DocumentKind::Apple => ColorRamp::Secondary,
            DocumentKind::Image => ColorRamp::Success,
            DocumentKind::Unknown => {
                let neutral = ColorRamp::Neutral.at(S500);
                return SemanticColorToken::new(neutral, neutral);
            }
        };
        SemanticColorToken::new(ramp.at(S500), ramp.at(S400))
    }

    /// Classify a file by its extension (case-insensitive, without the dot)
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => DocumentKind::Pdf,
            "doc" | "docx" | "xls" | "xlsx" | "ppt" | "pptx" => DocumentKind::Office,
            "pages" | "numbers" | "key" => DocumentKind::Apple,
            "png" | "jpg" | "jpeg" | "gif" | "heic" | "webp" | "tiff" | "bmp" => {
                DocumentKind::Image
            }
            _ => DocumentKind::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_tokens() {
        let modified = DocumentState::Modified.token();
        assert_eq!(modified.light.to_string(), "warning500");
        assert_eq!(modified.dark.to_string(), "warning400");
    }

    #[test]
    fn test_unknown_kind_is_neutral_in_both_themes() {
        let token = DocumentKind::Unknown.token();
        assert_eq!(token.light, token.dark);
        assert_eq!(token.light.to_string(), "neutral500");
    }

    #[test]
    fn test_from_extension() {
        assert_eq!(DocumentKind::from_extension("PDF"), DocumentKind::Pdf);
        assert_eq!(DocumentKind::from_extension("xlsx"), DocumentKind::Office);
        assert_eq!(DocumentKind::from_extension("key"), DocumentKind::Apple);
        assert_eq!(DocumentKind::from_extension("heic"), DocumentKind::Image);
        assert_eq!(DocumentKind::from_extension("rs"), DocumentKind::Unknown);
    }
}
