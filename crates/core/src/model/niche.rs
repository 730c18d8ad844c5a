use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A professional specialization a candidate can be vetted for.
///
/// The wire keys match the original intake form; note `contentwriting`
/// carries no hyphen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Niche {
    BackendDev,
    Contentwriting,
    Copywriting,
    FrontendDev,
    GraphicsDesign,
    ProductDesign,
    SocialMediaMgnt,
    VideoEditing,
    VirtualAssistant,
}

impl Niche {
    /// All known niches, in selection-screen order.
    pub const ALL: [Niche; 9] = [
        Niche::BackendDev,
        Niche::Copywriting,
        Niche::FrontendDev,
        Niche::Contentwriting,
        Niche::GraphicsDesign,
        Niche::ProductDesign,
        Niche::SocialMediaMgnt,
        Niche::VideoEditing,
        Niche::VirtualAssistant,
    ];

    /// Fallback niche used when a key is unrecognized.
    pub const DEFAULT: Niche = Niche::GraphicsDesign;

    /// Stable lookup key for this niche.
    #[must_use]
    pub fn key(&self) -> &'static str {
        match self {
            Niche::BackendDev => "backend-dev",
            Niche::Contentwriting => "contentwriting",
            Niche::Copywriting => "copywriting",
            Niche::FrontendDev => "frontend-dev",
            Niche::GraphicsDesign => "graphics-design",
            Niche::ProductDesign => "product-design",
            Niche::SocialMediaMgnt => "social-media-mgnt",
            Niche::VideoEditing => "video-editing",
            Niche::VirtualAssistant => "virtual-assistant",
        }
    }

    /// Display title as shown on the selection screen.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Niche::BackendDev => "Back-End Dev",
            Niche::Contentwriting => "Content Writing",
            Niche::Copywriting => "Copywriting",
            Niche::FrontendDev => "Front-End Dev",
            Niche::GraphicsDesign => "Graphics Design",
            Niche::ProductDesign => "Product design",
            Niche::SocialMediaMgnt => "Social Media Mgnt.",
            Niche::VideoEditing => "Video Editing",
            Niche::VirtualAssistant => "Virtual Assistant",
        }
    }

    /// Resolve a niche from a raw key.
    ///
    /// Keys are normalized the way the original intake derived them:
    /// lowercased, with whitespace runs collapsed to `-`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        let normalized = normalize_key(key);
        Niche::ALL
            .iter()
            .copied()
            .find(|niche| niche.key() == normalized)
    }

    /// Resolve a niche from a raw key, degrading to [`Niche::DEFAULT`]
    /// when the key is unrecognized.
    #[must_use]
    pub fn from_key_or_default(key: &str) -> Self {
        Self::from_key(key).unwrap_or(Self::DEFAULT)
    }
}

fn normalize_key(key: &str) -> String {
    key.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

impl fmt::Display for Niche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Error type for parsing a niche from a string key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseNicheError {
    key: String,
}

impl fmt::Display for ParseNicheError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown niche key: {}", self.key)
    }
}

impl std::error::Error for ParseNicheError {}

impl FromStr for Niche {
    type Err = ParseNicheError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Niche::from_key(s).ok_or_else(|| ParseNicheError { key: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_key_round_trips() {
        for niche in Niche::ALL {
            assert_eq!(Niche::from_key(niche.key()), Some(niche));
        }
    }

    #[test]
    fn keys_are_normalized_like_the_intake_form() {
        assert_eq!(Niche::from_key("Graphics Design"), Some(Niche::GraphicsDesign));
        assert_eq!(Niche::from_key("  backend-dev "), Some(Niche::BackendDev));
        assert_eq!(Niche::from_key("Social Media Mgnt."), None);
    }

    #[test]
    fn unknown_key_falls_back_to_default() {
        assert_eq!(Niche::from_key("brand-identity"), None);
        assert_eq!(
            Niche::from_key_or_default("brand-identity"),
            Niche::GraphicsDesign
        );
    }

    #[test]
    fn contentwriting_key_has_no_hyphen() {
        assert_eq!(Niche::Contentwriting.key(), "contentwriting");
        assert_eq!(Niche::from_key("contentwriting"), Some(Niche::Contentwriting));
    }

    #[test]
    fn parse_error_reports_offending_key() {
        let err = "devops".parse::<Niche>().unwrap_err();
        assert_eq!(err.to_string(), "unknown niche key: devops");
    }
}
