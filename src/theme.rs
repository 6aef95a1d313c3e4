//! Cosmetic themes
//!
//! Selecting a theme never touches simulation state; the session only
//! remembers the choice and reports it in snapshots.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Theme {
    #[default]
    Classic,
    Space,
    Underwater,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Classic, Theme::Space, Theme::Underwater];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Classic => "Classic",
            Theme::Space => "Space",
            Theme::Underwater => "Underwater",
        }
    }

    pub fn from_name(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Some(Theme::Classic),
            "space" => Some(Theme::Space),
            "underwater" => Some(Theme::Underwater),
            _ => None,
        }
    }

    /// Glyph drawn for the player
    pub fn bird(&self) -> &'static str {
        match self {
            Theme::Classic => "🐓",
            Theme::Space => "🚀",
            Theme::Underwater => "🐠",
        }
    }

    /// CSS background
    pub fn background(&self) -> &'static str {
        match self {
            Theme::Classic => "linear-gradient(180deg, #4dc9ff 0%, #74e7ff 100%)",
            Theme::Space => "linear-gradient(180deg, #000000 0%, #434343 100%)",
            Theme::Underwater => "linear-gradient(180deg, #0077be 0%, #00a9ff 100%)",
        }
    }

    pub fn pipe_color(&self) -> &'static str {
        match self {
            Theme::Classic => "#43a047",
            Theme::Space => "#c0c0c0",
            Theme::Underwater => "#008080",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_name(theme.as_str()), Some(theme));
        }
        assert_eq!(Theme::from_name(" SPACE "), Some(Theme::Space));
        assert_eq!(Theme::from_name("Volcano"), None);
    }

    #[test]
    fn test_palette() {
        assert_eq!(Theme::default(), Theme::Classic);
        assert_eq!(Theme::Underwater.pipe_color(), "#008080");
        assert_eq!(Theme::Space.bird(), "🚀");
    }
}
