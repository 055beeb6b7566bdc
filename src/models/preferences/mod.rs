//! Appearance preference model.
//!
//! Three independent user-visible settings (theme, accent color, sidebar
//! style) plus their text round-trip used by the persistence layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Raised when a persisted preference value does not match any known variant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unrecognized {field} value '{value}'")]
pub struct ParsePreferenceError {
    pub field: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Light, Theme::Dark];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Human-readable label for settings UI.
    pub fn label(&self) -> &'static str {
        match self {
            Theme::Light => "Light",
            Theme::Dark => "Dark",
        }
    }
}

impl FromStr for Theme {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ParsePreferenceError {
                field: "theme",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentColor {
    #[default]
    Blue,
    Purple,
    Green,
    Orange,
    Red,
    Pink,
}

impl AccentColor {
    pub const ALL: [AccentColor; 6] = [
        AccentColor::Blue,
        AccentColor::Purple,
        AccentColor::Green,
        AccentColor::Orange,
        AccentColor::Red,
        AccentColor::Pink,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccentColor::Blue => "blue",
            AccentColor::Purple => "purple",
            AccentColor::Green => "green",
            AccentColor::Orange => "orange",
            AccentColor::Red => "red",
            AccentColor::Pink => "pink",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AccentColor::Blue => "Blue",
            AccentColor::Purple => "Purple",
            AccentColor::Green => "Green",
            AccentColor::Orange => "Orange",
            AccentColor::Red => "Red",
            AccentColor::Pink => "Pink",
        }
    }
}

impl FromStr for AccentColor {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "blue" => Ok(AccentColor::Blue),
            "purple" => Ok(AccentColor::Purple),
            "green" => Ok(AccentColor::Green),
            "orange" => Ok(AccentColor::Orange),
            "red" => Ok(AccentColor::Red),
            "pink" => Ok(AccentColor::Pink),
            other => Err(ParsePreferenceError {
                field: "accent color",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for AccentColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SidebarStyle {
    #[default]
    Compact,
    Expanded,
}

impl SidebarStyle {
    pub const ALL: [SidebarStyle; 2] = [SidebarStyle::Compact, SidebarStyle::Expanded];

    pub fn as_str(&self) -> &'static str {
        match self {
            SidebarStyle::Compact => "compact",
            SidebarStyle::Expanded => "expanded",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SidebarStyle::Compact => "Compact",
            SidebarStyle::Expanded => "Expanded",
        }
    }
}

impl FromStr for SidebarStyle {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compact" => Ok(SidebarStyle::Compact),
            "expanded" => Ok(SidebarStyle::Expanded),
            other => Err(ParsePreferenceError {
                field: "sidebar style",
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SidebarStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The full appearance preference set. Every field always holds exactly one
/// value; `Default` yields the documented defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    pub theme: Theme,
    pub accent_color: AccentColor,
    pub sidebar_style: SidebarStyle,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_defaults() {
        let prefs = Preferences::default();
        assert_eq!(prefs.theme, Theme::Light);
        assert_eq!(prefs.accent_color, AccentColor::Blue);
        assert_eq!(prefs.sidebar_style, SidebarStyle::Compact);
    }

    #[test_case(AccentColor::Blue)]
    #[test_case(AccentColor::Purple)]
    #[test_case(AccentColor::Green)]
    #[test_case(AccentColor::Orange)]
    #[test_case(AccentColor::Red)]
    #[test_case(AccentColor::Pink)]
    fn test_accent_round_trip(accent: AccentColor) {
        assert_eq!(accent.as_str().parse::<AccentColor>().unwrap(), accent);
    }

    #[test]
    fn test_theme_round_trip() {
        for theme in Theme::ALL {
            assert_eq!(theme.as_str().parse::<Theme>().unwrap(), theme);
        }
    }

    #[test]
    fn test_sidebar_round_trip() {
        for style in SidebarStyle::ALL {
            assert_eq!(style.as_str().parse::<SidebarStyle>().unwrap(), style);
        }
    }

    #[test]
    fn test_unrecognized_values_rejected() {
        assert!("solarized".parse::<Theme>().is_err());
        assert!("teal".parse::<AccentColor>().is_err());
        assert!("hidden".parse::<SidebarStyle>().is_err());

        let err = "teal".parse::<AccentColor>().unwrap_err();
        assert_eq!(err.field, "accent color");
        assert_eq!(err.value, "teal");
    }
}
