//! Light/dark preference, independent of the game session.

/// Storage key holding the persisted scheme.
pub const COLOR_SCHEME_KEY: &str = "darkMode";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub fn parse(stored: &str) -> Option<Self> {
        match stored.trim() {
            "dark" | "true" => Some(Self::Dark),
            "light" | "false" => Some(Self::Light),
            _ => None,
        }
    }

    /// A stored choice wins; otherwise follow the OS preference.
    #[must_use]
    pub fn initial(stored: Option<&str>, prefers_dark: bool) -> Self {
        stored.and_then(Self::parse).unwrap_or(if prefers_dark {
            Self::Dark
        } else {
            Self::Light
        })
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_choice_overrides_os_preference() {
        assert_eq!(ColorScheme::initial(Some("light"), true), ColorScheme::Light);
        assert_eq!(ColorScheme::initial(Some("dark"), false), ColorScheme::Dark);
    }

    #[test]
    fn missing_or_garbled_value_follows_os() {
        assert_eq!(ColorScheme::initial(None, true), ColorScheme::Dark);
        assert_eq!(ColorScheme::initial(None, false), ColorScheme::Light);
        assert_eq!(ColorScheme::initial(Some("sepia"), true), ColorScheme::Dark);
    }

    #[test]
    fn toggle_flips_and_persists_as_string() {
        assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
        assert_eq!(ColorScheme::Dark.toggled().as_str(), "light");
    }
}
