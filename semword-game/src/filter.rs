//! Which lists the word panel shows.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordFilter {
    #[default]
    All,
    Guesses,
    Hints,
}

impl WordFilter {
    pub const ALL: [Self; 3] = [Self::All, Self::Guesses, Self::Hints];

    #[must_use]
    pub const fn shows_guesses(self) -> bool {
        matches!(self, Self::All | Self::Guesses)
    }

    #[must_use]
    pub const fn shows_hints(self) -> bool {
        matches!(self, Self::All | Self::Hints)
    }

    /// Value of the `data-filter` attribute on the filter buttons.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Guesses => "guesses",
            Self::Hints => "hints",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "Tous",
            Self::Guesses => "Essais",
            Self::Hints => "Indices",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.key() == key)
    }
}
