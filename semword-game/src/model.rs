//! Game state snapshot as held by the client.
use serde::{Deserialize, Serialize};

/// A word paired with its similarity to the hidden target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredWord {
    pub word: String,
    pub similarity: f64,
}

/// A scored guess recorded in the game history.
pub type Attempt = ScoredWord;

impl ScoredWord {
    #[must_use]
    pub fn new(word: impl Into<String>, similarity: f64) -> Self {
        Self {
            word: word.into(),
            similarity: clamp_similarity(similarity),
        }
    }

    /// Copy of this entry with its similarity forced into `[0, 1]`.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.similarity = clamp_similarity(self.similarity);
        self
    }
}

/// Clamp a similarity score into `[0, 1]`; NaN collapses to 0.
#[must_use]
pub fn clamp_similarity(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// The two hint families offered by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JokerKind {
    HighSimilarity,
    MediumSimilarity,
}

impl JokerKind {
    pub const ALL: [Self; 2] = [Self::HighSimilarity, Self::MediumSimilarity];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HighSimilarity => "high_similarity",
            Self::MediumSimilarity => "medium_similarity",
        }
    }

    /// Class used by the hint panel of this joker.
    #[must_use]
    pub const fn css_key(self) -> &'static str {
        match self {
            Self::HighSimilarity => "high-similarity",
            Self::MediumSimilarity => "medium-similarity",
        }
    }
}

impl std::fmt::Display for JokerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for JokerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "high_similarity" | "high" => Ok(Self::HighSimilarity),
            "medium_similarity" | "medium" => Ok(Self::MediumSimilarity),
            other => Err(format!("unknown joker type: {other}")),
        }
    }
}

/// Remaining uses of one joker kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JokerStock {
    pub remaining: u32,
    pub words_per_use: u32,
}

impl JokerStock {
    #[must_use]
    pub const fn is_exhausted(&self) -> bool {
        self.remaining == 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Jokers {
    #[serde(default)]
    pub high_similarity: JokerStock,
    #[serde(default)]
    pub medium_similarity: JokerStock,
}

impl Jokers {
    #[must_use]
    pub const fn get(&self, kind: JokerKind) -> JokerStock {
        match kind {
            JokerKind::HighSimilarity => self.high_similarity,
            JokerKind::MediumSimilarity => self.medium_similarity,
        }
    }
}

/// Snapshot of one game as reported by the backend.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GameState {
    #[serde(alias = "targetWord", default)]
    pub target_word: String,
    #[serde(default)]
    pub attempts: Vec<Attempt>,
    #[serde(default)]
    pub word_found: bool,
    #[serde(default)]
    pub similar_words: Vec<ScoredWord>,
    #[serde(default)]
    pub jokers: Jokers,
}

impl GameState {
    /// Force every similarity in the snapshot into `[0, 1]`.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        self.attempts = normalize_all(self.attempts);
        self.similar_words = normalize_all(self.similar_words);
        self
    }
}

pub(crate) fn normalize_all(words: Vec<ScoredWord>) -> Vec<ScoredWord> {
    words.into_iter().map(ScoredWord::normalized).collect()
}
