//! Request and response shapes of the game service HTTP surface.
//!
//! Transport lives elsewhere (`gloo-net` in the browser, `reqwest` in the
//! tester); both hand the raw status and body to [`decode_response`] so every
//! client reports failures the same way.
use crate::error::RequestError;
use crate::model::{GameState, JokerKind, Jokers, ScoredWord};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// Every operation exposed by the game service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    SystemHealth,
    GameState,
    CheckWord,
    ResetGame,
    Visualization,
    UseJoker,
    CenterWord,
}

impl Endpoint {
    pub const ALL: [Self; 7] = [
        Self::SystemHealth,
        Self::GameState,
        Self::CheckWord,
        Self::ResetGame,
        Self::Visualization,
        Self::UseJoker,
        Self::CenterWord,
    ];

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::SystemHealth => "/system-health",
            Self::GameState => "/game-state",
            Self::CheckWord => "/check-word",
            Self::ResetGame => "/reset-game",
            Self::Visualization => "/visualization",
            Self::UseJoker => "/use-joker",
            Self::CenterWord => "/get-center-word",
        }
    }

    #[must_use]
    pub const fn method(self) -> Method {
        match self {
            Self::SystemHealth | Self::GameState | Self::Visualization => Method::Get,
            Self::CheckWord | Self::ResetGame | Self::UseJoker | Self::CenterWord => Method::Post,
        }
    }

    /// Absolute URL of this endpoint under `base`.
    #[must_use]
    pub fn url(self, base: &str) -> String {
        format!("{}{}", base.trim_end_matches('/'), self.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckWordRequest<'a> {
    pub word: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UseJokerRequest {
    pub joker_type: JokerKind,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CenterWordRequest<'a> {
    pub chosen_words: &'a [String],
}

/// Outcome of submitting a guess.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuessResponse {
    pub similarity: f64,
    pub history: Vec<ScoredWord>,
    #[serde(default)]
    pub word_found: bool,
    #[serde(default)]
    pub similar_words: Vec<ScoredWord>,
    /// Set when the service refused the word but still answered 2xx.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawGuessResponse {
    #[serde(default)]
    similarity: f64,
    history: Option<Vec<ScoredWord>>,
    #[serde(default)]
    word_found: bool,
    #[serde(default)]
    similar_words: Vec<ScoredWord>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JokerResponse {
    #[serde(default)]
    pub joker_words: Vec<ScoredWord>,
    pub jokers: Jokers,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CenterWordResponse {
    pub word: String,
    pub similarity: f64,
}

/// One point of the 3D semantic projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualizationPoint {
    pub word: String,
    pub coordinates: [f64; 3],
    #[serde(default)]
    pub is_target: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub similarity: Option<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// Translate a raw HTTP answer into the operation's payload.
///
/// # Errors
///
/// [`RequestError::Status`] for any non-2xx status (message taken from the
/// body's `error` field when present), [`RequestError::Decode`] when a 2xx
/// body does not parse as `T`.
pub fn decode_response<T: DeserializeOwned>(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<T, RequestError> {
    if !(200..300).contains(&status) {
        return Err(status_error(status, status_text, body));
    }
    serde_json::from_str(body).map_err(|e| RequestError::Decode(e.to_string()))
}

/// Decode a guess answer, which must carry the attempt history.
///
/// # Errors
///
/// Everything [`decode_response`] reports, plus
/// [`RequestError::InvalidResponse`] when `history` is missing.
pub fn decode_guess_response(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<GuessResponse, RequestError> {
    let raw: RawGuessResponse = decode_response(status, status_text, body)?;
    let Some(history) = raw.history else {
        return Err(RequestError::InvalidResponse(
            "Invalid response format from server".to_string(),
        ));
    };
    Ok(GuessResponse {
        similarity: raw.similarity,
        history,
        word_found: raw.word_found,
        similar_words: raw.similar_words,
        error: raw.error,
    })
}

/// Decode a full game snapshot, clamping every score into `[0, 1]`.
///
/// # Errors
///
/// See [`decode_response`].
pub fn decode_game_state(
    status: u16,
    status_text: &str,
    body: &str,
) -> Result<GameState, RequestError> {
    decode_response::<GameState>(status, status_text, body).map(GameState::normalized)
}

fn status_error(status: u16, status_text: &str, body: &str) -> RequestError {
    let parsed = serde_json::from_str::<ErrorBody>(body).unwrap_or_default();
    let message = parsed.error.unwrap_or_else(|| {
        let text = status_text.trim();
        if text.is_empty() {
            format!("API call failed: {status}")
        } else {
            format!("API call failed: {text}")
        }
    });
    RequestError::Status { status, message }
}
