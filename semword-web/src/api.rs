//! Browser client for the game service.
//!
//! One method per endpoint, one round trip per call: no retry, no timeout and
//! no caching. Failures are logged here and always handed back to the caller.
use gloo_net::http::Request;
use semword_game::wire::{
    CenterWordRequest, CheckWordRequest, UseJokerRequest, decode_game_state,
    decode_guess_response, decode_response,
};
use semword_game::{
    CENTER_WORD_PICKS, CenterWordResponse, Endpoint, GameState, GuessResponse, JokerKind,
    JokerResponse, Method, RequestError, VisualizationPoint,
};
use serde::Serialize;

/// Raw answer before it is decoded into an operation's payload.
struct RawResponse {
    status: u16,
    status_text: String,
    body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(semword_game::config::api_base())
    }
}

impl ApiClient {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// # Errors
    /// Any [`RequestError`] reported by the service or the transport.
    pub async fn check_system_health(&self) -> Result<serde_json::Value, RequestError> {
        let raw = self.send(Endpoint::SystemHealth, None).await?;
        logged(Endpoint::SystemHealth, decode_raw(&raw))
    }

    /// # Errors
    /// Any [`RequestError`] reported by the service or the transport.
    pub async fn get_game_state(&self) -> Result<GameState, RequestError> {
        let raw = self.send(Endpoint::GameState, None).await?;
        logged(
            Endpoint::GameState,
            decode_game_state(raw.status, &raw.status_text, &raw.body),
        )
    }

    /// # Errors
    /// Any [`RequestError`]; [`RequestError::InvalidResponse`] when the answer
    /// lacks the attempt history.
    pub async fn check_word(&self, word: &str) -> Result<GuessResponse, RequestError> {
        let body = encode(&CheckWordRequest { word })?;
        let raw = self.send(Endpoint::CheckWord, Some(body)).await?;
        let result = decode_guess_response(raw.status, &raw.status_text, &raw.body);
        if let Ok(guess) = &result {
            log::debug!("Check word response: {guess:?}");
        }
        logged(Endpoint::CheckWord, result)
    }

    /// # Errors
    /// Any [`RequestError`] reported by the service or the transport.
    pub async fn reset_game(&self) -> Result<GameState, RequestError> {
        let raw = self.send(Endpoint::ResetGame, None).await?;
        logged(
            Endpoint::ResetGame,
            decode_game_state(raw.status, &raw.status_text, &raw.body),
        )
    }

    /// # Errors
    /// Any [`RequestError`] reported by the service or the transport.
    pub async fn get_visualization_data(&self) -> Result<Vec<VisualizationPoint>, RequestError> {
        let raw = self.send(Endpoint::Visualization, None).await?;
        logged(Endpoint::Visualization, decode_raw(&raw))
    }

    /// # Errors
    /// Any [`RequestError`] reported by the service or the transport.
    pub async fn use_joker(&self, kind: JokerKind) -> Result<JokerResponse, RequestError> {
        log::info!("Sending joker request for type: {kind}");
        let body = encode(&UseJokerRequest { joker_type: kind })?;
        let raw = self.send(Endpoint::UseJoker, Some(body)).await?;
        logged(Endpoint::UseJoker, decode_raw(&raw))
    }

    /// # Errors
    /// Any [`RequestError`] reported by the service or the transport.
    pub async fn get_center_word(
        &self,
        chosen_words: &[String; CENTER_WORD_PICKS],
    ) -> Result<CenterWordResponse, RequestError> {
        let body = encode(&CenterWordRequest { chosen_words })?;
        let raw = self.send(Endpoint::CenterWord, Some(body)).await?;
        logged(Endpoint::CenterWord, decode_raw(&raw))
    }

    async fn send(
        &self,
        endpoint: Endpoint,
        body: Option<String>,
    ) -> Result<RawResponse, RequestError> {
        let url = endpoint.url(&self.base);
        let builder = match endpoint.method() {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
        }
        .header("Content-Type", "application/json");

        let request = match body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| network_error(endpoint, &e))?;

        let response = request
            .send()
            .await
            .map_err(|e| network_error(endpoint, &e))?;

        let status = response.status();
        let status_text = response.status_text();
        let body = match response.text().await {
            Ok(text) => text,
            Err(e) if response.ok() => {
                return logged(endpoint, Err(RequestError::Decode(e.to_string())));
            }
            // The error path only needs the status when the body is unreadable.
            Err(_) => String::new(),
        };
        Ok(RawResponse {
            status,
            status_text,
            body,
        })
    }
}

fn decode_raw<T: serde::de::DeserializeOwned>(raw: &RawResponse) -> Result<T, RequestError> {
    decode_response(raw.status, &raw.status_text, &raw.body)
}

fn encode<T: Serialize>(body: &T) -> Result<String, RequestError> {
    serde_json::to_string(body).map_err(|e| RequestError::Decode(e.to_string()))
}

fn network_error(endpoint: Endpoint, err: &gloo_net::Error) -> RequestError {
    let error = RequestError::Network(err.to_string());
    log::error!("API error ({}): {error}", endpoint.path());
    error
}

fn logged<T>(endpoint: Endpoint, result: Result<T, RequestError>) -> Result<T, RequestError> {
    if let Err(err) = &result {
        log::error!("API error ({}): {err}", endpoint.path());
    }
    result
}
