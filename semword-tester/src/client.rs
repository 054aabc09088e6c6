//! Native client for the game service, decoding with the same wire rules as
//! the browser.
use semword_game::wire::{
    CenterWordRequest, CheckWordRequest, UseJokerRequest, decode_game_state,
    decode_guess_response, decode_response,
};
use semword_game::{
    CenterWordResponse, Endpoint, GameState, GuessResponse, JokerKind, JokerResponse, Method,
    RequestError, VisualizationPoint,
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

struct RawResponse {
    status: u16,
    status_text: String,
    body: String,
}

#[derive(Debug, Clone)]
pub struct ServiceClient {
    http: reqwest::Client,
    base: String,
}

impl ServiceClient {
    /// # Errors
    /// Fails when the HTTP client cannot be built.
    pub fn new(base: impl Into<String>) -> Result<Self, RequestError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("semword-tester/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| RequestError::Network(format!("Client error: {e}")))?;
        Ok(Self {
            http,
            base: base.into(),
        })
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// # Errors
    /// Any [`RequestError`] reported by the service or the transport.
    pub async fn system_health(&self) -> Result<serde_json::Value, RequestError> {
        self.call(Endpoint::SystemHealth, None::<&()>).await
    }

    /// # Errors
    /// Any [`RequestError`] reported by the service or the transport.
    pub async fn game_state(&self) -> Result<GameState, RequestError> {
        let raw = self.send(Endpoint::GameState, None::<&()>).await?;
        decode_game_state(raw.status, &raw.status_text, &raw.body)
    }

    /// # Errors
    /// Any [`RequestError`] reported by the service or the transport.
    pub async fn check_word(&self, word: &str) -> Result<GuessResponse, RequestError> {
        let raw = self
            .send(Endpoint::CheckWord, Some(&CheckWordRequest { word }))
            .await?;
        decode_guess_response(raw.status, &raw.status_text, &raw.body)
    }

    /// # Errors
    /// Any [`RequestError`] reported by the service or the transport.
    pub async fn reset_game(&self) -> Result<GameState, RequestError> {
        let raw = self.send(Endpoint::ResetGame, None::<&()>).await?;
        decode_game_state(raw.status, &raw.status_text, &raw.body)
    }

    /// # Errors
    /// Any [`RequestError`] reported by the service or the transport.
    pub async fn visualization(&self) -> Result<Vec<VisualizationPoint>, RequestError> {
        self.call(Endpoint::Visualization, None::<&()>).await
    }

    /// # Errors
    /// Any [`RequestError`] reported by the service or the transport.
    pub async fn use_joker(&self, kind: JokerKind) -> Result<JokerResponse, RequestError> {
        self.call(Endpoint::UseJoker, Some(&UseJokerRequest { joker_type: kind }))
            .await
    }

    /// # Errors
    /// Any [`RequestError`] reported by the service or the transport.
    pub async fn center_word(
        &self,
        chosen_words: &[String],
    ) -> Result<CenterWordResponse, RequestError> {
        self.call(Endpoint::CenterWord, Some(&CenterWordRequest { chosen_words }))
            .await
    }

    async fn call<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        body: Option<&B>,
    ) -> Result<T, RequestError> {
        let raw = self.send(endpoint, body).await?;
        decode_response(raw.status, &raw.status_text, &raw.body)
    }

    async fn send<B: Serialize>(
        &self,
        endpoint: Endpoint,
        body: Option<&B>,
    ) -> Result<RawResponse, RequestError> {
        let url = endpoint.url(&self.base);
        log::debug!("{} {url}", endpoint.method().as_str());
        let mut request = match endpoint.method() {
            Method::Get => self.http.get(&url),
            Method::Post => self.http.post(&url),
        };
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request
            .send()
            .await
            .map_err(|e| RequestError::Network(format!("Request failed: {e}")))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| RequestError::Network(format!("Failed to read body: {e}")))?;
        log::trace!("{} -> {status}: {body}", endpoint.path());
        Ok(RawResponse {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            body,
        })
    }
}
