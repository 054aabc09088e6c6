//! Runs session commands against the service.
use crate::api::ApiClient;
use crate::app::state::AppState;
use semword_game::{Action, Command, Request, RequestError, Response};

/// Feed `action` to the session and, if it yields a command, perform the
/// round trip in the background and apply the answer.
pub fn send(state: &AppState, action: Action) {
    let command = state.session.borrow_mut().dispatch(action);
    state.redraw.force_update();
    if let Some(command) = command {
        spawn(state, command);
    }
}

fn spawn(state: &AppState, command: Command) {
    let session = state.session.clone();
    let api = state.api.clone();
    let redraw = state.redraw.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let result = execute(&api, &command.request).await;
        session.borrow_mut().resolve(&command, result);
        redraw.force_update();
    });
}

/// Perform the service call behind `request`.
///
/// # Errors
/// Whatever the client reports for that call.
pub async fn execute(api: &ApiClient, request: &Request) -> Result<Response, RequestError> {
    match request {
        Request::LoadState => api.get_game_state().await.map(Response::State),
        Request::CheckWord(word) => api.check_word(word).await.map(Response::Guess),
        Request::Reset => api.reset_game().await.map(Response::State),
        Request::UseJoker(kind) => api.use_joker(*kind).await.map(Response::Joker),
        Request::CenterWord(words) => api.get_center_word(words).await.map(Response::CenterWord),
    }
}
