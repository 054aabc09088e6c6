use crate::api::ApiClient;
use semword_game::{ColorScheme, GameSession};
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Hook-owned handles shared by every view of the app.
///
/// The session lives in a `RefCell` so that request completions mutate it in
/// place; `redraw` re-renders after each mutation.
#[derive(Clone)]
pub struct AppState {
    pub session: Rc<RefCell<GameSession>>,
    pub api: Rc<ApiClient>,
    pub scheme: UseStateHandle<ColorScheme>,
    pub redraw: UseForceUpdateHandle,
}

#[hook]
pub fn use_app_state() -> AppState {
    AppState {
        session: use_mut_ref(GameSession::new),
        api: use_memo((), |()| ApiClient::default()),
        scheme: use_state(crate::theme::initial_scheme),
        redraw: use_force_update(),
    }
}
