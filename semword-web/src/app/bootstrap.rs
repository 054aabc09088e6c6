use crate::app::controller;
use crate::app::state::AppState;
use semword_game::Action;
use yew::prelude::*;

/// Load the current game once, when the app mounts.
#[hook]
pub fn use_bootstrap(app_state: &AppState) {
    let state = app_state.clone();
    use_effect_with((), move |()| {
        log::info!("loading game state");
        controller::send(&state, Action::Load);
        || {}
    });
}
