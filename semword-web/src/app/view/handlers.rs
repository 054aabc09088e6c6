use crate::app::controller;
use crate::app::state::AppState;
use semword_game::{Action, JokerKind, WordFilter};
use yew::prelude::*;

#[derive(Clone, PartialEq)]
pub struct AppHandlers {
    pub edit_guess: Callback<String>,
    pub submit_guess: Callback<()>,
    pub reset: Callback<()>,
    pub use_joker: Callback<JokerKind>,
    pub toggle_center: Callback<()>,
    pub pick_word: Callback<String>,
    pub show_visualization: Callback<()>,
    pub hide_visualization: Callback<()>,
    pub set_filter: Callback<WordFilter>,
    pub toggle_scheme: Callback<()>,
}

impl AppHandlers {
    #[must_use]
    pub fn new(state: &AppState) -> Self {
        Self {
            edit_guess: build_action(state, Action::EditGuess),
            submit_guess: build_action(state, |()| Action::SubmitGuess),
            reset: build_action(state, |()| Action::Reset),
            use_joker: build_action(state, Action::UseJoker),
            toggle_center: build_action(state, |()| Action::ToggleCenterMode),
            pick_word: build_action(state, Action::PickWord),
            show_visualization: build_action(state, |()| Action::ShowVisualization),
            hide_visualization: build_action(state, |()| Action::HideVisualization),
            set_filter: build_action(state, Action::SetFilter),
            toggle_scheme: build_toggle_scheme(state),
        }
    }
}

fn build_action<T: 'static>(state: &AppState, to_action: fn(T) -> Action) -> Callback<T> {
    let state = state.clone();
    Callback::from(move |value: T| controller::send(&state, to_action(value)))
}

fn build_toggle_scheme(state: &AppState) -> Callback<()> {
    let scheme = state.scheme.clone();
    Callback::from(move |()| {
        scheme.set(crate::theme::toggle_scheme(*scheme));
    })
}
