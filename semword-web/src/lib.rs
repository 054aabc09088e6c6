//! semword web client
//!
//! Yew front end for the semantic word-guessing game. Game rules and state
//! transitions live in `semword-game`; this crate renders them and talks to
//! the service.
#![forbid(unsafe_code)]

pub mod api;
pub mod app;
pub mod components;
pub mod dom;
pub mod plot;
pub mod theme;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    };
    let _ = console_log::init_with_level(level);
    theme::apply_scheme(theme::initial_scheme());
    log::info!("semword starting against {}", semword_game::config::api_base());
    yew::Renderer::<app::App>::new().render();
}
