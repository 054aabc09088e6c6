use yew::prelude::*;

pub mod bootstrap;
pub mod controller;
pub mod state;
pub mod view;

#[function_component(App)]
pub fn app() -> Html {
    let app_state = state::use_app_state();
    bootstrap::use_bootstrap(&app_state);
    view::render_app(&app_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn app_renders_empty_game_before_load() {
        let html = block_on(LocalServerRenderer::<App>::new().render());
        assert!(html.contains("guessForm"));
        assert!(html.contains("0 mot"));
        assert!(html.contains("id=\"result\" class=\"hidden\""));
        assert!(html.contains("visualizationSection"));
        assert!(html.contains("Joker Triangulation"));
    }
}
