use crate::api::ApiClient;
use std::rc::Rc;
use yew::prelude::*;

pub const PLOT_CONTAINER_ID: &str = "visualization";

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub visible: bool,
    /// Bumped whenever the attempt set changes; each bump redraws.
    pub revision: u64,
    pub api: Rc<ApiClient>,
    pub on_close: Callback<()>,
}

/// 3D projection of the attempts around the target.
#[function_component(VisualizationPanel)]
pub fn visualization_panel(p: &Props) -> Html {
    {
        let api = p.api.clone();
        use_effect_with((p.revision, p.visible), move |(_, visible)| {
            if *visible {
                wasm_bindgen_futures::spawn_local(refresh(api));
            }
            crate::plot::release
        });
    }

    let close = {
        let cb = p.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };

    html! {
        <section
            id="visualizationSection"
            class={classes!("mb-6", (!p.visible).then_some("hidden"))}
            aria-hidden={(!p.visible).to_string()}
        >
            <div class="flex justify-between items-center mb-2">
                <h2 class="text-lg font-semibold">{ "Visualisation 3D" }</h2>
                <button id="closeVisualization" class="btn-secondary" onclick={close}>
                    { "Fermer" }
                </button>
            </div>
            <div id={PLOT_CONTAINER_ID} class="w-full h-[500px] rounded bg-white dark:bg-slate-900"></div>
        </section>
    }
}

async fn refresh(api: Rc<ApiClient>) {
    let points = match api.get_visualization_data().await {
        Ok(points) => points,
        Err(err) => {
            log::error!("Error updating visualization: {err}");
            return;
        }
    };
    log::debug!("drawing {} projected words", points.len());
    if let Err(err) = crate::plot::draw(PLOT_CONTAINER_ID, semword_game::build_figure(&points)) {
        log::error!("Error updating visualization: {err}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(visible: bool) -> Props {
        Props {
            visible,
            revision: 0,
            api: Rc::new(ApiClient::new("/api")),
            on_close: Callback::noop(),
        }
    }

    #[test]
    fn hidden_panel_keeps_plot_container() {
        let html = block_on(LocalServerRenderer::<VisualizationPanel>::with_props(props(false)).render());
        assert!(html.contains("id=\"visualization\""));
        assert!(html.contains("mb-6 hidden"));
    }

    #[test]
    fn open_panel_offers_close_button() {
        let html = block_on(LocalServerRenderer::<VisualizationPanel>::with_props(props(true)).render());
        assert!(html.contains("closeVisualization"));
        assert!(!html.contains("mb-6 hidden"));
    }
}
