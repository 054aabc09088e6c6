use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub dark: bool,
    pub visualization_open: bool,
    pub on_toggle_dark: Callback<()>,
    pub on_reset: Callback<()>,
    pub on_show_visualization: Callback<()>,
}

#[function_component(Header)]
pub fn header(p: &Props) -> Html {
    let toggle_dark = {
        let cb = p.on_toggle_dark.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let reset = {
        let cb = p.on_reset.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let show_viz = {
        let cb = p.on_show_visualization.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let dark_label = if p.dark { "Mode clair" } else { "Mode sombre" };

    html! {
        <header role="banner" class="flex items-center justify-between mb-6">
            <h1 class="text-3xl font-bold text-indigo-700 dark:text-indigo-300">{ "Semword" }</h1>
            <div class="flex gap-2">
                <button
                    id="toggleVisualization"
                    class={classes!("btn-secondary", p.visualization_open.then_some("hidden"))}
                    onclick={show_viz}
                >
                    { "Visualisation 3D" }
                </button>
                <button id="resetButton" class="btn-secondary" onclick={reset}>
                    { "Nouvelle partie" }
                </button>
                <button
                    id="darkModeToggle"
                    class="btn-secondary"
                    aria-pressed={p.dark.to_string()}
                    aria-label={dark_label}
                    onclick={toggle_dark}
                >
                    { dark_label }
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    fn props(dark: bool, visualization_open: bool) -> Props {
        Props {
            dark,
            visualization_open,
            on_toggle_dark: Callback::noop(),
            on_reset: Callback::noop(),
            on_show_visualization: Callback::noop(),
        }
    }

    #[test]
    fn header_reflects_scheme() {
        let html = block_on(LocalServerRenderer::<Header>::with_props(props(true, false)).render());
        assert!(html.contains("darkModeToggle"));
        assert!(html.contains("aria-pressed=\"true\""));
        assert!(html.contains("Mode clair"));
    }

    #[test]
    fn visualization_toggle_hides_while_open() {
        let html = block_on(LocalServerRenderer::<Header>::with_props(props(false, true)).render());
        assert!(html.contains("btn-secondary hidden"));
        assert!(html.contains("Mode sombre"));
    }
}
