use semword_game::WordFilter;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub active: WordFilter,
    pub on_select: Callback<WordFilter>,
}

#[function_component(FilterBar)]
pub fn filter_bar(p: &Props) -> Html {
    let buttons = WordFilter::ALL
        .into_iter()
        .map(|filter| {
            let is_active = filter == p.active;
            let onclick = {
                let cb = p.on_select.clone();
                Callback::from(move |_| cb.emit(filter))
            };
            let tone = if is_active {
                classes!("bg-indigo-100", "text-indigo-700")
            } else {
                classes!("bg-slate-100", "text-slate-700")
            };
            html! {
                <button
                    class={classes!("filter-btn", "px-3", "py-1", "rounded", tone)}
                    data-filter={filter.key()}
                    aria-pressed={is_active.to_string()}
                    {onclick}
                >
                    { filter.label() }
                </button>
            }
        })
        .collect::<Html>();
    html! {
        <div class="flex gap-2 mb-2" role="group" aria-label="Filtrer les mots">{ buttons }</div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    #[test]
    fn active_filter_is_highlighted() {
        let props = Props {
            active: WordFilter::Hints,
            on_select: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<FilterBar>::with_props(props).render());
        assert!(html.contains("data-filter=\"all\""));
        assert!(html.contains("data-filter=\"guesses\""));
        assert_eq!(html.matches("bg-indigo-100").count(), 1);
        assert_eq!(html.matches("aria-pressed=\"true\"").count(), 1);
        assert!(html.contains("Indices"));
    }
}
