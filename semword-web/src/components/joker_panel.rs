use super::score_row;
use semword_game::{CenterMode, JokerHints, JokerKind, Jokers};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub jokers: Jokers,
    pub center_mode: CenterMode,
    pub on_use: Callback<JokerKind>,
    pub on_toggle_center: Callback<()>,
}

const fn joker_id(kind: JokerKind) -> (&'static str, &'static str) {
    match kind {
        JokerKind::HighSimilarity => ("highSimilarityJoker", "highSimilarityCount"),
        JokerKind::MediumSimilarity => ("mediumSimilarityJoker", "mediumSimilarityCount"),
    }
}

const fn joker_label(kind: JokerKind) -> &'static str {
    match kind {
        JokerKind::HighSimilarity => "Joker proche",
        JokerKind::MediumSimilarity => "Joker moyen",
    }
}

fn center_label(mode: CenterMode) -> &'static str {
    match mode {
        CenterMode::Inactive => "Joker Triangulation",
        CenterMode::Picking => "Choisissez 3 mots",
        CenterMode::Awaiting => "Triangulation...",
    }
}

#[function_component(JokerPanel)]
pub fn joker_panel(p: &Props) -> Html {
    let buttons = JokerKind::ALL
        .into_iter()
        .map(|kind| {
            let stock = p.jokers.get(kind);
            let (button_id, count_id) = joker_id(kind);
            let onclick = {
                let cb = p.on_use.clone();
                Callback::from(move |_| cb.emit(kind))
            };
            html! {
                <button
                    id={button_id}
                    class={classes!("btn-joker", kind.css_key())}
                    disabled={stock.is_exhausted()}
                    {onclick}
                >
                    { joker_label(kind) }
                    { " (" }
                    <span id={count_id}>{ stock.remaining.to_string() }</span>
                    { ")" }
                </button>
            }
        })
        .collect::<Html>();

    let toggle_center = {
        let cb = p.on_toggle_center.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let center_active = p.center_mode != CenterMode::Inactive;

    html! {
        <div class="flex flex-wrap gap-2 mb-4" role="group" aria-label="Jokers">
            { buttons }
            <button
                id="centerWordPowerBtn"
                class={classes!("btn-joker", "center-word", center_active.then_some("bg-pink-500 text-white"))}
                aria-pressed={center_active.to_string()}
                disabled={p.center_mode == CenterMode::Awaiting}
                onclick={toggle_center}
            >
                { center_label(p.center_mode) }
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct HintProps {
    pub hints: JokerHints,
    #[prop_or(true)]
    pub visible: bool,
}

/// Words revealed by the latest use of each joker.
#[function_component(JokerWords)]
pub fn joker_words(p: &HintProps) -> Html {
    let panels = JokerKind::ALL
        .into_iter()
        .map(|kind| {
            let words = p.hints.get(kind);
            let background = match kind {
                JokerKind::HighSimilarity => "bg-amber-50",
                JokerKind::MediumSimilarity => "bg-orange-50",
            };
            let rows = words
                .iter()
                .map(|w| score_row(w, classes!(background, "dark:bg-slate-800")))
                .collect::<Html>();
            html! {
                <div class={classes!("joker-words", kind.css_key(), words.is_empty().then_some("hidden"))}>
                    <h3 class="text-sm font-semibold mb-1">{ joker_label(kind) }</h3>
                    { rows }
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <section id="jokerWordsContainer" class={classes!("mb-4", "space-y-2", (!p.visible).then_some("hidden"))}>
            { panels }
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use semword_game::{JokerStock, ScoredWord};
    use yew::LocalServerRenderer;

    fn stock(remaining: u32) -> JokerStock {
        JokerStock {
            remaining,
            words_per_use: 3,
        }
    }

    #[test]
    fn exhausted_joker_is_disabled() {
        let props = Props {
            jokers: Jokers {
                high_similarity: stock(0),
                medium_similarity: stock(2),
            },
            center_mode: CenterMode::Inactive,
            on_use: Callback::noop(),
            on_toggle_center: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<JokerPanel>::with_props(props).render());
        let high = html.find("highSimilarityJoker").expect("high joker");
        let medium = html.find("mediumSimilarityJoker").expect("medium joker");
        assert!(html[high..medium].contains("disabled"));
        assert_eq!(html.matches("disabled").count(), 1);
        assert!(html.contains("Joker Triangulation"));
    }

    #[test]
    fn picking_mode_prompts_for_words() {
        let props = Props {
            jokers: Jokers::default(),
            center_mode: CenterMode::Picking,
            on_use: Callback::noop(),
            on_toggle_center: Callback::noop(),
        };
        let html = block_on(LocalServerRenderer::<JokerPanel>::with_props(props).render());
        assert!(html.contains("Choisissez 3 mots"));
        assert!(html.contains("bg-pink-500"));
    }

    #[test]
    fn hint_panels_show_only_drawn_words() {
        let props = HintProps {
            hints: JokerHints {
                high_similarity: vec![ScoredWord::new("félin", 0.82)],
                medium_similarity: Vec::new(),
            },
            visible: true,
        };
        let html = block_on(LocalServerRenderer::<JokerWords>::with_props(props).render());
        assert!(html.contains("félin"));
        assert!(html.contains("82.0%"));
        assert!(html.contains("bg-amber-50"));
        assert!(html.contains("joker-words medium-similarity hidden"));
    }
}
