use super::score_row;
use semword_game::ScoredWord;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub words: Vec<ScoredWord>,
}

/// Neighbours of the target, revealed once it is found.
#[function_component(SimilarWords)]
pub fn similar_words(p: &Props) -> Html {
    let rows = p
        .words
        .iter()
        .map(|w| score_row(w, classes!("bg-emerald-50", "dark:bg-slate-800")))
        .collect::<Html>();
    html! {
        <section id="similarWordsSection" class={classes!("mb-4", p.words.is_empty().then_some("hidden"))}>
            <h2 class="text-lg font-semibold mb-2">{ "Mots proches de la cible" }</h2>
            <div id="similarWordsList" class="space-y-1">{ rows }</div>
        </section>
    }
}
