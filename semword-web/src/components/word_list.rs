use super::score_badge;
use semword_game::stats::sorted_by_similarity;
use semword_game::{Attempt, guess_count_label};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub attempts: Vec<Attempt>,
    /// Words currently picked for triangulation.
    #[prop_or_default]
    pub selected: Vec<String>,
    #[prop_or(true)]
    pub visible: bool,
    pub on_pick: Callback<String>,
}

/// Attempt history, best score first.
#[function_component(WordList)]
pub fn word_list(p: &Props) -> Html {
    let items = sorted_by_similarity(&p.attempts)
        .into_iter()
        .map(|attempt| {
            let is_selected = p.selected.iter().any(|w| *w == attempt.word);
            let onclick = {
                let cb = p.on_pick.clone();
                let word = attempt.word.clone();
                Callback::from(move |_| cb.emit(word.clone()))
            };
            html! {
                <li
                    data-word={attempt.word.clone()}
                    class={classes!(
                        "guessed-word-item", "flex", "justify-between", "p-2", "rounded",
                        "cursor-pointer", "bg-white", "dark:bg-slate-800",
                        is_selected.then_some("ring-2 ring-pink-500"),
                    )}
                    aria-selected={is_selected.to_string()}
                    {onclick}
                >
                    <span class="font-medium">{ &attempt.word }</span>
                    { score_badge(attempt.similarity) }
                </li>
            }
        })
        .collect::<Html>();

    html! {
        <section id="guessedWordsSection" class={classes!("mb-4", (!p.visible).then_some("hidden"))}>
            <h2 class="text-lg font-semibold mb-2">
                { "Mots essayés " }
                <span id="guessCount" class="text-sm text-slate-500">
                    { guess_count_label(p.attempts.len()) }
                </span>
            </h2>
            <ul id="guessedWordsList" class="space-y-1">{ items }</ul>
        </section>
    }
}
