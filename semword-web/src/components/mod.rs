pub mod filter_bar;
pub mod guess_form;
pub mod header;
pub mod joker_panel;
pub mod result_banner;
pub mod similar_words;
pub mod stats_panel;
pub mod visualization;
pub mod word_list;

use semword_game::{ScoreTier, ScoredWord, format_percent};
use yew::prelude::*;

/// Percentage label colored by how close the score is.
#[must_use]
pub fn score_badge(similarity: f64) -> Html {
    let class = classes!("font-bold", ScoreTier::of(similarity).text_class());
    html! { <span class={class}>{ format_percent(similarity) }</span> }
}

/// `word` and its score on one line.
#[must_use]
pub fn score_row(item: &ScoredWord, extra: Classes) -> Html {
    html! {
        <div class={classes!("flex", "justify-between", "items-center", "p-2", "rounded", extra)}>
            <span class="font-medium">{ &item.word }</span>
            { score_badge(item.similarity) }
        </div>
    }
}
