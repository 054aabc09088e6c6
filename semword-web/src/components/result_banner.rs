use semword_game::{bar_width, format_percent};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    /// Score of the latest guess; the banner stays hidden until there is one.
    pub similarity: Option<f64>,
}

#[function_component(ResultBanner)]
pub fn result_banner(p: &Props) -> Html {
    let Some(similarity) = p.similarity else {
        return html! { <div id="result" class="hidden"></div> };
    };
    let bar_style = format!("width: {}", bar_width(similarity));

    html! {
        <div id="result" class="mb-4" role="status" aria-live="polite">
            <p class="mb-1">
                { "Similarité : " }
                <span id="similarityScore" class="font-bold">{ format_percent(similarity) }</span>
            </p>
            <div class="w-full h-3 bg-slate-200 rounded">
                <div id="similarityBar" class="h-3 rounded bg-indigo-500" style={bar_style}></div>
            </div>
        </div>
    }
}
