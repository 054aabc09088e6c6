use wasm_bindgen::JsCast;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub value: AttrValue,
    pub on_input: Callback<String>,
    pub on_submit: Callback<()>,
}

#[function_component(GuessForm)]
pub fn guess_form(p: &Props) -> Html {
    let on_input = {
        let cb = p.on_input.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            {
                cb.emit(input.value());
            }
        })
    };
    let on_submit = {
        let cb = p.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            cb.emit(());
        })
    };

    html! {
        <form id="guessForm" class="flex gap-2 mb-4" onsubmit={on_submit}>
            <label for="wordInput" class="sr-only">{ "Votre mot" }</label>
            <input
                id="wordInput"
                type="text"
                autocomplete="off"
                placeholder="Entrez un mot..."
                class="flex-1 px-4 py-2 rounded border border-slate-300 dark:bg-slate-800"
                value={p.value.clone()}
                oninput={on_input}
            />
            <button type="submit" class="btn-primary">{ "Essayer" }</button>
        </form>
    }
}
