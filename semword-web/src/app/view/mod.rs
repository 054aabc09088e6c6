mod handlers;

pub use handlers::AppHandlers;

use crate::app::state::AppState;
use crate::components::filter_bar::FilterBar;
use crate::components::guess_form::GuessForm;
use crate::components::header::Header;
use crate::components::joker_panel::{JokerPanel, JokerWords};
use crate::components::result_banner::ResultBanner;
use crate::components::similar_words::SimilarWords;
use crate::components::stats_panel::StatsPanel;
use crate::components::visualization::VisualizationPanel;
use crate::components::word_list::WordList;
use semword_game::CenterMode;
use yew::prelude::*;

pub fn render_app(state: &AppState) -> Html {
    let handlers = AppHandlers::new(state);
    let session = state.session.borrow();
    let filter = session.filter();
    let picking = session.center_mode() == CenterMode::Picking;
    let jokers = session.state().map(|s| s.jokers).unwrap_or_default();

    html! {
        <div class="max-w-3xl mx-auto p-4 text-slate-900 dark:text-slate-100">
            <Header
                dark={state.scheme.is_dark()}
                visualization_open={session.show_visualization()}
                on_toggle_dark={handlers.toggle_scheme.clone()}
                on_reset={handlers.reset.clone()}
                on_show_visualization={handlers.show_visualization.clone()}
            />
            <main id="main" role="main">
                <VisualizationPanel
                    visible={session.show_visualization()}
                    revision={session.viz_revision()}
                    api={state.api.clone()}
                    on_close={handlers.hide_visualization.clone()}
                />
                <section
                    id="gameplaySection"
                    class={classes!(session.show_visualization().then_some("hidden"))}
                >
                    <GuessForm
                        value={AttrValue::from(session.draft().to_string())}
                        on_input={handlers.edit_guess.clone()}
                        on_submit={handlers.submit_guess.clone()}
                    />
                    <ResultBanner similarity={session.last_similarity()} />
                    <StatsPanel stats={session.stats()} />
                    <JokerPanel
                        jokers={jokers}
                        center_mode={session.center_mode()}
                        on_use={handlers.use_joker.clone()}
                        on_toggle_center={handlers.toggle_center.clone()}
                    />
                    <SimilarWords words={session.revealed_similar().to_vec()} />
                    <FilterBar active={filter} on_select={handlers.set_filter.clone()} />
                    <JokerWords hints={session.joker_hints().clone()} visible={filter.shows_hints()} />
                    <WordList
                        attempts={session.attempts().to_vec()}
                        selected={session.selection().words().to_vec()}
                        visible={filter.shows_guesses()}
                        on_pick={handlers.pick_word.clone()}
                    />
                    if picking {
                        <p class="text-sm text-pink-600" role="status">
                            { format!("{} / {}", session.selection().len(), semword_game::CENTER_WORD_PICKS) }
                        </p>
                    }
                </section>
            </main>
        </div>
    }
}
