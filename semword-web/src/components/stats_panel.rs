use semword_game::AttemptStats;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub stats: AttemptStats,
}

#[function_component(StatsPanel)]
pub fn stats_panel(p: &Props) -> Html {
    html! {
        <dl class="grid grid-cols-3 gap-2 text-center mb-4">
            <div>
                <dt class="text-sm text-slate-500">{ "Essais" }</dt>
                <dd id="attemptCount" class="text-xl font-bold">{ p.stats.count.to_string() }</dd>
            </div>
            <div>
                <dt class="text-sm text-slate-500">{ "Meilleur score" }</dt>
                <dd id="bestScore" class="text-xl font-bold">{ p.stats.best_label() }</dd>
            </div>
            <div>
                <dt class="text-sm text-slate-500">{ "Score moyen" }</dt>
                <dd id="averageScore" class="text-xl font-bold">{ p.stats.average_label() }</dd>
            </div>
        </dl>
    }
}
