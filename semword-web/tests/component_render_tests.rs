use futures::executor::block_on;
use semword_game::{AttemptStats, ScoredWord};
use semword_web::components::result_banner::{self, ResultBanner};
use semword_web::components::similar_words::{self, SimilarWords};
use semword_web::components::stats_panel::{self, StatsPanel};
use yew::LocalServerRenderer;

#[test]
fn banner_hidden_until_first_score() {
    let html = block_on(
        LocalServerRenderer::<ResultBanner>::with_props(result_banner::Props { similarity: None })
            .render(),
    );
    assert!(html.contains("hidden"));
    assert!(!html.contains("similarityScore"));
}

#[test]
fn banner_shows_percent_and_bar() {
    let html = block_on(
        LocalServerRenderer::<ResultBanner>::with_props(result_banner::Props {
            similarity: Some(0.42),
        })
        .render(),
    );
    assert!(html.contains("42.0%"));
    assert!(html.contains("width: 42%"));
}

#[test]
fn stats_panel_defaults_to_zero() {
    let html = block_on(
        LocalServerRenderer::<StatsPanel>::with_props(stats_panel::Props {
            stats: AttemptStats::default(),
        })
        .render(),
    );
    assert!(html.contains("attemptCount"));
    assert_eq!(html.matches("0%").count(), 2);
}

#[test]
fn stats_panel_reports_best_and_average() {
    let stats = AttemptStats::from_attempts(&[ScoredWord::new("a", 0.5), ScoredWord::new("b", 0.25)]);
    let html = block_on(
        LocalServerRenderer::<StatsPanel>::with_props(stats_panel::Props { stats }).render(),
    );
    assert!(html.contains("50.0%"));
    assert!(html.contains("37.5%"));
}

#[test]
fn similar_words_appear_once_found() {
    let empty = block_on(
        LocalServerRenderer::<SimilarWords>::with_props(similar_words::Props { words: Vec::new() })
            .render(),
    );
    assert!(empty.contains("mb-4 hidden"));

    let html = block_on(
        LocalServerRenderer::<SimilarWords>::with_props(similar_words::Props {
            words: vec![ScoredWord::new("chaton", 0.91)],
        })
        .render(),
    );
    assert!(html.contains("chaton"));
    assert!(html.contains("text-emerald-600"));
    assert!(!html.contains("mb-4 hidden"));
}
