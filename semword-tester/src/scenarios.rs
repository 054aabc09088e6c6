//! Scripted runs against a live service.
use crate::checks;
use crate::client::ServiceClient;
use crate::reports::{CheckResult, Report};
use semword_game::{JokerKind, RequestError, normalize_guess};
use std::time::Instant;

pub const SMOKE: &str = "smoke";

fn record(report: &mut Report, name: &str, started: Instant, outcome: checks::CheckOutcome) {
    log::info!("{name}: {}", if outcome.is_ok() { "ok" } else { "failed" });
    report
        .checks
        .push(CheckResult::new(name, outcome, started.elapsed()));
}

/// Check detail for a failed call, led by the HTTP status when there is one.
fn failure(err: RequestError) -> String {
    match err.status() {
        Some(status) => format!("HTTP {status}: {err}"),
        None => err.to_string(),
    }
}

/// Health, reset, state, guess, projection, joker; each step is one check.
pub async fn smoke(client: &ServiceClient, word: &str) -> Report {
    let mut report = Report::new(SMOKE, client.base());

    let started = Instant::now();
    let outcome = client
        .system_health()
        .await
        .map(|body| body.to_string())
        .map_err(failure);
    record(&mut report, "health", started, outcome);

    let started = Instant::now();
    let outcome = client
        .reset_game()
        .await
        .map_err(failure)
        .and_then(|state| checks::fresh_game(&state));
    record(&mut report, "reset", started, outcome);

    let started = Instant::now();
    let state = client.game_state().await.map_err(failure);
    let outcome = state.as_ref().map_err(Clone::clone).and_then(checks::fresh_game);
    record(&mut report, "state", started, outcome);
    let Ok(state) = state else {
        return report;
    };

    let word = match normalize_guess(word) {
        Ok(word) => word,
        Err(err) => {
            record(&mut report, "guess", Instant::now(), Err(err.to_string()));
            return report;
        }
    };
    let started = Instant::now();
    let outcome = client
        .check_word(&word)
        .await
        .map_err(failure)
        .and_then(|guess| {
            checks::similarity_in_range(&guess)?;
            checks::history_contains(&guess, &word, state.attempts.len())
        });
    record(&mut report, "guess", started, outcome);

    let started = Instant::now();
    let outcome = client
        .visualization()
        .await
        .map_err(failure)
        .and_then(|points| checks::projection_well_formed(&points));
    record(&mut report, "visualization", started, outcome);

    let started = Instant::now();
    let Some(kind) = JokerKind::ALL
        .into_iter()
        .find(|kind| !state.jokers.get(*kind).is_exhausted())
    else {
        record(&mut report, "joker", started, Ok("no joker left to spend".to_string()));
        return report;
    };
    let outcome = client
        .use_joker(kind)
        .await
        .map_err(failure)
        .and_then(|answer| checks::joker_decremented(state.jokers, answer.jokers, kind));
    record(&mut report, "joker", started, outcome);

    report
}
