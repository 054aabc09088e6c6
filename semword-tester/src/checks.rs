//! Contract checks on service answers, independent of the transport.
use semword_game::{GameState, GuessResponse, JokerKind, Jokers, VisualizationPoint};

pub type CheckOutcome = Result<String, String>;

pub fn similarity_in_range(guess: &GuessResponse) -> CheckOutcome {
    if (0.0..=1.0).contains(&guess.similarity) {
        Ok(format!("similarity {:.3}", guess.similarity))
    } else {
        Err(format!("similarity {} outside [0, 1]", guess.similarity))
    }
}

/// A fresh word must show up in the returned history.
pub fn history_contains(guess: &GuessResponse, word: &str, before: usize) -> CheckOutcome {
    if !guess.history.iter().any(|a| a.word == word) {
        return Err(format!("'{word}' missing from history"));
    }
    if guess.history.len() < before {
        return Err(format!(
            "history shrank from {before} to {}",
            guess.history.len()
        ));
    }
    Ok(format!("{} attempt(s) in history", guess.history.len()))
}

pub fn fresh_game(state: &GameState) -> CheckOutcome {
    if state.attempts.is_empty() && !state.word_found {
        Ok("no attempts, word not found".to_string())
    } else {
        Err(format!(
            "reset left {} attempt(s), word_found={}",
            state.attempts.len(),
            state.word_found
        ))
    }
}

pub fn joker_decremented(before: Jokers, after: Jokers, kind: JokerKind) -> CheckOutcome {
    let (was, now) = (before.get(kind).remaining, after.get(kind).remaining);
    if now + 1 == was {
        Ok(format!("{kind}: {was} -> {now}"))
    } else {
        Err(format!("{kind}: expected {} left, got {now}", was.saturating_sub(1)))
    }
}

/// Exactly one target, every coordinate finite.
pub fn projection_well_formed(points: &[VisualizationPoint]) -> CheckOutcome {
    let targets = points.iter().filter(|p| p.is_target).count();
    if targets != 1 {
        return Err(format!("{targets} target point(s)"));
    }
    if let Some(bad) = points
        .iter()
        .find(|p| p.coordinates.iter().any(|c| !c.is_finite()))
    {
        return Err(format!("non-finite coordinates for '{}'", bad.word));
    }
    Ok(format!("{} point(s)", points.len()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use semword_game::{JokerStock, ScoredWord};

    fn guess(similarity: f64, history: &[&str]) -> GuessResponse {
        GuessResponse {
            similarity,
            history: history.iter().map(|w| ScoredWord::new(*w, 0.5)).collect(),
            word_found: false,
            similar_words: Vec::new(),
            error: None,
        }
    }

    fn point(word: &str, is_target: bool) -> VisualizationPoint {
        VisualizationPoint {
            word: word.to_string(),
            coordinates: [0.1, 0.2, 0.3],
            is_target,
            similarity: None,
        }
    }

    #[test]
    fn similarity_bounds_are_enforced() {
        assert!(similarity_in_range(&guess(0.42, &[])).is_ok());
        assert!(similarity_in_range(&guess(1.2, &[])).is_err());
    }

    #[test]
    fn history_must_include_the_guess() {
        assert!(history_contains(&guess(0.4, &["chien", "chat"]), "chat", 1).is_ok());
        assert!(history_contains(&guess(0.4, &["chien"]), "chat", 0).is_err());
        assert!(history_contains(&guess(0.4, &["chat"]), "chat", 3).is_err());
    }

    #[test]
    fn joker_count_drops_by_one() {
        let stock = |remaining| JokerStock {
            remaining,
            words_per_use: 3,
        };
        let before = Jokers {
            high_similarity: stock(3),
            medium_similarity: stock(3),
        };
        let after = Jokers {
            high_similarity: stock(2),
            ..before
        };
        assert!(joker_decremented(before, after, JokerKind::HighSimilarity).is_ok());
        assert!(joker_decremented(before, after, JokerKind::MediumSimilarity).is_err());
    }

    #[test]
    fn projection_needs_a_single_target() {
        assert!(projection_well_formed(&[point("chat", true), point("chien", false)]).is_ok());
        assert!(projection_well_formed(&[point("chien", false)]).is_err());
        let mut broken = point("lion", false);
        broken.coordinates[1] = f64::NAN;
        assert!(projection_well_formed(&[point("chat", true), broken]).is_err());
    }

    #[test]
    fn fresh_game_has_no_attempts() {
        assert!(fresh_game(&GameState::default()).is_ok());
        let played = GameState {
            attempts: vec![ScoredWord::new("chat", 0.3)],
            ..GameState::default()
        };
        assert!(fresh_game(&played).is_err());
    }
}
