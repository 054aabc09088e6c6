//! Derived figures shown next to the attempt list.
use crate::model::{Attempt, ScoredWord};

/// Similarity at or above which a score is shown as "hot".
pub const HIGH_TIER_MIN: f64 = 0.7;
/// Similarity at or above which a score is shown as "warm".
pub const MEDIUM_TIER_MIN: f64 = 0.5;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AttemptStats {
    pub count: usize,
    pub best: f64,
    pub average: f64,
}

impl AttemptStats {
    #[must_use]
    pub fn from_attempts(attempts: &[Attempt]) -> Self {
        if attempts.is_empty() {
            return Self::default();
        }
        let best = attempts
            .iter()
            .map(|a| a.similarity)
            .fold(f64::NEG_INFINITY, f64::max);
        let sum: f64 = attempts.iter().map(|a| a.similarity).sum();
        #[allow(clippy::cast_precision_loss)]
        let average = sum / attempts.len() as f64;
        Self {
            count: attempts.len(),
            best,
            average,
        }
    }

    #[must_use]
    pub fn best_label(&self) -> String {
        self.label_for(self.best)
    }

    #[must_use]
    pub fn average_label(&self) -> String {
        self.label_for(self.average)
    }

    fn label_for(&self, value: f64) -> String {
        if self.count == 0 {
            "0%".to_string()
        } else {
            format_percent(value)
        }
    }
}

/// `0.42` -> `"42.0%"`.
#[must_use]
pub fn format_percent(similarity: f64) -> String {
    format!("{:.1}%", similarity * 100.0)
}

/// CSS width of the similarity bar: `0.42` -> `"42%"`, `0.375` -> `"37.5%"`.
#[must_use]
pub fn bar_width(similarity: f64) -> String {
    let pct = format!("{:.1}", (similarity * 100.0).clamp(0.0, 100.0));
    let trimmed = pct.strip_suffix(".0").unwrap_or(&pct);
    format!("{trimmed}%")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    #[must_use]
    pub fn of(similarity: f64) -> Self {
        if similarity >= HIGH_TIER_MIN {
            Self::High
        } else if similarity >= MEDIUM_TIER_MIN {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn text_class(self) -> &'static str {
        match self {
            Self::High => "text-emerald-600",
            Self::Medium => "text-amber-600",
            Self::Low => "text-red-600",
        }
    }
}

/// `"1 mot"`, `"3 mots"`.
#[must_use]
pub fn guess_count_label(count: usize) -> String {
    let plural = if count > 1 { "s" } else { "" };
    format!("{count} mot{plural}")
}

/// Entries ordered by descending similarity; ties keep arrival order.
#[must_use]
pub fn sorted_by_similarity(words: &[ScoredWord]) -> Vec<&ScoredWord> {
    let mut sorted: Vec<&ScoredWord> = words.iter().collect();
    sorted.sort_by(|a, b| b.similarity.total_cmp(&a.similarity));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attempts(scores: &[f64]) -> Vec<Attempt> {
        scores
            .iter()
            .enumerate()
            .map(|(i, s)| Attempt::new(format!("w{i}"), *s))
            .collect()
    }

    #[test]
    fn empty_history_shows_zero_percent() {
        let stats = AttemptStats::from_attempts(&[]);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.best_label(), "0%");
        assert_eq!(stats.average_label(), "0%");
    }

    #[test]
    fn best_and_average_follow_the_history() {
        let stats = AttemptStats::from_attempts(&attempts(&[0.2, 0.8, 0.5]));
        assert_eq!(stats.count, 3);
        assert_eq!(stats.best_label(), "80.0%");
        assert_eq!(stats.average_label(), "50.0%");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(0.42), "42.0%");
        assert_eq!(format_percent(0.1234), "12.3%");
        assert_eq!(format_percent(1.0), "100.0%");
        assert_eq!(format_percent(0.0), "0.0%");
    }

    #[test]
    fn bar_width_drops_trailing_zero() {
        assert_eq!(bar_width(0.42), "42%");
        assert_eq!(bar_width(0.375), "37.5%");
        assert_eq!(bar_width(0.0), "0%");
        assert_eq!(bar_width(1.0), "100%");
    }

    #[test]
    fn tiers_use_inclusive_lower_bounds() {
        assert_eq!(ScoreTier::of(0.7), ScoreTier::High);
        assert_eq!(ScoreTier::of(0.69), ScoreTier::Medium);
        assert_eq!(ScoreTier::of(0.5), ScoreTier::Medium);
        assert_eq!(ScoreTier::of(0.49), ScoreTier::Low);
    }

    #[test]
    fn guess_count_pluralizes_above_one() {
        assert_eq!(guess_count_label(0), "0 mot");
        assert_eq!(guess_count_label(1), "1 mot");
        assert_eq!(guess_count_label(2), "2 mots");
    }

    #[test]
    fn sorting_is_descending_and_stable() {
        let words = attempts(&[0.3, 0.9, 0.3, 0.6]);
        let order: Vec<&str> = sorted_by_similarity(&words)
            .iter()
            .map(|w| w.word.as_str())
            .collect();
        assert_eq!(order, vec!["w1", "w3", "w0", "w2"]);
    }
}
