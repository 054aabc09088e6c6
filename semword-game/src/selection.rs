//! Word picks for the triangulation power.

/// Number of words the triangulation power needs.
pub const CENTER_WORD_PICKS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionChange {
    Added,
    Removed,
    /// The set was full and the word was not already in it.
    Ignored,
}

/// Ordered set of at most [`CENTER_WORD_PICKS`] distinct words.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CenterSelection {
    words: Vec<String>,
}

impl CenterSelection {
    #[must_use]
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Add `word` if absent and there is room, remove it if present.
    pub fn toggle(&mut self, word: &str) -> SelectionChange {
        if let Some(pos) = self.words.iter().position(|w| w == word) {
            self.words.remove(pos);
            SelectionChange::Removed
        } else if self.words.len() < CENTER_WORD_PICKS {
            self.words.push(word.to_string());
            SelectionChange::Added
        } else {
            SelectionChange::Ignored
        }
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.words.len() == CENTER_WORD_PICKS
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Drain the picks once all three are chosen.
    pub fn take_complete(&mut self) -> Option<[String; CENTER_WORD_PICKS]> {
        if !self.is_complete() {
            return None;
        }
        let words = std::mem::take(&mut self.words);
        words.try_into().ok()
    }

    pub fn clear(&mut self) {
        self.words.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fourth_pick_is_a_no_op() {
        let mut sel = CenterSelection::new();
        for w in ["chat", "chien", "lion"] {
            assert_eq!(sel.toggle(w), SelectionChange::Added);
        }
        assert_eq!(sel.toggle("tigre"), SelectionChange::Ignored);
        assert_eq!(sel.len(), 3);
        assert!(!sel.contains("tigre"));
    }

    #[test]
    fn deselect_removes_only_that_word() {
        let mut sel = CenterSelection::new();
        sel.toggle("chat");
        sel.toggle("chien");
        sel.toggle("lion");
        assert_eq!(sel.toggle("chien"), SelectionChange::Removed);
        assert_eq!(sel.words(), ["chat".to_string(), "lion".to_string()]);
        assert!(sel.take_complete().is_none());
    }

    #[test]
    fn take_complete_drains_in_pick_order() {
        let mut sel = CenterSelection::new();
        sel.toggle("b");
        sel.toggle("a");
        sel.toggle("c");
        assert_eq!(
            sel.take_complete(),
            Some(["b".to_string(), "a".to_string(), "c".to_string()])
        );
        assert!(sel.is_empty());
    }
}
