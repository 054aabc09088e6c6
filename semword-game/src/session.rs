//! Client-side session controller.
//!
//! [`GameSession`] owns the only live [`GameState`] of a page session. UI events
//! arrive as [`Action`]s; [`GameSession::dispatch`] performs the local part of
//! the transition and hands back the [`Command`] to send, and
//! [`GameSession::resolve`] merges the service's answer once it arrives.
//! The session never talks to the network itself.
use crate::error::{InputError, RequestError};
use crate::filter::WordFilter;
use crate::model::{Attempt, GameState, JokerKind, ScoredWord, clamp_similarity, normalize_all};
use crate::selection::{CENTER_WORD_PICKS, CenterSelection, SelectionChange};
use crate::stats::AttemptStats;
use crate::wire::{CenterWordResponse, GuessResponse, JokerResponse};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Uninitialized,
    Ready,
    Submitting,
    Resetting,
    UsingJoker(JokerKind),
    SelectingCenterWord,
}

/// Progress of the triangulation power.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CenterMode {
    #[default]
    Inactive,
    Picking,
    /// Three words are chosen and the request is in flight.
    Awaiting,
}

/// Everything the UI can ask the controller to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Load,
    EditGuess(String),
    SubmitGuess,
    Reset,
    UseJoker(JokerKind),
    ToggleCenterMode,
    PickWord(String),
    ShowVisualization,
    HideVisualization,
    SetFilter(WordFilter),
}

/// Session generation a request was issued in. Bumped by every reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    epoch: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    LoadState,
    CheckWord(String),
    Reset,
    UseJoker(JokerKind),
    CenterWord([String; CENTER_WORD_PICKS]),
}

impl Request {
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::LoadState => "initializing game",
            Self::CheckWord(_) => "checking word",
            Self::Reset => "resetting game",
            Self::UseJoker(_) => "using joker",
            Self::CenterWord(_) => "fetching center word",
        }
    }
}

/// A request the caller must send, tagged with the generation it belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub ticket: Ticket,
    pub request: Request,
}

/// Successful payload of a [`Request`].
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    State(GameState),
    Guess(GuessResponse),
    Joker(JokerResponse),
    CenterWord(CenterWordResponse),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    Applied,
    /// Answer to a request issued before the latest reset; discarded.
    Stale,
    /// The answer carried nothing to apply (e.g. an empty joker draw).
    Unchanged,
    Failed(RequestError),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct JokerHints {
    pub high_similarity: Vec<ScoredWord>,
    pub medium_similarity: Vec<ScoredWord>,
}

impl JokerHints {
    #[must_use]
    pub fn get(&self, kind: JokerKind) -> &[ScoredWord] {
        match kind {
            JokerKind::HighSimilarity => &self.high_similarity,
            JokerKind::MediumSimilarity => &self.medium_similarity,
        }
    }

    fn set(&mut self, kind: JokerKind, words: Vec<ScoredWord>) {
        match kind {
            JokerKind::HighSimilarity => self.high_similarity = words,
            JokerKind::MediumSimilarity => self.medium_similarity = words,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.high_similarity.is_empty() && self.medium_similarity.is_empty()
    }
}

/// Trim and lowercase a raw guess.
///
/// # Errors
///
/// [`InputError::EmptyGuess`] when nothing remains.
pub fn normalize_guess(raw: &str) -> Result<String, InputError> {
    let guess = raw.trim().to_lowercase();
    if guess.is_empty() {
        Err(InputError::EmptyGuess)
    } else {
        Ok(guess)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    phase: SessionPhase,
    state: Option<GameState>,
    draft: String,
    center: CenterMode,
    selection: CenterSelection,
    last_similarity: Option<f64>,
    revealed_similar: Vec<ScoredWord>,
    joker_hints: JokerHints,
    filter: WordFilter,
    show_visualization: bool,
    viz_revision: u64,
    /// Generation of the last reset the service confirmed.
    epoch: u64,
    /// Generation handed to new requests; runs ahead of `epoch` while a reset is out.
    issued_epoch: u64,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: SessionPhase::Uninitialized,
            state: None,
            draft: String::new(),
            center: CenterMode::Inactive,
            selection: CenterSelection::new(),
            last_similarity: None,
            revealed_similar: Vec::new(),
            joker_hints: JokerHints::default(),
            filter: WordFilter::All,
            show_visualization: false,
            viz_revision: 0,
            epoch: 0,
            issued_epoch: 0,
        }
    }

    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub const fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    #[must_use]
    pub fn attempts(&self) -> &[Attempt] {
        self.state.as_ref().map_or(&[], |s| s.attempts.as_slice())
    }

    #[must_use]
    pub fn stats(&self) -> AttemptStats {
        AttemptStats::from_attempts(self.attempts())
    }

    #[must_use]
    pub fn draft(&self) -> &str {
        &self.draft
    }

    #[must_use]
    pub const fn center_mode(&self) -> CenterMode {
        self.center
    }

    #[must_use]
    pub const fn selection(&self) -> &CenterSelection {
        &self.selection
    }

    /// Similarity of the latest checked guess, shown in the result banner.
    #[must_use]
    pub const fn last_similarity(&self) -> Option<f64> {
        self.last_similarity
    }

    #[must_use]
    pub fn revealed_similar(&self) -> &[ScoredWord] {
        &self.revealed_similar
    }

    #[must_use]
    pub const fn joker_hints(&self) -> &JokerHints {
        &self.joker_hints
    }

    #[must_use]
    pub const fn filter(&self) -> WordFilter {
        self.filter
    }

    #[must_use]
    pub const fn show_visualization(&self) -> bool {
        self.show_visualization
    }

    /// Bumped each time the 3D projection should be fetched again.
    #[must_use]
    pub const fn viz_revision(&self) -> u64 {
        self.viz_revision
    }

    /// Apply the local part of `action`; returns the request to send, if any.
    pub fn dispatch(&mut self, action: Action) -> Option<Command> {
        match action {
            Action::Load => Some(self.command(Request::LoadState)),
            Action::EditGuess(text) => {
                self.draft = text;
                None
            }
            Action::SubmitGuess => self.submit_guess(),
            Action::Reset => {
                self.issued_epoch += 1;
                self.phase = SessionPhase::Resetting;
                Some(self.command(Request::Reset))
            }
            Action::UseJoker(kind) => self.use_joker(kind),
            Action::ToggleCenterMode => {
                self.toggle_center_mode();
                None
            }
            Action::PickWord(word) => self.pick_word(&word),
            Action::ShowVisualization => {
                self.show_visualization = true;
                None
            }
            Action::HideVisualization => {
                self.show_visualization = false;
                None
            }
            Action::SetFilter(filter) => {
                self.filter = filter;
                None
            }
        }
    }

    /// Merge the answer to `command`.
    pub fn resolve(
        &mut self,
        command: &Command,
        result: Result<Response, RequestError>,
    ) -> Resolution {
        if command.ticket.epoch < self.epoch {
            log::debug!(
                "dropping stale answer while {}",
                command.request.describe()
            );
            return Resolution::Stale;
        }

        let resolution = match (&command.request, result) {
            (Request::Reset, Err(error)) => {
                log::error!("Error {}: {error}", Request::Reset.describe());
                self.center = CenterMode::Inactive;
                self.selection.clear();
                Resolution::Failed(error)
            }
            (request, Err(error)) => {
                log::error!("Error {}: {error}", request.describe());
                Resolution::Failed(error)
            }
            (Request::LoadState, Ok(Response::State(state))) => {
                self.state = Some(state.normalized());
                self.revealed_similar.clear();
                self.bump_viz();
                Resolution::Applied
            }
            (Request::Reset, Ok(Response::State(state))) => {
                self.epoch = self.epoch.max(command.ticket.epoch);
                self.apply_reset(state);
                Resolution::Applied
            }
            (Request::CheckWord(_), Ok(Response::Guess(guess))) => self.apply_guess(guess),
            (Request::UseJoker(kind), Ok(Response::Joker(joker))) => {
                self.apply_joker(*kind, joker)
            }
            (Request::CenterWord(_), Ok(Response::CenterWord(center))) => {
                self.apply_center_word(center)
            }
            (request, Ok(other)) => {
                let error = RequestError::InvalidResponse(format!(
                    "unexpected payload while {}: {other:?}",
                    request.describe()
                ));
                log::error!("Error {}: {error}", request.describe());
                Resolution::Failed(error)
            }
        };

        if matches!(command.request, Request::CenterWord(_)) {
            self.end_center_word();
        }
        self.settle();
        resolution
    }

    /// Leave triangulation, whatever became of the request.
    fn end_center_word(&mut self) {
        if self.center == CenterMode::Awaiting {
            self.center = CenterMode::Inactive;
            self.selection.clear();
        }
    }

    fn command(&self, request: Request) -> Command {
        Command {
            ticket: Ticket {
                epoch: self.issued_epoch,
            },
            request,
        }
    }

    fn submit_guess(&mut self) -> Option<Command> {
        let guess = match normalize_guess(&self.draft) {
            Ok(guess) => guess,
            Err(err) => {
                log::debug!("guess not submitted: {err}");
                return None;
            }
        };
        if self.state.is_none() {
            log::warn!("guess ignored: game state not loaded yet");
            return None;
        }
        self.phase = SessionPhase::Submitting;
        Some(self.command(Request::CheckWord(guess)))
    }

    fn use_joker(&mut self, kind: JokerKind) -> Option<Command> {
        let stock = self.state.as_ref()?.jokers.get(kind);
        if stock.is_exhausted() {
            log::warn!("no {kind} jokers remaining");
            return None;
        }
        self.phase = SessionPhase::UsingJoker(kind);
        Some(self.command(Request::UseJoker(kind)))
    }

    fn toggle_center_mode(&mut self) {
        match self.center {
            CenterMode::Inactive => {
                self.selection.clear();
                self.center = CenterMode::Picking;
                self.phase = SessionPhase::SelectingCenterWord;
            }
            CenterMode::Picking => {
                self.selection.clear();
                self.center = CenterMode::Inactive;
                self.settle();
            }
            // The request is already out; its answer or a failed reset ends the wait.
            CenterMode::Awaiting => {}
        }
    }

    fn pick_word(&mut self, word: &str) -> Option<Command> {
        if self.center != CenterMode::Picking {
            return None;
        }
        if self.selection.toggle(word) == SelectionChange::Ignored {
            return None;
        }
        let words = self.selection.clone().take_complete()?;
        self.center = CenterMode::Awaiting;
        Some(self.command(Request::CenterWord(words)))
    }

    fn apply_reset(&mut self, state: GameState) {
        self.state = Some(state.normalized());
        self.draft.clear();
        self.last_similarity = None;
        self.revealed_similar.clear();
        self.joker_hints = JokerHints::default();
        self.center = CenterMode::Inactive;
        self.selection.clear();
        self.bump_viz();
    }

    fn apply_guess(&mut self, guess: GuessResponse) -> Resolution {
        let Some(state) = self.state.as_mut() else {
            return Resolution::Unchanged;
        };
        if let Some(reason) = guess.error.as_deref() {
            log::warn!("guess refused by the service: {reason}");
        }
        state.attempts = normalize_all(guess.history);
        state.word_found = guess.word_found;
        self.last_similarity = Some(clamp_similarity(guess.similarity));
        self.draft.clear();
        if guess.word_found && !guess.similar_words.is_empty() {
            let similar = normalize_all(guess.similar_words);
            state.similar_words.clone_from(&similar);
            self.revealed_similar = similar;
        }
        self.bump_viz();
        Resolution::Applied
    }

    fn apply_joker(&mut self, kind: JokerKind, joker: JokerResponse) -> Resolution {
        if joker.joker_words.is_empty() {
            log::warn!("No joker words received");
            return Resolution::Unchanged;
        }
        let Some(state) = self.state.as_mut() else {
            return Resolution::Unchanged;
        };
        state.jokers = joker.jokers;
        self.joker_hints.set(kind, normalize_all(joker.joker_words));
        Resolution::Applied
    }

    fn apply_center_word(&mut self, center: CenterWordResponse) -> Resolution {
        let Some(state) = self.state.as_mut() else {
            return Resolution::Unchanged;
        };
        log::info!("center word: {} ({:.3})", center.word, center.similarity);
        state
            .attempts
            .push(Attempt::new(center.word, center.similarity));
        Resolution::Applied
    }

    /// Return to the idle phase matching what is still open.
    fn settle(&mut self) {
        self.phase = if self.state.is_none() {
            SessionPhase::Uninitialized
        } else if self.center == CenterMode::Inactive {
            SessionPhase::Ready
        } else {
            SessionPhase::SelectingCenterWord
        };
    }

    fn bump_viz(&mut self) {
        self.viz_revision = self.viz_revision.wrapping_add(1);
    }
}
