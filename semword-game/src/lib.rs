//! semword game core
//!
//! Platform-agnostic client logic for the semantic word-guessing game: the
//! session controller, the service's wire format, and the pure derivations
//! (scores, colors, chart figure) the views render. No DOM and no network.

pub mod config;
pub mod error;
pub mod filter;
pub mod model;
pub mod prefs;
pub mod selection;
pub mod session;
pub mod stats;
pub mod viz;
pub mod wire;

pub use error::{InputError, RequestError};
pub use filter::WordFilter;
pub use model::{Attempt, GameState, JokerKind, JokerStock, Jokers, ScoredWord, clamp_similarity};
pub use prefs::{COLOR_SCHEME_KEY, ColorScheme};
pub use selection::{CENTER_WORD_PICKS, CenterSelection, SelectionChange};
pub use session::{
    Action, CenterMode, Command, GameSession, JokerHints, Request, Resolution, Response,
    SessionPhase, Ticket, normalize_guess,
};
pub use stats::{AttemptStats, ScoreTier, bar_width, format_percent, guess_count_label};
pub use viz::{Figure, Rgb, build_figure, marker_size, point_color};
pub use wire::{
    CenterWordResponse, Endpoint, GuessResponse, JokerResponse, Method, VisualizationPoint,
    decode_game_state, decode_guess_response, decode_response,
};
