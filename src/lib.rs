//! Crosskey: the grid/word model and navigation engine behind an interactive
//! crossword widget.
//!
//! Crosskey turns a static crossword layout into an indexed grid of words and
//! drives everything interactive about it:
//! - Cursor movement that skips black cells and stops at the grid edge
//! - Word-aware traversal: in-word steps, Tab jumps in clue-number order
//! - Auto-advance while typing and word-hopping backspace
//! - Active/crossing word derivation and render-ready view models
//!
//! The presentation layer is an external collaborator: it supplies user
//! events (cell taps, key presses, typed letters) and consumes the engine's
//! output (selection, word highlights, per-cell display letters). The engine
//! knows nothing about scrolling, focus, or the DOM.
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Host / Presentation Layer (not in this crate)      │  ← Renders, feeds events
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Session state machine
//! │  - Event handling                                   │  ← Selection + answers
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Puzzle Layer (puzzle/)                             │  ← Immutable PuzzleData
//! │  - Layout → grid build                              │  ← Built once per load
//! │  - Word indexing, pruning, clue numbers             │
//! │  - Pure navigation queries                          │
//! │  - TOML/JSON definition loading                     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Observability Layers                      │
//! │  - Cells, words, grids, answers (domain/)           │
//! │  - Error types (domain/error)                       │
//! │  - Tracing setup (observability/)                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Session state machine with event handling
//! - [`domain`]: Core types (cells, words, grids, answers, errors)
//! - [`puzzle`]: Puzzle construction, loading, and pure queries
//! - [`ui`]: Render-ready view models
//! - [`observability`]: Tracing setup
//!
//! # Lifecycle
//!
//! 1. **Load**: build [`PuzzleData`] once, from a [`Layout`], a
//!    [`PuzzleDefinition`], or [`initialize`] with a [`Config`]
//! 2. **Session start**: create an empty [`Session`]; optionally
//!    [`Session::select_first`] for an initial cursor
//! 3. **Play**: feed each user action through [`handle_event`]; when it
//!    returns `true`, recompute [`Session::view_model`] and re-render
//!
//! `PuzzleData` is never mutated after construction and is shared read-only
//! by every query; `Session` is owned by exactly one widget instance. Each
//! event is one synchronous pass: no background tasks, no timers.
//!
//! # Examples
//!
//! ## Driving a session
//!
//! ```
//! use crosskey::{handle_event, Event, Layout, PuzzleData, Session};
//!
//! let puzzle = PuzzleData::build(&Layout::new(vec![
//!     "AT.".to_string(),
//!     "N.S".to_string(),
//!     ".ER".to_string(),
//! ]));
//!
//! let mut session = Session::new();
//! session.select_first(&puzzle);
//!
//! // Typing advances the cursor through the active word.
//! handle_event(&puzzle, &mut session, &Event::TypeLetter('a'));
//! handle_event(&puzzle, &mut session, &Event::TypeLetter('t'));
//!
//! let vm = session.view_model(&puzzle);
//! assert_eq!(vm.cells[0][0].entry, Some('A'));
//! ```
//!
//! ## One-shot setup
//!
//! ```
//! use crosskey::{initialize, Config};
//!
//! let engine = initialize(&Config::default())?;
//! assert!(engine.puzzle.word_count() > 0);
//! # Ok::<(), crosskey::PuzzleError>(())
//! ```

pub mod app;
pub mod domain;
pub mod puzzle;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Event, Selection, Session};
pub use domain::{
    Answers, Cell, CellKind, Direction, Grid, Orientation, Position, PuzzleError, Result, Word,
};
pub use puzzle::{Layout, PuzzleData, PuzzleDefinition};
pub use ui::{CellView, GridViewModel, WordView};

use std::collections::BTreeMap;
use std::path::Path;

/// Engine configuration supplied by the host.
///
/// Hosts that embed the engine pass configuration as plain strings (query
/// parameters, data attributes, environment); [`Config::from_map`] parses
/// that shape with fallback defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Path to a puzzle definition file (TOML or JSON).
    ///
    /// When unset, the built-in puzzle is used.
    pub puzzle_path: Option<String>,

    /// Tracing level directive for engine spans.
    ///
    /// Any `EnvFilter` directive string, e.g. `"debug"` or `"crosskey=trace"`.
    /// Default: `"info"`
    pub trace_level: Option<String>,
}

impl Config {
    /// Parses configuration from a host-supplied string map.
    ///
    /// # Parsing Rules
    ///
    /// - `puzzle_path`: used verbatim when non-empty
    /// - `trace_level`: used verbatim when non-empty
    ///
    /// Unknown keys are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use crosskey::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("trace_level".to_string(), "debug".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// assert!(config.puzzle_path.is_none());
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let non_empty = |key: &str| {
            map.get(key)
                .map(String::as_str)
                .filter(|value| !value.is_empty())
                .map(String::from)
        };

        Self {
            puzzle_path: non_empty("puzzle_path"),
            trace_level: non_empty("trace_level"),
        }
    }
}

/// A loaded puzzle paired with a fresh session.
///
/// The pair a host needs to run one widget instance: the immutable puzzle
/// value and the mutable session state. The fields are public; the engine
/// imposes no ownership pattern beyond "pass the puzzle by reference".
#[derive(Debug, Clone)]
pub struct Engine {
    /// The indexed puzzle, built once.
    pub puzzle: PuzzleData,

    /// The session state, initially empty.
    pub session: Session,
}

/// Initializes the engine from configuration.
///
/// Sets up tracing (idempotent), resolves the puzzle source (a definition
/// file when `puzzle_path` is set, the built-in puzzle otherwise), builds
/// [`PuzzleData`] once, and pairs it with an empty [`Session`].
///
/// # Errors
///
/// Returns the definition loading errors from
/// [`PuzzleDefinition::from_path`]; the built-in puzzle never fails.
///
/// # Example
///
/// ```
/// use crosskey::{initialize, Config};
///
/// let engine = initialize(&Config::default())?;
/// assert_eq!(engine.puzzle.rows(), 22);
/// # Ok::<(), crosskey::PuzzleError>(())
/// ```
pub fn initialize(config: &Config) -> Result<Engine> {
    observability::init_tracing(config);
    tracing::debug!(puzzle_path = ?config.puzzle_path, "initializing crossword engine");

    let definition = match &config.puzzle_path {
        Some(path) => PuzzleDefinition::from_path(Path::new(path))?,
        None => PuzzleDefinition::builtin(),
    };

    let puzzle = PuzzleData::from_definition(&definition);
    tracing::debug!(
        rows = puzzle.rows(),
        cols = puzzle.cols(),
        words = puzzle.word_count(),
        "puzzle ready"
    );

    Ok(Engine { puzzle, session: Session::new() })
}
