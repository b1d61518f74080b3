//! Loadable puzzle definitions.
//!
//! A [`PuzzleDefinition`] is the human-authored description a puzzle is built
//! from: the black marker character, the layout rows, and optional clue texts
//! per orientation. Definitions deserialize from TOML (hand-written files) or
//! JSON (host-generated ones), and this is the only
//! fallible surface of the crate: everything past
//! [`PuzzleData::from_definition`] is total.
//!
//! A built-in definition ships the promotional site's 17×22 grid so the
//! engine is usable without any file at all.
//!
//! # File format
//!
//! ```toml
//! black = "."
//! rows = [
//!     "AT.",
//!     "N.S",
//!     ".ER",
//! ]
//! across_clues = ["Clue for 1 Across", "Clue for 3 Across"]
//! down_clues = ["Clue for 1 Down", "Clue for 2 Down"]
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{PuzzleError, Result};
use crate::puzzle::data::PuzzleData;
use crate::puzzle::layout::{Layout, DEFAULT_BLACK_MARKER};

/// Rows of the built-in puzzle, the 17×22 grid from the promotional site.
const BUILTIN_ROWS: [&str; 22] = [
    "O...B..H.F...A.D.",
    "SYSTEMSTHINKER.A.",
    "L...K..M.X...G.S.",
    "O.C.ITALIA.SOUTH.",
    "N.U.N....T.C.E...",
    "O.R.DELIVEROO.JA.",
    "RUSK.......R...B.",
    "W.O..H....OPINION",
    "AFRICA.B...I...U.",
    "Y....DELTA.OWNIT.",
    "..A..E.A.N...E.M.",
    "..PRODUCTDESIGNER",
    "..P..A.K.R...R...",
    "..S.G..CROSSWORDS",
    "....R..A.I...N...",
    "...UIKIT.D.SKIING",
    ".F..D...L........",
    "VIPPS..NORWEGIAN.",
    ".G.A.C..N.H..D..B",
    ".M.S.O..D.I..E..A",
    ".AUTOLAYOUT.KAYAK",
    "...A.D..N.E..L..E",
];

fn default_black() -> char {
    DEFAULT_BLACK_MARKER
}

/// A deserializable puzzle description: marker, rows, and optional clues.
///
/// Clue texts are positional: the first entry of `across_clues` belongs to
/// the lowest-numbered across word, and so on. Words without a supplied text
/// get a generated placeholder; surplus texts are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    /// Marker character for black cells. Defaults to `'.'`.
    #[serde(default = "default_black")]
    pub black: char,

    /// Layout rows; every non-marker character is a solution letter.
    pub rows: Vec<String>,

    /// Clue texts for across words, in clue-number order.
    #[serde(default)]
    pub across_clues: Vec<String>,

    /// Clue texts for down words, in clue-number order.
    #[serde(default)]
    pub down_clues: Vec<String>,
}

impl PuzzleDefinition {
    /// Creates a definition from layout rows with the default marker and no
    /// clue texts.
    #[must_use]
    pub fn new(rows: Vec<String>) -> Self {
        Self {
            black: DEFAULT_BLACK_MARKER,
            rows,
            across_clues: Vec::new(),
            down_clues: Vec::new(),
        }
    }

    /// The built-in puzzle: the promotional site's 17×22 grid.
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(BUILTIN_ROWS.iter().map(|row| (*row).to_string()).collect())
    }

    /// Parses a definition from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Parse`] when the document is not valid TOML for
    /// this shape, and [`PuzzleError::Definition`] when validation fails.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let definition: Self =
            toml::from_str(input).map_err(|e| PuzzleError::Parse(e.to_string()))?;
        definition.validate()?;
        Ok(definition)
    }

    /// Parses a definition from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Parse`] when the document is not valid JSON for
    /// this shape, and [`PuzzleError::Definition`] when validation fails.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let definition: Self =
            serde_json::from_str(input).map_err(|e| PuzzleError::Parse(e.to_string()))?;
        definition.validate()?;
        Ok(definition)
    }

    /// Loads a definition from a file, dispatching on the extension: `.json`
    /// parses as JSON, anything else as TOML.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::Io`] when the file cannot be read, plus the
    /// parse/validation errors of the string constructors.
    pub fn from_path(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "loading puzzle definition");
        let contents = std::fs::read_to_string(path)?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
    }

    /// The layout described by this definition.
    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::with_black_marker(self.rows.clone(), self.black)
    }

    fn validate(&self) -> Result<()> {
        if self.rows.is_empty() {
            return Err(PuzzleError::Definition("layout has no rows".to_string()));
        }
        if self.rows.iter().all(|row| row.chars().all(|ch| ch == self.black)) {
            return Err(PuzzleError::Definition(
                "layout has no letter cells".to_string(),
            ));
        }
        Ok(())
    }
}

impl PuzzleData {
    /// Builds and indexes the puzzle a definition describes, applying its
    /// clue texts.
    ///
    /// Total by design: a definition that passed loading always builds, and a
    /// hand-constructed degenerate one simply yields a puzzle with no words.
    #[must_use]
    pub fn from_definition(definition: &PuzzleDefinition) -> Self {
        Self::build_with_clues(
            &definition.layout(),
            &definition.across_clues,
            &definition.down_clues,
        )
    }
}
