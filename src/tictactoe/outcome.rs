//! Terminal-state evaluation

use serde::{Deserialize, Serialize};

use super::{Board, LineAnalyzer, Mark};

/// Status of a board from the learner's (+1) perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Draw,
    Ongoing,
}

impl Outcome {
    /// Win-probability value used to bootstrap the value table.
    ///
    /// Draws and losses both map to 0.0.
    pub fn win_probability(self) -> f64 {
        match self {
            Outcome::Win => 1.0,
            Outcome::Loss | Outcome::Draw => 0.0,
            Outcome::Ongoing => 0.5,
        }
    }

    pub fn is_terminal(self) -> bool {
        self != Outcome::Ongoing
    }
}

/// Final result of a completed game, from the learner's perspective
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

impl GameResult {
    /// Result of a terminal outcome, `None` while the game is ongoing
    pub fn from_outcome(outcome: Outcome) -> Option<Self> {
        match outcome {
            Outcome::Win => Some(GameResult::Win),
            Outcome::Loss => Some(GameResult::Loss),
            Outcome::Draw => Some(GameResult::Draw),
            Outcome::Ongoing => None,
        }
    }

    /// Classification code: Win = 1, Loss = -1, Draw = 2
    pub fn code(self) -> i8 {
        match self {
            GameResult::Win => 1,
            GameResult::Loss => -1,
            GameResult::Draw => 2,
        }
    }

    /// Signed score in [-1, 1] used for averaging: Win = 1, Draw = 0, Loss = -1
    pub fn score(self) -> f64 {
        match self {
            GameResult::Win => 1.0,
            GameResult::Draw => 0.0,
            GameResult::Loss => -1.0,
        }
    }
}

/// Evaluate a board: rows, columns, then diagonals are checked for a
/// completed line; otherwise the game is ongoing while any cell is empty.
///
/// A board with completed lines for both marks cannot arise from legal
/// play, and the first line found wins.
pub fn evaluate(board: &Board) -> Outcome {
    match LineAnalyzer::completed_line(board.cells()) {
        Some(Mark::Learner) => Outcome::Win,
        Some(Mark::Opponent) => Outcome::Loss,
        None if board.is_full() => Outcome::Draw,
        None => Outcome::Ongoing,
    }
}
