//! Player port - abstraction over move-selection strategies
//!
//! Implemented by:
//! - [`RandomPlayer`](crate::players::RandomPlayer) - uniform over empty cells
//! - [`FirstEmptyPlayer`](crate::players::FirstEmptyPlayer) - fixed heuristic
//! - [`LearningPlayer`](crate::td_learning::LearningPlayer) - greedy over learned values

use serde::{Deserialize, Serialize};

use crate::{
    Result,
    tictactoe::{Board, StateCode, coerce},
};

/// A move made by a player: the resulting position in both forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    /// Encoded resulting board
    pub state: StateCode,
    /// Resulting board
    pub board: Board,
    /// `Some(true)` for exploratory moves, `Some(false)` for greedy ones,
    /// `None` for strategies that never explore
    pub exploratory: Option<bool>,
}

impl Move {
    pub fn new(board: Board, exploratory: Option<bool>) -> Self {
        let snapshot = coerce(board);
        Self {
            state: snapshot.state,
            board: snapshot.board,
            exploratory,
        }
    }

    pub fn is_exploratory(&self) -> bool {
        self.exploratory == Some(true)
    }
}

/// Player trait - unified interface for all strategies
///
/// # Examples
///
/// ```
/// use td_tictactoe::{
///     ports::Player,
///     players::FirstEmptyPlayer,
///     tictactoe::{Board, Cell},
/// };
///
/// let mut player = FirstEmptyPlayer::new();
/// let board = Board::new();
/// let mv = player.make_move(&board).unwrap();
/// assert_eq!(mv.board.cell(0), Cell::Opponent);
/// assert_eq!(board.cell(0), Cell::Empty);
/// ```
pub trait Player: Send {
    /// Choose a move on `board` and return the resulting position.
    ///
    /// The input board is never modified; the returned board is a new value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoValidMoves`](crate::Error::NoValidMoves) if the
    /// board is full.
    fn make_move(&mut self, board: &Board) -> Result<Move>;

    /// Get the player's name.
    ///
    /// Used for identification in logs and summaries.
    fn name(&self) -> &str;

    /// Seed the player's internal random number generator.
    ///
    /// Deterministic players can ignore it.
    fn set_rng_seed(&mut self, _seed: u64) -> Result<()> {
        Ok(())
    }
}
