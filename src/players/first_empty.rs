//! Fixed heuristic player

use crate::{
    Error, Result,
    ports::{Move, Player},
    tictactoe::{Board, Mark},
};

/// Always places the opponent mark on the first empty cell in row-major order
#[derive(Debug, Clone)]
pub struct FirstEmptyPlayer {
    name: String,
}

impl FirstEmptyPlayer {
    pub fn new() -> Self {
        Self {
            name: "First-Empty".to_string(),
        }
    }
}

impl Default for FirstEmptyPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for FirstEmptyPlayer {
    fn make_move(&mut self, board: &Board) -> Result<Move> {
        let position = board.first_empty().ok_or(Error::NoValidMoves)?;
        let next = board.place(position, Mark::Opponent)?;
        Ok(Move::new(next, None))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
