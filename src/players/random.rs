//! Uniform random player

use rand::{Rng, SeedableRng, random, rngs::StdRng};

use crate::{
    Error, Result,
    ports::{Move, Player},
    tictactoe::{Board, Mark},
};

/// Places its mark on an empty cell chosen uniformly at random
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    name: String,
    mark: Mark,
    rng: StdRng,
}

impl RandomPlayer {
    /// Create a random player for `mark`
    pub fn new(mark: Mark) -> Self {
        Self {
            name: "Random".to_string(),
            mark,
            rng: StdRng::seed_from_u64(random()),
        }
    }

    /// Create a random player with a deterministic seed
    pub fn with_seed(mark: Mark, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new(mark)
        }
    }

    /// Choose an empty cell and return the resulting board
    pub(crate) fn random_board(&mut self, board: &Board) -> Result<Board> {
        let moves = board.empty_positions();
        if moves.is_empty() {
            return Err(Error::NoValidMoves);
        }
        let index = self.rng.random_range(0..moves.len());
        board.place(moves[index], self.mark)
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new(Mark::Opponent)
    }
}

impl Player for RandomPlayer {
    fn make_move(&mut self, board: &Board) -> Result<Move> {
        let next = self.random_board(board)?;
        Ok(Move::new(next, None))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.rng = StdRng::seed_from_u64(seed);
        Ok(())
    }
}
