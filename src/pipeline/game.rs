//! Game loop between two players
//!
//! Player 0 is the learner: the state after each of its moves is recorded
//! in the trajectory, and every move flagged exploratory adds its state to
//! the exploratory set.

use serde::{Deserialize, Serialize};

use crate::{
    Error, Result,
    ports::{Move, Player},
    td_learning::Trajectory,
    tictactoe::{Board, GameResult, evaluate},
};

/// Loop state of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    InProgress,
    Terminal(GameResult),
}

/// Everything a finished game hands to the trainer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    /// Final result, from re-evaluating the final board
    pub result: GameResult,
    /// Learner afterstates and exploratory states
    pub trajectory: Trajectory,
    pub final_board: Board,
    /// Number of moves played in this game
    pub turns: usize,
}

/// A game in progress
pub struct Game<'a> {
    board: Board,
    players: [&'a mut dyn Player; 2],
    turn: usize,
    turns: usize,
    trajectory: Trajectory,
}

impl<'a> Game<'a> {
    /// Start from the empty board with player 0 to move
    pub fn new(player0: &'a mut dyn Player, player1: &'a mut dyn Player) -> Self {
        Self {
            board: Board::new(),
            players: [player0, player1],
            turn: 0,
            turns: 0,
            trajectory: Trajectory::new(),
        }
    }

    /// Start from a given position with `turn` (0 or 1) to move.
    ///
    /// # Errors
    ///
    /// Returns error if `turn` is not 0 or 1.
    pub fn from_position(
        board: Board,
        turn: usize,
        player0: &'a mut dyn Player,
        player1: &'a mut dyn Player,
    ) -> Result<Self> {
        if turn > 1 {
            return Err(Error::InvalidConfiguration {
                message: format!("turn must be 0 or 1, got {turn}"),
            });
        }
        Ok(Self {
            board,
            turn,
            ..Self::new(player0, player1)
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Index of the player to move
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// The game is over once the board's win probability is 0 or 1, which
    /// happens exactly for wins, losses and draws.
    pub fn state(&self) -> GameState {
        match GameResult::from_outcome(evaluate(&self.board)) {
            Some(result) => GameState::Terminal(result),
            None => GameState::InProgress,
        }
    }

    /// Play one move for the player whose turn it is
    pub fn take_turn(&mut self) -> Result<Move> {
        let mover = self.turn;
        let mv = self.players[mover].make_move(&self.board)?;
        self.board = mv.board;
        self.turn = 1 - mover;
        self.turns += 1;

        if mover == 0 {
            self.trajectory.push(mv.state);
        }
        if mv.is_exploratory() {
            self.trajectory.mark_exploratory(mv.state);
        }

        log::debug!(
            "{} played (state {}, exploratory {:?}, win probability {}):\n{}",
            self.players[mover].name(),
            mv.state,
            mv.exploratory,
            evaluate(&self.board).win_probability(),
            self.board
        );
        Ok(mv)
    }

    /// Play until a terminal position and return the record
    pub fn play(mut self) -> Result<GameRecord> {
        loop {
            match self.state() {
                GameState::InProgress => {
                    self.take_turn()?;
                }
                GameState::Terminal(result) => {
                    return Ok(GameRecord {
                        result,
                        trajectory: self.trajectory,
                        final_board: self.board,
                        turns: self.turns,
                    });
                }
            }
        }
    }
}
