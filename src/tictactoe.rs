//! Tic-Tac-Toe board, state encoding and outcome evaluation

pub mod board;
pub mod codec;
pub mod lines;
pub mod outcome;

pub use board::{Board, Cell, Mark};
pub use codec::{STATE_COUNT, Snapshot, StateCode, coerce, decode, encode};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use outcome::{GameResult, Outcome, evaluate};
