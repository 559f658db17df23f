//! Tabular TD(0) learning for tic-tac-toe
//!
//! This crate provides:
//! - Board representation with a bijective base-3 state encoding
//! - Terminal-state evaluation and win-probability values
//! - A TD(0) value table and an ε-greedy learning player
//! - Random and fixed-heuristic opponents
//! - A game loop and training pipeline with observers
//! - A command-line front end

pub mod cli;
pub mod error;
pub mod pipeline;
pub mod players;
pub mod ports;
pub mod td_learning;
pub mod tictactoe;

pub use error::{Error, Result};
pub use pipeline::{Game, GameRecord, TrainingConfig, TrainingPipeline, TrainingResult};
pub use players::{FirstEmptyPlayer, RandomPlayer};
pub use ports::{Move, Player};
pub use td_learning::{LearnerConfig, LearningPlayer, LearningRateSchedule, Trajectory, ValueTable};
pub use tictactoe::{Board, GameResult, Outcome, StateCode};
