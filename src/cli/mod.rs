//! Command-line interface for training and evaluating the TD(0) learner

pub mod commands;
pub mod output;
