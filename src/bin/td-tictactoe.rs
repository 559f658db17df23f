//! Trains a TD(0) learner against a random opponent, then evaluates it
//! against the first-empty heuristic with learning switched off.

use anyhow::Result;
use clap::Parser;
use td_tictactoe::cli::{
    commands::train::{TrainArgs, execute},
    output::init_logging,
};

fn main() -> Result<()> {
    let args = TrainArgs::parse();
    init_logging(args.verbose);
    execute(args)
}
