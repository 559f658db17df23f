//! Observer port - abstraction for training observation
//!
//! Observers collect data during a training run without coupling the
//! training loop to specific output formats.

use crate::{
    Result,
    pipeline::{GameRecord, TrainingResult},
};

/// Observer trait for monitoring training
///
/// # Event Sequence
///
/// 1. `on_training_start(total_games)` - once at the beginning
/// 2. `on_game_end(game_num, record)` - after each game (and its update)
/// 3. `on_training_end(result)` - once at the end
///
/// # Examples
///
/// ```no_run
/// use td_tictactoe::{pipeline::GameRecord, ports::Observer};
///
/// struct CountingObserver {
///     games: usize,
/// }
///
/// impl Observer for CountingObserver {
///     fn on_game_end(&mut self, _game_num: usize, _record: &GameRecord) -> td_tictactoe::Result<()> {
///         self.games += 1;
///         Ok(())
///     }
/// }
/// ```
pub trait Observer: Send {
    /// Called when training starts.
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        Ok(())
    }

    /// Called when a game ends, after the learner has been updated.
    fn on_game_end(&mut self, _game_num: usize, _record: &GameRecord) -> Result<()> {
        Ok(())
    }

    /// Called when training completes.
    fn on_training_end(&mut self, _result: &TrainingResult) -> Result<()> {
        Ok(())
    }
}

/// Lend an observer to a pipeline and read it back after the run
impl<O: Observer + ?Sized> Observer for &mut O {
    fn on_training_start(&mut self, total_games: usize) -> Result<()> {
        (**self).on_training_start(total_games)
    }

    fn on_game_end(&mut self, game_num: usize, record: &GameRecord) -> Result<()> {
        (**self).on_game_end(game_num, record)
    }

    fn on_training_end(&mut self, result: &TrainingResult) -> Result<()> {
        (**self).on_training_end(result)
    }
}
