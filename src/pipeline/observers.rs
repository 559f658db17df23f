//! Observer implementations for training pipelines

use indicatif::{ProgressBar, ProgressStyle};

use super::{
    game::GameRecord,
    training::{Tally, TrainingResult},
};
use crate::{Result, ports::Observer};

/// Progress bar observer - shows training progress
pub struct ProgressObserver {
    progress_bar: Option<ProgressBar>,
    tally: Tally,
}

impl ProgressObserver {
    /// Create a new progress observer
    pub fn new() -> Self {
        Self {
            progress_bar: None,
            tally: Tally::default(),
        }
    }

    fn message(&self) -> String {
        format!(
            "W:{} D:{} L:{}",
            self.tally.wins, self.tally.draws, self.tally.losses
        )
    }
}

impl Default for ProgressObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl Observer for ProgressObserver {
    fn on_training_start(&mut self, total_games: usize) -> Result<()> {
        let pb = ProgressBar::new(total_games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
                .map_err(|e| crate::Error::ProgressBarTemplate {
                    message: e.to_string(),
                })?
                .progress_chars("=>-"),
        );
        self.tally = Tally::default();
        self.progress_bar = Some(pb);
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, record: &GameRecord) -> Result<()> {
        self.tally.record(record.result);
        if let Some(pb) = &self.progress_bar {
            pb.set_position(game_num as u64 + 1);
            if game_num % 100 == 0 {
                pb.set_message(self.message());
            }
        }
        Ok(())
    }

    fn on_training_end(&mut self, _result: &TrainingResult) -> Result<()> {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_with_message(self.message());
        }
        Ok(())
    }
}

/// Metrics observer - tracks results overall and per block of games
pub struct MetricsObserver {
    block_size: usize,
    total: Tally,
    block: Tally,
    learning_curve: Vec<f64>,
    turns: usize,
}

impl MetricsObserver {
    pub const DEFAULT_BLOCK_SIZE: usize = 1000;

    /// Create a metrics observer averaging over blocks of `block_size` games
    pub fn new(block_size: usize) -> Self {
        Self {
            block_size: block_size.max(1),
            total: Tally::default(),
            block: Tally::default(),
            learning_curve: Vec::new(),
            turns: 0,
        }
    }

    pub fn tally(&self) -> Tally {
        self.total
    }

    /// Average score of each completed block, in order
    pub fn learning_curve(&self) -> &[f64] {
        &self.learning_curve
    }

    /// Mean number of moves per game
    pub fn average_turns(&self) -> f64 {
        match self.total.games() {
            0 => 0.0,
            n => self.turns as f64 / n as f64,
        }
    }
}

impl Default for MetricsObserver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BLOCK_SIZE)
    }
}

impl Observer for MetricsObserver {
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        *self = Self::new(self.block_size);
        Ok(())
    }

    fn on_game_end(&mut self, _game_num: usize, record: &GameRecord) -> Result<()> {
        self.total.record(record.result);
        self.block.record(record.result);
        self.turns += record.turns;

        if self.block.games() == self.block_size {
            self.learning_curve.push(self.block.average_score());
            self.block = Tally::default();
        }
        Ok(())
    }
}

/// Log observer - logs the running score every `interval` games
pub struct LogObserver {
    interval: usize,
    tally: Tally,
}

impl LogObserver {
    pub const DEFAULT_INTERVAL: usize = 1000;

    pub fn new(interval: usize) -> Self {
        Self {
            interval: interval.max(1),
            tally: Tally::default(),
        }
    }
}

impl Default for LogObserver {
    fn default() -> Self {
        Self::new(Self::DEFAULT_INTERVAL)
    }
}

impl Observer for LogObserver {
    fn on_training_start(&mut self, _total_games: usize) -> Result<()> {
        self.tally = Tally::default();
        Ok(())
    }

    fn on_game_end(&mut self, game_num: usize, record: &GameRecord) -> Result<()> {
        self.tally.record(record.result);
        log::debug!(
            "game {}: result {} in {} turns, {} learner states ({} exploratory)",
            game_num + 1,
            record.result.code(),
            record.turns,
            record.trajectory.len(),
            record.trajectory.exploratory_count()
        );

        if (game_num + 1) % self.interval == 0 {
            log::info!(
                "{:>6} games  average score {:+.4}  W {} / D {} / L {}",
                game_num + 1,
                self.tally.average_score(),
                self.tally.wins,
                self.tally.draws,
                self.tally.losses
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        td_learning::Trajectory,
        tictactoe::{Board, GameResult},
    };

    fn record(result: GameResult, turns: usize) -> GameRecord {
        GameRecord {
            result,
            trajectory: Trajectory::new(),
            final_board: Board::new(),
            turns,
        }
    }

    #[test]
    fn test_metrics_learning_curve() {
        let mut observer = MetricsObserver::new(2);
        observer.on_training_start(5).unwrap();
        let results = [
            GameResult::Win,
            GameResult::Win,
            GameResult::Loss,
            GameResult::Draw,
            GameResult::Win,
        ];
        for (i, result) in results.into_iter().enumerate() {
            observer.on_game_end(i, &record(result, 6)).unwrap();
        }

        assert_eq!(observer.learning_curve(), &[1.0, -0.5]);
        assert_eq!(observer.tally().games(), 5);
        assert_eq!(observer.average_turns(), 6.0);
    }

    #[test]
    fn test_progress_observer_lifecycle() {
        let mut observer = ProgressObserver::new();
        observer.on_training_start(2).unwrap();
        observer.on_game_end(0, &record(GameResult::Win, 5)).unwrap();
        observer.on_game_end(1, &record(GameResult::Draw, 9)).unwrap();
        observer
            .on_training_end(&TrainingResult::new(1, 1, 0, 0))
            .unwrap();
        assert_eq!(observer.message(), "W:1 D:1 L:0");
    }
}
