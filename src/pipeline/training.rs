//! Training pipeline for the learning player

use serde::{Deserialize, Serialize};

use super::game::Game;
use crate::{
    Result,
    ports::{Observer, Player},
    td_learning::{LearningPlayer, LearningRateSchedule},
    tictactoe::GameResult,
};

/// Training configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of games to play
    pub num_games: usize,

    /// Random seed
    pub seed: Option<u64>,

    /// Learning rate per game
    pub schedule: LearningRateSchedule,

    /// Whether the learner is updated after each game
    pub learn: bool,
}

impl TrainingConfig {
    pub const DEFAULT_GAMES: usize = 50_000;

    pub fn with_games(mut self, num_games: usize) -> Self {
        self.num_games = num_games;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_schedule(mut self, schedule: LearningRateSchedule) -> Self {
        self.schedule = schedule;
        self
    }

    /// Play without updating the learner
    pub fn frozen(mut self) -> Self {
        self.learn = false;
        self
    }

    pub fn validate(&self) -> Result<()> {
        self.schedule.validate()
    }
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            num_games: Self::DEFAULT_GAMES,
            seed: None,
            schedule: LearningRateSchedule::default(),
            learn: true,
        }
    }
}

/// Result of a training run, from the learner's perspective
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingResult {
    /// Total games played
    pub total_games: usize,

    pub wins: usize,

    pub draws: usize,

    pub losses: usize,

    pub win_rate: f64,

    pub draw_rate: f64,

    pub loss_rate: f64,

    /// Mean of win = 1, draw = 0, loss = -1, in [-1, 1]
    pub average_score: f64,

    /// States in the learner's value table after the run
    pub table_size: usize,
}

impl TrainingResult {
    pub fn new(wins: usize, draws: usize, losses: usize, table_size: usize) -> Self {
        let total_games = wins + draws + losses;
        let rate = |count: usize| {
            if total_games > 0 {
                count as f64 / total_games as f64
            } else {
                0.0
            }
        };

        Self {
            total_games,
            wins,
            draws,
            losses,
            win_rate: rate(wins),
            draw_rate: rate(draws),
            loss_rate: rate(losses),
            average_score: rate(wins) - rate(losses),
            table_size,
        }
    }
}

/// Tally of game results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl Tally {
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Win => self.wins += 1,
            GameResult::Draw => self.draws += 1,
            GameResult::Loss => self.losses += 1,
        }
    }

    pub fn games(&self) -> usize {
        self.wins + self.draws + self.losses
    }

    /// Mean score in [-1, 1], 0.0 before any game
    pub fn average_score(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            n => (self.wins as f64 - self.losses as f64) / n as f64,
        }
    }
}

/// Runs games between a learning player and an opponent, updating the
/// learner after each game
pub struct TrainingPipeline<'o> {
    config: TrainingConfig,
    observers: Vec<Box<dyn Observer + 'o>>,
}

impl<'o> TrainingPipeline<'o> {
    /// Create a new training pipeline
    pub fn new(config: TrainingConfig) -> Self {
        Self {
            config,
            observers: Vec::new(),
        }
    }

    /// Add an observer to the pipeline
    pub fn with_observer(mut self, observer: Box<dyn Observer + 'o>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Play `num_games` games with the learner moving first
    pub fn run(
        &mut self,
        learner: &mut LearningPlayer,
        opponent: &mut dyn Player,
    ) -> Result<TrainingResult> {
        self.config.validate()?;
        self.seed_pair(learner, opponent)?;

        log::info!(
            "{} {} games: {} vs {}",
            if self.config.learn {
                "training"
            } else {
                "evaluating"
            },
            self.config.num_games,
            learner.name(),
            opponent.name()
        );

        for observer in &mut self.observers {
            observer.on_training_start(self.config.num_games)?;
        }

        let mut tally = Tally::default();
        for game_num in 0..self.config.num_games {
            let record = Game::new(&mut *learner, &mut *opponent).play()?;

            if self.config.learn {
                let alpha = self.config.schedule.alpha(game_num);
                learner.update(&record.trajectory, alpha);
            }
            tally.record(record.result);

            for observer in &mut self.observers {
                observer.on_game_end(game_num, &record)?;
            }
        }

        let result = TrainingResult::new(
            tally.wins,
            tally.draws,
            tally.losses,
            learner.values().len(),
        );

        for observer in &mut self.observers {
            observer.on_training_end(&result)?;
        }

        log::info!(
            "finished {} games: average score {:.4} (W {} / D {} / L {}), {} states valued",
            result.total_games,
            result.average_score,
            result.wins,
            result.draws,
            result.losses,
            result.table_size
        );

        Ok(result)
    }

    fn seed_pair(&self, learner: &mut LearningPlayer, opponent: &mut dyn Player) -> Result<()> {
        if let Some(seed) = self.config.seed {
            learner.set_rng_seed(seed)?;
            opponent.set_rng_seed(seed.wrapping_add(1))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, players::RandomPlayer};

    #[test]
    fn test_training_pipeline() {
        let config = TrainingConfig::default().with_games(10).with_seed(42);
        let mut pipeline = TrainingPipeline::new(config);
        let mut learner = LearningPlayer::new();
        let mut opponent = RandomPlayer::default();

        let result = pipeline.run(&mut learner, &mut opponent).unwrap();

        assert_eq!(result.total_games, 10);
        assert_eq!(result.wins + result.draws + result.losses, 10);
        assert!(result.table_size > 0);
    }

    #[test]
    fn test_result_rates() {
        let result = TrainingResult::new(6, 1, 3, 0);
        assert_eq!(result.total_games, 10);
        assert!((result.win_rate - 0.6).abs() < 1e-12);
        assert!((result.average_score - 0.3).abs() < 1e-12);

        let empty = TrainingResult::new(0, 0, 0, 0);
        assert_eq!(empty.average_score, 0.0);
    }

    #[test]
    fn test_tally_average() {
        let mut tally = Tally::default();
        tally.record(GameResult::Win);
        tally.record(GameResult::Draw);
        tally.record(GameResult::Loss);
        tally.record(GameResult::Win);
        assert_eq!(tally.games(), 4);
        assert!((tally.average_score() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_invalid_schedule_rejected_before_playing() {
        let config = TrainingConfig::default()
            .with_games(5)
            .with_schedule(LearningRateSchedule::constant(-0.1));
        let mut learner = LearningPlayer::new();
        let mut opponent = RandomPlayer::default();

        let err = TrainingPipeline::new(config)
            .run(&mut learner, &mut opponent)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration { .. }));
        assert!(learner.values().is_empty());
    }
}
