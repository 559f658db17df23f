//! Game loop, training pipeline and observers

pub mod game;
pub mod observers;
pub mod training;

pub use game::{Game, GameRecord, GameState};
pub use observers::{LogObserver, MetricsObserver, ProgressObserver};
pub use training::{Tally, TrainingConfig, TrainingPipeline, TrainingResult};

pub use crate::ports::{Observer, Player};
