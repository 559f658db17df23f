//! Tabular TD(0) learning
//!
//! The learner keeps a table of win-probability estimates for the states
//! it produces with its own moves ("afterstates"). After each game the
//! estimates are pulled toward the value of the learner's next afterstate:
//!
//! V(s) ← V(s) + α[V(s') − V(s)]
//!
//! Unseen states start at the terminal evaluation of their board (1.0 for
//! a win, 0.0 for a loss or draw, 0.5 otherwise), so terminal states never
//! need an update. Updates whose successor was reached by an exploratory
//! move are skipped.
//!
//! ## Usage Example
//!
//! ```
//! use td_tictactoe::{
//!     pipeline::{TrainingConfig, TrainingPipeline},
//!     players::RandomPlayer,
//!     td_learning::LearningPlayer,
//! };
//!
//! let mut learner = LearningPlayer::new().with_seed(7);
//! let mut opponent = RandomPlayer::default();
//! let config = TrainingConfig::default().with_games(100).with_seed(7);
//! let result = TrainingPipeline::new(config)
//!     .run(&mut learner, &mut opponent)
//!     .unwrap();
//! assert_eq!(result.total_games, 100);
//! ```

pub mod agent;
pub mod schedule;
pub mod trajectory;
pub mod value_table;

pub use agent::{LearnerConfig, LearningPlayer};
pub use schedule::LearningRateSchedule;
pub use trajectory::Trajectory;
pub use value_table::ValueTable;
