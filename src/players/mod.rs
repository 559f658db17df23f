//! Non-learning players used as opponents and for exploration

pub mod first_empty;
pub mod random;

pub use first_empty::FirstEmptyPlayer;
pub use random::RandomPlayer;
