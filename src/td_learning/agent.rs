//! ε-greedy learning player over a TD(0) value table

use rand::{Rng, SeedableRng, rngs::StdRng, seq::IndexedRandom};
use serde::{Deserialize, Serialize};

use super::{trajectory::Trajectory, value_table::ValueTable};
use crate::{
    Error, Result,
    players::RandomPlayer,
    ports::{Move, Player},
    tictactoe::{Board, Mark, StateCode, encode},
};

/// Configuration for creating a [`LearningPlayer`].
///
/// # Examples
///
/// ```
/// use td_tictactoe::td_learning::{LearnerConfig, LearningPlayer};
///
/// let config = LearnerConfig::default().with_epsilon(0.1).with_seed(42);
/// let player = LearningPlayer::from_config(&config).unwrap();
/// assert_eq!(player.epsilon(), 0.1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearnerConfig {
    /// Probability of an exploratory move
    pub epsilon: f64,
    /// Random seed for reproducibility
    pub seed: Option<u64>,
}

impl LearnerConfig {
    pub const DEFAULT_EPSILON: f64 = 0.05;

    /// Set the exploration probability.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Set the random seed for deterministic behavior.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.epsilon) {
            return Err(Error::InvalidConfiguration {
                message: format!("exploration rate {} must be in [0, 1]", self.epsilon),
            });
        }
        Ok(())
    }
}

impl Default for LearnerConfig {
    fn default() -> Self {
        Self {
            epsilon: Self::DEFAULT_EPSILON,
            seed: None,
        }
    }
}

/// Learning player
///
/// With probability ε it hands the move to a random player using its own
/// mark and flags the move as exploratory. Otherwise it places its mark
/// where the resulting state has the highest estimated win probability,
/// breaking ties uniformly at random.
#[derive(Debug, Clone)]
pub struct LearningPlayer {
    name: String,
    values: ValueTable,
    epsilon: f64,
    explorer: RandomPlayer,
    rng: StdRng,
}

impl LearningPlayer {
    /// Create a learning player with the default exploration rate
    pub fn new() -> Self {
        Self {
            name: "TD(0)".to_string(),
            values: ValueTable::new(),
            epsilon: LearnerConfig::DEFAULT_EPSILON,
            explorer: RandomPlayer::new(Mark::Learner),
            rng: StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Create a learning player from a validated configuration
    pub fn from_config(config: &LearnerConfig) -> Result<Self> {
        config.validate()?;
        let mut player = Self {
            epsilon: config.epsilon,
            ..Self::new()
        };
        if let Some(seed) = config.seed {
            player.reseed(seed);
        }
        Ok(player)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.reseed(seed);
        self
    }

    /// The explorer is seeded with the first draw from the learner's stream
    fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
        let explorer_seed = self.rng.random::<u64>();
        self.explorer = RandomPlayer::with_seed(Mark::Learner, explorer_seed);
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn values(&self) -> &ValueTable {
        &self.values
    }

    /// Estimated win probability of a state, bootstrapping it if unseen
    pub fn value(&mut self, state: StateCode) -> f64 {
        self.values.get(state)
    }

    /// Apply the TD(0) update for one finished game
    pub fn update(&mut self, trajectory: &Trajectory, alpha: f64) {
        self.values.td_update(trajectory, alpha);
    }

    /// Greedy choice: every afterstate tied for the highest value, starting
    /// from a best value of 0.0
    fn greedy_board(&mut self, board: &Board) -> Result<Board> {
        let mut best_value = 0.0;
        let mut best = Vec::new();

        for position in board.empty_positions() {
            let candidate = board.place(position, Mark::Learner)?;
            let value = self.values.get(encode(&candidate));
            if value > best_value {
                best_value = value;
                best.clear();
                best.push(candidate);
            } else if value == best_value {
                best.push(candidate);
            }
        }

        best.choose(&mut self.rng).copied().ok_or(Error::NoValidMoves)
    }
}

impl Default for LearningPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for LearningPlayer {
    fn make_move(&mut self, board: &Board) -> Result<Move> {
        if self.rng.random::<f64>() < self.epsilon {
            let next = self.explorer.random_board(board)?;
            return Ok(Move::new(next, Some(true)));
        }

        let next = self.greedy_board(board)?;
        Ok(Move::new(next, Some(false)))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn set_rng_seed(&mut self, seed: u64) -> Result<()> {
        self.reseed(seed);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tictactoe::Cell;

    fn greedy(seed: u64) -> LearningPlayer {
        LearningPlayer::from_config(&LearnerConfig::default().with_epsilon(0.0).with_seed(seed))
            .unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        let board = Board::from_string("XX. OO. ...").unwrap();
        let mut player = greedy(1);

        let mv = player.make_move(&board).unwrap();

        assert_eq!(mv.board.cell(2), Cell::Learner);
        assert_eq!(mv.exploratory, Some(false));
        assert_eq!(board.cell(2), Cell::Empty);
    }

    #[test]
    fn test_prefers_highest_learned_value() {
        let board = Board::new();
        let mut player = greedy(2);
        let center = encode(&board.place(4, Mark::Learner).unwrap());
        player.values.set(center, 0.9);

        for _ in 0..20 {
            let mv = player.make_move(&board).unwrap();
            assert_eq!(mv.state, center);
        }
    }

    #[test]
    fn test_all_zero_values_choose_among_all_cells() {
        let board = Board::new();
        let mut player = greedy(3);
        for position in 0..9 {
            let state = encode(&board.place(position, Mark::Learner).unwrap());
            player.values.set(state, 0.0);
        }

        let mut seen = std::collections::HashSet::new();
        for _ in 0..300 {
            seen.insert(player.make_move(&board).unwrap().state);
        }
        assert_eq!(seen.len(), 9);
    }

    #[test]
    fn test_always_explores_with_epsilon_one() {
        let mut player =
            LearningPlayer::from_config(&LearnerConfig::default().with_epsilon(1.0).with_seed(4))
                .unwrap();
        let mv = player.make_move(&Board::new()).unwrap();
        assert_eq!(mv.exploratory, Some(true));
        assert_eq!(mv.board.occupied_count(), 1);
        assert!(mv.board.cells().contains(&Cell::Learner));
        // exploration does not consult the value table
        assert!(player.values().is_empty());
    }

    #[test]
    fn test_explorer_stream_differs_from_opponent_seed() {
        let seed = 17;
        let mut player =
            LearningPlayer::from_config(&LearnerConfig::default().with_epsilon(1.0).with_seed(seed))
                .unwrap();
        let mut opponent = RandomPlayer::with_seed(Mark::Learner, seed.wrapping_add(1));

        let board = Board::new();
        let explored: Vec<StateCode> = (0..20)
            .map(|_| player.make_move(&board).unwrap().state)
            .collect();
        let random: Vec<StateCode> = (0..20)
            .map(|_| opponent.make_move(&board).unwrap().state)
            .collect();
        assert_ne!(explored, random);
    }

    #[test]
    fn test_reseed_reproduces_exploration() {
        let mut a = greedy(8);
        let mut b = greedy(99);
        a.epsilon = 1.0;
        b.epsilon = 1.0;
        b.set_rng_seed(8).unwrap();

        let board = Board::new();
        for _ in 0..10 {
            assert_eq!(a.make_move(&board).unwrap(), b.make_move(&board).unwrap());
        }
    }

    #[test]
    fn test_full_board_has_no_moves() {
        let board = Board::from_string("XOXXOOOXX").unwrap();
        assert!(matches!(
            greedy(5).make_move(&board),
            Err(Error::NoValidMoves)
        ));
    }

    #[test]
    fn test_invalid_epsilon_rejected() {
        let config = LearnerConfig::default().with_epsilon(1.5);
        assert!(matches!(
            LearningPlayer::from_config(&config),
            Err(Error::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_update_delegates_to_value_table() {
        let mut player = greedy(6);
        let s0 = encode(&Board::from_string("X.. .O. ...").unwrap());
        let s1 = encode(&Board::from_string("XXX .O. O.O").unwrap());
        player.update(&Trajectory::from_parts(vec![s0, s1], &[]), 0.1);
        assert!((player.value(s0) - 0.55).abs() < 1e-12);
    }
}
