//! Value table for TD(0) learning

use super::trajectory::Trajectory;
use crate::tictactoe::{STATE_COUNT, StateCode, decode, evaluate};

/// Win-probability estimates keyed by encoded state
///
/// Backed by one slot per possible state. Entries are created lazily on
/// first access with the terminal evaluation of the decoded board and are
/// never removed.
#[derive(Debug, Clone)]
pub struct ValueTable {
    values: Vec<Option<f64>>,
    populated: usize,
}

impl ValueTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            values: vec![None; STATE_COUNT as usize],
            populated: 0,
        }
    }

    /// Value an unseen state starts with: 1.0 win, 0.0 loss or draw, 0.5 ongoing
    pub fn bootstrap_value(state: StateCode) -> f64 {
        evaluate(&decode(state)).win_probability()
    }

    /// Get the estimate for a state, bootstrapping it on first access
    pub fn get(&mut self, state: StateCode) -> f64 {
        if let Some(value) = self.values[state.index()] {
            return value;
        }
        let value = Self::bootstrap_value(state);
        self.set(state, value);
        value
    }

    /// Get the estimate without creating an entry
    pub fn peek(&self, state: StateCode) -> Option<f64> {
        self.values[state.index()]
    }

    /// Overwrite the estimate for a state
    pub fn set(&mut self, state: StateCode, value: f64) {
        let slot = &mut self.values[state.index()];
        if slot.is_none() {
            self.populated += 1;
        }
        *slot = Some(value);
    }

    /// TD(0) update over one trajectory
    ///
    /// Walks the trajectory backward. Each state moves toward the state that
    /// followed it: V(s) ← V(s) + α[V(s') − V(s)]. The update is skipped
    /// when s' was reached by an exploratory move.
    pub fn td_update(&mut self, trajectory: &Trajectory, alpha: f64) {
        for pair in trajectory.states().windows(2).rev() {
            let (current, next) = (pair[0], pair[1]);
            let next_value = self.get(next);
            let current_value = self.get(current);
            if !trajectory.is_exploratory(next) {
                self.set(current, current_value + alpha * (next_value - current_value));
            }
        }
    }

    /// Number of states with an estimate
    pub fn len(&self) -> usize {
        self.populated
    }

    pub fn is_empty(&self) -> bool {
        self.populated == 0
    }
}

impl Default for ValueTable {
    fn default() -> Self {
        Self::new()
    }
}
