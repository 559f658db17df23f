//! Learner trajectory recorded during one game

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::tictactoe::StateCode;

/// States the learner produced with its own moves, earliest first, plus
/// the subset of them that were reached by exploratory moves
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trajectory {
    states: Vec<StateCode>,
    exploratory: HashSet<StateCode>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trajectory from recorded states and exploratory states
    pub fn from_parts(states: Vec<StateCode>, exploratory: &[StateCode]) -> Self {
        Self {
            states,
            exploratory: exploratory.iter().copied().collect(),
        }
    }

    pub fn push(&mut self, state: StateCode) {
        self.states.push(state);
    }

    pub fn mark_exploratory(&mut self, state: StateCode) {
        self.exploratory.insert(state);
    }

    pub fn states(&self) -> &[StateCode] {
        &self.states
    }

    pub fn is_exploratory(&self, state: StateCode) -> bool {
        self.exploratory.contains(&state)
    }

    pub fn exploratory_count(&self) -> usize {
        self.exploratory.len()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}
