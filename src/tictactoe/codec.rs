//! Base-3 encoding of boards into integers
//!
//! Cell `i` (row-major, `i = 3 * row + col`) contributes `(value + 1) * 3^i`,
//! so every board maps to exactly one integer in `[0, 3^9)` and back.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::board::{Board, Cell};
use crate::{Error, Result};

/// Number of distinct encoded states (3^9)
pub const STATE_COUNT: u32 = 19_683;

const POWERS_OF_THREE: [u32; 9] = [1, 3, 9, 27, 81, 243, 729, 2_187, 6_561];

/// An encoded board, guaranteed to lie in `[0, STATE_COUNT)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct StateCode(u16);

impl StateCode {
    /// Wrap a raw integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::StateOutOfRange`] if `value >= STATE_COUNT`.
    pub fn new(value: u32) -> Result<Self> {
        if value >= STATE_COUNT {
            return Err(Error::StateOutOfRange {
                value,
                limit: STATE_COUNT,
            });
        }
        Ok(Self(value as u16))
    }

    pub fn value(self) -> u32 {
        u32::from(self.0)
    }

    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Every encoded state, in increasing order
    pub fn all() -> impl Iterator<Item = StateCode> {
        (0..STATE_COUNT as u16).map(StateCode)
    }
}

impl TryFrom<u32> for StateCode {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::new(value)
    }
}

impl From<StateCode> for u32 {
    fn from(state: StateCode) -> Self {
        state.value()
    }
}

impl fmt::Display for StateCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Encode a board as its base-3 digit sum
pub fn encode(board: &Board) -> StateCode {
    let value: u32 = board
        .cells()
        .iter()
        .zip(POWERS_OF_THREE)
        .map(|(cell, power)| (cell.value() + 1) as u32 * power)
        .sum();
    StateCode(value as u16)
}

/// Decode a state back into its board
pub fn decode(state: StateCode) -> Board {
    let mut remaining = state.value();
    let mut cells = [Cell::Empty; Board::CELLS];

    for i in (0..Board::CELLS).rev() {
        let digit = remaining / POWERS_OF_THREE[i];
        remaining -= digit * POWERS_OF_THREE[i];
        // digit is 0, 1 or 2 because state < 3^9
        cells[i] = match digit {
            0 => Cell::Opponent,
            1 => Cell::Empty,
            _ => Cell::Learner,
        };
    }

    Board::from_cells(cells)
}

/// Both representations of one position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Snapshot {
    pub state: StateCode,
    pub board: Board,
}

impl From<Board> for Snapshot {
    fn from(board: Board) -> Self {
        Self {
            state: encode(&board),
            board,
        }
    }
}

impl From<StateCode> for Snapshot {
    fn from(state: StateCode) -> Self {
        Self {
            state,
            board: decode(state),
        }
    }
}

/// Accept either a board or an encoded state and return both.
pub fn coerce(position: impl Into<Snapshot>) -> Snapshot {
    position.into()
}
