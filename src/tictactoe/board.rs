//! Board representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

/// A cell on the board
///
/// Numerically a cell is one of {-1, 0, +1}: the opponent's mark, empty,
/// or the learning player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Opponent,
    Empty,
    Learner,
}

impl Cell {
    /// Numeric value of the cell
    pub fn value(self) -> i8 {
        match self {
            Cell::Opponent => -1,
            Cell::Empty => 0,
            Cell::Learner => 1,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Learner => 'X',
            Cell::Opponent => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            'X' | 'x' | '+' => Some(Cell::Learner),
            'O' | 'o' | '0' | '-' => Some(Cell::Opponent),
            _ => None,
        }
    }
}

/// The mark a player places
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// +1, the learning player's mark
    Learner,
    /// -1, the opposing player's mark
    Opponent,
}

impl Mark {
    /// Convert mark to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Mark::Learner => Cell::Learner,
            Mark::Opponent => Cell::Opponent,
        }
    }

    pub fn value(self) -> i8 {
        self.to_cell().value()
    }
}

/// A 3x3 board stored in row-major order (index = 3 * row + col)
///
/// Boards are `Copy` and never change in place: [`Board::place`] returns a
/// new board, so snapshots recorded earlier in a game stay valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Side length of the board
    pub const SIDE: usize = 3;
    /// Number of cells on the board
    pub const CELLS: usize = 9;

    /// Create an empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; Self::CELLS],
        }
    }

    pub fn from_cells(cells: [Cell; 9]) -> Self {
        Self { cells }
    }

    /// Parse a board from a 9-character grid.
    ///
    /// Whitespace and `|` separators are ignored. `X` is the learner (+1),
    /// `O` the opponent (-1) and `.` an empty cell.
    ///
    /// # Errors
    ///
    /// Returns error if the grid does not contain exactly 9 cells or a
    /// character is not a valid cell.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if chars.len() != Self::CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: Self::CELLS,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; Self::CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }
        Ok(Self { cells })
    }

    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Get cell at position (0-8)
    ///
    /// # Panics
    ///
    /// Panics if `position >= 9`; [`Board::place`] reports the same input
    /// as [`Error::InvalidPosition`](crate::Error::InvalidPosition).
    pub fn cell(&self, position: usize) -> Cell {
        self.cells[position]
    }

    /// Get cell at (row, col)
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is 3 or more.
    pub fn at(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < Self::SIDE && col < Self::SIDE,
            "cell ({row}, {col}) is off the board"
        );
        self.cells[Self::SIDE * row + col]
    }

    /// Empty positions in row-major order
    pub fn empty_positions(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| **cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// First empty position in row-major order
    pub fn first_empty(&self) -> Option<usize> {
        self.cells.iter().position(|&cell| cell == Cell::Empty)
    }

    pub fn is_full(&self) -> bool {
        !self.cells.contains(&Cell::Empty)
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Return a copy of the board with `mark` placed at `position`.
    ///
    /// # Errors
    ///
    /// Returns error if the position is out of bounds or already occupied.
    pub fn place(&self, position: usize, mark: Mark) -> Result<Board, crate::Error> {
        if position >= Self::CELLS {
            return Err(crate::Error::InvalidPosition { position });
        }
        if self.cells[position] != Cell::Empty {
            return Err(crate::Error::InvalidMove { position });
        }

        let mut next = *self;
        next.cells[position] = mark.to_cell();
        Ok(next)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..Self::SIDE {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..Self::SIDE {
                write!(f, "{}", self.at(row, col).to_char())?;
            }
        }
        Ok(())
    }
}
