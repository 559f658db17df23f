//! Line analysis for the 3x3 board

use super::{Cell, Mark};

/// Line indices in evaluation order: rows, columns, then diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// Utility for analyzing lines on the board
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Sum of the cell values along a line, in [-3, 3]
    pub fn line_sum(cells: &[Cell; 9], line: &[usize; 3]) -> i8 {
        line.iter().map(|&idx| cells[idx].value()).sum()
    }

    /// First completed line in evaluation order, and whose mark fills it
    pub fn completed_line(cells: &[Cell; 9]) -> Option<Mark> {
        WINNING_LINES
            .iter()
            .find_map(|line| match Self::line_sum(cells, line) {
                3 => Some(Mark::Learner),
                -3 => Some(Mark::Opponent),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_row() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::Learner;
        cells[1] = Cell::Learner;
        cells[2] = Cell::Learner;
        cells[4] = Cell::Opponent;
        cells[8] = Cell::Opponent;

        assert_eq!(LineAnalyzer::line_sum(&cells, &WINNING_LINES[0]), 3);
        assert_eq!(LineAnalyzer::completed_line(&cells), Some(Mark::Learner));
    }

    #[test]
    fn test_completed_column() {
        let mut cells = [Cell::Empty; 9];
        cells[1] = Cell::Opponent;
        cells[4] = Cell::Opponent;
        cells[7] = Cell::Opponent;
        cells[0] = Cell::Learner;

        assert_eq!(LineAnalyzer::line_sum(&cells, &WINNING_LINES[4]), -3);
        assert_eq!(LineAnalyzer::completed_line(&cells), Some(Mark::Opponent));
    }

    #[test]
    fn test_first_line_in_order_decides() {
        // two completed lines cannot arise in play
        let mut cells = [Cell::Empty; 9];
        for idx in [0, 1, 2] {
            cells[idx] = Cell::Learner;
        }
        for idx in [6, 7, 8] {
            cells[idx] = Cell::Opponent;
        }
        assert_eq!(LineAnalyzer::completed_line(&cells), Some(Mark::Learner));
    }

    #[test]
    fn test_mixed_line_sums_to_partial_value() {
        let mut cells = [Cell::Empty; 9];
        cells[0] = Cell::Learner;
        cells[4] = Cell::Learner;
        cells[8] = Cell::Opponent;

        assert_eq!(LineAnalyzer::line_sum(&cells, &WINNING_LINES[6]), 1);
        assert_eq!(LineAnalyzer::completed_line(&cells), None);
    }
}
