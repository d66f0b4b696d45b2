use std::fmt;

use super::types::{CELL_COUNT, Cell, IllegalMove, Outcome, Side};
use super::win_detector::check_win;

/// 3x3 board stored row-major:
/// ```text
///   0 1 2
///   3 4 5
///   6 7 8
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        self.get(index) == Some(Cell::Empty)
    }

    pub fn place(&mut self, index: usize, side: Side) -> Result<(), IllegalMove> {
        match self.cells.get_mut(index) {
            None => Err(IllegalMove::OutOfRange { index }),
            Some(cell) if !cell.is_empty() => Err(IllegalMove::Occupied { index }),
            Some(cell) => {
                *cell = side.into();
                Ok(())
            }
        }
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn evaluate(&self) -> Outcome {
        if let Some(side) = check_win(&self.cells) {
            return Outcome::Win(side);
        }
        if self.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    pub fn available_moves(&self) -> impl Iterator<Item = usize> + '_ {
        (0..CELL_COUNT).filter(|&i| self.cells[i].is_empty())
    }

    pub fn count(&self, side: Side) -> usize {
        let cell = Cell::from(side);
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

pub fn evaluate(board: &Board) -> Outcome {
    board.evaluate()
}

pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "---+---+---")?;
            }
            let marks: Vec<String> = cells
                .iter()
                .map(|cell| match cell.side() {
                    Some(side) => format!(" {} ", side),
                    None => "   ".to_string(),
                })
                .collect();
            write!(f, "{}", marks.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn board_from_str(layout: &str) -> Board {
    let cells: Vec<Cell> = layout
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            'X' => Cell::X,
            'O' => Cell::O,
            _ => Cell::Empty,
        })
        .collect();
    Board::from_cells(cells.try_into().expect("layout must describe 9 cells"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_marks_empty_cell() {
        let mut board = Board::new();
        board.place(4, Side::X).unwrap();
        assert_eq!(board.get(4), Some(Cell::X));
        assert_eq!(board.count(Side::X), 1);
    }

    #[test]
    fn test_place_on_occupied_cell_leaves_board_unchanged() {
        let mut board = board_from_str("X__ _O_ ___");
        let before = board;

        assert_eq!(board.place(0, Side::O), Err(IllegalMove::Occupied { index: 0 }));
        assert_eq!(board.place(4, Side::O), Err(IllegalMove::Occupied { index: 4 }));
        assert_eq!(board.place(4, Side::X), Err(IllegalMove::Occupied { index: 4 }));
        assert_eq!(board, before);
    }

    #[test]
    fn test_place_out_of_range() {
        let mut board = Board::new();
        assert_eq!(board.place(9, Side::X), Err(IllegalMove::OutOfRange { index: 9 }));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_reset_is_empty() {
        let board = Board::reset();
        assert!(board.cells().iter().all(|c| c.is_empty()));
        assert_eq!(board.available_moves().count(), 9);
    }

    #[test]
    fn test_evaluate_in_progress() {
        assert_eq!(evaluate(&Board::new()), Outcome::InProgress);
        assert_eq!(board_from_str("XO_ _X_ __O").evaluate(), Outcome::InProgress);
    }

    #[test]
    fn test_evaluate_win() {
        assert_eq!(board_from_str("XXX OO_ ___").evaluate(), Outcome::Win(Side::X));
        assert_eq!(board_from_str("X_O XO_ O_X").evaluate(), Outcome::Win(Side::O));
    }

    #[test]
    fn test_evaluate_win_on_full_board() {
        assert_eq!(board_from_str("XOX OXO OXX").evaluate(), Outcome::Win(Side::X));
    }

    #[test]
    fn test_evaluate_draw() {
        let board = board_from_str("XOX XOO OXX");
        assert!(is_full(&board));
        assert_eq!(board.evaluate(), Outcome::Draw);
    }

    #[test]
    fn test_available_moves_ascending() {
        let board = board_from_str("X_O _X_ O__");
        let moves: Vec<usize> = board.available_moves().collect();
        assert_eq!(moves, vec![1, 3, 5, 7, 8]);
    }

    fn completed_lines(board: &Board, side: Side) -> usize {
        let cell = Cell::from(side);
        crate::games::tictactoe::WIN_LINES
            .iter()
            .filter(|line| line.iter().all(|&i| board.get(i) == Some(cell)))
            .count()
    }

    fn visit_reachable(board: &mut Board, to_move: Side, visited: &mut usize) {
        *visited += 1;

        let x_won = completed_lines(board, Side::X) > 0;
        let o_won = completed_lines(board, Side::O) > 0;
        assert!(!(x_won && o_won), "both sides won on:\n{}", board);

        let x_count = board.count(Side::X);
        let o_count = board.count(Side::O);
        assert!(x_count == o_count || x_count == o_count + 1);

        let expected = if x_won {
            Outcome::Win(Side::X)
        } else if o_won {
            Outcome::Win(Side::O)
        } else if board.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        };
        assert_eq!(board.evaluate(), expected);

        if expected.is_terminal() {
            return;
        }

        let moves: Vec<usize> = board.available_moves().collect();
        for index in moves {
            board.place(index, to_move).unwrap();
            visit_reachable(board, to_move.opponent(), visited);
            board.clear(index);
        }
    }

    #[test]
    fn test_every_reachable_board_evaluates_consistently() {
        let mut board = Board::new();
        let mut visited = 0;

        visit_reachable(&mut board, Side::X, &mut visited);

        // Nodes in the full game tree of Tic-Tac-Toe, root included.
        assert_eq!(visited, 549_946);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_display() {
        let board = board_from_str("X__ _O_ __X");
        assert_eq!(board.to_string(), " X |   |   \n---+---+---\n   | O |   \n---+---+---\n   |   | X ");
    }
}
