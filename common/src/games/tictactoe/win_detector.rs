use super::types::{CELL_COUNT, Cell, Side, WinningLine};

pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

pub fn check_win(cells: &[Cell; CELL_COUNT]) -> Option<Side> {
    check_win_with_line(cells).map(|line| line.side)
}

pub fn check_win_with_line(cells: &[Cell; CELL_COUNT]) -> Option<WinningLine> {
    WIN_LINES.iter().find_map(|&line| {
        let side = completed_by(cells, line)?;
        Some(WinningLine::new(side, line))
    })
}

fn completed_by(cells: &[Cell; CELL_COUNT], [a, b, c]: [usize; 3]) -> Option<Side> {
    let side = cells[a].side()?;
    if cells[b] == cells[a] && cells[c] == cells[a] {
        Some(side)
    } else {
        None
    }
}
