use super::board::Board;
use super::types::{COMPUTER_SIDE, HUMAN_SIDE, Outcome};

const WIN_SCORE: i32 = 1;
const DRAW_SCORE: i32 = 0;
const LOSS_SCORE: i32 = -1;

// Ties resolve to the lowest index.
pub fn best_move(board: &Board) -> Option<usize> {
    if board.evaluate().is_terminal() {
        return None;
    }

    let mut board = *board;
    let available_moves: Vec<usize> = board.available_moves().collect();

    let mut best_move = None;
    let mut best_score = i32::MIN;

    for index in available_moves {
        if board.place(index, COMPUTER_SIDE).is_err() {
            continue;
        }
        let score = minimax(&mut board, false);
        board.clear(index);

        if score > best_score {
            best_score = score;
            best_move = Some(index);
        }
    }

    best_move
}

pub fn minimax(board: &mut Board, maximizing: bool) -> i32 {
    match board.evaluate() {
        Outcome::Win(side) if side == COMPUTER_SIDE => return WIN_SCORE,
        Outcome::Win(_) => return LOSS_SCORE,
        Outcome::Draw => return DRAW_SCORE,
        Outcome::InProgress => {}
    }

    let mover = if maximizing { COMPUTER_SIDE } else { HUMAN_SIDE };
    let moves: Vec<usize> = board.available_moves().collect();

    if maximizing {
        let mut max_eval = i32::MIN;
        for index in moves {
            if board.place(index, mover).is_err() {
                continue;
            }
            max_eval = max_eval.max(minimax(board, false));
            board.clear(index);
        }
        max_eval
    } else {
        let mut min_eval = i32::MAX;
        for index in moves {
            if board.place(index, mover).is_err() {
                continue;
            }
            min_eval = min_eval.min(minimax(board, true));
            board.clear(index);
        }
        min_eval
    }
}
