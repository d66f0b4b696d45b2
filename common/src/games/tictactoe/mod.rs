mod board;
mod bot_controller;
mod runner;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, evaluate, is_full};
pub use bot_controller::{best_move, minimax};
pub use runner::{GameBroadcaster, TicTacToeRunner};
pub use session::{Phase, ScheduledTask, SessionError, SessionSnapshot, TicTacToeSession};
pub use settings::{MAX_DELAY_MS, TicTacToeSettings};
pub use types::{
    BOARD_SIZE, CELL_COUNT, COMPUTER_SIDE, Cell, HUMAN_SIDE, IllegalMove, Outcome, Side, WinningLine,
};
pub use win_detector::{WIN_LINES, check_win, check_win_with_line};
