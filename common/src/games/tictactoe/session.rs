use std::fmt;
use std::time::Duration;

use super::board::Board;
use super::bot_controller::best_move;
use super::settings::TicTacToeSettings;
use super::types::{CELL_COUNT, COMPUTER_SIDE, Cell, HUMAN_SIDE, IllegalMove, Outcome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    HumanTurn,
    ComputerTurn,
    Finished(Outcome),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScheduledTask {
    ComputerMove,
    Reset,
}

impl ScheduledTask {
    pub fn delay(&self, settings: &TicTacToeSettings) -> Duration {
        match self {
            ScheduledTask::ComputerMove => settings.computer_move_delay(),
            ScheduledTask::Reset => settings.reset_delay(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    IllegalMove(IllegalMove),
    NotYourTurn,
    GameOver,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::IllegalMove(e) => write!(f, "Illegal move: {}", e),
            SessionError::NotYourTurn => write!(f, "Not your turn"),
            SessionError::GameOver => write!(f, "Game is already over"),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::IllegalMove(e) => Some(e),
            _ => None,
        }
    }
}

impl From<IllegalMove> for SessionError {
    fn from(e: IllegalMove) -> Self {
        SessionError::IllegalMove(e)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub game_number: u64,
    pub board: Board,
    pub phase: Phase,
    pub status: String,
    pub highlighted_cells: Vec<usize>,
    pub hoverable_cells: Vec<usize>,
    pub last_move: Option<usize>,
}

#[derive(Debug)]
pub struct TicTacToeSession {
    board: Board,
    phase: Phase,
    game_number: u64,
    last_move: Option<usize>,
}

impl Default for TicTacToeSession {
    fn default() -> Self {
        Self::new()
    }
}

impl TicTacToeSession {
    pub fn new() -> Self {
        Self {
            board: Board::reset(),
            phase: Phase::HumanTurn,
            game_number: 1,
            last_move: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_number(&self) -> u64 {
        self.game_number
    }

    pub fn last_move(&self) -> Option<usize> {
        self.last_move
    }

    pub fn handle_click(&mut self, index: usize) -> Result<Option<ScheduledTask>, SessionError> {
        match self.phase {
            Phase::HumanTurn => {}
            Phase::ComputerTurn => return Err(SessionError::NotYourTurn),
            Phase::Finished(_) => return Err(SessionError::GameOver),
        }

        self.board.place(index, HUMAN_SIDE)?;
        self.last_move = Some(index);

        Ok(Some(self.advance(Phase::ComputerTurn)))
    }

    pub fn play_computer_move(&mut self) -> Result<Option<ScheduledTask>, SessionError> {
        match self.phase {
            Phase::ComputerTurn => {}
            Phase::HumanTurn => return Err(SessionError::NotYourTurn),
            Phase::Finished(_) => return Err(SessionError::GameOver),
        }

        if let Some(index) = best_move(&self.board) {
            self.board.place(index, COMPUTER_SIDE)?;
            self.last_move = Some(index);
        }

        match self.advance(Phase::HumanTurn) {
            ScheduledTask::Reset => Ok(Some(ScheduledTask::Reset)),
            ScheduledTask::ComputerMove => Ok(None),
        }
    }

    fn advance(&mut self, next: Phase) -> ScheduledTask {
        let outcome = self.board.evaluate();
        if outcome.is_terminal() {
            self.phase = Phase::Finished(outcome);
            ScheduledTask::Reset
        } else {
            self.phase = next;
            ScheduledTask::ComputerMove
        }
    }

    pub fn reset(&mut self) {
        self.board = Board::reset();
        self.phase = Phase::HumanTurn;
        self.last_move = None;
        self.game_number += 1;
    }

    pub fn is_hoverable(&self, index: usize) -> bool {
        self.phase == Phase::HumanTurn && self.board.is_valid_move(index)
    }

    pub fn highlighted_cells(&self) -> Vec<usize> {
        match self.phase {
            Phase::Finished(Outcome::Draw) => (0..CELL_COUNT).collect(),
            Phase::Finished(Outcome::Win(side)) => {
                let cell = Cell::from(side);
                (0..CELL_COUNT)
                    .filter(|&i| self.board.get(i) == Some(cell))
                    .collect()
            }
            _ => Vec::new(),
        }
    }

    pub fn status_text(&self) -> String {
        match self.phase {
            Phase::HumanTurn => format!("Your turn ({})", HUMAN_SIDE),
            Phase::ComputerTurn => "AI is thinking...".to_string(),
            Phase::Finished(Outcome::Win(side)) => format!("🎉 {} wins!", side),
            Phase::Finished(_) => "It's a draw!".to_string(),
        }
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            game_number: self.game_number,
            board: self.board,
            phase: self.phase,
            status: self.status_text(),
            highlighted_cells: self.highlighted_cells(),
            hoverable_cells: (0..CELL_COUNT).filter(|&i| self.is_hoverable(i)).collect(),
            last_move: self.last_move,
        }
    }
}
