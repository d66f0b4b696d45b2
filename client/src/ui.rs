use common::games::tictactoe::{BOARD_SIZE, Side, SessionSnapshot};

use crate::config::UiConfig;

type Rgb = (u8, u8, u8);

const X_COLOR: Rgb = (0xff, 0x4b, 0x5c);
const O_COLOR: Rgb = (0x56, 0xcf, 0xe1);
const WIN_HIGHLIGHT: Rgb = (0x80, 0xed, 0x99);
const HOVER_COLOR: Rgb = (0xcd, 0xef, 0xfd);
const RESET: &str = "\x1b[0m";

pub struct BoardRenderer {
    use_colors: bool,
    show_cell_numbers: bool,
}

impl BoardRenderer {
    pub fn new(config: &UiConfig) -> Self {
        Self {
            use_colors: config.use_colors,
            show_cell_numbers: config.show_cell_numbers,
        }
    }

    pub fn render(&self, snapshot: &SessionSnapshot) -> String {
        let rows: Vec<String> = (0..BOARD_SIZE)
            .map(|row| {
                (0..BOARD_SIZE)
                    .map(|col| self.render_cell(snapshot, row * BOARD_SIZE + col))
                    .collect::<Vec<_>>()
                    .join("|")
            })
            .collect();

        format!(
            "Game {}\n{}\n\n{}",
            snapshot.game_number,
            rows.join("\n---+---+---\n"),
            snapshot.status
        )
    }

    fn render_cell(&self, snapshot: &SessionSnapshot, index: usize) -> String {
        let side = snapshot.board.get(index).and_then(|cell| cell.side());
        let text = match side {
            Some(side) => format!(" {} ", side),
            None if self.show_cell_numbers && snapshot.hoverable_cells.contains(&index) => {
                format!(" {} ", index)
            }
            None => "   ".to_string(),
        };

        if !self.use_colors {
            return text;
        }

        let foreground = match side {
            Some(Side::X) => X_COLOR,
            Some(Side::O) => O_COLOR,
            None => HOVER_COLOR,
        };
        let background = if snapshot.highlighted_cells.contains(&index) {
            let (r, g, b) = WIN_HIGHLIGHT;
            format!("\x1b[48;2;{};{};{}m", r, g, b)
        } else {
            String::new()
        };
        let weight = if snapshot.last_move == Some(index) {
            "1;4"
        } else {
            "1"
        };
        let (r, g, b) = foreground;
        format!(
            "{}\x1b[{};38;2;{};{};{}m{}{}",
            background, weight, r, g, b, text, RESET
        )
    }
}
