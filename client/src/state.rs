use common::games::tictactoe::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCommand {
    PlaceMark { index: usize },
    NewGame,
    Help,
    Quit,
}

impl ClientCommand {
    pub fn parse(line: &str) -> Result<Self, String> {
        let input = line.trim();
        match input.to_ascii_lowercase().as_str() {
            "" => Err("Enter a cell number, 'new', 'help' or 'quit'".to_string()),
            "new" | "n" | "restart" => Ok(ClientCommand::NewGame),
            "help" | "h" | "?" => Ok(ClientCommand::Help),
            "quit" | "q" | "exit" => Ok(ClientCommand::Quit),
            other => match other.parse::<usize>() {
                Ok(index) if index < CELL_COUNT => Ok(ClientCommand::PlaceMark { index }),
                Ok(index) => Err(format!("Cell {} does not exist, use 0-{}", index, CELL_COUNT - 1)),
                Err(_) => Err(format!("Unknown command: {}", input)),
            },
        }
    }
}

pub const HELP_TEXT: &str = "Commands:\n  0-8   place X on that cell (row-major, 0 is top-left)\n  new   start a new game\n  help  show this text\n  quit  leave the game";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell_indices() {
        for index in 0..CELL_COUNT {
            assert_eq!(
                ClientCommand::parse(&format!(" {}\n", index)),
                Ok(ClientCommand::PlaceMark { index })
            );
        }
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(ClientCommand::parse("new"), Ok(ClientCommand::NewGame));
        assert_eq!(ClientCommand::parse("QUIT"), Ok(ClientCommand::Quit));
        assert_eq!(ClientCommand::parse("?"), Ok(ClientCommand::Help));
    }

    #[test]
    fn test_parse_rejects_out_of_range_cell() {
        let error = ClientCommand::parse("9").unwrap_err();
        assert!(error.contains("0-8"), "{}", error);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(ClientCommand::parse("").is_err());
        assert!(ClientCommand::parse("center").is_err());
        assert!(ClientCommand::parse("-1").is_err());
    }
}
