use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::Validate;

pub const MAX_DELAY_MS: u64 = 60_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSettings {
    pub computer_move_delay_ms: u64,
    pub reset_delay_ms: u64,
}

impl TicTacToeSettings {
    pub fn computer_move_delay(&self) -> Duration {
        Duration::from_millis(self.computer_move_delay_ms)
    }

    pub fn reset_delay(&self) -> Duration {
        Duration::from_millis(self.reset_delay_ms)
    }
}

impl Default for TicTacToeSettings {
    fn default() -> Self {
        Self {
            computer_move_delay_ms: 600,
            reset_delay_ms: 2000,
        }
    }
}

impl Validate for TicTacToeSettings {
    fn validate(&self) -> Result<(), String> {
        if self.computer_move_delay_ms > MAX_DELAY_MS {
            return Err(format!(
                "computer_move_delay_ms must not exceed {} ({} given)",
                MAX_DELAY_MS, self.computer_move_delay_ms
            ));
        }
        if self.reset_delay_ms > MAX_DELAY_MS {
            return Err(format!(
                "reset_delay_ms must not exceed {} ({} given)",
                MAX_DELAY_MS, self.reset_delay_ms
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = TicTacToeSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.computer_move_delay(), Duration::from_millis(600));
        assert_eq!(settings.reset_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_zero_delays_are_valid() {
        let settings = TicTacToeSettings {
            computer_move_delay_ms: 0,
            reset_delay_ms: 0,
        };
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_excessive_delay_is_rejected() {
        let settings = TicTacToeSettings {
            computer_move_delay_ms: MAX_DELAY_MS + 1,
            ..TicTacToeSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
