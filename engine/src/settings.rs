use serde::{Deserialize, Serialize};

/// Who plays the O side of a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum OpponentKind {
    Human,
    Minimax,
}

/// Which side is assigned X. X always opens the round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    Human,
    Computer,
    Random,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SessionSettings {
    pub opponent: OpponentKind,
    pub first_player_mode: FirstPlayerMode,
    /// Pacing delay before the computer's move is requested. Applied by the
    /// presentation layer only; the search itself never waits.
    pub bot_delay_ms: u64,
}

impl SessionSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.opponent == OpponentKind::Human && self.first_player_mode != FirstPlayerMode::Human
        {
            return Err(
                "first_player_mode requires a computer opponent to be meaningful".to_string(),
            );
        }
        if self.bot_delay_ms > 10_000 {
            return Err("bot_delay_ms must not exceed 10000".to_string());
        }
        Ok(())
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            opponent: OpponentKind::Minimax,
            first_player_mode: FirstPlayerMode::Human,
            bot_delay_ms: 400,
        }
    }
}
