use rand::Rng;

use super::board::Mark;
use super::bot_controller::calculate_minimax_move;
use super::game_state::{GameState, GameStatus};
use super::settings::{FirstPlayerMode, OpponentKind, SessionSettings};

/// Per-mark win tally across rounds. Draws are counted separately, like the
/// third counter on a physical scoreboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl Scoreboard {
    fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::XWon => self.x_wins += 1,
            GameStatus::OWon => self.o_wins += 1,
            GameStatus::Draw => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

/// A match of consecutive rounds between a human and an opponent (second
/// human or the minimax bot). Runs synchronously on the caller's thread.
pub struct Session {
    pub game: GameState,
    pub scores: Scoreboard,
    pub human_mark: Mark,
    pub bot_mark: Option<Mark>,
    first_player_mode: FirstPlayerMode,
}

impl Session {
    pub fn new(settings: &SessionSettings) -> Result<Self, String> {
        settings.validate()?;

        let mut session = Self {
            game: GameState::new(),
            scores: Scoreboard::default(),
            human_mark: Mark::X,
            bot_mark: None,
            first_player_mode: settings.first_player_mode,
        };

        if settings.opponent == OpponentKind::Minimax {
            session.assign_marks();
        }

        Ok(session)
    }

    fn assign_marks(&mut self) {
        let human_gets_x = match self.first_player_mode {
            FirstPlayerMode::Human => true,
            FirstPlayerMode::Computer => false,
            FirstPlayerMode::Random => rand::rng().random(),
        };

        if human_gets_x {
            self.human_mark = Mark::X;
            self.bot_mark = Some(Mark::O);
        } else {
            self.human_mark = Mark::O;
            self.bot_mark = Some(Mark::X);
        }
    }

    pub fn is_bot_turn(&self) -> bool {
        !self.game.is_over() && self.bot_mark == Some(self.game.current_mark)
    }

    /// Apply a human move at the given cell. In a bot match, only accepted
    /// on the human's turn.
    pub fn place_human_mark(&mut self, idx: usize) -> Result<(), String> {
        if self.is_bot_turn() {
            return Err("Not your turn".to_string());
        }

        self.game.place_mark(idx)?;
        self.record_if_over();
        Ok(())
    }

    /// Let the bot pick and apply its move; returns the chosen cell.
    pub fn play_bot_turn(&mut self) -> Result<usize, String> {
        let bot_mark = self.bot_mark.ok_or_else(|| {
            "This session has no computer player".to_string()
        })?;

        if !self.is_bot_turn() {
            return Err("It is not the computer's turn".to_string());
        }

        let idx = calculate_minimax_move(&self.game.board, bot_mark)?;
        self.game.place_mark(idx)?;
        self.record_if_over();
        Ok(idx)
    }

    fn record_if_over(&mut self) {
        if self.game.is_over() {
            self.scores.record(self.game.status);
        }
    }

    /// Start the next round; the tally carries over.
    pub fn reset_board(&mut self) {
        self.game = GameState::new();
        if self.bot_mark.is_some() {
            self.assign_marks();
        }
    }

    /// Start over entirely: new round and a zeroed tally.
    pub fn reset_all(&mut self) {
        self.scores = Scoreboard::default();
        self.reset_board();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bot_session(first_player_mode: FirstPlayerMode) -> Session {
        Session::new(&SessionSettings {
            opponent: OpponentKind::Minimax,
            first_player_mode,
            bot_delay_ms: 0,
        })
        .unwrap()
    }

    fn human_session() -> Session {
        Session::new(&SessionSettings {
            opponent: OpponentKind::Human,
            first_player_mode: FirstPlayerMode::Human,
            bot_delay_ms: 0,
        })
        .unwrap()
    }

    #[test]
    fn test_human_first_assigns_x_to_human() {
        let session = bot_session(FirstPlayerMode::Human);
        assert_eq!(session.human_mark, Mark::X);
        assert_eq!(session.bot_mark, Some(Mark::O));
        assert!(!session.is_bot_turn());
    }

    #[test]
    fn test_computer_first_assigns_x_to_bot() {
        let session = bot_session(FirstPlayerMode::Computer);
        assert_eq!(session.human_mark, Mark::O);
        assert_eq!(session.bot_mark, Some(Mark::X));
        assert!(session.is_bot_turn());
    }

    #[test]
    fn test_rejects_human_move_on_bot_turn() {
        let mut session = bot_session(FirstPlayerMode::Computer);
        let err = session.place_human_mark(0).unwrap_err();
        assert!(err.contains("Not your turn"));
    }

    #[test]
    fn test_bot_replies_after_human_move() {
        let mut session = bot_session(FirstPlayerMode::Human);
        session.place_human_mark(0).unwrap();
        assert!(session.is_bot_turn());

        let idx = session.play_bot_turn().unwrap();
        assert_eq!(session.game.board[idx], Mark::O);
        assert!(!session.is_bot_turn());
    }

    #[test]
    fn test_play_bot_turn_rejected_in_human_match() {
        let mut session = human_session();
        assert!(session.play_bot_turn().is_err());
    }

    #[test]
    fn test_human_match_never_blocks_turns() {
        let mut session = human_session();
        session.place_human_mark(0).unwrap(); // X
        session.place_human_mark(4).unwrap(); // O
        session.place_human_mark(1).unwrap(); // X
        assert_eq!(session.game.board[4], Mark::O);
    }

    #[test]
    fn test_scoreboard_tallies_win() {
        let mut session = human_session();
        for idx in [0, 3, 1, 4, 2] {
            session.place_human_mark(idx).unwrap();
        }

        assert_eq!(session.scores.x_wins, 1);
        assert_eq!(session.scores.o_wins, 0);
        assert_eq!(session.scores.draws, 0);
    }

    #[test]
    fn test_scoreboard_tallies_draw() {
        let mut session = human_session();
        for idx in [0, 1, 2, 4, 3, 6, 5, 8, 7] {
            session.place_human_mark(idx).unwrap();
        }

        assert_eq!(session.scores.draws, 1);
    }

    #[test]
    fn test_reset_board_keeps_scores() {
        let mut session = human_session();
        for idx in [0, 3, 1, 4, 2] {
            session.place_human_mark(idx).unwrap();
        }

        session.reset_board();
        assert_eq!(session.scores.x_wins, 1);
        assert!(!session.game.is_over());
        assert_eq!(session.game.current_mark, Mark::X);
    }

    #[test]
    fn test_reset_all_clears_scores() {
        let mut session = human_session();
        for idx in [0, 3, 1, 4, 2] {
            session.place_human_mark(idx).unwrap();
        }

        session.reset_all();
        assert_eq!(session.scores, Scoreboard::default());
    }

    #[test]
    fn test_full_match_against_bot_never_human_win() {
        // Human plays a fixed greedy policy (lowest free cell); the bot must
        // end the round with a draw or a bot win.
        let mut session = bot_session(FirstPlayerMode::Human);

        while !session.game.is_over() {
            if session.is_bot_turn() {
                session.play_bot_turn().unwrap();
            } else {
                let idx = crate::board::get_available_moves(&session.game.board)[0];
                session.place_human_mark(idx).unwrap();
            }
        }

        assert_ne!(session.game.winner(), Some(session.human_mark));
    }
}
