use super::board::{Board, CELL_COUNT, Mark, empty_board};
use super::win_detector::{check_win, check_win_with_line};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    XWon,
    OWon,
    Draw,
}

/// One round of tic-tac-toe: the board, whose turn it is, and whether the
/// round has ended. Owned by the caller; the engine keeps no global state.
#[derive(Clone, Copy, Debug)]
pub struct GameState {
    pub board: Board,
    pub current_mark: Mark,
    pub status: GameStatus,
    pub last_move: Option<usize>,
}

impl GameState {
    /// Fresh board with X to move.
    pub fn new() -> Self {
        Self {
            board: empty_board(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
            last_move: None,
        }
    }

    pub fn place_mark(&mut self, idx: usize) -> Result<(), String> {
        if self.status != GameStatus::InProgress {
            return Err("Game is already over".to_string());
        }

        if idx >= CELL_COUNT {
            return Err(format!("Position {} is out of bounds", idx));
        }

        if self.board[idx] != Mark::Empty {
            return Err(format!("Cell {} is already marked", idx));
        }

        self.board[idx] = self.current_mark;
        self.last_move = Some(idx);

        self.check_game_over();

        if self.status == GameStatus::InProgress {
            self.switch_turn();
        }

        Ok(())
    }

    fn switch_turn(&mut self) {
        if self.current_mark == Mark::X {
            self.current_mark = Mark::O;
        } else {
            self.current_mark = Mark::X;
        }
    }

    fn check_game_over(&mut self) {
        if let Some(winner_mark) = check_win(&self.board) {
            self.status = match winner_mark {
                Mark::X => GameStatus::XWon,
                Mark::O => GameStatus::OWon,
                Mark::Empty => unreachable!(),
            };
            return;
        }

        if self.board.iter().all(|&cell| cell != Mark::Empty) {
            self.status = GameStatus::Draw;
        }
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    pub fn winner(&self) -> Option<Mark> {
        match self.status {
            GameStatus::XWon => Some(Mark::X),
            GameStatus::OWon => Some(Mark::O),
            _ => None,
        }
    }

    /// The completed triple, for callers that highlight it.
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        match self.status {
            GameStatus::XWon | GameStatus::OWon => {
                check_win_with_line(&self.board).map(|(_, line)| line)
            }
            _ => None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
