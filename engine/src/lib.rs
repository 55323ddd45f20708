pub mod board;
pub mod bot_controller;
pub mod game_state;
pub mod logger;
pub mod session;
pub mod settings;
pub mod win_detector;

pub use board::{Board, CELL_COUNT, Mark, empty_board, format_board, get_available_moves, is_valid_move, parse_board};
pub use bot_controller::calculate_minimax_move;
pub use game_state::{GameState, GameStatus};
pub use session::{Scoreboard, Session};
pub use settings::{FirstPlayerMode, OpponentKind, SessionSettings};
pub use win_detector::{Outcome, WIN_LINES, check_win, check_win_with_line, evaluate, has_won};
