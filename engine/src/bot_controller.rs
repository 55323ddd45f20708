use super::board::{Board, Mark, get_available_moves};
use super::win_detector::{Outcome, evaluate, has_won};

const WIN_SCORE: i32 = 10;
const LOSS_SCORE: i32 = -10;
const DRAW_SCORE: i32 = 0;

struct ScoredMove {
    index: Option<usize>,
    score: i32,
}

/// Exhaustive minimax over the full game tree. The board must be in a
/// non-terminal state; the caller's board is left untouched.
///
/// Deterministic: candidates are tried in ascending cell order and ties
/// keep the earliest candidate, so the same board always yields the same
/// move.
pub fn calculate_minimax_move(board: &Board, bot_mark: Mark) -> Result<usize, String> {
    let opponent_mark = bot_mark
        .opponent()
        .ok_or_else(|| "Bot mark must be X or O".to_string())?;

    match evaluate(board) {
        Outcome::Ongoing => {}
        Outcome::Won { mark, .. } => {
            return Err(format!(
                "Cannot calculate a move: {} has already won",
                mark.to_char()
            ));
        }
        Outcome::Draw => {
            return Err("Cannot calculate a move: the board is full".to_string());
        }
    }

    let mut scratch = *board;
    let best = minimax(&mut scratch, bot_mark, bot_mark, opponent_mark);

    best.index
        .ok_or_else(|| "No available moves on a non-terminal board".to_string())
}

fn minimax(board: &mut Board, to_move: Mark, bot_mark: Mark, opponent_mark: Mark) -> ScoredMove {
    // Terminal checks in fixed order: opponent line, bot line, full board.
    if has_won(board, opponent_mark) {
        return ScoredMove {
            index: None,
            score: LOSS_SCORE,
        };
    }
    if has_won(board, bot_mark) {
        return ScoredMove {
            index: None,
            score: WIN_SCORE,
        };
    }

    let available_moves = get_available_moves(board);
    if available_moves.is_empty() {
        return ScoredMove {
            index: None,
            score: DRAW_SCORE,
        };
    }

    let is_maximizing = to_move == bot_mark;
    let next_mark = if is_maximizing { opponent_mark } else { bot_mark };

    let mut best_index = None;
    let mut best_score = if is_maximizing { i32::MIN } else { i32::MAX };

    for idx in available_moves {
        board[idx] = to_move;
        let score = minimax(board, next_mark, bot_mark, opponent_mark).score;
        board[idx] = Mark::Empty;

        let improved = if is_maximizing {
            score > best_score
        } else {
            score < best_score
        };

        if improved {
            best_score = score;
            best_index = Some(idx);
        }
    }

    ScoredMove {
        index: best_index,
        score: best_score,
    }
}
