use super::board::{Board, Mark};

/// Winning triples in check order: rows top to bottom, columns left to
/// right, then the two diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Won { mark: Mark, line: [usize; 3] },
    Draw,
}

pub fn has_won(board: &Board, mark: Mark) -> bool {
    if mark == Mark::Empty {
        return false;
    }
    WIN_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| board[idx] == mark))
}

pub fn check_win(board: &Board) -> Option<Mark> {
    check_win_with_line(board).map(|(mark, _)| mark)
}

/// First completed line in WIN_LINES order. A board with more than one
/// completed line reports the earliest one.
pub fn check_win_with_line(board: &Board) -> Option<(Mark, [usize; 3])> {
    for line in WIN_LINES {
        let mark = board[line[0]];
        if mark != Mark::Empty && board[line[1]] == mark && board[line[2]] == mark {
            return Some((mark, line));
        }
    }
    None
}

pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = check_win_with_line(board) {
        return Outcome::Won { mark, line };
    }

    if board.iter().all(|&cell| cell != Mark::Empty) {
        return Outcome::Draw;
    }

    Outcome::Ongoing
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::parse_board;

    #[test]
    fn test_empty_board_is_ongoing() {
        let board = crate::board::empty_board();
        assert_eq!(evaluate(&board), Outcome::Ongoing);
    }

    #[test]
    fn test_partial_board_without_line_is_ongoing() {
        let board = parse_board("XO.OX.X..").unwrap();
        assert_eq!(evaluate(&board), Outcome::Ongoing);
    }

    #[test]
    fn test_each_win_line_detected() {
        for line in WIN_LINES {
            let mut board = crate::board::empty_board();
            for idx in line {
                board[idx] = Mark::X;
            }

            assert!(has_won(&board, Mark::X));
            assert!(!has_won(&board, Mark::O));
            assert_eq!(
                evaluate(&board),
                Outcome::Won {
                    mark: Mark::X,
                    line
                }
            );
        }
    }

    #[test]
    fn test_win_reports_exact_line() {
        // O holds the middle column, X has scattered marks
        let board = parse_board("XO.XOX.O.").unwrap();
        assert_eq!(
            evaluate(&board),
            Outcome::Won {
                mark: Mark::O,
                line: [1, 4, 7]
            }
        );
    }

    #[test]
    fn test_overlapping_potential_lines() {
        // X on 0, 1, 4, 8: main diagonal completed, top row not
        let board = parse_board("XXO.X.O.X").unwrap();
        assert_eq!(
            evaluate(&board),
            Outcome::Won {
                mark: Mark::X,
                line: [0, 4, 8]
            }
        );
    }

    #[test]
    fn test_double_line_reports_first_in_order() {
        // X completes both the top row and the left column; unreachable in
        // normal play but must not crash and must report the earliest line.
        let board = parse_board("XXXX.OX.O").unwrap();
        assert_eq!(
            evaluate(&board),
            Outcome::Won {
                mark: Mark::X,
                line: [0, 1, 2]
            }
        );
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = parse_board("XOXXOOOXX").unwrap();
        assert_eq!(check_win(&board), None);
        assert_eq!(evaluate(&board), Outcome::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_won() {
        let board = parse_board("XXXOOXOXO").unwrap();
        assert_eq!(
            evaluate(&board),
            Outcome::Won {
                mark: Mark::X,
                line: [0, 1, 2]
            }
        );
    }

    #[test]
    fn test_has_won_ignores_empty_mark() {
        let board = crate::board::empty_board();
        assert!(!has_won(&board, Mark::Empty));
    }
}
