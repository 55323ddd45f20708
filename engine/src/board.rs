pub const CELL_COUNT: usize = 9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn to_char(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Mark> {
        match c {
            '.' | '_' | ' ' => Some(Mark::Empty),
            'X' | 'x' => Some(Mark::X),
            'O' | 'o' => Some(Mark::O),
            _ => None,
        }
    }
}

/// 3x3 board in row-major order: index = row * 3 + col.
pub type Board = [Mark; CELL_COUNT];

pub fn empty_board() -> Board {
    [Mark::Empty; CELL_COUNT]
}

/// Empty cell indices in ascending order.
pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(idx, _)| idx)
        .collect()
}

pub fn is_valid_move(board: &Board, idx: usize) -> bool {
    idx < CELL_COUNT && board[idx] == Mark::Empty
}

/// Parse a 9-character board string, e.g. "XX.O.....".
pub fn parse_board(s: &str) -> Result<Board, String> {
    let chars: Vec<char> = s.chars().collect();
    if chars.len() != CELL_COUNT {
        return Err(format!(
            "Board string must have exactly {} characters, got {}",
            CELL_COUNT,
            chars.len()
        ));
    }

    let mut board = empty_board();
    for (idx, &c) in chars.iter().enumerate() {
        board[idx] = Mark::from_char(c)
            .ok_or_else(|| format!("Invalid mark character '{}' at position {}", c, idx))?;
    }

    Ok(board)
}

pub fn format_board(board: &Board) -> String {
    board.iter().map(|mark| mark.to_char()).collect()
}
