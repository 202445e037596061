//! Four-in-a-row detection by full board scan.
//!
//! Every cell is treated as the start of a line in each of four directions.
//! Lines that leave the board are disqualified rather than wrapped or clamped.

use super::{Board, Player, Position};

/// Number of same-owner cells needed to win.
pub const CONNECT: usize = 4;

/// Direction a candidate line extends from its starting cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    DiagonalDownRight,
    DiagonalDownLeft,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DiagonalDownRight,
        Direction::DiagonalDownLeft,
    ];

    /// (row, column) step between consecutive cells
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DiagonalDownRight => (1, 1),
            Direction::DiagonalDownLeft => (1, -1),
        }
    }
}

/// The four cells of a line starting at `start`, or `None` if any falls off the board.
pub fn line_from(board: &Board, start: Position, direction: Direction) -> Option<[Position; CONNECT]> {
    let (dr, dc) = direction.step();
    let mut line = [start; CONNECT];
    for (i, slot) in line.iter_mut().enumerate() {
        let row = start.row as isize + dr * i as isize;
        let col = start.col as isize + dc * i as isize;
        board.cell_at(row, col)?;
        *slot = Position::new(row as usize, col as usize);
    }
    Some(line)
}

/// First winning line for `player`, scanning rows top-down, columns left-right.
pub fn winning_line(board: &Board, player: Player) -> Option<[Position; CONNECT]> {
    let owned = player.to_cell();
    for row in 0..board.height() {
        for col in 0..board.width() {
            for direction in Direction::ALL {
                let Some(line) = line_from(board, Position::new(row, col), direction) else {
                    continue;
                };
                if line.iter().all(|p| board.get(p.row, p.col) == owned) {
                    return Some(line);
                }
            }
        }
    }
    None
}

/// Whether `player` has four in a row anywhere on the board
pub fn has_won(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{COLS, ROWS};

    fn board_with(pieces: &[(usize, usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(row, col, player) in pieces {
            board.place(row, col, player);
        }
        board
    }

    /// Reflect the board left to right.
    fn mirrored(board: &Board) -> Board {
        let mut out = Board::with_size(board.width(), board.height());
        for row in 0..board.height() {
            for col in 0..board.width() {
                if let Some(player) = board.get(row, col).owner() {
                    out.place(row, board.width() - 1 - col, player);
                }
            }
        }
        out
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();
        assert!(!has_won(&board, Player::One));
        assert!(!has_won(&board, Player::Two));
    }

    #[test]
    fn test_horizontal_win_bottom_row() {
        let board = board_with(&[
            (5, 0, Player::One),
            (5, 1, Player::One),
            (5, 2, Player::One),
            (5, 3, Player::One),
        ]);
        assert!(has_won(&board, Player::One));
        assert!(!has_won(&board, Player::Two));
        assert_eq!(
            winning_line(&board, Player::One),
            Some([
                Position::new(5, 0),
                Position::new(5, 1),
                Position::new(5, 2),
                Position::new(5, 3),
            ])
        );
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(6, Player::Two).unwrap();
        }
        assert_eq!(
            winning_line(&board, Player::Two),
            Some([
                Position::new(2, 6),
                Position::new(3, 6),
                Position::new(4, 6),
                Position::new(5, 6),
            ])
        );
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let board = board_with(&[
            (2, 3, Player::One),
            (3, 4, Player::One),
            (4, 5, Player::One),
            (5, 6, Player::One),
        ]);
        assert_eq!(
            winning_line(&board, Player::One).map(|line| line[0]),
            Some(Position::new(2, 3))
        );
    }

    #[test]
    fn test_diagonal_up_right_found_as_down_left() {
        let board = board_with(&[
            (5, 0, Player::One),
            (4, 1, Player::One),
            (3, 2, Player::One),
            (2, 3, Player::One),
        ]);
        // The scan reaches (2, 3) first and walks down-left to (5, 0).
        assert_eq!(
            winning_line(&board, Player::One),
            Some([
                Position::new(2, 3),
                Position::new(3, 2),
                Position::new(4, 1),
                Position::new(5, 0),
            ])
        );
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let board = board_with(&[
            (5, 0, Player::One),
            (5, 1, Player::One),
            (5, 2, Player::One),
            (4, 0, Player::One),
            (3, 0, Player::One),
            (4, 1, Player::One),
            (3, 2, Player::One),
        ]);
        assert!(!has_won(&board, Player::One));
    }

    #[test]
    fn test_interrupted_run_is_not_a_win() {
        let board = board_with(&[
            (5, 0, Player::One),
            (5, 1, Player::One),
            (5, 2, Player::Two),
            (5, 3, Player::One),
            (5, 4, Player::One),
        ]);
        assert!(!has_won(&board, Player::One));
    }

    #[test]
    fn test_lines_do_not_wrap_across_edges() {
        // Two at the right edge of row 4, two at the left edge of row 5.
        let board = board_with(&[
            (4, COLS - 2, Player::One),
            (4, COLS - 1, Player::One),
            (5, 0, Player::One),
            (5, 1, Player::One),
        ]);
        assert!(!has_won(&board, Player::One));
    }

    #[test]
    fn test_line_from_rejects_off_board() {
        let board = Board::new();
        assert!(line_from(&board, Position::new(0, COLS - 3), Direction::Horizontal).is_none());
        assert!(line_from(&board, Position::new(ROWS - 3, 0), Direction::Vertical).is_none());
        assert!(line_from(&board, Position::new(0, 2), Direction::DiagonalDownLeft).is_none());
        assert!(line_from(&board, Position::new(0, 3), Direction::DiagonalDownLeft).is_some());
        assert!(line_from(&board, Position::new(2, 3), Direction::DiagonalDownRight).is_some());
    }

    #[test]
    fn test_win_is_symmetric_under_mirroring() {
        let cases = [
            vec![(5, 0, Player::One), (5, 1, Player::One), (5, 2, Player::One), (5, 3, Player::One)],
            vec![(2, 1, Player::Two), (3, 1, Player::Two), (4, 1, Player::Two), (5, 1, Player::Two)],
            vec![(5, 0, Player::One), (4, 1, Player::One), (3, 2, Player::One), (2, 3, Player::One)],
            vec![(5, 0, Player::One), (5, 1, Player::One), (5, 2, Player::One), (4, 3, Player::One)],
        ];
        for pieces in cases {
            let board = board_with(&pieces);
            let flipped = mirrored(&board);
            for player in [Player::One, Player::Two] {
                assert_eq!(has_won(&board, player), has_won(&flipped, player));
            }
        }
    }

    #[test]
    fn test_win_on_minimum_board() {
        let mut board = Board::with_size(4, 4);
        for (row, col) in [(0, 3), (1, 2), (2, 1), (3, 0)] {
            board.place(row, col, Player::Two);
        }
        assert!(has_won(&board, Player::Two));
    }
}
