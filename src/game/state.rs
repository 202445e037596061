use tracing::{debug, info};

use crate::error::MoveError;

use super::win::{self, CONNECT};
use super::{Board, Player, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Ongoing,
    Win(Player),
    Tie,
}

impl GameOutcome {
    /// Win or tie; no further moves are accepted
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}

/// Result of an accepted drop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub player: Player,
    pub position: Position,
    pub outcome: GameOutcome,
}

/// One game from empty board to terminal outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    current_player: Player,
    outcome: GameOutcome,
    winning_line: Option<[Position; CONNECT]>,
}

impl GameSession {
    /// Create a session on the standard board, Player 1 to move
    pub fn new() -> Self {
        Self::with_board(Board::new(), Player::One)
    }

    /// Create a session on an empty standard board with `first` to move
    pub fn starting_with(first: Player) -> Self {
        Self::with_board(Board::new(), first)
    }

    /// Create a session from an existing board with `first` to move.
    ///
    /// A board that already holds four in a row or is full starts terminal,
    /// so no further moves are accepted on it.
    pub fn with_board(board: Board, first: Player) -> Self {
        let mut session = GameSession {
            board,
            current_player: first,
            outcome: GameOutcome::Ongoing,
            winning_line: None,
        };
        // The player who did not move next made the last move
        for player in [first.other(), first] {
            if let Some(line) = win::winning_line(&session.board, player) {
                session.current_player = player;
                session.winning_line = Some(line);
                session.outcome = GameOutcome::Win(player);
                return session;
            }
        }
        if session.board.is_full() {
            session.outcome = GameOutcome::Tie;
        }
        session
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Cells of the four-in-a-row that ended the game, if it was won
    pub fn winning_line(&self) -> Option<[Position; CONNECT]> {
        self.winning_line
    }

    /// Get list of columns that can still take a piece
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.board.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// A rejected move leaves the session untouched. On success the outcome
    /// is re-evaluated and the turn passes only if the game is still ongoing.
    pub fn request_drop(&mut self, column: usize) -> Result<MoveReport, MoveError> {
        let result = self.try_drop(column);
        if let Err(err) = &result {
            debug!(column, player = self.current_player.id(), %err, "move rejected");
        }
        result
    }

    fn try_drop(&mut self, column: usize) -> Result<MoveReport, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::MoveAfterGameEnd);
        }

        let player = self.current_player;
        let position = self.board.drop_piece(column, player)?;
        debug!(player = player.id(), row = position.row, column, "piece placed");

        if let Some(line) = win::winning_line(&self.board, player) {
            info!(player = player.id(), "game won");
            self.winning_line = Some(line);
            self.outcome = GameOutcome::Win(player);
        } else if self.board.is_full() {
            info!(cells = self.board.filled_cells(), "game tied");
            self.outcome = GameOutcome::Tie;
        } else {
            self.current_player = player.other();
        }

        Ok(MoveReport {
            player,
            position,
            outcome: self.outcome,
        })
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
