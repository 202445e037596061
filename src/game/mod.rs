//! Core Connect Four game logic: board occupancy, players, four-in-a-row
//! detection, and the session that enforces turn order and game end.

mod board;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, Position, COLS, MIN_DIMENSION, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameSession, MoveReport};
