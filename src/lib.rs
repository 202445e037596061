//! # Connect Four
//!
//! A two-player Connect Four game. The core is a pure, synchronous board
//! model with four-in-a-row detection; a terminal UI built with Ratatui sits
//! on top as the input and rendering layer.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player, win detection, game session
//! - [`ui`]: Terminal UI: game view and key handling
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: File-backed tracing setup
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
