use crate::config::AppConfig;
use crate::error::MoveError;
use crate::game::{GameOutcome, GameSession};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::info;

pub struct App {
    config: AppConfig,
    session: GameSession,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let session = GameSession::starting_with(config.game.first_player);
        let selected_column = session.board().width() / 2; // Start in middle
        App {
            config,
            session,
            selected_column,
            should_quit: false,
            message: None,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                if self.selected_column > 0 {
                    self.selected_column -= 1;
                }
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.session.board().width() {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char('r') => {
                self.restart();
            }
            _ => {}
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Start over with an empty board
    fn restart(&mut self) {
        self.session = GameSession::starting_with(self.config.game.first_player);
        self.selected_column = self.session.board().width() / 2;
        self.message = Some("New game started!".to_string());
        info!("new game started");
    }

    /// Drop piece in selected column
    fn drop_piece(&mut self) {
        match self.session.request_drop(self.selected_column) {
            Ok(report) => {
                self.message = match report.outcome {
                    GameOutcome::Ongoing => None,
                    GameOutcome::Win(player) => Some(format!(
                        "{} is the winner! Press 'r' to play again.",
                        self.config.players.name(player)
                    )),
                    GameOutcome::Tie => Some("Tie! Press 'r' to play again.".to_string()),
                };
            }
            Err(MoveError::ColumnFull { .. }) => {
                self.message = Some("Column is full!".to_string());
            }
            Err(MoveError::ColumnOutOfRange { .. }) => {
                self.message = Some("Invalid column!".to_string());
            }
            Err(MoveError::MoveAfterGameEnd) => {
                self.message = Some("Game over! Press 'r' to play again.".to_string());
            }
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        super::game_view::render(
            frame,
            &self.session,
            &self.config.players,
            self.selected_column,
            self.message.as_deref(),
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
