//! Terminal UI: the view layer that feeds column choices into a
//! [`GameSession`](crate::game::GameSession) and renders the results.

mod app;
mod game_view;

pub use app::App;
