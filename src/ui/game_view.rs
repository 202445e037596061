use crate::config::PlayersConfig;
use crate::game::{Board, Cell, GameOutcome, GameSession, Position};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    players: &PlayersConfig,
    selected_column: usize,
    message: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(session.board().height() as u16 + 4), // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, players, chunks[0]);
    render_board(
        frame,
        session.board(),
        players,
        selected_column,
        &session.legal_columns(),
        session.winning_line().as_ref().map(|line| &line[..]),
        chunks[1],
    );
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn render_header(frame: &mut Frame, session: &GameSession, players: &PlayersConfig, area: Rect) {
    let (status, color) = match session.outcome() {
        GameOutcome::Ongoing => {
            let player = session.current_player();
            (
                format!("Current Player: {}", players.name(player)),
                players.color(player),
            )
        }
        GameOutcome::Win(player) => (
            format!("Game Over  |  {} wins", players.name(player)),
            players.color(player),
        ),
        GameOutcome::Tie => ("Game Over  |  Tie".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    players: &PlayersConfig,
    selected_column: usize,
    legal_columns: &[usize],
    winning_line: Option<&[Position]>,
    area: Rect,
) {
    let width = board.width();
    let mut lines = Vec::new();

    // Column numbers with selection indicator; unplayable columns are dimmed
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..width {
        let label = format!(" {} ", col + 1);
        let playable = legal_columns.contains(&col);
        let mut style = Style::default();
        if !playable {
            style = style.fg(Color::DarkGray);
        }
        if col == selected_column {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            if playable {
                style = style.fg(Color::Cyan);
            }
        }
        col_line.push(Span::styled(label, style));
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(width * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.height() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..width {
            let cell = board.get(row, col);
            let span = match cell.owner() {
                None => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
                Some(player) => {
                    let mut style = Style::default().fg(players.color(player));
                    let on_line = winning_line
                        .is_some_and(|line| line.contains(&Position::new(row, col)));
                    if on_line {
                        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
                    }
                    Span::styled(symbol(cell), style)
                }
            };
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..width {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn symbol(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => " . ",
        Cell::One | Cell::Two => " ● ",
    }
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  R: New game  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
