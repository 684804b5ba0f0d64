//! UI rendering using ratatui.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::app::App;
use crate::game::{Board, GameStatus, Player, Square};

/// Draws the main UI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(12),
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(f.area());

    let title = match app.user_email() {
        Some(email) => format!("Excuse Me! - Ta Te Ti ({})", email),
        None => "Excuse Me! - Ta Te Ti".to_string(),
    };
    let title = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    render_board(f, chunks[1], app);

    let status = Paragraph::new(app.status_message())
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    f.render_widget(status, chunks[2]);

    render_side_panel(f, chunks[3], app);

    let help = Paragraph::new(
        "Arrows: move | Enter/1-9: place | N: new game | R: clear | E/S: excuse (en/es) | Q: quit",
    )
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, chunks[4]);
}

/// Renders the sync indicator and the last fetched excuse.
fn render_side_panel(f: &mut Frame, area: Rect, app: &App) {
    let sync = app.sync_status();
    let mirror_line = match (sync.remote_id(), sync.last_error()) {
        (Some(id), _) => format!("Mirrored remotely as {}", id),
        (None, Some(error)) => format!("Not mirrored: {}", error),
        (None, None) => "Not mirrored yet".to_string(),
    };
    let excuse_line = if app.excuse_pending() {
        "Fetching excuse...".to_string()
    } else {
        match app.excuse() {
            Some((language, excuse)) => format!("\u{201c}{}\u{201d} ({})", excuse, language),
            None => "Press 'e' or 's' for an excuse.".to_string(),
        }
    };

    let panel = Paragraph::new(format!("{}\n{}", mirror_line, excuse_line))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Backend"));
    f.render_widget(panel, area);
}

/// Renders the tic-tac-toe board with cursor and winning-line highlights.
fn render_board(f: &mut Frame, area: Rect, app: &App) {
    let board = app.state().board();
    let winning_line: Option<[usize; 3]> = match app.state().status() {
        GameStatus::Won { line, .. } => Some(*line),
        _ => None,
    };

    let board_area = center_rect(area, 40, 11);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    render_row(f, rows[0], board, 0, app.cursor(), winning_line);
    render_separator(f, rows[1]);
    render_row(f, rows[2], board, 3, app.cursor(), winning_line);
    render_separator(f, rows[3]);
    render_row(f, rows[4], board, 6, app.cursor(), winning_line);
}

fn render_row(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    start: usize,
    cursor: usize,
    winning_line: Option<[usize; 3]>,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(33),
            Constraint::Length(1),
            Constraint::Percentage(34),
        ])
        .split(area);

    render_square(f, cols[0], board, start, cursor, winning_line);
    render_vertical_sep(f, cols[1]);
    render_square(f, cols[2], board, start + 1, cursor, winning_line);
    render_vertical_sep(f, cols[3]);
    render_square(f, cols[4], board, start + 2, cursor, winning_line);
}

fn render_square(
    f: &mut Frame,
    area: Rect,
    board: &Board,
    pos: usize,
    cursor: usize,
    winning_line: Option<[usize; 3]>,
) {
    let square = board.get(pos).unwrap_or(Square::Empty);
    let (text, mut style) = match square {
        Square::Empty => (
            format!("{}", pos + 1),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Occupied(Player::X) => (
            "X".to_string(),
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        ),
        Square::Occupied(Player::O) => (
            "O".to_string(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
    };

    if winning_line.is_some_and(|line| line.contains(&pos)) {
        style = style.bg(Color::Green).fg(Color::Black);
    }
    if pos == cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }

    let paragraph = Paragraph::new(text).style(style).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_separator(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("─".repeat(area.width as usize))
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(sep, area);
}

fn render_vertical_sep(f: &mut Frame, area: Rect) {
    let sep = Paragraph::new("│")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length((area.width.saturating_sub(width)) / 2),
            Constraint::Length(width),
            Constraint::Length((area.width.saturating_sub(width)) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length((area.height.saturating_sub(height)) / 2),
            Constraint::Length(height),
            Constraint::Length((area.height.saturating_sub(height)) / 2),
        ])
        .split(horizontal[1])[1]
}
