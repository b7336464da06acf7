//! TUI rendering with ratatui
//!
//! Board grid, messages and game status for the play screen.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Cell, Color as CellColor, MAX_ROUNDS, Row};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<S>(f: &mut Frame, app: &App<'_, S>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(12),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORDLE 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn cell_style(cell: Cell) -> Style {
    let base = Style::default().add_modifier(Modifier::BOLD);
    match cell.color {
        CellColor::Exact => base.fg(Color::Black).bg(Color::Green),
        CellColor::Present => base.fg(Color::Black).bg(Color::Yellow),
        CellColor::Absent => base.fg(Color::White).bg(Color::DarkGray),
        CellColor::Empty => Style::default().fg(Color::DarkGray),
    }
}

fn row_line(row: &Row) -> Line<'static> {
    let mut spans = Vec::with_capacity(row.len() * 2);
    for cell in row {
        spans.push(Span::styled(format!(" {} ", cell.symbol), cell_style(*cell)));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn render_board<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let mut lines = Vec::with_capacity(MAX_ROUNDS * 2);
    for row in app.board.rows() {
        lines.push(row_line(row));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).alignment(Alignment::Center).block(
        Block::default()
            .title(format!(" Game {} ", app.session.id()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_info_panel<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    render_rounds(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_rounds<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let used = usize::from(app.session.round());
    let percent = (used * 100 / MAX_ROUNDS) as u16;

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{used}/{MAX_ROUNDS} used | {} left", app.guesses_left()));

    f.render_widget(gauge, area);
}

fn render_messages<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            String::new(),
            Color::Green,
        ),
        InputMode::Guessing => (
            " Your guess (5 letters) | Enter to submit ",
            app.input_buffer.clone(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<S>(f: &mut Frame, app: &App<'_, S>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(40),
            Constraint::Percentage(35),
        ])
        .split(area);

    let player = Paragraph::new(format!("Player: {}", app.user)).alignment(Alignment::Center);
    f.render_widget(player, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}% | Streak: {}",
        app.stats.played,
        app.stats.win_rate(),
        app.stats.current_streak
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Guessing => "Esc: Quit | Enter: Submit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}
