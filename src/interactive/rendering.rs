//! TUI rendering with ratatui
//!
//! Draws the letter grid, the word list and game progress.

use super::app::{App, CELL_WIDTH, InputMode, MessageStyle};
use crate::core::Coord;
use crate::selection::CellState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Grid
            Constraint::Percentage(40), // Words, progress and messages
        ])
        .split(chunks[1]);

    render_grid(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_status(f, app, chunks[2]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.input_mode {
        InputMode::Playing => ("🔎 WORD SEARCH - Drag to select", Color::Cyan),
        InputMode::WinCelebration => ("🎉 ALL WORDS FOUND! 🎉", Color::Green),
    };

    let header = Paragraph::new(title)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(header, area);
}

fn cell_style(state: CellState, hovered: bool) -> Style {
    match state {
        CellState::Found => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        CellState::Selected => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CellState::Normal if hovered => Style::default().fg(Color::White).bg(Color::DarkGray),
        CellState::Normal => Style::default().fg(Color::White),
    }
}

fn render_grid(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Puzzle ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let Some(grid) = app.board.grid() else {
        app.grid_area.set(Rect::default());
        return;
    };

    let size = u16::try_from(grid.size()).unwrap_or(u16::MAX);
    let letters = Rect::new(
        inner.x + 1,
        inner.y + 1,
        size.saturating_mul(CELL_WIDTH),
        size,
    )
    .intersection(inner);
    app.grid_area.set(letters);

    let lines: Vec<Line> = grid
        .rows()
        .enumerate()
        .map(|(row, letters)| {
            let spans: Vec<Span> = letters
                .iter()
                .enumerate()
                .map(|(col, &letter)| {
                    let coord = Coord::new(row, col);
                    let style = cell_style(app.board.cell_state(coord), app.hover == Some(coord));
                    Span::styled(format!(" {} ", char::from(letter)), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    f.render_widget(Paragraph::new(lines), letters);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),    // Word list
            Constraint::Length(3), // Progress gauge
            Constraint::Length(7), // Messages
        ])
        .split(area);

    render_word_list(f, app, chunks[0]);
    render_progress(f, app, chunks[1]);
    render_messages(f, app, chunks[2]);
}

fn render_word_list(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .board
        .words()
        .iter()
        .map(|entry| {
            if entry.found {
                ListItem::new(Line::from(vec![
                    Span::styled("✓ ", Style::default().fg(Color::Green)),
                    Span::styled(
                        entry.text.clone(),
                        Style::default()
                            .fg(Color::Green)
                            .add_modifier(Modifier::CROSSED_OUT),
                    ),
                ]))
            } else {
                ListItem::new(format!("· {}", entry.text))
            }
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .title(" Words ")
            .borders(Borders::ALL)
            .style(Style::default().fg(Color::Green)),
    );

    f.render_widget(list, area);
}

fn render_progress(f: &mut Frame, app: &App, area: Rect) {
    let found = app.board.found_count();
    let total = app.board.words().len();
    let percent = if total == 0 {
        0
    } else {
        u16::try_from(found * 100 / total).unwrap_or(100)
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(percent)
        .label(format!("{found}/{total} words found"));

    f.render_widget(gauge, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let selection = app.session.selection();
    let mode_text = if selection.is_selecting() {
        format!(
            "Selecting: {}",
            app.session.grid().read_path(selection.path())
        )
    } else {
        format!("Placement: {}", app.session.config().placement.name())
    };
    let mode = Paragraph::new(mode_text).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let stats_text = format!(
        "Puzzles: {}/{} solved",
        app.stats.puzzles_completed, app.stats.puzzles_started
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let found_text = format!(
        "Found: {} | Misses: {}",
        app.stats.words_found, app.stats.misses
    );
    let found = Paragraph::new(found_text).alignment(Alignment::Center);
    f.render_widget(found, chunks[2]);

    let help = Paragraph::new("q: Quit | n: New Puzzle | Drag: Select")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}
