//! TUI application state and logic

use crate::core::Coord;
use crate::selection::Resolution;
use crate::session::{Board, PuzzleSession};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::cell::Cell;
use std::io;

/// Terminal columns taken by one grid cell
pub const CELL_WIDTH: u16 = 3;

/// Application state
pub struct App {
    pub session: PuzzleSession<StdRng>,
    pub board: Board,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    /// Cell under the pointer while it is not pressed
    pub hover: Option<Coord>,
    /// Cell the pointer was last dragged through
    drag_cell: Option<Coord>,
    /// Where the grid letters were last drawn, for mouse hit testing
    pub grid_area: Cell<Rect>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    WinCelebration,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub puzzles_started: usize,
    pub puzzles_completed: usize,
    pub words_found: usize,
    pub misses: usize,
}

/// Map a terminal position to the grid cell drawn there
///
/// `area` is where the letters start; each cell is [`CELL_WIDTH`] columns
/// wide and one row tall.
#[must_use]
pub fn cell_at(area: Rect, size: usize, column: u16, row: u16) -> Option<Coord> {
    if column < area.x || row < area.y || column >= area.right() || row >= area.bottom() {
        return None;
    }

    let coord = Coord::new(
        usize::from(row - area.y),
        usize::from((column - area.x) / CELL_WIDTH),
    );
    (coord.row < size && coord.col < size).then_some(coord)
}

impl App {
    #[must_use]
    pub fn new(session: PuzzleSession<StdRng>) -> Self {
        let mut board = Board::new();
        session.present(&mut board);

        let mut app = Self {
            session,
            board,
            messages: Vec::new(),
            stats: Statistics {
                puzzles_started: 1,
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Playing,
            hover: None,
            drag_cell: None,
            grid_area: Cell::new(Rect::default()),
        };
        app.add_message(
            "Welcome! Drag across letters to select a word.",
            MessageStyle::Info,
        );
        app.add_message(
            "Words run left to right or top to bottom.",
            MessageStyle::Info,
        );
        app
    }

    fn cell_under(&self, column: u16, row: u16) -> Option<Coord> {
        cell_at(self.grid_area.get(), self.session.grid().size(), column, row)
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let cell = self.cell_under(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.hover = None;
                if let Some(cell) = cell {
                    self.session.pointer_down(cell, &mut self.board);
                    self.drag_cell = Some(cell);
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => match cell {
                Some(cell) if self.drag_cell != Some(cell) => {
                    self.session.pointer_enter(cell, &mut self.board);
                    self.drag_cell = Some(cell);
                }
                Some(_) => {}
                None => {
                    if self.session.selection().is_selecting() {
                        self.session.pointer_leave_surface(&mut self.board);
                    }
                    self.drag_cell = None;
                }
            },
            MouseEventKind::Up(MouseButton::Left) => {
                self.drag_cell = None;
                self.hover = cell;
                let resolution = self.session.pointer_up(&mut self.board);
                self.handle_resolution(&resolution);
            }
            MouseEventKind::Moved => {
                self.hover = cell;
            }
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Char('n') => {
                self.new_puzzle();
            }
            _ => {}
        }
    }

    pub fn handle_resolution(&mut self, resolution: &Resolution) {
        match resolution {
            Resolution::Found(word) => {
                self.stats.words_found += 1;
                self.add_message(
                    &format!(
                        "Found {word}! ({}/{})",
                        self.board.found_count(),
                        self.board.words().len()
                    ),
                    MessageStyle::Success,
                );

                if self.board.is_complete() && self.input_mode == InputMode::Playing {
                    self.stats.puzzles_completed += 1;
                    self.input_mode = InputMode::WinCelebration;
                    self.add_message(
                        "🎉 All words found! Congratulations! 🎉",
                        MessageStyle::Success,
                    );
                    self.add_message(
                        "Press 'n' for a new puzzle or 'q' to quit.",
                        MessageStyle::Info,
                    );
                }
            }
            Resolution::AlreadyFound(word) => {
                self.add_message(&format!("{word} is already found"), MessageStyle::Info);
            }
            Resolution::NotFound(candidate) => {
                self.stats.misses += 1;
                self.add_message(
                    &format!("{candidate} is not on the list"),
                    MessageStyle::Error,
                );
            }
            Resolution::NoSelection => {}
        }
    }

    pub fn new_puzzle(&mut self) {
        self.drag_cell = None;
        self.hover = None;
        match self.session.new_puzzle(&mut self.board) {
            Ok(()) => {
                self.stats.puzzles_started += 1;
                self.input_mode = InputMode::Playing;
                self.messages.clear();
                self.add_message(
                    &format!(
                        "New puzzle! Find {} words.",
                        self.board.words().len()
                    ),
                    MessageStyle::Info,
                );
            }
            Err(e) => {
                self.add_message(
                    &format!("Could not generate a puzzle: {e}"),
                    MessageStyle::Error,
                );
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        match event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::FocusLost => {
                if app.session.selection().is_selecting() {
                    app.session.pointer_leave_surface(&mut app.board);
                }
            }
            _ => {}
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{PlacementMode, PuzzleConfig};
    use crate::selection::CellState;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;

    const AREA: Rect = Rect {
        x: 4,
        y: 2,
        width: 15,
        height: 5,
    };

    fn new_app(list: &[&str], size: usize, count: usize) -> App {
        let config = PuzzleConfig::new(size, count, PlacementMode::from_name("scan"));
        let session =
            PuzzleSession::new(words_from_slice(list), config, StdRng::seed_from_u64(21)).unwrap();
        let app = App::new(session);
        app.grid_area.set(AREA);
        app
    }

    fn mouse(kind: MouseEventKind, cell: Coord) -> MouseEvent {
        MouseEvent {
            kind,
            column: AREA.x + cell.col as u16 * CELL_WIDTH + 1,
            row: AREA.y + cell.row as u16,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn outside(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn drag_word(app: &mut App, index: usize) {
        let cells: Vec<Coord> = app.session.puzzle().placed()[index]
            .placement
            .cells()
            .collect();
        app.handle_mouse(mouse(MouseEventKind::Down(MouseButton::Left), cells[0]));
        for &cell in &cells[1..] {
            app.handle_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), cell));
        }
        app.handle_mouse(mouse(
            MouseEventKind::Up(MouseButton::Left),
            cells[cells.len() - 1],
        ));
    }

    #[test]
    fn cell_at_maps_columns_in_steps() {
        assert_eq!(cell_at(AREA, 5, 4, 2), Some(Coord::new(0, 0)));
        assert_eq!(cell_at(AREA, 5, 6, 2), Some(Coord::new(0, 0)));
        assert_eq!(cell_at(AREA, 5, 7, 3), Some(Coord::new(1, 1)));
        assert_eq!(cell_at(AREA, 5, 18, 6), Some(Coord::new(4, 4)));
    }

    #[test]
    fn cell_at_outside_area() {
        assert_eq!(cell_at(AREA, 5, 3, 2), None);
        assert_eq!(cell_at(AREA, 5, 4, 1), None);
        assert_eq!(cell_at(AREA, 5, 19, 2), None);
        assert_eq!(cell_at(AREA, 5, 4, 7), None);
        // Area wider than the grid
        assert_eq!(cell_at(AREA, 3, 13, 2), None);
    }

    #[test]
    fn dragging_a_word_completes_the_puzzle() {
        let mut app = new_app(&["MANGO"], 5, 1);
        drag_word(&mut app, 0);

        assert!(app.board.is_complete());
        assert_eq!(app.input_mode, InputMode::WinCelebration);
        assert_eq!(app.stats.words_found, 1);
        assert_eq!(app.stats.puzzles_completed, 1);
    }

    #[test]
    fn drag_updates_board_cells() {
        let mut app = new_app(&["MANGO"], 5, 1);
        app.handle_mouse(mouse(
            MouseEventKind::Down(MouseButton::Left),
            Coord::new(2, 2),
        ));
        app.handle_mouse(mouse(
            MouseEventKind::Drag(MouseButton::Left),
            Coord::new(2, 3),
        ));

        assert_eq!(app.board.cell_state(Coord::new(2, 2)), CellState::Selected);
        assert_eq!(app.board.cell_state(Coord::new(2, 3)), CellState::Selected);
        assert_eq!(app.session.selection().path().len(), 2);
    }

    #[test]
    fn repeated_drag_events_in_one_cell_extend_once() {
        let mut app = new_app(&["MANGO"], 5, 1);
        app.handle_mouse(mouse(
            MouseEventKind::Down(MouseButton::Left),
            Coord::new(0, 0),
        ));
        app.handle_mouse(mouse(
            MouseEventKind::Drag(MouseButton::Left),
            Coord::new(0, 0),
        ));
        app.handle_mouse(mouse(
            MouseEventKind::Drag(MouseButton::Left),
            Coord::new(1, 0),
        ));
        app.handle_mouse(mouse(
            MouseEventKind::Drag(MouseButton::Left),
            Coord::new(1, 0),
        ));

        assert_eq!(
            app.session.selection().path(),
            &[Coord::new(0, 0), Coord::new(1, 0)]
        );
    }

    #[test]
    fn dragging_off_the_grid_abandons_selection() {
        let mut app = new_app(&["MANGO"], 5, 1);
        app.handle_mouse(mouse(
            MouseEventKind::Down(MouseButton::Left),
            Coord::new(1, 1),
        ));
        app.handle_mouse(outside(MouseEventKind::Drag(MouseButton::Left)));

        assert!(!app.session.selection().is_selecting());
        assert_eq!(app.board.cell_state(Coord::new(1, 1)), CellState::Normal);

        app.handle_mouse(outside(MouseEventKind::Up(MouseButton::Left)));
        assert_eq!(app.stats.misses, 0);
    }

    #[test]
    fn press_outside_grid_starts_nothing() {
        let mut app = new_app(&["MANGO"], 5, 1);
        app.handle_mouse(outside(MouseEventKind::Down(MouseButton::Left)));
        assert!(!app.session.selection().is_selecting());
    }

    #[test]
    fn hover_tracks_pointer() {
        let mut app = new_app(&["MANGO"], 5, 1);
        app.handle_mouse(mouse(MouseEventKind::Moved, Coord::new(3, 1)));
        assert_eq!(app.hover, Some(Coord::new(3, 1)));
        app.handle_mouse(outside(MouseEventKind::Moved));
        assert_eq!(app.hover, None);
    }

    #[test]
    fn new_puzzle_resets_mode_and_counts() {
        let mut app = new_app(&["MANGO"], 5, 1);
        drag_word(&mut app, 0);
        app.handle_key(KeyEvent::new(KeyCode::Char('n'), KeyModifiers::NONE));

        assert_eq!(app.input_mode, InputMode::Playing);
        assert!(!app.board.is_complete());
        assert_eq!(app.board.found_count(), 0);
        assert_eq!(app.stats.puzzles_started, 2);
    }

    #[test]
    fn quit_keys() {
        let mut app = new_app(&["MANGO"], 5, 1);
        app.handle_key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(app.should_quit);

        let mut app = new_app(&["MANGO"], 5, 1);
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = new_app(&["MANGO"], 5, 1);
        for i in 0..8 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 7");
    }
}
