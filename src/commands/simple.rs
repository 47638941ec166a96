//! Simple interactive CLI mode
//!
//! Text-based play without the TUI: the player types a path of cells, which
//! is replayed as a pointer drag.

use crate::core::Coord;
use crate::output::print_board;
use crate::selection::Resolution;
use crate::session::{Board, PuzzleSession, PuzzleView};
use rand::Rng;
use std::io::{self, Write};

/// Parse a path such as `0,0 0,1 0,2` into coordinates
///
/// Cells are separated by whitespace or `;`, and each cell is `row,col`.
///
/// # Errors
///
/// Returns a message describing the first malformed cell.
pub fn parse_path(input: &str) -> Result<Vec<Coord>, String> {
    let cells: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ';')
        .filter(|s| !s.is_empty())
        .collect();

    if cells.is_empty() {
        return Err("Enter at least one cell, e.g. 0,0 0,1 0,2".to_string());
    }

    cells
        .into_iter()
        .map(|cell| {
            let (row, col) = cell
                .split_once(',')
                .ok_or_else(|| format!("Cell '{cell}' must look like row,col"))?;
            let row = row
                .trim()
                .parse()
                .map_err(|_| format!("Invalid row in '{cell}'"))?;
            let col = col
                .trim()
                .parse()
                .map_err(|_| format!("Invalid column in '{cell}'"))?;
            Ok(Coord::new(row, col))
        })
        .collect()
}

/// Replay `path` as pointer down, enters and up
pub fn play_path<R: Rng, V: PuzzleView + ?Sized>(
    session: &mut PuzzleSession<R>,
    path: &[Coord],
    view: &mut V,
) -> Resolution {
    let Some((first, rest)) = path.split_first() else {
        return Resolution::NoSelection;
    };

    session.pointer_down(*first, view);
    for &cell in rest {
        session.pointer_enter(cell, view);
    }
    session.pointer_up(view)
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<R: Rng>(session: &mut PuzzleSession<R>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Word Search - Text Mode                     ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Find the listed words. Type the cells of a word as row,col pairs:");
    println!("  e.g. 0,0 0,1 0,2  selects the first three cells of the top row");
    println!("  Each cell must touch the previous one (up, down, left or right).\n");
    println!("Commands: 'new' for a new puzzle, 'quit' to exit\n");

    let mut board = Board::new();
    session.present(&mut board);
    print_board(&board);

    loop {
        let input = get_user_input("Path or command")?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" | "n" => {
                match session.new_puzzle(&mut board) {
                    Ok(()) => println!("\n🔄 New puzzle!\n"),
                    Err(e) => println!("\n❌ Could not generate a puzzle: {e}\n"),
                }
                print_board(&board);
                continue;
            }
            _ => {}
        }

        if board.is_complete() {
            println!("All words are found. Type 'new' for another puzzle or 'quit'.\n");
            continue;
        }

        let path = match parse_path(&input) {
            Ok(path) => path,
            Err(e) => {
                println!("❌ {e}\n");
                continue;
            }
        };

        let size = session.grid().size();
        let skipped = skipped_cells(&path, size);
        if skipped.len() == path.len() {
            println!("❌ The path must start inside the {size}×{size} grid\n");
            continue;
        }
        for cell in skipped {
            println!("⚠️  Cell {cell} is off the grid or does not touch the path and was skipped");
        }

        let resolution = play_path(session, &path, &mut board);
        println!();
        match resolution {
            Resolution::Found(word) => println!(
                "✅ Found {word}! ({}/{})",
                board.found_count(),
                board.words().len()
            ),
            Resolution::AlreadyFound(word) => println!("↩️  {word} was already found"),
            Resolution::NotFound(candidate) => println!("❌ {candidate} is not on the list"),
            Resolution::NoSelection => println!("Nothing selected"),
        }
        println!();
        print_board(&board);

        if board.is_complete() {
            println!("\n🎉 Congratulations! You've found all the words! 🎉");
            println!("Type 'new' for another puzzle or 'quit' to exit.\n");
        }
    }
}

/// Cells of `path` a drag would ignore: off the `size`×`size` grid, or not
/// touching the last accepted cell
///
/// A drag that starts off the grid never begins, so then every cell is skipped.
fn skipped_cells(path: &[Coord], size: usize) -> Vec<Coord> {
    let on_grid = |cell: Coord| cell.row < size && cell.col < size;
    let Some((&first, rest)) = path.split_first() else {
        return Vec::new();
    };
    if !on_grid(first) {
        return path.to_vec();
    }

    let mut skipped = Vec::new();
    let mut last = first;
    for &cell in rest {
        if on_grid(cell) && last.is_adjacent(cell) {
            last = cell;
        } else {
            skipped.push(cell);
        }
    }
    skipped
}

fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to flush stdout: {e}"))?;

    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .map_err(|e| format!("Failed to read input: {e}"))?;

    if read == 0 {
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
