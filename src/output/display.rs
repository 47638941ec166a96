//! Display functions for puzzles and command results

use super::formatters::{column_header, create_progress_bar, describe_placement, spaced_row};
use crate::commands::BenchmarkResult;
use crate::core::{Coord, Word};
use crate::generator::Puzzle;
use crate::selection::CellState;
use crate::session::Board;
use colored::Colorize;
use rustc_hash::FxHashSet;

/// Print the board as the player sees it, with found and selected cells styled
pub fn print_board(board: &Board) {
    let Some(grid) = board.grid() else {
        println!("(no puzzle)");
        return;
    };

    println!("     {}", column_header(grid.size()).bright_black());
    for (row, letters) in grid.rows().enumerate() {
        print!("  {} ", format!("{row:>2}").bright_black());
        for (col, &letter) in letters.iter().enumerate() {
            let text = char::from(letter).to_string();
            let styled = match board.cell_state(Coord::new(row, col)) {
                CellState::Normal => text.normal(),
                CellState::Selected => text.black().on_yellow(),
                CellState::Found => text.green().bold(),
            };
            print!("{styled} ");
        }
        println!();
    }

    println!(
        "\n📝 {} ({}/{})",
        "Words:".bright_cyan().bold(),
        board.found_count(),
        board.words().len()
    );
    for entry in board.words() {
        if entry.found {
            println!("   {} {}", "✓".green(), entry.text.green().strikethrough());
        } else {
            println!("   · {}", entry.text);
        }
    }
    println!();
}

/// Print a generated puzzle; with `show_solution` the placed words are
/// highlighted and their positions listed
pub fn print_puzzle(puzzle: &Puzzle, show_solution: bool) {
    let grid = puzzle.grid();
    let solution: FxHashSet<Coord> = if show_solution {
        puzzle
            .placed()
            .iter()
            .flat_map(|p| p.placement.cells())
            .collect()
    } else {
        FxHashSet::default()
    };

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}×{} ",
        "WORD SEARCH".bright_cyan().bold(),
        grid.size(),
        grid.size()
    );
    println!("{}", "═".repeat(60).cyan());
    println!();

    println!("     {}", column_header(grid.size()).bright_black());
    for (row, letters) in grid.rows().enumerate() {
        print!("  {} ", format!("{row:>2}").bright_black());
        if !show_solution {
            println!("{}", spaced_row(letters));
            continue;
        }
        for (col, &letter) in letters.iter().enumerate() {
            let text = char::from(letter).to_string();
            if solution.contains(&Coord::new(row, col)) {
                print!("{} ", text.bright_yellow().bold());
            } else {
                print!("{text} ");
            }
        }
        println!();
    }

    println!("\n📝 {}", "Words:".bright_cyan().bold());
    for placed in puzzle.placed() {
        if show_solution {
            println!("   {}", describe_placement(placed));
        } else {
            println!("   {}", placed.word.text());
        }
    }

    if show_solution && !puzzle.skipped().is_empty() {
        let skipped: Vec<&str> = puzzle.skipped().iter().map(Word::text).collect();
        println!(
            "\n⚠️  {} {}",
            "Did not fit:".yellow(),
            skipped.join(", ").bright_black()
        );
    }
    println!();
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Placement:".bright_cyan().bold());
    println!("   Puzzles generated: {}", result.total_puzzles);
    println!("   Words per puzzle:  {}", result.words_per_puzzle);
    println!(
        "   Average placed:    {}",
        format!("{:.2}", result.average_placed).bright_yellow().bold()
    );
    println!(
        "   Best case:         {}",
        format!("{}", result.max_placed).green()
    );
    println!(
        "   Worst case:        {}",
        format!("{}", result.min_placed).yellow()
    );
    println!("   Fully placed:      {}", result.fully_placed);
    if result.empty_puzzles > 0 {
        println!(
            "   Nothing placed:    {}",
            format!("{}", result.empty_puzzles).red()
        );
    }
    println!("   Time taken:        {:.2}s", result.duration.as_secs_f64());
    println!("   Puzzles/second:    {:.1}", result.puzzles_per_second);

    if result.total_puzzles == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for placed in (0..=result.words_per_puzzle).rev() {
        if let Some(&count) = result.distribution.get(&placed) {
            let pct = (count as f64 / result.total_puzzles as f64) * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {placed:>2}: {} {count:5} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.skipped_words.is_empty() {
        println!("\n🚫 {}", "Most skipped:".bright_cyan().bold());
        for (word, count) in result.skipped_words.iter().take(10) {
            println!("   {word:<16} {count}");
        }
    }
}
