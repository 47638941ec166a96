//! Benchmark command
//!
//! Generates many puzzles and measures how reliably words get placed.

use crate::core::Word;
use crate::generator::{GenerateError, PuzzleConfig, generate};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
pub struct BenchmarkResult {
    pub total_puzzles: usize,
    pub words_per_puzzle: usize,
    pub total_placed: usize,
    pub average_placed: f64,
    pub min_placed: usize,
    pub max_placed: usize,
    /// Puzzles where every selected word was placed
    pub fully_placed: usize,
    /// Puzzles where nothing could be placed
    pub empty_puzzles: usize,
    /// Placed-word count -> number of puzzles
    pub distribution: HashMap<usize, usize>,
    /// Skipped words, most often skipped first
    pub skipped_words: Vec<(String, usize)>,
    pub duration: Duration,
    pub puzzles_per_second: f64,
}

/// Placement outcome of a single generated puzzle
struct PuzzleOutcome {
    placed: usize,
    skipped: Vec<String>,
}

/// Generate `puzzles` puzzles in parallel and collect placement statistics
///
/// Puzzle `i` uses an RNG seeded with `base_seed + i`, so a run is
/// reproducible. Puzzles where no word fit are counted, not treated as
/// failures.
///
/// # Errors
///
/// Returns `GenerateError` if the configuration or word list can never
/// produce a puzzle.
pub fn run_benchmark(
    master: &[Word],
    config: &PuzzleConfig,
    puzzles: usize,
    base_seed: u64,
    show_progress: bool,
) -> Result<BenchmarkResult, GenerateError> {
    let pb = if show_progress {
        let pb = ProgressBar::new(puzzles as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
        {
            pb.set_style(style.progress_chars("█▓▒░"));
        }
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();

    let outcomes: Vec<Result<PuzzleOutcome, GenerateError>> = (0..puzzles)
        .into_par_iter()
        .map(|i| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(i as u64));
            let outcome = match generate(master, config, &mut rng) {
                Ok(puzzle) => Ok(PuzzleOutcome {
                    placed: puzzle.placed().len(),
                    skipped: puzzle.skipped().iter().map(|w| w.text().to_string()).collect(),
                }),
                Err(GenerateError::NoWordsPlaced { skipped }) => Ok(PuzzleOutcome {
                    placed: 0,
                    skipped: skipped.iter().map(|w| w.text().to_string()).collect(),
                }),
                Err(e) => Err(e),
            };
            pb.inc(1);
            outcome
        })
        .collect();

    let duration = start.elapsed();
    pb.finish_with_message("Complete!");

    let outcomes = outcomes.into_iter().collect::<Result<Vec<_>, _>>()?;
    Ok(summarize(&outcomes, config.word_count, duration))
}

fn summarize(
    outcomes: &[PuzzleOutcome],
    words_per_puzzle: usize,
    duration: Duration,
) -> BenchmarkResult {
    let total_puzzles = outcomes.len();
    let mut total_placed = 0;
    let mut min_placed = usize::MAX;
    let mut max_placed = 0;
    let mut fully_placed = 0;
    let mut empty_puzzles = 0;
    let mut distribution: HashMap<usize, usize> = HashMap::new();
    let mut skip_counts: FxHashMap<&str, usize> = FxHashMap::default();

    for outcome in outcomes {
        total_placed += outcome.placed;
        min_placed = min_placed.min(outcome.placed);
        max_placed = max_placed.max(outcome.placed);
        *distribution.entry(outcome.placed).or_insert(0) += 1;

        if outcome.placed == words_per_puzzle {
            fully_placed += 1;
        }
        if outcome.placed == 0 {
            empty_puzzles += 1;
        }
        for word in &outcome.skipped {
            *skip_counts.entry(word.as_str()).or_insert(0) += 1;
        }
    }

    let mut skipped_words: Vec<(String, usize)> = skip_counts
        .into_iter()
        .map(|(word, count)| (word.to_string(), count))
        .collect();
    skipped_words.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let seconds = duration.as_secs_f64();

    BenchmarkResult {
        total_puzzles,
        words_per_puzzle,
        total_placed,
        average_placed: if total_puzzles == 0 {
            0.0
        } else {
            total_placed as f64 / total_puzzles as f64
        },
        min_placed: if total_puzzles == 0 { 0 } else { min_placed },
        max_placed,
        fully_placed,
        empty_puzzles,
        distribution,
        skipped_words,
        duration,
        puzzles_per_second: if seconds > 0.0 {
            total_puzzles as f64 / seconds
        } else {
            0.0
        },
    }
}
