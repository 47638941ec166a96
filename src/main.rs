//! Word Search - CLI
//!
//! Word search puzzles with a mouse-driven TUI, a text mode, and puzzle
//! generation tools.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use wordsearch::{
    commands::{run_benchmark, run_simple},
    core::Word,
    generator::{DEFAULT_GRID_SIZE, DEFAULT_WORD_COUNT, PlacementMode, PuzzleConfig, generate},
    output::{print_benchmark_result, print_puzzle},
    session::PuzzleSession,
    wordlists::{WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordsearch",
    about = "Word search puzzles: generate a grid, then drag to find the hidden words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Wordlist: 'embedded' (default, built-in food words) or path to file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Grid size N for an N×N grid
    #[arg(long, global = true, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// Number of words to hide per puzzle
    #[arg(short = 'c', long, global = true, default_value_t = DEFAULT_WORD_COUNT)]
    count: usize,

    /// Placement: scan (default, exhaustive) or retry (bounded random attempts)
    #[arg(short, long, global = true, default_value = "scan")]
    placement: String,

    /// Seed for reproducible puzzles
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default - drag with the mouse)
    Play,

    /// Simple CLI mode (type cell paths instead of dragging)
    Simple,

    /// Print a generated puzzle
    Generate {
        /// Highlight placed words and list their positions
        #[arg(short, long)]
        solution: bool,
    },

    /// Measure placement success over many generated puzzles
    Benchmark {
        /// Number of puzzles to generate
        #[arg(short = 'n', long, default_value = "1000")]
        puzzles: usize,
    },
}

/// Load the master word list based on the -w flag
///
/// - "embedded": the built-in list compiled into the binary
/// - "<path>": one word per line from a file
fn load_wordlist(wordlist_mode: &str) -> Result<Vec<Word>> {
    use wordsearch::wordlists::loader::load_from_file;

    let words = match wordlist_mode {
        "embedded" => words_from_slice(WORDS),
        path => load_from_file(path)?,
    };

    if words.is_empty() {
        bail!("Word list '{wordlist_mode}' contains no usable words");
    }
    log::info!("Loaded {} words from '{wordlist_mode}'", words.len());
    Ok(words)
}

fn rng_for(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    wordsearch::log::init_logger(cli.verbose);

    let master = load_wordlist(&cli.wordlist)?;
    let config = PuzzleConfig::new(
        cli.size,
        cli.count,
        PlacementMode::from_name(&cli.placement),
    );
    log::debug!(
        "Config: {}×{} grid, {} words, {} placement",
        config.grid_size,
        config.grid_size,
        config.word_count,
        config.placement.name()
    );

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(master, config, cli.seed),
        Commands::Simple => run_simple_command(master, config, cli.seed),
        Commands::Generate { solution } => {
            run_generate_command(&master, &config, cli.seed, solution)
        }
        Commands::Benchmark { puzzles } => {
            run_benchmark_command(&master, &config, cli.seed, puzzles)
        }
    }
}

fn run_generate_command(
    master: &[Word],
    config: &PuzzleConfig,
    seed: Option<u64>,
    solution: bool,
) -> Result<()> {
    let mut rng = rng_for(seed);
    let puzzle = generate(master, config, &mut rng)?;
    print_puzzle(&puzzle, solution);
    Ok(())
}

fn run_benchmark_command(
    master: &[Word],
    config: &PuzzleConfig,
    seed: Option<u64>,
    puzzles: usize,
) -> Result<()> {
    println!(
        "Generating {puzzles} puzzles ({}×{}, {} words, {} placement)...",
        config.grid_size,
        config.grid_size,
        config.word_count,
        config.placement.name()
    );

    let base_seed = seed.unwrap_or_else(rand::random);
    let result = run_benchmark(master, config, puzzles, base_seed, true)?;
    print_benchmark_result(&result);
    Ok(())
}

fn run_simple_command(master: Vec<Word>, config: PuzzleConfig, seed: Option<u64>) -> Result<()> {
    let mut session = PuzzleSession::new(master, config, rng_for(seed))?;
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}

fn run_play_command(master: Vec<Word>, config: PuzzleConfig, seed: Option<u64>) -> Result<()> {
    use wordsearch::interactive::{App, run_tui};

    let session = PuzzleSession::new(master, config, rng_for(seed))?;
    run_tui(App::new(session))
}
