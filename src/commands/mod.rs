//! Command implementations

pub mod benchmark;
pub mod simple;

pub use benchmark::{BenchmarkResult, run_benchmark};
pub use simple::{parse_path, play_path, run_simple};
