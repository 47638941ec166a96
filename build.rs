//! Build script to embed the default word list
//!
//! Renders `data/words.txt` into `$OUT_DIR/words.rs` as a const slice plus its
//! length. Blank lines and `#` comments are ignored.

use std::env;
use std::fmt::Write;
use std::fs;
use std::path::Path;

const WORD_FILE: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    let content =
        fs::read_to_string(WORD_FILE).unwrap_or_else(|e| panic!("Failed to read {WORD_FILE}: {e}"));
    let words: Vec<String> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_ascii_uppercase)
        .collect();

    let source = render_word_list(&words, "Default puzzle vocabulary (food words)");
    let output_path = Path::new(&out_dir).join("words.rs");
    fs::write(&output_path, source)
        .unwrap_or_else(|e| panic!("Failed to write {}: {e}", output_path.display()));

    println!("cargo:rerun-if-changed={WORD_FILE}");
}

fn render_word_list(words: &[String], doc_comment: &str) -> String {
    let mut source = format!("// Generated from {WORD_FILE}\n\n/// {doc_comment}\npub const WORDS: &[&str] = &[\n");
    for word in words {
        writeln!(source, "    {word:?},").unwrap();
    }
    source.push_str("];\n\n/// Number of words in WORDS\n");
    writeln!(source, "pub const WORDS_COUNT: usize = {};", words.len()).unwrap();
    source
}
