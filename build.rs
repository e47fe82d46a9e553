//! Build script to generate embedded dictionaries
//!
//! Reads the word list files under `data/` and generates Rust source with
//! const arrays, one per dictionary.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_word_list(
        "data/simple.txt",
        &Path::new(&out_dir).join("simple.rs"),
        "SIMPLE",
        "Default dictionary of common words, mixed lengths",
    );

    generate_word_list(
        "data/wordle.txt",
        &Path::new(&out_dir).join("wordle.rs"),
        "WORDLE",
        "Five-letter dictionary tuned for Wordle answers",
    );

    println!("cargo:rerun-if-changed=data/simple.txt");
    println!("cargo:rerun-if-changed=data/wordle.txt");
}

fn generate_word_list(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let words: Vec<&str> = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    let count = words.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated from {input_path}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment} ({count} words)").unwrap();
    writeln!(output, "pub const {const_name}: &[&str] = &[").unwrap();

    for word in words {
        writeln!(output, "    \"{word}\",").unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of words in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
