//! Build script to generate the embedded word list
//!
//! Validates `data/words.txt` and writes it out as a const array.

use std::collections::HashSet;
use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

const WORD_FILE: &str = "data/words.txt";

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let content =
        fs::read_to_string(WORD_FILE).unwrap_or_else(|e| panic!("Failed to read {WORD_FILE}: {e}"));

    let words = normalise(&content);
    write_word_list(&Path::new(&out_dir).join("words.rs"), "WORDS", &words);

    println!("cargo:rerun-if-changed={WORD_FILE}");
}

/// Lower-case, drop blanks and duplicates; any non-letter entry fails the build
fn normalise(content: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut words = Vec::new();

    for (line_no, line) in content.lines().enumerate() {
        let word = line.trim().to_ascii_lowercase();
        if word.is_empty() {
            continue;
        }
        assert!(
            word.bytes().all(|b| b.is_ascii_lowercase()),
            "{WORD_FILE}:{}: '{word}' is not a word",
            line_no + 1
        );
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    words
}

fn write_word_list(output_path: &Path, const_name: &str, words: &[String]) {
    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    let count = words.len();
    let body: String = words.iter().map(|w| format!("    \"{w}\",\n")).collect();

    write!(
        output,
        "// Generated from {WORD_FILE}\n\n\
         /// Reference word list ({count} words)\n\
         pub const {const_name}: &[&str] = &[\n{body}];\n\n\
         /// Number of words in {const_name}\n\
         pub const {const_name}_COUNT: usize = {count};\n"
    )
    .unwrap();
}
