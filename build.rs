//! Build script to generate the embedded theme tables
//!
//! Reads tab-separated theme files and generates Rust source code with const arrays.

use std::env;
use std::fs;
use std::io::Write;
use std::path::Path;

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    generate_theme_table(
        "data/animals.tsv",
        &Path::new(&out_dir).join("animals.rs"),
        "ANIMALS",
        "Animal words and hints",
    );

    generate_theme_table(
        "data/technology.tsv",
        &Path::new(&out_dir).join("technology.rs"),
        "TECHNOLOGY",
        "Technology words and hints",
    );

    generate_theme_table(
        "data/sports.tsv",
        &Path::new(&out_dir).join("sports.rs"),
        "SPORTS",
        "Sports words and hints",
    );

    // Rebuild if theme data changes
    println!("cargo:rerun-if-changed=data/animals.tsv");
    println!("cargo:rerun-if-changed=data/technology.tsv");
    println!("cargo:rerun-if-changed=data/sports.tsv");
}

fn generate_theme_table(input_path: &str, output_path: &Path, const_name: &str, doc_comment: &str) {
    let content = fs::read_to_string(input_path)
        .unwrap_or_else(|e| panic!("Failed to read {input_path}: {e}"));

    let entries: Vec<(&str, &str)> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            line.split_once('\t')
                .unwrap_or_else(|| panic!("Malformed line in {input_path}: {line}"))
        })
        .collect();
    let count = entries.len();

    let mut output = fs::File::create(output_path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {e}", output_path.display()));

    writeln!(output, "// Generated theme table").unwrap();
    writeln!(output, "//").unwrap();
    writeln!(output, "// {doc_comment}").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// {doc_comment}").unwrap();
    writeln!(output, "pub const {const_name}: &[(&str, &str)] = &[").unwrap();

    for (word, hint) in entries {
        writeln!(output, "    ({:?}, {:?}),", word.trim(), hint.trim()).unwrap();
    }

    writeln!(output, "];").unwrap();
    writeln!(output).unwrap();
    writeln!(output, "/// Number of entries in {const_name}").unwrap();
    writeln!(output, "pub const {const_name}_COUNT: usize = {count};").unwrap();
}
