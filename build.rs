//! Generates the built-in substitution tables from `data/*.txt`.
//!
//! Each non-comment line has the form `<key hex> ; <value hex> # comment`. The build fails on
//! malformed lines, empty keys and duplicate keys, so the tables compiled into the crate are
//! known to be unique.

use std::collections::HashMap;
use std::env;
use std::fs::File;
use std::io::prelude::*;
use std::path::Path;

const TABLES: &[(&str, &str)] = &[
    ("data/font_a.txt", "font_a.rs"),
    ("data/font_b.txt", "font_b.rs"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    for (source, target) in TABLES {
        println!("cargo:rerun-if-changed={}", source);

        let src = {
            let mut src_file = File::open(source).unwrap();
            let mut src = String::new();
            src_file.read_to_string(&mut src).unwrap();
            src
        };

        let entries = parse_table(source, &src);
        let mut file = File::create(Path::new(&out_dir).join(target)).unwrap();
        writeln!(file, "&[").unwrap();
        for (key, value) in &entries {
            writeln!(file, "    ({:?}, {:?}),", key, value).unwrap();
        }
        writeln!(file, "]").unwrap();
    }
}

fn parse_table(source: &str, src: &str) -> Vec<(String, String)> {
    let mut entries = Vec::new();
    let mut seen = HashMap::new();

    for (index, line) in src.lines().enumerate() {
        let line_no = index + 1;
        let line = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };
        if line.trim().is_empty() {
            continue;
        }

        let (key, value) = match line.split_once(';') {
            Some((key, value)) => (
                parse_code_points(source, line_no, key),
                parse_code_points(source, line_no, value),
            ),
            None => panic!("{}:{}: expected '<key> ; <value>'", source, line_no),
        };
        if key.is_empty() {
            panic!("{}:{}: empty key", source, line_no);
        }
        if let Some(first) = seen.insert(key.clone(), line_no) {
            panic!(
                "{}:{}: duplicate key {:?}, first defined on line {}",
                source, line_no, key, first
            );
        }
        entries.push((key, value));
    }

    entries
}

fn parse_code_points(source: &str, line_no: usize, field: &str) -> String {
    field
        .split_whitespace()
        .map(|hex| {
            u32::from_str_radix(hex, 16)
                .ok()
                .and_then(char::from_u32)
                .unwrap_or_else(|| panic!("{}:{}: invalid code point '{}'", source, line_no, hex))
        })
        .collect()
}
