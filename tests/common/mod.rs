//! Common test utilities
//!
//! Provides shared helper functions for:
//! - Writing word lists and config files into temp directories
//! - Sample dictionaries with known near-homophones

#![allow(dead_code)]

use std::path::PathBuf;
use tempfile::TempDir;

/// Pairs of words that must share a code.
pub const NEAR_HOMOPHONES: &[(&str, &str)] = &[
    ("skit", "scat"),
    ("psych", "sack"),
    ("knife", "naff"),
    ("book", "back"),
    ("quick", "quake"),
    ("sadder", "cider"),
];

pub fn sample_words() -> Vec<String> {
    [
        "to", "two", "too", "sew", "so", "cat", "kit", "coat", "book", "back", "beak", "knife",
        "naff", "sadder", "cider", "thumb", "xylophone", "nation", "ocean",
    ]
    .iter()
    .map(|w| w.to_string())
    .collect()
}

pub fn write_dictionary(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("Failed to write dictionary");
    path
}

pub fn dictionary_dir(words: &[&str]) -> (TempDir, PathBuf) {
    let tmp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_dictionary(&tmp_dir, "words.txt", &words.join("\n"));
    (tmp_dir, path)
}
