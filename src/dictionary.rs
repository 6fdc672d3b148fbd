//! Word list loading.
//!
//! A dictionary is plain text with one word per line. Surrounding whitespace
//! is trimmed and blank lines are skipped.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use crate::error::{HomophoneError, HomophoneResult};

/// Read a word list from any buffered reader.
pub fn read_words<R: BufRead>(reader: R) -> HomophoneResult<Vec<String>> {
    let mut words = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let word = line.trim();
        if !word.is_empty() {
            words.push(word.to_string());
        }
    }
    Ok(words)
}

/// Read a word list from a file.
pub fn load_dictionary(path: &Path) -> HomophoneResult<Vec<String>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => HomophoneError::DictionaryNotFound(path.display().to_string()),
        _ => HomophoneError::Io(e),
    })?;

    let words = read_words(BufReader::new(file))?;
    tracing::debug!(path = %path.display(), words = words.len(), "Loaded dictionary");
    Ok(words)
}
