//! Substitution tables driving the encoder.
//!
//! Every table is scanned in order and the first matching pattern wins, so
//! the order of entries is part of the encoding. Reordering, adding or
//! removing an entry changes the codes produced for existing dictionaries.

/// A single (pattern, replacement) rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Substitution {
    pub pattern: &'static str,
    pub replacement: &'static str,
}

impl Substitution {
    pub const fn new(pattern: &'static str, replacement: &'static str) -> Self {
        Self {
            pattern,
            replacement,
        }
    }
}

/// Rewrites applied only at the start of a word.
pub const PREFIX_RULES: &[Substitution] = &[
    Substitution::new("hough", "h5"),
    Substitution::new("cough", "kof"),
    Substitution::new("chough", "sof"),
    Substitution::new("laugh", "laf"),
    Substitution::new("rough", "ruf"),
    Substitution::new("tough", "tuf"),
    Substitution::new("enough", "enuf"),
    Substitution::new("trough", "trof"),
    Substitution::new("ps", "s"),
    Substitution::new("pt", "t"),
    Substitution::new("pn", "n"),
    Substitution::new("mn", "n"),
    Substitution::new("wr", "r"),
    Substitution::new("kn", "n"),
    Substitution::new("gn", "n"),
    Substitution::new("x", "z"),
    Substitution::new("ce", "se"),
    Substitution::new("ci", "si"),
    Substitution::new("cy", "sy"),
    Substitution::new("ch", "sh"),
    Substitution::new("c", "k"),
];

/// Rewrites applied only at the end of a word.
pub const SUFFIX_RULES: &[Substitution] = &[
    Substitution::new("gn", "n"),
    Substitution::new("gns", "ns"),
    Substitution::new("mb", "m"),
];

/// Rewrites applied while scanning from the second character onward.
pub const INTERIOR_RULES: &[Substitution] = &[
    Substitution::new("ce", "se"),
    Substitution::new("ci", "se"),
    Substitution::new("cy", "s"),
    Substitution::new("ch", "s"),
    Substitution::new("igha", "ifa"),
    Substitution::new("ugha", "ufa"),
    Substitution::new("gh", ""),
    Substitution::new("th", "H"),
    Substitution::new("ph", "f"),
    Substitution::new("sce", "se"),
    Substitution::new("sci", "si"),
    Substitution::new("scy", "sy"),
    Substitution::new("tia", "sa"),
    Substitution::new("tio", "so"),
    Substitution::new("x", "ks"),
];

/// Class of each lowercase letter, indexed from `'a'`. `'0'` marks the
/// silent class (vowels and barely-sounded consonants).
pub const LETTER_CLASSES: &[u8; 26] = b"0bkd0fg00gklmn0pkrst0v0s0z";

/// The silent class character removed from finished codes.
pub const SILENT_CLASS: char = '0';

/// Letter class for `c`, or `None` when `c` is not a lowercase ASCII letter.
pub fn letter_class(c: char) -> Option<char> {
    if c.is_ascii_lowercase() {
        Some(LETTER_CLASSES[(c as u8 - b'a') as usize] as char)
    } else {
        None
    }
}
