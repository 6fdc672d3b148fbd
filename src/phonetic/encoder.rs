//! Phonetic encoding based on
//! Hodge V.J., Austin J. (2001) A Novel Binary Spell Checker.
//! In: Artificial Neural Networks, ICANN 2001. LNCS vol 2130.
//! <https://doi.org/10.1007/3-540-44668-0_167>
//!
//! A word runs through six rewriting stages:
//!
//! 1. prefix substitution (at most one, start of word)
//! 2. suffix substitution (at most one, end of word)
//! 3. interior substitutions (left to right from the second character)
//! 4. letter-class encoding of every letter after the first
//! 5. collapsing of repeated characters
//! 6. removal of the silent class `'0'`
//!
//! Only ASCII letters are rewritten. Anything else is carried through
//! unchanged, so the encoder accepts any string and never fails.

use serde::Serialize;

use super::rules::{
    letter_class, Substitution, INTERIOR_RULES, PREFIX_RULES, SILENT_CLASS, SUFFIX_RULES,
};

/// Encode `word` into its phonetic code.
///
/// Words that sound alike are expected to produce the same code:
/// `encode("knife") == encode("naff")`.
pub fn encode(input: &str) -> String {
    let word = input.to_ascii_lowercase();
    if word.is_empty() {
        return String::new();
    }

    let word = apply_prefix_rules(&word);
    let word = apply_suffix_rules(&word);
    let word = apply_interior_rules(&word);
    let word = encode_letter_classes(&word);
    let word = collapse_runs(&word);
    let code = strip_silent_class(&word);

    tracing::trace!(word = input, code = %code, "Encoded word");
    code
}

/// Intermediate strings produced while encoding a single word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncodingStages {
    pub lowercased: String,
    pub prefixed: String,
    pub suffixed: String,
    pub interior: String,
    pub classes: String,
    pub collapsed: String,
    pub code: String,
}

/// Same as [`encode`], but keeps the output of every stage.
pub fn encode_with_stages(word: &str) -> EncodingStages {
    let lowercased = word.to_ascii_lowercase();
    if lowercased.is_empty() {
        return EncodingStages {
            lowercased,
            prefixed: String::new(),
            suffixed: String::new(),
            interior: String::new(),
            classes: String::new(),
            collapsed: String::new(),
            code: String::new(),
        };
    }

    let prefixed = apply_prefix_rules(&lowercased);
    let suffixed = apply_suffix_rules(&prefixed);
    let interior = apply_interior_rules(&suffixed);
    let classes = encode_letter_classes(&interior);
    let collapsed = collapse_runs(&classes);
    let code = strip_silent_class(&collapsed);

    EncodingStages {
        lowercased,
        prefixed,
        suffixed,
        interior,
        classes,
        collapsed,
        code,
    }
}

/// Replace the leading pattern of the first matching prefix rule.
pub fn apply_prefix_rules(word: &str) -> String {
    first_match(PREFIX_RULES, |rule| word.strip_prefix(rule.pattern))
        .map(|(rule, rest)| format!("{}{}", rule.replacement, rest))
        .unwrap_or_else(|| word.to_string())
}

/// Replace the trailing pattern of the first matching suffix rule.
pub fn apply_suffix_rules(word: &str) -> String {
    first_match(SUFFIX_RULES, |rule| word.strip_suffix(rule.pattern))
        .map(|(rule, rest)| format!("{}{}", rest, rule.replacement))
        .unwrap_or_else(|| word.to_string())
}

/// Scan `word` from its second character, applying the first interior rule
/// that matches at each position.
///
/// A rule only matches when at least one character remains after its
/// pattern: `"gh"` is dropped from `"throughs"` but kept in `"through"`.
pub fn apply_interior_rules(word: &str) -> String {
    let mut out = String::with_capacity(word.len());

    let Some(first) = word.chars().next() else {
        return out;
    };
    out.push(first);

    let mut position = first.len_utf8();
    while position < word.len() {
        let rest = &word[position..];
        let matched = INTERIOR_RULES
            .iter()
            .find(|rule| rest.len() > rule.pattern.len() && rest.starts_with(rule.pattern));

        match matched {
            Some(rule) => {
                out.push_str(rule.replacement);
                position += rule.pattern.len();
            }
            None => {
                // position always sits on a char boundary
                if let Some(c) = rest.chars().next() {
                    out.push(c);
                    position += c.len_utf8();
                }
            }
        }
    }

    out
}

/// Map every lowercase letter after the first character to its letter class.
pub fn encode_letter_classes(word: &str) -> String {
    let mut chars = word.chars();
    let mut out = String::with_capacity(word.len());

    if let Some(first) = chars.next() {
        out.push(first);
    }
    out.extend(chars.map(|c| letter_class(c).unwrap_or(c)));
    out
}

/// Replace each run of identical characters with a single one.
pub fn collapse_runs(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut last = None;
    for c in word.chars() {
        if last != Some(c) {
            out.push(c);
            last = Some(c);
        }
    }
    out
}

/// Remove the silent class.
///
/// Characters that end up next to each other once a `'0'` is dropped are
/// merged, so a finished code never repeats a character.
pub fn strip_silent_class(word: &str) -> String {
    collapse_runs(&word.replace(SILENT_CLASS, ""))
}

fn first_match<T>(
    rules: &'static [Substitution],
    mut matches: impl FnMut(&Substitution) -> Option<T>,
) -> Option<(&'static Substitution, T)> {
    rules
        .iter()
        .find_map(|rule| matches(rule).map(|hit| (rule, hit)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_empty() {
        assert_eq!(encode(""), "");
    }

    #[test]
    fn test_encode_known_codes() {
        assert_eq!(encode("to"), "t");
        assert_eq!(encode("sew"), "s");
        assert_eq!(encode("cat"), "kt");
        assert_eq!(encode("knife"), "nf");
        assert_eq!(encode("sadder"), "sdr");
        assert_eq!(encode("nation"), "nsn");
    }

    #[test]
    fn test_prefix_first_match_only() {
        assert_eq!(apply_prefix_rules("knight"), "night");
        assert_eq!(apply_prefix_rules("cough"), "kof");
        assert_eq!(apply_prefix_rules("chough"), "sof");
        assert_eq!(apply_prefix_rules("chat"), "shat");
        assert_eq!(apply_prefix_rules("cat"), "kat");
        assert_eq!(apply_prefix_rules("psst"), "sst");
        assert_eq!(apply_prefix_rules("dog"), "dog");
    }

    #[test]
    fn test_suffix_first_match_only() {
        assert_eq!(apply_suffix_rules("thumb"), "thum");
        assert_eq!(apply_suffix_rules("sign"), "sin");
        assert_eq!(apply_suffix_rules("signs"), "sins");
        assert_eq!(apply_suffix_rules("gn"), "n");
        assert_eq!(apply_suffix_rules("dog"), "dog");
    }

    #[test]
    fn test_prefix_and_suffix_both_apply() {
        let word = apply_prefix_rules("gnomb");
        assert_eq!(word, "nomb");
        assert_eq!(apply_suffix_rules(&word), "nom");
    }

    #[test]
    fn test_interior_keeps_first_character() {
        assert_eq!(apply_interior_rules("photo"), "photo");
        assert_eq!(apply_interior_rules("cell"), "cell");
    }

    #[test]
    fn test_interior_substitutions() {
        assert_eq!(apply_interior_rules("nation"), "nason");
        assert_eq!(apply_interior_rules("night"), "nit");
        assert_eq!(apply_interior_rules("other"), "oHer");
        assert_eq!(apply_interior_rules("taxi"), "taksi");
    }

    #[test]
    fn test_interior_requires_trailing_character() {
        // "gh" ends the word, so it is not rewritten
        assert_eq!(apply_interior_rules("through"), "through");
        assert_eq!(apply_interior_rules("throughs"), "throus");
        // "x" is the last character
        assert_eq!(apply_interior_rules("zerox"), "zerox");
    }

    #[test]
    fn test_interior_first_rule_wins() {
        assert_eq!(apply_interior_rules("ascent"), "asent");
        // "igha" is listed ahead of "gh"
        assert_eq!(apply_interior_rules("bighat"), "bifat");
    }

    #[test]
    fn test_interior_empty_and_single() {
        assert_eq!(apply_interior_rules(""), "");
        assert_eq!(apply_interior_rules("a"), "a");
    }

    #[test]
    fn test_letter_classes_skip_first() {
        assert_eq!(encode_letter_classes("kat"), "k0t");
        assert_eq!(encode_letter_classes("apple"), "appl0");
        assert_eq!(encode_letter_classes("oHer"), "oH0r");
        assert_eq!(encode_letter_classes("h5"), "h5");
        assert_eq!(encode_letter_classes(""), "");
    }

    #[test]
    fn test_collapse_runs() {
        assert_eq!(collapse_runs("b00kk"), "b0k");
        assert_eq!(collapse_runs("aaa"), "a");
        assert_eq!(collapse_runs(""), "");
    }

    #[test]
    fn test_strip_silent_class() {
        assert_eq!(strip_silent_class("k0t"), "kt");
        assert_eq!(strip_silent_class("0"), "");
        assert_eq!(strip_silent_class("t0t"), "t");
    }

    #[test]
    fn test_non_letters_pass_through() {
        assert_eq!(encode("it's"), "it's");
        assert_eq!(encode("hough"), "h5");
    }

    #[test]
    fn test_non_ascii_is_carried() {
        assert_eq!(encode("café"), "kfé");
    }

    #[test]
    fn test_stages() {
        let stages = encode_with_stages("Knight");
        assert_eq!(stages.lowercased, "knight");
        assert_eq!(stages.prefixed, "night");
        assert_eq!(stages.suffixed, "night");
        assert_eq!(stages.interior, "nit");
        assert_eq!(stages.classes, "n0t");
        assert_eq!(stages.collapsed, "n0t");
        assert_eq!(stages.code, "nt");
        assert_eq!(stages.code, encode("Knight"));
    }

    #[test]
    fn test_encode_emits_trace_event() {
        use std::io::Write;
        use std::sync::{Arc, Mutex};

        #[derive(Clone, Default)]
        struct Captured(Arc<Mutex<Vec<u8>>>);

        impl Write for Captured {
            fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                if let Ok(mut inner) = self.0.lock() {
                    inner.extend_from_slice(buf);
                }
                Ok(buf.len())
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        let code = tracing::subscriber::with_default(subscriber, || encode("Scat"));
        assert_eq!(code, "skt");

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Encoded word"), "{}", output);
        assert!(output.contains("Scat"), "{}", output);
        assert!(output.contains("code=skt"), "{}", output);
    }

    #[test]
    fn test_stages_empty() {
        let stages = encode_with_stages("");
        assert_eq!(stages.code, "");
    }
}
