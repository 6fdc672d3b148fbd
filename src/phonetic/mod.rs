//! Phonetic encoding for near-homophone detection.
//!
//! Words are rewritten by three ordered substitution tables (prefix, suffix,
//! interior), reduced to letter classes, and stripped of repeated and silent
//! characters. Two words are near-homophones when their codes are equal:
//!
//! - `to`, `two`, `too` → `t`
//! - `knife`, `naff` → `nf`
//! - `sadder`, `cider` → `sdr`

pub mod encoder;
pub mod rules;

pub use encoder::{
    apply_interior_rules, apply_prefix_rules, apply_suffix_rules, collapse_runs, encode,
    encode_letter_classes, encode_with_stages, strip_silent_class, EncodingStages,
};
pub use rules::{Substitution, INTERIOR_RULES, LETTER_CLASSES, PREFIX_RULES, SUFFIX_RULES};

/// True when `left` and `right` encode to the same code.
pub fn sounds_alike(left: &str, right: &str) -> bool {
    encode(left) == encode(right)
}
