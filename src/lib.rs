pub mod config;
pub mod dictionary;
pub mod error;
pub mod grouping;
pub mod phonetic;
pub mod report;

pub use config::Config;
pub use dictionary::{load_dictionary, read_words};
pub use error::{HomophoneError, HomophoneResult};
pub use grouping::{group, group_parallel, HomophoneGroups, RankedGroup, DEFAULT_TOP};
pub use phonetic::{encode, encode_with_stages, sounds_alike, EncodingStages};
pub use report::{render, OutputFormat};
