//! Rendering of ranked groups and per-word encodings.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{HomophoneError, HomophoneResult};
use crate::grouping::RankedGroup;
use crate::phonetic::EncodingStages;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = HomophoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(HomophoneError::InvalidArgument(format!(
                "unknown output format '{}' (expected 'text' or 'json')",
                other
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    words: usize,
    groups: &'a [RankedGroup],
}

/// Write `groups` to `out`. `word_count` is the size of the loaded dictionary.
pub fn render<W: Write>(
    out: &mut W,
    groups: &[RankedGroup],
    word_count: usize,
    format: OutputFormat,
) -> HomophoneResult<()> {
    match format {
        OutputFormat::Text => render_text(out, groups, word_count),
        OutputFormat::Json => {
            let report = JsonReport {
                words: word_count,
                groups,
            };
            serde_json::to_writer_pretty(&mut *out, &report)?;
            writeln!(out)?;
            Ok(())
        }
    }
}

fn render_text<W: Write>(
    out: &mut W,
    groups: &[RankedGroup],
    word_count: usize,
) -> HomophoneResult<()> {
    writeln!(out, "Loaded dictionary with {} words.", word_count)?;
    for group in groups {
        write!(out, "{} is the code for", group.code)?;
        for word in &group.words {
            write!(out, " {}", word)?;
        }
        writeln!(out)?;
        writeln!(out)?;
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct EncodedWord<'a> {
    word: &'a str,
    #[serde(flatten)]
    stages: EncodedStages<'a>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum EncodedStages<'a> {
    Full(&'a EncodingStages),
    Code { code: &'a str },
}

/// Write each word with its code. With `explain`, every encoding stage is
/// included as well.
pub fn render_encodings<W: Write>(
    out: &mut W,
    encodings: &[(String, EncodingStages)],
    explain: bool,
    format: OutputFormat,
) -> HomophoneResult<()> {
    match format {
        OutputFormat::Text => {
            for (word, stages) in encodings {
                writeln!(out, "{} {}", word, stages.code)?;
                if explain {
                    writeln!(out, "  lowercased  {}", stages.lowercased)?;
                    writeln!(out, "  prefix      {}", stages.prefixed)?;
                    writeln!(out, "  suffix      {}", stages.suffixed)?;
                    writeln!(out, "  interior    {}", stages.interior)?;
                    writeln!(out, "  classes     {}", stages.classes)?;
                    writeln!(out, "  collapsed   {}", stages.collapsed)?;
                    writeln!(out, "  code        {}", stages.code)?;
                }
            }
            Ok(())
        }
        OutputFormat::Json => {
            let entries: Vec<EncodedWord<'_>> = encodings
                .iter()
                .map(|(word, stages)| EncodedWord {
                    word,
                    stages: if explain {
                        EncodedStages::Full(stages)
                    } else {
                        EncodedStages::Code { code: &stages.code }
                    },
                })
                .collect();
            serde_json::to_writer_pretty(&mut *out, &entries)?;
            writeln!(out)?;
            Ok(())
        }
    }
}
