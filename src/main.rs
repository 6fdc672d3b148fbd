use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use homophones::report::render_encodings;
use homophones::{
    encode_with_stages, grouping, load_dictionary, render, Config, EncodingStages, OutputFormat,
};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "homophones")]
#[command(about = "Find the largest groups of near-homophones in a word list", long_about = None)]
struct Args {
    /// Log at debug level unless RUST_LOG says otherwise
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Group a dictionary by phonetic code and print the largest groups
    Report {
        /// Directory holding homophones.toml and .env
        #[arg(short, long, default_value = ".")]
        config: PathBuf,

        /// Word list, one word per line
        #[arg(short, long)]
        dictionary: Option<PathBuf>,

        /// Number of groups to print
        #[arg(short, long)]
        top: Option<usize>,

        /// Output format (text or json)
        #[arg(short, long)]
        format: Option<OutputFormat>,

        /// Group words on all cores
        #[arg(long)]
        parallel: bool,
    },

    /// Print the phonetic code of each word
    Encode {
        /// Words to encode
        #[arg(required = true)]
        words: Vec<String>,

        /// Show the output of every encoding stage
        #[arg(long)]
        explain: bool,

        /// Output format (text or json)
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,
    },

    /// Write a default homophones.toml
    Init {
        /// Target directory
        #[arg(default_value = ".")]
        dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    let default_filter = if args.verbose {
        "homophones=debug"
    } else {
        "homophones=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    match args.command {
        Command::Report {
            config,
            dictionary,
            top,
            format,
            parallel,
        } => run_report(config, dictionary, top, format, parallel),
        Command::Encode {
            words,
            explain,
            format,
        } => run_encode(&words, explain, format),
        Command::Init { dir } => run_init(dir),
    }
}

fn run_report(
    config_dir: PathBuf,
    dictionary: Option<PathBuf>,
    top: Option<usize>,
    format: Option<OutputFormat>,
    parallel: bool,
) -> anyhow::Result<()> {
    let mut config = Config::load(&config_dir)
        .with_context(|| format!("Failed to load configuration from {}", config_dir.display()))?;

    // CLI flags take precedence over file and environment
    if let Some(dictionary) = dictionary {
        config.dictionary = dictionary;
    }
    if let Some(top) = top {
        config.report.top = top;
    }
    if let Some(format) = format {
        config.report.format = format;
    }
    config.parallel |= parallel;

    let path = config.dictionary_path(&config_dir);
    let words = load_dictionary(&path)
        .with_context(|| format!("Failed to load dictionary {}", path.display()))?;
    tracing::info!("Loaded dictionary with {} words", words.len());

    let groups = if config.parallel {
        grouping::group_parallel(&words, config.report.top)
    } else {
        grouping::group(&words, config.report.top)
    };

    if groups.len() < config.report.top {
        tracing::info!(
            "Only {} distinct codes available (requested {})",
            groups.len(),
            config.report.top
        );
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render(&mut out, &groups, words.len(), config.report.format)?;
    out.flush()?;
    Ok(())
}

fn run_encode(words: &[String], explain: bool, format: OutputFormat) -> anyhow::Result<()> {
    let encodings: Vec<(String, EncodingStages)> = words
        .iter()
        .map(|word| (word.clone(), encode_with_stages(word)))
        .collect();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    render_encodings(&mut out, &encodings, explain, format)?;
    out.flush()?;
    Ok(())
}

fn run_init(dir: PathBuf) -> anyhow::Result<()> {
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = Config::default().save(&dir)?;
    eprintln!("{} {}", "Created".green().bold(), path.display().to_string().cyan());
    Ok(())
}
