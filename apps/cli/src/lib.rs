//! Command line front end for quiz bank files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use quiz_core::{ParsedQuizBank, QuizSettings};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse a quiz bank and report what it contains
    Parse {
        /// Path to the quiz bank file
        file: PathBuf,

        /// Number of answers every question carries
        #[arg(
            long,
            env = "QUIZ_ANSWER_COUNT",
            default_value_t = QuizSettings::default().answer_count
        )]
        answers: usize,

        /// Print the parsed bank as JSON on stdout
        #[arg(long)]
        json: bool,
    },
    /// Report the first line at which two bank files differ
    Diff {
        first: PathBuf,
        second: PathBuf,
    },
    /// Print the default quiz settings as JSON
    Settings,
}

/// Reads, validates and compares plain-text quiz banks.
#[derive(Debug, Parser)]
#[command(name = "quiz-bank", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

pub fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Parse {
            file,
            answers,
            json,
        } => {
            let bank = load_bank(&file, answers)?;
            report(&bank);
            if json {
                println!("{}", serde_json::to_string_pretty(&bank)?);
            }
        }
        Command::Diff { first, second } => {
            let difference = quiz_core::first_difference_files(&first, &second)
                .with_context(|| {
                    format!("comparing {} and {}", first.display(), second.display())
                })?;
            match difference {
                Some(line) => println!("files differ at line {}", line),
                None => println!("files are identical"),
            }
        }
        Command::Settings => println!("{}", settings_json(&QuizSettings::default())?),
    }

    Ok(())
}

/// Read and parse a bank file from disk.
pub fn load_bank(path: &Path, answer_count: usize) -> Result<ParsedQuizBank> {
    let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let content = decode(&bytes);
    quiz_core::parse_str(&content, answer_count)
        .with_context(|| format!("parsing {}", path.display()))
}

/// Settings rendered the way they are stored.
pub fn settings_json(settings: &QuizSettings) -> Result<String> {
    Ok(serde_json::to_string_pretty(settings)?)
}

/// Decode bank text as UTF-8, falling back to Windows-1252 for legacy files.
///
/// A leading UTF-8 byte order mark is dropped.
pub fn decode(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(_) => {
            let (text, _) = encoding_rs::UTF_8.decode_with_bom_removal(bytes);
            text.into_owned()
        }
        Err(_) => {
            tracing::debug!("bank is not valid UTF-8, decoding as windows-1252");
            let (text, _, _) = encoding_rs::WINDOWS_1252.decode(bytes);
            text.into_owned()
        }
    }
}

fn report(bank: &ParsedQuizBank) {
    tracing::info!("questions read: {}", bank.len());
    for topic in bank.topics() {
        tracing::info!(
            topic = %topic.name,
            questions = topic.question_count,
            "topic"
        );
    }
}
