use colored::Colorize;
use env_logger::Env;
use log::{error, info};
use std::collections::HashSet;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serde::Serialize;

mod libtango;
use crate::libtango::jisho::Dataset;

#[derive(Parser, Debug)]
#[command(name = "語彙検査 (Goikensa)")]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, default_value = "info")]
    log_level: String,
    #[arg(short, long, value_name = "FILE", default_value = "vocab.csv")]
    data: PathBuf,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Report ineligible rows and duplicate words
    Check,
    /// Dump the quizzable dictionary as JSON
    Export { out: Option<PathBuf> },
}

#[derive(Serialize, Debug)]
struct ExportJson {
    entries: Vec<EntryJson>,
}
#[derive(Serialize, Debug)]
struct EntryJson {
    word: String,
    meaning: String,
}

fn main() {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level)).init();

    info!(
        "{}",
        format!("Inspecting vocabulary file at {:?}", args.data).cyan()
    );
    let dataset = match Dataset::load(&args.data) {
        Ok(d) => d,
        Err(e) => {
            error!("{}{}", "Unable to read vocabulary file: ".red(), e);
            std::process::exit(1);
        }
    };

    match args.command {
        Commands::Check => check(&dataset),
        Commands::Export { out } => export(&dataset, out),
    }
}

fn check(dataset: &Dataset) {
    info!(
        "{}",
        format!("Checking {} rows...", dataset.records.len()).blue()
    );

    let mut eligible = 0;
    let mut seen: HashSet<&str> = HashSet::new();
    for (idx, record) in dataset.records.iter().enumerate() {
        // row 1 is the header
        let row = idx + 2;
        match record.eligible() {
            Some((word, _)) => {
                eligible += 1;
                if !seen.insert(word) {
                    println!(
                        "{}",
                        format!("├ Row {}: duplicate word {:?}, later meaning wins", row, word)
                            .yellow()
                    );
                }
            }
            None => {
                let reason = match (&record.word, &record.meaning) {
                    (None, None) => "missing `word` and `meaning`",
                    (None, Some(_)) => "missing `word`",
                    (Some(_), None) => "missing `meaning`",
                    (Some(word), _) if word.trim().is_empty() => "blank `word`",
                    _ => "blank `meaning`",
                };
                println!(
                    "{}",
                    format!("├ ✘ Row {}: {}", row, reason).red().strikethrough()
                );
            }
        }
    }

    println!(
        "{}",
        format!(
            "{} rows: {} eligible, {} skipped, {} quizzable words",
            dataset.records.len(),
            eligible,
            dataset.records.len() - eligible,
            dataset.jisho.len()
        )
        .green()
    );
}

fn export(dataset: &Dataset, out: Option<PathBuf>) {
    let entries: Vec<EntryJson> = dataset
        .jisho
        .iter()
        .map(|(word, meaning)| EntryJson {
            word: word.to_string(),
            meaning: meaning.to_string(),
        })
        .collect();
    let document = ExportJson { entries };
    let json = match serde_json::to_string_pretty(&document) {
        Ok(json) => json,
        Err(e) => {
            error!("{}{}", "Cannot serialize dictionary: ".red(), e);
            std::process::exit(1);
        }
    };

    match out {
        Some(path) => {
            if let Err(e) = std::fs::write(&path, json) {
                error!("{}{}", format!("Cannot write to {:?}: ", path).red(), e);
                std::process::exit(1);
            }
            info!(
                "{}",
                format!("Exported {} entries to {:?}", document.entries.len(), path).green()
            );
        }
        None => println!("{}", json),
    }
}
