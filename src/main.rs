use clap::Parser;
use colored::Colorize;
use env_logger::Env;
use log::debug;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;
use thiserror::Error;

mod libtango;

cfg_if::cfg_if! {
    if #[cfg(feature = "gui")] {
        mod gui;
    } else if #[cfg(feature = "cli")] {
        mod cli;
    }
}

use crate::libtango::jisho::Dataset;

#[derive(Parser, Debug)]
#[command(name = "単語練習しよう！ (Tangorenshūshiyō!)")]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, value_name = "FILE", default_value = "vocab.csv")]
    data: PathBuf,
    #[arg(short, long)]
    seed: Option<u64>,
    #[arg(short, long, default_value = "error")]
    log_level: String,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("no quizzable words!")]
    NoWords,
    #[error("cannot load vocabulary data: {0}")]
    Data(#[from] libtango::jisho::DataSourceError),
    #[error("question setup failed: {0}")]
    Question(#[from] libtango::shitsumon::UnknownWordError),
    #[cfg(feature = "gui")]
    #[error("cannot start the gui: {0}")]
    Gui(#[from] eframe::Error),
}

fn main() -> Result<(), Error> {
    let args = Args::parse();
    env_logger::Builder::from_env(Env::default().default_filter_or(args.log_level)).init();

    let dataset = match Dataset::load(&args.data) {
        Ok(dataset) => dataset,
        Err(err) => {
            println!(
                "{}",
                format!("Cannot read vocabulary from {:?}: {}", args.data, err).bright_red()
            );
            return Err(err.into());
        }
    };
    debug!(
        "[Setup] {} rows, {} quizzable words",
        dataset.records.len(),
        dataset.jisho.len()
    );

    if dataset.jisho.is_empty() {
        println!(
            "{}",
            "No quizzable words found. Come back when your vocabulary file has some filled-in rows!"
                .yellow()
        );
        return Err(Error::NoWords);
    }

    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    debug!("[Setup] Seed: {:?}", args.seed);

    #[cfg(feature = "gui")]
    gui::run(dataset, rng)?;
    #[cfg(all(feature = "cli", not(feature = "gui")))]
    cli::run(dataset, rng)?;
    #[cfg(not(any(feature = "gui", feature = "cli")))]
    compile_error!("build with either the `gui` or the `cli` feature enabled");

    Ok(())
}
