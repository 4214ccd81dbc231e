pub mod aggregate;
pub mod cli;
pub mod display;
pub mod error;
pub mod io_utils;
pub mod parser;
pub mod record;
pub mod report;
pub mod schema;

use std::{env, sync::OnceLock};

use anyhow::Result;
use clap::Parser;
use log::{LevelFilter, info};

use crate::{cli::Cli, display::Layout};

static LOGGER: OnceLock<()> = OnceLock::new();

fn init_logging() {
    LOGGER.get_or_init(|| {
        let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
        if env::var("RUST_LOG").is_err() {
            builder.filter_module("combo_count", LevelFilter::Info);
        }
        let _ = builder.format_timestamp_millis().try_init();
    });
}

pub fn run() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    execute(&cli)
}

pub fn execute(cli: &Cli) -> Result<()> {
    let encoding = io_utils::resolve_encoding(cli.input_encoding.as_deref())?;
    let output = report::resolve_output_path(cli.unique_combinations.as_deref());

    let aggregator = parser::parse_file(&cli.file, encoding)?;

    report::write_combinations(aggregator.entries(), &output)?;
    info!(
        "Wrote {} combination(s) covering {} record(s) to {:?}",
        aggregator.entries().len(),
        aggregator.total_count(),
        output
    );
    if !aggregator.entries().is_empty() {
        println!(
            "File with grouped count for unique combinations successfully created, file name = {}",
            output.display()
        );
    }

    if !cli.no_display {
        let layout = if cli.table {
            Layout::Table
        } else {
            Layout::Blocks
        };
        display::display_records(aggregator.records(), layout);
    }
    Ok(())
}
