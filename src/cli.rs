use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Group product records into unique combinations with occurrence counts",
    long_about = None
)]
pub struct Cli {
    /// Input product file (.csv or .tsv) whose first row is the header
    #[arg(short = 'f', long = "file", value_parser = parse_path)]
    pub file: PathBuf,
    /// Combinations output file; must end in .csv (defaults to combination_count.csv)
    #[arg(short = 'u', long = "unique-combinations", value_parser = parse_path)]
    pub unique_combinations: Option<PathBuf>,
    /// Character encoding of the input file (defaults to utf-8)
    #[arg(long = "input-encoding")]
    pub input_encoding: Option<String>,
    /// List parsed records as an aligned table instead of one block per record
    #[arg(long)]
    pub table: bool,
    /// Skip the listing of parsed records
    #[arg(long = "no-display", conflicts_with = "table")]
    pub no_display: bool,
}

/// Accepts empty values so they reach the pipeline's own validation instead of
/// clap's built-in path parser.
pub fn parse_path(value: &str) -> Result<PathBuf, String> {
    Ok(PathBuf::from(value))
}
