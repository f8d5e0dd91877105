use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use xlsx_merge::report::StdoutObserver;
use xlsx_merge::run::{run, MergeConfig};

/// Merge spreadsheet workbooks (first sheet only) into one, dropping
/// duplicate rows.
#[derive(Debug, Parser)]
#[command(name = "xlsx-merge", version)]
struct Cli {
    /// Spreadsheet files to merge (first sheet only)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output workbook to store merged rows in
    #[arg(short, long, default_value = "output.xlsx")]
    output: PathBuf,

    /// Comma-separated column names whose values identify a row as unique
    #[arg(long, value_name = "COLUMNS", value_delimiter = ',')]
    unique_on: Option<Vec<String>>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = MergeConfig {
        files: cli.files,
        output: cli.output,
        unique_on: cli.unique_on,
        observer: Some(Arc::new(StdoutObserver)),
    };

    match run(&config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
