//! Command-line front end for brieftally.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use brieftally::export::{summary_csv_bytes, write_summary_csv, write_summary_workbook};
use brieftally::{load_table, summarize, LoadOptions, SummaryTable, DEFAULT_SHEET_NAME};

/// Summarise a production-line content-brief export per project.
#[derive(Parser, Debug)]
#[command(name = "brieftally", version, about)]
struct Cli {
    /// Input file (.xlsx workbook or delimited text)
    input: PathBuf,

    /// Output file; format chosen by extension (.xlsx gets a styled
    /// workbook, anything else CSV). Omit to print CSV to stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Worksheet to read from workbook inputs
    #[arg(long, default_value = DEFAULT_SHEET_NAME)]
    sheet: String,

    /// Rows to skip above the header (default: 1 for workbooks, 0 for text)
    #[arg(long)]
    skip_rows: Option<usize>,

    /// Field delimiter for text inputs
    #[arg(long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: u8,
}

/// Delimiters are single bytes in the text reader, so only a single ASCII
/// character is accepted here.
fn parse_delimiter(raw: &str) -> Result<u8, String> {
    match raw.as_bytes() {
        [byte] if byte.is_ascii() => Ok(*byte),
        _ => Err(format!(
            "delimiter must be a single ASCII character, got {raw:?}"
        )),
    }
}

fn init_tracing() {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn run(cli: &Cli) -> brieftally::Result<()> {
    let mut options = LoadOptions::new()
        .with_sheet_name(&cli.sheet)
        .with_delimiter(cli.delimiter);
    if let Some(skip_rows) = cli.skip_rows {
        options = options.with_skip_rows(skip_rows);
    }

    let table = load_table(&cli.input, &options)?;
    let summary = summarize(&table)?;

    let mismatches = summary.rows.iter().filter(|row| !row.check_passes).count();
    if mismatches > 0 {
        eprintln!(
            "warning: reconciliation failed for {mismatches} of {} projects",
            summary.rows.len()
        );
    }

    let display = SummaryTable::project(&summary);
    match &cli.output {
        Some(path) if path.extension().is_some_and(|ext| ext == "xlsx") => {
            write_summary_workbook(path, &summary, &table)?;
        },
        Some(path) => {
            let mut file = std::fs::File::create(path)?;
            write_summary_csv(&display, &mut file)?;
        },
        None => {
            let bytes = summary_csv_bytes(&display)?;
            let mut stdout = std::io::stdout().lock();
            std::io::Write::write_all(&mut stdout, &bytes)?;
        },
    }

    Ok(())
}


fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        },
    }
}
