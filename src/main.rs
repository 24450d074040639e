use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use customer_cleanse::{export, load, repair, report};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

/// One-shot batch cleaner for customer-record CSV exports: merge, dedup,
/// repair age outliers, fix country spellings, and store the result as a
/// spreadsheet.
#[derive(Debug, Parser)]
#[command(name = "customer-cleanse", version)]
struct Args {
    /// Input CSV files; defaults to the two bundled sample exports under
    /// the data directory
    inputs: Vec<PathBuf>,

    /// Directory holding the bundled sample exports and receiving
    /// output.xlsx
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,
}

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let args = Args::parse();
    let inputs = if args.inputs.is_empty() {
        vec![
            args.data_dir.join("CustomerInfoSystem1.csv"),
            args.data_dir.join("CustomerInfoSystem2.csv"),
        ]
    } else {
        args.inputs
    };
    let output = args.data_dir.join("output.xlsx");

    run(&inputs, &output)
}

fn run(inputs: &[PathBuf], output: &Path) -> Result<()> {
    // ─── 2) load, validate, merge ────────────────────────────────────
    info!("generating the working table");
    let mut table = load::merge_sources(inputs).context("loading input files")?;

    // ─── 3) repair age outliers ──────────────────────────────────────
    info!("handling the outliers in the 'Age' column");
    repair::resolve_age_outliers(&mut table);

    // ─── 4) correct country spellings ────────────────────────────────
    info!("correcting spelling mistakes in the 'Country' column");
    repair::correct_country_spelling(&mut table).context("correcting country values")?;

    // ─── 5) country occurrence lookup ────────────────────────────────
    let lookup = report::country_lookup(&table);
    println!("\n{}", lookup);

    // ─── 6) store the cleaned table ──────────────────────────────────
    info!("storing the cleaned table");
    export::write_xlsx(&table, output).context("writing the output file")?;

    Ok(())
}
