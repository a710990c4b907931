use std::process::ExitCode;

use camino::Utf8PathBuf;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use srafetch::app::{App, RunReport};
use srafetch::error::SraFetchError;
use srafetch::fetch::{self, FetchTool, ParallelFastqDump};
use srafetch::layout::OutputLayout;
use srafetch::manifest::Manifest;

#[derive(Parser)]
#[command(name = "srafetch")]
#[command(about = "Fetch SRA runs listed in a manifest and rename them to sample names")]
#[command(version, author)]
struct Cli {
    /// Manifest CSV with SRA_ID and SRA_NAME columns
    #[arg(short, long)]
    input: Utf8PathBuf,

    /// Directory to save FASTQ files
    #[arg(short, long)]
    outdir: Utf8PathBuf,
}

fn main() -> ExitCode {
    match run() {
        Ok(report) => {
            if report.failed_fetches() > 0 {
                ExitCode::from(3)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(report) => {
            eprintln!("{report:?}");
            if let Some(err) = report.downcast_ref::<SraFetchError>() {
                return ExitCode::from(map_exit_code(err));
            }
            ExitCode::from(1)
        }
    }
}

fn map_exit_code(error: &SraFetchError) -> u8 {
    match error {
        SraFetchError::InvalidAccession(_)
        | SraFetchError::ManifestRead(_)
        | SraFetchError::MissingColumn(_)
        | SraFetchError::ManifestParse(_) => 2,
        SraFetchError::MissingTool(_) | SraFetchError::FetchFailed { .. } => 3,
        _ => 1,
    }
}

fn run() -> miette::Result<RunReport> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let manifest = Manifest::load(cli.input.as_std_path())?;
    tracing::info!("loaded {} manifest entries from {}", manifest.len(), cli.input);

    let tool = ParallelFastqDump::new();
    if let Some(version) = tool.version() {
        tracing::debug!("{} {version}", fetch::PROGRAM);
    }

    let threads = fetch::worker_threads();
    let layout = OutputLayout::new(&cli.outdir);
    let app = App::new(tool);
    let report = app.run(&manifest, &layout, threads)?;

    print_summary(&report);
    Ok(report)
}

fn print_summary(report: &RunReport) {
    let green = "\x1b[32m";
    let yellow = "\x1b[33m";
    let cyan = "\x1b[36m";
    let red = "\x1b[31m";
    let reset = "\x1b[0m";

    println!("{cyan}📦 srafetch summary{reset}");
    for item in &report.items {
        match &item.error {
            None => println!("{green}✅ {} -> {}{reset}", item.accession, item.sample_name),
            Some(message) => println!("{red}❌ {}: {message}{reset}", item.accession),
        }
    }
    println!("{green}renamed {} file(s){reset}", report.rename.renamed.len());
    if !report.rename.missing.is_empty() {
        println!(
            "{yellow}⚠️ {} expected file(s) were not delivered{reset}",
            report.rename.missing.len()
        );
    }
}
