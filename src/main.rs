//! cutlist - CLI tool to compute kitchen cabinet cut lists.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use cutlist_rs::{
    normalize_request, read_work_request, render_cut_list, render_summary, summarize_materials,
    write_work_response, CutListConfig, CutListService,
};

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Work response JSON written to the output file
    Json,
    /// Cut-list tables printed to stdout
    Table,
}

/// Compute aggregated panel cut lists for kitchen cabinets.
#[derive(Parser, Debug)]
#[command(name = "cutlist")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Work request JSON file
    #[arg(short, long)]
    input: PathBuf,

    /// Work response JSON file
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: Format,

    /// JSON file overriding construction constants
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Validate only, don't generate output
    #[arg(long)]
    validate: bool,

    /// Print material totals
    #[arg(long)]
    summary: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = match &args.config {
        Some(path) => CutListConfig::from_json_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => CutListConfig::default(),
    };

    info!("Processing: {}", args.input.display());

    let request = read_work_request(&args.input)
        .with_context(|| format!("Failed to read {}", args.input.display()))?;

    if request.cabins.is_empty() {
        warn!("Work request contains no cabinets");
    }

    // Validate-only mode
    if args.validate {
        let normalized = normalize_request(&request, &config)?;
        for warning in &normalized.warnings {
            warn!("{}", warning);
        }
        info!("Validation passed for {} cabinet(s)", normalized.cabinets.len());
        return Ok(());
    }

    let response = CutListService::with_config(config).generate(&request)?;

    match args.format {
        Format::Json => {
            let output_path = args.output.unwrap_or_else(|| {
                let mut path = args.input.clone();
                path.set_extension("cutlist.json");
                path
            });

            write_work_response(&output_path, &response)
                .with_context(|| format!("Failed to write {}", output_path.display()))?;

            info!("Generated: {}", output_path.display());
        }
        Format::Table => print!("{}", render_cut_list(&response)),
    }

    if args.summary {
        println!("{}", render_summary(&summarize_materials(&response)));
    }

    Ok(())
}
