use clap::Parser;
use log::*;
use std::path::PathBuf;
use std::process::exit;

mod csv_sink;
mod error;
mod export;
mod row_render;
mod schedule_grid;
mod table_sink;
mod venue_api;
mod venue_cache;
mod xlsx_sink;

use error::Result;
use export::*;
use table_sink::*;
use venue_api::*;
use venue_cache::*;

const DEFAULT_OUTPUT: &str = "venues.xlsx";
const DEFAULT_SHEET_NAME: &str = "Venues";

/// Export venue opening hours as a weekly hour-by-hour table.
#[derive(Parser, Debug)]
#[command(name = "venue-hours-export", version, about)]
struct Args {
    /// Venue document URL
    #[arg(long, default_value = VENUES_URL)]
    url: String,

    /// Read the venue document from this file instead of fetching it
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Also save the fetched venue document to this file
    #[arg(long)]
    save_source: Option<PathBuf>,

    /// Output file
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Output format; inferred from the output extension when omitted
    #[arg(short, long, value_enum)]
    format: Option<SinkFormat>,

    /// Worksheet name (xlsx only)
    #[arg(long, default_value = DEFAULT_SHEET_NAME)]
    sheet_name: String,

    /// Show debug messages
    #[arg(short, long)]
    verbose: bool,
}

async fn run(args: Args) -> Result<ExportReport> {
    let data = match &args.input {
        Some(path) => load_venue_document(path)?,
        None => {
            let data = fetch_venue_document(&args.url).await?;
            if let Some(path) = &args.save_source {
                save_venue_document(path, &data)?;
            }
            data
        }
    };

    let venues = parse_venues(&data)?;
    info!("Loaded {} venues", venues.len());

    let format = args
        .format
        .unwrap_or_else(|| SinkFormat::from_path(&args.output));
    let sink = open_sink(format, &args.output, &args.sheet_name)?;

    export_venues(&venues, sink)
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(if args.verbose { "debug" } else { "info" }),
    )
    .init();

    match run(args).await {
        Ok(report) => {
            if !report.skipped.is_empty() {
                warn!("{} venues were not exported", report.skipped.len());
            }
            info!(
                "Finished! {} rows at {}",
                report.rows_written,
                report.output.display()
            );
        }
        Err(err) => {
            error!("Error: {}", err);
            exit(1);
        }
    }
}
