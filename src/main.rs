//! CLI entry point for the ride wait-time dashboard.
//!
//! Loads a park's wait-time CSV from a file or URL, summarizes it per ride,
//! and prints the result as text or JSON.

use anyhow::{Result, anyhow};
use chrono::Local;
use clap::{Parser, Subcommand};
use ride_waits::{
    Summary,
    fetch::load_source,
    output::{header_line, print_pretty, ride_line, to_json},
    query::{filter_rides, lookup},
    source::{FeedDate, FeedLocation},
};
use std::ffi::OsStr;
use std::path::Path;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

const DEFAULT_BASE_URL: &str = "data";

#[derive(Parser)]
#[command(name = "ride_waits")]
#[command(about = "Summarize amusement-park ride wait times", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize every ride in a wait-time CSV
    Summarize {
        /// Path to file or URL to fetch
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// Print the full summary as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Summarize a park's feed for today or a past date
    Park {
        /// Park identifier used in the feed path
        park: String,

        /// Date as YYYY-MM-DD, or "today"
        #[arg(short, long, default_value = "today")]
        date: String,

        /// Base URL or directory; falls back to WAIT_TIMES_BASE_URL
        #[arg(long)]
        base: Option<String>,

        /// Print the full summary as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Show one ride by its exact name
    Ride {
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// Ride name, matched exactly after trimming
        name: String,
    },
    /// List rides whose name contains a search term
    Search {
        #[arg(value_name = "FILE_OR_URL")]
        source: String,

        /// Case-insensitive substring
        term: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/ride_waits.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("ride_waits.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Summarize { source, json } => {
            let summary = summarize(&source).await?;
            render(&summary, json)?;
        }
        Commands::Park {
            park,
            date,
            base,
            json,
        } => {
            let base = base
                .or_else(|| std::env::var("WAIT_TIMES_BASE_URL").ok())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
            let today = Local::now().date_naive();
            let location = FeedLocation::new(&base, &park, FeedDate::parse(&date)?, today)?;
            info!(%location, "Resolved park feed");

            let summary = summarize(&location.url()).await?;
            render(&summary, json)?;
        }
        Commands::Ride { source, name } => {
            let summary = summarize(&source).await?;
            let view = lookup(&summary, name.trim())
                .ok_or_else(|| anyhow!("no ride named '{}' in {}", name.trim(), source))?;
            println!("{}", ride_line(&view));
            println!("{}", to_json(&view.series)?);
        }
        Commands::Search { source, term } => {
            let summary = summarize(&source).await?;
            let matches = filter_rides(&summary, &term);
            info!(term = %term, matches = matches.len(), "Search complete");
            for view in &matches {
                println!("{}", ride_line(view));
            }
        }
    }

    Ok(())
}

/// Loads and aggregates one payload. Each call builds a fresh summary.
#[tracing::instrument]
async fn summarize(source: &str) -> Result<Summary> {
    let text = load_source(source).await?;
    let summary = Summary::from_csv(&text);
    info!(
        rides = summary.ride_count(),
        latest = ?summary.latest_timestamp(),
        "Payload summarized"
    );
    print_pretty(&summary);
    Ok(summary)
}

fn render(summary: &Summary, json: bool) -> Result<()> {
    if json {
        println!("{}", to_json(summary)?);
        return Ok(());
    }

    println!("{}", header_line(summary));
    for view in filter_rides(summary, "") {
        println!("{}", ride_line(&view));
    }
    Ok(())
}
