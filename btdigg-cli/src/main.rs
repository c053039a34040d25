//! BTDigg CLI - standalone entry point for the search provider
//!
//! Takes a raw query string and streams one result per line to stdout.

use btdigg_search::{BtDiggProvider, JsonSink, ResultSink, SearchProvider, StdoutSink};
use clap::Parser;

#[derive(Parser)]
#[command(name = "btdigg")]
#[command(about = "Search BTDigg from the command line")]
struct Cli {
    /// Raw query string (may arrive percent-encoded from a calling host)
    query: String,

    /// Category filter; only "all" is supported
    #[arg(short, long, default_value = "all")]
    category: String,

    /// Emit JSON lines instead of pipe-delimited records
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let provider = BtDiggProvider::new();

    let mut sink: Box<dyn ResultSink> = if cli.json {
        Box::new(JsonSink::new())
    } else {
        Box::new(StdoutSink::new())
    };

    provider
        .search(&cli.query, &cli.category, sink.as_mut())
        .await?;

    Ok(())
}
