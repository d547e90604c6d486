use anyhow::Result;
use clap::Parser;
use dirlist::core::telemetry::logging::init_logging;
use dirlist::ListingResult;

/// List the direct children of a directory, split into files and folders.
#[derive(Debug, Parser)]
#[command(name = "dirlist", version)]
struct Cli {
    /// Directory to list
    #[arg(default_value = ".")]
    path: String,

    /// Print the listing as JSON
    #[arg(long)]
    json: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let listing = dirlist::list_async(&cli.path).await?;
    println!("{}", render(&listing, cli.json)?);
    Ok(())
}

fn render(listing: &ListingResult, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(listing)?);
    }

    let lines: Vec<String> = listing
        .folders
        .iter()
        .map(|name| format!("{name}/"))
        .chain(listing.files.iter().cloned())
        .collect();
    Ok(lines.join("\n"))
}
