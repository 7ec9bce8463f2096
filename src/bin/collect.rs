use std::path::PathBuf;

use clap::Parser;

use fragrance_scout::processing::collect::collect;
use fragrance_scout::search::serpapi::SerpApiSearch;
use fragrance_scout::storage::{collection_file_name, save_listings};

#[derive(Parser, Debug)]
#[command(
    name = "collect",
    about = "Search shopping listings for a fragrance and save the relevant ones"
)]
struct Cli {
    /// Fragrance to search for, e.g. "Polo Blue Ralph Lauren Eau De Toilette"
    query: String,

    /// SerpApi key for the shopping search
    #[arg(long, env = "SERPAPI_API_KEY", hide_env_values = true)]
    serpapi_api_key: String,

    /// Output file; defaults to "<query>.json" with unsafe characters removed
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    let search = match SerpApiSearch::new(&cli.serpapi_api_key) {
        Ok(search) => search,
        Err(e) => {
            log::error!("Failed to build search client: {e}");
            std::process::exit(1);
        }
    };

    let listings = match collect(&search, &cli.query).await {
        Ok(listings) => listings,
        Err(e) => {
            log::error!("Search failed: {e}");
            std::process::exit(1);
        }
    };

    let path = cli
        .output
        .unwrap_or_else(|| collection_file_name(&cli.query));
    if let Err(e) = save_listings(&path, &listings) {
        log::error!("Failed to write {}: {e}", path.display());
        std::process::exit(1);
    }

    log::info!("Saved {} listings to {}", listings.len(), path.display());
}
