use std::path::PathBuf;

use clap::Parser;

use fragrance_scout::chat::openai::OpenAiChat;
use fragrance_scout::processing::refine::refine_or_empty;
use fragrance_scout::storage::{load_listings, query_from_file_name, refined_file_name, save_listings};

#[derive(Parser, Debug)]
#[command(
    name = "refine",
    about = "Narrow collected listing files down to genuinely matching products"
)]
struct Cli {
    /// Collection files produced by the collect step
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// OpenAI API key for the filtering model
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    openai_api_key: String,

    /// Chat model used for filtering
    #[arg(long, env = "OPENAI_MODEL", default_value = "gpt-4o-mini")]
    model: String,

    /// Match description; defaults to each input's file name without ".json"
    #[arg(long)]
    description: Option<String>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let cli = Cli::parse();

    let chat = match OpenAiChat::new(&cli.openai_api_key, &cli.model) {
        Ok(chat) => chat,
        Err(e) => {
            log::error!("Failed to build chat client: {e}");
            std::process::exit(1);
        }
    };

    for input in &cli.inputs {
        let listings = match load_listings(input) {
            Ok(listings) => listings,
            Err(e) => {
                log::error!("Failed to read {}: {e}", input.display());
                std::process::exit(1);
            }
        };

        let description = cli
            .description
            .clone()
            .unwrap_or_else(|| query_from_file_name(input));

        let refined = match refine_or_empty(&chat, &listings, &description).await {
            Ok(refined) => refined,
            Err(e) => {
                log::error!("Refinement failed for {}: {e}", input.display());
                std::process::exit(1);
            }
        };

        let output = refined_file_name(input);
        if let Err(e) = save_listings(&output, &refined) {
            log::error!("Failed to write {}: {e}", output.display());
            std::process::exit(1);
        }

        log::info!(
            "Kept {} of {} listings, saved to {}",
            refined.len(),
            listings.len(),
            output.display()
        );
    }
}
