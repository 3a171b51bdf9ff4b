use clap::Parser;
use itertools::Itertools;
use playdex_backend::{api::RawgApi, util, Tracing};

/// RAWG search utility.
#[derive(Parser)]
struct Opts {
    /// Game title to search for in the catalog.
    #[clap(short, long)]
    search: Option<String>,

    /// Game id to retrieve details for.
    #[clap(long, default_value = "0")]
    id: u64,

    /// JSON file containing the external service credentials.
    #[clap(long, default_value = "keys.json")]
    key_store: String,
}

/// Quickly retrieve game info from the catalog based on title or id.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    Tracing::setup("utils/search_rawg")?;

    let opts: Opts = Opts::parse();
    let keys = util::keys::Keys::from_file(&opts.key_store)?;
    let rawg = RawgApi::new(&keys.rawg.api_key);

    let details = match opts.search {
        Some(title) => {
            let candidates = rawg.search(&title, 1, 20).await?;

            println!(
                "Found {} candidates.\n{}",
                candidates.len(),
                candidates.iter().map(|game| &game.name).join("\n")
            );
            rawg.get_details(candidates.first().unwrap().id).await?
        }
        None => rawg.get_details(opts.id).await?,
    };

    let serialized = serde_json::to_string(&details)?;
    println!("{serialized}");

    Ok(())
}
