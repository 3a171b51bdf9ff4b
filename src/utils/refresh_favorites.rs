use clap::Parser;
use csv::Writer;
use itertools::Itertools;
use playdex_backend::{
    api::{FirestoreApi, RawgApi},
    documents::{FavoriteEntry, Favorites, Game},
    library, util, Status, Tracing,
};
use tracing::{info, instrument, warn};

/// Playdex util for refreshing stored favorite snapshots from the catalog.
#[derive(Parser)]
struct Opts {
    #[clap(long)]
    user: String,

    /// Export favorites in a text file (for inspection) instead of refreshing
    /// them.
    #[clap(long, default_value = "")]
    export_csv: String,

    /// JSON file containing the external service credentials.
    #[clap(long, default_value = "keys.json")]
    key_store: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    Tracing::setup("utils/refresh_favorites")?;

    let opts: Opts = Opts::parse();
    let firestore = FirestoreApi::connect().await?;

    if !opts.export_csv.is_empty() {
        let favorites = library::firestore::favorites::read(&firestore, &opts.user).await?;
        export_favorites(favorites, &opts.export_csv)?;
    } else {
        let keys = util::keys::Keys::from_file(&opts.key_store)?;
        let rawg = RawgApi::new(&keys.rawg.api_key);
        refresh_favorites(firestore, rawg, &opts.user).await?;
    }

    Ok(())
}

#[instrument(level = "trace", skip(firestore, rawg, user_id))]
async fn refresh_favorites(
    firestore: FirestoreApi,
    rawg: RawgApi,
    user_id: &str,
) -> Result<(), Status> {
    let favorites = library::firestore::favorites::read(&firestore, user_id).await?;
    info!("refreshing {} favorites...", favorites.entries.len());

    let mut entries = vec![];
    for entry in favorites.entries {
        match rawg.get_details(entry.id).await {
            Ok(details) => entries.push(FavoriteEntry::new(
                Game::from(details.clone()),
                Some(details),
                entry.added,
            )),
            Err(status) => {
                // The favorites view renders from the snapshot, so a stale
                // one beats a hole in the list.
                warn!("Keeping stale snapshot for '{}': {status}", entry.name);
                entries.push(entry);
            }
        }
    }

    library::firestore::favorites::write(&firestore, user_id, Favorites { entries }).await
}

fn export_favorites(
    favorites: Favorites,
    filename: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut writer = Writer::from_path(filename)?;
    writer.write_record(["id", "name", "rating", "released", "genres", "added"])?;

    for entry in &favorites.entries {
        writer.write_record([
            entry.id.to_string(),
            entry.name.clone(),
            entry.rating.to_string(),
            entry.released.clone().unwrap_or_default(),
            entry.genres.iter().map(|genre| &genre.name).join("|"),
            entry.added.to_string(),
        ])?;
    }
    writer.flush()?;

    println!("exported {} favorites to {filename}", favorites.entries.len());
    Ok(())
}
