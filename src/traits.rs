use crate::{documents::GameDetails, Status};
use async_trait::async_trait;

/// Remote catalog seam for per-game detail lookups.
#[async_trait]
pub trait GameCatalog: Send + Sync {
    fn id() -> String
    where
        Self: Sized;

    async fn fetch_details(&self, game_id: u64) -> Result<GameDetails, Status>;
}
