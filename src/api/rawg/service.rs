use crate::{
    documents::{Game, GameDetails},
    traits::GameCatalog,
    Status,
};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

use super::{backend::get, docs, RawgConnection};

#[derive(Clone)]
pub struct RawgApi {
    connection: Arc<RawgConnection>,
}

impl RawgApi {
    pub fn new(api_key: &str) -> RawgApi {
        RawgApi {
            connection: Arc::new(RawgConnection::new(api_key)),
        }
    }

    /// Returns a page of the games catalog.
    #[instrument(level = "trace", skip(self))]
    pub async fn list_games(&self, page: u32, page_size: u32) -> Result<Vec<Game>, Status> {
        let response: docs::GamesResponse = get(
            &self.connection,
            GAMES_ENDPOINT,
            &[
                ("page", page.to_string()),
                ("page_size", page_size.to_string()),
            ],
        )
        .await?;

        Ok(response.results.into_iter().map(Game::from).collect())
    }

    /// Returns games matching `query`. An empty query falls back to plain
    /// listing.
    #[instrument(level = "trace", skip(self))]
    pub async fn search(&self, query: &str, page: u32, page_size: u32) -> Result<Vec<Game>, Status> {
        if query.is_empty() {
            return self.list_games(page, page_size).await;
        }

        let response: docs::GamesResponse = get(
            &self.connection,
            GAMES_ENDPOINT,
            &[
                ("search", query.to_string()),
                ("page", page.to_string()),
                ("page_size", page_size.to_string()),
            ],
        )
        .await?;

        Ok(response.results.into_iter().map(Game::from).collect())
    }

    /// Returns the extended payload for a game `id`.
    #[instrument(level = "trace", skip(self))]
    pub async fn get_details(&self, id: u64) -> Result<GameDetails, Status> {
        let response: docs::RawgGameDetails =
            get(&self.connection, &format!("{GAMES_ENDPOINT}/{id}"), &[]).await?;

        Ok(GameDetails::from(response))
    }
}

#[async_trait]
impl GameCatalog for RawgApi {
    fn id() -> String {
        String::from("rawg")
    }

    async fn fetch_details(&self, game_id: u64) -> Result<GameDetails, Status> {
        self.get_details(game_id).await
    }
}

const GAMES_ENDPOINT: &str = "games";
