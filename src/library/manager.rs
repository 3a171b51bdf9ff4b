use crate::{
    api::FirestoreApi,
    documents::{FavoriteEntry, FilterSettings, Game, GameDetails, UserProfile},
    Status,
};
use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};
use tracing::instrument;

use super::firestore;

pub struct LibraryManager {
    user_id: String,
}

impl LibraryManager {
    /// Creates a LibraryManager instance for a user.
    pub fn new(user_id: &str) -> Self {
        LibraryManager {
            user_id: String::from(user_id),
        }
    }

    /// Flips favorite membership for a game and returns the new state.
    ///
    /// Adding snapshots the game together with whatever detail data the
    /// caller already holds; removing deletes the row keyed by game id.
    #[instrument(
        level = "trace",
        skip(self, firestore, game, details),
        fields(
            game_id = %game.id,
            title = %game.name
        )
    )]
    pub async fn toggle_favorite(
        &self,
        firestore: Arc<FirestoreApi>,
        game: Game,
        details: Option<GameDetails>,
    ) -> Result<bool, Status> {
        if firestore::favorites::remove_entry(&firestore, &self.user_id, game.id).await? {
            return Ok(false);
        }

        let entry = FavoriteEntry::new(game, details, unix_millis());
        firestore::favorites::add_entry(&firestore, &self.user_id, entry).await?;
        Ok(true)
    }

    #[instrument(level = "trace", skip(self, firestore))]
    pub async fn is_favorite(
        &self,
        firestore: Arc<FirestoreApi>,
        game_id: u64,
    ) -> Result<bool, Status> {
        firestore::favorites::contains(&firestore, &self.user_id, game_id).await
    }

    /// Returns favorites with the most recently added first.
    #[instrument(level = "trace", skip(self, firestore))]
    pub async fn list_favorites(
        &self,
        firestore: Arc<FirestoreApi>,
    ) -> Result<Vec<FavoriteEntry>, Status> {
        let mut favorites = firestore::favorites::read(&firestore, &self.user_id).await?;
        favorites.entries.sort_by(|l, r| r.added.cmp(&l.added));
        Ok(favorites.entries)
    }

    /// Persists filter settings and reports whether they depart from the
    /// defaults.
    #[instrument(level = "trace", skip(self, firestore, settings))]
    pub async fn save_filters(
        &self,
        firestore: Arc<FirestoreApi>,
        settings: &FilterSettings,
    ) -> Result<bool, Status> {
        firestore::settings::write(&firestore, &self.user_id, settings).await?;
        Ok(settings.is_custom())
    }

    #[instrument(level = "trace", skip(self, firestore))]
    pub async fn load_filters(&self, firestore: Arc<FirestoreApi>) -> Result<FilterSettings, Status> {
        firestore::settings::read(&firestore, &self.user_id).await
    }

    #[instrument(level = "trace", skip(self, firestore))]
    pub async fn reset_filters(&self, firestore: Arc<FirestoreApi>) -> Result<(), Status> {
        firestore::settings::write(&firestore, &self.user_id, &FilterSettings::default()).await
    }

    #[instrument(level = "trace", skip(self, firestore, profile))]
    pub async fn save_profile(
        &self,
        firestore: Arc<FirestoreApi>,
        profile: &UserProfile,
    ) -> Result<(), Status> {
        firestore::profile::write(&firestore, &self.user_id, profile).await
    }

    #[instrument(level = "trace", skip(self, firestore))]
    pub async fn load_profile(&self, firestore: Arc<FirestoreApi>) -> Result<UserProfile, Status> {
        firestore::profile::read(&firestore, &self.user_id).await
    }
}

fn unix_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
