use serde::{Deserialize, Serialize};

use super::{Developer, Game, GameDetails, Genre, Platform};

/// Document under 'users/{user_id}/games' holding the user's favorites.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct Favorites {
    pub entries: Vec<FavoriteEntry>,
}

/// Denormalized snapshot of a favorited game.
///
/// Carries whatever detail data was known at the time the favorite was
/// created so the favorites view renders without a catalog round-trip.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct FavoriteEntry {
    pub id: u64,
    pub name: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,

    #[serde(default)]
    pub rating: f64,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released: Option<String>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<Genre>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<Platform>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub developers: Vec<Developer>,

    /// Millis since epoch when the favorite was added.
    #[serde(default)]
    pub added: u64,
}

impl FavoriteEntry {
    pub fn new(game: Game, details: Option<GameDetails>, added: u64) -> Self {
        let (description, developers) = match details {
            Some(details) => (details.description, details.developers),
            None => (None, vec![]),
        };

        FavoriteEntry {
            id: game.id,
            name: game.name,
            background_image: game.background_image,
            rating: game.rating,
            released: game.released,
            description,
            genres: game.genres,
            platforms: game.platforms,
            developers,
            added,
        }
    }
}
