use serde::{Deserialize, Serialize};

use super::{Game, Genre, Platform};

/// Extended per-game payload fetched lazily from `GET /games/{id}`.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct GameDetails {
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
}

#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct Developer {
    pub id: u64,
    pub name: String,
}

impl From<GameDetails> for Game {
    fn from(details: GameDetails) -> Self {
        Game {
            id: details.id,
            name: details.name,
            background_image: details.background_image,
            rating: details.rating,
            released: details.released,
            genres: details.genres,
            platforms: details.platforms,
        }
    }
}
