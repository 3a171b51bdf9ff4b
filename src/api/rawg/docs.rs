use serde::{Deserialize, Serialize};

use crate::documents::{Developer, Game, GameDetails, Genre, Platform};

/// Paginated response of the `games` listing / search endpoint.
#[derive(Deserialize, Default, Debug, Clone)]
pub struct GamesResponse {
    #[serde(default)]
    pub count: u64,

    #[serde(default)]
    pub next: Option<String>,

    #[serde(default)]
    pub previous: Option<String>,

    #[serde(default)]
    pub results: Vec<RawgGame>,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct RawgGame {
    pub id: u64,
    pub name: String,

    #[serde(default)]
    pub background_image: Option<String>,

    #[serde(default)]
    pub rating: f64,

    #[serde(default)]
    pub released: Option<String>,

    #[serde(default)]
    pub genres: Option<Vec<RawgGenre>>,

    #[serde(default)]
    pub platforms: Option<Vec<RawgPlatformWrapper>>,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct RawgGameDetails {
    pub id: u64,
    pub name: String,

    #[serde(default)]
    pub background_image: Option<String>,

    #[serde(default)]
    pub rating: f64,

    #[serde(default)]
    pub released: Option<String>,

    /// HTML description. Rendering is a client concern.
    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub description_raw: Option<String>,

    #[serde(default)]
    pub genres: Option<Vec<RawgGenre>>,

    #[serde(default)]
    pub platforms: Option<Vec<RawgPlatformWrapper>>,

    #[serde(default)]
    pub developers: Option<Vec<RawgDeveloper>>,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct RawgGenre {
    pub id: u64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct RawgPlatformWrapper {
    pub platform: RawgPlatform,

    #[serde(default)]
    pub released_at: Option<String>,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct RawgPlatform {
    pub id: u64,
    pub name: String,

    #[serde(default)]
    pub slug: Option<String>,
}

#[derive(Serialize, Deserialize, Default, Debug, Clone)]
pub struct RawgDeveloper {
    pub id: u64,
    pub name: String,
}

impl From<RawgGame> for Game {
    fn from(game: RawgGame) -> Self {
        Game {
            id: game.id,
            name: game.name,
            background_image: game.background_image,
            rating: game.rating,
            released: game.released,
            genres: extract_genres(game.genres),
            platforms: extract_platforms(game.platforms),
        }
    }
}

impl From<RawgGameDetails> for GameDetails {
    fn from(details: RawgGameDetails) -> Self {
        GameDetails {
            id: details.id,
            name: details.name,
            background_image: details.background_image,
            rating: details.rating,
            released: details.released,
            description: match details.description_raw {
                Some(description) if !description.is_empty() => Some(description),
                _ => details.description,
            },
            genres: extract_genres(details.genres),
            platforms: extract_platforms(details.platforms),
            developers: details
                .developers
                .unwrap_or_default()
                .into_iter()
                .map(|developer| Developer {
                    id: developer.id,
                    name: developer.name,
                })
                .collect(),
        }
    }
}

fn extract_genres(genres: Option<Vec<RawgGenre>>) -> Vec<Genre> {
    genres
        .unwrap_or_default()
        .into_iter()
        .map(|genre| Genre {
            id: genre.id,
            name: genre.name,
        })
        .collect()
}

fn extract_platforms(platforms: Option<Vec<RawgPlatformWrapper>>) -> Vec<Platform> {
    platforms
        .unwrap_or_default()
        .into_iter()
        .map(|wrapper| Platform {
            id: wrapper.platform.id,
            name: wrapper.platform.name,
            slug: wrapper.platform.slug,
        })
        .collect()
}
