use crate::documents::{FavoriteEntry, FilterSettings, Game, UserProfile};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Search {
    #[serde(default)]
    pub query: String,

    #[serde(default = "default_page")]
    pub page: u32,

    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl std::fmt::Display for Search {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.query)
    }
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GamesOp {
    pub user_id: String,

    #[serde(default)]
    pub search: String,

    #[serde(default = "default_page")]
    pub page: u32,

    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct DetailsOp {
    pub game_id: u64,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ToggleOp {
    pub user_id: String,

    /// The listed game whose membership is flipped.
    pub game: Game,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FavoriteStatusOp {
    pub user_id: String,

    pub game_id: u64,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct UserOp {
    pub user_id: String,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FiltersOp {
    pub user_id: String,

    #[serde(default)]
    pub settings: FilterSettings,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ProfileOp {
    pub user_id: String,

    #[serde(default)]
    pub profile: UserProfile,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct GamesReply {
    pub games: Vec<Game>,
    pub filters_applied: bool,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ToggleReply {
    pub is_favorite: bool,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FavoritesReply {
    pub favorites: Vec<FavoriteEntry>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct FiltersReply {
    pub settings: FilterSettings,
    pub is_custom: bool,
}

fn default_page() -> u32 {
    1
}

fn default_page_size() -> u32 {
    20
}
