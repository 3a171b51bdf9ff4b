use serde::{Deserialize, Serialize};

/// Shallow catalog entry returned by game listing and search.
///
/// Identity key is `id`. Entries are immutable once fetched and replaced
/// wholesale on re-fetch.
#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct Game {
    pub id: u64,
    pub name: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,

    /// Aggregate user rating on the catalog's 0-5 scale.
    #[serde(default)]
    pub rating: f64,

    /// Release date as an ISO `YYYY-MM-DD` string, when the catalog knows it.
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub released: Option<String>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub genres: Vec<Genre>,

    #[serde(default)]
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub platforms: Vec<Platform>,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct Genre {
    pub id: u64,
    pub name: String,
}

#[derive(Serialize, Deserialize, Default, Clone, Debug)]
pub struct Platform {
    pub id: u64,
    pub name: String,

    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
}
