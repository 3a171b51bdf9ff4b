use serde::{Deserialize, Serialize};

/// Persisted game list filter. Default values represent "no filter".
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct FilterSettings {
    #[serde(default)]
    pub min_rating: f64,

    #[serde(default = "default_genre")]
    pub genre: String,

    #[serde(default)]
    pub only_recent: bool,
}

impl FilterSettings {
    pub const DEFAULT_GENRE: &'static str = "All";

    /// True when any field departs from its default. Drives the client's
    /// filter badge.
    pub fn is_custom(&self) -> bool {
        self.min_rating > 0.0 || self.genre != Self::DEFAULT_GENRE || self.only_recent
    }
}

impl Default for FilterSettings {
    fn default() -> Self {
        FilterSettings {
            min_rating: 0.0,
            genre: default_genre(),
            only_recent: false,
        }
    }
}

fn default_genre() -> String {
    String::from(FilterSettings::DEFAULT_GENRE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_are_not_custom() {
        assert!(!FilterSettings::default().is_custom());
    }

    #[test]
    fn any_field_change_is_custom() {
        assert!(FilterSettings {
            min_rating: 3.5,
            ..Default::default()
        }
        .is_custom());
        assert!(FilterSettings {
            genre: String::from("Indie"),
            ..Default::default()
        }
        .is_custom());
        assert!(FilterSettings {
            only_recent: true,
            ..Default::default()
        }
        .is_custom());
    }
}
