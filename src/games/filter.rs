use chrono::{Months, NaiveDate, Utc};

use crate::documents::{FilterSettings, Game};

/// Months a release date may lag behind today and still count as recent.
const RECENT_WINDOW_MONTHS: u32 = 24;

/// Applies persisted `FilterSettings` to a fetched game list.
///
/// Pure and order-preserving; recomputed on every settings or list change.
/// Games pass when rating clears the minimum, the genre matches (or no genre
/// is selected) and, with `only_recent` set, the release date parses and
/// falls within the recency window. Missing or unparseable dates fail the
/// recency check closed.
pub fn filter_games(games: Vec<Game>, settings: &FilterSettings) -> Vec<Game> {
    let cutoff = Utc::now().date_naive() - Months::new(RECENT_WINDOW_MONTHS);
    filter_games_with_cutoff(games, settings, cutoff)
}

fn filter_games_with_cutoff(
    games: Vec<Game>,
    settings: &FilterSettings,
    cutoff: NaiveDate,
) -> Vec<Game> {
    games
        .into_iter()
        .filter(|game| {
            let passes_rating = game.rating >= settings.min_rating;

            let passes_genre = settings.genre == FilterSettings::DEFAULT_GENRE
                || game
                    .genres
                    .iter()
                    .any(|genre| genre.name.eq_ignore_ascii_case(&settings.genre));

            let passes_date = !settings.only_recent
                || matches!(
                    parse_release_date(game.released.as_deref()),
                    Some(date) if date > cutoff
                );

            passes_rating && passes_genre && passes_date
        })
        .collect()
}

fn parse_release_date(released: Option<&str>) -> Option<NaiveDate> {
    let released = released?;
    if released.is_empty() {
        return None;
    }

    NaiveDate::parse_from_str(released, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::documents::Genre;

    fn game(id: u64, rating: f64, released: Option<&str>, genres: Vec<&str>) -> Game {
        Game {
            id,
            name: format!("game {id}"),
            rating,
            released: released.map(String::from),
            genres: genres
                .into_iter()
                .enumerate()
                .map(|(i, name)| Genre {
                    id: i as u64,
                    name: String::from(name),
                })
                .collect(),
            ..Default::default()
        }
    }

    fn cutoff() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn default_settings_pass_everything_through() {
        let games = vec![
            game(1, 0.0, None, vec![]),
            game(2, 4.8, Some("not-a-date"), vec!["Action"]),
        ];

        let filtered = filter_games_with_cutoff(games, &FilterSettings::default(), cutoff());
        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn rating_minimum_is_inclusive() {
        let settings = FilterSettings {
            min_rating: 4.0,
            ..Default::default()
        };

        let games = vec![
            game(1, 3.9, None, vec![]),
            game(2, 4.0, None, vec![]),
            game(3, 4.5, None, vec![]),
        ];

        let filtered = filter_games_with_cutoff(games, &settings, cutoff());
        assert_eq!(
            filtered.iter().map(|game| game.id).collect::<Vec<_>>(),
            vec![2, 3]
        );
    }

    #[test]
    fn genre_match_ignores_case() {
        let settings = FilterSettings {
            genre: String::from("indie"),
            ..Default::default()
        };

        let games = vec![
            game(1, 3.0, None, vec!["Indie", "Adventure"]),
            game(2, 3.0, None, vec!["Shooter"]),
            game(3, 3.0, None, vec![]),
        ];

        let filtered = filter_games_with_cutoff(games, &settings, cutoff());
        assert_eq!(
            filtered.iter().map(|game| game.id).collect::<Vec<_>>(),
            vec![1]
        );
    }

    #[test]
    fn only_recent_excludes_missing_and_unparseable_dates() {
        let settings = FilterSettings {
            only_recent: true,
            ..Default::default()
        };

        let games = vec![
            game(1, 3.0, Some("2024-11-20"), vec![]),
            game(2, 3.0, None, vec![]),
            game(3, 3.0, Some(""), vec![]),
            game(4, 3.0, Some("late 2023"), vec![]),
            game(5, 3.0, Some("2019-03-05"), vec![]),
        ];

        let filtered = filter_games_with_cutoff(games, &settings, cutoff());
        assert_eq!(
            filtered.iter().map(|game| game.id).collect::<Vec<_>>(),
            vec![1]
        );
    }

    #[test]
    fn release_on_the_cutoff_is_not_recent() {
        let settings = FilterSettings {
            only_recent: true,
            ..Default::default()
        };

        let games = vec![
            game(1, 3.0, Some("2024-06-01"), vec![]),
            game(2, 3.0, Some("2024-06-02"), vec![]),
        ];

        let filtered = filter_games_with_cutoff(games, &settings, cutoff());
        assert_eq!(
            filtered.iter().map(|game| game.id).collect::<Vec<_>>(),
            vec![2]
        );
    }

    #[test]
    fn filtering_preserves_input_order() {
        let settings = FilterSettings {
            min_rating: 2.0,
            ..Default::default()
        };

        let games = vec![
            game(9, 4.0, None, vec![]),
            game(1, 1.0, None, vec![]),
            game(4, 2.5, None, vec![]),
            game(7, 5.0, None, vec![]),
        ];

        let filtered = filter_games_with_cutoff(games, &settings, cutoff());
        assert_eq!(
            filtered.iter().map(|game| game.id).collect::<Vec<_>>(),
            vec![9, 4, 7]
        );
    }

    #[test]
    fn filtering_is_idempotent() {
        let settings = FilterSettings {
            min_rating: 3.0,
            genre: String::from("Indie"),
            only_recent: true,
        };

        let games = vec![
            game(1, 4.0, Some("2025-01-15"), vec!["Indie"]),
            game(2, 2.0, Some("2025-01-15"), vec!["Indie"]),
            game(3, 4.0, Some("2020-01-15"), vec!["Indie"]),
            game(4, 4.0, Some("2025-01-15"), vec!["Shooter"]),
        ];

        let once = filter_games_with_cutoff(games, &settings, cutoff());
        let twice = filter_games_with_cutoff(once.clone(), &settings, cutoff());
        assert_eq!(
            once.iter().map(|game| game.id).collect::<Vec<_>>(),
            twice.iter().map(|game| game.id).collect::<Vec<_>>()
        );
    }
}
