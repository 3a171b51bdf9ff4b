mod favorites;
mod filter_settings;
mod game;
mod game_details;
mod user_profile;

pub use favorites::{FavoriteEntry, Favorites};
pub use filter_settings::FilterSettings;
pub use game::{Game, Genre, Platform};
pub use game_details::{Developer, GameDetails};
pub use user_profile::UserProfile;
