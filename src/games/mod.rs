mod details_cache;
mod filter;

pub use details_cache::DetailsCache;
pub use filter::filter_games;
