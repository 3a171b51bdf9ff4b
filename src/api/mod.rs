mod firestore;
mod rawg;

pub use firestore::FirestoreApi;
pub use rawg::{GamesResponse, RawgApi, RawgGame, RawgGameDetails};
