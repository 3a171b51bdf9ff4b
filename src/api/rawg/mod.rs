mod backend;
mod connection;
mod docs;
mod service;

use connection::RawgConnection;
pub use docs::{GamesResponse, RawgGame, RawgGameDetails};
pub use service::RawgApi;
