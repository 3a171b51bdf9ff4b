use crate::{
    api::{FirestoreApi, RawgApi},
    games::DetailsCache,
};
use std::sync::Arc;
use tracing::warn;
use warp::{self, Filter};

use super::{handlers, models, resources::*};

/// Returns a Filter with all available routes.
pub fn routes(
    firestore: Arc<FirestoreApi>,
    rawg: Arc<RawgApi>,
    cache: Arc<DetailsCache>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    home()
        .or(post_search(Arc::clone(&rawg)))
        .or(post_games(
            Arc::clone(&rawg),
            Arc::clone(&firestore),
            Arc::clone(&cache),
        ))
        .or(post_details(Arc::clone(&cache)))
        .or(post_toggle(Arc::clone(&firestore), Arc::clone(&cache)))
        .or(post_favorite_status(Arc::clone(&firestore)))
        .or(post_favorites(Arc::clone(&firestore)))
        .or(post_save_filters(Arc::clone(&firestore)))
        .or(post_load_filters(Arc::clone(&firestore)))
        .or(post_reset_filters(Arc::clone(&firestore)))
        .or(post_save_profile(Arc::clone(&firestore)))
        .or(post_load_profile(firestore))
        .or_else(|e| async {
            warn! {"Rejected route: {:?}", e};
            Err(e)
        })
}

/// GET /
fn home() -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!().and(warp::get()).and_then(handlers::welcome)
}

/// POST /search
fn post_search(
    rawg: Arc<RawgApi>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("search")
        .and(warp::post())
        .and(json_body::<models::Search>())
        .and(with_rawg(rawg))
        .and_then(handlers::post_search)
}

/// POST /games
fn post_games(
    rawg: Arc<RawgApi>,
    firestore: Arc<FirestoreApi>,
    cache: Arc<DetailsCache>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("games")
        .and(warp::post())
        .and(json_body::<models::GamesOp>())
        .and(with_rawg(rawg))
        .and(with_firestore(firestore))
        .and(with_details_cache(cache))
        .and_then(handlers::post_games)
}

/// POST /details
fn post_details(
    cache: Arc<DetailsCache>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("details")
        .and(warp::post())
        .and(json_body::<models::DetailsOp>())
        .and(with_details_cache(cache))
        .and_then(handlers::post_details)
}

/// POST /library/toggle
fn post_toggle(
    firestore: Arc<FirestoreApi>,
    cache: Arc<DetailsCache>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("library" / "toggle")
        .and(warp::post())
        .and(json_body::<models::ToggleOp>())
        .and(with_firestore(firestore))
        .and(with_details_cache(cache))
        .and_then(handlers::post_toggle)
}

/// POST /library/status
fn post_favorite_status(
    firestore: Arc<FirestoreApi>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("library" / "status")
        .and(warp::post())
        .and(json_body::<models::FavoriteStatusOp>())
        .and(with_firestore(firestore))
        .and_then(handlers::post_favorite_status)
}

/// POST /library/list
fn post_favorites(
    firestore: Arc<FirestoreApi>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("library" / "list")
        .and(warp::post())
        .and(json_body::<models::UserOp>())
        .and(with_firestore(firestore))
        .and_then(handlers::post_favorites)
}

/// POST /filters/save
fn post_save_filters(
    firestore: Arc<FirestoreApi>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("filters" / "save")
        .and(warp::post())
        .and(json_body::<models::FiltersOp>())
        .and(with_firestore(firestore))
        .and_then(handlers::post_save_filters)
}

/// POST /filters/load
fn post_load_filters(
    firestore: Arc<FirestoreApi>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("filters" / "load")
        .and(warp::post())
        .and(json_body::<models::UserOp>())
        .and(with_firestore(firestore))
        .and_then(handlers::post_load_filters)
}

/// POST /filters/reset
fn post_reset_filters(
    firestore: Arc<FirestoreApi>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("filters" / "reset")
        .and(warp::post())
        .and(json_body::<models::UserOp>())
        .and(with_firestore(firestore))
        .and_then(handlers::post_reset_filters)
}

/// POST /profile/save
fn post_save_profile(
    firestore: Arc<FirestoreApi>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("profile" / "save")
        .and(warp::post())
        .and(json_body::<models::ProfileOp>())
        .and(with_firestore(firestore))
        .and_then(handlers::post_save_profile)
}

/// POST /profile/load
fn post_load_profile(
    firestore: Arc<FirestoreApi>,
) -> impl Filter<Extract = (impl warp::Reply,), Error = warp::Rejection> + Clone {
    warp::path!("profile" / "load")
        .and(warp::post())
        .and(json_body::<models::UserOp>())
        .and(with_firestore(firestore))
        .and_then(handlers::post_load_profile)
}

fn json_body<T: serde::de::DeserializeOwned + Send>(
) -> impl Filter<Extract = (T,), Error = warp::Rejection> + Clone {
    warp::body::content_length_limit(16 * 1024).and(warp::body::json())
}
