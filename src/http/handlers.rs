use crate::{
    api::{FirestoreApi, RawgApi},
    documents::Game,
    games::{filter_games, DetailsCache},
    http::models,
    library::LibraryManager,
};
use std::{convert::Infallible, sync::Arc, time::Instant};
use tracing::{info, instrument, trace_span, Instrument};
use warp::http::StatusCode;

use super::query_logs::*;

#[instrument(level = "trace")]
pub async fn welcome() -> Result<impl warp::Reply, Infallible> {
    info!(
        http_request.request_method = "GET",
        http_request.request_url = "/",
        labels.log_type = "query_logs",
        labels.handler = "welcome",
        "welcome"
    );
    Ok("welcome")
}

#[instrument(level = "trace", skip(rawg))]
pub async fn post_search(
    search: models::Search,
    rawg: Arc<RawgApi>,
) -> Result<Box<dyn warp::Reply>, Infallible> {
    let started = Instant::now();
    let event = SearchEvent::new(&search);

    match rawg
        .search(&search.query, search.page, search.page_size)
        .await
    {
        Ok(games) => {
            event.log(started.elapsed(), &games);
            Ok(Box::new(warp::reply::json(&games)))
        }
        Err(status) => {
            event.log_error(started.elapsed(), status);
            Ok(Box::new(StatusCode::INTERNAL_SERVER_ERROR))
        }
    }
}

#[instrument(level = "trace", skip(rawg, firestore, cache))]
pub async fn post_games(
    op: models::GamesOp,
    rawg: Arc<RawgApi>,
    firestore: Arc<FirestoreApi>,
    cache: Arc<DetailsCache>,
) -> Result<Box<dyn warp::Reply>, Infallible> {
    let started = Instant::now();
    let event = GamesEvent::new(&op);

    let games = match rawg.search(&op.search, op.page, op.page_size).await {
        Ok(games) => games,
        Err(status) => {
            event.log_error(started.elapsed(), status);
            return Ok(Box::new(StatusCode::INTERNAL_SERVER_ERROR));
        }
    };

    let manager = LibraryManager::new(&op.user_id);
    let settings = match manager.load_filters(Arc::clone(&firestore)).await {
        Ok(settings) => settings,
        Err(status) => {
            event.log_error(started.elapsed(), status);
            return Ok(Box::new(StatusCode::INTERNAL_SERVER_ERROR));
        }
    };

    let filters_applied = settings.is_custom();
    let games = match filters_applied {
        true => filter_games(games, &settings),
        false => games,
    };

    prefetch_details(&cache, &games);

    event.log(started.elapsed(), &games, filters_applied);
    Ok(Box::new(warp::reply::json(&models::GamesReply {
        games,
        filters_applied,
    })))
}

/// Warms the details cache for listed games without delaying the response.
/// The cache coalesces ids that are already resolved or in flight.
fn prefetch_details(cache: &Arc<DetailsCache>, games: &[Game]) {
    let cache = Arc::clone(cache);
    let game_ids: Vec<u64> = games.iter().map(|game| game.id).collect();

    tokio::spawn(
        async move {
            futures::future::join_all(game_ids.into_iter().map(|game_id| {
                let cache = Arc::clone(&cache);
                async move {
                    cache.get(game_id).await;
                }
            }))
            .await;
        }
        .instrument(trace_span!("spawn_prefetch_details")),
    );
}

#[instrument(level = "trace", skip(cache))]
pub async fn post_details(
    op: models::DetailsOp,
    cache: Arc<DetailsCache>,
) -> Result<Box<dyn warp::Reply>, Infallible> {
    let started = Instant::now();
    let event = DetailsEvent::new(&op);

    match cache.get(op.game_id).await {
        Some(details) => {
            event.log(started.elapsed(), true);
            Ok(Box::new(warp::reply::json(&details)))
        }
        None => {
            event.log(started.elapsed(), false);
            Ok(Box::new(StatusCode::NOT_FOUND))
        }
    }
}

#[instrument(
    level = "trace",
    skip(op, firestore, cache),
    fields(
        title = %op.game.name,
    )
)]
pub async fn post_toggle(
    op: models::ToggleOp,
    firestore: Arc<FirestoreApi>,
    cache: Arc<DetailsCache>,
) -> Result<Box<dyn warp::Reply>, Infallible> {
    let started = Instant::now();
    let event = ToggleEvent::new(&op);

    // Snapshot whatever details are already known. Never fetches.
    let details = cache.peek(op.game.id);

    let manager = LibraryManager::new(&op.user_id);
    match manager.toggle_favorite(firestore, op.game, details).await {
        Ok(is_favorite) => {
            event.log(started.elapsed(), is_favorite);
            Ok(Box::new(warp::reply::json(&models::ToggleReply {
                is_favorite,
            })))
        }
        Err(status) => {
            event.log_error(started.elapsed(), status);
            Ok(Box::new(StatusCode::INTERNAL_SERVER_ERROR))
        }
    }
}

#[instrument(level = "trace", skip(firestore))]
pub async fn post_favorite_status(
    op: models::FavoriteStatusOp,
    firestore: Arc<FirestoreApi>,
) -> Result<Box<dyn warp::Reply>, Infallible> {
    let started = Instant::now();
    let event = FavoriteStatusEvent::new(&op);

    let manager = LibraryManager::new(&op.user_id);
    match manager.is_favorite(firestore, op.game_id).await {
        Ok(is_favorite) => {
            event.log(started.elapsed(), is_favorite);
            Ok(Box::new(warp::reply::json(&models::ToggleReply {
                is_favorite,
            })))
        }
        Err(status) => {
            event.log_error(started.elapsed(), status);
            Ok(Box::new(StatusCode::INTERNAL_SERVER_ERROR))
        }
    }
}

#[instrument(level = "trace", skip(firestore))]
pub async fn post_favorites(
    op: models::UserOp,
    firestore: Arc<FirestoreApi>,
) -> Result<Box<dyn warp::Reply>, Infallible> {
    let started = Instant::now();
    let event = FavoritesEvent::new(&op);

    let manager = LibraryManager::new(&op.user_id);
    match manager.list_favorites(firestore).await {
        Ok(favorites) => {
            event.log(started.elapsed(), favorites.len());
            Ok(Box::new(warp::reply::json(&models::FavoritesReply {
                favorites,
            })))
        }
        Err(status) => {
            event.log_error(started.elapsed(), status);
            Ok(Box::new(StatusCode::INTERNAL_SERVER_ERROR))
        }
    }
}

#[instrument(level = "trace", skip(op, firestore))]
pub async fn post_save_filters(
    op: models::FiltersOp,
    firestore: Arc<FirestoreApi>,
) -> Result<Box<dyn warp::Reply>, Infallible> {
    let started = Instant::now();
    let event = FiltersEvent::save(&op.user_id);

    let manager = LibraryManager::new(&op.user_id);
    match manager.save_filters(firestore, &op.settings).await {
        Ok(is_custom) => {
            event.log(started.elapsed(), is_custom);
            Ok(Box::new(warp::reply::json(&models::FiltersReply {
                settings: op.settings,
                is_custom,
            })))
        }
        Err(status) => {
            event.log_error(started.elapsed(), status);
            Ok(Box::new(StatusCode::INTERNAL_SERVER_ERROR))
        }
    }
}

#[instrument(level = "trace", skip(firestore))]
pub async fn post_load_filters(
    op: models::UserOp,
    firestore: Arc<FirestoreApi>,
) -> Result<Box<dyn warp::Reply>, Infallible> {
    let started = Instant::now();
    let event = FiltersEvent::load(&op.user_id);

    let manager = LibraryManager::new(&op.user_id);
    match manager.load_filters(firestore).await {
        Ok(settings) => {
            let is_custom = settings.is_custom();
            event.log(started.elapsed(), is_custom);
            Ok(Box::new(warp::reply::json(&models::FiltersReply {
                settings,
                is_custom,
            })))
        }
        Err(status) => {
            event.log_error(started.elapsed(), status);
            Ok(Box::new(StatusCode::INTERNAL_SERVER_ERROR))
        }
    }
}

#[instrument(level = "trace", skip(firestore))]
pub async fn post_reset_filters(
    op: models::UserOp,
    firestore: Arc<FirestoreApi>,
) -> Result<impl warp::Reply, Infallible> {
    let started = Instant::now();
    let event = FiltersEvent::reset(&op.user_id);

    let manager = LibraryManager::new(&op.user_id);
    match manager.reset_filters(firestore).await {
        Ok(()) => {
            event.log(started.elapsed(), false);
            Ok(StatusCode::OK)
        }
        Err(status) => {
            event.log_error(started.elapsed(), status);
            Ok(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[instrument(level = "trace", skip(op, firestore))]
pub async fn post_save_profile(
    op: models::ProfileOp,
    firestore: Arc<FirestoreApi>,
) -> Result<impl warp::Reply, Infallible> {
    let started = Instant::now();
    let event = ProfileEvent::save(&op.user_id);

    let manager = LibraryManager::new(&op.user_id);
    match manager.save_profile(firestore, &op.profile).await {
        Ok(()) => {
            event.log(started.elapsed());
            Ok(StatusCode::OK)
        }
        Err(status) => {
            event.log_error(started.elapsed(), status);
            Ok(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

#[instrument(level = "trace", skip(firestore))]
pub async fn post_load_profile(
    op: models::UserOp,
    firestore: Arc<FirestoreApi>,
) -> Result<Box<dyn warp::Reply>, Infallible> {
    let started = Instant::now();
    let event = ProfileEvent::load(&op.user_id);

    let manager = LibraryManager::new(&op.user_id);
    match manager.load_profile(firestore).await {
        Ok(profile) => {
            event.log(started.elapsed());
            Ok(Box::new(warp::reply::json(&profile)))
        }
        Err(status) => {
            event.log_error(started.elapsed(), status);
            Ok(Box::new(StatusCode::INTERNAL_SERVER_ERROR))
        }
    }
}
