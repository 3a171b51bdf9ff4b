use crate::{
    api::{FirestoreApi, RawgApi},
    games::DetailsCache,
};
use std::{convert::Infallible, sync::Arc};
use warp::{self, Filter};

pub fn with_rawg(
    rawg: Arc<RawgApi>,
) -> impl Filter<Extract = (Arc<RawgApi>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&rawg))
}

pub fn with_firestore(
    firestore: Arc<FirestoreApi>,
) -> impl Filter<Extract = (Arc<FirestoreApi>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&firestore))
}

pub fn with_details_cache(
    cache: Arc<DetailsCache>,
) -> impl Filter<Extract = (Arc<DetailsCache>,), Error = Infallible> + Clone {
    warp::any().map(move || Arc::clone(&cache))
}
