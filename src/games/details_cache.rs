use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use tokio::sync::OnceCell;
use tracing::{instrument, warn};

use crate::{documents::GameDetails, traits::GameCatalog, Status};

/// Session cache of per-game details keyed by game id.
///
/// Each id resolves at most once against the remote catalog: concurrent
/// callers coalesce onto the in-flight request and all observe its outcome.
/// Failures are cached as `None` and surfaced as "unavailable" without a
/// retry. Entries live for the process lifetime with no eviction; the cache
/// is bounded only by the catalog pages a session actually touches.
pub struct DetailsCache {
    catalog: Arc<dyn GameCatalog>,
    entries: Mutex<HashMap<u64, Arc<OnceCell<Option<GameDetails>>>>>,
}

impl DetailsCache {
    pub fn new(catalog: Arc<dyn GameCatalog>) -> Self {
        DetailsCache {
            catalog,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Returns details for `game_id`, fetching them on first use.
    #[instrument(level = "trace", skip(self))]
    pub async fn get(&self, game_id: u64) -> Option<GameDetails> {
        let cell = {
            let mut entries = self.entries.lock().unwrap();
            Arc::clone(entries.entry(game_id).or_default())
        };

        cell.get_or_init(|| async {
            match self.catalog.fetch_details(game_id).await {
                Ok(details) => Some(details),
                Err(status) => {
                    warn!("Failed to fetch details for game {game_id}: {status}");
                    None
                }
            }
        })
        .await
        .clone()
    }

    /// Returns details only if `game_id` already resolved successfully.
    /// Never triggers a fetch.
    pub fn peek(&self, game_id: u64) -> Option<GameDetails> {
        let entries = self.entries.lock().unwrap();
        entries
            .get(&game_id)
            .and_then(|cell| cell.get())
            .and_then(|cached| cached.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FakeCatalog {
        calls: AtomicUsize,
        fail: bool,
    }

    impl FakeCatalog {
        fn new(fail: bool) -> Self {
            FakeCatalog {
                calls: AtomicUsize::new(0),
                fail,
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GameCatalog for FakeCatalog {
        fn id() -> String {
            String::from("fake")
        }

        async fn fetch_details(&self, game_id: u64) -> Result<GameDetails, Status> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match self.fail {
                false => Ok(GameDetails {
                    id: game_id,
                    name: format!("game {game_id}"),
                    ..Default::default()
                }),
                true => Err(Status::internal("catalog is down")),
            }
        }
    }

    #[tokio::test]
    async fn concurrent_requests_issue_one_fetch() {
        let catalog = Arc::new(FakeCatalog::new(false));
        let cache = Arc::new(DetailsCache::new(Arc::clone(&catalog) as Arc<dyn GameCatalog>));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                tokio::spawn(async move { cache.get(7).await })
            })
            .collect();

        for handle in handles {
            let details = handle.await.unwrap();
            assert_eq!(details.unwrap().id, 7);
        }
        assert_eq!(catalog.calls(), 1);
    }

    #[tokio::test]
    async fn repeated_requests_hit_the_cache() {
        let catalog = Arc::new(FakeCatalog::new(false));
        let cache = DetailsCache::new(Arc::clone(&catalog) as Arc<dyn GameCatalog>);

        assert!(cache.get(3).await.is_some());
        assert!(cache.get(3).await.is_some());
        assert_eq!(catalog.calls(), 1);
    }

    #[tokio::test]
    async fn distinct_ids_fetch_independently() {
        let catalog = Arc::new(FakeCatalog::new(false));
        let cache = DetailsCache::new(Arc::clone(&catalog) as Arc<dyn GameCatalog>);

        let (a, b) = tokio::join!(cache.get(1), cache.get(2));
        assert_eq!(a.unwrap().id, 1);
        assert_eq!(b.unwrap().id, 2);
        assert_eq!(catalog.calls(), 2);
    }

    #[tokio::test]
    async fn failures_cache_as_unavailable_without_retry() {
        let catalog = Arc::new(FakeCatalog::new(true));
        let cache = DetailsCache::new(Arc::clone(&catalog) as Arc<dyn GameCatalog>);

        assert!(cache.get(5).await.is_none());
        assert!(cache.get(5).await.is_none());
        assert_eq!(catalog.calls(), 1);
    }

    #[tokio::test]
    async fn peek_never_fetches() {
        let catalog = Arc::new(FakeCatalog::new(false));
        let cache = DetailsCache::new(Arc::clone(&catalog) as Arc<dyn GameCatalog>);

        assert!(cache.peek(9).is_none());
        assert_eq!(catalog.calls(), 0);

        cache.get(9).await;
        assert_eq!(cache.peek(9).unwrap().id, 9);
        assert_eq!(catalog.calls(), 1);
    }
}
