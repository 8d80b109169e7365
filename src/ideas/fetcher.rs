//! Fetching listing pages and tracking the current one.
//!
//! Every call to [`PostsFetcher::fetch`] takes a ticket from a monotonically
//! increasing counter. Only the fetch holding the latest ticket may publish
//! into the shared [`ListSnapshot`], so a slow response for an old query can
//! never overwrite the result of a newer one.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::ideas::image::ImageResolver;
use crate::ideas::model::{IdeasResponse, ListResult};
use crate::ideas::query::ListQuery;
use crate::ideas::source::IdeasSource;

/// What the render layer sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListSnapshot {
    /// The query of the most recently issued fetch.
    pub query: ListQuery,
    pub loading: bool,
    pub result: ListResult,
}

impl Default for ListSnapshot {
    fn default() -> Self {
        let query = ListQuery::default();
        Self {
            query,
            loading: false,
            result: ListResult::empty(&query),
        }
    }
}

pub struct PostsFetcher {
    source: Arc<dyn IdeasSource>,
    resolver: ImageResolver,
    latest_ticket: AtomicU64,
    snapshot: RwLock<ListSnapshot>,
}

impl PostsFetcher {
    pub fn new(source: Arc<dyn IdeasSource>, resolver: ImageResolver) -> Self {
        Self {
            source,
            resolver,
            latest_ticket: AtomicU64::new(0),
            snapshot: RwLock::new(ListSnapshot::default()),
        }
    }

    /// Fetch the page described by `query`.
    ///
    /// Failures are absorbed into an empty result. The returned result is
    /// always this call's own; the shared snapshot only takes it if no newer
    /// fetch was started in the meantime.
    pub async fn fetch(&self, query: ListQuery) -> ListResult {
        let ticket = self.latest_ticket.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut snapshot = self.snapshot.write().await;
            snapshot.query = query;
            snapshot.loading = true;
        }

        let result = match self.source.fetch_ideas(&query).await {
            Ok(response) => self.map_response(&query, response),
            Err(e) => {
                warn!(
                    page = query.page,
                    per_page = query.per_page.get(),
                    sort = query.sort.as_str(),
                    "Failed to fetch ideas: {e:#}"
                );
                ListResult::empty(&query)
            }
        };

        let mut snapshot = self.snapshot.write().await;
        if self.latest_ticket.load(Ordering::SeqCst) == ticket {
            snapshot.result = result.clone();
            snapshot.loading = false;
        } else {
            debug!(ticket, page = query.page, "Discarding superseded ideas response");
        }

        result
    }

    /// The current query, loading flag and latest published result.
    pub async fn snapshot(&self) -> ListSnapshot {
        self.snapshot.read().await.clone()
    }

    fn map_response(&self, query: &ListQuery, response: IdeasResponse) -> ListResult {
        let total = response.total();
        let items = response
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|record| self.resolver.to_post(record))
            .collect();
        ListResult::new(query, items, total)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;
    use tokio::sync::oneshot;

    use super::*;
    use crate::ideas::query::{PerPage, SortOrder};
    use crate::ideas::source::FetchError;

    fn page_body(ids: &[u32], total: u64) -> IdeasResponse {
        let data: Vec<_> = ids
            .iter()
            .map(|id| {
                json!({
                    "id": id,
                    "title": format!("Idea {id}"),
                    "published_at": "2024-03-01 08:00:00",
                    "small_image": [{"url": format!("/img/{id}.jpg")}]
                })
            })
            .collect();
        serde_json::from_value(json!({"data": data, "meta": {"total": total}})).unwrap()
    }

    /// Answers from a fixed table, keyed by page.
    struct StaticSource(HashMap<u32, IdeasResponse>);

    #[async_trait]
    impl IdeasSource for StaticSource {
        async fn fetch_ideas(&self, query: &ListQuery) -> Result<IdeasResponse, FetchError> {
            self.0.get(&query.page).cloned().ok_or(FetchError::Status {
                url: "static".to_string(),
                status: 500,
            })
        }
    }

    /// Holds each page's response until the test releases it.
    struct GatedSource {
        gates: Mutex<HashMap<u32, oneshot::Receiver<IdeasResponse>>>,
    }

    #[async_trait]
    impl IdeasSource for GatedSource {
        async fn fetch_ideas(&self, query: &ListQuery) -> Result<IdeasResponse, FetchError> {
            let gate = self.gates.lock().unwrap().remove(&query.page).unwrap();
            gate.await.map_err(|_| FetchError::Status {
                url: "gated".to_string(),
                status: 503,
            })
        }
    }

    fn query(page: u32) -> ListQuery {
        ListQuery {
            page,
            per_page: PerPage::Ten,
            sort: SortOrder::Newest,
        }
    }

    #[tokio::test]
    async fn test_fetch_maps_items_through_resolver() {
        let source = StaticSource(HashMap::from([(2, page_body(&[11, 12], 95))]));
        let fetcher = PostsFetcher::new(Arc::new(source), ImageResolver::default());

        let result = fetcher.fetch(query(2)).await;
        assert_eq!(result.total, 95);
        assert_eq!(result.last_page, 10);
        assert_eq!(result.items.len(), 2);
        assert_eq!(result.items[0].id, "11");
        assert_eq!(
            result.items[0].image_url,
            "https://suitmedia.static-assets.id/img/11.jpg"
        );

        let snapshot = fetcher.snapshot().await;
        assert!(!snapshot.loading);
        assert_eq!(snapshot.query, query(2));
        assert_eq!(snapshot.result, result);
    }

    #[tokio::test]
    async fn test_failure_clears_previous_result() {
        let source = StaticSource(HashMap::from([(1, page_body(&[1, 2, 3], 3))]));
        let fetcher = PostsFetcher::new(Arc::new(source), ImageResolver::default());

        let first = fetcher.fetch(query(1)).await;
        assert_eq!(first.items.len(), 3);

        let failed = fetcher.fetch(query(2)).await;
        assert!(failed.items.is_empty());
        assert_eq!(failed.total, 0);
        assert_eq!(failed.last_page, 1);

        let snapshot = fetcher.snapshot().await;
        assert!(snapshot.result.items.is_empty());
        assert!(!snapshot.loading);
    }

    #[tokio::test]
    async fn test_superseded_response_is_discarded() {
        let (release_old, old_gate) = oneshot::channel();
        let (release_new, new_gate) = oneshot::channel();
        let source = GatedSource {
            gates: Mutex::new(HashMap::from([(1, old_gate), (2, new_gate)])),
        };
        let fetcher = PostsFetcher::new(Arc::new(source), ImageResolver::default());

        let old = fetcher.fetch(query(1));
        let new = fetcher.fetch(query(2));
        let release = async {
            tokio::task::yield_now().await;
            assert!(fetcher.snapshot().await.loading);
            release_new.send(page_body(&[21, 22], 30)).unwrap();
            tokio::task::yield_now().await;
            release_old.send(page_body(&[1, 2], 30)).unwrap();
        };

        let (old_result, new_result, ()) = tokio::join!(old, new, release);

        // Each caller still gets its own answer.
        assert_eq!(old_result.items[0].id, "1");
        assert_eq!(new_result.items[0].id, "21");

        // But only the newest one is published.
        let snapshot = fetcher.snapshot().await;
        assert_eq!(snapshot.query, query(2));
        assert_eq!(snapshot.result.items[0].id, "21");
        assert!(!snapshot.loading);
    }

    #[tokio::test]
    async fn test_stale_completion_keeps_loading_flag() {
        let (release_old, old_gate) = oneshot::channel();
        let (release_new, new_gate) = oneshot::channel();
        let source = GatedSource {
            gates: Mutex::new(HashMap::from([(1, old_gate), (2, new_gate)])),
        };
        let fetcher = PostsFetcher::new(Arc::new(source), ImageResolver::default());

        let old = fetcher.fetch(query(1));
        let new = fetcher.fetch(query(2));
        let release = async {
            tokio::task::yield_now().await;
            release_old.send(page_body(&[1], 1)).unwrap();
            // Let the old fetch finish while the new one is still in flight.
            for _ in 0..5 {
                tokio::task::yield_now().await;
            }
            let snapshot = fetcher.snapshot().await;
            assert!(snapshot.loading);
            assert!(snapshot.result.items.is_empty());
            release_new.send(page_body(&[21], 1)).unwrap();
        };

        let _ = tokio::join!(old, new, release);
        let snapshot = fetcher.snapshot().await;
        assert!(!snapshot.loading);
        assert_eq!(snapshot.result.items[0].id, "21");
    }
}
