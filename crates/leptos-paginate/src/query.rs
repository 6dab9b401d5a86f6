//! Generic paginated query.

use std::sync::Arc;

use futures::future::LocalBoxFuture;
use futures::FutureExt;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// One fetched page of a list.
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_pages: u32,
}

type Fetcher<T> = Arc<dyn Fn(u32) -> LocalBoxFuture<'static, Result<Page<T>, String>> + Send + Sync>;
type Publisher<T> = Arc<dyn Fn(Vec<T>) + Send + Sync>;

/// Drives fetch/publish/page-tracking for one paginated list view.
///
/// The fetcher is called with the requested page number; on success the
/// items are handed to the publisher (replacing the previous page —
/// pages are never accumulated), then the page count and current page
/// advance. The page indicator therefore never runs ahead of the data
/// it labels.
///
/// Requests are single-flight: while one is in flight, further requests
/// are rejected rather than raced. Out-of-range requests are no-ops.
/// Re-requesting the current page still fetches.
pub struct PagedQuery<T: 'static> {
    current_page: RwSignal<u32>,
    page_count: RwSignal<u32>,
    in_flight: RwSignal<bool>,
    fetch: Fetcher<T>,
    publish: Publisher<T>,
}

impl<T: 'static> Clone for PagedQuery<T> {
    fn clone(&self) -> Self {
        Self {
            current_page: self.current_page,
            page_count: self.page_count,
            in_flight: self.in_flight,
            fetch: Arc::clone(&self.fetch),
            publish: Arc::clone(&self.publish),
        }
    }
}

impl<T: 'static> PagedQuery<T> {
    pub fn new<F, Fut, P>(fetch: F, publish: P) -> Self
    where
        F: Fn(u32) -> Fut + Send + Sync + 'static,
        Fut: std::future::Future<Output = Result<Page<T>, String>> + 'static,
        P: Fn(Vec<T>) + Send + Sync + 'static,
    {
        Self {
            current_page: RwSignal::new(1),
            page_count: RwSignal::new(1),
            in_flight: RwSignal::new(false),
            fetch: Arc::new(move |page| fetch(page).boxed_local()),
            publish: Arc::new(publish),
        }
    }

    pub fn current_page(&self) -> ReadSignal<u32> {
        self.current_page.read_only()
    }

    pub fn page_count(&self) -> ReadSignal<u32> {
        self.page_count.read_only()
    }

    pub fn in_flight(&self) -> ReadSignal<bool> {
        self.in_flight.read_only()
    }

    /// Fetch and publish page `page`.
    ///
    /// Returns `true` when a page was fetched and published. Requests
    /// outside `[1, page_count]`, requests while another is in flight,
    /// and fetch failures leave the published items and the current
    /// page untouched and return `false`.
    pub async fn load(&self, page: u32) -> bool {
        if page < 1 || page > self.page_count.get_untracked() {
            return false;
        }
        if self.in_flight.get_untracked() {
            return false;
        }
        self.in_flight.set(true);
        let result = (self.fetch)(page).await;
        let loaded = match result {
            Ok(fetched) => {
                (self.publish)(fetched.items);
                self.page_count.set(fetched.total_pages.max(1));
                self.current_page.set(page);
                true
            }
            Err(err) => {
                log::warn!("page {page} fetch failed: {err}");
                false
            }
        };
        self.in_flight.set(false);
        loaded
    }

    /// Spawn a [`load`](Self::load) from an event handler.
    pub fn request(&self, page: u32) {
        if self.in_flight.get_untracked() {
            return;
        }
        let this = self.clone();
        spawn_local(async move {
            this.load(page).await;
        });
    }

    /// Discard the known page range and fetch page 1 again.
    ///
    /// Used when a filter, sort order, or search term changes: the list
    /// state is reset rather than reconciled across orderings.
    pub fn request_reset(&self) {
        if self.in_flight.get_untracked() {
            return;
        }
        self.page_count.set(1);
        self.current_page.set(1);
        self.request(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    fn counting_query(
        total_pages: u32,
    ) -> (PagedQuery<u32>, Arc<Mutex<Vec<String>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let fetch_events = Arc::clone(&events);
        let publish_events = Arc::clone(&events);
        let query = PagedQuery::new(
            move |page| {
                fetch_events.lock().unwrap().push(format!("fetch:{page}"));
                async move {
                    Ok(Page {
                        items: vec![page * 10, page * 10 + 1],
                        total_pages,
                    })
                }
            },
            move |items: Vec<u32>| {
                publish_events
                    .lock()
                    .unwrap()
                    .push(format!("publish:{}", items.len()));
            },
        );
        (query, events)
    }

    #[test]
    fn load_fetches_publishes_then_advances() {
        let owner = Owner::new();
        owner.set();

        let (query, events) = counting_query(3);
        assert!(block_on(query.load(1)));
        assert_eq!(
            *events.lock().unwrap(),
            vec!["fetch:1".to_string(), "publish:2".to_string()]
        );
        assert_eq!(query.current_page().get_untracked(), 1);
        assert_eq!(query.page_count().get_untracked(), 3);

        assert!(block_on(query.load(3)));
        assert_eq!(query.current_page().get_untracked(), 3);
    }

    #[test]
    fn out_of_range_is_a_no_op() {
        let owner = Owner::new();
        owner.set();

        let (query, events) = counting_query(3);
        assert!(block_on(query.load(1)));
        events.lock().unwrap().clear();

        assert!(!block_on(query.load(0)));
        assert!(!block_on(query.load(4)));
        assert!(events.lock().unwrap().is_empty());
        assert_eq!(query.current_page().get_untracked(), 1);
    }

    #[test]
    fn requesting_the_current_page_still_fetches() {
        let owner = Owner::new();
        owner.set();

        let (query, events) = counting_query(2);
        assert!(block_on(query.load(1)));
        assert!(block_on(query.load(1)));
        let fetches = events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.starts_with("fetch"))
            .count();
        assert_eq!(fetches, 2);
    }

    #[test]
    fn fetch_failure_leaves_state_untouched() {
        let owner = Owner::new();
        owner.set();

        let calls = Arc::new(AtomicU32::new(0));
        let publishes = Arc::new(AtomicU32::new(0));
        let fetch_calls = Arc::clone(&calls);
        let publish_calls = Arc::clone(&publishes);
        let query: PagedQuery<u32> = PagedQuery::new(
            move |page| {
                let n = fetch_calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if n == 0 {
                        Ok(Page { items: vec![page], total_pages: 5 })
                    } else {
                        Err("boom".to_string())
                    }
                }
            },
            move |_| {
                publish_calls.fetch_add(1, Ordering::SeqCst);
            },
        );

        assert!(block_on(query.load(1)));
        assert!(!block_on(query.load(2)));
        assert_eq!(query.current_page().get_untracked(), 1);
        assert_eq!(query.page_count().get_untracked(), 5);
        assert_eq!(publishes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn in_flight_requests_are_single_flight() {
        let owner = Owner::new();
        owner.set();

        let (tx, rx) = oneshot::channel::<()>();
        let gate = Arc::new(Mutex::new(Some(rx)));
        let calls = Arc::new(AtomicU32::new(0));
        let fetch_calls = Arc::clone(&calls);
        let query: PagedQuery<u32> = PagedQuery::new(
            move |page| {
                fetch_calls.fetch_add(1, Ordering::SeqCst);
                let gate = Arc::clone(&gate);
                async move {
                    let rx = gate.lock().unwrap().take();
                    if let Some(rx) = rx {
                        let _ = rx.await;
                    }
                    Ok(Page { items: vec![page], total_pages: 2 })
                }
            },
            |_| {},
        );

        block_on(async {
            let first = query.load(1);
            futures::pin_mut!(first);
            assert!(futures::poll!(first.as_mut()).is_pending());
            assert!(query.in_flight().get_untracked());

            // Second request is rejected without touching the fetcher.
            assert!(!query.load(1).await);
            assert_eq!(calls.load(Ordering::SeqCst), 1);

            tx.send(()).unwrap();
            assert!(first.await);
            assert!(!query.in_flight().get_untracked());
        });
    }
}
