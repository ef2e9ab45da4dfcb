//! Draining of cursor-paginated endpoints.
//!
//! The backend only serves bounded pages; this module reconstructs the full
//! logical collection from them. The loop is intentionally sequential: page
//! N+1 is not requested until page N has arrived, which preserves the
//! server-declared ordering and lets the first failure abandon the whole
//! drain before anything is exposed.

use std::future::Future;

use serde::Deserialize;
use tracing::debug;

use super::error::ApiError;

/// Safety ceiling on the number of pages a single drain will request.
/// A server that never sets `last` would otherwise keep the loop alive
/// forever.
pub const MAX_PAGES: u32 = 1_000;

/// One page of a paginated collection, as served by the backend.
///
/// Concatenating `content` across pages `0..total_pages` in ascending page
/// order yields the full collection with no duplicates and no gaps, as long
/// as the server-side sort key is stable across calls.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_pages: u32,
    pub last: bool,
}

/// Drain a paginated endpoint into one in-order sequence.
///
/// `fetch_page` is called as `(page_index, page_size)` starting at page 0,
/// and the loop stops as soon as a page reports `last == true`. No page is
/// fetched twice. If any fetch fails, everything accumulated so far is
/// discarded and the failure is returned — callers never observe a partial
/// collection.
pub async fn drain_all<T, F, Fut>(mut fetch_page: F, page_size: u32) -> Result<Vec<T>, ApiError>
where
    F: FnMut(u32, u32) -> Fut,
    Fut: Future<Output = Result<Page<T>, ApiError>>,
{
    let mut all = Vec::new();
    let mut page = 0u32;

    loop {
        let fetched = fetch_page(page, page_size).await?;
        let last = fetched.last;
        debug!(page, items = fetched.content.len(), last, "fetched page");

        all.extend(fetched.content);

        if last {
            return Ok(all);
        }

        page += 1;
        if page >= MAX_PAGES {
            return Err(ApiError::PageLimit { pages: MAX_PAGES });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Fetcher serving fixed chunks, with `last` set on the final one.
    fn chunked_fetcher(
        chunks: Vec<Vec<u32>>,
        calls: Arc<AtomicU32>,
    ) -> impl FnMut(u32, u32) -> std::pin::Pin<Box<dyn Future<Output = Result<Page<u32>, ApiError>>>>
    {
        move |page, _size| {
            calls.fetch_add(1, Ordering::SeqCst);
            let chunks = chunks.clone();
            Box::pin(async move {
                let idx = page as usize;
                Ok(Page {
                    content: chunks[idx].clone(),
                    total_pages: chunks.len() as u32,
                    last: idx == chunks.len() - 1,
                })
            })
        }
    }

    #[tokio::test]
    async fn concatenates_pages_in_order() {
        let calls = Arc::new(AtomicU32::new(0));
        let chunks = vec![vec![1, 2], vec![3], vec![4, 5, 6]];

        let all = drain_all(chunked_fetcher(chunks, calls.clone()), 50)
            .await
            .unwrap();

        assert_eq!(all, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn stops_at_last_flag() {
        let calls = Arc::new(AtomicU32::new(0));
        let chunks = vec![vec![10]];

        let all = drain_all(chunked_fetcher(chunks, calls.clone()), 50)
            .await
            .unwrap();

        assert_eq!(all, vec![10]);
        // Exactly one call: never issues a request after seeing last == true.
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn empty_collection_is_a_single_empty_page() {
        let calls = Arc::new(AtomicU32::new(0));
        let chunks: Vec<Vec<u32>> = vec![vec![]];

        let all = drain_all(chunked_fetcher(chunks, calls.clone()), 50)
            .await
            .unwrap();

        assert!(all.is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failure_discards_accumulator() {
        let calls = Arc::new(AtomicU32::new(0));
        let calls_in_fetch = calls.clone();

        let result = drain_all(
            move |page, _size| {
                calls_in_fetch.fetch_add(1, Ordering::SeqCst);
                async move {
                    if page == 1 {
                        return Err(ApiError::Api {
                            status: 500,
                            message: "boom".into(),
                        });
                    }
                    Ok(Page {
                        content: vec![1u32, 2],
                        total_pages: 3,
                        last: false,
                    })
                }
            },
            50,
        )
        .await;

        assert!(matches!(result, Err(ApiError::Api { status: 500, .. })));
        // The failing page was the second and final call.
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn runaway_server_hits_page_limit() {
        let result = drain_all(
            |_page, _size| async move {
                Ok(Page {
                    content: vec![0u32],
                    total_pages: u32::MAX,
                    last: false,
                })
            },
            50,
        )
        .await;

        assert!(matches!(
            result,
            Err(ApiError::PageLimit { pages: MAX_PAGES })
        ));
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Arbitrary split of a collection into 1..6 pages of 0..5 items.
    fn page_chunks() -> impl Strategy<Value = Vec<Vec<u32>>> {
        proptest::collection::vec(proptest::collection::vec(0u32..1000, 0..5), 1..6)
    }

    proptest! {
        /// drain_all returns exactly the concatenation of every page's
        /// content, in page order.
        #[test]
        fn drains_concat_of_all_pages(chunks in page_chunks()) {
            let expected: Vec<u32> = chunks.iter().flatten().copied().collect();
            let total = chunks.len();

            let result = futures::executor::block_on(drain_all(
                |page, _size| {
                    let chunks = chunks.clone();
                    async move {
                        let idx = page as usize;
                        Ok(Page {
                            content: chunks[idx].clone(),
                            total_pages: total as u32,
                            last: idx == total - 1,
                        })
                    }
                },
                10,
            ))
            .unwrap();

            prop_assert_eq!(result, expected);
        }

        /// A failure on page k always surfaces as that failure.
        #[test]
        fn failure_on_any_page_surfaces(chunks in page_chunks(), k in 0usize..6) {
            prop_assume!(k < chunks.len());
            let total = chunks.len();

            let result = futures::executor::block_on(drain_all(
                |page, _size| {
                    let chunks = chunks.clone();
                    async move {
                        let idx = page as usize;
                        if idx == k {
                            return Err(ApiError::Api { status: 503, message: String::new() });
                        }
                        Ok(Page {
                            content: chunks[idx].clone(),
                            total_pages: total as u32,
                            last: idx == total - 1,
                        })
                    }
                },
                10,
            ));

            let is_503 = matches!(result, Err(ApiError::Api { status: 503, .. }));
            prop_assert!(is_503);
        }
    }
}
