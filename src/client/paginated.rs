//! Paginated stream for lazy iteration over API results.
//!
//! This module provides a [`PaginatedStream`] that implements the `Stream` trait,
//! turning a list endpoint that spans several pages into one lazy sequence of
//! typed items. The next page is requested only once every record of the
//! current page has been handed out.

use std::collections::{HashSet, VecDeque};
use std::future::Future;
use std::marker::PhantomData;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_util::{Stream, TryStreamExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::page::{query_pairs, Cursor, Page, DEFAULT_ITEM_KEY};
use super::ClientInner;
use crate::{Error, Result};

/// Query parameter used to echo a token cursor back to the server.
pub const DEFAULT_CURSOR_PARAM: &str = "cursor";

/// Which page a fetch should retrieve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageRequest {
    /// The first page, built from the listing URL and its query parameters.
    First,
    /// A page the server pointed to.
    Next(Cursor),
}

/// Future resolving to one decoded page.
pub type PageFuture = Pin<Box<dyn Future<Output = Result<Page>> + Send + 'static>>;

type FetchPage = Box<dyn Fn(PageRequest) -> PageFuture + Send + Sync>;

/// A stream that lazily fetches pages from a paginated API endpoint.
///
/// Items come out in server order. The stream ends after the last page, or
/// right after yielding the first error: a failed fetch, a malformed page or
/// a record that does not decode into `T`. Items yielded before an error
/// stay valid.
///
/// A stream is not restartable; build a new one to list again.
///
/// # Example
///
/// ```no_run
/// use futures_util::StreamExt;
/// use webex_rs::api::PeopleQuery;
///
/// # async fn example(client: webex_rs::WebexClient) -> webex_rs::Result<()> {
/// let mut people = client.people().list(PeopleQuery::default());
///
/// while let Some(result) = people.next().await {
///     let person = result?;
///     println!("{:?}", person.display_name);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PaginatedStream<T> {
    /// Function to fetch a page.
    fetch_page: FetchPage,
    /// Field of the page body holding the records.
    item_key: String,
    /// Records of the current page not yet handed out.
    current_items: VecDeque<Value>,
    /// Next page to fetch, None once exhausted.
    next_request: Option<PageRequest>,
    /// Cursors already requested, to stop on a server cycle.
    seen_cursors: HashSet<Cursor>,
    /// Current in-flight fetch future.
    pending_fetch: Option<PageFuture>,
    /// Number of records handed out so far.
    yielded: usize,
    /// Total reported by the server, if any.
    total_hint: Option<u64>,
    pages_fetched: usize,
    _marker: PhantomData<fn() -> T>,
}

impl<T> PaginatedStream<T>
where
    T: DeserializeOwned,
{
    /// Create a new paginated stream.
    ///
    /// `fetch_page` is called once per page; the first call receives
    /// [`PageRequest::First`].
    pub fn new<F>(item_key: impl Into<String>, fetch_page: F) -> Self
    where
        F: Fn(PageRequest) -> PageFuture + Send + Sync + 'static,
    {
        Self {
            fetch_page: Box::new(fetch_page),
            item_key: item_key.into(),
            current_items: VecDeque::new(),
            next_request: Some(PageRequest::First),
            seen_cursors: HashSet::new(),
            pending_fetch: None,
            yielded: 0,
            total_hint: None,
            pages_fetched: 0,
            _marker: PhantomData,
        }
    }

    /// Drain the stream into a vector, stopping at the first error.
    pub async fn collect_vec(self) -> Result<Vec<T>> {
        self.try_collect().await
    }

    /// Number of pages fetched so far.
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Total number of records reported by the server, if any.
    pub fn total_hint(&self) -> Option<u64> {
        self.total_hint
    }

    fn finish(&mut self) {
        self.current_items.clear();
        self.next_request = None;
        self.pending_fetch = None;
    }

    fn accept_page(&mut self, page: Page) {
        self.pages_fetched += 1;
        if self.total_hint.is_none() {
            self.total_hint = page.total;
        }

        tracing::trace!(
            item_key = %self.item_key,
            page = self.pages_fetched,
            records = page.items.len(),
            has_next = page.next.is_some(),
            "Decoded page"
        );

        self.next_request = match page.next {
            Some(next) if self.seen_cursors.contains(&next) => {
                tracing::warn!(cursor = next.as_str(), "Server repeated a cursor; stopping");
                None
            }
            Some(next) => Some(PageRequest::Next(next)),
            None => None,
        };
        self.current_items = page.items.into();
    }
}

impl<T> Stream for PaginatedStream<T>
where
    T: DeserializeOwned,
{
    type Item = Result<T>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = &mut *self;

        loop {
            // Never hand out more records than the server said exist
            if this
                .total_hint
                .is_some_and(|total| this.yielded as u64 >= total)
            {
                this.finish();
                return Poll::Ready(None);
            }

            if let Some(raw) = this.current_items.pop_front() {
                let index = this.yielded;
                this.yielded += 1;
                return match serde_json::from_value::<T>(raw) {
                    Ok(item) => Poll::Ready(Some(Ok(item))),
                    Err(source) => {
                        this.finish();
                        Poll::Ready(Some(Err(Error::ItemValidation {
                            item_key: this.item_key.clone(),
                            index,
                            source,
                        })))
                    }
                };
            }

            if let Some(fut) = this.pending_fetch.as_mut() {
                match fut.as_mut().poll(cx) {
                    Poll::Ready(Ok(page)) => {
                        this.pending_fetch = None;
                        this.accept_page(page);
                        continue;
                    }
                    Poll::Ready(Err(e)) => {
                        this.finish();
                        return Poll::Ready(Some(Err(e)));
                    }
                    Poll::Pending => return Poll::Pending,
                }
            }

            if let Some(request) = this.next_request.take() {
                if let PageRequest::Next(cursor) = &request {
                    this.seen_cursors.insert(cursor.clone());
                }
                this.pending_fetch = Some((this.fetch_page)(request));
                continue;
            }

            return Poll::Ready(None);
        }
    }
}

impl<T> std::fmt::Debug for PaginatedStream<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginatedStream")
            .field("item_key", &self.item_key)
            .field("buffered", &self.current_items.len())
            .field("yielded", &self.yielded)
            .field("pages_fetched", &self.pages_fetched)
            .finish()
    }
}

/// Builder for creating paginated streams against the Webex API.
///
/// Obtained from [`WebexClient::paginate`](crate::WebexClient::paginate) or
/// from the service methods that list resources.
pub struct PaginatedStreamBuilder<T> {
    inner: Arc<ClientInner>,
    url: String,
    item_key: String,
    query: Vec<(String, String)>,
    cursor_field: Option<String>,
    cursor_param: String,
    _marker: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned + 'static> PaginatedStreamBuilder<T> {
    /// Create a new builder for a path or absolute URL.
    pub(crate) fn new(inner: Arc<ClientInner>, url: impl Into<String>) -> Self {
        Self {
            inner,
            url: url.into(),
            item_key: DEFAULT_ITEM_KEY.to_string(),
            query: Vec::new(),
            cursor_field: None,
            cursor_param: DEFAULT_CURSOR_PARAM.to_string(),
            _marker: PhantomData,
        }
    }

    /// Set the field of the page body holding the records.
    pub fn item_key(mut self, item_key: impl Into<String>) -> Self {
        self.item_key = item_key.into();
        self
    }

    /// Add query parameters to the first request.
    ///
    /// Later pages are fetched from the server's cursor alone.
    pub fn query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Result<Self> {
        self.query.extend(query_pairs(query)?);
        Ok(self)
    }

    /// Add a single query parameter to the first request.
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Read the next-page cursor from this body field when the response
    /// carries no `Link` header. Accepts a key or a JSON pointer.
    pub fn cursor_field(mut self, field: impl Into<String>) -> Self {
        self.cursor_field = Some(field.into());
        self
    }

    /// Query parameter used to send a token cursor back.
    pub fn cursor_param(mut self, param: impl Into<String>) -> Self {
        self.cursor_param = param.into();
        self
    }

    /// Add query parameters and build the stream in one step.
    ///
    /// A query that cannot be flattened into parameters surfaces as the
    /// stream's first and only item.
    pub fn build_with_query<Q: Serialize + ?Sized>(self, query: &Q) -> PaginatedStream<T> {
        match query_pairs(query) {
            Ok(pairs) => {
                let mut builder = self;
                builder.query.extend(pairs);
                builder.build()
            }
            Err(err) => {
                let err = std::sync::Mutex::new(Some(err));
                PaginatedStream::new(self.item_key, move |_| {
                    let err = err
                        .lock()
                        .ok()
                        .and_then(|mut slot| slot.take())
                        .unwrap_or_else(|| Error::InvalidInput("invalid query".to_string()));
                    Box::pin(async move { Err(err) }) as PageFuture
                })
            }
        }
    }

    /// Build the stream. Nothing is fetched until it is polled.
    pub fn build(self) -> PaginatedStream<T> {
        let Self {
            inner,
            url,
            item_key,
            query,
            cursor_field,
            cursor_param,
            ..
        } = self;

        let url: Arc<str> = Arc::from(url);
        let query = Arc::new(query);
        let decode_key: Arc<str> = Arc::from(item_key.as_str());
        let cursor_field: Option<Arc<str>> = cursor_field.map(Arc::from);
        let cursor_param: Arc<str> = Arc::from(cursor_param);

        PaginatedStream::new(item_key, move |request: PageRequest| {
            let inner = inner.clone();
            let url = url.clone();
            let query = query.clone();
            let decode_key = decode_key.clone();
            let cursor_field = cursor_field.clone();
            let cursor_param = cursor_param.clone();

            Box::pin(async move {
                let (target, params) = match request {
                    PageRequest::First => (url.to_string(), (*query).clone()),
                    PageRequest::Next(Cursor::Url(next)) => (next, Vec::new()),
                    PageRequest::Next(Cursor::Token(token)) => {
                        (url.to_string(), vec![(cursor_param.to_string(), token)])
                    }
                };

                let (body, headers) = inner.get_page(&target, &params).await?;
                Page::decode(body, &headers, &decode_key, cursor_field.as_deref())
            }) as PageFuture
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::StreamExt;
    use serde::Deserialize;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Item {
        id: String,
    }

    /// Serve canned pages and record every request made.
    fn canned(
        pages: Vec<Result<Page>>,
    ) -> (
        impl Fn(PageRequest) -> PageFuture + Send + Sync + 'static,
        Arc<Mutex<Vec<PageRequest>>>,
    ) {
        let pages = Arc::new(Mutex::new(VecDeque::from(pages)));
        let log = Arc::new(Mutex::new(Vec::new()));
        let seen = log.clone();
        let fetch = move |request: PageRequest| {
            seen.lock().unwrap().push(request);
            let next = pages
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(Error::Config("no more canned pages".into())));
            Box::pin(async move { next }) as PageFuture
        };
        (fetch, log)
    }

    fn page(ids: &[&str], next: Option<&str>) -> Result<Page> {
        Ok(Page::new(
            ids.iter().map(|id| json!({ "id": id })).collect(),
            next.map(Cursor::new),
        ))
    }

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[tokio::test]
    async fn test_two_pages_in_order() {
        let (fetch, log) = canned(vec![page(&["A", "B"], Some("C2")), page(&["C"], None)]);
        let stream = PaginatedStream::<Item>::new("items", fetch);

        let items = stream.collect_vec().await.unwrap();
        assert_eq!(ids(&items), vec!["A", "B", "C"]);

        let log = log.lock().unwrap();
        assert_eq!(
            *log,
            vec![
                PageRequest::First,
                PageRequest::Next(Cursor::Token("C2".into()))
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_listing() {
        let (fetch, log) = canned(vec![page(&[], None)]);
        let items = PaginatedStream::<Item>::new("items", fetch)
            .collect_vec()
            .await
            .unwrap();
        assert!(items.is_empty());
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_empty_trailing_page() {
        let (fetch, _) = canned(vec![page(&["A"], Some("p2")), page(&[], None)]);
        let items = PaginatedStream::<Item>::new("items", fetch)
            .collect_vec()
            .await
            .unwrap();
        assert_eq!(ids(&items), vec!["A"]);
    }

    #[tokio::test]
    async fn test_empty_middle_page_is_followed() {
        let (fetch, _) = canned(vec![
            page(&["A"], Some("p2")),
            page(&[], Some("p3")),
            page(&["B"], None),
        ]);
        let items = PaginatedStream::<Item>::new("items", fetch)
            .collect_vec()
            .await
            .unwrap();
        assert_eq!(ids(&items), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_lazy_fetching() {
        let (fetch, log) = canned(vec![page(&["A", "B"], Some("p2")), page(&["C"], None)]);
        let mut stream = PaginatedStream::<Item>::new("items", fetch);
        assert!(log.lock().unwrap().is_empty());

        assert_eq!(stream.next().await.unwrap().unwrap().id, "A");
        assert_eq!(log.lock().unwrap().len(), 1);
        assert_eq!(stream.next().await.unwrap().unwrap().id, "B");
        assert_eq!(log.lock().unwrap().len(), 1);
        assert_eq!(stream.next().await.unwrap().unwrap().id, "C");
        assert_eq!(log.lock().unwrap().len(), 2);
        assert!(stream.next().await.is_none());
        assert_eq!(stream.pages_fetched(), 2);
    }

    #[tokio::test]
    async fn test_validation_failure_mid_stream() {
        let (fetch, _) = canned(vec![Ok(Page::new(
            vec![json!({ "id": "A" }), json!({ "id": "B" }), json!({ "name": "no id" })],
            None,
        ))]);
        let mut stream = PaginatedStream::<Item>::new("items", fetch);

        assert_eq!(stream.next().await.unwrap().unwrap().id, "A");
        assert_eq!(stream.next().await.unwrap().unwrap().id, "B");
        match stream.next().await {
            Some(Err(Error::ItemValidation { index, item_key, .. })) => {
                assert_eq!(index, 2);
                assert_eq!(item_key, "items");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_fetch_error_ends_stream() {
        let (fetch, log) = canned(vec![
            page(&["A"], Some("p2")),
            Err(Error::Forbidden("missing scope".into())),
            page(&["never"], None),
        ]);
        let mut stream = PaginatedStream::<Item>::new("items", fetch);

        assert_eq!(stream.next().await.unwrap().unwrap().id, "A");
        assert!(matches!(stream.next().await, Some(Err(Error::Forbidden(_)))));
        assert!(stream.next().await.is_none());
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_total_hint_caps_items() {
        let mut first = Page::new(vec![json!({ "id": "A" }), json!({ "id": "B" })], None);
        first.next = Some(Cursor::new("p2"));
        first.total = Some(3);
        let (fetch, log) = canned(vec![Ok(first), page(&["C", "D"], Some("p3"))]);

        let stream = PaginatedStream::<Item>::new("items", fetch);
        let items = stream.collect_vec().await.unwrap();
        assert_eq!(ids(&items), vec!["A", "B", "C"]);
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_repeated_cursor_stops() {
        let (fetch, log) = canned(vec![page(&["A"], Some("same")), page(&["B"], Some("same"))]);
        let items = PaginatedStream::<Item>::new("items", fetch)
            .collect_vec()
            .await
            .unwrap();
        assert_eq!(ids(&items), vec!["A", "B"]);
        assert_eq!(log.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_cursor_cycle_stops() {
        let (fetch, log) = canned(vec![
            page(&["A"], Some("p2")),
            page(&["B"], Some("p3")),
            page(&["C"], Some("p2")),
            page(&["never"], None),
        ]);
        let items = PaginatedStream::<Item>::new("items", fetch)
            .collect_vec()
            .await
            .unwrap();
        assert_eq!(ids(&items), vec!["A", "B", "C"]);
        assert_eq!(log.lock().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_independent_invocations_match() {
        let run = || async {
            let (fetch, _) = canned(vec![page(&["A", "B"], Some("p2")), page(&["C"], None)]);
            PaginatedStream::<Item>::new("items", fetch)
                .collect_vec()
                .await
                .unwrap()
        };
        assert_eq!(run().await, run().await);
    }

    #[tokio::test]
    async fn test_unflattenable_query_is_first_item() {
        let client = crate::WebexClient::new("token").unwrap();
        let mut stream = client
            .paginate::<Item>("/people")
            .build_with_query(&json!({ "filter": { "nested": true } }));

        assert!(matches!(
            stream.next().await,
            Some(Err(Error::InvalidInput(_)))
        ));
        assert!(stream.next().await.is_none());
    }
}
