//! Paginated listing walk.

use futures::stream::{self, Stream};
use onsale_types::{Category, Content};
use thiserror::Error;

use crate::client::{FetchError, SaleClient};
use crate::decode::{DecodeError, decode_listing};
use crate::url::listing_url;

/// One fetched listing page and its position in the walk.
#[derive(Debug, Clone)]
pub struct ListingPage {
    /// 1-based page number that was fetched.
    pub page: u32,
    /// Decoded page record.
    pub content: Content,
    /// Whether the walk should stop after this page.
    ///
    /// A page is assumed last when it carried fewer items than a full
    /// page would. The endpoint has no explicit end-of-results marker, so
    /// a full-size final page is only detected one (empty) page later.
    pub is_last: bool,
}

impl ListingPage {
    /// Creates a new listing page.
    #[must_use]
    pub const fn new(page: u32, content: Content, is_last: bool) -> Self {
        Self {
            page,
            content,
            is_last,
        }
    }

    /// Returns the number of items the page reported.
    #[must_use]
    pub const fn num_items(&self) -> u32 {
        self.content.num_items
    }

    /// Consumes the page, returning its decoded content.
    #[must_use]
    pub fn into_content(self) -> Content {
        self.content
    }
}

/// Errors raised while walking listing pages.
#[derive(Error, Debug)]
pub enum ListingError {
    /// The page could not be fetched.
    #[error("failed to fetch {category} page {page}")]
    Fetch {
        /// Category being walked.
        category: Category,
        /// 1-based page number.
        page: u32,
        /// Underlying fetch failure.
        #[source]
        source: FetchError,
    },

    /// The page body was not a valid listing record.
    #[error("failed to decode {category} page {page}")]
    Decode {
        /// Category being walked.
        category: Category,
        /// 1-based page number.
        page: u32,
        /// Raw body that failed to decode, kept for diagnosis.
        body: String,
        /// Underlying decode failure.
        #[source]
        source: DecodeError,
    },
}

/// Fetches and decodes one listing page for a category.
///
/// `is_last` is set when the page carried fewer items than the configured
/// page size, which ends a walk.
///
/// # Errors
///
/// Returns an error if the page cannot be fetched or decoded; the error
/// carries the category and page for diagnosis, and the raw body on
/// decode failures. Nothing is produced for a failed page.
pub async fn fetch_listing(
    client: &SaleClient,
    category: Category,
    page: u32,
) -> Result<ListingPage, ListingError> {
    let url = listing_url(&client.config().base_url, category, page);

    let body = client
        .fetch(&url)
        .await
        .map_err(|source| ListingError::Fetch {
            category,
            page,
            source,
        })?;

    let content = decode_listing(&body).map_err(|source| ListingError::Decode {
        category,
        page,
        body: String::from_utf8_lossy(&body).into_owned(),
        source,
    })?;

    let is_last = content.num_items < client.config().page_size;
    Ok(ListingPage::new(page, content, is_last))
}

/// Fetches one listing page of the `games` category.
///
/// # Errors
///
/// Returns an error if the page cannot be fetched or decoded.
pub async fn games_listing(client: &SaleClient, page: u32) -> Result<ListingPage, ListingError> {
    fetch_listing(client, Category::Games, page).await
}

/// Creates a lazy stream of listing pages for the given category.
///
/// Pages are fetched strictly one at a time in increasing order starting
/// at `start_page`; the next page is only requested once the current one
/// proved non-last. The stream ends after the first page that carried
/// fewer items than a full page, or at the first error.
///
/// Content already yielded stays with the caller when a later page fails.
pub fn sale_stream<'a>(
    client: &'a SaleClient,
    category: Category,
    start_page: u32,
) -> impl Stream<Item = Result<Content, ListingError>> + 'a {
    stream::try_unfold(Some(start_page), move |state| async move {
        let Some(page) = state else {
            return Ok(None);
        };

        let listing = fetch_listing(client, category, page).await?;
        let next = if listing.is_last { None } else { Some(page + 1) };
        Ok(Some((listing.into_content(), next)))
    })
}

/// Walks every listing page for a category and returns them in fetch order.
///
/// # Errors
///
/// Returns an error if any page fails; the walk stops at the failing page.
/// Callers that want the pages collected before the failure should consume
/// [`sale_stream`] instead.
pub async fn collect_sales(
    client: &SaleClient,
    category: Category,
    start_page: u32,
) -> Result<Vec<Content>, ListingError> {
    let mut pages = Vec::new();
    let mut page = start_page;

    loop {
        let listing = fetch_listing(client, category, page).await?;
        let is_last = listing.is_last;
        pages.push(listing.into_content());

        if is_last {
            return Ok(pages);
        }
        page += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::ClientConfig;
    use futures::StreamExt;
    use std::time::Duration;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_client(server: &MockServer) -> SaleClient {
        SaleClient::new(ClientConfig {
            base_url: server.uri(),
            retry_delay: Duration::from_millis(20),
            ..ClientConfig::default()
        })
        .unwrap()
    }

    async fn mount_listing(server: &MockServer, page: u32, num_items: u32) {
        Mock::given(method("GET"))
            .and(path("/games/on-sale"))
            .and(query_param("format", "json"))
            .and(query_param("page", page.to_string()))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "num_items": num_items,
                "content": format!("<div data-page=\"{page}\"></div>"),
                "page": page,
            })))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_fetch_listing_flags_short_page_as_last() {
        let server = MockServer::start().await;
        mount_listing(&server, 1, 36).await;
        mount_listing(&server, 2, 36).await;
        mount_listing(&server, 3, 20).await;

        let client = test_client(&server);

        let first = fetch_listing(&client, Category::Games, 1).await.unwrap();
        let second = fetch_listing(&client, Category::Games, 2).await.unwrap();
        let third = fetch_listing(&client, Category::Games, 3).await.unwrap();

        assert!(!first.is_last);
        assert!(!second.is_last);
        assert!(third.is_last);
        assert_eq!(third.num_items(), 20);
    }

    #[tokio::test]
    async fn test_collect_sales_stops_after_short_page() {
        let server = MockServer::start().await;
        mount_listing(&server, 1, 36).await;
        mount_listing(&server, 2, 36).await;
        mount_listing(&server, 3, 20).await;

        let client = test_client(&server);
        let pages = collect_sales(&client, Category::Games, 1).await.unwrap();

        let counts: Vec<u32> = pages.iter().map(|c| c.num_items).collect();
        assert_eq!(counts, [36, 36, 20]);
        assert_eq!(pages[0].page, Some(1));
        assert_eq!(pages[2].page, Some(3));
    }

    #[tokio::test]
    async fn test_sale_stream_yields_pages_in_order_then_ends() {
        let server = MockServer::start().await;
        mount_listing(&server, 1, 36).await;
        mount_listing(&server, 2, 12).await;

        let client = test_client(&server);
        let mut stream = std::pin::pin!(sale_stream(&client, Category::Games, 1));

        let first = stream.next().await.unwrap().unwrap();
        let second = stream.next().await.unwrap().unwrap();

        assert_eq!(first.page, Some(1));
        assert_eq!(second.page, Some(2));
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_sale_stream_starts_at_requested_page() {
        let server = MockServer::start().await;
        mount_listing(&server, 4, 7).await;

        let client = test_client(&server);
        let mut stream = std::pin::pin!(sale_stream(&client, Category::Games, 4));

        let only = stream.next().await.unwrap().unwrap();
        assert_eq!(only.page, Some(4));
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn test_decode_error_carries_context_and_raw_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/games/on-sale"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = fetch_listing(&client, Category::Games, 1).await.unwrap_err();

        match err {
            ListingError::Decode {
                category,
                page,
                body,
                ..
            } => {
                assert_eq!(category, Category::Games);
                assert_eq!(page, 1);
                assert_eq!(body, "<html>maintenance</html>");
            }
            other => panic!("expected Decode, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_error_carries_page_context() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/games/on-sale"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = test_client(&server);
        let err = fetch_listing(&client, Category::Games, 7).await.unwrap_err();

        match err {
            ListingError::Fetch { page, source, .. } => {
                assert_eq!(page, 7);
                assert!(matches!(
                    source,
                    FetchError::UnexpectedStatus { status: 404, .. }
                ));
            }
            other => panic!("expected Fetch, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_games_listing_binds_games_category() {
        let server = MockServer::start().await;
        mount_listing(&server, 1, 3).await;

        let client = test_client(&server);
        let listing = games_listing(&client, 1).await.unwrap();

        assert!(listing.is_last);
        assert_eq!(listing.num_items(), 3);
    }
}
