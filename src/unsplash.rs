//! Unsplash API client.
//!
//! Two endpoints are used: the editorial listing (`GET /photos`, a bare
//! JSON array, no end) and search (`GET /search/photos`, an object with
//! `results` and `total_pages`). URL building and decoding are free
//! functions so they can be tested against fixtures without a server.

use bytes::Bytes;
use serde::Deserialize;

use crate::adapters::ReqwestHttpClient;
use crate::error::{ApiError, ApiResult};
use crate::models::{Photo, PhotoPage, PhotoQuery};
use crate::startup::{ApiConfig, ConfigError};
use crate::traits::{Headers, HttpClient};

pub const UNSPLASH_BASE_URL: &str = "https://api.unsplash.com";
pub const LISTING_PATH: &str = "/photos";
pub const SEARCH_PATH: &str = "/search/photos";
pub const PHOTOS_PER_PAGE: u32 = 30;

/// Build the request URL for one page of `query`.
///
/// Parameters are always emitted as `page`, `per_page`, then `query`.
pub fn build_url(base_url: &str, query: &PhotoQuery, page: u32, per_page: u32) -> String {
    let base = base_url.trim_end_matches('/');
    match query {
        PhotoQuery::Listing => {
            format!("{base}{LISTING_PATH}?page={page}&per_page={per_page}")
        }
        PhotoQuery::Search(text) => format!(
            "{base}{SEARCH_PATH}?page={page}&per_page={per_page}&query={}",
            urlencoding::encode(text)
        ),
    }
}

/// Headers sent with every API request.
pub fn auth_headers(access_key: &str) -> Headers {
    let mut headers = Headers::new();
    headers.insert(
        "Authorization".to_string(),
        format!("Client-ID {}", access_key),
    );
    headers.insert("Accept-Version".to_string(), "v1".to_string());
    headers
}

/// Decode a `/photos` body.
pub fn decode_listing(body: &[u8]) -> ApiResult<PhotoPage> {
    let photos: Vec<Photo> = serde_json::from_slice(body)?;
    Ok(PhotoPage {
        photos,
        total_pages: None,
        total: None,
    })
}

#[derive(Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    results: Option<Vec<Photo>>,
    #[serde(default)]
    total_pages: Option<u32>,
    #[serde(default)]
    total: Option<u64>,
}

/// Decode a `/search/photos` body.
pub fn decode_search(body: &[u8]) -> ApiResult<PhotoPage> {
    let envelope: SearchEnvelope = serde_json::from_slice(body)?;
    let photos = envelope.results.ok_or(ApiError::MissingField("results"))?;
    let total_pages = envelope
        .total_pages
        .ok_or(ApiError::MissingField("total_pages"))?;
    Ok(PhotoPage {
        photos,
        total_pages: Some(total_pages),
        total: envelope.total,
    })
}

/// Decode a body according to the kind of query that produced it.
pub fn decode_page(query: &PhotoQuery, body: &[u8]) -> ApiResult<PhotoPage> {
    match query {
        PhotoQuery::Listing => decode_listing(body),
        PhotoQuery::Search(_) => decode_search(body),
    }
}

/// Client for the Unsplash REST API.
///
/// Generic over the transport so tests can substitute
/// [`crate::adapters::MockHttpClient`].
#[derive(Debug, Clone)]
pub struct UnsplashClient<C = ReqwestHttpClient> {
    base_url: String,
    headers: Headers,
    per_page: u32,
    http: C,
}

impl UnsplashClient<ReqwestHttpClient> {
    /// Build a production client from configuration.
    pub fn from_config(api: &ApiConfig) -> Result<Self, ConfigError> {
        let http = ReqwestHttpClient::with_timeout(api.timeout)?;
        Self::with_http(http, api)
    }
}

impl<C: HttpClient> UnsplashClient<C> {
    /// Build a client over any transport. Fails without an access key.
    pub fn with_http(http: C, api: &ApiConfig) -> Result<Self, ConfigError> {
        let key = api.require_access_key()?;
        Ok(Self {
            base_url: api.base_url.trim_end_matches('/').to_string(),
            headers: auth_headers(key),
            per_page: api.per_page,
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    /// URL this client would request for `query` at `page`.
    pub fn page_url(&self, query: &PhotoQuery, page: u32) -> String {
        build_url(&self.base_url, query, page, self.per_page)
    }

    /// Fetch and decode one page.
    pub async fn fetch_page(&self, query: &PhotoQuery, page: u32) -> ApiResult<PhotoPage> {
        let url = self.page_url(query, page);
        tracing::debug!(%url, "requesting photos");

        let response = self.http.get(&url, &self.headers).await?;

        if !response.is_success() {
            let message = response.text_lossy();
            if response.is_client_error() {
                tracing::debug!(status = response.status, body = %message, "client error from API");
            }
            return Err(ApiError::Status {
                status: response.status,
                message,
            });
        }

        if let Some(remaining) = response.header("x-ratelimit-remaining") {
            tracing::trace!(remaining, "rate limit");
        }

        let page_data = decode_page(query, &response.body)?;
        tracing::debug!(
            page,
            count = page_data.photos.len(),
            total_pages = ?page_data.total_pages,
            "decoded photos"
        );
        Ok(page_data)
    }

    /// Fetch a page of the editorial listing.
    pub async fn fetch_listing(&self, page: u32) -> ApiResult<PhotoPage> {
        self.fetch_page(&PhotoQuery::Listing, page).await
    }

    /// Fetch a page of search results. Blank text falls back to the listing.
    pub async fn fetch_search(&self, page: u32, text: &str) -> ApiResult<PhotoPage> {
        self.fetch_page(&PhotoQuery::from_input(text), page).await
    }

    /// Download raw image bytes from the CDN. No auth header is sent.
    pub async fn fetch_image(&self, url: &str) -> ApiResult<Bytes> {
        let response = self.http.get(url, &Headers::new()).await?;
        if !response.is_success() {
            return Err(ApiError::Status {
                status: response.status,
                message: response.text_lossy(),
            });
        }
        Ok(response.body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::HttpError;

    const LISTING: &str = r#"[
        {"id":"a1","width":4000,"height":3000,
         "urls":{"small":"https://images.unsplash.com/a1?w=400","thumb":"https://images.unsplash.com/a1?w=200"},
         "user":{"name":"Ansel Adams","username":"ansel"}},
        {"id":"b2","width":3000,"height":4500,
         "urls":{"small":"https://images.unsplash.com/b2?w=400"},
         "user":{"name":"Vivian Maier"}}
    ]"#;

    const SEARCH: &str = r#"{"total":133,"total_pages":5,"results":[
        {"id":"c3","width":1200,"height":800,"urls":{"small":"https://images.unsplash.com/c3"},"user":{"name":"Fan Ho"}}
    ]}"#;

    fn api() -> ApiConfig {
        ApiConfig::default()
            .with_base_url("https://api.test")
            .with_access_key("test-key")
    }

    #[test]
    fn test_build_listing_url() {
        assert_eq!(
            build_url("https://api.unsplash.com", &PhotoQuery::Listing, 1, 30),
            "https://api.unsplash.com/photos?page=1&per_page=30"
        );
        assert_eq!(
            build_url("https://api.unsplash.com/", &PhotoQuery::Listing, 7, 10),
            "https://api.unsplash.com/photos?page=7&per_page=10"
        );
    }

    #[test]
    fn test_build_search_url_encodes_query() {
        let query = PhotoQuery::Search("new york & rain".to_string());
        assert_eq!(
            build_url("https://api.unsplash.com", &query, 2, 30),
            "https://api.unsplash.com/search/photos?page=2&per_page=30&query=new%20york%20%26%20rain"
        );
    }

    #[test]
    fn test_auth_headers() {
        let headers = auth_headers("abc");
        assert_eq!(headers.get("Authorization").unwrap(), "Client-ID abc");
        assert_eq!(headers.get("Accept-Version").unwrap(), "v1");
    }

    #[test]
    fn test_decode_listing_fixture() {
        let page = decode_listing(LISTING.as_bytes()).unwrap();
        assert_eq!(page.total_pages, None);
        assert_eq!(page.photos.len(), 2);
        assert_eq!(page.photos[0].id, "a1");
        assert_eq!(page.photos[0].width, 4000);
        assert_eq!(page.photos[0].height, 3000);
        assert_eq!(page.photos[1].display_name(), "Vivian Maier");
    }

    #[test]
    fn test_decode_search_fixture() {
        let page = decode_search(SEARCH.as_bytes()).unwrap();
        assert_eq!(page.total_pages, Some(5));
        assert_eq!(page.total, Some(133));
        assert_eq!(page.photos[0].id, "c3");
    }

    #[test]
    fn test_decode_search_missing_fields() {
        let err = decode_search(br#"{"total_pages":3}"#).unwrap_err();
        assert!(matches!(err, ApiError::MissingField("results")));

        let err = decode_search(br#"{"results":[]}"#).unwrap_err();
        assert!(matches!(err, ApiError::MissingField("total_pages")));
    }

    #[test]
    fn test_decode_wrong_shape_is_decode_error() {
        // A search envelope fed to the listing decoder.
        assert!(matches!(
            decode_listing(SEARCH.as_bytes()),
            Err(ApiError::Decode(_))
        ));
        assert!(matches!(decode_listing(b"not json"), Err(ApiError::Decode(_))));
    }

    #[test]
    fn test_client_requires_access_key() {
        let result = UnsplashClient::with_http(MockHttpClient::new(), &ApiConfig::default());
        assert!(matches!(result, Err(ConfigError::MissingAccessKey)));
    }

    #[tokio::test]
    async fn test_fetch_listing_sends_auth_and_decodes() {
        let http = MockHttpClient::new();
        http.set_response(
            "https://api.test/photos?page=1&per_page=30",
            MockResponse::json(200, LISTING),
        );
        let client = UnsplashClient::with_http(http.clone(), &api()).unwrap();

        let page = client.fetch_listing(1).await.unwrap();
        assert_eq!(page.photos.len(), 2);

        let requests = http.get_requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests[0].headers.get("Authorization").unwrap(),
            "Client-ID test-key"
        );
    }

    #[tokio::test]
    async fn test_fetch_search_with_blank_text_uses_listing() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(200, "[]"));
        let client = UnsplashClient::with_http(http.clone(), &api()).unwrap();

        let page = client.fetch_search(3, "  ").await.unwrap();
        assert!(page.photos.is_empty());
        assert_eq!(
            http.get_requests()[0].url,
            "https://api.test/photos?page=3&per_page=30"
        );
    }

    #[tokio::test]
    async fn test_fetch_page_status_error() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(403, "Rate Limit Exceeded"));
        let client = UnsplashClient::with_http(http, &api()).unwrap();

        let err = client.fetch_listing(1).await.unwrap_err();
        match err {
            ApiError::Status { status, ref message } => {
                assert_eq!(status, 403);
                assert_eq!(message, "Rate Limit Exceeded");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_fetch_page_transport_error() {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::Error(HttpError::ConnectionFailed(
            "refused".to_string(),
        )));
        let client = UnsplashClient::with_http(http, &api()).unwrap();

        let err = client
            .fetch_page(&PhotoQuery::Search("cats".into()), 1)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Http(HttpError::ConnectionFailed(_))));
    }

    #[tokio::test]
    async fn test_fetch_image_sends_no_auth() {
        let http = MockHttpClient::new();
        http.set_response(
            "https://images.unsplash.com/a1",
            MockResponse::Success(crate::traits::Response::new(200, vec![0xFF, 0xD8])),
        );
        let client = UnsplashClient::with_http(http.clone(), &api()).unwrap();

        let bytes = client
            .fetch_image("https://images.unsplash.com/a1")
            .await
            .unwrap();
        assert_eq!(&bytes[..], &[0xFF, 0xD8]);
        assert!(http.get_requests()[0].headers.is_empty());
    }
}
