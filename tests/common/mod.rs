//! Common test utilities for integration tests.
//!
//! Fixtures build Unsplash JSON payloads; [`mock_client`] and
//! [`wiremock_client`] build clients over the in-memory mock or a real
//! HTTP server.

#![allow(dead_code)]

use serde_json::{json, Value};
use unsplash_tui::adapters::mock::{MockHttpClient, MockResponse};
use unsplash_tui::adapters::ReqwestHttpClient;
use unsplash_tui::startup::ApiConfig;
use unsplash_tui::unsplash::UnsplashClient;

pub const TEST_KEY: &str = "test-access-key";

/// One photo object as the API returns it.
pub fn photo_json(id: &str) -> Value {
    json!({
        "id": id,
        "width": 4000,
        "height": 3000,
        "color": "#a0b0c0",
        "likes": 42,
        "description": format!("Photo {id}"),
        "alt_description": null,
        "urls": {
            "raw": format!("https://images.test/{id}/raw"),
            "full": format!("https://images.test/{id}/full"),
            "regular": format!("https://images.test/{id}/regular"),
            "small": format!("https://images.test/{id}/small"),
            "thumb": format!("https://images.test/{id}/thumb")
        },
        "user": { "name": format!("Author {id}"), "username": id }
    })
}

/// A `/photos` body with `count` photos named `<prefix>0..`.
pub fn listing_json(prefix: &str, count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| photo_json(&format!("{prefix}{i}")))
            .collect(),
    )
}

/// A `/search/photos` body.
pub fn search_json(prefix: &str, count: usize, total_pages: u32) -> Value {
    json!({
        "total": u64::from(total_pages) * count as u64,
        "total_pages": total_pages,
        "results": listing_json(prefix, count)
    })
}

pub fn test_api_config(base_url: &str) -> ApiConfig {
    ApiConfig::default()
        .with_base_url(base_url)
        .with_access_key(TEST_KEY)
}

/// Client over the in-memory mock; unknown URLs answer 404.
pub fn mock_client() -> (UnsplashClient<MockHttpClient>, MockHttpClient) {
    let http = MockHttpClient::new();
    http.set_default_response(MockResponse::json(404, r#"{"errors":["Not found"]}"#));
    let client = UnsplashClient::with_http(http.clone(), &test_api_config("https://api.test"))
        .expect("client");
    (client, http)
}

/// Client talking to a wiremock server.
pub fn wiremock_client(uri: &str) -> UnsplashClient<ReqwestHttpClient> {
    UnsplashClient::from_config(&test_api_config(uri)).expect("client")
}

/// A tiny PNG for image endpoints.
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([10, 200, 30]));
    let mut out = std::io::Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).expect("encode png");
    out.into_inner()
}
