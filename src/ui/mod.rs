//! UI rendering for the TUI application.

mod detail;
pub mod helpers;
pub mod image;
mod photo_list;
pub mod theme;

pub use detail::{render_detail, slot_shift, DETAIL_GAP};
pub use photo_list::{render_photo_list, scroll_to_selection, ROW_HEIGHT};

use ratatui::Frame;

use crate::app::{App, Screen};
use crate::traits::HttpClient;

/// Render the current screen.
pub fn render<C: HttpClient + 'static>(frame: &mut Frame, app: &mut App<C>) {
    match app.screen {
        Screen::List => render_photo_list(frame, app),
        Screen::Detail if app.detail.is_some() => render_detail(frame, app),
        Screen::Detail => render_photo_list(frame, app),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::models::{PhotoPage, PhotoQuery};
    use crate::startup::ApiConfig;
    use crate::unsplash::{decode_listing, UnsplashClient};
    use ratatui::{backend::TestBackend, Terminal};

    const LISTING: &str = r##"[
        {"id":"a","width":600,"height":400,"color":"#336699","likes":1200,
         "description":"Harbour at dawn",
         "urls":{"small":"https://images.test/a/s","thumb":"https://images.test/a/t"},
         "user":{"name":"Mira Holt"}},
        {"id":"b","width":400,"height":600,
         "urls":{"small":"https://images.test/b/s"},
         "user":{"name":"Jon Pike"}}
    ]"##;

    fn create_test_app() -> App<MockHttpClient> {
        let http = MockHttpClient::new();
        http.set_default_response(MockResponse::json(404, "{}"));
        let api = ApiConfig::default()
            .with_base_url("https://api.test")
            .with_access_key("key");
        let mut app = App::new(UnsplashClient::with_http(http, &api).unwrap());
        let request = app.feed.begin(PhotoQuery::Listing);
        let page = PhotoPage {
            total_pages: Some(1),
            ..decode_listing(LISTING.as_bytes()).unwrap()
        };
        app.feed.apply_page(&request, Ok(page));
        app
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_list_renders_rows() {
        let mut app = create_test_app();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Unsplash"));
        assert!(text.contains("Mira Holt"));
        assert!(text.contains("600 × 400"));
        assert!(text.contains("Harbour at dawn"));
        assert!(text.contains("Jon Pike"));
        assert_eq!(app.list_rows, 4);
    }

    #[tokio::test]
    async fn test_detail_renders_caption() {
        let mut app = create_test_app();
        app.open_detail();
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Mira Holt"));
        assert!(text.contains("1/2"));
    }

    #[test]
    fn test_search_prompt_shows_text() {
        let mut app = create_test_app();
        app.search.focus();
        app.search.set_text("tide");
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|f| render(f, &mut app)).unwrap();

        assert!(buffer_text(&terminal).contains("/ tide"));
    }
}
