use axum::extract::State;
use axum::response::Html;
use crate::app::AppState;
use crate::config::Page;

const SURPRISE_PAGE: &str = include_str!("../../assets/surprise.html");
const GAME_PAGE: &str = include_str!("../../assets/game.html");

pub fn document(page: Page) -> &'static str {
    match page {
        Page::Surprise => SURPRISE_PAGE,
        Page::Game => GAME_PAGE,
    }
}

pub async fn page_handler(State(state): State<AppState>) -> Html<&'static str> {
    Html(document(state.page))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use axum::body::Body;
    use axum::http::{header, Request, StatusCode};
    use tower::ServiceExt;
    use crate::app::app;
    use crate::handlers::location_logger::LocationLogger;
    use crate::handlers::validator::AcceptAll;
    use super::*;

    async fn fetch_root(page: Page) -> (StatusCode, String, String) {
        let state = AppState {
            logger: Arc::new(LocationLogger::to_file("unused.txt")),
            validator: Arc::new(AcceptAll),
            page,
        };
        let response = app(state, None)
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap().to_string();
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        (status, content_type, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn serves_surprise_page() {
        let (status, content_type, body) = fetch_root(Page::Surprise).await;
        assert_eq!(status, StatusCode::OK);
        assert!(content_type.starts_with("text/html"));
        assert!(body.contains("Friendly Surprise"));
        assert!(body.contains("/location?lat="));
    }

    #[test]
    fn each_page_has_its_own_document() {
        assert_ne!(document(Page::Surprise), document(Page::Game));
        assert!(document(Page::Game).contains("Start game"));
    }

    #[tokio::test]
    async fn serves_game_page() {
        let (status, _, body) = fetch_root(Page::Game).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("id=\"target\""));
        assert!(body.contains("/location?lat="));
    }
}
