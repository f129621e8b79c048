use std::path::Path;
use std::sync::Arc;
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, TraceLayer};
use crate::config::{Config, Page};
use crate::handlers::location_handler::location_handler;
use crate::handlers::location_logger::LocationLogger;
use crate::handlers::page_handler::page_handler;
use crate::handlers::validator::{AcceptAll, CoordinateValidator, RangeValidator};

#[derive(Clone)]
pub struct AppState {
    pub logger: Arc<LocationLogger>,
    pub validator: Arc<dyn CoordinateValidator>,
    pub page: Page,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        let validator: Arc<dyn CoordinateValidator> = if config.validate_coordinates {
            Arc::new(RangeValidator)
        } else {
            Arc::new(AcceptAll)
        };

        Self {
            logger: Arc::new(LocationLogger::to_file(&config.locations_file)),
            validator,
            page: config.page,
        }
    }
}

pub fn app(state: AppState, static_dir: Option<&Path>) -> Router {
    let router = Router::new()
        .route("/", get(page_handler))
        .route("/location", get(location_handler));

    let router = match static_dir {
        Some(dir) => router.nest_service("/static", ServeDir::new(dir)),
        None => router,
    };

    router
        // logging so we can see whats going on
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .with_state(state)
}
