use axum::{Router, response::Json, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

pub mod config;
pub mod error;
pub mod handlers;
pub mod models;

use handlers::{ApiDoc, AppState, pizza_router, restaurant_pizza_router, restaurant_router};

pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(restaurant_router())
        .merge(pizza_router())
        .merge(restaurant_pizza_router())
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(ApiDoc::openapi()) }),
        )
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
