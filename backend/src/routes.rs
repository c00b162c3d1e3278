use axum::{
    http::Method,
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{docs::ApiDoc, handlers, middleware, state::AppState};

/// Builds the full application: webhook and system routes, API docs, and the
/// shared CORS/trace/request-id layers.
pub fn build_router(state: AppState) -> Router {
    let webhook_routes = Router::new()
        .route(
            "/webhook/datetime/current",
            get(handlers::current_datetime).post(handlers::current_datetime),
        )
        .route(
            "/webhook/datetime/business-info",
            get(handlers::business_info).post(handlers::business_info),
        )
        .route("/webhook/datetime/relative", post(handlers::relative_time));

    let system_routes = Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/test", get(handlers::smoke_test));

    Router::new()
        .merge(webhook_routes)
        .merge(system_routes)
        .with_state(state)
        .merge(SwaggerUi::new("/api/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(axum_middleware::from_fn(middleware::log_error_responses))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn(middleware::request_id))
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                        .allow_headers(Any)
                        .max_age(Duration::from_secs(24 * 60 * 60)),
                ),
        )
}
