use axum::middleware::from_fn_with_state;
use axum::routing::{get, post};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::models::AppState;

pub fn build_router(state: AppState) -> Router {
    // Everything behind the admin guard goes in this group.
    let admin_routes = Router::new()
        .route("/admin", get(handlers::admin::admin_dashboard))
        .route_layer(from_fn_with_state(
            state.clone(),
            handlers::middleware::admin_guard,
        ));

    Router::new()
        .route("/", get(handlers::auth::root_get))
        .route("/login", get(handlers::auth::login_get))
        .route(
            "/api/login",
            post(handlers::auth::login_post).fallback(handlers::auth::login_method_not_allowed),
        )
        .merge(admin_routes)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}
