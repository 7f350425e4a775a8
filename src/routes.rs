use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use crate::docs::ApiDoc;
use axum::Router;
use crate::state::AppState;

use tower_http::cors::{Any, CorsLayer};

pub fn configure_routes(state: AppState) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/api/v1", api_routes())
        .nest("/api/v1/genres", crate::modules::genre::router(state.clone()))
        .nest("/api/v1/actors", crate::modules::actor::router(state.clone()))
        .nest("/api/v1/cinema-halls", crate::modules::cinema_hall::router(state.clone()))
        .nest("/api/v1/movies", crate::modules::movie::router(state.clone()))
        .nest("/api/v1/movie-sessions", crate::modules::movie_session::router(state.clone()))
        .nest("/api/v1/orders", crate::modules::order::router(state))
        .layer(cors)
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", axum::routing::get(|| async { "ok" }))
}
