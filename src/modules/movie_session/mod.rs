use axum::Router;
use axum::routing::get;
use crate::state::AppState;
use axum::middleware;

pub mod dto;
pub mod handler;
pub mod model;
pub mod repository;
pub mod service;

pub fn router(state: AppState) -> axum::Router<AppState> {
    let public_routes = Router::new()
        .route("/", get(handler::list_movie_sessions))
        .route("/{id}", get(handler::get_movie_session));

    let protected_routes = Router::new()
        .route("/", axum::routing::post(handler::create_movie_session))
        .route(
            "/{id}",
            axum::routing::put(handler::update_movie_session)
                .patch(handler::update_movie_session)
                .delete(handler::delete_movie_session),
        )
        .route_layer(middleware::from_fn(crate::middleware::role::admin_guard))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth::auth_middleware
        ));

    public_routes.merge(protected_routes)
}
