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
        .route("/", get(handler::list_movies))
        .route("/{id}", get(handler::get_movie));

    let protected_routes = Router::new()
        .route("/", axum::routing::post(handler::create_movie))
        .route(
            "/{id}",
            axum::routing::put(handler::update_movie)
                .patch(handler::update_movie)
                .delete(handler::delete_movie),
        )
        .route_layer(middleware::from_fn(crate::middleware::role::admin_guard))
        .route_layer(middleware::from_fn_with_state(
            state,
            crate::middleware::auth::auth_middleware
        ));

    public_routes.merge(protected_routes)
}
