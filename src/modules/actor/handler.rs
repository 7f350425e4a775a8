use super::dto::{CreateActorRequest, ActorResponse, UpdateActorRequest};
use super::service::ActorService;
use crate::common::extract::{AppJson, AppPath};
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

/// List all actors
#[utoipa::path(
    get,
    path = "/api/v1/actors",
    responses(
        (status = 200, description = "List of actors", body = ApiResponse<Vec<ActorResponse>>)
    ),
    tag = "Catalog"
)]
pub async fn list_actors(State(state): State<AppState>) -> impl IntoResponse {
    match ActorService::find_all(state).await {
        Ok(actors) => ApiSuccess(
            ApiResponse::success(actors, "Actors retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new actor
#[utoipa::path(
    post,
    path = "/api/v1/actors",
    request_body = CreateActorRequest,
    responses(
        (status = 201, description = "Actor created", body = ApiResponse<ActorResponse>),
        (status = 400, description = "Bad Request"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Catalog",
    security(("bearer_auth" = []))
)]
pub async fn create_actor(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateActorRequest>,
) -> impl IntoResponse {
    match ActorService::create(state, payload).await {
        Ok(actor) => ApiSuccess(
            ApiResponse::success(actor, "Actor created successfully"),
            StatusCode::CREATED,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get actor by ID
#[utoipa::path(
    get,
    path = "/api/v1/actors/{id}",
    params(
        ("id" = i64, Path, description = "Actor ID")
    ),
    responses(
        (status = 200, description = "Actor details", body = ApiResponse<ActorResponse>),
        (status = 404, description = "Actor not found")
    ),
    tag = "Catalog"
)]
pub async fn get_actor(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> impl IntoResponse {
    match ActorService::find_by_id(state, id).await {
        Ok(actor) => ApiSuccess(
            ApiResponse::success(actor, "Actor retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update actor
#[utoipa::path(
    put,
    path = "/api/v1/actors/{id}",
    params(
        ("id" = i64, Path, description = "Actor ID")
    ),
    request_body = UpdateActorRequest,
    responses(
        (status = 200, description = "Actor updated", body = ApiResponse<ActorResponse>),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Actor not found"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Catalog",
    security(("bearer_auth" = []))
)]
pub async fn update_actor(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<UpdateActorRequest>,
) -> impl IntoResponse {
    match ActorService::update(state, id, payload).await {
        Ok(actor) => ApiSuccess(
            ApiResponse::success(actor, "Actor updated successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete actor
#[utoipa::path(
    delete,
    path = "/api/v1/actors/{id}",
    params(
        ("id" = i64, Path, description = "Actor ID")
    ),
    responses(
        (status = 200, description = "Actor deleted", body = ApiResponse<String>),
        (status = 404, description = "Actor not found"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Catalog",
    security(("bearer_auth" = []))
)]
pub async fn delete_actor(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> impl IntoResponse {
    match ActorService::delete(state, id).await {
        Ok(_) => ApiSuccess(
            ApiResponse::success((), "Actor deleted successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}
