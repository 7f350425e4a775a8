use super::dto::{
    CreateMovieSessionRequest, MovieSessionDetailResponse, MovieSessionListResponse,
    MovieSessionQuery, MovieSessionResponse, UpdateMovieSessionRequest,
};
use super::service::MovieSessionService;
use crate::common::extract::{AppJson, AppPath, AppQuery};
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::common::shape::{Action, Resource, Shape};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

/// List movie sessions, optionally filtered by actors, genres, date and movie
#[utoipa::path(
    get,
    path = "/api/v1/movie-sessions",
    params(MovieSessionQuery),
    responses(
        (status = 200, description = "List of movie sessions", body = ApiResponse<Vec<MovieSessionListResponse>>),
        (status = 400, description = "Malformed filter")
    ),
    tag = "Catalog"
)]
pub async fn list_movie_sessions(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<MovieSessionQuery>,
) -> impl IntoResponse {
    let shape = Shape::resolve(Resource::MovieSession, Action::List);

    match MovieSessionService::list(state, query, shape).await {
        Ok(sessions) => ApiSuccess(
            ApiResponse::success(sessions, "Movie sessions retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/movie-sessions",
    request_body = CreateMovieSessionRequest,
    responses(
        (status = 201, description = "Movie session created", body = ApiResponse<MovieSessionResponse>),
        (status = 400, description = "Bad Request"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Catalog",
    security(("bearer_auth" = []))
)]
pub async fn create_movie_session(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateMovieSessionRequest>,
) -> impl IntoResponse {
    let shape = Shape::resolve(Resource::MovieSession, Action::Create);

    match MovieSessionService::create(state, payload, shape).await {
        Ok(session) => ApiSuccess(
            ApiResponse::success(session, "Movie session created successfully"),
            StatusCode::CREATED,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/movie-sessions/{id}",
    params(
        ("id" = i64, Path, description = "Movie session ID")
    ),
    responses(
        (status = 200, description = "Movie session details", body = ApiResponse<MovieSessionDetailResponse>),
        (status = 404, description = "Movie session not found")
    ),
    tag = "Catalog"
)]
pub async fn get_movie_session(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> impl IntoResponse {
    let shape = Shape::resolve(Resource::MovieSession, Action::Retrieve);

    match MovieSessionService::get(state, id, shape).await {
        Ok(session) => ApiSuccess(
            ApiResponse::success(session, "Movie session retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/movie-sessions/{id}",
    params(
        ("id" = i64, Path, description = "Movie session ID")
    ),
    request_body = UpdateMovieSessionRequest,
    responses(
        (status = 200, description = "Movie session updated", body = ApiResponse<MovieSessionResponse>),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Movie session not found"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Catalog",
    security(("bearer_auth" = []))
)]
pub async fn update_movie_session(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<UpdateMovieSessionRequest>,
) -> impl IntoResponse {
    let shape = Shape::resolve(Resource::MovieSession, Action::Update);

    match MovieSessionService::update(state, id, payload, shape).await {
        Ok(session) => ApiSuccess(
            ApiResponse::success(session, "Movie session updated successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/movie-sessions/{id}",
    params(
        ("id" = i64, Path, description = "Movie session ID")
    ),
    responses(
        (status = 200, description = "Movie session deleted", body = ApiResponse<String>),
        (status = 404, description = "Movie session not found"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Catalog",
    security(("bearer_auth" = []))
)]
pub async fn delete_movie_session(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> impl IntoResponse {
    match MovieSessionService::delete(state, id).await {
        Ok(_) => ApiSuccess(
            ApiResponse::success((), "Movie session deleted successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}
