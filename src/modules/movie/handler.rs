use super::dto::{
    CreateMovieRequest, MovieDetailResponse, MovieListResponse, MovieQuery, MovieResponse,
    UpdateMovieRequest,
};
use super::service::MovieService;
use crate::common::extract::{AppJson, AppPath, AppQuery};
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::common::shape::{Action, Resource, Shape};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

/// List movies, optionally filtered by actors, genres and title
#[utoipa::path(
    get,
    path = "/api/v1/movies",
    params(MovieQuery),
    responses(
        (status = 200, description = "List of movies", body = ApiResponse<Vec<MovieListResponse>>),
        (status = 400, description = "Malformed filter")
    ),
    tag = "Catalog"
)]
pub async fn list_movies(
    State(state): State<AppState>,
    AppQuery(query): AppQuery<MovieQuery>,
) -> impl IntoResponse {
    let shape = Shape::resolve(Resource::Movie, Action::List);

    match MovieService::list(state, query, shape).await {
        Ok(movies) => ApiSuccess(
            ApiResponse::success(movies, "Movies retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    post,
    path = "/api/v1/movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 201, description = "Movie created", body = ApiResponse<MovieResponse>),
        (status = 400, description = "Bad Request"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Catalog",
    security(("bearer_auth" = []))
)]
pub async fn create_movie(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateMovieRequest>,
) -> impl IntoResponse {
    let shape = Shape::resolve(Resource::Movie, Action::Create);

    match MovieService::create(state, payload, shape).await {
        Ok(movie) => ApiSuccess(
            ApiResponse::success(movie, "Movie created successfully"),
            StatusCode::CREATED,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie details", body = ApiResponse<MovieDetailResponse>),
        (status = 404, description = "Movie not found")
    ),
    tag = "Catalog"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> impl IntoResponse {
    let shape = Shape::resolve(Resource::Movie, Action::Retrieve);

    match MovieService::get(state, id, shape).await {
        Ok(movie) => ApiSuccess(
            ApiResponse::success(movie, "Movie retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    put,
    path = "/api/v1/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    request_body = UpdateMovieRequest,
    responses(
        (status = 200, description = "Movie updated", body = ApiResponse<MovieResponse>),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Movie not found"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Catalog",
    security(("bearer_auth" = []))
)]
pub async fn update_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<UpdateMovieRequest>,
) -> impl IntoResponse {
    let shape = Shape::resolve(Resource::Movie, Action::Update);

    match MovieService::update(state, id, payload, shape).await {
        Ok(movie) => ApiSuccess(
            ApiResponse::success(movie, "Movie updated successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/movies/{id}",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie deleted", body = ApiResponse<String>),
        (status = 404, description = "Movie not found"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Catalog",
    security(("bearer_auth" = []))
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> impl IntoResponse {
    match MovieService::delete(state, id).await {
        Ok(_) => ApiSuccess(
            ApiResponse::success((), "Movie deleted successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}
