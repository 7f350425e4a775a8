use super::dto::{CreateCinemaHallRequest, CinemaHallResponse, UpdateCinemaHallRequest};
use super::service::CinemaHallService;
use crate::common::extract::{AppJson, AppPath};
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};

/// List all cinema halls
#[utoipa::path(
    get,
    path = "/api/v1/cinema-halls",
    responses(
        (status = 200, description = "List of cinema halls", body = ApiResponse<Vec<CinemaHallResponse>>)
    ),
    tag = "Catalog"
)]
pub async fn list_cinema_halls(State(state): State<AppState>) -> impl IntoResponse {
    match CinemaHallService::find_all(state).await {
        Ok(halls) => ApiSuccess(
            ApiResponse::success(halls, "Cinema halls retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Create a new cinema hall
#[utoipa::path(
    post,
    path = "/api/v1/cinema-halls",
    request_body = CreateCinemaHallRequest,
    responses(
        (status = 201, description = "Cinema hall created", body = ApiResponse<CinemaHallResponse>),
        (status = 400, description = "Bad Request"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Catalog",
    security(("bearer_auth" = []))
)]
pub async fn create_cinema_hall(
    State(state): State<AppState>,
    AppJson(payload): AppJson<CreateCinemaHallRequest>,
) -> impl IntoResponse {
    match CinemaHallService::create(state, payload).await {
        Ok(hall) => ApiSuccess(
            ApiResponse::success(hall, "Cinema hall created successfully"),
            StatusCode::CREATED,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Get cinema hall by ID
#[utoipa::path(
    get,
    path = "/api/v1/cinema-halls/{id}",
    params(
        ("id" = i64, Path, description = "Cinema hall ID")
    ),
    responses(
        (status = 200, description = "Cinema hall details", body = ApiResponse<CinemaHallResponse>),
        (status = 404, description = "Cinema hall not found")
    ),
    tag = "Catalog"
)]
pub async fn get_cinema_hall(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> impl IntoResponse {
    match CinemaHallService::find_by_id(state, id).await {
        Ok(hall) => ApiSuccess(
            ApiResponse::success(hall, "Cinema hall retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Update cinema hall
#[utoipa::path(
    put,
    path = "/api/v1/cinema-halls/{id}",
    params(
        ("id" = i64, Path, description = "Cinema hall ID")
    ),
    request_body = UpdateCinemaHallRequest,
    responses(
        (status = 200, description = "Cinema hall updated", body = ApiResponse<CinemaHallResponse>),
        (status = 400, description = "Bad Request"),
        (status = 404, description = "Cinema hall not found"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Catalog",
    security(("bearer_auth" = []))
)]
pub async fn update_cinema_hall(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
    AppJson(payload): AppJson<UpdateCinemaHallRequest>,
) -> impl IntoResponse {
    match CinemaHallService::update(state, id, payload).await {
        Ok(hall) => ApiSuccess(
            ApiResponse::success(hall, "Cinema hall updated successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Delete cinema hall
#[utoipa::path(
    delete,
    path = "/api/v1/cinema-halls/{id}",
    params(
        ("id" = i64, Path, description = "Cinema hall ID")
    ),
    responses(
        (status = 200, description = "Cinema hall deleted", body = ApiResponse<String>),
        (status = 404, description = "Cinema hall not found"),
        (status = 403, description = "Forbidden")
    ),
    tag = "Catalog",
    security(("bearer_auth" = []))
)]
pub async fn delete_cinema_hall(
    State(state): State<AppState>,
    AppPath(id): AppPath<i64>,
) -> impl IntoResponse {
    match CinemaHallService::delete(state, id).await {
        Ok(_) => ApiSuccess(
            ApiResponse::success((), "Cinema hall deleted successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}
