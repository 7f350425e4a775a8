use super::dto::{CreateOrderRequest, OrderCreatedResponse, OrderResponse};
use super::service::OrderService;
use crate::common::extract::{AppJson, AppQuery};
use crate::common::pagination::{Page, PageQuery};
use crate::common::response::{ApiResponse, ApiSuccess};
use crate::common::shape::{Action, Resource, Shape};
use crate::modules::auth::dto::TokenClaims;
use crate::state::AppState;
use axum::{
    extract::{Extension, State},
    http::StatusCode,
    response::IntoResponse,
};

/// List the requester's orders
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    params(PageQuery),
    responses(
        (status = 200, description = "Page of orders", body = ApiResponse<Page<OrderResponse>>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Invalid page")
    ),
    tag = "Orders",
    security(("bearer_auth" = []))
)]
pub async fn list_orders(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    AppQuery(page): AppQuery<PageQuery>,
) -> impl IntoResponse {
    let shape = Shape::resolve(Resource::Order, Action::List);
    let config = state.config.orders_page;

    match OrderService::list(state, claims.sub, page, config, shape).await {
        Ok(orders) => ApiSuccess(
            ApiResponse::success(orders, "Orders retrieved successfully"),
            StatusCode::OK,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}

/// Book tickets as a new order owned by the requester
#[utoipa::path(
    post,
    path = "/api/v1/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created", body = ApiResponse<OrderCreatedResponse>),
        (status = 400, description = "Invalid tickets"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "Seat already taken or session sold out")
    ),
    tag = "Orders",
    security(("bearer_auth" = []))
)]
pub async fn create_order(
    State(state): State<AppState>,
    Extension(claims): Extension<TokenClaims>,
    AppJson(payload): AppJson<CreateOrderRequest>,
) -> impl IntoResponse {
    let shape = Shape::resolve(Resource::Order, Action::Create);

    match OrderService::create(state, claims.sub, payload, shape).await {
        Ok(order) => ApiSuccess(
            ApiResponse::success(order, "Order created successfully"),
            StatusCode::CREATED,
        )
        .into_response(),
        Err(e) => e.into_response(),
    }
}
