use std::collections::{BTreeMap, HashMap, HashSet};

use super::dto::{
    CreateOrderRequest, OrderCreatedResponse, OrderResponse, OrderView, TicketRequest,
    TicketResponse, TicketSessionResponse, TicketWriteResponse,
};
use super::model::{LockedSession, Order, OrderTicketRow, TakenSeat, Ticket};
use super::repository::OrderRepository;
use crate::common::error::{field_error, is_unique_violation, AppError, AppResult};
use crate::common::pagination::{Page, PageConfig, PageQuery};
use crate::common::shape::Shape;
use crate::modules::cinema_hall::model::capacity;
use crate::modules::movie_session::model::tickets_available;
use crate::state::AppState;
use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;
use validator::{Validate, ValidationErrors};

const ORDERS_PATH: &str = "/api/v1/orders";

pub struct OrderService;

impl OrderService {
    /// Orders owned by `user_id`, newest first.
    pub async fn list(
        state: AppState,
        user_id: Uuid,
        query: PageQuery,
        config: PageConfig,
        shape: Shape,
    ) -> AppResult<Page<OrderView>> {
        let request = query.resolve(config)?;

        let count = OrderRepository::count_for_user(&state.db, user_id).await?;
        let count = u64::try_from(count).unwrap_or_default();
        request.ensure_in_range(count)?;

        let orders = OrderRepository::page_for_user(&state.db, user_id, request.limit(), request.offset()).await?;
        let views = Self::present(&state.db, orders, shape).await?;

        Ok(Page::new(views, count, request, ORDERS_PATH))
    }

    /// Books every ticket of `req` for `user_id` in one transaction.
    pub async fn create(
        state: AppState,
        user_id: Uuid,
        req: CreateOrderRequest,
        shape: Shape,
    ) -> AppResult<OrderView> {
        req.validate()?;

        let mut session_ids: Vec<i64> = req.tickets.iter().map(|t| t.movie_session).collect();
        session_ids.sort_unstable();
        session_ids.dedup();

        let mut tx = state.db.begin().await?;

        let sessions: HashMap<i64, LockedSession> = OrderRepository::lock_sessions(&mut tx, &session_ids)
            .await?
            .into_iter()
            .map(|s| (s.id, s))
            .collect();
        validate_seats(&req.tickets, &sessions)?;

        let sold: HashMap<i64, i64> = OrderRepository::sold_counts(&mut tx, &session_ids)
            .await?
            .into_iter()
            .collect();

        let (ticket_sessions, rows, seats) = columns(&req.tickets);

        let taken = OrderRepository::taken_among(&mut tx, &ticket_sessions, &rows, &seats).await?;
        if let Some(seat) = taken.first() {
            warn!(user_id = %user_id, session_id = seat.movie_session_id, "seat already taken");
            return Err(taken_conflict(seat));
        }
        check_capacity(&req.tickets, &sessions, &sold)?;

        let order = OrderRepository::create(&mut tx, user_id).await?;
        let tickets = OrderRepository::insert_tickets(&mut tx, order.id, &ticket_sessions, &rows, &seats)
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    AppError::Conflict("One of the requested seats has just been taken".to_string())
                } else {
                    e.into()
                }
            })?;

        tx.commit().await?;
        info!(order_id = order.id, user_id = %user_id, tickets = req.tickets.len(), "order created");

        if shape == Shape::Write {
            return Ok(OrderView::Write(write(order, tickets)));
        }

        Self::present(&state.db, vec![order], shape)
            .await?
            .pop()
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("order vanished while rendering")))
    }

    async fn present(pool: &PgPool, orders: Vec<Order>, shape: Shape) -> AppResult<Vec<OrderView>> {
        let ids: Vec<i64> = orders.iter().map(|o| o.id).collect();

        let mut tickets: HashMap<i64, Vec<OrderTicketRow>> = HashMap::new();
        for row in OrderRepository::tickets_for(pool, &ids).await? {
            tickets.entry(row.order_id).or_default().push(row);
        }

        Ok(orders
            .into_iter()
            .map(|order| {
                let rows = tickets.remove(&order.id).unwrap_or_default();
                match shape {
                    Shape::Write => OrderView::Write(write(order, rows)),
                    _ => OrderView::Detail(detail(order, rows)),
                }
            })
            .collect())
    }
}

/// Checks that every ticket points at a locked session and lies inside its hall,
/// and that no seat is requested twice.
pub fn validate_seats(
    tickets: &[TicketRequest],
    sessions: &HashMap<i64, LockedSession>,
) -> Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::new();
    let mut seen = HashSet::new();

    for (index, ticket) in tickets.iter().enumerate() {
        let Some(session) = sessions.get(&ticket.movie_session) else {
            errors.add(
                "movie_session",
                field_error(
                    "does_not_exist",
                    format!("Ticket {}: movie session {} does not exist", index, ticket.movie_session),
                ),
            );
            continue;
        };

        if !(1..=session.rows).contains(&ticket.row) {
            errors.add(
                "row",
                field_error(
                    "range",
                    format!("Ticket {}: row must be in range 1..={}, got {}", index, session.rows, ticket.row),
                ),
            );
        }
        if !(1..=session.seats_in_row).contains(&ticket.seat) {
            errors.add(
                "seat",
                field_error(
                    "range",
                    format!(
                        "Ticket {}: seat must be in range 1..={}, got {}",
                        index, session.seats_in_row, ticket.seat
                    ),
                ),
            );
        }

        if !seen.insert((ticket.movie_session, ticket.row, ticket.seat)) {
            errors.add(
                "tickets",
                field_error(
                    "duplicate",
                    format!("Ticket {}: row {} seat {} is requested twice", index, ticket.row, ticket.seat),
                ),
            );
        }
    }

    if errors.errors().is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Rejects the order when any session would sell more seats than its hall holds.
pub fn check_capacity(
    tickets: &[TicketRequest],
    sessions: &HashMap<i64, LockedSession>,
    sold: &HashMap<i64, i64>,
) -> AppResult<()> {
    let mut requested: BTreeMap<i64, i64> = BTreeMap::new();
    for ticket in tickets {
        *requested.entry(ticket.movie_session).or_default() += 1;
    }

    for (session_id, wanted) in requested {
        let Some(session) = sessions.get(&session_id) else {
            continue;
        };
        let sold = sold.get(&session_id).copied().unwrap_or(0);
        let available = tickets_available(session.rows, session.seats_in_row, sold);

        if wanted > available {
            return Err(AppError::Conflict(format!(
                "Movie session {} has {} tickets available, {} requested",
                session_id, available, wanted
            )));
        }
    }
    Ok(())
}

fn columns(tickets: &[TicketRequest]) -> (Vec<i64>, Vec<i32>, Vec<i32>) {
    let mut sessions = Vec::with_capacity(tickets.len());
    let mut rows = Vec::with_capacity(tickets.len());
    let mut seats = Vec::with_capacity(tickets.len());
    for ticket in tickets {
        sessions.push(ticket.movie_session);
        rows.push(ticket.row);
        seats.push(ticket.seat);
    }
    (sessions, rows, seats)
}

fn taken_conflict(seat: &TakenSeat) -> AppError {
    AppError::Conflict(format!(
        "Row {} seat {} of movie session {} is already taken",
        seat.row, seat.seat, seat.movie_session_id
    ))
}

fn detail(order: Order, rows: Vec<OrderTicketRow>) -> OrderResponse {
    OrderResponse {
        id: order.id,
        created_at: order.created_at,
        tickets: rows
            .into_iter()
            .map(|t| TicketResponse {
                id: t.id,
                row: t.row,
                seat: t.seat,
                movie_session: TicketSessionResponse {
                    id: t.movie_session_id,
                    show_time: t.show_time,
                    cinema_hall_capacity: capacity(t.rows, t.seats_in_row),
                    movie_title: t.movie_title,
                    cinema_hall_name: t.cinema_hall_name,
                },
            })
            .collect(),
    }
}

fn write<T: Into<TicketWriteResponse>>(order: Order, tickets: Vec<T>) -> OrderCreatedResponse {
    OrderCreatedResponse {
        id: order.id,
        created_at: order.created_at,
        tickets: tickets.into_iter().map(Into::into).collect(),
    }
}

impl From<Ticket> for TicketWriteResponse {
    fn from(t: Ticket) -> Self {
        Self {
            id: t.id,
            row: t.row,
            seat: t.seat,
            movie_session: t.movie_session_id,
        }
    }
}

impl From<OrderTicketRow> for TicketWriteResponse {
    fn from(t: OrderTicketRow) -> Self {
        Self {
            id: t.id,
            row: t.row,
            seat: t.seat,
            movie_session: t.movie_session_id,
        }
    }
}
