use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Order {
    pub id: i64,
    pub user_id: Uuid,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Ticket {
    pub id: i64,
    pub movie_session_id: i64,
    pub order_id: i64,
    pub row: i32,
    pub seat: i32,
}

/// A ticket joined with its session, movie and hall.
#[derive(Debug, FromRow, Clone)]
pub struct OrderTicketRow {
    pub id: i64,
    pub order_id: i64,
    pub row: i32,
    pub seat: i32,
    pub movie_session_id: i64,
    pub show_time: OffsetDateTime,
    pub movie_title: String,
    pub cinema_hall_name: String,
    pub rows: i32,
    pub seats_in_row: i32,
}

/// Hall dimensions of a session row held under `FOR UPDATE`.
#[derive(Debug, FromRow, Clone, Copy, PartialEq, Eq)]
pub struct LockedSession {
    pub id: i64,
    pub rows: i32,
    pub seats_in_row: i32,
}

#[derive(Debug, FromRow, Clone, Copy, PartialEq, Eq)]
pub struct TakenSeat {
    pub movie_session_id: i64,
    pub row: i32,
    pub seat: i32,
}
