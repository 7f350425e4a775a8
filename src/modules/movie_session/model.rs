use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use utoipa::ToSchema;

use crate::modules::cinema_hall::model::{capacity, CinemaHall};

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct MovieSession {
    pub id: i64,
    #[serde(with = "time::serde::rfc3339")]
    pub show_time: OffsetDateTime,
    pub movie_id: i64,
    pub cinema_hall_id: i64,
}

/// A session joined with its movie and hall plus the live seat count.
#[derive(Debug, FromRow, Clone)]
pub struct MovieSessionRow {
    pub id: i64,
    pub show_time: OffsetDateTime,
    pub movie_id: i64,
    pub movie_title: String,
    pub cinema_hall_id: i64,
    pub cinema_hall_name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub tickets_available: i64,
}

impl MovieSessionRow {
    pub fn cinema_hall(&self) -> CinemaHall {
        CinemaHall {
            id: self.cinema_hall_id,
            name: self.cinema_hall_name.clone(),
            rows: self.rows,
            seats_in_row: self.seats_in_row,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, FromRow, Clone, Copy, PartialEq, Eq, Hash, ToSchema)]
pub struct TakenPlace {
    pub row: i32,
    pub seat: i32,
}

/// Seats left in a hall of `rows` x `seats_in_row` after `sold` tickets.
pub fn tickets_available(rows: i32, seats_in_row: i32, sold: i64) -> i64 {
    (capacity(rows, seats_in_row) - sold).max(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn available_is_capacity_minus_sold() {
        assert_eq!(tickets_available(10, 20, 3), 197);
        assert_eq!(tickets_available(10, 20, 0), 200);
        assert_eq!(tickets_available(10, 20, 200), 0);
    }

    #[test]
    fn available_never_goes_negative() {
        assert_eq!(tickets_available(2, 2, 5), 0);
    }
}
