use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::cinema_hall::model::CinemaHall;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCinemaHallRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: String,
    #[validate(range(min = 1, message = "Hall must have at least one row"))]
    pub rows: i32,
    #[validate(range(min = 1, message = "Row must have at least one seat"))]
    pub seats_in_row: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCinemaHallRequest {
    #[validate(length(min = 1, max = 255, message = "Name must be 1-255 characters"))]
    pub name: Option<String>,
    #[validate(range(min = 1, message = "Hall must have at least one row"))]
    pub rows: Option<i32>,
    #[validate(range(min = 1, message = "Row must have at least one seat"))]
    pub seats_in_row: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CinemaHallResponse {
    pub id: i64,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub capacity: i64,
}

impl From<CinemaHall> for CinemaHallResponse {
    fn from(hall: CinemaHall) -> Self {
        Self {
            capacity: hall.capacity(),
            id: hall.id,
            name: hall.name,
            rows: hall.rows,
            seats_in_row: hall.seats_in_row,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacity_is_rows_times_seats() {
        let response = CinemaHallResponse::from(CinemaHall {
            id: 1,
            name: "Blue".into(),
            rows: 10,
            seats_in_row: 20,
        });
        assert_eq!(response.capacity, 200);
    }

    #[test]
    fn rejects_empty_halls() {
        let req = CreateCinemaHallRequest {
            name: "Red".into(),
            rows: 0,
            seats_in_row: 12,
        };
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("rows"));
        assert!(!errors.field_errors().contains_key("seats_in_row"));
    }
}
