use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TicketRequest {
    pub movie_session: i64,
    pub row: i32,
    pub seat: i32,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateOrderRequest {
    #[validate(length(min = 1, message = "An order needs at least one ticket"))]
    pub tickets: Vec<TicketRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TicketSessionResponse {
    pub id: i64,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub show_time: OffsetDateTime,
    pub movie_title: String,
    pub cinema_hall_name: String,
    pub cinema_hall_capacity: i64,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TicketResponse {
    pub id: i64,
    pub row: i32,
    pub seat: i32,
    pub movie_session: TicketSessionResponse,
}

/// Detail shape: tickets with their session, movie and hall.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: i64,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    pub tickets: Vec<TicketResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct TicketWriteResponse {
    pub id: i64,
    pub row: i32,
    pub seat: i32,
    pub movie_session: i64,
}

/// Write shape: tickets reference their session by id.
#[derive(Debug, Serialize, ToSchema)]
pub struct OrderCreatedResponse {
    pub id: i64,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub created_at: OffsetDateTime,
    pub tickets: Vec<TicketWriteResponse>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum OrderView {
    Detail(OrderResponse),
    Write(OrderCreatedResponse),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_is_not_part_of_the_payload() {
        let req: CreateOrderRequest = serde_json::from_str(
            r#"{"user": "3f2504e0-4f89-11d3-9a0c-0305e82c3301", "tickets": [{"movie_session": 1, "row": 2, "seat": 3}]}"#,
        )
        .unwrap();
        assert_eq!(req.tickets.len(), 1);
        assert!(req.validate().is_ok());
    }

    #[test]
    fn empty_orders_are_invalid() {
        let req: CreateOrderRequest = serde_json::from_str(r#"{"tickets": []}"#).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("tickets"));
    }

    #[test]
    fn ticket_list_errors_carry_the_message() {
        let req = CreateOrderRequest { tickets: vec![] };
        let errors = req.validate().unwrap_err();

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["tickets"][0]["code"], "length");
        assert_eq!(json["tickets"][0]["message"], "An order needs at least one ticket");
    }
}
