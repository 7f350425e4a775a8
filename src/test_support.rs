use axum::{body::Body, response::Response};
use jsonwebtoken::{encode, get_current_timestamp, EncodingKey, Header};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::common::pagination::PageConfig;
use crate::config::settings::AppConfig;
use crate::modules::auth::dto::TokenClaims;
use crate::state::AppState;

pub const TEST_SECRET: &str = "test-secret";

pub fn test_config() -> AppConfig {
    AppConfig {
        server_port: 0,
        database_url: "postgres://postgres@localhost/cinema_test".to_string(),
        database_max_connections: 5,
        jwt_secret: TEST_SECRET.to_string(),
        orders_page: PageConfig::default(),
    }
}

/// State whose pool never connects until a query runs.
pub fn lazy_state() -> AppState {
    let config = test_config();
    let pool = PgPoolOptions::new()
        .connect_lazy(&config.database_url)
        .expect("valid database url");
    AppState::new(config, pool)
}

pub fn state_with(pool: PgPool) -> AppState {
    AppState::new(test_config(), pool)
}

pub fn bearer(user_id: Uuid, role: &str) -> String {
    let now = get_current_timestamp() as usize;
    let claims = TokenClaims {
        sub: user_id,
        role: role.to_string(),
        iat: now,
        exp: now + 15 * 60,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_SECRET.as_bytes()),
    )
    .expect("token encodes");
    format!("Bearer {}", token)
}

pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("json body")
}

pub fn json_body(value: serde_json::Value) -> Body {
    Body::from(value.to_string())
}

pub struct SeededSession {
    pub movie_id: i64,
    pub hall_id: i64,
    pub session_id: i64,
}

pub async fn seed_session(pool: &PgPool, rows: i32, seats_in_row: i32, show_time: OffsetDateTime) -> SeededSession {
    let hall_id: i64 = sqlx::query_scalar(
        "INSERT INTO cinema_halls (name, rows, seats_in_row) VALUES ('Blue', $1, $2) RETURNING id",
    )
    .bind(rows)
    .bind(seats_in_row)
    .fetch_one(pool)
    .await
    .expect("hall inserted");

    let movie_id: i64 = sqlx::query_scalar(
        "INSERT INTO movies (title, description, duration) VALUES ('Interstellar', '', 169) RETURNING id",
    )
    .fetch_one(pool)
    .await
    .expect("movie inserted");

    let session_id = add_session(pool, movie_id, hall_id, show_time).await;

    SeededSession {
        movie_id,
        hall_id,
        session_id,
    }
}

pub async fn add_session(pool: &PgPool, movie_id: i64, hall_id: i64, show_time: OffsetDateTime) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO movie_sessions (show_time, movie_id, cinema_hall_id) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(show_time)
    .bind(movie_id)
    .bind(hall_id)
    .fetch_one(pool)
    .await
    .expect("session inserted")
}
