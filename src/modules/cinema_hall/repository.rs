use super::model::CinemaHall;
use sqlx::PgPool;

pub struct CinemaHallRepository;

impl CinemaHallRepository {
    pub async fn create(pool: &PgPool, name: &str, rows: i32, seats_in_row: i32) -> sqlx::Result<CinemaHall> {
        sqlx::query_as::<_, CinemaHall>(
            r#"
            INSERT INTO cinema_halls (name, rows, seats_in_row)
            VALUES ($1, $2, $3)
            RETURNING id, name, rows, seats_in_row
            "#,
        )
        .bind(name)
        .bind(rows)
        .bind(seats_in_row)
        .fetch_one(pool)
        .await
    }

    pub async fn find_all(pool: &PgPool) -> sqlx::Result<Vec<CinemaHall>> {
        sqlx::query_as::<_, CinemaHall>("SELECT id, name, rows, seats_in_row FROM cinema_halls ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i64) -> sqlx::Result<Option<CinemaHall>> {
        sqlx::query_as::<_, CinemaHall>("SELECT id, name, rows, seats_in_row FROM cinema_halls WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: i64,
        name: Option<String>,
        rows: Option<i32>,
        seats_in_row: Option<i32>,
    ) -> sqlx::Result<Option<CinemaHall>> {
        sqlx::query_as::<_, CinemaHall>(
            r#"
            UPDATE cinema_halls
            SET
                name = COALESCE($1, name),
                rows = COALESCE($2, rows),
                seats_in_row = COALESCE($3, seats_in_row)
            WHERE id = $4
            RETURNING id, name, rows, seats_in_row
            "#,
        )
        .bind(name)
        .bind(rows)
        .bind(seats_in_row)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM cinema_halls WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
