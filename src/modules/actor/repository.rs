use super::model::Actor;
use sqlx::PgPool;

pub struct ActorRepository;

impl ActorRepository {
    pub async fn create(pool: &PgPool, first_name: &str, last_name: &str) -> sqlx::Result<Actor> {
        sqlx::query_as::<_, Actor>(
            r#"
            INSERT INTO actors (first_name, last_name)
            VALUES ($1, $2)
            RETURNING id, first_name, last_name
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_one(pool)
        .await
    }

    pub async fn find_all(pool: &PgPool) -> sqlx::Result<Vec<Actor>> {
        sqlx::query_as::<_, Actor>("SELECT id, first_name, last_name FROM actors ORDER BY id")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i64) -> sqlx::Result<Option<Actor>> {
        sqlx::query_as::<_, Actor>("SELECT id, first_name, last_name FROM actors WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: i64,
        first_name: Option<String>,
        last_name: Option<String>,
    ) -> sqlx::Result<Option<Actor>> {
        sqlx::query_as::<_, Actor>(
            r#"
            UPDATE actors
            SET
                first_name = COALESCE($1, first_name),
                last_name = COALESCE($2, last_name)
            WHERE id = $3
            RETURNING id, first_name, last_name
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM actors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
