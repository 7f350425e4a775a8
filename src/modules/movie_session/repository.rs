use super::dto::MovieSessionFilter;
use super::model::{MovieSession, MovieSessionRow, TakenPlace};
use sqlx::{PgPool, Postgres, QueryBuilder};
use time::OffsetDateTime;

const SESSION_ROW_SELECT: &str = r#"
    SELECT
        ms.id,
        ms.show_time,
        ms.movie_id,
        m.title AS movie_title,
        ms.cinema_hall_id,
        ch.name AS cinema_hall_name,
        ch.rows,
        ch.seats_in_row,
        GREATEST(
            ch.rows::BIGINT * ch.seats_in_row
                - (SELECT COUNT(*) FROM tickets t WHERE t.movie_session_id = ms.id),
            0
        ) AS tickets_available
    FROM movie_sessions ms
    JOIN movies m ON m.id = ms.movie_id
    JOIN cinema_halls ch ON ch.id = ms.cinema_hall_id
    WHERE TRUE"#;

pub struct MovieSessionRepository;

impl MovieSessionRepository {
    pub fn filtered_query(filter: &MovieSessionFilter) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(SESSION_ROW_SELECT);

        if let Some(actors) = &filter.actors {
            qb.push(" AND EXISTS (SELECT 1 FROM movie_actors ma WHERE ma.movie_id = ms.movie_id AND ma.actor_id = ANY(")
                .push_bind(actors.clone())
                .push("))");
        }
        if let Some(genres) = &filter.genres {
            qb.push(" AND EXISTS (SELECT 1 FROM movie_genres mg WHERE mg.movie_id = ms.movie_id AND mg.genre_id = ANY(")
                .push_bind(genres.clone())
                .push("))");
        }
        if let Some(date) = filter.date {
            qb.push(" AND (ms.show_time AT TIME ZONE 'UTC')::date = ").push_bind(date);
        }
        if let Some(movies) = &filter.movies {
            qb.push(" AND ms.movie_id = ANY(").push_bind(movies.clone()).push(")");
        }

        qb.push(" ORDER BY ms.show_time, ms.id");
        qb
    }

    pub async fn list(pool: &PgPool, filter: &MovieSessionFilter) -> sqlx::Result<Vec<MovieSessionRow>> {
        Self::filtered_query(filter)
            .build_query_as::<MovieSessionRow>()
            .fetch_all(pool)
            .await
    }

    pub async fn find_row_by_id(pool: &PgPool, id: i64) -> sqlx::Result<Option<MovieSessionRow>> {
        let mut qb = QueryBuilder::<Postgres>::new(SESSION_ROW_SELECT);
        qb.push(" AND ms.id = ").push_bind(id);

        qb.build_query_as::<MovieSessionRow>()
            .fetch_optional(pool)
            .await
    }

    pub async fn taken_places(pool: &PgPool, session_id: i64) -> sqlx::Result<Vec<TakenPlace>> {
        sqlx::query_as::<_, TakenPlace>(
            r#"
            SELECT row, seat
            FROM tickets
            WHERE movie_session_id = $1
            ORDER BY row, seat
            "#,
        )
        .bind(session_id)
        .fetch_all(pool)
        .await
    }

    pub async fn create(
        pool: &PgPool,
        show_time: OffsetDateTime,
        movie_id: i64,
        cinema_hall_id: i64,
    ) -> sqlx::Result<MovieSession> {
        sqlx::query_as::<_, MovieSession>(
            r#"
            INSERT INTO movie_sessions (show_time, movie_id, cinema_hall_id)
            VALUES ($1, $2, $3)
            RETURNING id, show_time, movie_id, cinema_hall_id
            "#,
        )
        .bind(show_time)
        .bind(movie_id)
        .bind(cinema_hall_id)
        .fetch_one(pool)
        .await
    }

    pub async fn update(
        pool: &PgPool,
        id: i64,
        show_time: Option<OffsetDateTime>,
        movie_id: Option<i64>,
        cinema_hall_id: Option<i64>,
    ) -> sqlx::Result<Option<MovieSession>> {
        sqlx::query_as::<_, MovieSession>(
            r#"
            UPDATE movie_sessions
            SET
                show_time = COALESCE($1, show_time),
                movie_id = COALESCE($2, movie_id),
                cinema_hall_id = COALESCE($3, cinema_hall_id)
            WHERE id = $4
            RETURNING id, show_time, movie_id, cinema_hall_id
            "#,
        )
        .bind(show_time)
        .bind(movie_id)
        .bind(cinema_hall_id)
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    pub async fn delete(pool: &PgPool, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM movie_sessions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
