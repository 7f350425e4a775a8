use super::dto::MovieFilter;
use super::model::{Movie, MovieActorLink, MovieGenreLink};
use crate::common::query::contains_pattern;
use sqlx::{PgConnection, PgPool, Postgres, QueryBuilder};

pub struct MovieRepository;

impl MovieRepository {
    /// Each filter is an `EXISTS` semi-join, so a movie matching several of the
    /// requested ids is still returned once.
    pub fn filtered_query(filter: &MovieFilter) -> QueryBuilder<'static, Postgres> {
        let mut qb = QueryBuilder::new(
            "SELECT m.id, m.title, m.description, m.duration FROM movies m WHERE TRUE",
        );

        if let Some(actors) = &filter.actors {
            qb.push(" AND EXISTS (SELECT 1 FROM movie_actors ma WHERE ma.movie_id = m.id AND ma.actor_id = ANY(")
                .push_bind(actors.clone())
                .push("))");
        }
        if let Some(genres) = &filter.genres {
            qb.push(" AND EXISTS (SELECT 1 FROM movie_genres mg WHERE mg.movie_id = m.id AND mg.genre_id = ANY(")
                .push_bind(genres.clone())
                .push("))");
        }
        if let Some(title) = &filter.title {
            qb.push(" AND m.title ILIKE ").push_bind(contains_pattern(title));
        }

        qb.push(" ORDER BY m.id");
        qb
    }

    pub async fn list(pool: &PgPool, filter: &MovieFilter) -> sqlx::Result<Vec<Movie>> {
        Self::filtered_query(filter)
            .build_query_as::<Movie>()
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: i64) -> sqlx::Result<Option<Movie>> {
        sqlx::query_as::<_, Movie>("SELECT id, title, description, duration FROM movies WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn genres_for(pool: &PgPool, movie_ids: &[i64]) -> sqlx::Result<Vec<MovieGenreLink>> {
        sqlx::query_as::<_, MovieGenreLink>(
            r#"
            SELECT mg.movie_id, g.id AS genre_id, g.name
            FROM movie_genres mg
            JOIN genres g ON g.id = mg.genre_id
            WHERE mg.movie_id = ANY($1)
            ORDER BY g.id
            "#,
        )
        .bind(movie_ids)
        .fetch_all(pool)
        .await
    }

    pub async fn actors_for(pool: &PgPool, movie_ids: &[i64]) -> sqlx::Result<Vec<MovieActorLink>> {
        sqlx::query_as::<_, MovieActorLink>(
            r#"
            SELECT ma.movie_id, a.id AS actor_id, a.first_name, a.last_name
            FROM movie_actors ma
            JOIN actors a ON a.id = ma.actor_id
            WHERE ma.movie_id = ANY($1)
            ORDER BY a.id
            "#,
        )
        .bind(movie_ids)
        .fetch_all(pool)
        .await
    }

    pub async fn missing_genres(conn: &mut PgConnection, ids: &[i64]) -> sqlx::Result<Vec<i64>> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT t.id FROM unnest($1::bigint[]) AS t(id)
            WHERE NOT EXISTS (SELECT 1 FROM genres g WHERE g.id = t.id)
            "#,
        )
        .bind(ids)
        .fetch_all(conn)
        .await
    }

    pub async fn missing_actors(conn: &mut PgConnection, ids: &[i64]) -> sqlx::Result<Vec<i64>> {
        sqlx::query_scalar::<_, i64>(
            r#"
            SELECT t.id FROM unnest($1::bigint[]) AS t(id)
            WHERE NOT EXISTS (SELECT 1 FROM actors a WHERE a.id = t.id)
            "#,
        )
        .bind(ids)
        .fetch_all(conn)
        .await
    }

    pub async fn create(
        conn: &mut PgConnection,
        title: &str,
        description: &str,
        duration: i32,
    ) -> sqlx::Result<Movie> {
        sqlx::query_as::<_, Movie>(
            r#"
            INSERT INTO movies (title, description, duration)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, duration
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(duration)
        .fetch_one(conn)
        .await
    }

    pub async fn update(
        conn: &mut PgConnection,
        id: i64,
        title: Option<String>,
        description: Option<String>,
        duration: Option<i32>,
    ) -> sqlx::Result<Option<Movie>> {
        sqlx::query_as::<_, Movie>(
            r#"
            UPDATE movies
            SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                duration = COALESCE($3, duration)
            WHERE id = $4
            RETURNING id, title, description, duration
            "#,
        )
        .bind(title)
        .bind(description)
        .bind(duration)
        .bind(id)
        .fetch_optional(conn)
        .await
    }

    pub async fn set_genres(conn: &mut PgConnection, movie_id: i64, genre_ids: &[i64]) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM movie_genres WHERE movie_id = $1")
            .bind(movie_id)
            .execute(&mut *conn)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO movie_genres (movie_id, genre_id)
            SELECT $1, unnest($2::bigint[])
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(movie_id)
        .bind(genre_ids)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    pub async fn set_actors(conn: &mut PgConnection, movie_id: i64, actor_ids: &[i64]) -> sqlx::Result<()> {
        sqlx::query("DELETE FROM movie_actors WHERE movie_id = $1")
            .bind(movie_id)
            .execute(&mut *conn)
            .await?;

        sqlx::query(
            r#"
            INSERT INTO movie_actors (movie_id, actor_id)
            SELECT $1, unnest($2::bigint[])
            ON CONFLICT DO NOTHING
            "#,
        )
        .bind(movie_id)
        .bind(actor_ids)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    pub async fn delete(pool: &PgPool, id: i64) -> sqlx::Result<bool> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
