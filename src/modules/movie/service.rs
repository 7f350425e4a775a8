use std::collections::HashMap;

use super::dto::{
    CreateMovieRequest, MovieDetailResponse, MovieFilter, MovieListResponse, MovieQuery,
    MovieResponse, MovieView, UpdateMovieRequest,
};
use super::model::{Movie, MovieActorLink, MovieGenreLink};
use super::repository::MovieRepository;
use crate::common::error::{field_error, AppError, AppResult};
use crate::common::shape::Shape;
use crate::modules::actor::dto::ActorResponse;
use crate::modules::actor::model::Actor;
use crate::modules::genre::dto::GenreResponse;
use crate::state::AppState;
use sqlx::{PgConnection, PgPool};
use tracing::info;
use validator::{Validate, ValidationErrors};

pub struct MovieService;

impl MovieService {
    pub async fn list(state: AppState, query: MovieQuery, shape: Shape) -> AppResult<Vec<MovieView>> {
        let filter = MovieFilter::from_query(&query)?;
        let movies = MovieRepository::list(&state.db, &filter).await?;
        Self::present(&state.db, movies, shape).await
    }

    pub async fn get(state: AppState, id: i64, shape: Shape) -> AppResult<MovieView> {
        let movie = MovieRepository::find_by_id(&state.db, id)
            .await?
            .ok_or_else(|| AppError::not_found("Movie"))?;

        Self::present_one(&state.db, movie, shape).await
    }

    pub async fn create(state: AppState, req: CreateMovieRequest, shape: Shape) -> AppResult<MovieView> {
        req.validate()?;

        let mut tx = state.db.begin().await?;
        Self::ensure_related_exist(&mut tx, Some(&req.genres), Some(&req.actors)).await?;

        let movie = MovieRepository::create(&mut tx, &req.title, &req.description, req.duration).await?;
        MovieRepository::set_genres(&mut tx, movie.id, &req.genres).await?;
        MovieRepository::set_actors(&mut tx, movie.id, &req.actors).await?;
        tx.commit().await?;

        info!(movie_id = movie.id, "movie created");
        Self::present_one(&state.db, movie, shape).await
    }

    pub async fn update(state: AppState, id: i64, req: UpdateMovieRequest, shape: Shape) -> AppResult<MovieView> {
        req.validate()?;

        let mut tx = state.db.begin().await?;
        let movie = MovieRepository::update(&mut tx, id, req.title, req.description, req.duration)
            .await?
            .ok_or_else(|| AppError::not_found("Movie"))?;

        Self::ensure_related_exist(&mut tx, req.genres.as_deref(), req.actors.as_deref()).await?;
        if let Some(genres) = &req.genres {
            MovieRepository::set_genres(&mut tx, id, genres).await?;
        }
        if let Some(actors) = &req.actors {
            MovieRepository::set_actors(&mut tx, id, actors).await?;
        }
        tx.commit().await?;

        Self::present_one(&state.db, movie, shape).await
    }

    pub async fn delete(state: AppState, id: i64) -> AppResult<()> {
        if !MovieRepository::delete(&state.db, id).await? {
            return Err(AppError::not_found("Movie"));
        }
        Ok(())
    }

    /// Summary rows for `movies`, used wherever a movie is nested in another
    /// resource.
    pub async fn summaries(pool: &PgPool, movies: Vec<Movie>) -> AppResult<Vec<MovieListResponse>> {
        let ids: Vec<i64> = movies.iter().map(|m| m.id).collect();
        let mut genres = group_by_movie(MovieRepository::genres_for(pool, &ids).await?, |l| l.movie_id);
        let mut actors = group_by_movie(MovieRepository::actors_for(pool, &ids).await?, |l| l.movie_id);

        Ok(movies
            .into_iter()
            .map(|movie| {
                let genres = genres.remove(&movie.id).unwrap_or_default();
                let actors = actors.remove(&movie.id).unwrap_or_default();
                summary(movie, genres, actors)
            })
            .collect())
    }

    async fn present(pool: &PgPool, movies: Vec<Movie>, shape: Shape) -> AppResult<Vec<MovieView>> {
        if shape == Shape::Summary {
            let rows = Self::summaries(pool, movies).await?;
            return Ok(rows.into_iter().map(MovieView::Summary).collect());
        }

        let ids: Vec<i64> = movies.iter().map(|m| m.id).collect();
        let mut genres = group_by_movie(MovieRepository::genres_for(pool, &ids).await?, |l| l.movie_id);
        let mut actors = group_by_movie(MovieRepository::actors_for(pool, &ids).await?, |l| l.movie_id);

        Ok(movies
            .into_iter()
            .map(|movie| {
                let genres = genres.remove(&movie.id).unwrap_or_default();
                let actors = actors.remove(&movie.id).unwrap_or_default();
                match shape {
                    Shape::Detail => MovieView::Detail(detail(movie, genres, actors)),
                    _ => MovieView::Write(write(movie, genres, actors)),
                }
            })
            .collect())
    }

    async fn present_one(pool: &PgPool, movie: Movie, shape: Shape) -> AppResult<MovieView> {
        Self::present(pool, vec![movie], shape)
            .await?
            .pop()
            .ok_or_else(|| AppError::Internal(anyhow::anyhow!("movie vanished while rendering")))
    }

    async fn ensure_related_exist(
        conn: &mut PgConnection,
        genres: Option<&[i64]>,
        actors: Option<&[i64]>,
    ) -> AppResult<()> {
        let mut errors = ValidationErrors::new();

        if let Some(ids) = genres.filter(|ids| !ids.is_empty()) {
            for id in MovieRepository::missing_genres(&mut *conn, ids).await? {
                errors.add("genres", field_error("does_not_exist", missing_message(id)));
            }
        }
        if let Some(ids) = actors.filter(|ids| !ids.is_empty()) {
            for id in MovieRepository::missing_actors(&mut *conn, ids).await? {
                errors.add("actors", field_error("does_not_exist", missing_message(id)));
            }
        }

        if errors.errors().is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

fn missing_message(id: i64) -> String {
    format!("Invalid id \"{}\" - object does not exist", id)
}

fn group_by_movie<T>(links: Vec<T>, key: impl Fn(&T) -> i64) -> HashMap<i64, Vec<T>> {
    let mut grouped: HashMap<i64, Vec<T>> = HashMap::new();
    for link in links {
        grouped.entry(key(&link)).or_default().push(link);
    }
    grouped
}

fn actor_of(link: MovieActorLink) -> Actor {
    Actor {
        id: link.actor_id,
        first_name: link.first_name,
        last_name: link.last_name,
    }
}

fn summary(movie: Movie, genres: Vec<MovieGenreLink>, actors: Vec<MovieActorLink>) -> MovieListResponse {
    MovieListResponse {
        id: movie.id,
        title: movie.title,
        description: movie.description,
        duration: movie.duration,
        genres: genres.into_iter().map(|g| g.name).collect(),
        actors: actors.into_iter().map(|a| actor_of(a).full_name()).collect(),
    }
}

fn detail(movie: Movie, genres: Vec<MovieGenreLink>, actors: Vec<MovieActorLink>) -> MovieDetailResponse {
    MovieDetailResponse {
        id: movie.id,
        title: movie.title,
        description: movie.description,
        duration: movie.duration,
        genres: genres
            .into_iter()
            .map(|g| GenreResponse { id: g.genre_id, name: g.name })
            .collect(),
        actors: actors
            .into_iter()
            .map(|a| ActorResponse::from(actor_of(a)))
            .collect(),
    }
}

fn write(movie: Movie, genres: Vec<MovieGenreLink>, actors: Vec<MovieActorLink>) -> MovieResponse {
    MovieResponse {
        id: movie.id,
        title: movie.title,
        description: movie.description,
        duration: movie.duration,
        genres: genres.into_iter().map(|g| g.genre_id).collect(),
        actors: actors.into_iter().map(|a| a.actor_id).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie() -> Movie {
        Movie {
            id: 7,
            title: "Interstellar".into(),
            description: "Space".into(),
            duration: 169,
        }
    }

    fn links() -> (Vec<MovieGenreLink>, Vec<MovieActorLink>) {
        (
            vec![MovieGenreLink { movie_id: 7, genre_id: 2, name: "Sci-Fi".into() }],
            vec![MovieActorLink {
                movie_id: 7,
                actor_id: 1,
                first_name: "Jessica".into(),
                last_name: "Chastain".into(),
            }],
        )
    }

    #[test]
    fn summary_flattens_relations_to_names() {
        let (genres, actors) = links();
        let row = summary(movie(), genres, actors);
        assert_eq!(row.genres, vec!["Sci-Fi"]);
        assert_eq!(row.actors, vec!["Jessica Chastain"]);
    }

    #[test]
    fn detail_nests_relation_objects() {
        let (genres, actors) = links();
        let row = detail(movie(), genres, actors);
        assert_eq!(row.genres[0].id, 2);
        assert_eq!(row.actors[0].full_name, "Jessica Chastain");
    }

    #[test]
    fn write_shape_exposes_ids() {
        let (genres, actors) = links();
        let json = serde_json::to_value(MovieView::Write(write(movie(), genres, actors))).unwrap();
        assert_eq!(json["genres"], serde_json::json!([2]));
        assert_eq!(json["actors"], serde_json::json!([1]));
    }

    #[test]
    fn links_group_under_their_movie() {
        let grouped = group_by_movie(vec![(1, "a"), (2, "b"), (1, "c")], |l| l.0);
        assert_eq!(grouped[&1].len(), 2);
        assert_eq!(grouped[&2].len(), 1);
    }

    mod db {
        use super::*;

        async fn insert_movie(pool: &PgPool, title: &str) -> i64 {
            sqlx::query_scalar("INSERT INTO movies (title, description, duration) VALUES ($1, '', 120) RETURNING id")
                .bind(title)
                .fetch_one(pool)
                .await
                .unwrap()
        }

        async fn insert_named(pool: &PgPool, sql: &str, name: &str) -> i64 {
            sqlx::query_scalar(sql).bind(name).fetch_one(pool).await.unwrap()
        }

        async fn link(pool: &PgPool, table: &str, column: &str, movie_id: i64, other_id: i64) {
            sqlx::query(&format!("INSERT INTO {} (movie_id, {}) VALUES ($1, $2)", table, column))
                .bind(movie_id)
                .bind(other_id)
                .execute(pool)
                .await
                .unwrap();
        }

        fn titles(views: &[MovieView]) -> Vec<String> {
            views
                .iter()
                .map(|view| match view {
                    MovieView::Summary(m) => m.title.clone(),
                    MovieView::Detail(m) => m.title.clone(),
                    MovieView::Write(m) => m.title.clone(),
                })
                .collect()
        }

        #[sqlx::test(migrations = "./migrations")]
        #[ignore = "requires a PostgreSQL DATABASE_URL"]
        async fn title_filter_is_case_insensitive_substring(pool: PgPool) {
            insert_movie(&pool, "Interstellar").await;
            insert_movie(&pool, "Winter Light").await;
            insert_movie(&pool, "Alien").await;
            let state = crate::test_support::state_with(pool);

            let query = MovieQuery {
                title: Some("inter".into()),
                ..Default::default()
            };
            let views = MovieService::list(state, query, Shape::Summary).await.unwrap();
            assert_eq!(titles(&views), vec!["Interstellar", "Winter Light"]);
        }

        #[sqlx::test(migrations = "./migrations")]
        #[ignore = "requires a PostgreSQL DATABASE_URL"]
        async fn actor_and_genre_filters_compose_without_duplicates(pool: PgPool) {
            let drama = insert_named(&pool, "INSERT INTO genres (name) VALUES ($1) RETURNING id", "Drama").await;
            let scifi = insert_named(&pool, "INSERT INTO genres (name) VALUES ($1) RETURNING id", "Sci-Fi").await;
            let mcconaughey = insert_named(
                &pool,
                "INSERT INTO actors (first_name, last_name) VALUES ($1, 'McConaughey') RETURNING id",
                "Matthew",
            )
            .await;
            let hathaway = insert_named(
                &pool,
                "INSERT INTO actors (first_name, last_name) VALUES ($1, 'Hathaway') RETURNING id",
                "Anne",
            )
            .await;

            let interstellar = insert_movie(&pool, "Interstellar").await;
            link(&pool, "movie_genres", "genre_id", interstellar, drama).await;
            link(&pool, "movie_genres", "genre_id", interstellar, scifi).await;
            link(&pool, "movie_actors", "actor_id", interstellar, mcconaughey).await;
            link(&pool, "movie_actors", "actor_id", interstellar, hathaway).await;

            let mud = insert_movie(&pool, "Mud").await;
            link(&pool, "movie_genres", "genre_id", mud, drama).await;
            link(&pool, "movie_actors", "actor_id", mud, mcconaughey).await;

            let state = crate::test_support::state_with(pool);

            let query = MovieQuery {
                actors: Some(format!("{},{}", mcconaughey, hathaway)),
                genres: Some(format!("{},{}", drama, scifi)),
                ..Default::default()
            };
            let views = MovieService::list(state.clone(), query, Shape::Summary).await.unwrap();
            assert_eq!(titles(&views), vec!["Interstellar", "Mud"]);

            let query = MovieQuery {
                actors: Some(hathaway.to_string()),
                genres: Some(drama.to_string()),
                ..Default::default()
            };
            let views = MovieService::list(state, query, Shape::Summary).await.unwrap();
            assert_eq!(titles(&views), vec!["Interstellar"]);
        }

        #[sqlx::test(migrations = "./migrations")]
        #[ignore = "requires a PostgreSQL DATABASE_URL"]
        async fn unknown_genre_rejects_the_whole_movie(pool: PgPool) {
            let state = crate::test_support::state_with(pool);
            let req = CreateMovieRequest {
                title: "Interstellar".into(),
                description: String::new(),
                duration: 169,
                genres: vec![404],
                actors: vec![],
            };

            let err = MovieService::create(state.clone(), req, Shape::Write).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));

            let movies: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM movies")
                .fetch_one(&state.db)
                .await
                .unwrap();
            assert_eq!(movies, 0);
        }
    }
}
