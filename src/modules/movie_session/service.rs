use super::dto::{
    CreateMovieSessionRequest, MovieSessionDetailResponse, MovieSessionFilter,
    MovieSessionListResponse, MovieSessionQuery, MovieSessionResponse, MovieSessionView,
    UpdateMovieSessionRequest,
};
use super::model::MovieSessionRow;
use super::repository::MovieSessionRepository;
use crate::common::error::{field_error, is_foreign_key_violation, AppError, AppResult};
use crate::common::shape::Shape;
use crate::modules::cinema_hall::dto::CinemaHallResponse;
use crate::modules::cinema_hall::repository::CinemaHallRepository;
use crate::modules::movie::repository::MovieRepository;
use crate::modules::movie::service::MovieService;
use crate::state::AppState;
use sqlx::PgPool;
use tracing::info;
use validator::ValidationErrors;

pub struct MovieSessionService;

impl MovieSessionService {
    pub async fn list(
        state: AppState,
        query: MovieSessionQuery,
        shape: Shape,
    ) -> AppResult<Vec<MovieSessionView>> {
        let filter = MovieSessionFilter::from_query(&query)?;
        let rows = MovieSessionRepository::list(&state.db, &filter).await?;

        let mut views = Vec::with_capacity(rows.len());
        for row in rows {
            views.push(Self::present(&state.db, row, shape).await?);
        }
        Ok(views)
    }

    pub async fn get(state: AppState, id: i64, shape: Shape) -> AppResult<MovieSessionView> {
        let row = Self::load_row(&state.db, id).await?;
        Self::present(&state.db, row, shape).await
    }

    pub async fn create(
        state: AppState,
        req: CreateMovieSessionRequest,
        shape: Shape,
    ) -> AppResult<MovieSessionView> {
        Self::ensure_related_exist(&state.db, Some(req.movie), Some(req.cinema_hall)).await?;

        let session = MovieSessionRepository::create(&state.db, req.show_time, req.movie, req.cinema_hall)
            .await
            .map_err(related_vanished)?;
        info!(session_id = session.id, movie_id = session.movie_id, "movie session created");

        let row = Self::load_row(&state.db, session.id).await?;
        Self::present(&state.db, row, shape).await
    }

    pub async fn update(
        state: AppState,
        id: i64,
        req: UpdateMovieSessionRequest,
        shape: Shape,
    ) -> AppResult<MovieSessionView> {
        Self::ensure_related_exist(&state.db, req.movie, req.cinema_hall).await?;

        MovieSessionRepository::update(&state.db, id, req.show_time, req.movie, req.cinema_hall)
            .await
            .map_err(related_vanished)?
            .ok_or_else(|| AppError::not_found("Movie session"))?;

        let row = Self::load_row(&state.db, id).await?;
        Self::present(&state.db, row, shape).await
    }

    pub async fn delete(state: AppState, id: i64) -> AppResult<()> {
        if !MovieSessionRepository::delete(&state.db, id).await? {
            return Err(AppError::not_found("Movie session"));
        }
        Ok(())
    }

    async fn load_row(pool: &PgPool, id: i64) -> AppResult<MovieSessionRow> {
        MovieSessionRepository::find_row_by_id(pool, id)
            .await?
            .ok_or_else(|| AppError::not_found("Movie session"))
    }

    async fn present(pool: &PgPool, row: MovieSessionRow, shape: Shape) -> AppResult<MovieSessionView> {
        let view = match shape {
            Shape::Summary => MovieSessionView::Summary(summary(row)),
            Shape::Write => MovieSessionView::Write(MovieSessionResponse {
                id: row.id,
                show_time: row.show_time,
                movie: row.movie_id,
                cinema_hall: row.cinema_hall_id,
            }),
            Shape::Detail => {
                let movie = MovieRepository::find_by_id(pool, row.movie_id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Movie"))?;
                let movie = MovieService::summaries(pool, vec![movie])
                    .await?
                    .pop()
                    .ok_or_else(|| AppError::not_found("Movie"))?;
                let taken_places = MovieSessionRepository::taken_places(pool, row.id).await?;

                MovieSessionView::Detail(MovieSessionDetailResponse {
                    id: row.id,
                    show_time: row.show_time,
                    cinema_hall: CinemaHallResponse::from(row.cinema_hall()),
                    movie,
                    taken_places,
                })
            }
        };
        Ok(view)
    }

    async fn ensure_related_exist(
        pool: &PgPool,
        movie: Option<i64>,
        cinema_hall: Option<i64>,
    ) -> AppResult<()> {
        let mut errors = ValidationErrors::new();

        if let Some(id) = movie {
            if MovieRepository::find_by_id(pool, id).await?.is_none() {
                errors.add("movie", field_error("does_not_exist", missing_message(id)));
            }
        }
        if let Some(id) = cinema_hall {
            if CinemaHallRepository::find_by_id(pool, id).await?.is_none() {
                errors.add("cinema_hall", field_error("does_not_exist", missing_message(id)));
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

/// A movie or hall deleted between the existence check and the write.
fn related_vanished(err: sqlx::Error) -> AppError {
    if is_foreign_key_violation(&err) {
        return AppError::BadRequest("Referenced movie or cinema hall no longer exists".to_string());
    }
    err.into()
}

fn summary(row: MovieSessionRow) -> MovieSessionListResponse {
    MovieSessionListResponse {
        cinema_hall_capacity: row.cinema_hall().capacity(),
        id: row.id,
        show_time: row.show_time,
        movie_title: row.movie_title,
        cinema_hall_name: row.cinema_hall_name,
        tickets_available: row.tickets_available,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn summary_reports_capacity_and_availability() {
        let row = MovieSessionRow {
            id: 1,
            show_time: datetime!(2024-05-01 19:30 UTC),
            movie_id: 2,
            movie_title: "Interstellar".into(),
            cinema_hall_id: 3,
            cinema_hall_name: "Blue".into(),
            rows: 10,
            seats_in_row: 20,
            tickets_available: 197,
        };

        let json = serde_json::to_value(MovieSessionView::Summary(summary(row))).unwrap();
        assert_eq!(json["cinema_hall_capacity"], 200);
        assert_eq!(json["tickets_available"], 197);
        assert_eq!(json["show_time"], "2024-05-01T19:30:00Z");
    }

    mod db {
        use super::*;
        use crate::modules::movie_session::dto::MovieSessionQuery;
        use crate::modules::order::dto::{CreateOrderRequest, TicketRequest};
        use crate::modules::order::service::OrderService;
        use crate::test_support::{add_session, seed_session, state_with};
        use uuid::Uuid;

        fn ids(views: &[MovieSessionView]) -> Vec<i64> {
            views
                .iter()
                .map(|view| match view {
                    MovieSessionView::Summary(s) => s.id,
                    MovieSessionView::Detail(s) => s.id,
                    MovieSessionView::Write(s) => s.id,
                })
                .collect()
        }

        #[sqlx::test(migrations = "./migrations")]
        #[ignore = "requires a PostgreSQL DATABASE_URL"]
        async fn availability_reflects_sold_tickets(pool: PgPool) {
            let seeded = seed_session(&pool, 10, 20, datetime!(2024-05-01 19:30 UTC)).await;
            let state = state_with(pool);

            let tickets = (1..=3)
                .map(|seat| TicketRequest { movie_session: seeded.session_id, row: 1, seat })
                .collect();
            OrderService::create(state.clone(), Uuid::new_v4(), CreateOrderRequest { tickets }, Shape::Write)
                .await
                .unwrap();

            let views = MovieSessionService::list(state.clone(), MovieSessionQuery::default(), Shape::Summary)
                .await
                .unwrap();
            let MovieSessionView::Summary(row) = &views[0] else {
                panic!("expected summary");
            };
            assert_eq!(row.tickets_available, 197);

            let MovieSessionView::Detail(detail) = MovieSessionService::get(state, seeded.session_id, Shape::Detail)
                .await
                .unwrap()
            else {
                panic!("expected detail");
            };
            assert_eq!(detail.taken_places.len(), 3);
        }

        #[sqlx::test(migrations = "./migrations")]
        #[ignore = "requires a PostgreSQL DATABASE_URL"]
        async fn availability_of_huge_halls_does_not_overflow(pool: PgPool) {
            let seeded = seed_session(&pool, 100_000, 100_000, datetime!(2024-05-01 19:30 UTC)).await;
            let state = state_with(pool);

            let views = MovieSessionService::list(state.clone(), MovieSessionQuery::default(), Shape::Summary)
                .await
                .unwrap();
            let MovieSessionView::Summary(row) = &views[0] else {
                panic!("expected summary");
            };
            assert_eq!(row.cinema_hall_capacity, 10_000_000_000);
            assert_eq!(row.tickets_available, 10_000_000_000);

            let detail = MovieSessionService::get(state, seeded.session_id, Shape::Detail).await;
            assert!(detail.is_ok());
        }

        #[sqlx::test(migrations = "./migrations")]
        #[ignore = "requires a PostgreSQL DATABASE_URL"]
        async fn date_filter_excludes_adjacent_days(pool: PgPool) {
            let seeded = seed_session(&pool, 5, 5, datetime!(2024-05-01 10:00 UTC)).await;
            add_session(&pool, seeded.movie_id, seeded.hall_id, datetime!(2024-04-30 23:59 UTC)).await;
            add_session(&pool, seeded.movie_id, seeded.hall_id, datetime!(2024-05-02 00:00 UTC)).await;
            let state = state_with(pool);

            let query = MovieSessionQuery {
                date: Some("2024-05-01".into()),
                ..Default::default()
            };
            let views = MovieSessionService::list(state, query, Shape::Summary).await.unwrap();
            assert_eq!(ids(&views), vec![seeded.session_id]);
        }

        #[sqlx::test(migrations = "./migrations")]
        #[ignore = "requires a PostgreSQL DATABASE_URL"]
        async fn movie_filter_accepts_several_ids(pool: PgPool) {
            let first = seed_session(&pool, 5, 5, datetime!(2024-05-01 10:00 UTC)).await;
            let second = seed_session(&pool, 5, 5, datetime!(2024-05-01 12:00 UTC)).await;
            let _third = seed_session(&pool, 5, 5, datetime!(2024-05-01 14:00 UTC)).await;
            let state = state_with(pool);

            let query = MovieSessionQuery {
                movie: Some(format!("{},{}", first.movie_id, second.movie_id)),
                ..Default::default()
            };
            let views = MovieSessionService::list(state, query, Shape::Summary).await.unwrap();
            assert_eq!(ids(&views), vec![first.session_id, second.session_id]);
        }
    }
}
