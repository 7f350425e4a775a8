use super::dto::{CreateGenreRequest, GenreResponse, UpdateGenreRequest};
use super::repository::GenreRepository;
use crate::common::error::{is_unique_violation, AppError, AppResult};
use crate::state::AppState;
use validator::Validate;

pub struct GenreService;

impl GenreService {
    pub async fn create(state: AppState, req: CreateGenreRequest) -> AppResult<GenreResponse> {
        req.validate()?;

        let genre = GenreRepository::create(&state.db, &req.name)
            .await
            .map_err(duplicate_name)?;

        Ok(genre.into())
    }

    pub async fn find_all(state: AppState) -> AppResult<Vec<GenreResponse>> {
        let genres = GenreRepository::find_all(&state.db).await?;
        Ok(genres.into_iter().map(GenreResponse::from).collect())
    }

    pub async fn find_by_id(state: AppState, id: i64) -> AppResult<GenreResponse> {
        GenreRepository::find_by_id(&state.db, id)
            .await?
            .map(GenreResponse::from)
            .ok_or_else(|| AppError::not_found("Genre"))
    }

    pub async fn update(state: AppState, id: i64, req: UpdateGenreRequest) -> AppResult<GenreResponse> {
        req.validate()?;

        GenreRepository::update(&state.db, id, req.name)
            .await
            .map_err(duplicate_name)?
            .map(GenreResponse::from)
            .ok_or_else(|| AppError::not_found("Genre"))
    }

    pub async fn delete(state: AppState, id: i64) -> AppResult<()> {
        if !GenreRepository::delete(&state.db, id).await? {
            return Err(AppError::not_found("Genre"));
        }
        Ok(())
    }
}

fn duplicate_name(err: sqlx::Error) -> AppError {
    if is_unique_violation(&err) {
        return AppError::field("name", "unique", "Genre with this name already exists");
    }
    err.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_unique_database_errors_pass_through() {
        let err = duplicate_name(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Database(_)));
    }

    mod db {
        use super::*;
        use crate::test_support::state_with;
        use sqlx::PgPool;

        fn named(name: &str) -> CreateGenreRequest {
            CreateGenreRequest { name: name.into() }
        }

        #[sqlx::test(migrations = "./migrations")]
        #[ignore = "requires a PostgreSQL DATABASE_URL"]
        async fn duplicate_name_is_a_field_error(pool: PgPool) {
            let state = state_with(pool);
            GenreService::create(state.clone(), named("Drama")).await.unwrap();

            let err = GenreService::create(state.clone(), named("Drama")).await.unwrap_err();
            let AppError::Validation(errors) = err else {
                panic!("expected validation error, got {err:?}");
            };
            assert_eq!(errors.field_errors()["name"][0].code, "unique");

            let comedy = GenreService::create(state.clone(), named("Comedy")).await.unwrap();
            let rename = UpdateGenreRequest { name: Some("Drama".into()) };
            let err = GenreService::update(state, comedy.id, rename).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }

        #[sqlx::test(migrations = "./migrations")]
        #[ignore = "requires a PostgreSQL DATABASE_URL"]
        async fn unknown_id_is_not_found(pool: PgPool) {
            let state = state_with(pool);

            let err = GenreService::find_by_id(state.clone(), 404).await.unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)));

            let err = GenreService::update(state.clone(), 404, UpdateGenreRequest { name: Some("X".into()) })
                .await
                .unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)));

            let err = GenreService::delete(state, 404).await.unwrap_err();
            assert!(matches!(err, AppError::NotFound(_)));
        }

        #[sqlx::test(migrations = "./migrations")]
        #[ignore = "requires a PostgreSQL DATABASE_URL"]
        async fn empty_patch_keeps_the_name(pool: PgPool) {
            let state = state_with(pool);
            let drama = GenreService::create(state.clone(), named("Drama")).await.unwrap();

            let kept = GenreService::update(state.clone(), drama.id, UpdateGenreRequest { name: None })
                .await
                .unwrap();
            assert_eq!(kept.name, "Drama");

            GenreService::delete(state.clone(), drama.id).await.unwrap();
            assert!(GenreService::find_all(state).await.unwrap().is_empty());
        }
    }
}
