use super::dto::{CinemaHallResponse, CreateCinemaHallRequest, UpdateCinemaHallRequest};
use super::repository::CinemaHallRepository;
use crate::common::error::{AppError, AppResult};
use crate::state::AppState;
use validator::Validate;

pub struct CinemaHallService;

impl CinemaHallService {
    pub async fn create(state: AppState, req: CreateCinemaHallRequest) -> AppResult<CinemaHallResponse> {
        req.validate()?;
        let hall = CinemaHallRepository::create(&state.db, &req.name, req.rows, req.seats_in_row).await?;
        Ok(hall.into())
    }

    pub async fn find_all(state: AppState) -> AppResult<Vec<CinemaHallResponse>> {
        let halls = CinemaHallRepository::find_all(&state.db).await?;
        Ok(halls.into_iter().map(CinemaHallResponse::from).collect())
    }

    pub async fn find_by_id(state: AppState, id: i64) -> AppResult<CinemaHallResponse> {
        CinemaHallRepository::find_by_id(&state.db, id)
            .await?
            .map(CinemaHallResponse::from)
            .ok_or_else(|| AppError::not_found("Cinema hall"))
    }

    // Shrinking a hall below seats already sold is left to the caller; tickets
    // keep their original row and seat.
    pub async fn update(state: AppState, id: i64, req: UpdateCinemaHallRequest) -> AppResult<CinemaHallResponse> {
        req.validate()?;

        CinemaHallRepository::update(&state.db, id, req.name, req.rows, req.seats_in_row)
            .await?
            .map(CinemaHallResponse::from)
            .ok_or_else(|| AppError::not_found("Cinema hall"))
    }

    pub async fn delete(state: AppState, id: i64) -> AppResult<()> {
        if !CinemaHallRepository::delete(&state.db, id).await? {
            return Err(AppError::not_found("Cinema hall"));
        }
        Ok(())
    }
}
