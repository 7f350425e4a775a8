use super::dto::{ActorResponse, CreateActorRequest, UpdateActorRequest};
use super::repository::ActorRepository;
use crate::common::error::{AppError, AppResult};
use crate::state::AppState;
use validator::Validate;

pub struct ActorService;

impl ActorService {
    pub async fn create(state: AppState, req: CreateActorRequest) -> AppResult<ActorResponse> {
        req.validate()?;
        let actor = ActorRepository::create(&state.db, &req.first_name, &req.last_name).await?;
        Ok(actor.into())
    }

    pub async fn find_all(state: AppState) -> AppResult<Vec<ActorResponse>> {
        let actors = ActorRepository::find_all(&state.db).await?;
        Ok(actors.into_iter().map(ActorResponse::from).collect())
    }

    pub async fn find_by_id(state: AppState, id: i64) -> AppResult<ActorResponse> {
        ActorRepository::find_by_id(&state.db, id)
            .await?
            .map(ActorResponse::from)
            .ok_or_else(|| AppError::not_found("Actor"))
    }

    pub async fn update(state: AppState, id: i64, req: UpdateActorRequest) -> AppResult<ActorResponse> {
        req.validate()?;

        ActorRepository::update(&state.db, id, req.first_name, req.last_name)
            .await?
            .map(ActorResponse::from)
            .ok_or_else(|| AppError::not_found("Actor"))
    }

    pub async fn delete(state: AppState, id: i64) -> AppResult<()> {
        if !ActorRepository::delete(&state.db, id).await? {
            return Err(AppError::not_found("Actor"));
        }
        Ok(())
    }
}
