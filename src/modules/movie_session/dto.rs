use serde::{Deserialize, Serialize};
use time::{Date, OffsetDateTime};
use utoipa::{IntoParams, ToSchema};

use super::model::TakenPlace;
use crate::common::error::AppResult;
use crate::common::query::{optional_date, optional_id_list};
use crate::modules::cinema_hall::dto::CinemaHallResponse;
use crate::modules::movie::dto::MovieListResponse;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateMovieSessionRequest {
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub show_time: OffsetDateTime,
    pub movie: i64,
    pub cinema_hall: i64,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMovieSessionRequest {
    #[serde(default, with = "time::serde::rfc3339::option")]
    #[schema(value_type = Option<String>, format = DateTime)]
    pub show_time: Option<OffsetDateTime>,
    pub movie: Option<i64>,
    pub cinema_hall: Option<i64>,
}

/// Write shape.
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieSessionResponse {
    pub id: i64,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub show_time: OffsetDateTime,
    pub movie: i64,
    pub cinema_hall: i64,
}

/// Summary shape with the live seat count.
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieSessionListResponse {
    pub id: i64,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub show_time: OffsetDateTime,
    pub movie_title: String,
    pub cinema_hall_name: String,
    pub cinema_hall_capacity: i64,
    pub tickets_available: i64,
}

/// Detail shape.
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieSessionDetailResponse {
    pub id: i64,
    #[serde(with = "time::serde::rfc3339")]
    #[schema(value_type = String, format = DateTime)]
    pub show_time: OffsetDateTime,
    pub movie: MovieListResponse,
    pub cinema_hall: CinemaHallResponse,
    pub taken_places: Vec<TakenPlace>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MovieSessionView {
    Summary(MovieSessionListResponse),
    Detail(MovieSessionDetailResponse),
    Write(MovieSessionResponse),
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieSessionQuery {
    /// Comma-separated actor ids of the session's movie
    pub actors: Option<String>,
    /// Comma-separated genre ids of the session's movie
    pub genres: Option<String>,
    /// Show date, `YYYY-MM-DD` (UTC)
    pub date: Option<String>,
    /// Comma-separated movie ids
    pub movie: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MovieSessionFilter {
    pub actors: Option<Vec<i64>>,
    pub genres: Option<Vec<i64>>,
    pub date: Option<Date>,
    pub movies: Option<Vec<i64>>,
}

impl MovieSessionFilter {
    pub fn from_query(query: &MovieSessionQuery) -> AppResult<Self> {
        Ok(Self {
            actors: optional_id_list("actors", query.actors.as_deref())?,
            genres: optional_id_list("genres", query.genres.as_deref())?,
            date: optional_date("date", query.date.as_deref())?,
            movies: optional_id_list("movie", query.movie.as_deref())?,
        })
    }
}
