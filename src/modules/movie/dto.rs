use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::common::error::AppResult;
use crate::common::query::{optional_id_list, optional_text};
use crate::modules::actor::dto::ActorResponse;
use crate::modules::genre::dto::GenreResponse;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMovieRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Running time in minutes
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration: i32,
    #[serde(default)]
    pub genres: Vec<i64>,
    #[serde(default)]
    pub actors: Vec<i64>,
}

/// Absent fields are left untouched; a present `genres`/`actors` list replaces
/// the whole set.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateMovieRequest {
    #[validate(length(min = 1, max = 255, message = "Title must be 1-255 characters"))]
    pub title: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "Duration must be positive"))]
    pub duration: Option<i32>,
    pub genres: Option<Vec<i64>>,
    pub actors: Option<Vec<i64>>,
}

/// Write shape: the editable fields with related ids.
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub duration: i32,
    pub genres: Vec<i64>,
    pub actors: Vec<i64>,
}

/// Summary shape: genre names and actor full names.
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieListResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub duration: i32,
    pub genres: Vec<String>,
    pub actors: Vec<String>,
}

/// Detail shape: nested genre and actor objects.
#[derive(Debug, Serialize, ToSchema)]
pub struct MovieDetailResponse {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub duration: i32,
    pub genres: Vec<GenreResponse>,
    pub actors: Vec<ActorResponse>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MovieView {
    Summary(MovieListResponse),
    Detail(MovieDetailResponse),
    Write(MovieResponse),
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieQuery {
    /// Comma-separated actor ids, e.g. `1,2,3`
    pub actors: Option<String>,
    /// Comma-separated genre ids, e.g. `1,2,3`
    pub genres: Option<String>,
    /// Case-insensitive title substring
    pub title: Option<String>,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MovieFilter {
    pub actors: Option<Vec<i64>>,
    pub genres: Option<Vec<i64>>,
    pub title: Option<String>,
}

impl MovieFilter {
    pub fn from_query(query: &MovieQuery) -> AppResult<Self> {
        Ok(Self {
            actors: optional_id_list("actors", query.actors.as_deref())?,
            genres: optional_id_list("genres", query.genres.as_deref())?,
            title: optional_text(query.title.as_deref()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_parses_every_parameter() {
        let query = MovieQuery {
            actors: Some("1,2".into()),
            genres: Some("3".into()),
            title: Some("inter".into()),
        };

        let filter = MovieFilter::from_query(&query).unwrap();
        assert_eq!(filter.actors, Some(vec![1, 2]));
        assert_eq!(filter.genres, Some(vec![3]));
        assert_eq!(filter.title.as_deref(), Some("inter"));
    }

    #[test]
    fn filter_rejects_malformed_ids() {
        let query = MovieQuery {
            genres: Some("drama".into()),
            ..Default::default()
        };
        assert!(MovieFilter::from_query(&query).is_err());
    }

    #[test]
    fn write_payload_defaults_relations_to_empty() {
        let req: CreateMovieRequest =
            serde_json::from_str(r#"{"title": "Solaris", "duration": 167}"#).unwrap();
        assert!(req.genres.is_empty());
        assert!(req.actors.is_empty());
        assert_eq!(req.description, "");
        assert!(req.validate().is_ok());
    }
}
