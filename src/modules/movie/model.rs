use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Serialize, Deserialize, FromRow, Clone)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub duration: i32,
}

/// A genre attached to a movie, as loaded in bulk for a set of movies.
#[derive(Debug, FromRow, Clone)]
pub struct MovieGenreLink {
    pub movie_id: i64,
    pub genre_id: i64,
    pub name: String,
}

#[derive(Debug, FromRow, Clone)]
pub struct MovieActorLink {
    pub movie_id: i64,
    pub actor_id: i64,
    pub first_name: String,
    pub last_name: String,
}
