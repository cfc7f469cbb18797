//! Movie catalog service
//!
//! Manual user/movie operations: input presence checks, then delegation to
//! the db layer. No business logic beyond that.

use sqlx::SqlitePool;

use crate::db::movies::{self, Movie, NewMovie};
use crate::db::users::{self, User};
use crate::error::{ApiError, ApiResult};

/// Register a user; empty names are rejected before any write
pub async fn register_user(pool: &SqlitePool, name: &str) -> ApiResult<User> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ApiError::BadRequest("Name must not be empty".to_string()));
    }

    let user = users::insert_user(pool, name).await?;
    tracing::info!(user_id = user.id, name = %user.name, "User registered");
    Ok(user)
}

/// Delete a user and (via cascade) all owned movies
pub async fn remove_user(pool: &SqlitePool, user_id: i64) -> ApiResult<()> {
    if !users::delete_user(pool, user_id).await? {
        return Err(ApiError::NotFound(format!("User {} not found", user_id)));
    }
    tracing::info!(user_id, "User deleted");
    Ok(())
}

/// Manually add a movie; all fields caller-supplied except id
pub async fn add_movie(pool: &SqlitePool, new: NewMovie) -> ApiResult<Movie> {
    if new.title.trim().is_empty() {
        return Err(ApiError::BadRequest("Title must not be empty".to_string()));
    }
    if users::get_user_by_id(pool, new.user_id).await?.is_none() {
        return Err(ApiError::NotFound(format!("User {} not found", new.user_id)));
    }

    let movie = movies::insert_movie(pool, &new).await?;
    tracing::info!(
        movie_id = movie.id,
        user_id = movie.user_id,
        title = %movie.title,
        "Movie added manually"
    );
    Ok(movie)
}

/// Overwrite a movie's title; the movie must belong to the claimed user
pub async fn rename_movie(
    pool: &SqlitePool,
    user_id: i64,
    movie_id: i64,
    new_title: &str,
) -> ApiResult<Movie> {
    let new_title = new_title.trim();
    if new_title.is_empty() {
        return Err(ApiError::BadRequest("Title must not be empty".to_string()));
    }

    if !movies::update_movie_title(pool, movie_id, user_id, new_title).await? {
        return Err(ApiError::NotFound(format!("Movie {} not found", movie_id)));
    }

    movies::get_movie_by_id(pool, movie_id)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Movie {} not found", movie_id)))
}

/// Delete a movie; a missing id is reported as not-found, never an error
pub async fn remove_movie(pool: &SqlitePool, user_id: i64, movie_id: i64) -> ApiResult<()> {
    if !movies::delete_movie(pool, movie_id, user_id).await? {
        return Err(ApiError::NotFound(format!("Movie {} not found", movie_id)));
    }
    tracing::info!(movie_id, user_id, "Movie deleted");
    Ok(())
}
