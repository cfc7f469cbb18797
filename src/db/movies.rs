//! Movie database operations
//!
//! Every movie belongs to exactly one user. Mutations that take a user id
//! are scoped to that owner so callers cannot touch another user's rows.

use anyhow::Result;
use serde::Serialize;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

/// Stored movie record
#[derive(Debug, Clone, Serialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub publication_year: Option<i64>,
    pub genre: Option<String>,
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
    pub director: Option<String>,
    pub runtime: Option<String>,
    pub user_id: i64,
}

/// Fields for a movie that has not been persisted yet
#[derive(Debug, Clone)]
pub struct NewMovie {
    pub title: String,
    pub publication_year: Option<i64>,
    pub genre: Option<String>,
    pub rating: Option<f64>,
    pub poster_url: Option<String>,
    pub director: Option<String>,
    pub runtime: Option<String>,
    pub user_id: i64,
}

fn movie_from_row(row: &SqliteRow) -> Movie {
    Movie {
        id: row.get("id"),
        title: row.get("title"),
        publication_year: row.get("publication_year"),
        genre: row.get("genre"),
        rating: row.get("rating"),
        poster_url: row.get("poster_url"),
        director: row.get("director"),
        runtime: row.get("runtime"),
        user_id: row.get("user_id"),
    }
}

/// Insert a movie in a single transaction and return the stored record
///
/// On any failure the transaction rolls back; no partial row is left behind.
pub async fn insert_movie(pool: &SqlitePool, movie: &NewMovie) -> Result<Movie> {
    let mut tx = pool.begin().await?;

    let result = sqlx::query(
        r#"
        INSERT INTO movies (
            title, publication_year, genre, rating,
            poster_url, director, runtime, user_id
        ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&movie.title)
    .bind(movie.publication_year)
    .bind(&movie.genre)
    .bind(movie.rating)
    .bind(&movie.poster_url)
    .bind(&movie.director)
    .bind(&movie.runtime)
    .bind(movie.user_id)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Movie {
        id: result.last_insert_rowid(),
        title: movie.title.clone(),
        publication_year: movie.publication_year,
        genre: movie.genre.clone(),
        rating: movie.rating,
        poster_url: movie.poster_url.clone(),
        director: movie.director.clone(),
        runtime: movie.runtime.clone(),
        user_id: movie.user_id,
    })
}

/// Load movie by id; None when no row matches
pub async fn get_movie_by_id(pool: &SqlitePool, movie_id: i64) -> Result<Option<Movie>> {
    let row = sqlx::query(
        r#"
        SELECT id, title, publication_year, genre, rating,
               poster_url, director, runtime, user_id
        FROM movies
        WHERE id = ?
        "#,
    )
    .bind(movie_id)
    .fetch_optional(pool)
    .await?;

    Ok(row.map(|row| movie_from_row(&row)))
}

/// List all movies owned by a user; empty when the user has none (or doesn't exist)
pub async fn list_movies_by_user(pool: &SqlitePool, user_id: i64) -> Result<Vec<Movie>> {
    let rows = sqlx::query(
        r#"
        SELECT id, title, publication_year, genre, rating,
               poster_url, director, runtime, user_id
        FROM movies
        WHERE user_id = ?
        ORDER BY title, id
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.iter().map(movie_from_row).collect())
}

/// Overwrite a movie's title, scoped to its owner. Returns false when no row matched.
pub async fn update_movie_title(
    pool: &SqlitePool,
    movie_id: i64,
    user_id: i64,
    new_title: &str,
) -> Result<bool> {
    let result = sqlx::query("UPDATE movies SET title = ? WHERE id = ? AND user_id = ?")
        .bind(new_title)
        .bind(movie_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Delete movie by id, scoped to its owner. Returns false when no row matched.
pub async fn delete_movie(pool: &SqlitePool, movie_id: i64, user_id: i64) -> Result<bool> {
    let result = sqlx::query("DELETE FROM movies WHERE id = ? AND user_id = ?")
        .bind(movie_id)
        .bind(user_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
