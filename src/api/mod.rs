//! HTTP API handlers for moviweb

pub mod auth;
pub mod health;
pub mod movies;
pub mod ui;
pub mod users;

pub use auth::auth_middleware;
pub use health::health_routes;
pub use movies::{add_movie, delete_movie, list_movies, lookup_movie, rename_movie};
pub use ui::{serve_app_js, serve_index};
pub use users::{delete_user, list_users, register_user};
