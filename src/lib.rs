pub mod app;
pub mod cli;
pub mod database;
pub mod dtos;
pub mod error;
pub mod handlers;
pub mod models;
pub mod queries;
pub mod routes;
pub mod schema;
pub mod state;

pub use error::{AppError, Result};
pub use state::AppState;
