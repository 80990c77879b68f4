//! Restaurants, pizzas, and the prices restaurants sell them at, served as JSON over HTTP.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::Config;
pub use error::{AppError, ConfigError};
pub use routes::{app, common_routes, resource_routes};
pub use service::CrudService;
pub use state::AppState;
pub use store::{clear_tables, connect, ensure_tables};
