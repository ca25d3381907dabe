//! Blog service library
//! Re-exports modules for testing and integration

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod schema;

pub use config::Config;
pub use error::{AppError, Result};
