pub mod client;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod forms;
pub mod models;
pub mod router;
pub mod store;
pub mod table;
pub mod ui;
pub mod validation;

pub use error::{AppError, Result};
