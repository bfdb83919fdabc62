pub mod config;
pub mod errors;
pub mod logging;
pub mod text;

pub use crate::config::{AppConfig, EngineConfig};
pub use crate::errors::{AppError, Result};
