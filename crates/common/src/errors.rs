use std::fmt::Debug;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("mapping dataset error: {0}")]
    Mapping(#[source] anyhow::Error),
    #[error("profile error: {0}")]
    Profile(#[source] anyhow::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn mapping(err: impl Into<anyhow::Error>) -> Self {
        Self::Mapping(err.into())
    }

    pub fn profile(err: impl Into<anyhow::Error>) -> Self {
        Self::Profile(err.into())
    }
}
