use mapping::MappingError;

#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error(transparent)]
    Mapping(#[from] MappingError),
}

impl PredictionError {
    pub fn is_unsupported_platform(&self) -> bool {
        matches!(self, Self::Mapping(MappingError::UnsupportedPlatform(_)))
    }
}

pub type Result<T> = std::result::Result<T, PredictionError>;
