use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("unknown blood type: {0}")]
    UnknownBloodType(String),
    #[error("invalid donor id '{value}': {reason}")]
    InvalidDonorId { value: String, reason: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
