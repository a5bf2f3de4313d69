use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Please select at least one character type")]
    NoCharacterClassSelected,
    #[error("Password length {length} is outside the allowed range {min}..={max}")]
    LengthOutOfRange {
        length: usize,
        min: usize,
        max: usize,
    },
    #[error("Invalid length bounds: minimum {min} exceeds maximum {max}")]
    InvalidLengthBounds { min: usize, max: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}
