use crate::codec::EncodeError;
use thiserror::Error;

/// Bad caller input on `add`/`update`. Nothing is written when one of these is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Product ID must be non-negative.")]
    NegativeId,

    #[error("Product name must not be empty.")]
    EmptyName,

    #[error("Quantity must be non-negative.")]
    NegativeQuantity,

    #[error("Price must be non-negative.")]
    NegativePrice,

    #[error("Price must be a finite number.")]
    NonFinitePrice,
}

#[derive(Error, Debug)]
pub enum StockError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Product with ID {0} already exists.")]
    DuplicateId(i64),

    #[error("Product ID {0} not found.")]
    NotFound(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, StockError>;
