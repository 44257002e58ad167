use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored data is not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Store lock poisoned")]
    Poisoned,

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("Failed to read CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Item name must not be blank")]
    BlankName,

    #[error("Video URL must not be blank")]
    BlankUrl,

    #[error("Unrecognized expiry date: {0}")]
    InvalidExpiry(String),

    #[error("Quantity must be a positive number, got {0}")]
    InvalidQuantity(f64),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),
}
