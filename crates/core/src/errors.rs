use thiserror::Error;

#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Malformed time slot: {0}")]
    MalformedSlot(String),

    #[error("Invalid booking date: {0}")]
    InvalidDate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] eyre::Report),
}

pub type BookingResult<T> = Result<T, BookingError>;
