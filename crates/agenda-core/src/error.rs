//! Error types for agenda-core operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgendaError {
    /// A clock string was empty or not parseable as `HH:MM`.
    #[error("Invalid time format: {0:?}")]
    InvalidTimeFormat(String),
}

pub type Result<T> = std::result::Result<T, AgendaError>;
