//! Error type shared by all modules of the crate.

use thiserror::Error as ThisError;

use crate::place::PlaceId;

#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("place {0} not found")]
    PlaceNotFound(PlaceId),
    #[error("duplicate place id {0}")]
    DuplicateId(PlaceId),
    #[error("distance between places {0} and {1} has not been set up")]
    NotLinked(PlaceId, PlaceId),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}
