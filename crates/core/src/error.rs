use crate::rating::{MAX_RATING, MIN_RATING};
use crate::store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Rating {0} is outside the accepted range {MIN_RATING} - {MAX_RATING}")]
    InvalidRating(f32),

    #[error("No movie found for title '{0}'")]
    NotFound(String),

    #[error("No movie found to assign a director to for title '{0}'")]
    UnknownTitle(String),

    #[error("A movie must be given a non-empty title")]
    MissingTitle,

    #[error("A movie titled '{0}' already exists")]
    DuplicateTitle(String),

    #[error("A director assignment must name the director")]
    MissingDirector,

    #[error("A director assignment must list at least one movie")]
    EmptyTitleList,

    #[error("Storage error: {0}")]
    Storage(#[from] StoreError),
}
