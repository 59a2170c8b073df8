use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GlossaryError {
    // caller broke the 0 <= position < len contract
    #[error("Invalid position {position} for text of length {len}")]
    InvalidArgument { position: usize, len: usize },

    #[error("Definition not found: {term:?}")]
    NotFound { term: String },

    #[error("Definition has no matching term: {term:?}")]
    Unlisted { term: String },
}
