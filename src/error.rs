use thiserror::Error;

pub type Result<T> = std::result::Result<T, PairError>;

#[derive(Debug, Error)]
pub enum PairError {
    #[error("token cursor is inconsistent at offset {offset}: {detail}")]
    InconsistentCursor { offset: usize, detail: String },

    #[error("offset {offset} is outside the buffer (length {len})")]
    OffsetOutOfBounds { offset: usize, len: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
