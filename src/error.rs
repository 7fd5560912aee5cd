use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error(
        "flag buffer holds {len} records but capacity is {max_size}; \
         buffer was over capacity before this insert ran"
    )]
    InvariantViolation { len: usize, max_size: usize },

    #[error("flag buffer capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
