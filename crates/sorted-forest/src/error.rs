use thiserror::Error;

/// Errors raised by tree operations, rotations and iteration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("absent value")]
    AbsentValue,
    #[error("null reference")]
    NullReference,
    #[error("not directly related")]
    NotDirectlyRelated,
    #[error("no more elements to visit")]
    Exhausted,
    #[error("tree was modified after the cursor was created")]
    StaleCursor,
}

impl Error {
    /// `true` for the errors caused by a bad argument (absent value or a
    /// malformed rotation pair).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Error::AbsentValue | Error::NullReference | Error::NotDirectlyRelated
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
