use std::result;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid argument: `{0}`")]
    InvalidArgument(String),

    #[error("The iterator has no further element")]
    Exhausted,

    #[error("Cannot remove from a `{0}`")]
    Unsupported(&'static str),

    // Removal on a removable iterator whose position does not name a live slot.
    #[error("No current element at position `{position:?}` in a container of size `{size}`")]
    NoCurrentElement { position: Option<usize>, size: usize },
}

pub type Result<T> = result::Result<T, Error>;
