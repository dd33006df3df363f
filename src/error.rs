use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RemoteError {
    #[error("invalid receiver index {index}, expected less than {capacity}")]
    InvalidIndex { index: usize, capacity: usize },
}
