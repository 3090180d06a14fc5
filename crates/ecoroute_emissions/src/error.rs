use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EmissionsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}
