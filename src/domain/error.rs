use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Todo cannot be empty!")]
    Empty,
    #[error("Todo already exists!")]
    Duplicate,
}
