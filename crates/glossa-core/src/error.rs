#[derive(Debug, thiserror::Error, PartialEq)]
pub enum LookupError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
