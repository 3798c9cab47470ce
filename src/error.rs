//! Grid Errors
//!
//! Failures of layout lookups and configuration validation.

/// Common result type for grid operations
pub type GridResult<T> = Result<T, GridError>;

/// Grid-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// Index outside `1..=items`
    OutOfRange { index: u32, items: u32 },
    /// Chart has no cell in collapsed mode
    Unplaced(u32),
    InvalidConfig(String),
}

impl std::fmt::Display for GridError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GridError::OutOfRange { index, items } => {
                write!(f, "Chart {} out of range 1..={}", index, items)
            }
            GridError::Unplaced(index) => write!(f, "Chart {} has no collapsed slot", index),
            GridError::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
        }
    }
}

impl std::error::Error for GridError {}

impl From<serde_json::Error> for GridError {
    fn from(err: serde_json::Error) -> Self {
        GridError::InvalidConfig(err.to_string())
    }
}
