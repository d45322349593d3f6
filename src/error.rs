#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    /// A dimension of the instance does not fit the configured grid.
    #[error("{field} = {value} exceeds the configured maximum of {max}")]
    CapacityExceeded {
        field: &'static str,
        value: usize,
        max: usize,
    },
    #[error("could not allocate a grid of {cells} cells")]
    OutOfMemory { cells: usize },
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl SolveError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        SolveError::InvalidInput(message.into())
    }

    pub const fn is_capacity(&self) -> bool {
        matches!(self, SolveError::CapacityExceeded { .. })
    }
}
