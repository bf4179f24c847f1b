use thiserror::Error;

/// Error types for `RopeVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum RopeVecError {
    /// Index or insertion position is outside the valid bound
    #[error("Index out of range: index {index} is beyond vector length {length}")]
    OutOfRange {
        /// Index that was requested
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Operation needs at least one element
    #[error("Operation `{operation}` called on an empty vector")]
    EmptyContainer {
        /// Name of the operation that failed
        operation: &'static str,
    },
}
