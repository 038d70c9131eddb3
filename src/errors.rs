use thiserror::Error;

/// Precondition violations reported by [`Node`](crate::Node) operations.
///
/// All variants are local and recoverable: the tree is left unchanged whenever
/// one of them is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("child index {index} out of range for node with {len} children")]
    OutOfRange { index: usize, len: usize },

    #[error("invalid insertion index {index} for node with {len} children")]
    InvalidIndex { index: usize, len: usize },

    #[error("cycle detected: node is already reachable from the new child")]
    CycleDetected,
}

pub type TreeResult<T> = Result<T, TreeError>;
