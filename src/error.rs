//! Quadtree error types.

use thiserror::Error;

/// Errors raised when a [`crate::QuadTree`] is configured incorrectly.
///
/// Tree operations themselves never fail with an error: an out of bounds or
/// duplicate point is reported through their `bool` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum QuadTreeError {
    /// A leaf must be able to hold at least one point.
    #[error("Leaf capacity must be at least 1")]
    ZeroCapacity,

    /// The boundary half extent is negative on at least one axis.
    #[error("Boundary half extent must be non-negative on both axes")]
    NegativeHalfExtent,
}
