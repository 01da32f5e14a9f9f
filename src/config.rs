//! Tree configuration.

use crate::QuadTreeError;

/// Leaf capacity used when none is configured.
pub const DEFAULT_CAPACITY: usize = 1;

/// Settings shared by every node of a [`crate::QuadTree`].
///
/// With the `serde` feature enabled the config can be read from the host
/// application's own configuration files; a missing `capacity` falls back to
/// [`DEFAULT_CAPACITY`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct QuadTreeConfig {
    /// Points a leaf holds before it is split into four children.
    pub capacity: usize,
}

impl QuadTreeConfig {
    /// Returns the config with a different leaf capacity.
    ///
    /// # Example
    /// ```
    /// use quadforest::QuadTreeConfig;
    /// let config = QuadTreeConfig::default().with_capacity(8);
    /// assert_eq!(config.capacity, 8);
    /// ```
    #[must_use]
    pub const fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Checks the config can back a tree.
    ///
    /// # Errors
    /// Returns [`QuadTreeError::ZeroCapacity`] when `capacity` is 0.
    pub const fn validate(&self) -> Result<(), QuadTreeError> {
        if self.capacity == 0 {
            return Err(QuadTreeError::ZeroCapacity);
        }
        Ok(())
    }
}

impl Default for QuadTreeConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}
