//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use quadforest::prelude::*;
//! ```

pub use crate::{Point, QuadTree, QuadTreeConfig, QuadTreeError, Range};
