//! # quadforest - Point-Region Quadtree
//!
//! A Rust library providing a point-region quadtree for 2D points: membership
//! tests and axis-aligned range queries over a space that is split into
//! quadrants on demand.
//!
//! ## Features
//!
//! - **Adaptive Subdivision**: Leaves split into four quadrants when they overflow
//! - **Automatic Merging**: Emptied quadrants collapse back into their parent
//! - **Range Queries**: Callback based retrieval of every point inside a rectangle
//! - **Generic Coordinates**: Works with any signed integer or float type
//!
//! ## Quick Start
//!
//! ```rust
//! use quadforest::prelude::*;
//!
//! // A 20x20 area centered on the origin, two points per leaf
//! let boundary = Range::new((0.0, 0.0), (10.0, 10.0));
//! let mut tree = QuadTree::new(boundary, 2)?;
//!
//! tree.insert((1.0, 2.0));
//! tree.insert((-1.0, 1.0));
//! tree.insert((3.0, 4.0));
//! tree.insert((-4.0, 3.0));
//!
//! // Membership
//! assert!(tree.search((-4.0, 3.0)));
//! assert!(!tree.search((0.0, 0.0)));
//!
//! // Every point within 2 units of the origin on both axes
//! let mut results = Vec::new();
//! tree.query_points(&Range::new((0.0, 0.0), (2.0, 2.0)), &mut results);
//! println!("Found {} points: {:?}", results.len(), results);
//! // Output: Found 2 points: [Point { x: -1.0, y: 1.0 }, Point { x: 1.0, y: 2.0 }]
//! assert_eq!(results.len(), 2);
//! # Ok::<(), QuadTreeError>(())
//! ```
//!
//! ## How It Works
//!
//! Each node covers a rectangle stored as a center and a half extent. A leaf
//! keeps its points in a small vector. Once it holds more points than the
//! configured capacity it becomes an internal node with four children, each
//! covering one quadrant, and hands its points down to them. Removing points
//! reverses this: when all four children of a node end up as empty leaves the
//! node becomes a leaf again.
//!
//! Range queries skip every node whose rectangle does not touch the query
//! rectangle, so only the leaves near the queried area are scanned.
//!
//! The tree is a plain owned structure: mutation needs `&mut self`, and
//! callers sharing one tree across threads wrap it in a lock.

pub mod config;
pub mod error;
pub mod geometry;
pub mod prelude;
pub mod quadtree;

pub use config::{DEFAULT_CAPACITY, QuadTreeConfig};
pub use error::QuadTreeError;
pub use geometry::{Coordinate, Point, Quadrant, Range};
pub use quadtree::QuadTree;

mod comparison_tests;
mod component_tests_i32;
