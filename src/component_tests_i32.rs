//! Component tests for QuadTree<i32>
//!
//! Integer coordinates halve with truncation, so these tests cover both the
//! power-of-two boundaries that split cleanly and the small extents where a
//! split cannot place every point.
