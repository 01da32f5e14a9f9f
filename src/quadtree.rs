//! Point-region quadtree.
//!
//! Every node covers a fixed [`Range`]. A node is either a leaf holding up to
//! `capacity` points, or an internal node owning exactly four children that
//! split its range into equal quadrants and holding no points itself.
//!
//! - A leaf that overflows on insert is split, and its points are pushed
//!   down into the quadrant that contains them.
//! - An internal node whose four children are all empty leaves after a
//!   removal is merged back into an empty leaf.
//!
//! Points on an edge shared by several quadrants go to the first match in
//! [`Quadrant::ALL`] order (north-west, north-east, south-west, south-east).
//! Insert and remove only ever descend into that first match, so such a
//! point has a single home and cannot be stored twice.
//!
//! [`Quadrant::ALL`]: crate::Quadrant::ALL

use tracing::{debug, trace};

use crate::geometry::{Coordinate, Point, Range};
use crate::{QuadTreeConfig, QuadTreeError};

/// Quadtree over 2D points with membership and range queries.
///
/// # Example
/// ```
/// use quadforest::{QuadTree, Range};
///
/// let boundary = Range::new((0.0, 0.0), (10.0, 10.0));
/// let mut tree = QuadTree::new(boundary, 2)?;
///
/// assert!(tree.insert((1.0, 2.0)));
/// assert!(tree.insert((-1.0, 1.0)));
/// assert!(tree.insert((3.0, 4.0)));
/// assert!(!tree.insert((3.0, 4.0)), "duplicates are rejected");
/// assert!(!tree.insert((30.0, 4.0)), "outside the boundary");
///
/// let mut found = Vec::new();
/// tree.query(&Range::new((0.0, 0.0), (2.0, 2.0)), |p| found.push(*p));
/// assert_eq!(found.len(), 2);
/// assert!(tree.search((3.0, 4.0)));
/// # Ok::<(), quadforest::QuadTreeError>(())
/// ```
#[derive(Clone, Debug)]
pub struct QuadTree<T> {
    root: Node<T>,
    config: QuadTreeConfig,
    /// Number of stored points
    num_items: usize,
}

#[derive(Clone, Debug)]
struct Node<T> {
    /// Region this node is responsible for
    boundary: Range<T>,
    state: State<T>,
}

#[derive(Clone, Debug)]
enum State<T> {
    /// Points in insertion order
    Leaf(Vec<Point<T>>),
    /// Children in NW, NE, SW, SE order
    Internal(Box<[Node<T>; 4]>),
}

impl<T: Coordinate> QuadTree<T> {
    /// Creates an empty tree covering `boundary` whose leaves split once they
    /// hold more than `capacity` points.
    ///
    /// # Errors
    /// Returns [`QuadTreeError::ZeroCapacity`] for a capacity of 0 and
    /// [`QuadTreeError::NegativeHalfExtent`] for a boundary with a negative
    /// half extent.
    pub fn new(boundary: Range<T>, capacity: usize) -> Result<Self, QuadTreeError> {
        Self::with_config(boundary, QuadTreeConfig::default().with_capacity(capacity))
    }

    /// Creates an empty tree covering `boundary` with the given settings.
    ///
    /// # Errors
    /// Same as [`QuadTree::new`].
    pub fn with_config(boundary: Range<T>, config: QuadTreeConfig) -> Result<Self, QuadTreeError> {
        config.validate()?;
        if boundary.has_negative_extent() {
            return Err(QuadTreeError::NegativeHalfExtent);
        }
        Ok(Self {
            root: Node::leaf(boundary),
            config,
            num_items: 0,
        })
    }

    /// Region covered by the tree.
    #[inline]
    pub fn boundary(&self) -> Range<T> {
        self.root.boundary
    }

    /// Maximum number of points a leaf holds.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    /// Settings the tree was built with.
    #[inline]
    pub fn config(&self) -> QuadTreeConfig {
        self.config
    }

    /// Stores a point.
    ///
    /// Returns `false` without changing the tree when the point lies outside
    /// the boundary or is already stored. Also returns `false` when a full
    /// leaf cannot be split because no quadrant covers one of its points,
    /// which only happens for integer coordinates once a half extent no
    /// longer halves exactly.
    pub fn insert(&mut self, point: impl Into<Point<T>>) -> bool {
        let inserted = self.root.insert(point.into(), self.config.capacity);
        if inserted {
            self.num_items += 1;
        }
        inserted
    }

    /// Removes a point.
    ///
    /// Returns `false` when the point lies outside the boundary. Otherwise
    /// returns `true`, even if the point was not stored: reaching the leaf
    /// that would hold it counts as success. Use [`QuadTree::search`] first
    /// when the distinction matters.
    pub fn remove(&mut self, point: impl Into<Point<T>>) -> bool {
        match self.root.remove(&point.into()) {
            Some(removed) => {
                if removed {
                    self.num_items -= 1;
                }
                true
            }
            None => false,
        }
    }

    /// Returns true if the point is stored.
    pub fn search(&self, point: impl Into<Point<T>>) -> bool {
        self.root.search(&point.into())
    }

    /// Calls `visit` with every stored point inside `range`.
    ///
    /// Nodes whose boundary does not intersect `range` are skipped. Visit
    /// order follows the NW, NE, SW, SE traversal and insertion order within
    /// a leaf.
    pub fn query<F>(&self, range: &Range<T>, mut visit: F)
    where
        F: FnMut(&Point<T>),
    {
        self.root.query(range, &mut visit);
    }

    /// Appends every stored point inside `range` to `results`.
    ///
    /// `results` is not cleared first, so one vector can be reused across
    /// queries.
    pub fn query_points(&self, range: &Range<T>, results: &mut Vec<Point<T>>) {
        self.root.query(range, &mut |p: &Point<T>| results.push(*p));
    }

    /// Every stored point, in traversal order.
    pub fn points(&self) -> Vec<Point<T>> {
        let mut points = Vec::with_capacity(self.num_items);
        self.root.for_each(&mut |p: &Point<T>| points.push(*p));
        points
    }

    /// Removes every point and collapses the tree to a single empty leaf.
    pub fn clear(&mut self) {
        debug!(capacity = self.config.capacity, "clearing quadtree");
        self.root.state = State::Leaf(Vec::new());
        self.num_items = 0;
    }

    /// Number of stored points.
    #[inline]
    pub fn len(&self) -> usize {
        self.num_items
    }

    /// Returns true if no point is stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.num_items == 0
    }

    /// Returns true while the root has not been split.
    pub fn is_leaf(&self) -> bool {
        matches!(self.root.state, State::Leaf(_))
    }

    /// Number of levels; a tree that was never split has depth 1.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Number of nodes, internal and leaf.
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.root.leaf_count()
    }
}

impl<T: Coordinate> Node<T> {
    fn leaf(boundary: Range<T>) -> Self {
        Self {
            boundary,
            state: State::Leaf(Vec::new()),
        }
    }

    fn insert(&mut self, point: Point<T>, capacity: usize) -> bool {
        if !self.boundary.contains(&point) {
            return false;
        }
        match &mut self.state {
            State::Leaf(bucket) => {
                if bucket.contains(&point) {
                    return false;
                }
                bucket.push(point);
                if bucket.len() <= capacity {
                    return true;
                }
                match Self::split(&self.boundary, bucket, capacity) {
                    Some(children) => {
                        trace!(points = bucket.len(), capacity, "subdividing leaf");
                        self.state = State::Internal(children);
                        true
                    }
                    None => {
                        // drop the point just pushed, the leaf stays as it was
                        bucket.truncate(capacity);
                        debug!(capacity, "leaf cannot be subdivided, insert rejected");
                        false
                    }
                }
            }
            State::Internal(children) => children
                .iter_mut()
                .find(|c| c.boundary.contains(&point))
                .is_some_and(|c| c.insert(point, capacity)),
        }
    }

    /// Builds the four children of `boundary` holding `points`.
    ///
    /// Returns `None` if a point is not covered by any quadrant or a child
    /// cannot take it; the partial children are dropped.
    fn split(boundary: &Range<T>, points: &[Point<T>], capacity: usize) -> Option<Box<[Self; 4]>> {
        let mut children = Box::new(boundary.quadrants().map(Self::leaf));
        for point in points {
            let child = children.iter_mut().find(|c| c.boundary.contains(point))?;
            if !child.insert(*point, capacity) {
                return None;
            }
        }
        Some(children)
    }

    /// Returns `None` when no leaf covers `point`, otherwise whether the
    /// reached leaf actually held it.
    fn remove(&mut self, point: &Point<T>) -> Option<bool> {
        if !self.boundary.contains(point) {
            return None;
        }
        match &mut self.state {
            State::Leaf(bucket) => {
                let before = bucket.len();
                bucket.retain(|p| p != point);
                Some(bucket.len() < before)
            }
            State::Internal(children) => {
                let removed = children
                    .iter_mut()
                    .find(|c| c.boundary.contains(point))
                    .and_then(|c| c.remove(point))?;
                if children.iter().all(Self::is_empty_leaf) {
                    trace!("merging empty children");
                    self.state = State::Leaf(Vec::new());
                }
                Some(removed)
            }
        }
    }

    fn search(&self, point: &Point<T>) -> bool {
        if !self.boundary.contains(point) {
            return false;
        }
        match &self.state {
            State::Leaf(bucket) => bucket.contains(point),
            State::Internal(children) => children.iter().any(|c| c.search(point)),
        }
    }

    fn query<F>(&self, range: &Range<T>, visit: &mut F)
    where
        F: FnMut(&Point<T>),
    {
        if !range.intersects(&self.boundary) {
            return;
        }
        match &self.state {
            State::Leaf(bucket) => {
                for point in bucket.iter().filter(|p| range.contains(p)) {
                    visit(point);
                }
            }
            // children prune themselves
            State::Internal(children) => {
                for child in children.iter() {
                    child.query(range, visit);
                }
            }
        }
    }

    fn for_each<F>(&self, visit: &mut F)
    where
        F: FnMut(&Point<T>),
    {
        match &self.state {
            State::Leaf(bucket) => {
                for point in bucket {
                    visit(point);
                }
            }
            State::Internal(children) => {
                for child in children.iter() {
                    child.for_each(visit);
                }
            }
        }
    }

    fn is_empty_leaf(&self) -> bool {
        matches!(&self.state, State::Leaf(bucket) if bucket.is_empty())
    }

    fn depth(&self) -> usize {
        match &self.state {
            State::Leaf(_) => 1,
            State::Internal(children) => 1 + children.iter().map(Self::depth).max().unwrap_or(0),
        }
    }

    fn node_count(&self) -> usize {
        match &self.state {
            State::Leaf(_) => 1,
            State::Internal(children) => 1 + children.iter().map(Self::node_count).sum::<usize>(),
        }
    }

    fn leaf_count(&self) -> usize {
        match &self.state {
            State::Leaf(_) => 1,
            State::Internal(children) => children.iter().map(Self::leaf_count).sum(),
        }
    }
}
