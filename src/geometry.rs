//! Points, axis-aligned ranges and the quadrant split.
//!
//! A [`Range`] is stored in center / half-extent form. Both predicates use
//! closed intervals, so a point lying on an edge is inside the range and two
//! ranges that only touch along an edge intersect.

use num_traits::{Bounded, Signed};

/// Numeric type usable as a coordinate.
///
/// Any signed integer or float qualifies. Comparisons are exact; no epsilon is
/// applied anywhere in the crate.
pub trait Coordinate: Signed + Bounded + PartialOrd + Copy {
    /// Returns `self / 2`.
    #[inline]
    #[must_use]
    fn halve(self) -> Self {
        self / (Self::one() + Self::one())
    }

    /// Returns `self - half`, clamped to [`Bounded::min_value`].
    ///
    /// `half` must be non-negative.
    #[inline]
    #[must_use]
    fn lower_edge(self, half: Self) -> Self {
        if self < Self::zero() && half > self - Self::min_value() {
            Self::min_value()
        } else {
            self - half
        }
    }

    /// Returns `self + half`, clamped to [`Bounded::max_value`].
    ///
    /// `half` must be non-negative.
    #[inline]
    #[must_use]
    fn upper_edge(self, half: Self) -> Self {
        if self > Self::zero() && half > Self::max_value() - self {
            Self::max_value()
        } else {
            self + half
        }
    }
}

impl<T: Signed + Bounded + PartialOrd + Copy> Coordinate for T {}

/// A 2D point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point<T> {
    /// Horizontal coordinate.
    pub x: T,
    /// Vertical coordinate, growing towards north.
    pub y: T,
}

impl<T> Point<T> {
    /// Creates a point from its coordinates.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }
}

impl<T> From<[T; 2]> for Point<T> {
    fn from([x, y]: [T; 2]) -> Self {
        Self { x, y }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Self { x, y }
    }
}

/// One of the four equal parts a node boundary is split into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[expect(clippy::exhaustive_enums, reason = "a plane has exactly four quadrants")]
pub enum Quadrant {
    /// West half, north half.
    NorthWest,
    /// East half, north half.
    NorthEast,
    /// West half, south half.
    SouthWest,
    /// East half, south half.
    SouthEast,
}

impl Quadrant {
    /// All quadrants in placement priority order.
    ///
    /// A point on an edge shared by several quadrants belongs to the first
    /// one in this list that contains it.
    pub const ALL: [Self; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthWest,
        Self::SouthEast,
    ];
}

/// Axis-aligned box given by its center and per-axis half extent.
///
/// The half extent must be non-negative on both axes; [`crate::QuadTree`]
/// rejects boundaries that violate this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Range<T> {
    origin: Point<T>,
    half_extent: Point<T>,
}

impl<T: Coordinate> Range<T> {
    /// Creates a range centered on `origin` reaching `half_extent` away on
    /// each axis.
    ///
    /// # Example
    /// ```
    /// use quadforest::{Point, Range};
    /// let range = Range::new(Point::new(0.0, 0.0), Point::new(10.0, 5.0));
    /// assert!(range.contains(&Point::new(10.0, -5.0)));
    /// assert!(!range.contains(&Point::new(0.0, 5.5)));
    /// ```
    #[inline]
    pub fn new(origin: impl Into<Point<T>>, half_extent: impl Into<Point<T>>) -> Self {
        Self {
            origin: origin.into(),
            half_extent: half_extent.into(),
        }
    }

    /// Center of the range.
    #[inline]
    pub fn origin(&self) -> Point<T> {
        self.origin
    }

    /// Half width and half height of the range.
    #[inline]
    pub fn half_extent(&self) -> Point<T> {
        self.half_extent
    }

    /// Moves the range to a new center, keeping its extent.
    #[inline]
    pub fn set_origin(&mut self, origin: impl Into<Point<T>>) {
        self.origin = origin.into();
    }

    /// Resizes the range around its current center.
    #[inline]
    pub fn set_half_extent(&mut self, half_extent: impl Into<Point<T>>) {
        self.half_extent = half_extent.into();
    }

    /// South-west corner.
    ///
    /// Edges past the coordinate type's range are clamped to its minimum.
    #[inline]
    pub fn min(&self) -> Point<T> {
        Point::new(
            self.origin.x.lower_edge(self.half_extent.x),
            self.origin.y.lower_edge(self.half_extent.y),
        )
    }

    /// North-east corner.
    ///
    /// Edges past the coordinate type's range are clamped to its maximum.
    #[inline]
    pub fn max(&self) -> Point<T> {
        Point::new(
            self.origin.x.upper_edge(self.half_extent.x),
            self.origin.y.upper_edge(self.half_extent.y),
        )
    }

    /// Returns true if the point lies inside the range or on its edge.
    #[inline]
    pub fn contains(&self, point: &Point<T>) -> bool {
        let (min, max) = (self.min(), self.max());
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }

    /// Returns true if the two ranges overlap or touch.
    #[inline]
    pub fn intersects(&self, other: &Self) -> bool {
        let (min, max) = (self.min(), self.max());
        let (other_min, other_max) = (other.min(), other.max());
        min.x <= other_max.x && max.x >= other_min.x && min.y <= other_max.y && max.y >= other_min.y
    }

    /// The part of this range covered by `quadrant`.
    ///
    /// The child is centered half way between this center and the matching
    /// corner, with both half extents halved.
    pub fn quadrant(&self, quadrant: Quadrant) -> Self {
        let dx = self.half_extent.x.halve();
        let dy = self.half_extent.y.halve();
        let (x, y) = (self.origin.x, self.origin.y);
        let origin = match quadrant {
            Quadrant::NorthWest => Point::new(x.lower_edge(dx), y.upper_edge(dy)),
            Quadrant::NorthEast => Point::new(x.upper_edge(dx), y.upper_edge(dy)),
            Quadrant::SouthWest => Point::new(x.lower_edge(dx), y.lower_edge(dy)),
            Quadrant::SouthEast => Point::new(x.upper_edge(dx), y.lower_edge(dy)),
        };
        Self {
            origin,
            half_extent: Point::new(dx, dy),
        }
    }

    /// All four quadrants, in [`Quadrant::ALL`] order.
    pub fn quadrants(&self) -> [Self; 4] {
        Quadrant::ALL.map(|q| self.quadrant(q))
    }

    pub(crate) fn has_negative_extent(&self) -> bool {
        self.half_extent.x < T::zero() || self.half_extent.y < T::zero()
    }
}
