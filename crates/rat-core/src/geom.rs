//! Axis-aligned rectangles and containment predicates.
//!
//! Coordinates are integer arena pixels, top-left origin, `y` growing
//! downward.  Every collision question in the simulation reduces to two
//! predicates:
//!
//! - [`Rect::contains_point`] — is a point inside, strictly (`>`, `<`) or
//!   inclusively (`>=`, `<=`)?
//! - [`Rect::box_overlaps`] — does any of another box's four corners lie
//!   inside?
//!
//! The strict variant treats touching edges as "outside", which is what lets
//! a rat run flush along a wall.

/// An integer point in arena coordinates.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The four corners of a box.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Corners {
    pub nw: Point,
    pub ne: Point,
    pub sw: Point,
    pub se: Point,
}

impl Corners {
    /// Corners in `nw, ne, sw, se` order.
    #[inline]
    pub fn to_array(self) -> [Point; 4] {
        [self.nw, self.ne, self.sw, self.se]
    }
}

/// An axis-aligned rectangle: `x`, `y` is the top-left corner.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x:      i32,
    pub y:      i32,
    pub width:  i32,
    pub height: i32,
}

impl Rect {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// A `side × side` square at `(x, y)`.
    #[inline]
    pub const fn square(x: i32, y: i32, side: i32) -> Self {
        Self::new(x, y, side, side)
    }

    /// East edge (`x + width`).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    /// South edge (`y + height`).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    /// Centre point, rounded toward the top-left.
    #[inline]
    pub const fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// `true` if either dimension is zero or negative.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    pub fn corners(&self) -> Corners {
        Corners {
            nw: Point::new(self.x, self.y),
            ne: Point::new(self.right(), self.y),
            sw: Point::new(self.x, self.bottom()),
            se: Point::new(self.right(), self.bottom()),
        }
    }

    /// The same box shifted by `(dx, dy)`.
    #[inline]
    pub const fn translated(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Point-in-rectangle test.
    ///
    /// `inclusive = false` is the strict interior (edges are outside);
    /// `inclusive = true` uses closed bounds (edges are inside).
    pub fn contains_point(&self, p: Point, inclusive: bool) -> bool {
        if inclusive {
            p.x >= self.x && p.x <= self.right() && p.y >= self.y && p.y <= self.bottom()
        } else {
            p.x > self.x && p.x < self.right() && p.y > self.y && p.y < self.bottom()
        }
    }

    /// `true` if any of `corners` lies inside `self` under the given
    /// inclusivity.  This is the wall-collision predicate.
    pub fn box_overlaps(&self, corners: &Corners, inclusive: bool) -> bool {
        corners
            .to_array()
            .into_iter()
            .any(|p| self.contains_point(p, inclusive))
    }

    /// `true` if the open interiors of the two boxes share any area.
    ///
    /// Unlike [`box_overlaps`](Self::box_overlaps) this also catches boxes
    /// of equal size overlapping along one axis, where every corner lands
    /// exactly on an edge.  Used for rat-to-rat encounters.
    pub fn intersects(&self, other: &Rect) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// `true` if `self` lies fully inside `bounds` (closed bounds: sharing an
    /// edge with `bounds` is inside).
    pub fn within(&self, bounds: &Rect) -> bool {
        self.x >= bounds.x
            && self.y >= bounds.y
            && self.right() <= bounds.right()
            && self.bottom() <= bounds.bottom()
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{},{} {}x{}]", self.x, self.y, self.width, self.height)
    }
}
