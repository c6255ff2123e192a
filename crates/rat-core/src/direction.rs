//! Cardinal directions and a compact set type over them.

use std::fmt;

/// One of the four headings a rat can move in.
///
/// Declaration order (N, E, S, W) is the canonical iteration order used
/// everywhere a deterministic ordering is needed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    /// All four directions in canonical order.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Unit velocity sign `(dx, dy)`; `y` grows downward.
    #[inline]
    pub const fn sign(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East  => (1, 0),
            Direction::South => (0, 1),
            Direction::West  => (-1, 0),
        }
    }

    /// Displacement after one tick at `speed` pixels per tick.
    #[inline]
    pub const fn velocity(self, speed: i32) -> (i32, i32) {
        let (sx, sy) = self.sign();
        (sx * speed, sy * speed)
    }

    #[inline]
    pub const fn reverse(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East  => Direction::West,
            Direction::South => Direction::North,
            Direction::West  => Direction::East,
        }
    }

    /// The two headings on the other axis, in canonical order.
    #[inline]
    pub const fn perpendicular(self) -> [Direction; 2] {
        match self {
            Direction::North | Direction::South => [Direction::East, Direction::West],
            Direction::East | Direction::West   => [Direction::North, Direction::South],
        }
    }

    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::East | Direction::West)
    }

    /// Single-letter compass label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::North => "n",
            Direction::East  => "e",
            Direction::South => "s",
            Direction::West  => "w",
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── DirectionSet ──────────────────────────────────────────────────────────────

/// A set of [`Direction`]s stored as a 4-bit mask.
///
/// Iteration always yields members in canonical N, E, S, W order, which is
/// what makes "pick the k-th legal direction" reproducible under a seed.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct DirectionSet(u8);

impl DirectionSet {
    pub const EMPTY: DirectionSet = DirectionSet(0);
    pub const ALL: DirectionSet = DirectionSet(0b1111);

    #[inline]
    pub const fn empty() -> Self {
        Self::EMPTY
    }

    #[inline]
    pub fn insert(&mut self, d: Direction) {
        self.0 |= d.bit();
    }

    #[inline]
    pub fn remove(&mut self, d: Direction) {
        self.0 &= !d.bit();
    }

    #[inline]
    pub const fn contains(self, d: Direction) -> bool {
        self.0 & d.bit() != 0
    }

    #[inline]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn intersection(self, other: DirectionSet) -> DirectionSet {
        DirectionSet(self.0 & other.0)
    }

    /// `true` if `d` is the one and only member.
    #[inline]
    pub const fn is_only(self, d: Direction) -> bool {
        self.0 == d.bit()
    }

    /// Members in canonical order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }

    /// The `n`-th member in canonical order, if any.
    pub fn nth(self, n: usize) -> Option<Direction> {
        self.iter().nth(n)
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::EMPTY;
        for d in iter {
            set.insert(d);
        }
        set
    }
}

impl<const N: usize> From<[Direction; N]> for DirectionSet {
    fn from(dirs: [Direction; N]) -> Self {
        dirs.into_iter().collect()
    }
}

impl fmt::Debug for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl fmt::Display for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels: Vec<&str> = self.iter().map(Direction::as_str).collect();
        write!(f, "[{}]", labels.join(","))
    }
}
