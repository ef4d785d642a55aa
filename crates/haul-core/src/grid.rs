//! Integer grid coordinates and the two distance metrics the framework uses.
//!
//! Target selection ranks same-priority sinks by **Manhattan** distance
//! (`|dx| + |dy|`), the natural travel-time proxy on a 4/8-connected grid.
//! Action adjacency (withdraw/transfer/pickup range) uses **Chebyshev**
//! distance (`max(|dx|, |dy|)`) so diagonal neighbors count as adjacent.

/// A position on the simulation grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

impl GridPos {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance: `|dx| + |dy|`.
    #[inline]
    pub fn manhattan(self, other: GridPos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Chebyshev distance: `max(|dx|, |dy|)`.  Two cells are adjacent
    /// (action range 1) when this is ≤ 1.
    #[inline]
    pub fn chebyshev(self, other: GridPos) -> u32 {
        self.x.abs_diff(other.x).max(self.y.abs_diff(other.y))
    }

    /// One axis-aligned step toward `dest`.
    ///
    /// Moves along the axis with the larger remaining delta; on equal deltas
    /// the x axis wins.  Returns `self` unchanged if already at `dest`.
    /// Deterministic: the same inputs always produce the same step.
    pub fn step_toward(self, dest: GridPos) -> GridPos {
        let dx = dest.x - self.x;
        let dy = dest.y - self.y;
        if dx == 0 && dy == 0 {
            return self;
        }
        if dx.abs() >= dy.abs() {
            GridPos::new(self.x + dx.signum(), self.y)
        } else {
            GridPos::new(self.x, self.y + dy.signum())
        }
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
