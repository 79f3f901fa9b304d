//! Pure index arithmetic: periodic wrap, neighborhood cardinality, diagonal
//! predicates, and the flat-index <-> offset mapping for Moore and Von Neumann
//! neighborhoods in rank 1-3.
//!
//! Nothing here allocates beyond the `Vec<Coord>` returned by
//! `enumerate_offsets`, and nothing here touches a `Grid`: these are the total,
//! side-effect-free functions `NeighborhoodView` builds on.

/// A coordinate (or offset) in up to 3 dimensions. Only the first `rank`
/// entries are meaningful; the rest are `0`.
pub type Coord = [i64; 3];

/// Neighborhood shape: Moore (box) or Von Neumann (axial cross, engine
/// convention per the source: `2*rank*radius + 1`, not the textbook
/// definition for radius > 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NeighborhoodShape {
    VonNeumann,
    Moore,
}

impl Default for NeighborhoodShape {
    fn default() -> Self {
        Self::Moore
    }
}

/// Boundary policy.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Boundary {
    Periodic,
    Walled,
    CutOff,
}

impl Default for Boundary {
    fn default() -> Self {
        Self::Periodic
    }
}

/// Shape (rectangular lattice) descriptor for rank 1-3.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Shape {
    pub rank: usize,
    pub dims: [usize; 3],
}

impl Shape {
    pub fn new(rank: usize, dims: [usize; 3]) -> Self {
        debug_assert!((1..=3).contains(&rank));
        Self { rank, dims }
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.dims[..self.rank].iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Row-major flat index of `coord`. `coord` components must already be
    /// in `[0, dims[axis])`.
    pub fn to_index(&self, coord: &Coord) -> usize {
        let mut index = 0usize;
        for axis in 0..self.rank {
            index = index * self.dims[axis] + coord[axis] as usize;
        }
        index
    }

    /// Inverse of `to_index`.
    pub fn to_coord(&self, mut index: usize) -> Coord {
        let mut coord = [0i64; 3];
        for axis in (0..self.rank).rev() {
            let d = self.dims[axis];
            coord[axis] = (index % d) as i64;
            index /= d;
        }
        coord
    }
}

/// Periodic axis index: handles negative offsets uniformly.
#[inline]
pub fn wrap(i: i64, di: i64, d: usize) -> i64 {
    let d = d as i64;
    (((i + di) % d) + d) % d
}

/// Closed-form neighborhood cardinality for `rank`, `radius`, `shape`.
pub fn neighborhood_cardinality(rank: usize, radius: i64, shape: NeighborhoodShape) -> usize {
    match shape {
        NeighborhoodShape::Moore => (2 * radius + 1).pow(rank as u32) as usize,
        NeighborhoodShape::VonNeumann => (2 * (rank as i64) * radius + 1) as usize,
    }
}

/// 2D diagonal predicate: `(i, j)` is diagonal iff both offsets are nonzero.
#[inline]
pub fn is_diagonal_2d(i: i64, j: i64) -> bool {
    i != 0 && j != 0
}

/// 3D diagonal predicate, in the source's case-split form: when the axis-1
/// offset is zero, both remaining axes must be nonzero to count as diagonal;
/// otherwise either being nonzero is enough. Despite looking asymmetric this
/// is algebraically "at least two of the three offsets are nonzero", see
/// the Open Question resolution in DESIGN.md and the test below.
#[inline]
pub fn is_diagonal_3d(i: i64, j: i64, k: i64) -> bool {
    if i == 0 {
        j != 0 && k != 0
    } else {
        j != 0 || k != 0
    }
}

/// Flat index `q` in `[0, neighborhood_cardinality(rank, radius, shape))` to
/// an offset in `[-radius, radius]^rank`, in the canonical enumeration order.
pub fn flat_to_offset(q: usize, rank: usize, radius: i64, shape: NeighborhoodShape) -> Coord {
    match shape {
        NeighborhoodShape::Moore => moore_flat_to_offset(q, rank, radius),
        NeighborhoodShape::VonNeumann => von_neumann_flat_to_offset(q, rank, radius),
    }
}

/// All offsets for `(rank, radius, shape)`, in canonical order. Inverse of
/// `flat_to_offset` modulo iteration order, i.e. `enumerate_offsets(..)[q] ==
/// flat_to_offset(q, ..)` for every valid `q`.
pub fn enumerate_offsets(rank: usize, radius: i64, shape: NeighborhoodShape) -> Vec<Coord> {
    let n = neighborhood_cardinality(rank, radius, shape);
    (0..n)
        .map(|q| flat_to_offset(q, rank, radius, shape))
        .collect()
}

fn moore_flat_to_offset(q: usize, rank: usize, radius: i64) -> Coord {
    let f = (2 * radius + 1) as usize;
    let mut offset = [0i64; 3];
    for axis in 0..rank {
        let divisor = f.pow((rank - 1 - axis) as u32);
        let val = (q / divisor) % f;
        offset[axis] = val as i64 - radius;
    }
    offset
}

fn von_neumann_flat_to_offset(q: usize, rank: usize, radius: i64) -> Coord {
    let r = radius;
    let q = q as i64;
    match rank {
        1 => [q - r, 0, 0],
        2 => {
            if q < r {
                [q - r, 0, 0]
            } else if q < r + (2 * r + 1) {
                let local = q - r;
                [0, local - r, 0]
            } else {
                let local = q - (r + (2 * r + 1));
                [local + 1, 0, 0]
            }
        }
        3 => {
            let c1 = r;
            let c2 = 2 * r;
            let c3 = c2 + (2 * r + 1);
            let c4 = c3 + r;
            if q < c1 {
                [q - r, 0, 0]
            } else if q < c2 {
                let local = q - c1;
                [0, local - r, 0]
            } else if q < c3 {
                let local = q - c2;
                [0, 0, local - r]
            } else if q < c4 {
                let local = q - c3;
                [0, local + 1, 0]
            } else {
                let local = q - c4;
                [local + 1, 0, 0]
            }
        }
        _ => unreachable!("rank must be 1, 2, or 3"),
    }
}
