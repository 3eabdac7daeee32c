//! Fixed-size 2D grid dimensions and row-major neighbour addressing.
//!
//! Both engines store their state as flat row-major buffers
//! (`index = y * width + x`) and look neighbours up through
//! [`GridDims::neighbour`], so the stencil and the agent neighbourhood
//! share one definition of wrap and clamp.

use crate::edge::EdgeBehavior;
use crate::error::ConfigError;

/// The eight Moore-neighbourhood offsets as `(dx, dy)`: W, E, N, S, NW, NE, SW, SE.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Resolve a single axis value under the given edge behavior.
///
/// `Wrap` uses Euclidean modulo, so large negative offsets still land
/// inside `[0, len)`. `Clamp` pins the value to `[0, len - 1]`.
/// `len` must be non-zero.
pub fn resolve_axis(val: i64, len: u32, edge: EdgeBehavior) -> u32 {
    let n = i64::from(len);
    if (0..n).contains(&val) {
        return val as u32;
    }
    match edge {
        EdgeBehavior::Wrap => val.rem_euclid(n) as u32,
        EdgeBehavior::Clamp => val.clamp(0, n - 1) as u32,
    }
}

/// Width and height of a non-empty grid.
///
/// Cells are addressed by `(x, y)` with `0 <= x < width` and
/// `0 <= y < height`, flattened row-major.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridDims {
    width: u32,
    height: u32,
}

impl GridDims {
    /// Maximum size of either axis. Offsets are applied in signed
    /// arithmetic, so each axis must fit in an `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create grid dimensions.
    ///
    /// Returns `Err(ConfigError::EmptyGrid)` if either dimension is 0, or
    /// `Err(ConfigError::DimensionTooLarge)` if an axis exceeds
    /// [`MAX_DIM`](Self::MAX_DIM) or the cell count does not fit a `usize`.
    pub fn new(width: u32, height: u32) -> Result<Self, ConfigError> {
        if width == 0 || height == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        for (name, value) in [("width", width), ("height", height)] {
            if value > Self::MAX_DIM {
                return Err(ConfigError::DimensionTooLarge {
                    name,
                    value: u64::from(value),
                    max: u64::from(Self::MAX_DIM),
                });
            }
        }
        if (width as usize).checked_mul(height as usize).is_none() {
            return Err(ConfigError::DimensionTooLarge {
                name: "cell_count",
                value: u64::from(width) * u64::from(height),
                max: usize::MAX as u64,
            });
        }
        Ok(Self { width, height })
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total number of cells, `width * height`.
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Row-major flat index of `(x, y)`.
    pub fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(x < self.width && y < self.height);
        y as usize * self.width as usize + x as usize
    }

    /// Inverse of [`index`](Self::index).
    pub fn coords(&self, index: usize) -> (u32, u32) {
        let w = self.width as usize;
        ((index % w) as u32, (index / w) as u32)
    }

    /// The centre cell, `(floor(width / 2), floor(height / 2))`.
    pub fn centre(&self) -> (u32, u32) {
        (self.width / 2, self.height / 2)
    }

    /// Coordinates of the cell at offset `(dx, dy)` from `(x, y)`.
    pub fn neighbour(&self, x: u32, y: u32, dx: i32, dy: i32, edge: EdgeBehavior) -> (u32, u32) {
        let nx = resolve_axis(i64::from(x) + i64::from(dx), self.width, edge);
        let ny = resolve_axis(i64::from(y) + i64::from(dy), self.height, edge);
        (nx, ny)
    }

    /// Flat index of the cell at offset `(dx, dy)` from `(x, y)`.
    pub fn neighbour_index(&self, x: u32, y: u32, dx: i32, dy: i32, edge: EdgeBehavior) -> usize {
        let (nx, ny) = self.neighbour(x, y, dx, dy, edge);
        self.index(nx, ny)
    }

    /// Flat indices of the eight Moore neighbours of `index`.
    ///
    /// On grids narrower than three cells some neighbours coincide (or
    /// are the cell itself); they are still reported once per offset.
    pub fn moore_indices(&self, index: usize, edge: EdgeBehavior) -> [usize; 8] {
        let (x, y) = self.coords(index);
        MOORE_OFFSETS.map(|(dx, dy)| self.neighbour_index(x, y, dx, dy, edge))
    }
}
