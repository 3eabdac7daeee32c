//! Initial `B` seed patterns.
//!
//! Seeding is split in two: a [`SeedPattern`] names a family of shapes
//! and [`SeedPattern::resolve`] draws that family's random parameters
//! (radius jitter, rotation, noise cells) into a concrete [`SeedShape`].
//! [`SeedShape::paint`] then rasterizes the shape deterministically, so
//! the same shape always paints the same cells.

use crate::interp::bilinear_upscale;
use rand::Rng;
use smallvec::{smallvec, SmallVec};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;
use tessera_core::{GridDims, SeedError};

/// Seed radius used when a caller does not pick one.
pub const DEFAULT_SEED_RADIUS: f64 = 5.0;

/// Low-res noise cells above this uniform draw become 1.0.
const NOISE_THRESHOLD: f64 = 0.8;

/// A named family of seed shapes.
///
/// All shapes are centred on the grid centre
/// `(floor(width / 2), floor(height / 2))` except [`Triple`](Self::Triple)
/// and [`Random`](Self::Random).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SeedPattern {
    /// Disk of radius `r`.
    Circle,
    /// Three disks of radius `r` at a quarter, half and three quarters
    /// of the width.
    Triple,
    /// Bilinear-upscaled coarse Bernoulli(0.2) noise over the whole grid.
    #[default]
    Random,
    /// Axis-aligned ellipse with radii `r * (0.5 + U)` per axis.
    RandomOval,
    /// Axis-aligned rectangle with half-extents `floor(r * (0.5 + U))`.
    RandomRectangle,
    /// Disk of radius `r * (1 + 4U)`.
    RandomCircle,
    /// Disk of radius `r * (1 + U)`.
    RandomCircleSmall,
    /// A "+" of arms `20r` long and `0.2r` wide, rotated by `U * pi`.
    RandomCross,
    /// Bands `4r` wide at a random angle.
    RandomStripes,
    /// Bands `r` wide at a random angle.
    RandomThinStripes,
    /// Bands `4r` wide at a random angle.
    RandomThickStripes,
    /// Equilateral triangle, circumradius `r * (0.5 + U)`, random rotation.
    RandomTriangle,
    /// Square, half-side `r * (0.5 + U)`, random rotation.
    RandomSquare,
}

impl SeedPattern {
    /// Every pattern, in declaration order.
    pub const ALL: [SeedPattern; 13] = [
        SeedPattern::Circle,
        SeedPattern::Triple,
        SeedPattern::Random,
        SeedPattern::RandomOval,
        SeedPattern::RandomRectangle,
        SeedPattern::RandomCircle,
        SeedPattern::RandomCircleSmall,
        SeedPattern::RandomCross,
        SeedPattern::RandomStripes,
        SeedPattern::RandomThinStripes,
        SeedPattern::RandomThickStripes,
        SeedPattern::RandomTriangle,
        SeedPattern::RandomSquare,
    ];

    /// The string name accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            SeedPattern::Circle => "circle",
            SeedPattern::Triple => "triple",
            SeedPattern::Random => "random",
            SeedPattern::RandomOval => "random_oval",
            SeedPattern::RandomRectangle => "random_rectangle",
            SeedPattern::RandomCircle => "random_circle",
            SeedPattern::RandomCircleSmall => "random_circle_small",
            SeedPattern::RandomCross => "random_cross",
            SeedPattern::RandomStripes => "random_stripes",
            SeedPattern::RandomThinStripes => "random_thin_stripes",
            SeedPattern::RandomThickStripes => "random_thick_stripes",
            SeedPattern::RandomTriangle => "random_triangle",
            SeedPattern::RandomSquare => "random_square",
        }
    }

    /// Draw this pattern's random parameters and fix its geometry for a
    /// grid of the given dimensions.
    pub fn resolve<R: Rng>(self, dims: GridDims, radius: f64, rng: &mut R) -> SeedShape {
        let (cx, cy) = dims.centre();
        let centre = (f64::from(cx), f64::from(cy));

        match self {
            SeedPattern::Circle => SeedShape::Disks {
                centres: smallvec![centre],
                radius,
            },
            SeedPattern::Triple => {
                let spacing = f64::from(dims.width() / 4);
                SeedShape::Disks {
                    centres: (1..=3u32).map(|i| (f64::from(i) * spacing, centre.1)).collect(),
                    radius,
                }
            }
            SeedPattern::Random => {
                let longest = f64::from(dims.width().max(dims.height()));
                let side = (longest.sqrt().floor() as usize).max(1);
                let cells = (0..side * side)
                    .map(|_| {
                        if rng.random::<f64>() > NOISE_THRESHOLD {
                            1.0
                        } else {
                            0.0
                        }
                    })
                    .collect();
                SeedShape::Noise { side, cells }
            }
            SeedPattern::RandomOval => {
                let rx = radius * jitter(rng);
                let ry = radius * jitter(rng);
                SeedShape::Ellipse { centre, rx, ry }
            }
            SeedPattern::RandomRectangle => {
                // Anything wider than the grid paints the same cells.
                let half_width =
                    ((radius * jitter(rng)).floor() as i64).min(i64::from(dims.width()));
                let half_height =
                    ((radius * jitter(rng)).floor() as i64).min(i64::from(dims.height()));
                SeedShape::Rect {
                    centre: (i64::from(cx), i64::from(cy)),
                    half_width,
                    half_height,
                }
            }
            SeedPattern::RandomCircle | SeedPattern::RandomCircleSmall => {
                let max_scale = if self == SeedPattern::RandomCircle {
                    5.0
                } else {
                    2.0
                };
                let scale = 1.0 + rng.random::<f64>() * (max_scale - 1.0);
                SeedShape::Disks {
                    centres: smallvec![centre],
                    radius: radius * scale,
                }
            }
            SeedPattern::RandomCross => SeedShape::Cross {
                centre,
                arm_length: radius * 20.0,
                arm_width: radius * 0.2,
                angle: rng.random::<f64>() * PI,
            },
            SeedPattern::RandomStripes
            | SeedPattern::RandomThinStripes
            | SeedPattern::RandomThickStripes => {
                let stripe_width = if self == SeedPattern::RandomThinStripes {
                    radius
                } else {
                    radius * 4.0
                };
                SeedShape::Stripes {
                    centre,
                    stripe_width,
                    angle: rng.random::<f64>() * 2.0 * PI,
                }
            }
            SeedPattern::RandomTriangle => {
                let s = radius * jitter(rng);
                let angle = rng.random::<f64>() * 2.0 * PI;
                let h = s * (PI / 3.0).sin();
                let local = [(0.0, -s), (-h, s / 2.0), (h, s / 2.0)];
                SeedShape::Polygon {
                    vertices: rotate_about(&local, angle, centre),
                }
            }
            SeedPattern::RandomSquare => {
                let s = radius * jitter(rng);
                let angle = rng.random::<f64>() * 2.0 * PI;
                let local = [(-s, -s), (s, -s), (s, s), (-s, s)];
                SeedShape::Polygon {
                    vertices: rotate_about(&local, angle, centre),
                }
            }
        }
    }
}

impl fmt::Display for SeedPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SeedPattern {
    type Err = SeedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SeedPattern::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| SeedError::UnknownSeedVariant {
                name: s.to_string(),
            })
    }
}

/// Size multiplier drawn from `[0.5, 1.5)`.
fn jitter<R: Rng>(rng: &mut R) -> f64 {
    0.5 + rng.random::<f64>()
}

/// Rotate `points` by `angle` around the origin, then translate by `centre`.
fn rotate_about(
    points: &[(f64, f64)],
    angle: f64,
    centre: (f64, f64),
) -> SmallVec<[(f64, f64); 4]> {
    let (sin, cos) = angle.sin_cos();
    points
        .iter()
        .map(|&(x, y)| (x * cos - y * sin + centre.0, x * sin + y * cos + centre.1))
        .collect()
}

/// Which side of the directed line `a -> b` the point `p` lies on.
fn edge_sign(p: (f64, f64), a: (f64, f64), b: (f64, f64)) -> f64 {
    (p.0 - b.0) * (a.1 - b.1) - (a.0 - b.0) * (p.1 - b.1)
}

/// A seed shape with all random parameters fixed.
#[derive(Clone, Debug, PartialEq)]
pub enum SeedShape {
    /// Disks sharing one radius; cells with `dx^2 + dy^2 < radius^2` of any
    /// centre are painted.
    Disks {
        /// Disk centres in cell coordinates.
        centres: SmallVec<[(f64, f64); 3]>,
        /// Shared radius.
        radius: f64,
    },
    /// A `side x side` grid of 0.0/1.0 cells, bilinear-upscaled on paint.
    Noise {
        /// Side length of the coarse grid.
        side: usize,
        /// Row-major coarse cells.
        cells: Vec<f32>,
    },
    /// Axis-aligned ellipse, `dx^2/rx^2 + dy^2/ry^2 < 1`.
    Ellipse {
        /// Ellipse centre.
        centre: (f64, f64),
        /// Horizontal radius.
        rx: f64,
        /// Vertical radius.
        ry: f64,
    },
    /// Axis-aligned rectangle covering columns `[cx - hw, cx + hw)` and
    /// rows `[cy - hh, cy + hh)`, clipped to the grid.
    Rect {
        /// Rectangle centre.
        centre: (i64, i64),
        /// Half-width `hw`.
        half_width: i64,
        /// Half-height `hh`.
        half_height: i64,
    },
    /// Two perpendicular bars crossing at `centre`, rotated by `angle`.
    Cross {
        /// Crossing point.
        centre: (f64, f64),
        /// Length of each bar.
        arm_length: f64,
        /// Thickness of each bar.
        arm_width: f64,
        /// Rotation in radians.
        angle: f64,
    },
    /// Alternating bands, painted where `(x_rot / stripe_width) % 2 < 1`.
    ///
    /// The remainder keeps the sign of the dividend, so every cell with a
    /// negative rotated coordinate is painted.
    Stripes {
        /// Origin of the rotated coordinate.
        centre: (f64, f64),
        /// Width of one band.
        stripe_width: f64,
        /// Rotation in radians.
        angle: f64,
    },
    /// Convex polygon filled with a same-side test over every edge.
    Polygon {
        /// Vertices in cell coordinates, in winding order.
        vertices: SmallVec<[(f64, f64); 4]>,
    },
}

impl SeedShape {
    /// Whether the cell at `(x, y)` is inside the shape.
    ///
    /// Always `false` for [`SeedShape::Noise`], which paints graded
    /// values rather than a mask.
    pub fn contains(&self, x: i64, y: i64) -> bool {
        let (px, py) = (x as f64, y as f64);
        match self {
            SeedShape::Disks { centres, radius } => centres.iter().any(|&(cx, cy)| {
                let (dx, dy) = (px - cx, py - cy);
                dx * dx + dy * dy < radius * radius
            }),
            SeedShape::Noise { .. } => false,
            SeedShape::Ellipse { centre, rx, ry } => {
                let (dx, dy) = (px - centre.0, py - centre.1);
                (dx * dx) / (rx * rx) + (dy * dy) / (ry * ry) < 1.0
            }
            SeedShape::Rect {
                centre,
                half_width,
                half_height,
            } => {
                let cols =
                    centre.0.saturating_sub(*half_width)..centre.0.saturating_add(*half_width);
                let rows =
                    centre.1.saturating_sub(*half_height)..centre.1.saturating_add(*half_height);
                cols.contains(&x) && rows.contains(&y)
            }
            SeedShape::Cross {
                centre,
                arm_length,
                arm_width,
                angle,
            } => {
                let (sin, cos) = angle.sin_cos();
                let (dx, dy) = (px - centre.0, py - centre.1);
                let x_rot = (cos * dx + sin * dy).abs();
                let y_rot = (-sin * dx + cos * dy).abs();
                let (half_len, half_wid) = (arm_length / 2.0, arm_width / 2.0);
                (x_rot < half_wid && y_rot < half_len) || (y_rot < half_wid && x_rot < half_len)
            }
            SeedShape::Stripes {
                centre,
                stripe_width,
                angle,
            } => {
                let (sin, cos) = angle.sin_cos();
                let x_rot = cos * (px - centre.0) + sin * (py - centre.1);
                (x_rot / stripe_width) % 2.0 < 1.0
            }
            SeedShape::Polygon { vertices } => {
                let n = vertices.len();
                let (mut has_neg, mut has_pos) = (false, false);
                for i in 0..n {
                    let d = edge_sign((px, py), vertices[i], vertices[(i + 1) % n]);
                    has_neg |= d < 0.0;
                    has_pos |= d > 0.0;
                }
                !(has_neg && has_pos)
            }
        }
    }

    /// Paint the shape into `b`, a row-major field over `dims`.
    ///
    /// Mask shapes set covered cells to 1.0 and leave the rest untouched;
    /// [`SeedShape::Noise`] overwrites every cell.
    ///
    /// # Panics
    ///
    /// Panics if `b.len() != dims.cell_count()`, or for a
    /// [`SeedShape::Noise`] with `side == 0` or `cells.len() != side * side`.
    pub fn paint(&self, dims: GridDims, b: &mut [f32]) {
        assert_eq!(b.len(), dims.cell_count(), "field length");
        let (w, h) = (dims.width() as usize, dims.height() as usize);

        if let SeedShape::Noise { side, cells } = self {
            b.copy_from_slice(&bilinear_upscale(cells, *side, *side, w, h));
            return;
        }

        for (i, v) in b.iter_mut().enumerate() {
            let (x, y) = ((i % w) as i64, (i / w) as i64);
            if self.contains(x, y) {
                *v = 1.0;
            }
        }
    }
}
