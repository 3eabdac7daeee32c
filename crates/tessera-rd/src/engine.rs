//! The double-buffered reaction-diffusion engine.

use crate::kernel::laplacian_at;
use crate::params::RdParams;
use crate::seed::{SeedPattern, SeedShape};
use log::{debug, trace, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use tessera_core::{ConfigError, GridDims, SeedError, Simulation, StepOutcome};

/// Gray-Scott reaction-diffusion over a fixed grid.
///
/// Holds the published `A`/`B` pair plus a preallocated staging pair.
/// [`step`](Self::step) computes the whole next generation into staging
/// from published values only, then swaps the two pairs, so callers never
/// observe a half-updated field and no buffer is allocated per step.
///
/// All randomness (seed jitter, rotation, noise) comes from a ChaCha8 RNG
/// seeded at construction; two engines built with the same seed and
/// driven identically produce identical fields.
///
/// # Examples
///
/// ```
/// use tessera_rd::{RdParams, ReactionDiffusion, SeedPattern};
///
/// let mut rd = ReactionDiffusion::new(32, 32, RdParams::default(), 42).unwrap();
/// rd.initialize(SeedPattern::Circle, 4.0).unwrap();
/// for _ in 0..10 {
///     rd.step();
/// }
/// assert!(rd.b_state().iter().all(|&b| (0.0..=1.0).contains(&b)));
/// ```
#[derive(Clone, Debug)]
pub struct ReactionDiffusion {
    dims: GridDims,
    params: RdParams,
    a: Vec<f32>,
    b: Vec<f32>,
    /// Staging buffers, overwritten in full by every step.
    next_a: Vec<f32>,
    next_b: Vec<f32>,
    rng: ChaCha8Rng,
    generation: u64,
}

impl ReactionDiffusion {
    /// Create an engine with `A = 1.0` and `B = 0.0` everywhere.
    ///
    /// `rng_seed` seeds every random draw the engine makes.
    ///
    /// # Errors
    ///
    /// Returns `Err` if either dimension is zero or too large, or if any
    /// rate in `params` is negative or non-finite.
    pub fn new(
        width: u32,
        height: u32,
        params: RdParams,
        rng_seed: u64,
    ) -> Result<Self, ConfigError> {
        let dims = GridDims::new(width, height)?;
        params.validate()?;
        let n = dims.cell_count();
        debug!(
            "reaction-diffusion {width}x{height}: d_a={} d_b={} f={} k={} pad={}",
            params.d_a, params.d_b, params.feed, params.kill, params.pad_mode
        );
        Ok(Self {
            dims,
            params,
            a: vec![1.0; n],
            b: vec![0.0; n],
            next_a: vec![0.0; n],
            next_b: vec![0.0; n],
            rng: ChaCha8Rng::seed_from_u64(rng_seed),
            generation: 0,
        })
    }

    /// Grid dimensions.
    pub fn dims(&self) -> GridDims {
        self.dims
    }

    /// The parameters fixed at construction.
    pub fn params(&self) -> &RdParams {
        &self.params
    }

    /// Steps taken since the last (re)initialization.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Current `A` field, row-major.
    pub fn a_state(&self) -> &[f32] {
        &self.a
    }

    /// Current `B` field, row-major. This is what a renderer draws.
    pub fn b_state(&self) -> &[f32] {
        &self.b
    }

    fn reset(&mut self) {
        self.a.fill(1.0);
        self.b.fill(0.0);
        self.generation = 0;
    }

    /// Reset both fields and paint a `B` seed of the given pattern.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::InvalidRadius`] if `seed_radius` is not a
    /// finite positive number; the fields are left untouched.
    pub fn initialize(
        &mut self,
        pattern: SeedPattern,
        seed_radius: f64,
    ) -> Result<(), SeedError> {
        if !seed_radius.is_finite() || seed_radius <= 0.0 {
            return Err(SeedError::InvalidRadius {
                radius: seed_radius,
            });
        }
        let shape = pattern.resolve(self.dims, seed_radius, &mut self.rng);
        debug!("seeding {pattern} with radius {seed_radius}");
        self.initialize_with(&shape);
        Ok(())
    }

    /// Like [`initialize`](Self::initialize), taking the pattern by name.
    ///
    /// # Errors
    ///
    /// An unknown name resets the fields without painting a seed and
    /// returns [`SeedError::UnknownSeedVariant`].
    pub fn initialize_named(&mut self, name: &str, seed_radius: f64) -> Result<(), SeedError> {
        match name.parse::<SeedPattern>() {
            Ok(pattern) => self.initialize(pattern, seed_radius),
            Err(err) => {
                warn!("unknown seed variant '{name}'; field left unseeded");
                self.reset();
                Err(err)
            }
        }
    }

    /// Reset both fields and paint an already-resolved shape.
    ///
    /// # Panics
    ///
    /// Panics if `shape` is a hand-built [`SeedShape::Noise`] whose
    /// `cells` is not `side * side` long, or whose `side` is 0. Shapes
    /// from [`SeedPattern::resolve`] always satisfy this.
    pub fn initialize_with(&mut self, shape: &SeedShape) {
        self.reset();
        shape.paint(self.dims, &mut self.b);
    }

    /// Replace both fields wholesale.
    ///
    /// Values are clamped into `[0, 1]` on load.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::LayoutMismatch`] if either slice is not
    /// exactly one value per cell, and [`ConfigError::InvalidParameter`]
    /// if any value is NaN or infinite. Both fields are left untouched on
    /// error.
    pub fn load_state(&mut self, a: &[f32], b: &[f32]) -> Result<(), ConfigError> {
        let expected = self.dims.cell_count();
        for actual in [a.len(), b.len()] {
            if actual != expected {
                return Err(ConfigError::LayoutMismatch { expected, actual });
            }
        }
        for (name, field) in [("a", a), ("b", b)] {
            if let Some(&bad) = field.iter().find(|v| !v.is_finite()) {
                return Err(ConfigError::InvalidParameter {
                    name,
                    value: f64::from(bad),
                    reason: "field values must be finite",
                });
            }
        }
        for (dst, &src) in self.a.iter_mut().zip(a) {
            *dst = src.clamp(0.0, 1.0);
        }
        for (dst, &src) in self.b.iter_mut().zip(b) {
            *dst = src.clamp(0.0, 1.0);
        }
        self.generation = 0;
        Ok(())
    }

    /// Advance both fields by one Gray-Scott step.
    pub fn step(&mut self) {
        let dims = self.dims;
        let RdParams {
            d_a,
            d_b,
            feed,
            kill,
            pad_mode,
        } = self.params;
        let width = dims.width() as usize;
        let (a, b) = (&self.a, &self.b);

        self.next_a
            .par_chunks_mut(width)
            .zip(self.next_b.par_chunks_mut(width))
            .enumerate()
            .for_each(|(y, (row_a, row_b))| {
                let y = y as u32;
                for (x, (out_a, out_b)) in row_a.iter_mut().zip(row_b.iter_mut()).enumerate() {
                    let x = x as u32;
                    let i = dims.index(x, y);
                    let av = f64::from(a[i]);
                    let bv = f64::from(b[i]);
                    let lap_a = laplacian_at(a, dims, x, y, pad_mode);
                    let lap_b = laplacian_at(b, dims, x, y, pad_mode);
                    let reaction = av * bv * bv;

                    let na = av + d_a * lap_a - reaction + feed * (1.0 - av);
                    let nb = bv + d_b * lap_b + reaction - (kill + feed) * bv;
                    *out_a = na.clamp(0.0, 1.0) as f32;
                    *out_b = nb.clamp(0.0, 1.0) as f32;
                }
            });

        std::mem::swap(&mut self.a, &mut self.next_a);
        std::mem::swap(&mut self.b, &mut self.next_b);
        self.generation += 1;
        trace!("reaction-diffusion generation {}", self.generation);
    }
}

impl Simulation for ReactionDiffusion {
    type Cell = f32;

    fn dims(&self) -> GridDims {
        self.dims
    }

    fn advance(&mut self) -> StepOutcome {
        self.step();
        StepOutcome::Running
    }

    fn cells(&self) -> &[f32] {
        self.b_state()
    }
}
