//! Gray-Scott reaction-diffusion engine.
//!
//! [`ReactionDiffusion`] owns two concentration fields over a fixed grid:
//! `A` (substrate, starts at 1.0) and `B` (activator, starts at 0.0). Each
//! [`step`](ReactionDiffusion::step) applies a 3x3 Laplacian stencil under
//! the configured [`EdgeBehavior`](tessera_core::EdgeBehavior) and the
//! Gray-Scott reaction terms, clamping both fields to `[0, 1]`.
//!
//! # Seeding
//!
//! The uniform start state is a fixed point of the update, so callers
//! paint a `B` seed with [`initialize`](ReactionDiffusion::initialize)
//! before stepping. [`SeedPattern`] names the available shapes; each
//! resolves (drawing its random parameters from the engine's RNG) to a
//! concrete [`SeedShape`] that is then rasterized.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod engine;
pub mod interp;
pub mod kernel;
pub mod params;
pub mod seed;

pub use engine::ReactionDiffusion;
pub use interp::bilinear_upscale;
pub use kernel::{laplacian, laplacian_at, LAPLACIAN_KERNEL};
pub use params::RdParams;
pub use seed::{SeedPattern, SeedShape, DEFAULT_SEED_RADIUS};
