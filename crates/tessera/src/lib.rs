//! Tessera: cellular-grid simulation engines for a frame-driven renderer.
//!
//! This is the top-level facade crate that re-exports the public API of
//! the Tessera sub-crates. A caller holds one engine, calls `step()` once
//! per frame and reads a state slice back to rasterize.
//!
//! # Quick start
//!
//! ```rust
//! use tessera::prelude::*;
//!
//! let mut rd = ReactionDiffusion::new(64, 64, RdParams::CORAL, 42).unwrap();
//! rd.initialize(SeedPattern::Triple, DEFAULT_SEED_RADIUS).unwrap();
//! assert_eq!(run_for(&mut rd, 20), 20);
//! assert_eq!(rd.b_state().len(), 64 * 64);
//!
//! let mut model = SegregationModel::new(32, 32, SchellingParams::default(), 42).unwrap();
//! let steps = run_for(&mut model, 100);
//! assert!(steps >= 1 && steps <= 100);
//! assert!((0.0..=1.0).contains(&model.happiness()));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessera-core` | Grid addressing, edge behavior, errors, the `Simulation` trait |
//! | [`rd`] | `tessera-rd` | Gray-Scott engine, Laplacian kernel, seed patterns |
//! | [`schelling`] | `tessera-schelling` | Segregation model and its cell types |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid addressing, errors and the driver trait (`tessera-core`).
///
/// Both engines report construction problems as [`types::ConfigError`]
/// and can be stepped generically through [`types::Simulation`].
pub use tessera_core as types;

/// Gray-Scott reaction-diffusion (`tessera-rd`).
///
/// [`rd::ReactionDiffusion`] is the engine; [`rd::SeedPattern`] lists the
/// initial `B` patterns.
pub use tessera_rd as rd;

/// Schelling segregation (`tessera-schelling`).
pub use tessera_schelling as schelling;

/// Common imports for typical Tessera usage.
///
/// ```rust
/// use tessera::prelude::*;
/// ```
pub mod prelude {
    // Core
    pub use tessera_core::{
        run_for, ConfigError, EdgeBehavior, GridDims, SeedError, Simulation, StepOutcome,
    };

    // Reaction-diffusion
    pub use tessera_rd::{RdParams, ReactionDiffusion, SeedPattern, DEFAULT_SEED_RADIUS};

    // Segregation
    pub use tessera_schelling::{Group, Occupant, SchellingParams, SegregationModel};
}
