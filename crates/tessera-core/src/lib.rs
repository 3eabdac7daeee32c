//! Core types and traits for the Tessera simulation engines.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the pieces shared by the reaction-diffusion and segregation engines:
//! grid dimensions and row-major addressing, edge (boundary) behavior,
//! the error types, and the [`Simulation`] trait through which an
//! external driver steps an engine and reads its state back.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod edge;
pub mod error;
pub mod grid;
pub mod traits;

pub use edge::EdgeBehavior;
pub use error::{ConfigError, SeedError};
pub use grid::{resolve_axis, GridDims, MOORE_OFFSETS};
pub use traits::{run_for, Simulation, StepOutcome};
