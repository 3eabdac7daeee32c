//! Schelling residential-segregation model.
//!
//! A [`SegregationModel`] places agents of two groups on a grid with
//! wrapped edges. Each [`step`](SegregationModel::step) finds every agent
//! whose share of same-group neighbours falls below
//! [`want_similar`](SchellingParams::want_similar) and moves it to a
//! random empty cell. [`segregation`](SegregationModel::segregation) and
//! [`happiness`](SegregationModel::happiness) summarise the current state.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod model;
pub mod occupant;
pub mod params;

pub use model::SegregationModel;
pub use occupant::{Group, Occupant};
pub use params::SchellingParams;
