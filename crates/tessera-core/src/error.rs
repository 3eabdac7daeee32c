//! Error types for the Tessera engines.
//!
//! Organized by subsystem: construction-time configuration and
//! reaction-diffusion seeding. Stepping an engine never fails.

use std::error::Error;
use std::fmt;

/// Errors detected while validating a grid or engine configuration.
///
/// Raised at construction only; a rejected configuration leaves no
/// partially built engine behind.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Width or height is zero.
    EmptyGrid,
    /// A dimension (or the cell count derived from them) is too large
    /// to address.
    DimensionTooLarge {
        /// Which dimension overflowed.
        name: &'static str,
        /// The offending value.
        value: u64,
        /// The largest accepted value.
        max: u64,
    },
    /// A numeric parameter is non-finite or outside its domain.
    InvalidParameter {
        /// Parameter name as it appears in the params struct.
        name: &'static str,
        /// The rejected value.
        value: f64,
        /// Description of the accepted domain.
        reason: &'static str,
    },
    /// An edge behavior name was not recognised.
    UnknownEdgeBehavior {
        /// The unrecognised name.
        name: String,
    },
    /// A fixed agent layout does not cover the grid exactly.
    LayoutMismatch {
        /// Cells in the grid.
        expected: usize,
        /// Cells in the supplied layout.
        actual: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "grid must have at least one cell"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} = {value} exceeds maximum {max}")
            }
            Self::InvalidParameter {
                name,
                value,
                reason,
            } => write!(f, "invalid parameter {name} = {value}: {reason}"),
            Self::UnknownEdgeBehavior { name } => {
                write!(f, "unknown edge behavior '{name}'")
            }
            Self::LayoutMismatch { expected, actual } => {
                write!(f, "layout has {actual} cells, grid has {expected}")
            }
        }
    }
}

impl Error for ConfigError {}

impl ConfigError {
    /// Check that `value` is finite and `>= 0`.
    pub fn check_non_negative(name: &'static str, value: f64) -> Result<(), Self> {
        if !value.is_finite() || value < 0.0 {
            return Err(Self::InvalidParameter {
                name,
                value,
                reason: "must be finite and >= 0",
            });
        }
        Ok(())
    }

    /// Check that `value` lies in the closed unit interval.
    pub fn check_unit_interval(name: &'static str, value: f64) -> Result<(), Self> {
        if !(0.0..=1.0).contains(&value) {
            return Err(Self::InvalidParameter {
                name,
                value,
                reason: "must be in [0, 1]",
            });
        }
        Ok(())
    }
}

/// Errors from seeding a reaction-diffusion field.
#[derive(Clone, Debug, PartialEq)]
pub enum SeedError {
    /// The seed pattern name is not one of the known variants.
    ///
    /// The engine has already been reset when this is returned: `A` is
    /// all 1.0 and `B` all 0.0, with no seed painted.
    UnknownSeedVariant {
        /// The unrecognised name.
        name: String,
    },
    /// The seed radius is non-finite or not strictly positive.
    /// The fields are left untouched.
    InvalidRadius {
        /// The rejected radius.
        radius: f64,
    },
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownSeedVariant { name } => write!(f, "unknown seed variant '{name}'"),
            Self::InvalidRadius { radius } => {
                write!(f, "seed radius must be finite and > 0, got {radius}")
            }
        }
    }
}

impl Error for SeedError {}
